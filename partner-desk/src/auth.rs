//! Login and signup flows
//!
//! The server signals login failure by a well-known message string rather
//! than a status code; any other reply counts as success. That contract is
//! preserved here as-is.

use partner_client::{ClientError, PartnerApi};
use shared::client::RegisterRequest;
use shared::models::Partner;

use crate::error::DeskResult;
use crate::notice::NoticeSink;
use crate::route::Route;
use crate::store::{self, LocalStore};

/// Reply message identifying a rejected login
pub const INVALID_LOGIN_MESSAGE: &str = "Invalid phone number or password";

/// Reply message identifying a successful registration
pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration successful";

/// Result of a login attempt that reached the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Token stored, navigate to the given page
    LoggedIn(Route),
    /// Credentials rejected; nothing stored
    Rejected,
}

/// Result of a signup attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    /// Account created, navigate to the given page
    Registered(Route),
    /// Validation or server rejection; stay on the form
    Rejected,
}

/// Submit credentials and, on success, persist the token and minimal
/// identity in the local store
pub async fn login(
    api: &dyn PartnerApi,
    store: &mut LocalStore,
    notices: &NoticeSink,
    phone_number: &str,
    password: &str,
) -> DeskResult<LoginOutcome> {
    let reply = match api.login(phone_number, password).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!(error = %e, "Login request failed");
            notices.error("Error logging in");
            return Err(e.into());
        }
    };

    if reply.message.as_deref() == Some(INVALID_LOGIN_MESSAGE) {
        notices.error(INVALID_LOGIN_MESSAGE);
        return Ok(LoginOutcome::Rejected);
    }

    let token = reply
        .token
        .ok_or_else(|| ClientError::InvalidResponse("Missing login token".to_string()))?;
    store.set(store::KEY_TOKEN_ACTI, token)?;

    if let Some(identity) = reply.data {
        store.set(store::KEY_PARTNER_ID, identity.id.clone())?;
        store.set_user(&Partner::from(identity))?;
    }

    Ok(LoginOutcome::LoggedIn(Route::Dashboard))
}

/// Signup form state
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub business_name: String,
    pub owner_name: String,
    pub email: String,
    pub phone_number: String,
    pub category: String,
    pub address: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// All fields are required
    fn has_empty_field(&self) -> bool {
        [
            &self.business_name,
            &self.owner_name,
            &self.email,
            &self.phone_number,
            &self.category,
            &self.address,
            &self.password,
            &self.confirm_password,
        ]
        .iter()
        .any(|field| field.is_empty())
    }

    fn to_request(&self) -> RegisterRequest {
        RegisterRequest::partner(
            &self.business_name,
            &self.owner_name,
            &self.email,
            &self.phone_number,
            &self.password,
        )
    }
}

/// Validate the form client-side, then submit the registration
pub async fn signup(
    api: &dyn PartnerApi,
    notices: &NoticeSink,
    form: &SignupForm,
) -> DeskResult<SignupOutcome> {
    if form.has_empty_field() {
        notices.error("Please fill all the fields");
        return Ok(SignupOutcome::Rejected);
    }
    if form.password != form.confirm_password {
        notices.error("Password and Confirm Password should be same");
        return Ok(SignupOutcome::Rejected);
    }

    let reply = match api.register(&form.to_request()).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!(error = %e, "Registration request failed");
            notices.error("Error signing up");
            return Err(e.into());
        }
    };

    if reply.message.as_deref() == Some(REGISTRATION_SUCCESS_MESSAGE) {
        notices.success("Sign up successful");
        Ok(SignupOutcome::Registered(Route::Login))
    } else {
        notices.error(reply.error.unwrap_or_else(|| "Registration failed".to_string()));
        Ok(SignupOutcome::Rejected)
    }
}
