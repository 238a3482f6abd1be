//! HTTP client for network-based API calls

use crate::{ApiEnvelope, ClientConfig, ClientError, ClientResult, LoginReply, RegisterReply};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::client::{LoginRequest, RegisterRequest};
use shared::models::{Activity, Booking, BookingStatus, Dish, DishCreate, DishUpdate};
use shared::response::DishListReply;

/// HTTP client for making network requests to the fourtrip server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build the full URL for an API path
    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.put(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            tracing::warn!(%status, body = %text, "Request failed");
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(Into::into)
    }
}

#[async_trait::async_trait]
impl crate::PartnerApi for HttpClient {
    // ========== Auth API ==========

    /// Login with phone number and password
    ///
    /// The server answers 200 for both outcomes; success and failure are
    /// distinguished by the reply payload, not the status code.
    async fn login(&self, phone_number: &str, password: &str) -> ClientResult<LoginReply> {
        let request = LoginRequest {
            phone_number: phone_number.to_string(),
            password: password.to_string(),
        };

        self.post("api/commonauth/login", &request).await
    }

    /// Register a new partner account
    async fn register(&self, request: &RegisterRequest) -> ClientResult<RegisterReply> {
        self.post("api/commonauth/register", request).await
    }

    // ========== Dishes API ==========

    /// Fetch the dish collection for the authenticated partner
    async fn list_dishes(&self) -> ClientResult<Vec<Dish>> {
        let reply: DishListReply = self.get("api/dishes").await?;
        reply
            .into_dishes()
            .ok_or_else(|| ClientError::InvalidResponse("Missing dish data".to_string()))
    }

    /// Create a dish
    async fn create_dish(&self, payload: &DishCreate) -> ClientResult<ApiEnvelope<Dish>> {
        self.post("api/dishes", payload).await
    }

    /// Update a dish (full edit, availability patch or soft delete)
    async fn update_dish(&self, id: &str, patch: &DishUpdate) -> ClientResult<ApiEnvelope<Dish>> {
        self.put(&format!("api/dishes/{}", id), patch).await
    }

    // ========== Bookings API ==========

    /// Fetch the booking collection
    async fn list_bookings(&self) -> ClientResult<Vec<Booking>> {
        self.get("api/managebooking").await
    }

    /// Persist a booking status change
    async fn update_booking_status(
        &self,
        id: &str,
        status: BookingStatus,
    ) -> ClientResult<ApiEnvelope<serde_json::Value>> {
        #[derive(serde::Serialize)]
        struct StatusPatch {
            status: BookingStatus,
        }

        self.put(&format!("api/managebooking/{}", id), &StatusPatch { status })
            .await
    }

    // ========== Activities API ==========

    /// Fetch the public activity catalog
    async fn list_activities(&self) -> ClientResult<Vec<Activity>> {
        let reply: ApiEnvelope<Vec<Activity>> = self.get("api/activity").await?;
        reply
            .into_data()
            .ok_or_else(|| ClientError::InvalidResponse("Missing activity data".to_string()))
    }
}
