//! Dashboard shell - tab navigation and mount state
//!
//! The shell guards the dashboard behind the stored token, restores the
//! partner identity from the local store and fetches the public activity
//! catalog for the home panel. Panel content itself lives in the dish and
//! booking managers.

use partner_client::PartnerApi;
use shared::models::{Activity, Partner};

use crate::route::Route;
use crate::store::{self, LocalStore};

/// Dashboard navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Home,
    Dishes,
    Bookings,
    /// Nav entry present but without content yet
    Reviews,
    /// Nav entry present but without content yet
    Payments,
}

/// Dashboard shell state
#[derive(Debug, Default)]
pub struct Shell {
    active: Panel,
    partner: Option<Partner>,
    activities: Vec<Activity>,
}

impl Shell {
    /// Mount the shell from the local store
    ///
    /// Without a stored token the caller must redirect to the login page.
    /// A malformed stored profile leaves the identity unset.
    pub fn mount(store: &LocalStore) -> Result<Self, Route> {
        if store.get(store::KEY_TOKEN_ACTI).is_none() {
            return Err(Route::Login);
        }

        Ok(Self {
            active: Panel::Home,
            partner: store.user(),
            activities: Vec::new(),
        })
    }

    /// Currently active tab
    pub fn active(&self) -> Panel {
        self.active
    }

    /// Switch the active tab
    pub fn set_active(&mut self, panel: Panel) {
        self.active = panel;
    }

    /// Restored partner identity, if any
    pub fn partner(&self) -> Option<&Partner> {
        self.partner.as_ref()
    }

    /// Name shown in the header; the original renders a placeholder until
    /// the identity is known
    pub fn partner_name(&self) -> &str {
        self.partner.as_ref().map_or("Loading...", |p| p.name.as_str())
    }

    /// Activity catalog for the home panel
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Fetch the public activity catalog; failures are logged and leave the
    /// current catalog untouched
    pub async fn load_activities(&mut self, api: &dyn PartnerApi) {
        match api.list_activities().await {
            Ok(activities) => self.activities = activities,
            Err(e) => tracing::error!(error = %e, "Failed to fetch activity catalog"),
        }
    }
}
