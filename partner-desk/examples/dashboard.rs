//! Runnable walkthrough of the dashboard core against a live server.
//!
//! Environment:
//!   PARTNER_API_URL   - base URL override (defaults to the platform URL)
//!   PARTNER_PHONE     - login phone number
//!   PARTNER_PASSWORD  - login password
//!
//! ```bash
//! PARTNER_PHONE=9876543210 PARTNER_PASSWORD=... cargo run -p partner-desk --example dashboard
//! ```

use partner_client::ClientConfig;
use partner_desk::{auth, store, BookingsManager, DishManager, LocalStore, LoginOutcome, NoticeSink, Shell};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let phone = std::env::var("PARTNER_PHONE")?;
    let password = std::env::var("PARTNER_PASSWORD")?;

    let data_dir = std::env::temp_dir().join("partner-desk-demo");
    let mut local = LocalStore::load(&data_dir)?;

    let config = ClientConfig::from_env();
    let client = config.build_http_client()?;
    let (sink, mut notices) = NoticeSink::channel();

    match auth::login(&client, &mut local, &sink, &phone, &password).await? {
        LoginOutcome::LoggedIn(route) => tracing::info!(route = route.path(), "Logged in"),
        LoginOutcome::Rejected => {
            tracing::error!("Login rejected");
            return Ok(());
        }
    }

    // Each panel authenticates with its own vertical's token.
    let acti_client = match local.get(store::KEY_TOKEN_ACTI) {
        Some(token) => config.clone().with_token(token).build_http_client()?,
        None => client.clone(),
    };
    let rest_client = match local.get(store::KEY_TOKEN_REST) {
        Some(token) => config.clone().with_token(token).build_http_client()?,
        None => acti_client.clone(),
    };

    let mut shell = Shell::mount(&local).map_err(|route| {
        format!("Not authenticated, redirect to {}", route.path())
    })?;
    shell.load_activities(&acti_client).await;
    tracing::info!(
        partner = shell.partner_name(),
        activities = shell.activities().len(),
        "Dashboard mounted"
    );

    let mut dishes = DishManager::new(sink.clone());
    dishes.refresh(&rest_client).await;
    for dish in dishes.visible() {
        println!(
            "dish {:40} {:>8.2} available={}",
            dish.name, dish.price, dish.availability
        );
    }

    let mut bookings = BookingsManager::new(sink.clone());
    bookings.refresh(&acti_client).await;
    for booking in bookings.visible() {
        println!(
            "booking {} {:30} {:20} {}",
            booking.short_id(),
            booking.created_by.business_name,
            booking.activity.title,
            booking.status.label()
        );
    }

    while let Ok(notice) = notices.try_recv() {
        println!("[{:?}] {}", notice.level, notice.message);
    }

    Ok(())
}
