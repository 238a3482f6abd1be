//! Partner Desk - dashboard core for the partner platform
//!
//! State-synchronization layer between the rendered dashboard and the
//! fourtrip server: durable local store, routing, auth flows, the dashboard
//! shell and the dish/booking panel managers. Rendering itself lives
//! elsewhere; every panel exposes a `visible()` projection of what a view
//! would draw.

pub mod auth;
pub mod bookings;
pub mod dishes;
pub mod error;
pub mod notice;
pub mod route;
pub mod shell;
pub mod store;

pub use auth::{LoginOutcome, SignupForm, SignupOutcome};
pub use bookings::BookingsManager;
pub use dishes::DishManager;
pub use error::DeskError;
pub use notice::{Notice, NoticeLevel, NoticeSink};
pub use route::Route;
pub use shell::{Panel, Shell};
pub use store::{LocalStore, StoreError};
