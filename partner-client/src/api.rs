//! API seam for the dashboard managers
//!
//! The managers in `partner-desk` are generic over this trait so tests can
//! drive them with a programmable double instead of a live server.

use async_trait::async_trait;
use shared::client::{LoginReply, RegisterReply, RegisterRequest};
use shared::models::{Activity, Booking, BookingStatus, Dish, DishCreate, DishUpdate};
use shared::response::ApiEnvelope;

use crate::error::ClientResult;

/// Typed operations of the partner-facing API
#[async_trait]
pub trait PartnerApi: Send + Sync {
    /// `POST /api/commonauth/login`
    async fn login(&self, phone_number: &str, password: &str) -> ClientResult<LoginReply>;

    /// `POST /api/commonauth/register`
    async fn register(&self, request: &RegisterRequest) -> ClientResult<RegisterReply>;

    /// `GET /api/dishes`
    async fn list_dishes(&self) -> ClientResult<Vec<Dish>>;

    /// `POST /api/dishes`
    async fn create_dish(&self, payload: &DishCreate) -> ClientResult<ApiEnvelope<Dish>>;

    /// `PUT /api/dishes/:id`
    async fn update_dish(&self, id: &str, patch: &DishUpdate) -> ClientResult<ApiEnvelope<Dish>>;

    /// `GET /api/managebooking`
    async fn list_bookings(&self) -> ClientResult<Vec<Booking>>;

    /// `PUT /api/managebooking/:id`
    async fn update_booking_status(
        &self,
        id: &str,
        status: BookingStatus,
    ) -> ClientResult<ApiEnvelope<serde_json::Value>>;

    /// `GET /api/activity` (public)
    async fn list_activities(&self) -> ClientResult<Vec<Activity>>;
}
