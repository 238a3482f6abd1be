//! BookingsManager - bookings panel state synchronization
//!
//! Read-mostly list with one mutation: the status change. Unlike the dish
//! panel this one is mutate-after-confirm: the persistence request goes out
//! first and local state changes only when the server reports success.

use chrono::NaiveDate;
use partner_client::PartnerApi;
use shared::models::{Booking, BookingStatus};

use crate::notice::NoticeSink;

/// Bookings panel state
#[derive(Debug)]
pub struct BookingsManager {
    bookings: Vec<Booking>,
    search: String,
    selected_date: Option<NaiveDate>,
    loading: bool,
    notices: NoticeSink,
}

impl BookingsManager {
    pub fn new(notices: NoticeSink) -> Self {
        Self {
            bookings: Vec::new(),
            search: String::new(),
            selected_date: None,
            loading: true,
            notices,
        }
    }

    /// Whole list as last synced, server order
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn set_selected_date(&mut self, date: Option<NaiveDate>) {
        self.selected_date = date;
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    /// Fetch the booking collection once on mount; failures are logged and
    /// leave the list untouched
    pub async fn refresh(&mut self, api: &dyn PartnerApi) {
        match api.list_bookings().await {
            Ok(bookings) => self.bookings = bookings,
            Err(e) => tracing::error!(error = %e, "Failed to fetch bookings"),
        }
        self.loading = false;
    }

    /// Change a booking's status, mutate-after-confirm
    ///
    /// The local record changes only when the server reports success;
    /// otherwise an error notice is raised and local state stays untouched.
    pub async fn set_status(&mut self, api: &dyn PartnerApi, id: &str, status: BookingStatus) {
        match api.update_booking_status(id, status).await {
            Ok(env) if env.success => {
                if let Some(booking) = self.bookings.iter_mut().find(|b| b.id == id) {
                    booking.status = status;
                }
                self.notices.success("Booking status updated successfully");
            }
            Ok(_) => self.notices.error("Failed to update booking status"),
            Err(e) => {
                tracing::error!(booking = id, error = %e, "Failed to update booking status");
                self.notices.error("Error updating booking status");
            }
        }
    }

    /// Rows the panel renders: non-deleted bookings matching the search
    /// query (customer business name, phone, email or activity title) and,
    /// when a date is selected, booked on that local calendar day
    pub fn visible(&self) -> Vec<&Booking> {
        let term = self.search.to_lowercase();
        self.bookings
            .iter()
            .filter(|booking| !booking.is_deleted)
            .filter(|booking| {
                term.is_empty()
                    || booking.created_by.business_name.to_lowercase().contains(&term)
                    || booking.created_by.phone_number.contains(&term)
                    || booking.created_by.email.to_lowercase().contains(&term)
                    || booking.activity.title.to_lowercase().contains(&term)
            })
            .filter(|booking| match self.selected_date {
                Some(date) => booking.booked_local_day() == Some(date),
                None => true,
            })
            .collect()
    }
}
