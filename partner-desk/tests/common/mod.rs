//! Programmable PartnerApi double for manager tests
#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use partner_client::{ClientError, ClientResult, PartnerApi};
use shared::client::{LoginReply, RegisterReply, RegisterRequest};
use shared::models::{Activity, Booking, BookingCustomer, BookingStatus, Dish, DishCreate, DishUpdate};
use shared::response::ApiEnvelope;

/// How the mock answers booking status updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingUpdateBehavior {
    /// `{success: true}` and the server copy is mutated
    Confirm,
    /// `{success: false}`
    Reject,
    /// Transport error
    Fail,
}

#[derive(Debug)]
pub struct MockState {
    pub dishes: Vec<Dish>,
    pub bookings: Vec<Booking>,
    pub activities: Vec<Activity>,
    pub login_reply: LoginReply,
    pub register_reply: RegisterReply,
    /// Transport error on login/register
    pub fail_auth: bool,
    /// Transport error on dish writes (create/update/toggle/delete)
    pub fail_dish_writes: bool,
    /// `{success: false}` envelopes on dish writes
    pub reject_dish_writes: bool,
    pub booking_update: BookingUpdateBehavior,
    pub calls: Vec<String>,
    next_id: u32,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            dishes: Vec::new(),
            bookings: Vec::new(),
            activities: Vec::new(),
            login_reply: LoginReply {
                token: None,
                data: None,
                message: Some("Invalid phone number or password".to_string()),
            },
            register_reply: RegisterReply {
                message: Some("Registration successful".to_string()),
                error: None,
            },
            fail_auth: false,
            fail_dish_writes: false,
            reject_dish_writes: false,
            booking_update: BookingUpdateBehavior::Confirm,
            calls: Vec::new(),
            next_id: 1,
        }
    }
}

/// Server double backed by in-memory state
#[derive(Debug, Default)]
pub struct MockApi {
    pub state: Mutex<MockState>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<F: FnOnce(&mut MockState)>(self, f: F) -> Self {
        f(&mut self.state.lock().unwrap());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn server_dish(&self, id: &str) -> Option<Dish> {
        self.state.lock().unwrap().dishes.iter().find(|d| d.id == id).cloned()
    }

    pub fn server_booking(&self, id: &str) -> Option<Booking> {
        self.state
            .lock()
            .unwrap()
            .bookings
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }
}

fn apply_patch(dish: &mut Dish, patch: &DishUpdate) {
    if let Some(v) = &patch.name {
        dish.name = v.clone();
    }
    if let Some(v) = &patch.description {
        dish.description = v.clone();
    }
    if let Some(v) = &patch.category {
        dish.category = v.clone();
    }
    if let Some(v) = patch.price {
        dish.price = v;
    }
    if let Some(v) = patch.discounted_price {
        dish.discounted_price = v;
    }
    if let Some(v) = &patch.image {
        dish.image = v.clone();
    }
    if let Some(v) = patch.availability {
        dish.availability = v;
    }
    if let Some(v) = patch.is_deleted {
        dish.is_deleted = v;
    }
}

#[async_trait]
impl PartnerApi for MockApi {
    async fn login(&self, _phone_number: &str, _password: &str) -> ClientResult<LoginReply> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("login".to_string());
        if state.fail_auth {
            return Err(ClientError::Internal("connection reset".to_string()));
        }
        Ok(state.login_reply.clone())
    }

    async fn register(&self, _request: &RegisterRequest) -> ClientResult<RegisterReply> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("register".to_string());
        if state.fail_auth {
            return Err(ClientError::Internal("connection reset".to_string()));
        }
        Ok(state.register_reply.clone())
    }

    async fn list_dishes(&self) -> ClientResult<Vec<Dish>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("list_dishes".to_string());
        Ok(state.dishes.clone())
    }

    async fn create_dish(&self, payload: &DishCreate) -> ClientResult<ApiEnvelope<Dish>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("create_dish".to_string());

        if state.fail_dish_writes {
            return Err(ClientError::Internal("connection reset".to_string()));
        }
        if state.reject_dish_writes {
            return Ok(ApiEnvelope::err("rejected"));
        }

        let dish = Dish {
            id: format!("dish-{}", state.next_id),
            name: payload.name.clone(),
            description: payload.description.clone(),
            category: payload.category.clone(),
            price: payload.price,
            discounted_price: payload.discounted_price,
            image: payload.image.clone(),
            availability: true,
            is_deleted: false,
        };
        state.next_id += 1;
        state.dishes.push(dish.clone());
        Ok(ApiEnvelope::ok(dish))
    }

    async fn update_dish(&self, id: &str, patch: &DishUpdate) -> ClientResult<ApiEnvelope<Dish>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("update_dish:{id}"));

        if state.fail_dish_writes {
            return Err(ClientError::Internal("connection reset".to_string()));
        }
        if state.reject_dish_writes {
            return Ok(ApiEnvelope::err("rejected"));
        }

        match state.dishes.iter_mut().find(|d| d.id == id) {
            Some(dish) => {
                apply_patch(dish, patch);
                let updated = dish.clone();
                Ok(ApiEnvelope::ok(updated))
            }
            None => Ok(ApiEnvelope::err("not found")),
        }
    }

    async fn list_bookings(&self) -> ClientResult<Vec<Booking>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("list_bookings".to_string());
        Ok(state.bookings.clone())
    }

    async fn update_booking_status(
        &self,
        id: &str,
        status: BookingStatus,
    ) -> ClientResult<ApiEnvelope<serde_json::Value>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("update_booking_status:{id}"));

        match state.booking_update {
            BookingUpdateBehavior::Confirm => {
                if let Some(booking) = state.bookings.iter_mut().find(|b| b.id == id) {
                    booking.status = status;
                }
                Ok(ApiEnvelope::ok(serde_json::Value::Null))
            }
            BookingUpdateBehavior::Reject => Ok(ApiEnvelope::err("update failed")),
            BookingUpdateBehavior::Fail => {
                Err(ClientError::Internal("connection reset".to_string()))
            }
        }
    }

    async fn list_activities(&self) -> ClientResult<Vec<Activity>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("list_activities".to_string());
        Ok(state.activities.clone())
    }
}

// ============ Fixtures ============

pub fn dish(id: &str, name: &str, price: f64, availability: bool) -> Dish {
    Dish {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        category: "veg".to_string(),
        price,
        discounted_price: price,
        image: String::new(),
        availability,
        is_deleted: false,
    }
}

pub fn booking(id: &str, business_name: &str, booked_time: &str, status: BookingStatus) -> Booking {
    Booking {
        id: id.to_string(),
        created_by: BookingCustomer {
            business_name: business_name.to_string(),
            email: format!("{}@example.com", id),
            phone_number: "9876500001".to_string(),
        },
        activity: shared::models::ActivityRef {
            title: "River Rafting".to_string(),
        },
        total_members: 2,
        booked_time: booked_time.to_string(),
        status,
        is_deleted: false,
    }
}

/// Drain every notice currently queued
pub fn drain_notices(
    rx: &mut tokio::sync::mpsc::UnboundedReceiver<partner_desk::Notice>,
) -> Vec<partner_desk::Notice> {
    let mut notices = Vec::new();
    while let Ok(notice) = rx.try_recv() {
        notices.push(notice);
    }
    notices
}
