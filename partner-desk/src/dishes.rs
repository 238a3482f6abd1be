//! DishManager - menu panel state synchronization
//!
//! Owns the dish list and keeps it in sync with the server. Writes follow
//! the original contract: create/update merge the server's record locally
//! and then re-pull the whole collection, so the list converges on server
//! truth after every write. The availability toggle and the delete mutate
//! locally first and persist fire-and-forget, with no rollback on failure;
//! those divergence points are logged at `warn`.

use partner_client::PartnerApi;
use shared::models::{Dish, DishCreate, DishUpdate};

use crate::notice::NoticeSink;

/// Dish panel state
#[derive(Debug)]
pub struct DishManager {
    dishes: Vec<Dish>,
    search: String,
    loading: bool,
    notices: NoticeSink,
}

impl DishManager {
    pub fn new(notices: NoticeSink) -> Self {
        Self {
            dishes: Vec::new(),
            search: String::new(),
            loading: true,
            notices,
        }
    }

    /// Whole list as last synced, server order, including soft-deleted rows
    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Rows the panel renders: non-deleted dishes matching the search query
    /// (name, description or price string, case-insensitive)
    pub fn visible(&self) -> Vec<&Dish> {
        let term = self.search.to_lowercase();
        self.dishes
            .iter()
            .filter(|dish| !dish.is_deleted)
            .filter(|dish| {
                term.is_empty()
                    || dish.name.to_lowercase().contains(&term)
                    || dish.description.to_lowercase().contains(&term)
                    || dish.price.to_string().contains(&term)
            })
            .collect()
    }

    /// Re-pull the collection from the server, replacing the local list
    ///
    /// On failure the current list is left untouched and an error notice is
    /// raised.
    pub async fn refresh(&mut self, api: &dyn PartnerApi) {
        match api.list_dishes().await {
            Ok(dishes) => self.dishes = dishes,
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch dishes");
                self.notices.error("Error fetching dishes");
            }
        }
        self.loading = false;
    }

    /// Create a dish: merge the returned record locally, then refetch
    pub async fn create(&mut self, api: &dyn PartnerApi, payload: DishCreate) {
        match api.create_dish(&payload).await {
            Ok(env) if env.success => {
                if let Some(dish) = env.data {
                    self.dishes.push(dish);
                }
                self.notices.success("Dish added successfully");
                // Authoritative state is re-pulled after every write; the
                // refetch replaces the optimistic append.
                self.refresh(api).await;
            }
            Ok(_) => self.notices.error("Error adding dish"),
            Err(e) => {
                tracing::error!(error = %e, "Failed to create dish");
                self.notices.error("Error adding dish");
            }
        }
    }

    /// Update a dish: replace-by-id locally, then refetch
    pub async fn update(&mut self, api: &dyn PartnerApi, id: &str, patch: DishUpdate) {
        match api.update_dish(id, &patch).await {
            Ok(env) if env.success => {
                if let Some(updated) = env.data {
                    if let Some(slot) = self.dishes.iter_mut().find(|d| d.id == id) {
                        *slot = updated;
                    }
                }
                self.notices.success("Dish updated successfully");
                self.refresh(api).await;
            }
            Ok(_) => self.notices.error("Error updating dish"),
            Err(e) => {
                tracing::error!(error = %e, "Failed to update dish");
                self.notices.error("Error updating dish");
            }
        }
    }

    /// Flip availability locally, then persist fire-and-forget
    ///
    /// The local flip is never rolled back; a failed persistence request
    /// leaves local and server state diverged until the next refetch.
    pub async fn toggle_availability(&mut self, api: &dyn PartnerApi, id: &str) {
        let Some(dish) = self.dishes.iter_mut().find(|d| d.id == id) else {
            return;
        };
        let next = !dish.availability;
        dish.availability = next;
        self.notices
            .success("Dish availability status updated successfully");

        match api.update_dish(id, &DishUpdate::availability(next)).await {
            Ok(env) if env.success => {}
            Ok(_) => tracing::warn!(dish = id, "Server rejected availability change, local state diverged"),
            Err(e) => {
                tracing::warn!(dish = id, error = %e, "Failed to persist availability change, local state diverged");
            }
        }
    }

    /// Remove the row from the rendered list immediately, persist as soft
    /// delete
    pub async fn delete(&mut self, api: &dyn PartnerApi, id: &str) {
        self.dishes.retain(|d| d.id != id);

        match api.update_dish(id, &DishUpdate::soft_delete()).await {
            Ok(_) => self.notices.success("Dish deleted successfully"),
            Err(e) => {
                tracing::warn!(dish = id, error = %e, "Failed to persist dish delete, local state diverged");
            }
        }
    }
}
