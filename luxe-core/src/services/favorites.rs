//! Favorites service - resolved favorites and the user dashboard

use std::sync::Arc;

use serde::Serialize;

use crate::domain::result::Result;
use crate::domain::{Property, User};
use crate::ports::BookingStore;
use crate::services::CatalogService;

/// Favorites shown on the dashboard
const DASHBOARD_FAVORITES: usize = 5;

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub properties_available: usize,
    pub favorites_count: usize,
    pub saved_searches_count: usize,
    pub bookings_count: usize,
    pub recent_favorites: Vec<Property>,
}

pub struct FavoritesService {
    catalog: Arc<CatalogService>,
    bookings: Arc<dyn BookingStore>,
}

impl FavoritesService {
    pub fn new(catalog: Arc<CatalogService>, bookings: Arc<dyn BookingStore>) -> Self {
        Self { catalog, bookings }
    }

    /// The user's favorites resolved against the catalog, in favoriting
    /// order. Ids that no longer resolve are skipped.
    pub fn favorites(&self, user: &User) -> Result<Vec<Property>> {
        let mut resolved = Vec::with_capacity(user.favorites.len());
        for id in &user.favorites {
            if let Some(property) = self.catalog.get(id)? {
                resolved.push(property);
            }
        }
        Ok(resolved)
    }

    pub fn dashboard(&self, user: &User) -> Result<DashboardSummary> {
        let favorites = self.favorites(user)?;
        Ok(DashboardSummary {
            properties_available: self.catalog.count()?,
            favorites_count: user.favorites.len(),
            saved_searches_count: user.saved_searches.len(),
            bookings_count: self.bookings.get_bookings_for_user(&user.id)?.len(),
            recent_favorites: favorites.into_iter().take(DASHBOARD_FAVORITES).collect(),
        })
    }
}
