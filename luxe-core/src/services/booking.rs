//! Booking service - scheduling property inspections

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{
    available_dates, Booking, BookingRequest, BookingStatus, Role, User, TIME_SLOTS,
};
use crate::ports::BookingStore;
use crate::services::{CatalogService, SessionService};

pub struct BookingService {
    bookings: Arc<dyn BookingStore>,
    catalog: Arc<CatalogService>,
    sessions: Arc<SessionService>,
    window_days: u32,
}

impl BookingService {
    pub fn new(
        bookings: Arc<dyn BookingStore>,
        catalog: Arc<CatalogService>,
        sessions: Arc<SessionService>,
        window_days: u32,
    ) -> Self {
        Self {
            bookings,
            catalog,
            sessions,
            window_days,
        }
    }

    /// Book an inspection for the signed-in user.
    ///
    /// Nothing is stored unless the request names a known listing, a date
    /// and one of the offered time slots. Overlapping bookings are allowed.
    pub fn book(&self, request: BookingRequest) -> Result<Booking> {
        let user = self.sessions.require_user()?;

        let date = request
            .date
            .ok_or_else(|| Error::validation("Please select a date and time"))?;
        let time = request
            .time
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::validation("Please select a date and time"))?;
        if !TIME_SLOTS.contains(&time) {
            return Err(Error::validation(format!("Unknown time slot: {}", time)));
        }

        let property = self
            .catalog
            .get(&request.property_id)?
            .ok_or_else(|| Error::not_found(format!("property {}", request.property_id)))?;

        let booking = Booking {
            id: Uuid::new_v4(),
            property_id: property.id,
            property_name: property.name,
            user_id: user.id.clone(),
            user_name: non_empty(request.name).unwrap_or_else(|| user.name.clone()),
            email: non_empty(request.email).unwrap_or_else(|| user.email.clone()),
            phone: non_empty(request.phone).or_else(|| user.phone.clone()),
            date,
            time: time.to_string(),
            notes: request.notes.unwrap_or_default(),
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        };

        self.bookings.add_booking(&booking)?;
        Ok(booking)
    }

    /// A user's bookings in creation order
    pub fn bookings_for(&self, user: &User) -> Result<Vec<Booking>> {
        self.bookings.get_bookings_for_user(&user.id)
    }

    pub fn all_bookings(&self) -> Result<Vec<Booking>> {
        self.bookings.get_bookings()
    }

    /// Every client's inspection requests, for the agent portal
    pub fn inspections(&self) -> Result<Vec<Booking>> {
        self.sessions.require_role(Role::Agent)?;
        self.all_bookings()
    }

    pub fn time_slots(&self) -> &'static [&'static str] {
        &TIME_SLOTS
    }

    /// Dates offered for booking, starting the day after `today`
    pub fn available_dates(&self, today: NaiveDate) -> Vec<NaiveDate> {
        available_dates(today, self.window_days)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
