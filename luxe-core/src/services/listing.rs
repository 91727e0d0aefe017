//! Listing service - agent-added listings

use std::sync::Arc;

use crate::domain::listing::parse_price_text;
use crate::domain::result::{Error, Result};
use crate::domain::{AgentListing, ListingDraft, Role, User};
use crate::ports::ListingStore;

pub struct ListingService {
    listings: Arc<dyn ListingStore>,
}

impl ListingService {
    pub fn new(listings: Arc<dyn ListingStore>) -> Self {
        Self { listings }
    }

    /// Publish a listing on behalf of an agent. It is stored as `active`
    /// and shows up in the catalog immediately.
    pub fn add_listing(&self, agent: &User, draft: ListingDraft) -> Result<AgentListing> {
        if agent.role != Role::Agent {
            return Err(Error::forbidden("only agents can add listings"));
        }
        if draft.title.trim().is_empty() {
            return Err(Error::validation("Title is required"));
        }
        if draft.location.trim().is_empty() {
            return Err(Error::validation("Location is required"));
        }
        if parse_price_text(&draft.price).is_none() {
            return Err(Error::validation("Price must contain a number"));
        }

        let listing = AgentListing::from_draft(draft, agent.id.clone());
        self.listings.add_listing(&listing)?;
        Ok(listing)
    }

    /// All agent listings in creation order
    pub fn listings(&self) -> Result<Vec<AgentListing>> {
        self.listings.get_listings()
    }
}
