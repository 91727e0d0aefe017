//! Agent listing domain model
//!
//! Agents add listings through a short form (title, price text, location,
//! size). A listing is shown in the catalog as a `Property` with the
//! remaining fields defaulted.

use std::sync::OnceLock;

use chrono::{DateTime, Datelike, Utc};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::property::{
    AgentContact, Coordinates, Personality, Property, PropertyStatus, PropertyType,
};

const LISTING_DESCRIPTION: &str = "Exclusive agent listing. Contact for more details.";
const LISTING_AGENT_AVATAR: &str =
    "https://images.unsplash.com/photo-1560250097-0b93528c311a?auto=format&fit=crop&q=80";
pub const DEFAULT_LISTING_IMAGE: &str =
    "https://images.unsplash.com/photo-1600596542815-27bfefd0c3c6?auto=format&fit=crop&q=80";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Pending,
    Sold,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Active => "active",
            ListingStatus::Pending => "pending",
            ListingStatus::Sold => "sold",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(ListingStatus::Active),
            "pending" => Some(ListingStatus::Pending),
            "sold" => Some(ListingStatus::Sold),
            _ => None,
        }
    }

    /// Catalog status; an active listing is available
    pub fn to_property_status(self) -> PropertyStatus {
        match self {
            ListingStatus::Active => PropertyStatus::Available,
            ListingStatus::Pending => PropertyStatus::Pending,
            ListingStatus::Sold => PropertyStatus::Sold,
        }
    }
}

/// A listing added by an agent at runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentListing {
    pub id: Uuid,
    pub title: String,
    /// Price exactly as the agent typed it, e.g. "$4,500,000"
    pub price: String,
    pub location: String,
    pub beds: u32,
    pub baths: u32,
    pub sqft: u32,
    pub image: String,
    pub status: ListingStatus,
    pub agent_id: String,
    pub created_at: DateTime<Utc>,
}

/// Form input for a new listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingDraft {
    pub title: String,
    pub price: String,
    pub location: String,
    pub beds: u32,
    pub baths: u32,
    pub sqft: u32,
    pub image: Option<String>,
}

fn non_digits() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^0-9]").expect("static regex"))
}

/// Extract the numeric price from free text by dropping every non-digit.
/// "$4,500,000" -> 4500000. Returns None when no digit is present.
pub fn parse_price_text(text: &str) -> Option<Decimal> {
    let digits = non_digits().replace_all(text, "");
    if digits.is_empty() {
        return None;
    }
    digits.parse::<Decimal>().ok()
}

impl AgentListing {
    pub fn from_draft(draft: ListingDraft, agent_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title.trim().to_string(),
            price: draft.price.trim().to_string(),
            location: draft.location.trim().to_string(),
            beds: draft.beds,
            baths: draft.baths,
            sqft: draft.sqft,
            image: draft
                .image
                .filter(|i| !i.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LISTING_IMAGE.to_string()),
            status: ListingStatus::Active,
            agent_id: agent_id.into(),
            created_at: Utc::now(),
        }
    }

    /// Project this listing into a catalog property
    pub fn to_property(&self) -> Property {
        let (city, state) = match self.location.split_once(',') {
            Some((city, rest)) => {
                // only the segment right after the first comma is the state
                let state = rest.split(',').next().unwrap_or("").trim();
                let city = if city.is_empty() { self.location.as_str() } else { city };
                (city.to_string(), state.to_string())
            }
            None => (self.location.clone(), String::new()),
        };

        Property {
            id: self.id.to_string(),
            name: self.title.clone(),
            location: self.location.clone(),
            city,
            state,
            country: "USA".to_string(),
            price: parse_price_text(&self.price).unwrap_or_default(),
            beds: self.beds,
            baths: self.baths,
            sqft: self.sqft,
            garage: 2,
            year: Utc::now().year(),
            property_type: PropertyType::Villa,
            images: vec![self.image.clone()],
            description: LISTING_DESCRIPTION.to_string(),
            features: vec!["Agent Listed".to_string()],
            amenities: Vec::new(),
            smart_home_features: Vec::new(),
            personality: vec![Personality::Luxury],
            coordinates: Coordinates { lat: 0.0, lng: 0.0 },
            agent: AgentContact {
                name: "Listing Agent".to_string(),
                email: "agent@example.com".to_string(),
                phone: "(555) 000-0000".to_string(),
                avatar: LISTING_AGENT_AVATAR.to_string(),
            },
            status: self.status.to_property_status(),
            listed_date: self.created_at.date_naive(),
        }
    }
}
