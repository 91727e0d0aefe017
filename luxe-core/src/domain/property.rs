//! Property domain model

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::result::Error;

/// Category tag of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Villa,
    Penthouse,
    Estate,
    Mansion,
    Retreat,
    Beachfront,
}

impl PropertyType {
    pub const ALL: [PropertyType; 6] = [
        PropertyType::Villa,
        PropertyType::Penthouse,
        PropertyType::Estate,
        PropertyType::Mansion,
        PropertyType::Retreat,
        PropertyType::Beachfront,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Villa => "Villa",
            PropertyType::Penthouse => "Penthouse",
            PropertyType::Estate => "Estate",
            PropertyType::Mansion => "Mansion",
            PropertyType::Retreat => "Retreat",
            PropertyType::Beachfront => "Beachfront",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = Error;

    /// Accepts any casing ("villa", "VILLA", "Villa")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PropertyType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::validation(format!("unknown property type: {}", s)))
    }
}

/// Lifestyle tag used by the personality matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    Minimalist,
    Nature,
    Executive,
    Luxury,
}

impl Personality {
    pub const ALL: [Personality; 4] = [
        Personality::Minimalist,
        Personality::Nature,
        Personality::Executive,
        Personality::Luxury,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Personality::Minimalist => "minimalist",
            Personality::Nature => "nature",
            Personality::Executive => "executive",
            Personality::Luxury => "luxury",
        }
    }

    /// Display name shown next to the tag
    pub fn label(&self) -> &'static str {
        match self {
            Personality::Minimalist => "Minimalist",
            Personality::Nature => "Nature Lover",
            Personality::Executive => "Tech Executive",
            Personality::Luxury => "Luxury Seeker",
        }
    }

    /// Reason given for every match of this personality
    pub fn match_reason(&self) -> &'static str {
        match self {
            Personality::Minimalist => {
                "Clean lines and minimalist design perfect for your aesthetic"
            }
            Personality::Nature => {
                "Natural materials and outdoor living spaces match your preferences"
            }
            Personality::Executive => {
                "Smart home technology and modern efficiency align with your needs"
            }
            Personality::Luxury => {
                "Premium finishes and exclusive amenities match your refined taste"
            }
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Personality {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Personality::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::validation(format!("unknown personality: {}", s)))
    }
}

/// Market status of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Available,
    Pending,
    Sold,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Available => "available",
            PropertyStatus::Pending => "pending",
            PropertyStatus::Sold => "sold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Contact card of the agent responsible for a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar: String,
}

/// A listing in the catalog, either seeded or agent-added
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    pub location: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub price: Decimal,
    pub beds: u32,
    pub baths: u32,
    pub sqft: u32,
    pub garage: u32,
    pub year: i32,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub images: Vec<String>,
    pub description: String,
    pub features: Vec<String>,
    pub amenities: Vec<String>,
    pub smart_home_features: Vec<String>,
    pub personality: Vec<Personality>,
    pub coordinates: Coordinates,
    pub agent: AgentContact,
    pub status: PropertyStatus,
    pub listed_date: NaiveDate,
}

impl Property {
    /// Whether this property carries the given personality tag
    pub fn has_personality(&self, tag: Personality) -> bool {
        self.personality.contains(&tag)
    }

    /// Price in millions with one decimal, e.g. "$24.5M"
    pub fn price_short(&self) -> String {
        let millions = self.price / Decimal::from(1_000_000);
        format!("${}M", millions.round_dp(1))
    }
}
