//! Filter and search predicates over catalog properties

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::property::{Personality, Property, PropertyType};

/// Conjunctive filter. Every `None` criterion passes; numeric bounds are
/// inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFilter {
    #[serde(rename = "type")]
    pub property_type: Option<PropertyType>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_beds: Option<u32>,
    pub min_baths: Option<u32>,
    /// Case-insensitive substring of the location
    pub location: Option<String>,
}

impl PropertyFilter {
    pub fn is_empty(&self) -> bool {
        *self == PropertyFilter::default()
    }

    pub fn matches(&self, p: &Property) -> bool {
        if let Some(t) = self.property_type {
            if p.property_type != t {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if p.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if p.price > max {
                return false;
            }
        }
        if let Some(beds) = self.min_beds {
            if p.beds < beds {
                return false;
            }
        }
        if let Some(baths) = self.min_baths {
            if p.baths < baths {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if !contains_ignore_case(&p.location, location) {
                return false;
            }
        }
        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Free-text match on name, location, city and category
pub fn matches_query(p: &Property, query: &str) -> bool {
    let q = query.to_lowercase();
    p.name.to_lowercase().contains(&q)
        || p.location.to_lowercase().contains(&q)
        || p.city.to_lowercase().contains(&q)
        || p.property_type.as_str().to_lowercase().contains(&q)
}

/// Search in catalog order. An empty query returns everything.
pub fn search<'a>(catalog: &'a [Property], query: &str) -> Vec<&'a Property> {
    catalog.iter().filter(|p| matches_query(p, query)).collect()
}

pub fn filter<'a>(catalog: &'a [Property], criteria: &PropertyFilter) -> Vec<&'a Property> {
    catalog.iter().filter(|p| criteria.matches(p)).collect()
}

pub fn by_personality(catalog: &[Property], tag: Personality) -> Vec<&Property> {
    catalog.iter().filter(|p| p.has_personality(tag)).collect()
}
