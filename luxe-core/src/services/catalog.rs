//! Catalog service - lookup, search and filtering over all listings
//!
//! The catalog is the static property list followed by agent listings in
//! creation order.

use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::adapters::catalog::seed_properties;
use crate::domain::filter;
use crate::domain::result::Result;
use crate::domain::{Personality, Property, PropertyFilter};
use crate::ports::ListingStore;

/// Listings returned by a personality match
const MATCH_LIMIT: usize = 3;

/// One personality-match result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalityMatch {
    pub property: Property,
    /// 85..=99
    pub score: u8,
    pub reason: String,
}

pub struct CatalogService {
    properties: Vec<Property>,
    listings: Arc<dyn ListingStore>,
}

impl CatalogService {
    /// Catalog seeded with the built-in properties
    pub fn new(listings: Arc<dyn ListingStore>) -> Self {
        Self::with_properties(seed_properties(), listings)
    }

    pub fn with_properties(properties: Vec<Property>, listings: Arc<dyn ListingStore>) -> Self {
        Self {
            properties,
            listings,
        }
    }

    /// The built-in properties only
    pub fn static_properties(&self) -> &[Property] {
        &self.properties
    }

    /// Every listing: static first, then agent listings
    pub fn all(&self) -> Result<Vec<Property>> {
        let mut all = self.properties.clone();
        all.extend(self.listings.get_listings()?.iter().map(|l| l.to_property()));
        Ok(all)
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.properties.len() + self.listings.get_listings()?.len())
    }

    /// Static properties are checked first, then agent listings
    pub fn get(&self, id: &str) -> Result<Option<Property>> {
        if let Some(p) = self.properties.iter().find(|p| p.id == id) {
            return Ok(Some(p.clone()));
        }
        match Uuid::parse_str(id) {
            Ok(uuid) => Ok(self.listings.get_listing_by_id(uuid)?.map(|l| l.to_property())),
            Err(_) => Ok(None),
        }
    }

    pub fn search(&self, query: &str) -> Result<Vec<Property>> {
        let all = self.all()?;
        Ok(filter::search(&all, query).into_iter().cloned().collect())
    }

    pub fn filter(&self, criteria: &PropertyFilter) -> Result<Vec<Property>> {
        let all = self.all()?;
        Ok(filter::filter(&all, criteria).into_iter().cloned().collect())
    }

    /// Free-text search narrowed by the filter criteria
    pub fn search_and_filter(&self, query: &str, criteria: &PropertyFilter) -> Result<Vec<Property>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|p| filter::matches_query(p, query) && criteria.matches(p))
            .collect())
    }

    pub fn by_personality(&self, tag: Personality) -> Result<Vec<Property>> {
        let all = self.all()?;
        Ok(filter::by_personality(&all, tag).into_iter().cloned().collect())
    }

    /// Up to three listings for a personality, each with a match score
    pub fn match_personality(&self, tag: Personality) -> Result<Vec<PersonalityMatch>> {
        let mut rng = rand::thread_rng();
        Ok(self
            .by_personality(tag)?
            .into_iter()
            .take(MATCH_LIMIT)
            .map(|property| PersonalityMatch {
                property,
                score: rng.gen_range(85..=99),
                reason: tag.match_reason().to_string(),
            })
            .collect())
    }
}
