//! Seeded property catalog
//!
//! The ten flagship listings the brokerage launches with. Agent-added
//! listings are appended after these at runtime.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{
    AgentContact, Coordinates, Personality, Property, PropertyStatus, PropertyType,
};

use Personality::{Executive, Luxury, Minimalist, Nature};

const PHOTO_HILLS: &str = "photo-1613490493576-7fde63acd811";
const PHOTO_POOL: &str = "photo-1600596542815-ffad4c1539a9";
const PHOTO_LIVING: &str = "photo-1600607687939-ce8a6c25118c";
const PHOTO_TERRACE: &str = "photo-1600566753190-17f0baa2a6c3";
const PHOTO_FACADE: &str = "photo-1600585154340-be6161a56a0c";
const PHOTO_INTERIOR: &str = "photo-1600607687920-4e2a09cf159d";
const PHOTO_COAST: &str = "photo-1600585154526-990dced4db0d";

fn images(photos: &[&str]) -> Vec<String> {
    photos
        .iter()
        .map(|p| format!("https://images.unsplash.com/{}?w=1200&q=80", p))
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn agent(name: &str, email: &str, phone: &str, avatar: &str) -> AgentContact {
    AgentContact {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        avatar: format!("https://images.unsplash.com/{}?w=200&q=80", avatar),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The static catalog, in display order
pub fn seed_properties() -> Vec<Property> {
    vec![
        Property {
            id: "1".to_string(),
            name: "Villa Serenity".to_string(),
            location: "Beverly Hills, CA".to_string(),
            city: "Beverly Hills".to_string(),
            state: "CA".to_string(),
            country: "USA".to_string(),
            price: Decimal::from(24_500_000),
            beds: 6,
            baths: 8,
            sqft: 12_500,
            garage: 3,
            year: 2023,
            property_type: PropertyType::Villa,
            images: images(&[PHOTO_HILLS, PHOTO_POOL, PHOTO_LIVING, PHOTO_TERRACE]),
            description: "An architectural masterpiece that seamlessly blends contemporary luxury with timeless elegance. This ultra-premium estate features cutting-edge smart home automation, panoramic views, and world-class amenities.".to_string(),
            features: strings(&[
                "Smart Home Automation System",
                "Infinity Pool with Spa",
                "Private Wine Cellar",
                "Home Theater",
                "Gourmet Kitchen",
                "Private Gym",
                "Rooftop Terrace",
                "3-Car Garage",
            ]),
            amenities: strings(&["Pool", "Spa", "Gym", "Wine Cellar", "Theater", "Rooftop"]),
            smart_home_features: strings(&[
                "Full Home Automation",
                "Voice Control",
                "Security System",
                "Climate Control",
                "Lighting Control",
            ]),
            personality: vec![Minimalist, Executive],
            coordinates: Coordinates { lat: 34.0736, lng: -118.4004 },
            agent: agent(
                "Sarah Mitchell",
                "sarah.mitchell@luxe.com",
                "+1 (555) 123-4567",
                "photo-1494790108377-be9c29b29330",
            ),
            status: PropertyStatus::Available,
            listed_date: date(2024, 1, 15),
        },
        Property {
            id: "2".to_string(),
            name: "Glass Pavilion".to_string(),
            location: "Malibu, CA".to_string(),
            city: "Malibu".to_string(),
            state: "CA".to_string(),
            country: "USA".to_string(),
            price: Decimal::from(18_900_000),
            beds: 5,
            baths: 6,
            sqft: 9_800,
            garage: 2,
            year: 2022,
            property_type: PropertyType::Estate,
            images: images(&[PHOTO_POOL, PHOTO_LIVING, PHOTO_HILLS, PHOTO_TERRACE]),
            description: "A stunning glass-fronted estate with breathtaking ocean views. This modern architectural gem features floor-to-ceiling windows, open-concept living, and seamless indoor-outdoor integration.".to_string(),
            features: strings(&[
                "Ocean Views",
                "Glass Architecture",
                "Infinity Pool",
                "Beach Access",
                "Open Floor Plan",
                "Smart Home System",
                "Private Beach",
                "Helipad",
            ]),
            amenities: strings(&["Pool", "Beach Access", "Helipad", "Gym", "Spa"]),
            smart_home_features: strings(&[
                "Automated Blinds",
                "Climate Control",
                "Security",
                "Entertainment System",
            ]),
            personality: vec![Minimalist, Nature],
            coordinates: Coordinates { lat: 34.0259, lng: -118.7798 },
            agent: agent(
                "Michael Chen",
                "michael.chen@luxe.com",
                "+1 (555) 234-5678",
                "photo-1507003211169-0a1dd7228f2d",
            ),
            status: PropertyStatus::Available,
            listed_date: date(2024, 2, 1),
        },
        Property {
            id: "3".to_string(),
            name: "Skyline Penthouse".to_string(),
            location: "Manhattan, NY".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            country: "USA".to_string(),
            price: Decimal::from(32_000_000),
            beds: 4,
            baths: 5,
            sqft: 8_200,
            garage: 0,
            year: 2024,
            property_type: PropertyType::Penthouse,
            images: images(&[PHOTO_LIVING, PHOTO_HILLS, PHOTO_POOL, PHOTO_TERRACE]),
            description: "The ultimate urban sanctuary in the heart of Manhattan. This triplex penthouse offers 360-degree city views, private terraces, and unparalleled luxury in one of the world's most prestigious addresses.".to_string(),
            features: strings(&[
                "360° City Views",
                "Private Terraces",
                "Private Elevator",
                "Wine Cellar",
                "Home Office",
                "Smart Home",
                "Concierge Service",
                "Rooftop Garden",
            ]),
            amenities: strings(&["Concierge", "Gym", "Spa", "Wine Cellar", "Rooftop"]),
            smart_home_features: strings(&[
                "Full Automation",
                "Voice Control",
                "Security",
                "Climate",
                "Lighting",
            ]),
            personality: vec![Executive, Luxury],
            coordinates: Coordinates { lat: 40.7589, lng: -73.9851 },
            agent: agent(
                "Emily Rodriguez",
                "emily.rodriguez@luxe.com",
                "+1 (555) 345-6789",
                "photo-1438761681033-6461ffad8d80",
            ),
            status: PropertyStatus::Available,
            listed_date: date(2024, 1, 20),
        },
        Property {
            id: "4".to_string(),
            name: "Oceanfront Villa".to_string(),
            location: "Monaco".to_string(),
            city: "Monaco".to_string(),
            state: String::new(),
            country: "Monaco".to_string(),
            price: Decimal::from(45_000_000),
            beds: 7,
            baths: 9,
            sqft: 15_000,
            garage: 4,
            year: 2021,
            property_type: PropertyType::Villa,
            images: images(&[PHOTO_FACADE, PHOTO_INTERIOR, PHOTO_TERRACE, PHOTO_HILLS]),
            description: "A magnificent Mediterranean villa perched on the cliffs of Monaco. This palatial estate offers unparalleled luxury with direct sea access, private marina, and world-class amenities.".to_string(),
            features: strings(&[
                "Direct Sea Access",
                "Private Marina",
                "Infinity Pool",
                "Private Beach",
                "Helipad",
                "Wine Cellar",
                "Home Theater",
                "Guest House",
            ]),
            amenities: strings(&["Pool", "Marina", "Beach", "Helipad", "Gym", "Spa", "Theater"]),
            smart_home_features: strings(&["Full Automation", "Security", "Climate", "Entertainment"]),
            personality: vec![Luxury, Nature],
            coordinates: Coordinates { lat: 43.7384, lng: 7.4246 },
            agent: agent(
                "Jean-Pierre Dubois",
                "jp.dubois@luxe.com",
                "+377 93 12 34 56",
                "photo-1472099645785-5658abf4ff4e",
            ),
            status: PropertyStatus::Available,
            listed_date: date(2024, 1, 10),
        },
        Property {
            id: "5".to_string(),
            name: "Mountain Retreat".to_string(),
            location: "Aspen, CO".to_string(),
            city: "Aspen".to_string(),
            state: "CO".to_string(),
            country: "USA".to_string(),
            price: Decimal::from(22_000_000),
            beds: 6,
            baths: 7,
            sqft: 11_000,
            garage: 3,
            year: 2020,
            property_type: PropertyType::Retreat,
            images: images(&[PHOTO_FACADE, PHOTO_INTERIOR, PHOTO_TERRACE, PHOTO_HILLS]),
            description: "A luxurious mountain sanctuary surrounded by pristine wilderness. This architectural gem combines rustic elegance with modern luxury, featuring ski-in/ski-out access and breathtaking mountain vistas.".to_string(),
            features: strings(&[
                "Ski-In/Ski-Out",
                "Mountain Views",
                "Hot Tub",
                "Fireplace",
                "Wine Cellar",
                "Game Room",
                "Home Theater",
                "Guest Quarters",
            ]),
            amenities: strings(&["Ski Access", "Hot Tub", "Fireplace", "Gym", "Spa"]),
            smart_home_features: strings(&["Climate Control", "Security", "Lighting", "Entertainment"]),
            personality: vec![Nature, Luxury],
            coordinates: Coordinates { lat: 39.1911, lng: -106.8175 },
            agent: agent(
                "Robert Thompson",
                "robert.thompson@luxe.com",
                "+1 (555) 456-7890",
                "photo-1500648767791-00dcc994a43e",
            ),
            status: PropertyStatus::Available,
            listed_date: date(2024, 2, 15),
        },
        Property {
            id: "6".to_string(),
            name: "Beachfront Mansion".to_string(),
            location: "Miami, FL".to_string(),
            city: "Miami".to_string(),
            state: "FL".to_string(),
            country: "USA".to_string(),
            price: Decimal::from(35_000_000),
            beds: 8,
            baths: 10,
            sqft: 18_000,
            garage: 5,
            year: 2023,
            property_type: PropertyType::Mansion,
            images: images(&[PHOTO_COAST, PHOTO_HILLS, PHOTO_LIVING, PHOTO_TERRACE]),
            description: "An opulent beachfront estate in Miami's most exclusive enclave. This palatial mansion features direct beach access, private dock, and resort-style amenities that redefine luxury living.".to_string(),
            features: strings(&[
                "Direct Beach Access",
                "Private Dock",
                "Infinity Pool",
                "Tennis Court",
                "Guest House",
                "Home Theater",
                "Wine Cellar",
                "Private Gym",
            ]),
            amenities: strings(&["Pool", "Beach", "Dock", "Tennis Court", "Gym", "Spa", "Theater"]),
            smart_home_features: strings(&[
                "Full Automation",
                "Security",
                "Climate",
                "Lighting",
                "Entertainment",
            ]),
            personality: vec![Luxury, Nature],
            coordinates: Coordinates { lat: 25.7617, lng: -80.1918 },
            agent: agent(
                "Isabella Martinez",
                "isabella.martinez@luxe.com",
                "+1 (555) 567-8901",
                "photo-1544005313-94ddf0286df2",
            ),
            status: PropertyStatus::Available,
            listed_date: date(2024, 1, 25),
        },
        Property {
            id: "7".to_string(),
            name: "Modern Glass Estate".to_string(),
            location: "Los Angeles, CA".to_string(),
            city: "Los Angeles".to_string(),
            state: "CA".to_string(),
            country: "USA".to_string(),
            price: Decimal::from(28_900_000),
            beds: 5,
            baths: 6,
            sqft: 10_500,
            garage: 3,
            year: 2024,
            property_type: PropertyType::Estate,
            images: images(&[PHOTO_TERRACE, PHOTO_LIVING, PHOTO_HILLS, PHOTO_POOL]),
            description: "A cutting-edge architectural masterpiece featuring floor-to-ceiling glass walls, minimalist design, and state-of-the-art smart home technology. Perfect for the modern executive.".to_string(),
            features: strings(&[
                "Glass Architecture",
                "Smart Home System",
                "Infinity Pool",
                "Rooftop Deck",
                "Home Office",
                "Wine Cellar",
                "Private Gym",
                "Home Theater",
            ]),
            amenities: strings(&["Pool", "Gym", "Spa", "Theater", "Wine Cellar"]),
            smart_home_features: strings(&[
                "Full Automation",
                "Voice Control",
                "Security",
                "Climate",
                "Lighting",
            ]),
            personality: vec![Minimalist, Executive],
            coordinates: Coordinates { lat: 34.0522, lng: -118.2437 },
            agent: agent(
                "David Kim",
                "david.kim@luxe.com",
                "+1 (555) 678-9012",
                "photo-1506794778202-cad84cf45f1d",
            ),
            status: PropertyStatus::Available,
            listed_date: date(2024, 2, 10),
        },
        Property {
            id: "8".to_string(),
            name: "Dubai Skyline Penthouse".to_string(),
            location: "Dubai, UAE".to_string(),
            city: "Dubai".to_string(),
            state: String::new(),
            country: "UAE".to_string(),
            price: Decimal::from(38_500_000),
            beds: 5,
            baths: 6,
            sqft: 9_500,
            garage: 2,
            year: 2023,
            property_type: PropertyType::Penthouse,
            images: images(&[PHOTO_INTERIOR, PHOTO_TERRACE, PHOTO_HILLS, PHOTO_POOL]),
            description: "An ultra-luxurious penthouse in the heart of Dubai with panoramic views of the Arabian Gulf and city skyline. Features world-class amenities and unparalleled opulence.".to_string(),
            features: strings(&[
                "360° Views",
                "Private Elevator",
                "Infinity Pool",
                "Private Terrace",
                "Home Theater",
                "Wine Cellar",
                "Concierge Service",
                "Helipad Access",
            ]),
            amenities: strings(&["Pool", "Concierge", "Gym", "Spa", "Theater", "Helipad"]),
            smart_home_features: strings(&["Full Automation", "Voice Control", "Security", "Climate"]),
            personality: vec![Luxury, Executive],
            coordinates: Coordinates { lat: 25.2048, lng: 55.2708 },
            agent: agent(
                "Ahmed Al-Rashid",
                "ahmed.alrashid@luxe.com",
                "+971 4 123 4567",
                "photo-1507003211169-0a1dd7228f2d",
            ),
            status: PropertyStatus::Available,
            listed_date: date(2024, 1, 30),
        },
        Property {
            id: "9".to_string(),
            name: "Swiss Alpine Chalet".to_string(),
            location: "St. Moritz, Switzerland".to_string(),
            city: "St. Moritz".to_string(),
            state: String::new(),
            country: "Switzerland".to_string(),
            price: Decimal::from(28_000_000),
            beds: 6,
            baths: 7,
            sqft: 12_000,
            garage: 3,
            year: 2022,
            property_type: PropertyType::Retreat,
            images: images(&[PHOTO_FACADE, PHOTO_INTERIOR, PHOTO_TERRACE, PHOTO_HILLS]),
            description: "A luxurious alpine retreat in the heart of the Swiss Alps. This stunning chalet combines traditional Swiss architecture with modern luxury and offers world-class skiing and mountain views.".to_string(),
            features: strings(&[
                "Ski-In/Ski-Out",
                "Mountain Views",
                "Indoor Pool",
                "Spa Facilities",
                "Wine Cellar",
                "Home Theater",
                "Fireplace",
                "Guest Quarters",
            ]),
            amenities: strings(&["Pool", "Spa", "Ski Access", "Gym", "Theater", "Fireplace"]),
            smart_home_features: strings(&["Climate Control", "Security", "Lighting", "Entertainment"]),
            personality: vec![Nature, Luxury],
            coordinates: Coordinates { lat: 46.4907, lng: 9.8355 },
            agent: agent(
                "Sophie Laurent",
                "sophie.laurent@luxe.com",
                "+41 81 123 4567",
                "photo-1494790108377-be9c29b29330",
            ),
            status: PropertyStatus::Available,
            listed_date: date(2024, 2, 5),
        },
        Property {
            id: "10".to_string(),
            name: "Hampton Estate".to_string(),
            location: "The Hamptons, NY".to_string(),
            city: "Southampton".to_string(),
            state: "NY".to_string(),
            country: "USA".to_string(),
            price: Decimal::from(42_000_000),
            beds: 9,
            baths: 11,
            sqft: 22_000,
            garage: 6,
            year: 2021,
            property_type: PropertyType::Mansion,
            images: images(&[PHOTO_COAST, PHOTO_HILLS, PHOTO_LIVING, PHOTO_TERRACE]),
            description: "An iconic Hamptons estate on sprawling oceanfront grounds. This magnificent property features multiple structures, private beach, tennis courts, and every imaginable luxury amenity.".to_string(),
            features: strings(&[
                "Oceanfront",
                "Private Beach",
                "Tennis Courts",
                "Guest Houses",
                "Pool Complex",
                "Home Theater",
                "Wine Cellar",
                "Helipad",
            ]),
            amenities: strings(&["Pool", "Beach", "Tennis", "Gym", "Spa", "Theater", "Helipad"]),
            smart_home_features: strings(&[
                "Full Automation",
                "Security",
                "Climate",
                "Lighting",
                "Entertainment",
            ]),
            personality: vec![Luxury, Nature],
            coordinates: Coordinates { lat: 40.8843, lng: -72.3895 },
            agent: agent(
                "Victoria Sterling",
                "victoria.sterling@luxe.com",
                "+1 (555) 789-0123",
                "photo-1544005313-94ddf0286df2",
            ),
            status: PropertyStatus::Available,
            listed_date: date(2024, 1, 5),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let props = seed_properties();
        let ids: HashSet<_> = props.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), props.len());
        assert_eq!(props.len(), 10);
    }

    #[test]
    fn test_every_seed_has_personality_and_images() {
        for p in seed_properties() {
            assert!(!p.personality.is_empty(), "{} has no personality", p.name);
            assert_eq!(p.images.len(), 4, "{} image count", p.name);
            assert!(p.price > Decimal::ZERO);
        }
    }
}
