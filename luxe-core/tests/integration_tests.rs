//! Integration tests for luxe-core services
//!
//! Every test runs against a real DuckDB file in a temporary data
//! directory. Reopening the context plays the part of a second tab or a
//! later CLI invocation.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::TempDir;

use luxe_core::domain::{BookingRequest, BookingStatus, ListingDraft, PropertyFilter, UserUpdate};
use luxe_core::ports::{CredentialStore, SessionStore};
use luxe_core::services::{EntryPoint, QuoteInput, SignupRequest};
use luxe_core::{Error, LuxeContext, Role};

// ============================================================================
// Test Helpers
// ============================================================================

fn open(dir: &TempDir) -> LuxeContext {
    LuxeContext::new(dir.path(), EntryPoint::Test).expect("Failed to open context")
}

fn signup(ctx: &LuxeContext, name: &str, email: &str, password: &str) -> luxe_core::User {
    ctx.session_service
        .signup(SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            ..Default::default()
        })
        .expect("signup failed")
}

fn listing_draft(title: &str) -> ListingDraft {
    ListingDraft {
        title: title.to_string(),
        price: "$4,500,000".to_string(),
        location: "Sausalito, CA".to_string(),
        beds: 4,
        baths: 3,
        sqft: 3800,
        image: None,
    }
}

// ============================================================================
// Session
// ============================================================================

#[test]
fn test_signup_then_login_in_a_later_invocation() {
    let dir = TempDir::new().unwrap();
    {
        let ctx = open(&dir);
        signup(&ctx, "Ann Lee", "ann@example.com", "hunter22");
        ctx.session_service.logout().unwrap();
    }

    let ctx = open(&dir);
    assert!(ctx.session_service.current().unwrap().is_none());
    let user = ctx.session_service.login("ann@example.com", "hunter22").unwrap();
    assert_eq!(user.name, "Ann Lee");
    assert_eq!(user.role, Role::User);
}

#[test]
fn test_duplicate_signup_leaves_existing_record_alone() {
    let dir = TempDir::new().unwrap();
    let ctx = open(&dir);
    let first = signup(&ctx, "Ann Lee", "ann@example.com", "hunter22");

    let err = ctx
        .session_service
        .signup(SignupRequest {
            name: "Impostor".to_string(),
            email: "ann@example.com".to_string(),
            password: "otherpass".to_string(),
            phone: Some("555-0000".to_string()),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, Error::AlreadyExists));

    let stored = ctx
        .repository
        .find_credential_by_email("ann@example.com")
        .unwrap()
        .unwrap();
    assert_eq!(stored.user_id, first.id);
    assert_eq!(stored.name, "Ann Lee");
    assert!(stored.phone.is_none());
    assert_eq!(ctx.repository.list_credentials().unwrap().len(), 1);

    // the first password still works, the rejected one does not
    ctx.session_service.logout().unwrap();
    assert!(ctx.session_service.login("ann@example.com", "hunter22").is_ok());
    assert!(matches!(
        ctx.session_service.login("ann@example.com", "otherpass"),
        Err(Error::InvalidCredentials)
    ));
}

#[test]
fn test_session_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let user = {
        let ctx = open(&dir);
        signup(&ctx, "Ann Lee", "ann@example.com", "hunter22")
    };

    let ctx = open(&dir);
    assert_eq!(ctx.session_service.current().unwrap(), Some(user));
}

#[test]
fn test_corrupted_session_is_cleared_and_logged() {
    let dir = TempDir::new().unwrap();
    {
        let ctx = open(&dir);
        ctx.repository.save_session("{\"id\": \"u1\", \"email\":").unwrap();
    }

    let ctx = open(&dir);
    assert!(ctx.session_service.current().unwrap().is_none());
    assert!(!ctx.repository.load_session().unwrap().authenticated);
    assert!(matches!(
        ctx.session_service.require_user(),
        Err(Error::Unauthenticated)
    ));

    let logger = ctx.logger.as_ref().expect("logger available");
    let errors = logger.get_errors(10).unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].event, "session_corrupt");
}

#[test]
fn test_profile_update_carries_into_next_login() {
    let dir = TempDir::new().unwrap();
    let ctx = open(&dir);
    signup(&ctx, "Ann Lee", "ann@example.com", "hunter22");

    ctx.session_service
        .update_user(&UserUpdate {
            email: Some("ann.lee@example.com".to_string()),
            phone: Some("(555) 123-4567".to_string()),
            ..Default::default()
        })
        .unwrap();
    ctx.session_service.logout().unwrap();

    assert!(matches!(
        ctx.session_service.login("ann@example.com", "hunter22"),
        Err(Error::InvalidCredentials)
    ));
    let user = ctx
        .session_service
        .login("ann.lee@example.com", "hunter22")
        .unwrap();
    assert_eq!(user.phone.as_deref(), Some("(555) 123-4567"));
}

// ============================================================================
// Favorites
// ============================================================================

#[test]
fn test_add_then_remove_favorite_restores_list() {
    let dir = TempDir::new().unwrap();
    let ctx = open(&dir);
    signup(&ctx, "Ann Lee", "ann@example.com", "hunter22");
    ctx.session_service.add_favorite("2").unwrap();
    let before = ctx.session_service.require_user().unwrap().favorites;

    ctx.session_service.add_favorite("5").unwrap();
    ctx.session_service.add_favorite("5").unwrap();
    assert_eq!(
        ctx.session_service.require_user().unwrap().favorites,
        vec!["2".to_string(), "5".to_string()]
    );

    ctx.session_service.remove_favorite("5").unwrap();
    assert_eq!(ctx.session_service.require_user().unwrap().favorites, before);
}

#[test]
fn test_favorites_persist_across_logins() {
    let dir = TempDir::new().unwrap();
    {
        let ctx = open(&dir);
        signup(&ctx, "Ann Lee", "ann@example.com", "hunter22");
        ctx.session_service.add_favorite("4").unwrap();
        ctx.session_service.add_favorite("1").unwrap();
        ctx.session_service.logout().unwrap();
    }

    let ctx = open(&dir);
    let user = ctx.session_service.login("ann@example.com", "hunter22").unwrap();
    let favorites = ctx.favorites_service.favorites(&user).unwrap();
    let ids: Vec<_> = favorites.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["4", "1"]);
}

#[test]
fn test_favorite_requires_session() {
    let dir = TempDir::new().unwrap();
    let ctx = open(&dir);
    assert!(matches!(
        ctx.session_service.add_favorite("1"),
        Err(Error::Unauthenticated)
    ));
}

// ============================================================================
// Bookings
// ============================================================================

#[test]
fn test_booking_visible_from_another_context() {
    let dir = TempDir::new().unwrap();
    let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

    let user = {
        let ctx = open(&dir);
        let user = signup(&ctx, "Ann Lee", "ann@example.com", "hunter22");

        let rejected = ctx.booking_service.book(BookingRequest {
            property_id: "3".to_string(),
            date: Some(date),
            time: None,
            ..Default::default()
        });
        assert!(matches!(rejected, Err(Error::Validation(_))));
        assert!(ctx.booking_service.all_bookings().unwrap().is_empty());

        ctx.booking_service
            .book(BookingRequest {
                property_id: "3".to_string(),
                date: Some(date),
                time: Some("11:00 AM".to_string()),
                notes: Some("Gate code please".to_string()),
                ..Default::default()
            })
            .unwrap();
        user
    };

    let ctx = open(&dir);
    let bookings = ctx.booking_service.bookings_for(&user).unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].status, BookingStatus::Pending);
    assert_eq!(bookings[0].date, date);
    assert_eq!(bookings[0].time, "11:00 AM");
    assert_eq!(bookings[0].notes, "Gate code please");
}

#[test]
fn test_bookings_are_per_user() {
    let dir = TempDir::new().unwrap();
    let ctx = open(&dir);
    let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
    let request = BookingRequest {
        property_id: "1".to_string(),
        date: Some(date),
        time: Some("9:00 AM".to_string()),
        ..Default::default()
    };

    let ann = signup(&ctx, "Ann Lee", "ann@example.com", "hunter22");
    ctx.booking_service.book(request.clone()).unwrap();
    let bo = signup(&ctx, "Bo Park", "bo@example.com", "hunter22");
    ctx.booking_service.book(request.clone()).unwrap();
    ctx.booking_service.book(request).unwrap();

    assert_eq!(ctx.booking_service.bookings_for(&ann).unwrap().len(), 1);
    assert_eq!(ctx.booking_service.bookings_for(&bo).unwrap().len(), 2);
    assert_eq!(ctx.favorites_service.dashboard(&bo).unwrap().bookings_count, 2);
}

#[test]
fn test_agent_sees_every_clients_inspections() {
    let dir = TempDir::new().unwrap();
    let date = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
    {
        let ctx = open(&dir);
        for (name, email) in [("Ann Lee", "ann@example.com"), ("Bo Park", "bo@example.com")] {
            signup(&ctx, name, email, "hunter22");
            ctx.booking_service
                .book(BookingRequest {
                    property_id: "2".to_string(),
                    date: Some(date),
                    time: Some("3:00 PM".to_string()),
                    ..Default::default()
                })
                .unwrap();
        }
        assert!(matches!(
            ctx.booking_service.inspections(),
            Err(Error::Forbidden(_))
        ));
    }

    let ctx = open(&dir);
    ctx.session_service
        .login_agent("agent@luxe.com", "agent123")
        .unwrap();
    let clients: Vec<_> = ctx
        .booking_service
        .inspections()
        .unwrap()
        .into_iter()
        .map(|b| b.user_name)
        .collect();
    assert_eq!(clients, vec!["Ann Lee", "Bo Park"]);
}

// ============================================================================
// Agent listings
// ============================================================================

#[test]
fn test_agent_listing_joins_catalog() {
    let dir = TempDir::new().unwrap();
    let ctx = open(&dir);

    let agent = ctx
        .session_service
        .login_agent("agent@luxe.com", "agent123")
        .unwrap();
    let listing = ctx
        .listing_service
        .add_listing(&agent, listing_draft("Harbor House"))
        .unwrap();

    assert_eq!(ctx.catalog_service.count().unwrap(), 11);
    let found = ctx.catalog_service.search("harbor").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, listing.id.to_string());
    assert_eq!(found[0].city, "Sausalito");

    let criteria = PropertyFilter {
        max_price: Some(Decimal::from(5_000_000)),
        ..Default::default()
    };
    let cheap = ctx.catalog_service.filter(&criteria).unwrap();
    assert_eq!(cheap.len(), 1);

    // a regular user can favorite and book the agent listing
    signup(&ctx, "Ann Lee", "ann@example.com", "hunter22");
    let user = ctx
        .session_service
        .add_favorite(&listing.id.to_string())
        .unwrap();
    assert_eq!(ctx.favorites_service.favorites(&user).unwrap().len(), 1);
    let booking = ctx
        .booking_service
        .book(BookingRequest {
            property_id: listing.id.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 3),
            time: Some("3:00 PM".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(booking.property_name, "Harbor House");
}

#[test]
fn test_user_cannot_add_listing() {
    let dir = TempDir::new().unwrap();
    let ctx = open(&dir);
    let user = signup(&ctx, "Ann Lee", "ann@example.com", "hunter22");

    let err = ctx
        .listing_service
        .add_listing(&user, listing_draft("Harbor House"))
        .unwrap_err();
    assert!(matches!(err, Error::Forbidden(_)));
    assert!(matches!(
        ctx.session_service.require_role(Role::Agent),
        Err(Error::Forbidden(_))
    ));
}

// ============================================================================
// Mortgage
// ============================================================================

#[test]
fn test_quote_for_catalog_listing() {
    let dir = TempDir::new().unwrap();
    let ctx = open(&dir);
    let villa = ctx.catalog_service.get("1").unwrap().unwrap();

    let quote = ctx
        .mortgage_service
        .quote_for(
            &villa,
            &QuoteInput {
                principal: Some(Decimal::from(24_500_000)),
                ..Default::default()
            },
        )
        .unwrap();

    let r: f64 = 4.5 / 100.0 / 12.0;
    let growth = (1.0 + r).powi(360);
    let expected = 24_500_000.0 * r * growth / (growth - 1.0);
    let actual: f64 = quote.monthly_payment.to_string().parse().unwrap();
    assert!((actual - expected).abs() < 0.01);
}
