//! Concurrent and repeated database access tests
//!
//! One repository is shared between threads through its connection mutex,
//! and separate repositories open the same file one after another the way
//! consecutive CLI invocations do.
//!
//! Run with: cargo test --test concurrent_access_test -- --nocapture

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Instant;

use chrono::{NaiveDate, Utc};
use tempfile::TempDir;
use uuid::Uuid;

use luxe_core::adapters::duckdb::DuckDbRepository;
use luxe_core::domain::{Booking, BookingStatus, Credential, Role, User};
use luxe_core::ports::{BookingStore, CredentialStore, SessionStore};

/// Number of concurrent threads for stress tests.
const THREAD_COUNT: usize = 6;

/// Number of iterations per thread
const ITERATIONS_PER_THREAD: usize = 5;

fn create_booking(user_id: &str, label: &str) -> Booking {
    Booking {
        id: Uuid::new_v4(),
        property_id: "1".to_string(),
        property_name: "Villa Serenity".to_string(),
        user_id: user_id.to_string(),
        user_name: format!("User {}", label),
        email: format!("{}@example.com", label),
        phone: None,
        date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        time: "10:00 AM".to_string(),
        notes: String::new(),
        status: BookingStatus::Pending,
        created_at: Utc::now(),
    }
}

/// Many threads appending bookings through one shared repository. Every
/// append lands exactly once.
#[test]
fn test_shared_repository_concurrent_bookings() {
    let temp_dir = TempDir::new().unwrap();
    let repo = Arc::new(DuckDbRepository::new(&temp_dir.path().join("luxe.duckdb")).unwrap());
    repo.ensure_schema().unwrap();

    let barrier = Arc::new(Barrier::new(THREAD_COUNT));
    let success_count = Arc::new(AtomicUsize::new(0));
    let error_count = Arc::new(AtomicUsize::new(0));

    let mut handles = vec![];

    for thread_id in 0..THREAD_COUNT {
        let barrier = Arc::clone(&barrier);
        let repo = Arc::clone(&repo);
        let success_count = Arc::clone(&success_count);
        let error_count = Arc::clone(&error_count);

        handles.push(thread::spawn(move || {
            barrier.wait();
            let start = Instant::now();

            for i in 0..ITERATIONS_PER_THREAD {
                let booking = create_booking(&format!("user-{}", thread_id), &format!("t{}_i{}", thread_id, i));
                match repo.add_booking(&booking) {
                    Ok(_) => {
                        success_count.fetch_add(1, Ordering::SeqCst);
                    }
                    Err(e) => {
                        eprintln!("Thread {}: write error at iteration {}: {}", thread_id, i, e);
                        error_count.fetch_add(1, Ordering::SeqCst);
                    }
                }
            }
            println!(
                "Thread {}: completed {} iterations in {:?}",
                thread_id,
                ITERATIONS_PER_THREAD,
                start.elapsed()
            );
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let expected_total = THREAD_COUNT * ITERATIONS_PER_THREAD;
    assert_eq!(error_count.load(Ordering::SeqCst), 0);
    assert_eq!(success_count.load(Ordering::SeqCst), expected_total);

    let bookings = repo.get_bookings().unwrap();
    assert_eq!(bookings.len(), expected_total);
    for thread_id in 0..THREAD_COUNT {
        let mine = repo.get_bookings_for_user(&format!("user-{}", thread_id)).unwrap();
        assert_eq!(mine.len(), ITERATIONS_PER_THREAD);
    }
}

/// Two threads racing to register the same email: exactly one wins
#[test]
fn test_duplicate_registration_race() {
    let temp_dir = TempDir::new().unwrap();
    let repo = Arc::new(DuckDbRepository::new(&temp_dir.path().join("luxe.duckdb")).unwrap());
    repo.ensure_schema().unwrap();

    let barrier = Arc::new(Barrier::new(2));
    let handles: Vec<_> = (0..2)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            let repo = Arc::clone(&repo);
            thread::spawn(move || {
                let user = User::new(format!("u{}", i), "same@example.com", "Racer", Role::User);
                barrier.wait();
                repo.insert_credential(&Credential::from_user(&user, "hash"))
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert_eq!(repo.list_credentials().unwrap().len(), 1);
}

/// Consecutive invocations each open their own repository on the same file
/// and see what the previous one wrote.
#[test]
fn test_sequential_repositories_see_previous_writes() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("luxe.duckdb");

    for i in 0..5 {
        let start = Instant::now();
        let repo = DuckDbRepository::new(&db_path).unwrap();
        repo.ensure_schema().unwrap();
        assert_eq!(repo.get_bookings().unwrap().len(), i);

        repo.add_booking(&create_booking("user-1", &format!("run{}", i)))
            .unwrap();
        repo.save_session(&format!("{{\"run\": {}}}", i)).unwrap();
        println!("Connection {}: opened and written in {:?}", i, start.elapsed());
    }

    let repo = DuckDbRepository::new(&db_path).unwrap();
    let session = repo.load_session().unwrap();
    assert_eq!(session.user_json.as_deref(), Some("{\"run\": 4}"));

    let bookings = repo.get_bookings().unwrap();
    let names: Vec<_> = bookings.iter().map(|b| b.user_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["User run0", "User run1", "User run2", "User run3", "User run4"]
    );
}
