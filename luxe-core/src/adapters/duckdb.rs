//! DuckDB repository implementation

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use duckdb::{params, Connection, OptionalExt, Row};
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{AgentListing, Booking, BookingStatus, Credential, ListingStatus, Role};
use crate::ports::{BookingStore, CredentialStore, ListingStore, SessionStore, StoredSession};
use crate::services::MigrationService;

/// Maximum number of retries when database file is locked
const MAX_RETRIES: u32 = 5;

/// Initial retry delay in milliseconds (doubles each retry: 50, 100, 200, 400, 800ms)
const INITIAL_RETRY_DELAY_MS: u64 = 50;

/// Only one session row ever exists
const SESSION_SLOT: i32 = 1;

/// Check if an error message indicates a file locking issue that should be retried
fn is_retryable_error(err_msg: &str) -> bool {
    let lower = err_msg.to_lowercase();
    // Windows error messages
    lower.contains("being used by another process")
        || lower.contains("cannot access the file")
        // Unix/macOS error messages
        || lower.contains("resource temporarily unavailable")
        || lower.contains("database is locked")
        || lower.contains("file is already open")
        || lower.contains("could not set lock")
}

fn is_unique_violation(err: &duckdb::Error) -> bool {
    let msg = err.to_string().to_lowercase();
    msg.contains("duplicate key") || msg.contains("unique constraint")
}

/// DuckDB repository implementation
pub struct DuckDbRepository {
    conn: Mutex<Connection>,
    db_path: Option<PathBuf>,
}

impl DuckDbRepository {
    /// Open (or create) the database file.
    ///
    /// Several processes may hold the same file; opening retries with
    /// exponential backoff while another process has it locked.
    pub fn new(db_path: &Path) -> Result<Self> {
        let mut attempt = 0;
        loop {
            match Self::try_open_connection(db_path) {
                Ok(conn) => {
                    return Ok(Self {
                        conn: Mutex::new(conn),
                        db_path: Some(db_path.to_path_buf()),
                    });
                }
                Err(e) => {
                    let err_msg = e.to_string();
                    if is_retryable_error(&err_msg) && attempt < MAX_RETRIES - 1 {
                        let delay =
                            Duration::from_millis(INITIAL_RETRY_DELAY_MS * 2u64.pow(attempt));
                        eprintln!(
                            "[luxe] Database busy, retrying in {}ms (attempt {}/{}): {}",
                            delay.as_millis(),
                            attempt + 1,
                            MAX_RETRIES,
                            err_msg
                        );
                        thread::sleep(delay);
                        attempt += 1;
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }
    }

    /// In-memory database, nothing is persisted. Used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Mutex::new(conn),
            db_path: None,
        })
    }

    fn try_open_connection(db_path: &Path) -> duckdb::Result<Connection> {
        // Extension autoloading stays off; nothing here needs extensions
        let config = duckdb::Config::default().enable_autoload_extension(false)?;
        Connection::open_with_flags(db_path, config)
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| Error::database(format!("Lock poisoned: {}", e)))
    }

    /// Path of the database file, None when in memory
    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    /// Run pending migrations
    pub fn run_migrations(&self) -> Result<crate::services::MigrationResult> {
        let conn = self.conn()?;
        MigrationService::new(&conn).run_pending()
    }

    /// Ensure database schema exists (runs pending migrations)
    pub fn ensure_schema(&self) -> Result<()> {
        self.run_migrations()?;
        Ok(())
    }

    fn next_seq(conn: &Connection, table: &str) -> Result<i64> {
        let seq: i64 = conn.query_row(
            &format!("SELECT COALESCE(MAX(seq), 0) + 1 FROM {}", table),
            [],
            |row| row.get(0),
        )?;
        Ok(seq)
    }

    // === Row mapping ===

    fn row_to_credential(row: &Row) -> duckdb::Result<Credential> {
        // 0: user_id, 1: email, 2: password_hash, 3: name, 4: phone,
        // 5: favorites, 6: saved_searches, 7: role, 8: license_number, 9: created_at
        let favorites: String = row.get(5)?;
        let saved_searches: String = row.get(6)?;
        let role: String = row.get(7)?;
        let created: String = row.get(9)?;

        Ok(Credential {
            user_id: row.get(0)?,
            email: row.get(1)?,
            password_hash: row.get(2)?,
            name: row.get(3)?,
            phone: row.get::<_, Option<String>>(4)?,
            // A damaged JSON column degrades to an empty list
            favorites: serde_json::from_str(&favorites).unwrap_or_default(),
            saved_searches: serde_json::from_str(&saved_searches).unwrap_or_default(),
            role: role.parse().unwrap_or(Role::User),
            license_number: row.get::<_, Option<String>>(8)?,
            created_at: parse_timestamp(&created),
        })
    }

    fn row_to_booking(row: &Row) -> duckdb::Result<Booking> {
        // 0: booking_id, 1: property_id, 2: property_name, 3: user_id, 4: user_name,
        // 5: email, 6: phone, 7: booking_date, 8: time_slot, 9: notes, 10: status,
        // 11: created_at
        let id: String = row.get(0)?;
        let date: String = row.get(7)?;
        let status: String = row.get(10)?;
        let created: String = row.get(11)?;

        Ok(Booking {
            id: Uuid::parse_str(&id).unwrap_or_else(|_| Uuid::nil()),
            property_id: row.get(1)?,
            property_name: row.get(2)?,
            user_id: row.get(3)?,
            user_name: row.get(4)?,
            email: row.get(5)?,
            phone: row.get::<_, Option<String>>(6)?,
            date: parse_date(&date),
            time: row.get(8)?,
            notes: row.get(9)?,
            status: BookingStatus::parse(&status).unwrap_or(BookingStatus::Pending),
            created_at: parse_timestamp(&created),
        })
    }

    fn row_to_listing(row: &Row) -> duckdb::Result<AgentListing> {
        // 0: listing_id, 1: title, 2: price, 3: location, 4: beds, 5: baths,
        // 6: sqft, 7: image, 8: status, 9: agent_id, 10: created_at
        let id: String = row.get(0)?;
        let status: String = row.get(8)?;
        let created: String = row.get(10)?;

        Ok(AgentListing {
            id: Uuid::parse_str(&id).unwrap_or_else(|_| Uuid::nil()),
            title: row.get(1)?,
            price: row.get(2)?,
            location: row.get(3)?,
            beds: to_u32(row.get(4)?),
            baths: to_u32(row.get(5)?),
            sqft: to_u32(row.get(6)?),
            image: row.get(7)?,
            status: ListingStatus::parse(&status).unwrap_or(ListingStatus::Active),
            agent_id: row.get(9)?,
            created_at: parse_timestamp(&created),
        })
    }

    fn query_credentials(
        &self,
        where_clause: &str,
        param: Option<&str>,
    ) -> Result<Vec<Credential>> {
        let conn = self.conn()?;
        let sql = format!(
            "SELECT user_id, email, password_hash, name, phone, favorites, saved_searches,
                    role, license_number, created_at
             FROM sys_credentials {} ORDER BY seq",
            where_clause
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = match param {
            Some(p) => stmt
                .query_map([p], Self::row_to_credential)?
                .collect::<std::result::Result<Vec<_>, _>>()?,
            None => stmt
                .query_map([], Self::row_to_credential)?
                .collect::<std::result::Result<Vec<_>, _>>()?,
        };
        Ok(rows)
    }
}

impl CredentialStore for DuckDbRepository {
    fn insert_credential(&self, credential: &Credential) -> Result<()> {
        let conn = self.conn()?;

        let taken: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sys_credentials WHERE email = ?",
            [&credential.email],
            |row| row.get(0),
        )?;
        if taken > 0 {
            return Err(Error::AlreadyExists);
        }

        let seq = Self::next_seq(&conn, "sys_credentials")?;
        conn.execute(
            "INSERT INTO sys_credentials (user_id, email, password_hash, name, phone,
                                          favorites, saved_searches, role, license_number,
                                          created_at, seq)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                credential.user_id,
                credential.email,
                credential.password_hash,
                credential.name,
                credential.phone,
                serde_json::to_string(&credential.favorites)?,
                serde_json::to_string(&credential.saved_searches)?,
                credential.role.as_str(),
                credential.license_number,
                credential.created_at.to_rfc3339(),
                seq,
            ],
        )
        .map_err(|e| {
            if is_unique_violation(&e) {
                Error::AlreadyExists
            } else {
                e.into()
            }
        })?;

        Ok(())
    }

    fn find_credential_by_email(&self, email: &str) -> Result<Option<Credential>> {
        Ok(self
            .query_credentials("WHERE email = ?", Some(email))?
            .into_iter()
            .next())
    }

    fn find_credential_by_id(&self, user_id: &str) -> Result<Option<Credential>> {
        Ok(self
            .query_credentials("WHERE user_id = ?", Some(user_id))?
            .into_iter()
            .next())
    }

    fn update_credential(&self, credential: &Credential) -> Result<()> {
        let conn = self.conn()?;
        let updated = conn
            .execute(
                "UPDATE sys_credentials
                 SET email = ?, name = ?, phone = ?, favorites = ?, saved_searches = ?
                 WHERE user_id = ?",
                params![
                    credential.email,
                    credential.name,
                    credential.phone,
                    serde_json::to_string(&credential.favorites)?,
                    serde_json::to_string(&credential.saved_searches)?,
                    credential.user_id,
                ],
            )
            .map_err(|e| {
                if is_unique_violation(&e) {
                    Error::AlreadyExists
                } else {
                    e.into()
                }
            })?;

        if updated == 0 {
            return Err(Error::not_found(format!("credential {}", credential.user_id)));
        }
        Ok(())
    }

    fn list_credentials(&self) -> Result<Vec<Credential>> {
        self.query_credentials("", None)
    }
}

impl SessionStore for DuckDbRepository {
    fn load_session(&self) -> Result<StoredSession> {
        let conn = self.conn()?;
        let row = conn
            .query_row(
                "SELECT user_json, authenticated FROM sys_session WHERE slot = ?",
                [SESSION_SLOT],
                |row| {
                    Ok(StoredSession {
                        user_json: row.get::<_, Option<String>>(0)?,
                        authenticated: row.get(1)?,
                    })
                },
            )
            .optional()?;

        Ok(row.unwrap_or(StoredSession {
            user_json: None,
            authenticated: false,
        }))
    }

    fn save_session(&self, user_json: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO sys_session (slot, user_json, authenticated, updated_at)
             VALUES (?, ?, TRUE, ?)
             ON CONFLICT (slot) DO UPDATE SET
                user_json = EXCLUDED.user_json,
                authenticated = EXCLUDED.authenticated,
                updated_at = EXCLUDED.updated_at",
            params![SESSION_SLOT, user_json, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn clear_session(&self) -> Result<()> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM sys_session", [])?;
        Ok(())
    }
}

impl BookingStore for DuckDbRepository {
    fn add_booking(&self, booking: &Booking) -> Result<()> {
        let conn = self.conn()?;
        let seq = Self::next_seq(&conn, "sys_bookings")?;
        conn.execute(
            "INSERT INTO sys_bookings (booking_id, property_id, property_name, user_id, user_name,
                                       email, phone, booking_date, time_slot, notes, status,
                                       created_at, seq)
             VALUES (?, ?, ?, ?, ?, ?, ?, CAST(? AS DATE), ?, ?, ?, ?, ?)",
            params![
                booking.id.to_string(),
                booking.property_id,
                booking.property_name,
                booking.user_id,
                booking.user_name,
                booking.email,
                booking.phone,
                booking.date.format("%Y-%m-%d").to_string(),
                booking.time,
                booking.notes,
                booking.status.as_str(),
                booking.created_at.to_rfc3339(),
                seq,
            ],
        )?;
        Ok(())
    }

    fn get_bookings(&self) -> Result<Vec<Booking>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT booking_id, property_id, property_name, user_id, user_name, email, phone,
                    booking_date::VARCHAR, time_slot, notes, status, created_at
             FROM sys_bookings ORDER BY seq",
        )?;
        let bookings = stmt
            .query_map([], Self::row_to_booking)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(bookings)
    }

    fn get_bookings_for_user(&self, user_id: &str) -> Result<Vec<Booking>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT booking_id, property_id, property_name, user_id, user_name, email, phone,
                    booking_date::VARCHAR, time_slot, notes, status, created_at
             FROM sys_bookings WHERE user_id = ? ORDER BY seq",
        )?;
        let bookings = stmt
            .query_map([user_id], Self::row_to_booking)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(bookings)
    }
}

impl ListingStore for DuckDbRepository {
    fn add_listing(&self, listing: &AgentListing) -> Result<()> {
        let conn = self.conn()?;
        let seq = Self::next_seq(&conn, "sys_agent_listings")?;
        conn.execute(
            "INSERT INTO sys_agent_listings (listing_id, title, price, location, beds, baths, sqft,
                                             image, status, agent_id, created_at, seq)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                listing.id.to_string(),
                listing.title,
                listing.price,
                listing.location,
                listing.beds,
                listing.baths,
                listing.sqft,
                listing.image,
                listing.status.as_str(),
                listing.agent_id,
                listing.created_at.to_rfc3339(),
                seq,
            ],
        )?;
        Ok(())
    }

    fn get_listings(&self) -> Result<Vec<AgentListing>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT listing_id, title, price, location, beds, baths, sqft, image, status,
                    agent_id, created_at
             FROM sys_agent_listings ORDER BY seq",
        )?;
        let listings = stmt
            .query_map([], Self::row_to_listing)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(listings)
    }

    fn get_listing_by_id(&self, id: Uuid) -> Result<Option<AgentListing>> {
        let conn = self.conn()?;
        let listing = conn
            .query_row(
                "SELECT listing_id, title, price, location, beds, baths, sqft, image, status,
                        agent_id, created_at
                 FROM sys_agent_listings WHERE listing_id = ?",
                [id.to_string()],
                Self::row_to_listing,
            )
            .optional()?;
        Ok(listing)
    }
}

fn to_u32(v: i64) -> u32 {
    u32::try_from(v).unwrap_or(0)
}

fn parse_timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_else(|_| Utc::now().date_naive())
}
