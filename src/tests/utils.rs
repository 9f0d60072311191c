use crate::config::DbConfig;
use crate::db::connection::{apply_schema, Database};
use crate::db::properties::create_property;
use crate::db::users::create_user;
use crate::domain::property::{NewProperty, Property};
use crate::domain::user::{NewUser, User};
use rusqlite::params;
use tempfile::TempDir;

/// A schema-initialized database in its own temp directory.
/// Keep the `TempDir` alive for as long as the database is used.
pub fn init_test_db() -> (TempDir, Database) {
    init_test_db_with(|_| {})
}

pub fn init_test_db_with(configure: impl FnOnce(&mut DbConfig)) -> (TempDir, Database) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut config = DbConfig {
        database_path: dir.path().join("lightbnb_test.sqlite3"),
        ..DbConfig::default()
    };
    configure(&mut config);

    let db = Database::from_config(&config);
    apply_schema(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    (dir, db)
}

pub fn add_user(db: &Database, name: &str, email: &str) -> User {
    create_user(
        db,
        &NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password: "$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED/.JBIDRh70tGevYzYzQgFId2u.".to_string(),
        },
    )
    .unwrap()
}

pub fn new_property(owner_id: i64, title: &str, city: &str, cost_per_night: i64) -> NewProperty {
    NewProperty {
        owner_id,
        title: title.to_string(),
        description: "description".to_string(),
        thumbnail_photo_url: "https://images.example.com/thumb.jpg".to_string(),
        cover_photo_url: "https://images.example.com/cover.jpg".to_string(),
        cost_per_night,
        street: "123 Main St".to_string(),
        city: city.to_string(),
        province: "BC".to_string(),
        post_code: "V5K 0A1".to_string(),
        country: "Canada".to_string(),
        parking_spaces: 1,
        number_of_bathrooms: 1,
        number_of_bedrooms: 2,
    }
}

pub fn add_property(db: &Database, owner_id: i64, title: &str, city: &str, cost: i64) -> Property {
    create_property(db, &new_property(owner_id, title, city, cost)).unwrap()
}

pub fn add_reservation(
    db: &Database,
    guest_id: i64,
    property_id: i64,
    start_date: &str,
    end_date: &str,
) -> i64 {
    db.with_conn(|conn| {
        conn.execute(
            "insert into reservations (start_date, end_date, property_id, guest_id) values (?1, ?2, ?3, ?4)",
            params![start_date, end_date, property_id, guest_id],
        )?;
        Ok(conn.last_insert_rowid())
    })
    .unwrap()
}

/// Adds a reservation for the guest and a review with `rating` on top of it.
pub fn add_review(db: &Database, guest_id: i64, property_id: i64, rating: i64) {
    let reservation_id = add_reservation(db, guest_id, property_id, "2024-01-01", "2024-01-05");
    db.with_conn(|conn| {
        conn.execute(
            "insert into property_reviews (guest_id, property_id, reservation_id, rating, message) values (?1, ?2, ?3, ?4, 'review')",
            params![guest_id, property_id, reservation_id, rating],
        )?;
        Ok(())
    })
    .unwrap()
}
