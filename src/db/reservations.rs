// src/db/reservations.rs
use crate::db::connection::Database;
use crate::db::properties::property_from_row;
use crate::db::search::DEFAULT_LIMIT;
use crate::domain::reservation::GuestReservation;
use crate::errors::DbResult;
use rusqlite::params;

/// Reservations made by `guest_id`, each with the full property it books,
/// earliest start date first. `limit` defaults to 10.
pub fn list_reservations_for_guest(
    db: &Database,
    guest_id: i64,
    limit: Option<u32>,
) -> DbResult<Vec<GuestReservation>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT);

    db.with_conn(|conn| {
        // Only `properties` contributes an `id` column; the reservation id is aliased.
        let mut stmt = conn.prepare(
            r#"
            SELECT
                reservations.id AS reservation_id,
                reservations.guest_id,
                reservations.start_date,
                reservations.end_date,
                properties.*
            FROM reservations
            JOIN users ON users.id = reservations.guest_id
            JOIN properties ON properties.id = reservations.property_id
            WHERE users.id = ?1
            ORDER BY reservations.start_date
            LIMIT ?2
            "#,
        )?;

        let rows = stmt.query_map(params![guest_id, limit], |row| {
            Ok(GuestReservation {
                id: row.get("reservation_id")?,
                guest_id: row.get("guest_id")?,
                start_date: row.get("start_date")?,
                end_date: row.get("end_date")?,
                property: property_from_row(row)?,
            })
        })?;

        let mut reservations = Vec::new();
        for r in rows {
            reservations.push(r?);
        }
        Ok(reservations)
    })
}
