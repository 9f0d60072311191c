// src/db/properties.rs
use crate::db::connection::Database;
use crate::domain::property::{NewProperty, Property};
use crate::errors::DbResult;
use rusqlite::{params, Row};

/// Maps a row carrying the `properties` columns (by name) into a `Property`.
pub(crate) fn property_from_row(row: &Row<'_>) -> rusqlite::Result<Property> {
    Ok(Property {
        id: row.get("id")?,
        owner_id: row.get("owner_id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        thumbnail_photo_url: row.get("thumbnail_photo_url")?,
        cover_photo_url: row.get("cover_photo_url")?,
        cost_per_night: row.get("cost_per_night")?,
        parking_spaces: row.get("parking_spaces")?,
        number_of_bathrooms: row.get("number_of_bathrooms")?,
        number_of_bedrooms: row.get("number_of_bedrooms")?,
        country: row.get("country")?,
        street: row.get("street")?,
        city: row.get("city")?,
        province: row.get("province")?,
        post_code: row.get("post_code")?,
    })
}

/// Inserts a new property and returns the stored row.
pub fn create_property(db: &Database, property: &NewProperty) -> DbResult<Property> {
    db.with_conn(|conn| {
        let created = conn.query_row(
            r#"
            INSERT INTO properties (
                owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, street, city, province, post_code, country,
                parking_spaces, number_of_bathrooms, number_of_bedrooms
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
            RETURNING *
            "#,
            params![
                property.owner_id,
                &property.title,
                &property.description,
                &property.thumbnail_photo_url,
                &property.cover_photo_url,
                property.cost_per_night,
                &property.street,
                &property.city,
                &property.province,
                &property.post_code,
                &property.country,
                property.parking_spaces,
                property.number_of_bathrooms,
                property.number_of_bedrooms,
            ],
            property_from_row,
        )?;
        Ok(created)
    })
}
