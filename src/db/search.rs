// src/db/search.rs
//
// Filtered property search. The query is assembled from optional fragments;
// every externally supplied value is bound as a numbered parameter whose index
// is its 1-based position in `params`.
use crate::db::connection::Database;
use crate::db::properties::property_from_row;
use crate::domain::property::PropertyListing;
use crate::domain::search::SearchCriteria;
use crate::errors::DbResult;
use log::debug;
use rusqlite::params_from_iter;
use rusqlite::types::{ToSql, ToSqlOutput};

pub const DEFAULT_LIMIT: u32 = 10;

const BASE_QUERY: &str = r#"SELECT properties.*, avg(property_reviews.rating) AS average_rating
FROM properties
JOIN property_reviews ON properties.id = property_reviews.property_id
WHERE 1=1"#;

/// A value bound to a positional placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Integer(i64),
}

impl ToSql for SqlParam {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            SqlParam::Text(s) => s.to_sql(),
            SqlParam::Integer(i) => i.to_sql(),
        }
    }
}

/// Query text plus its ordered parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl SearchQuery {
    fn bind(&mut self, param: SqlParam) -> usize {
        self.params.push(param);
        self.params.len()
    }
}

/// Makes `%`, `_` and `\` in a user-supplied value match literally under `ESCAPE '\'`.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Builds the search over properties joined with their reviews, grouped per
/// property, cheapest first, capped at `limit` rows.
///
/// Clause order is fixed: city, price range, `GROUP BY`, rating (`HAVING`),
/// then `ORDER BY` / `LIMIT`. The price range only applies when both bounds are set.
pub fn build_search_query(criteria: &SearchCriteria, limit: u32) -> SearchQuery {
    let mut query = SearchQuery {
        sql: BASE_QUERY.to_string(),
        params: Vec::new(),
    };

    if let Some(city) = criteria.city() {
        let n = query.bind(SqlParam::Text(format!("%{}%", escape_like(city))));
        query.sql.push_str(&format!("\n  AND city LIKE ?{n} ESCAPE '\\'"));
    }

    if let Some((min, max)) = criteria.price_range_minor_units() {
        let lo = query.bind(SqlParam::Integer(min));
        let hi = query.bind(SqlParam::Integer(max));
        query.sql.push_str(&format!(
            "\n  AND cost_per_night >= ?{lo} AND cost_per_night <= ?{hi}"
        ));
    }

    query.sql.push_str("\nGROUP BY properties.id");

    if let Some(rating) = criteria.minimum_rating() {
        let n = query.bind(SqlParam::Text(rating.to_string()));
        query.sql.push_str(&format!(
            "\nHAVING avg(property_reviews.rating) >= CAST(?{n} AS REAL)"
        ));
    }

    let n = query.bind(SqlParam::Integer(i64::from(limit)));
    query.sql.push_str(&format!("\nORDER BY cost_per_night\nLIMIT ?{n}"));

    query
}

/// Runs the filtered search. `limit` defaults to 10.
pub fn search_properties(
    db: &Database,
    criteria: &SearchCriteria,
    limit: Option<u32>,
) -> DbResult<Vec<PropertyListing>> {
    let query = build_search_query(criteria, limit.unwrap_or(DEFAULT_LIMIT));
    debug!("search_properties {criteria:?}\n{}\n{:?}", query.sql, query.params);

    db.with_conn(|conn| {
        let mut stmt = conn.prepare(&query.sql)?;
        let rows = stmt.query_map(params_from_iter(query.params.iter()), |row| {
            Ok(PropertyListing {
                property: property_from_row(row)?,
                average_rating: row.get("average_rating")?,
            })
        })?;

        let mut listings = Vec::new();
        for r in rows {
            listings.push(r?);
        }
        Ok(listings)
    })
}
