// src/db/users.rs
use crate::db::connection::Database;
use crate::domain::user::{NewUser, User};
use crate::errors::DbResult;
use rusqlite::{params, OptionalExtension, Row};

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        password: row.get(3)?,
    })
}

/// Looks a user up by email. The comparison is exact (case-sensitive);
/// callers normalize the address if they need otherwise.
pub fn get_user_by_email(db: &Database, email: &str) -> DbResult<Option<User>> {
    db.with_conn(|conn| {
        let user = conn
            .query_row(
                "select id, name, email, password from users where email = ?1",
                params![email],
                user_from_row,
            )
            .optional()?;
        Ok(user)
    })
}

/// All users with the given id (at most one, since `id` is the primary key).
pub fn get_user_by_id(db: &Database, id: i64) -> DbResult<Vec<User>> {
    db.with_conn(|conn| {
        let mut stmt =
            conn.prepare("select id, name, email, password from users where id = ?1")?;
        let rows = stmt.query_map(params![id], user_from_row)?;

        let mut users = Vec::new();
        for r in rows {
            users.push(r?);
        }
        Ok(users)
    })
}

/// Inserts a user and returns the stored row. Uniqueness of the email is
/// enforced by the schema; a duplicate surfaces as `DbError::Query`.
pub fn create_user(db: &Database, user: &NewUser) -> DbResult<User> {
    db.with_conn(|conn| {
        let created = conn.query_row(
            r#"
            insert into users (name, email, password)
            values (?1, ?2, ?3)
            returning id, name, email, password
            "#,
            params![&user.name, &user.email, &user.password],
            user_from_row,
        )?;
        Ok(created)
    })
}
