//! Usage statistics event definitions.
//!
//! Each row of `staEVENT` describes one kind of custom event the statistics
//! subsystem records (e.g., "baskets", "alerts"), together with the names of
//! the extra columns stored per occurrence.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Table holding event definitions.
pub const STA_EVENT_TABLE: &str = "staEVENT";

/// Event definition record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StaEvent {
    /// Event identifier (e.g., "baskets").
    pub id: String,

    /// Auto-assigned event number, unique across events.
    ///
    /// Event numbers span the unsigned smallint range (0..=65535), so the
    /// column is an `INTEGER`.
    pub number: i32,

    /// Human-readable event name.
    pub name: Option<String>,

    /// When the event was defined (server default: current timestamp).
    pub creation_time: NaiveDateTime,

    /// Comma-separated names of the extra columns recorded per occurrence.
    pub cols: Option<String>,
}

/// Input for defining a new event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStaEvent {
    pub id: String,
    pub name: Option<String>,
    pub cols: Option<Vec<String>>,
}

impl StaEvent {
    /// Names of the extra columns, in declaration order.
    pub fn columns(&self) -> Vec<&str> {
        self.cols
            .as_deref()
            .map(|cols| {
                cols.split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Define a new event.
    pub async fn create(pool: &PgPool, input: CreateStaEvent) -> Result<Self> {
        let cols = input.cols.map(|cols| cols.join(","));

        let event = sqlx::query_as::<_, StaEvent>(
            r#"
            INSERT INTO "staEVENT" (id, name, cols)
            VALUES ($1, $2, $3)
            RETURNING id, number, name, creation_time, cols
            "#,
        )
        .bind(&input.id)
        .bind(&input.name)
        .bind(&cols)
        .fetch_one(pool)
        .await
        .context("failed to create statistics event")?;

        Ok(event)
    }

    /// Find an event by ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Self>> {
        let event = sqlx::query_as::<_, StaEvent>(
            r#"SELECT id, number, name, creation_time, cols FROM "staEVENT" WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to fetch statistics event by id")?;

        Ok(event)
    }

    /// List all events ordered by number.
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>> {
        let events = sqlx::query_as::<_, StaEvent>(
            r#"SELECT id, number, name, creation_time, cols FROM "staEVENT" ORDER BY number ASC"#,
        )
        .fetch_all(pool)
        .await
        .context("failed to list statistics events")?;

        Ok(events)
    }

    /// Count defined events.
    pub async fn count(pool: &PgPool) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "staEVENT""#)
            .fetch_one(pool)
            .await
            .context("failed to count statistics events")?;

        Ok(count)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn event(cols: Option<&str>) -> StaEvent {
        StaEvent {
            id: "baskets".to_string(),
            number: 1,
            name: Some("Basket operations".to_string()),
            creation_time: NaiveDateTime::default(),
            cols: cols.map(str::to_string),
        }
    }

    #[test]
    fn columns_split_on_commas() {
        assert_eq!(
            event(Some("action, basket_id,user")).columns(),
            vec!["action", "basket_id", "user"]
        );
    }

    #[test]
    fn columns_skip_blanks() {
        assert_eq!(event(Some("action,,  ,user,")).columns(), vec!["action", "user"]);
    }

    #[test]
    fn columns_empty_when_unset() {
        assert!(event(None).columns().is_empty());
        assert!(event(Some("")).columns().is_empty());
    }

    #[test]
    fn serializes_creation_time() {
        let json = serde_json::to_value(event(None)).unwrap();
        assert_eq!(json["id"], "baskets");
        assert_eq!(json["creation_time"], "1970-01-01T00:00:00");
    }
}
