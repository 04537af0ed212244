//! Per-entity query templates
//!
//! Employees and teams share the same query shapes; only the table, id column
//! and display-name expression differ. Those come from the closed
//! [`EntityKind`] enum, never from request input. Ids are bound parameters.

use crate::Result;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Report subject: an employee or a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Employee,
    Team,
}

impl EntityKind {
    /// Both kinds, in the order the profile selector lists them
    pub const ALL: [EntityKind; 2] = [EntityKind::Employee, EntityKind::Team];

    /// Table holding one row per entity
    pub fn table_name(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Team => "team",
        }
    }

    /// Foreign key column used by `employee_events` and `notes`
    pub fn id_column(self) -> &'static str {
        match self {
            Self::Employee => "employee_id",
            Self::Team => "team_id",
        }
    }

    /// Capitalised label used in forms and headings ("Employee" / "Team")
    pub fn label(self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Team => "Team",
        }
    }

    /// URL path segment of the report page
    pub fn route_segment(self) -> &'static str {
        self.table_name()
    }

    fn name_expr(self) -> &'static str {
        match self {
            Self::Employee => "first_name || ' ' || last_name",
            Self::Team => "team_name",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

impl FromStr for EntityKind {
    type Err = crate::Error;

    /// Accepts only the exact form label ("Employee" or "Team")
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Employee" => Ok(Self::Employee),
            "Team" => Ok(Self::Team),
            other => Err(crate::Error::InvalidInput(format!(
                "unknown profile type: {}",
                other
            ))),
        }
    }
}

/// Display name and id of one entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityName {
    pub name: String,
    pub id: i64,
}

/// Daily event totals for one entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventCount {
    pub event_date: String,
    pub positive_events: i64,
    pub negative_events: i64,
}

/// Dated free-text note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub note_date: String,
    pub note: String,
}

/// Classifier input row: summed events for one employee
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelFeatures {
    pub positive_events: f64,
    pub negative_events: f64,
}

/// Query templates bound to one entity kind
#[derive(Debug, Clone)]
pub struct EntityQueries {
    db: SqlitePool,
    kind: EntityKind,
}

impl EntityQueries {
    pub fn new(db: SqlitePool, kind: EntityKind) -> Self {
        Self { db, kind }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Every entity of this kind, ordered by id
    pub async fn names(&self) -> Result<Vec<EntityName>> {
        let sql = format!(
            "SELECT {name}, {id} FROM {table} ORDER BY {id}",
            name = self.kind.name_expr(),
            id = self.kind.id_column(),
            table = self.kind.table_name(),
        );

        let rows = sqlx::query_as::<_, (Option<String>, i64)>(&sql)
            .fetch_all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(name, id)| EntityName {
                name: name.unwrap_or_default(),
                id,
            })
            .collect())
    }

    /// Display name of a single entity, if it exists
    pub async fn display_name(&self, id: i64) -> Result<Option<String>> {
        let sql = format!(
            "SELECT {name} FROM {table} WHERE {id_col} = ?",
            name = self.kind.name_expr(),
            table = self.kind.table_name(),
            id_col = self.kind.id_column(),
        );

        let name = sqlx::query_scalar::<_, Option<String>>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(name.flatten())
    }

    /// Positive and negative event totals per day, ordered by date
    pub async fn event_counts(&self, id: i64) -> Result<Vec<EventCount>> {
        let sql = format!(
            r#"
            SELECT event_date
                 , SUM(positive_events) AS positive_events
                 , SUM(negative_events) AS negative_events
            FROM employee_events
            WHERE {id_col} = ?
            GROUP BY event_date
            ORDER BY event_date
            "#,
            id_col = self.kind.id_column(),
        );

        let rows = sqlx::query_as::<_, (String, Option<i64>, Option<i64>)>(&sql)
            .bind(id)
            .fetch_all(&self.db)
            .await?;

        debug!(kind = %self.kind, id, rows = rows.len(), "event counts");

        Ok(rows
            .into_iter()
            .map(|(event_date, pos, neg)| EventCount {
                event_date,
                positive_events: pos.unwrap_or(0),
                negative_events: neg.unwrap_or(0),
            })
            .collect())
    }

    /// Notes attributed to the entity, ordered by date
    pub async fn notes(&self, id: i64) -> Result<Vec<Note>> {
        let sql = format!(
            r#"
            SELECT note_date, note
            FROM notes
            WHERE {id_col} = ?
            ORDER BY note_date
            "#,
            id_col = self.kind.id_column(),
        );

        let rows = sqlx::query_as::<_, (String, Option<String>)>(&sql)
            .bind(id)
            .fetch_all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(note_date, note)| Note {
                note_date,
                note: note.unwrap_or_default(),
            })
            .collect())
    }

    /// Classifier features: one row per employee in scope
    ///
    /// An employee report yields a single row; a team report yields one row
    /// per team member with events recorded.
    pub async fn model_data(&self, id: i64) -> Result<Vec<ModelFeatures>> {
        let sql = format!(
            r#"
            SELECT SUM(positive_events) AS positive_events
                 , SUM(negative_events) AS negative_events
            FROM employee_events
            WHERE {id_col} = ?
            GROUP BY employee_id
            ORDER BY employee_id
            "#,
            id_col = self.kind.id_column(),
        );

        let rows = sqlx::query_as::<_, (Option<i64>, Option<i64>)>(&sql)
            .bind(id)
            .fetch_all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(pos, neg)| ModelFeatures {
                positive_events: pos.unwrap_or(0) as f64,
                negative_events: neg.unwrap_or(0) as f64,
            })
            .collect())
    }
}
