//! # Employee Events Common Library
//!
//! Shared code for the employee events dashboard:
//! - Error type
//! - Configuration resolution (CLI → ENV → TOML → default)
//! - Database access (read-only connection, per-entity query templates)
//! - Recruitment risk classifier

pub mod config;
pub mod db;
pub mod error;
pub mod model;

pub use db::{EntityKind, EntityQueries};
pub use error::{Error, Result};
pub use model::{LogisticModel, RiskModel};
