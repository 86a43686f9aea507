//! Data model for the upstream student API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single student record as returned by the upstream API.
///
/// The upstream serializes with camelCase keys and RFC 3339 timestamps.
/// A record is fetched at most once per inbound request and is never
/// mutated or persisted.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub system_access: bool,
    pub phone: String,
    pub gender: String,
    pub dob: DateTime<Utc>,
    pub class: String,
    pub section: String,
    pub roll: u32,
    pub father_name: String,
    pub father_phone: String,
    pub mother_name: String,
    pub mother_phone: String,
    pub guardian_name: String,
    pub guardian_phone: String,
    pub relation_of_guardian: String,
    pub current_address: String,
    pub permanent_address: String,
    pub admission_date: DateTime<Utc>,
    /// Name of the staff member the report is produced for.
    #[serde(default)]
    pub reporter_name: String,
}
