use crate::models::update_status::UpdateStatus;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A project update job record.
///
/// Only the fields the controller inspects are typed. Everything else the
/// server sends rides along in `extra`, so detail output reproduces the
/// record as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectUpdate {
    pub id: i64,
    pub status: UpdateStatus,
    #[serde(default)]
    pub failed: bool,
    #[serde(default)]
    pub elapsed: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
