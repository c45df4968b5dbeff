use serde::{Deserialize, Serialize};

/// An organization record, reduced to what name resolution needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,
}
