use serde::{Deserialize, Serialize};

/// A credential record, reduced to what name resolution needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub id: i64,
    pub name: String,
}
