use serde::{Deserialize, Serialize};

/// One page of a collection listing, as the server shapes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPage<T> {
    pub count: i64,
    pub results: Vec<T>,
}
