use crate::resources::error::{ResourceError, Result};

/// How the user named a record on the command line.
///
/// An all-digit value is taken as a primary key, anything else as a
/// unique name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(i64),
    Name(String),
}

impl Selector {
    pub fn parse(raw: &str) -> Self {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            // Digits too large for an id fall through to the name form
            if let Ok(id) = raw.parse() {
                return Self::Id(id);
            }
        }

        Self::Name(raw.to_string())
    }
}

/// Reduce a find result to at most one record; more than one match means
/// the name is not usable as an identity.
pub(crate) fn at_most_one<T>(mut results: Vec<T>, kind: &str, name: &str) -> Result<Option<T>> {
    match results.len() {
        0 => Ok(None),
        1 => Ok(Some(results.remove(0))),
        n => Err(ResourceError::ambiguous(format!(
            "Multiple {} records match {:?} ({} found); use the id instead",
            kind, name, n
        ))),
    }
}

/// Reduce a find result to exactly one record.
pub(crate) fn exactly_one<T>(results: Vec<T>, kind: &str, name: &str) -> Result<T> {
    at_most_one(results, kind, name)?.ok_or_else(|| {
        ResourceError::not_found(format!(
            "The requested {} could not be found: {:?}",
            kind, name
        ))
    })
}
