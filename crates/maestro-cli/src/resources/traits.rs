use crate::resources::error::Result;
use crate::resources::results::{AssociationOutcome, WriteOutcome};
use crate::resources::selector::{Selector, exactly_one};

use async_trait::async_trait;
use maestro_core::ProjectFields;

/// Read access to a named collection.
#[async_trait]
pub trait Get: Send + Sync {
    type Record: Send;

    /// Collection name used in error messages
    fn kind(&self) -> &'static str;

    async fn get_by_id(&self, id: i64) -> Result<Self::Record>;

    async fn find_by_name(&self, name: &str) -> Result<Vec<Self::Record>>;

    /// Resolve a selector to exactly one record: primary keys are fetched
    /// directly, names must match a single record.
    async fn get_one(&self, selector: &Selector) -> Result<Self::Record> {
        match selector {
            Selector::Id(id) => self.get_by_id(*id).await,
            Selector::Name(name) => {
                let matches = self.find_by_name(name).await?;
                exactly_one(matches, self.kind(), name)
            }
        }
    }
}

/// Create-if-absent write access.
#[async_trait]
pub trait Create {
    /// Create a record unless one with the same identity exists; the
    /// existing record comes back with `changed: false`.
    async fn create(
        &self,
        fields: &ProjectFields,
        organization: Option<&Selector>,
    ) -> Result<WriteOutcome>;
}

/// Field-patch write access with no-op detection.
#[async_trait]
pub trait Modify {
    /// Patch the given fields; when nothing would change, no write is
    /// issued and `changed` is false.
    async fn modify(&self, selector: &Selector, fields: &ProjectFields) -> Result<WriteOutcome>;
}

/// Membership management for a parent collection.
#[async_trait]
pub trait Associate {
    /// Put `child_id` into `owner_id`'s collection unless it is already
    /// there.
    async fn associate(&self, owner_id: i64, child_id: i64) -> Result<AssociationOutcome>;
}
