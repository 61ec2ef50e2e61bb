//! Read access to the shadow live database.

pub mod postgres;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::row::EditableListRow;

pub use postgres::PgShadowStore;

/// Looks up the editable list configuration for a version.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Returns the first row whose `version` equals `version`, or `None`.
    ///
    /// A `None` version matches no row.
    async fn fetch(&self, version: Option<&str>) -> Result<Option<EditableListRow>, StoreError>;
}
