//! Fetcher capability + the production inventory-API implementation.

pub mod inventory;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::reservation::RawReservation;
use crate::resource::ResourceKind;

/// One reservation inventory. Implementations are independent of each
/// other; a failed fetch aborts the whole run without retry.
#[async_trait]
pub trait ReservationSource: Send + Sync {
    /// Which report slot this source's records belong to.
    fn kind(&self) -> ResourceKind;

    /// Query the inventory. An empty inventory is an empty vec, not an error.
    async fn fetch(&self) -> Result<Vec<RawReservation>, FetchError>;
}
