use pushkind_common::db::{DbConnection, DbPool};
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::tier_price::{NewTierPrice, TierPrice};

pub mod product_variant;
pub mod tier_price;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read access to the candidate tier prices of a product variant.
///
/// Implementations return every tier price of the variant in the channel,
/// whatever its start date or customer group, in no particular order.
pub trait TierPriceReader {
    fn list_tier_prices(
        &self,
        product_variant_id: i32,
        channel_code: &str,
    ) -> RepositoryResult<Vec<TierPrice>>;
}

/// Write operations over tier price records.
pub trait TierPriceWriter {
    fn create_tier_price(&self, new_tier_price: &NewTierPrice) -> RepositoryResult<TierPrice>;
    fn replace_tier_prices(
        &self,
        product_variant_id: i32,
        new_tier_prices: &[NewTierPrice],
    ) -> RepositoryResult<Vec<TierPrice>>;
    fn delete_tier_price(&self, tier_price_id: i32) -> RepositoryResult<()>;
}
