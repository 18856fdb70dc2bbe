use mockall::mock;

use super::TierPriceReader;
use crate::domain::tier_price::TierPrice;
use pushkind_common::repository::errors::RepositoryResult;

mock! {
    pub TierPriceReader {}

    impl TierPriceReader for TierPriceReader {
        fn list_tier_prices(&self, product_variant_id: i32, channel_code: &str) -> RepositoryResult<Vec<TierPrice>>;
    }
}
