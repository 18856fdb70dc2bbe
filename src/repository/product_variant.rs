use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::product_variant::ProductVariant;
use crate::domain::tier_price::TierPrice;
use crate::repository::TierPriceReader;

/// Serves the variant's own snapshot, so an in-memory variant can feed the resolver.
impl TierPriceReader for ProductVariant {
    fn list_tier_prices(
        &self,
        product_variant_id: i32,
        channel_code: &str,
    ) -> RepositoryResult<Vec<TierPrice>> {
        if product_variant_id != self.id {
            return Ok(Vec::new());
        }

        Ok(self.tier_prices_in_channel(channel_code))
    }
}
