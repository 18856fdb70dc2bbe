use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::tier_price::TierPrice;
use crate::domain::tier_selection::tier_table;

/// Product variant together with the tier prices it exclusively owns.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductVariant {
    /// Unique identifier of the product variant.
    pub id: i32,
    tier_prices: Vec<TierPrice>,
}

impl ProductVariant {
    /// Create a variant without any tier prices.
    pub fn new(id: i32) -> Self {
        Self {
            id,
            tier_prices: Vec::new(),
        }
    }

    /// All tier prices of the variant, across every channel.
    pub fn tier_prices(&self) -> &[TierPrice] {
        &self.tier_prices
    }

    /// Attach a tier price, taking ownership of it.
    pub fn add_tier_price(&mut self, mut tier_price: TierPrice) {
        tier_price.product_variant_id = self.id;
        self.tier_prices.push(tier_price);
    }

    /// Detach the tier price with `id`, handing it back to the caller.
    pub fn remove_tier_price(&mut self, id: i32) -> Option<TierPrice> {
        let index = self
            .tier_prices
            .iter()
            .position(|tier_price| tier_price.id == id)?;
        Some(self.tier_prices.remove(index))
    }

    /// Replace every tier price of the variant.
    pub fn set_tier_prices(&mut self, tier_prices: impl IntoIterator<Item = TierPrice>) {
        self.tier_prices.clear();
        for tier_price in tier_prices {
            self.add_tier_price(tier_price);
        }
    }

    /// Tier prices a buyer sees in `channel_code` at `now`, one per quantity, ascending.
    pub fn tier_prices_for_channel(
        &self,
        channel_code: &str,
        customer_group_code: Option<&str>,
        now: NaiveDateTime,
    ) -> Vec<TierPrice> {
        let in_channel = self.tier_prices_in_channel(channel_code);
        tier_table(in_channel, customer_group_code, now)
    }

    pub(crate) fn tier_prices_in_channel(&self, channel_code: &str) -> Vec<TierPrice> {
        self.tier_prices
            .iter()
            .filter(|tier_price| tier_price.channel_code == channel_code)
            .cloned()
            .collect()
    }
}
