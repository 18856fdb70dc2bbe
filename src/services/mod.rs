pub mod tier_prices;

pub use tier_prices::{
    TierPriceError, TierPriceResolver, TierPriceResult, load_tier_price, load_tier_table,
};
