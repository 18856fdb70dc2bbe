pub mod tier_prices;
