pub mod tier_price;
