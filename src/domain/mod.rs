pub mod product_variant;
pub mod tier_price;
pub mod tier_selection;
