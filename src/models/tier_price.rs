use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::tier_price::{NewTierPrice as DomainNewTierPrice, TierPrice as DomainTierPrice};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::tier_prices)]
pub struct TierPrice {
    pub id: i32,
    pub product_variant_id: i32,
    pub channel_code: String,
    pub customer_group_code: Option<String>,
    pub quantity: i32,
    pub price_cents: i32,
    pub starts_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::tier_prices)]
pub struct NewTierPrice<'a> {
    pub product_variant_id: i32,
    pub channel_code: &'a str,
    pub customer_group_code: Option<&'a str>,
    pub quantity: i32,
    pub price_cents: i32,
    pub starts_at: Option<NaiveDateTime>,
}

impl From<TierPrice> for DomainTierPrice {
    fn from(value: TierPrice) -> Self {
        Self {
            id: value.id,
            product_variant_id: value.product_variant_id,
            channel_code: value.channel_code,
            customer_group_code: value.customer_group_code,
            quantity: value.quantity,
            price_cents: value.price_cents,
            starts_at: value.starts_at,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewTierPrice> for NewTierPrice<'a> {
    fn from(value: &'a DomainNewTierPrice) -> Self {
        Self {
            product_variant_id: value.product_variant_id,
            channel_code: value.channel_code.as_str(),
            customer_group_code: value.customer_group_code.as_deref(),
            quantity: value.quantity,
            price_cents: value.price_cents,
            starts_at: value.starts_at,
        }
    }
}
