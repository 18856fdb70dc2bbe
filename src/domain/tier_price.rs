use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a quantity-tiered price override for a product variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TierPrice {
    /// Unique identifier of the tier price.
    pub id: i32,
    /// Identifier of the product variant owning this tier price.
    pub product_variant_id: i32,
    /// Code of the sales channel the tier price is scoped to.
    pub channel_code: String,
    /// Optional customer group code. `None` marks the default tier.
    pub customer_group_code: Option<String>,
    /// Minimum quantity at which the tier price applies.
    pub quantity: i32,
    /// Price represented in the smallest currency unit (for example cents).
    pub price_cents: i32,
    /// Optional activation instant (UTC). `None` means always active.
    pub starts_at: Option<NaiveDateTime>,
    /// Timestamp for when the tier price record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the tier price record.
    pub updated_at: NaiveDateTime,
}

impl TierPrice {
    /// Whether the tier price has already started at `now`.
    pub fn is_active_at(&self, now: NaiveDateTime) -> bool {
        match self.starts_at {
            Some(starts_at) => starts_at <= now,
            None => true,
        }
    }

    /// Whether the tier price is scoped to exactly `customer_group_code`.
    pub fn is_for_customer_group(&self, customer_group_code: &str) -> bool {
        self.customer_group_code.as_deref() == Some(customer_group_code)
    }
}

/// Payload required to insert a new tier price for a product variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTierPrice {
    /// Identifier of the product variant owning this tier price.
    pub product_variant_id: i32,
    /// Code of the sales channel the tier price is scoped to.
    pub channel_code: String,
    /// Optional customer group code.
    pub customer_group_code: Option<String>,
    /// Minimum quantity at which the tier price applies.
    pub quantity: i32,
    /// Price represented in the smallest currency unit.
    pub price_cents: i32,
    /// Optional activation instant (UTC).
    pub starts_at: Option<NaiveDateTime>,
}

impl NewTierPrice {
    /// Build a default-tier payload that is active immediately.
    #[must_use]
    pub fn new(
        product_variant_id: i32,
        channel_code: impl Into<String>,
        quantity: i32,
        price_cents: i32,
    ) -> Self {
        Self {
            product_variant_id,
            channel_code: channel_code.into(),
            customer_group_code: None,
            quantity,
            price_cents,
            starts_at: None,
        }
    }

    /// Scope the payload to a customer group.
    #[must_use]
    pub fn with_customer_group(mut self, customer_group_code: impl Into<String>) -> Self {
        self.customer_group_code = Some(customer_group_code.into());
        self
    }

    /// Delay activation of the payload until `starts_at`.
    #[must_use]
    pub fn starting_at(mut self, starts_at: NaiveDateTime) -> Self {
        self.starts_at = Some(starts_at);
        self
    }
}

/// Lookup of the single tier price applying to a requested quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierPriceQuery {
    /// Product variant being priced.
    pub product_variant_id: i32,
    /// Sales channel the purchase happens in.
    pub channel_code: String,
    /// Requested quantity.
    pub quantity: i32,
    /// Customer group of the buyer, if known.
    pub customer_group_code: Option<String>,
    /// Reference instant; the current time when `None`.
    pub now: Option<NaiveDateTime>,
}

impl TierPriceQuery {
    /// Construct a lookup for an anonymous buyer at the current time.
    pub fn new(product_variant_id: i32, channel_code: impl Into<String>, quantity: i32) -> Self {
        Self {
            product_variant_id,
            channel_code: channel_code.into(),
            quantity,
            customer_group_code: None,
            now: None,
        }
    }

    /// Resolve on behalf of a buyer in `customer_group_code`.
    pub fn customer_group(mut self, customer_group_code: impl Into<String>) -> Self {
        self.customer_group_code = Some(customer_group_code.into());
        self
    }

    /// Resolve as of `now` instead of the current time.
    pub fn at(mut self, now: NaiveDateTime) -> Self {
        self.now = Some(now);
        self
    }
}

/// Lookup of every tier price a buyer could reach, used to render tier tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierTableQuery {
    /// Product variant being priced.
    pub product_variant_id: i32,
    /// Sales channel the purchase happens in.
    pub channel_code: String,
    /// Customer group of the buyer, if known.
    pub customer_group_code: Option<String>,
    /// Reference instant; the current time when `None`.
    pub now: Option<NaiveDateTime>,
}

impl TierTableQuery {
    /// Construct a tier table lookup for an anonymous buyer at the current time.
    pub fn new(product_variant_id: i32, channel_code: impl Into<String>) -> Self {
        Self {
            product_variant_id,
            channel_code: channel_code.into(),
            customer_group_code: None,
            now: None,
        }
    }

    /// Resolve on behalf of a buyer in `customer_group_code`.
    pub fn customer_group(mut self, customer_group_code: impl Into<String>) -> Self {
        self.customer_group_code = Some(customer_group_code.into());
        self
    }

    /// Resolve as of `now` instead of the current time.
    pub fn at(mut self, now: NaiveDateTime) -> Self {
        self.now = Some(now);
        self
    }
}
