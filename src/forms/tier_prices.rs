use chrono::NaiveDateTime;
use pushkind_common::routes::empty_string_as_none;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::tier_price::{TierPriceQuery, TierTableQuery};

/// Maximum length allowed for channel and customer group codes.
const CODE_MAX_LEN: usize = 64;
const CODE_MAX_LEN_VALIDATOR: u64 = CODE_MAX_LEN as u64;

/// Result type returned by the tier price form helpers.
pub type TierPriceFormResult<T> = Result<T, TierPriceFormError>;

/// Errors that can occur while processing tier price lookups.
#[derive(Debug, Error)]
pub enum TierPriceFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The channel code is empty after sanitization.
    #[error("channel code cannot be empty")]
    EmptyChannel,
}

/// Query parameters of the single tier price lookup.
#[derive(Debug, Deserialize, Validate)]
pub struct TierPriceLookupForm {
    /// Product variant being priced.
    pub product_variant_id: i32,
    /// Sales channel code.
    #[validate(length(min = 1, max = CODE_MAX_LEN_VALIDATOR))]
    pub channel: String,
    /// Requested quantity.
    #[validate(range(min = 0))]
    pub quantity: i32,
    /// Optional customer group code of the buyer.
    #[validate(length(max = CODE_MAX_LEN_VALIDATOR))]
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub customer_group: Option<String>,
    /// Optional reference instant, the current time when absent.
    #[serde(default)]
    pub at: Option<NaiveDateTime>,
}

impl TierPriceLookupForm {
    /// Validates and sanitizes the parameters into a domain `TierPriceQuery`.
    pub fn into_tier_price_query(self) -> TierPriceFormResult<TierPriceQuery> {
        self.validate()?;

        let channel = sanitize_code(&self.channel);
        if channel.is_empty() {
            return Err(TierPriceFormError::EmptyChannel);
        }

        let mut query = TierPriceQuery::new(self.product_variant_id, channel, self.quantity);

        if let Some(group) = sanitize_optional_code(self.customer_group.as_deref()) {
            query = query.customer_group(group);
        }

        if let Some(at) = self.at {
            query = query.at(at);
        }

        Ok(query)
    }
}

/// Query parameters of the tier table lookup.
#[derive(Debug, Deserialize, Validate)]
pub struct TierTableForm {
    /// Product variant being priced.
    pub product_variant_id: i32,
    /// Sales channel code.
    #[validate(length(min = 1, max = CODE_MAX_LEN_VALIDATOR))]
    pub channel: String,
    /// Optional customer group code of the buyer.
    #[validate(length(max = CODE_MAX_LEN_VALIDATOR))]
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub customer_group: Option<String>,
    /// Optional reference instant, the current time when absent.
    #[serde(default)]
    pub at: Option<NaiveDateTime>,
}

impl TierTableForm {
    /// Validates and sanitizes the parameters into a domain `TierTableQuery`.
    pub fn into_tier_table_query(self) -> TierPriceFormResult<TierTableQuery> {
        self.validate()?;

        let channel = sanitize_code(&self.channel);
        if channel.is_empty() {
            return Err(TierPriceFormError::EmptyChannel);
        }

        let mut query = TierTableQuery::new(self.product_variant_id, channel);

        if let Some(group) = sanitize_optional_code(self.customer_group.as_deref()) {
            query = query.customer_group(group);
        }

        if let Some(at) = self.at {
            query = query.at(at);
        }

        Ok(query)
    }
}

fn sanitize_code(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|ch| !ch.is_control())
        .collect::<String>()
}

fn sanitize_optional_code(input: Option<&str>) -> Option<String> {
    input.map(sanitize_code).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn lookup_form_converts_successfully() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|date| date.and_hms_opt(8, 30, 0))
            .expect("valid datetime");
        let form = TierPriceLookupForm {
            product_variant_id: 12,
            channel: "  WEB ".to_string(),
            quantity: 15,
            customer_group: Some(" VIP ".to_string()),
            at: Some(at),
        };

        let query = form.into_tier_price_query().expect("expected success");

        assert_eq!(query.product_variant_id, 12);
        assert_eq!(query.channel_code, "WEB");
        assert_eq!(query.quantity, 15);
        assert_eq!(query.customer_group_code.as_deref(), Some("VIP"));
        assert_eq!(query.now, Some(at));
    }

    #[test]
    fn lookup_form_rejects_negative_quantity() {
        let form = TierPriceLookupForm {
            product_variant_id: 1,
            channel: "WEB".to_string(),
            quantity: -2,
            customer_group: None,
            at: None,
        };

        let result = form.into_tier_price_query();

        assert!(matches!(result, Err(TierPriceFormError::Validation(_))));
    }

    #[test]
    fn lookup_form_rejects_blank_channel() {
        let form = TierPriceLookupForm {
            product_variant_id: 1,
            channel: "   ".to_string(),
            quantity: 1,
            customer_group: None,
            at: None,
        };

        let result = form.into_tier_price_query();

        assert!(matches!(result, Err(TierPriceFormError::EmptyChannel)));
    }

    #[test]
    fn table_form_treats_blank_group_as_anonymous() {
        let form = TierTableForm {
            product_variant_id: 4,
            channel: "POS".to_string(),
            customer_group: Some("  ".to_string()),
            at: None,
        };

        let query = form.into_tier_table_query().expect("expected success");

        assert_eq!(query.channel_code, "POS");
        assert_eq!(query.customer_group_code, None);
        assert_eq!(query.now, None);
    }
}
