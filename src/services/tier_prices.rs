use chrono::NaiveDateTime;
use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::repository::errors::RepositoryError;
use pushkind_common::routes::check_role;
use thiserror::Error;

use crate::SERVICE_ACCESS_ROLE;
use crate::domain::tier_price::{TierPrice, TierPriceQuery, TierTableQuery};
use crate::domain::tier_selection::{filter_by_customer_group, filter_by_start_date, select_tier};
use crate::repository::TierPriceReader;

/// Result type returned by the tier price resolver.
pub type TierPriceResult<T> = Result<T, TierPriceError>;

/// Errors that can occur while resolving tier prices.
#[derive(Debug, Error)]
pub enum TierPriceError {
    /// The caller lacks the role required to read tier prices.
    #[error("missing required role")]
    Unauthorized,
    /// The requested quantity is below zero.
    #[error("quantity cannot be negative: {0}")]
    NegativeQuantity(i32),
    /// The store returned a tier price that violates its invariants.
    #[error("tier price {id} has negative {field}: {value}")]
    InvalidTierPrice {
        id: i32,
        field: &'static str,
        value: i32,
    },
    /// Loading candidates from the store failed.
    #[error("failed to load tier prices: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for TierPriceError {
    fn from(value: RepositoryError) -> Self {
        Self::Repository(value)
    }
}

/// Resolves tier prices from the candidates supplied by a [`TierPriceReader`].
///
/// The resolver never writes to the store. Given the same candidates and the
/// same reference instant it always returns the same answer.
pub struct TierPriceResolver<'a, R: ?Sized> {
    repo: &'a R,
}

impl<'a, R> TierPriceResolver<'a, R>
where
    R: TierPriceReader + ?Sized,
{
    /// Create a resolver reading candidates from `repo`.
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// Finds the tier price applying to `query.quantity`.
    ///
    /// Returns `Ok(None)` when no tier applies; callers then fall back to the
    /// variant's base price.
    pub fn find(&self, query: &TierPriceQuery) -> TierPriceResult<Option<TierPrice>> {
        if query.quantity < 0 {
            return Err(TierPriceError::NegativeQuantity(query.quantity));
        }

        let now = query.now.unwrap_or_else(current_time);
        let candidates = self.load_candidates(query.product_variant_id, &query.channel_code)?;

        let active = filter_by_start_date(candidates, now);
        let preferred = filter_by_customer_group(active, query.customer_group_code.as_deref());
        let selected = select_tier(preferred, query.quantity);

        match &selected {
            Some(tier_price) => log::debug!(
                "Tier price {} ({} cents) applies to variant {} x{} in {}",
                tier_price.id,
                tier_price.price_cents,
                query.product_variant_id,
                query.quantity,
                query.channel_code
            ),
            None => log::debug!(
                "No tier price applies to variant {} x{} in {}",
                query.product_variant_id,
                query.quantity,
                query.channel_code
            ),
        }

        Ok(selected)
    }

    /// Lists every tier price the buyer can reach, one per quantity, ascending.
    pub fn applicable(&self, query: &TierTableQuery) -> TierPriceResult<Vec<TierPrice>> {
        let now = query.now.unwrap_or_else(current_time);
        let candidates = self.load_candidates(query.product_variant_id, &query.channel_code)?;

        let active = filter_by_start_date(candidates, now);
        Ok(filter_by_customer_group(
            active,
            query.customer_group_code.as_deref(),
        ))
    }

    fn load_candidates(
        &self,
        product_variant_id: i32,
        channel_code: &str,
    ) -> TierPriceResult<Vec<TierPrice>> {
        let candidates = self
            .repo
            .list_tier_prices(product_variant_id, channel_code)?;

        for candidate in &candidates {
            validate_tier_price(candidate)?;
        }

        Ok(candidates)
    }
}

/// Resolves the tier price for `query` on behalf of an authenticated caller.
pub fn load_tier_price<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: &TierPriceQuery,
) -> TierPriceResult<Option<TierPrice>>
where
    R: TierPriceReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(TierPriceError::Unauthorized);
    }

    TierPriceResolver::new(repo).find(query)
}

/// Loads the tier table for `query` on behalf of an authenticated caller.
pub fn load_tier_table<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: &TierTableQuery,
) -> TierPriceResult<Vec<TierPrice>>
where
    R: TierPriceReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(TierPriceError::Unauthorized);
    }

    TierPriceResolver::new(repo).applicable(query)
}

fn validate_tier_price(tier_price: &TierPrice) -> TierPriceResult<()> {
    let violation = if tier_price.quantity < 0 {
        Some(("quantity", tier_price.quantity))
    } else if tier_price.price_cents < 0 {
        Some(("price", tier_price.price_cents))
    } else {
        None
    };

    if let Some((field, value)) = violation {
        log::warn!("Rejecting tier price {} with negative {field}", tier_price.id);
        return Err(TierPriceError::InvalidTierPrice {
            id: tier_price.id,
            field,
            value,
        });
    }

    Ok(())
}

fn current_time() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}
