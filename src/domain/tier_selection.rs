//! Precedence rules deciding which tier price wins among overlapping candidates.
//!
//! Resolution runs in three stages, always in this order:
//!
//! 1. [`filter_by_start_date`] drops tier prices that have not started yet and
//!    keeps one tier price per `(quantity, customer group)` pair.
//! 2. [`filter_by_customer_group`] keeps one tier price per quantity, preferring
//!    the buyer's customer group over the default tier.
//! 3. [`select_tier`] picks the highest quantity threshold the requested
//!    quantity reaches.
//!
//! Group precedence must only see rules already reduced by start date, so that
//! a stale dated rule can never hide an active default rule.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::NaiveDateTime;

use crate::domain::tier_price::TierPrice;

/// Drops inactive tier prices and collapses duplicates sharing quantity and
/// customer group to the most recently started one.
///
/// A dated tier price beats an undated one. Among equal start dates the tier
/// price with the greater id wins, so the outcome never depends on input order.
/// The result is ordered by quantity, then customer group (default first).
pub fn filter_by_start_date(tier_prices: Vec<TierPrice>, now: NaiveDateTime) -> Vec<TierPrice> {
    let mut preferred: BTreeMap<(i32, Option<String>), TierPrice> = BTreeMap::new();

    for tier_price in tier_prices {
        if !tier_price.is_active_at(now) {
            continue;
        }

        let key = (tier_price.quantity, tier_price.customer_group_code.clone());
        match preferred.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert(tier_price);
            }
            Entry::Occupied(mut entry) => {
                if supersedes(&tier_price, entry.get()) {
                    entry.insert(tier_price);
                }
            }
        }
    }

    preferred.into_values().collect()
}

/// Keeps at most one tier price per quantity for a buyer in `customer_group_code`.
///
/// Anonymous buyers only see default tier prices. Buyers with a group never see
/// prices of other groups and get their own group's price when one exists,
/// otherwise the default. The result is ordered by quantity.
pub fn filter_by_customer_group(
    tier_prices: Vec<TierPrice>,
    customer_group_code: Option<&str>,
) -> Vec<TierPrice> {
    let mut preferred: BTreeMap<i32, TierPrice> = BTreeMap::new();

    for tier_price in tier_prices {
        let is_exact_match = match (&tier_price.customer_group_code, customer_group_code) {
            (None, _) => false,
            (Some(_), Some(requested)) if tier_price.is_for_customer_group(requested) => true,
            (Some(_), _) => continue,
        };

        match preferred.entry(tier_price.quantity) {
            Entry::Vacant(entry) => {
                entry.insert(tier_price);
            }
            Entry::Occupied(mut entry) => {
                if is_exact_match {
                    entry.insert(tier_price);
                }
            }
        }
    }

    preferred.into_values().collect()
}

/// Picks the tier price with the greatest quantity threshold not above `quantity`.
pub fn select_tier(mut tier_prices: Vec<TierPrice>, quantity: i32) -> Option<TierPrice> {
    tier_prices.sort_by_key(|tier_price| tier_price.quantity);

    let mut selected = None;
    for tier_price in tier_prices {
        if tier_price.quantity > quantity {
            break;
        }
        selected = Some(tier_price);
    }

    selected
}

/// Tier prices a buyer can reach at `now`, one per quantity, ascending.
pub fn tier_table(
    tier_prices: Vec<TierPrice>,
    customer_group_code: Option<&str>,
    now: NaiveDateTime,
) -> Vec<TierPrice> {
    let active = filter_by_start_date(tier_prices, now);
    filter_by_customer_group(active, customer_group_code)
}

fn supersedes(candidate: &TierPrice, current: &TierPrice) -> bool {
    // `None < Some(_)`, so any dated rule outranks an undated one.
    (candidate.starts_at, candidate.id) > (current.starts_at, current.id)
}
