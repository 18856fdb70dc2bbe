use chrono::Duration;
use pushkind_common::repository::errors::RepositoryError;
use pushkind_tier_prices::domain::tier_price::NewTierPrice;
use pushkind_tier_prices::repository::DieselRepository;
use pushkind_tier_prices::repository::{TierPriceReader, TierPriceWriter};

mod common;

#[test]
fn test_tier_price_repository_crud() {
    let test_db = common::TestDb::new("test_tier_price_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());
    let starts_at = common::reference_now() - Duration::days(1);

    let default_tier = repo
        .create_tier_price(&NewTierPrice::new(1, "WEB", 10, 80))
        .unwrap();
    let vip_tier = repo
        .create_tier_price(
            &NewTierPrice::new(1, "WEB", 10, 70)
                .with_customer_group("VIP")
                .starting_at(starts_at),
        )
        .unwrap();
    repo.create_tier_price(&NewTierPrice::new(1, "POS", 10, 75))
        .unwrap();
    repo.create_tier_price(&NewTierPrice::new(2, "WEB", 10, 60))
        .unwrap();

    assert_eq!(vip_tier.customer_group_code.as_deref(), Some("VIP"));
    assert_eq!(vip_tier.starts_at, Some(starts_at));

    let items = repo.list_tier_prices(1, "WEB").unwrap();
    let ids: Vec<i32> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![default_tier.id, vip_tier.id]);

    repo.delete_tier_price(default_tier.id).unwrap();
    let err = repo
        .delete_tier_price(default_tier.id)
        .expect_err("expected second delete to fail");
    assert!(matches!(err, RepositoryError::NotFound));

    let items_after = repo.list_tier_prices(1, "WEB").unwrap();
    assert_eq!(items_after.len(), 1);
    assert_eq!(items_after[0].id, vip_tier.id);
}

#[test]
fn test_replace_tier_prices_swaps_variant_collection() {
    let test_db = common::TestDb::new("test_replace_tier_prices.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_tier_price(&NewTierPrice::new(1, "WEB", 1, 100))
        .unwrap();
    repo.create_tier_price(&NewTierPrice::new(2, "WEB", 1, 90))
        .unwrap();

    // The owner is forced to the replaced variant.
    let replaced = repo
        .replace_tier_prices(
            1,
            &[
                NewTierPrice::new(1, "WEB", 5, 95),
                NewTierPrice::new(99, "WEB", 20, 85),
            ],
        )
        .unwrap();

    assert_eq!(replaced.len(), 2);
    assert!(replaced.iter().all(|item| item.product_variant_id == 1));

    let quantities: Vec<i32> = repo
        .list_tier_prices(1, "WEB")
        .unwrap()
        .iter()
        .map(|item| item.quantity)
        .collect();
    assert_eq!(quantities, vec![5, 20]);

    assert_eq!(repo.list_tier_prices(2, "WEB").unwrap().len(), 1);
    assert!(repo.list_tier_prices(99, "WEB").unwrap().is_empty());
}
