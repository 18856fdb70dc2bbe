use diesel::prelude::*;
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::{
    domain::tier_price::{NewTierPrice as DomainNewTierPrice, TierPrice as DomainTierPrice},
    models::tier_price::{NewTierPrice as DbNewTierPrice, TierPrice as DbTierPrice},
    repository::{DieselRepository, TierPriceReader, TierPriceWriter},
};

impl TierPriceReader for DieselRepository {
    fn list_tier_prices(
        &self,
        product_variant_id: i32,
        channel_code: &str,
    ) -> RepositoryResult<Vec<DomainTierPrice>> {
        use crate::schema::tier_prices;

        let mut conn = self.conn()?;
        let rows = tier_prices::table
            .filter(tier_prices::product_variant_id.eq(product_variant_id))
            .filter(tier_prices::channel_code.eq(channel_code))
            .order(tier_prices::id.asc())
            .load::<DbTierPrice>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl TierPriceWriter for DieselRepository {
    fn create_tier_price(
        &self,
        new_tier_price: &DomainNewTierPrice,
    ) -> RepositoryResult<DomainTierPrice> {
        use crate::schema::tier_prices;

        let mut conn = self.conn()?;
        let db_new = DbNewTierPrice::from(new_tier_price);

        let created = diesel::insert_into(tier_prices::table)
            .values(&db_new)
            .get_result::<DbTierPrice>(&mut conn)?;

        Ok(created.into())
    }

    fn replace_tier_prices(
        &self,
        product_variant_id: i32,
        new_tier_prices: &[DomainNewTierPrice],
    ) -> RepositoryResult<Vec<DomainTierPrice>> {
        use crate::schema::tier_prices;

        let mut conn = self.conn()?;
        conn.transaction(|conn| {
            diesel::delete(
                tier_prices::table.filter(tier_prices::product_variant_id.eq(product_variant_id)),
            )
            .execute(conn)?;

            let mut created = Vec::with_capacity(new_tier_prices.len());
            for new_tier_price in new_tier_prices {
                let mut db_new = DbNewTierPrice::from(new_tier_price);
                db_new.product_variant_id = product_variant_id;

                let row = diesel::insert_into(tier_prices::table)
                    .values(&db_new)
                    .get_result::<DbTierPrice>(conn)?;
                created.push(row.into());
            }

            Ok::<Vec<DomainTierPrice>, diesel::result::Error>(created)
        })
        .map_err(Into::into)
    }

    fn delete_tier_price(&self, tier_price_id: i32) -> RepositoryResult<()> {
        use crate::schema::tier_prices;

        let mut conn = self.conn()?;

        let target = tier_prices::table.filter(tier_prices::id.eq(tier_price_id));

        let deleted = diesel::delete(target).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
