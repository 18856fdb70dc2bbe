use actix_web::{HttpResponse, Responder, get, web};
use pushkind_common::domain::auth::AuthenticatedUser;

use crate::forms::tier_prices::{TierPriceLookupForm, TierTableForm};
use crate::repository::DieselRepository;
use crate::services::{TierPriceError, load_tier_price, load_tier_table};

#[get("/v1/tier-price")]
/// Return the tier price applying to the requested quantity as JSON.
///
/// Responds with `204 No Content` when no tier applies and the base price should be used.
/// Users without the role stored in `crate::SERVICE_ACCESS_ROLE` receive a `401 Unauthorized` response.
pub async fn api_v1_tier_price(
    params: web::Query<TierPriceLookupForm>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let query = match params.into_inner().into_tier_price_query() {
        Ok(query) => query,
        Err(err) => return HttpResponse::BadRequest().body(err.to_string()),
    };

    match load_tier_price(repo.get_ref(), &user, &query) {
        Ok(Some(tier_price)) => HttpResponse::Ok().json(tier_price),
        Ok(None) => HttpResponse::NoContent().finish(),
        Err(TierPriceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(err @ TierPriceError::NegativeQuantity(_)) => {
            HttpResponse::BadRequest().body(err.to_string())
        }
        Err(err) => {
            log::error!("Failed to resolve tier price: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/tier-prices")]
/// Return every tier price reachable by the buyer, ascending by quantity.
///
/// Users without the role stored in `crate::SERVICE_ACCESS_ROLE` receive a `401 Unauthorized` response.
pub async fn api_v1_tier_prices(
    params: web::Query<TierTableForm>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let query = match params.into_inner().into_tier_table_query() {
        Ok(query) => query,
        Err(err) => return HttpResponse::BadRequest().body(err.to_string()),
    };

    match load_tier_table(repo.get_ref(), &user, &query) {
        Ok(tier_prices) => HttpResponse::Ok().json(tier_prices),
        Err(TierPriceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(err) => {
            log::error!("Failed to list tier prices: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
