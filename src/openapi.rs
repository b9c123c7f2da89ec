use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::job_offers::{
    category::Category,
    dto::{JobOfferDetails, JobOfferDto},
};
use crate::state::AppState;
use crate::users::dto::{UserDetails, UserDto};

#[derive(OpenApi)]
#[openapi(
    info(title = "jobhunt", description = "Job offers and their employers."),
    paths(
        crate::users::handlers::get_all_users,
        crate::users::handlers::get_user,
        crate::users::handlers::create_user,
        crate::users::handlers::update_user,
        crate::users::handlers::delete_user,
        crate::job_offers::handlers::get_valid_job_offers,
        crate::job_offers::handlers::add_job_offer,
    ),
    components(schemas(UserDetails, UserDto, JobOfferDetails, JobOfferDto, Category)),
    tags(
        (name = "user", description = "User accounts"),
        (name = "job-offer", description = "Job offers")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}
