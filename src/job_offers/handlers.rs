use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{debug, info, instrument};

use crate::{
    errors::ApiError,
    job_offers::dto::{JobOfferDetails, JobOfferDto, JobOfferQuery},
    state::AppState,
};

pub fn job_offer_routes() -> Router<AppState> {
    Router::new().route(
        "/api/job-offers",
        get(get_valid_job_offers).post(add_job_offer),
    )
}

/// Job offers valid today, optionally filtered by employer and category.
#[utoipa::path(
    get,
    path = "/api/job-offers",
    tag = "job-offer",
    params(JobOfferQuery),
    responses(
        (status = 200, description = "Retrieved valid job offers successfully.", body = [JobOfferDto]),
        (status = 400, description = "Invalid category.", body = [String])
    )
)]
#[instrument(skip(state))]
pub async fn get_valid_job_offers(
    State(state): State<AppState>,
    Query(query): Query<JobOfferQuery>,
) -> Result<Json<Vec<JobOfferDto>>, ApiError> {
    let filter = query.into_filter().map_err(ApiError::Validation)?;
    debug!(?filter, "retrieving valid job offers");
    Ok(Json(state.job_offers.get_valid_job_offers(filter).await?))
}

/// Post a new job offer for an existing employer.
#[utoipa::path(
    post,
    path = "/api/job-offers",
    tag = "job-offer",
    request_body = JobOfferDetails,
    responses(
        (status = 201, description = "Created new job offer successfully.", body = JobOfferDto),
        (status = 400, description = "Validation error or unknown employer.", body = [String])
    )
)]
#[instrument(skip(state, payload))]
pub async fn add_job_offer(
    State(state): State<AppState>,
    payload: Result<Json<JobOfferDetails>, JsonRejection>,
) -> Result<(StatusCode, Json<JobOfferDto>), ApiError> {
    let Json(details) = payload?;
    let details = details.into_new().map_err(ApiError::Validation)?;
    let created = state.job_offers.add_job_offer(details).await?;
    info!(job_offer_id = created.id, category = %created.category, "job offer created");
    Ok((StatusCode::CREATED, Json(created)))
}
