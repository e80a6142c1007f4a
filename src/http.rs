use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use ulid::Ulid;

use crate::engine::{Registry, RegistryError};
use crate::model::{Booking, BookingRequest};
use crate::observability;

pub fn router(registry: Arc<Registry>) -> Router {
    Router::new()
        .route("/bookings", get(list_bookings).post(create_booking))
        .route("/bookings/{id}", get(get_booking))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(registry)
}

#[derive(Debug)]
pub enum ApiError {
    Registry(RegistryError),
    BadRequest(&'static str),
    Internal(String),
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        ApiError::Registry(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(_)
            | JsonRejection::JsonDataError(_)
            | JsonRejection::MissingJsonContentType(_) => ApiError::BadRequest("Invalid request body"),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Registry(RegistryError::MissingFields) => {
                (StatusCode::BAD_REQUEST, "Missing required fields".to_string())
            }
            ApiError::Registry(RegistryError::InvalidDateFormat) => {
                (StatusCode::BAD_REQUEST, "Invalid date format".to_string())
            }
            ApiError::Registry(RegistryError::StartAfterEnd) => (
                StatusCode::BAD_REQUEST,
                "Start time must be before end time".to_string(),
            ),
            ApiError::Registry(RegistryError::PastBooking) => {
                (StatusCode::BAD_REQUEST, "Cannot book in the past".to_string())
            }
            ApiError::Registry(RegistryError::Conflict(_)) => (
                StatusCode::CONFLICT,
                "Booking conflicts with existing booking".to_string(),
            ),
            ApiError::Registry(RegistryError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "Booking not found".to_string())
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.to_string()),
            ApiError::Internal(detail) => {
                tracing::error!("internal error: {detail}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong!".to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

async fn list_bookings(State(registry): State<Arc<Registry>>) -> Json<Vec<Booking>> {
    metrics::counter!(observability::REQUESTS_TOTAL, "route" => "list_bookings").increment(1);
    Json(registry.list_bookings().await)
}

async fn get_booking(
    State(registry): State<Arc<Registry>>,
    Path(id): Path<String>,
) -> Result<Json<Booking>, ApiError> {
    metrics::counter!(observability::REQUESTS_TOTAL, "route" => "get_booking").increment(1);
    // An id that isn't even a ULID can't name a stored booking.
    let id: Ulid = id
        .parse()
        .map_err(|_| RegistryError::NotFound(Ulid::nil()))?;
    let booking = registry.get_booking(&id).await?;
    Ok(Json(booking))
}

async fn create_booking(
    State(registry): State<Arc<Registry>>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    metrics::counter!(observability::REQUESTS_TOTAL, "route" => "create_booking").increment(1);
    let Json(request) = payload?;

    match registry.create_booking(&request).await {
        Ok(booking) => {
            metrics::counter!(observability::BOOKINGS_CREATED_TOTAL).increment(1);
            metrics::gauge!(observability::BOOKINGS_STORED).increment(1.0);
            Ok((StatusCode::CREATED, Json(booking)))
        }
        Err(err) => {
            metrics::counter!(
                observability::BOOKINGS_REJECTED_TOTAL,
                "reason" => observability::rejection_label(&err)
            )
            .increment(1);
            tracing::debug!("booking rejected: {err}");
            Err(err.into())
        }
    }
}
