/// Service booking endpoint
///
/// # Endpoint
///
/// - `POST /book_service` - create a booking (session, role=client)

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, Extension, Json};
use fieldops_shared::{
    auth::session::SessionUser,
    models::{
        booking::{CreateServiceBooking, ServiceBooking},
        user::Role,
    },
};
use serde::Deserialize;
use validator::Validate;

/// Book service request
#[derive(Debug, Deserialize, Validate)]
pub struct BookServiceRequest {
    /// Free-text description of the requested service
    #[validate(length(min = 1, max = 255, message = "Service details must be 1-255 characters"))]
    pub service_details: String,
}

/// Create a service booking for the logged-in client
///
/// The booking's `client_id` is taken from the session, never from the
/// payload. A non-client session gets the same 401 as an unauthenticated
/// request.
///
/// # Errors
///
/// - `401 Unauthorized`: no session, or session role is not client
/// - `422 Unprocessable Entity`: validation failed
/// - `500 Internal Server Error`: server error
pub async fn book_service(
    State(state): State<AppState>,
    Extension(session): Extension<SessionUser>,
    Json(req): Json<BookServiceRequest>,
) -> ApiResult<Json<ServiceBooking>> {
    if session.role != Role::Client {
        return Err(ApiError::Unauthorized("Not logged in".to_string()));
    }

    req.validate()?;

    let booking = ServiceBooking::create(
        &state.db,
        CreateServiceBooking {
            client_id: session.user_id,
            service_details: req.service_details,
        },
    )
    .await?;

    tracing::info!(booking_id = %booking.id, client_id = %booking.client_id, "Service booked");

    Ok(Json(booking))
}
