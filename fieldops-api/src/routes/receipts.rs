/// Receipt upload endpoint
///
/// # Endpoint
///
/// - `POST /upload_receipt` - record a receipt reference (session, role=client)

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, Extension, Json};
use fieldops_shared::{
    auth::session::SessionUser,
    models::{
        receipt::{CreateReceipt, Receipt},
        user::Role,
    },
};
use serde::Deserialize;
use validator::Validate;

/// Upload receipt request
#[derive(Debug, Deserialize, Validate)]
pub struct UploadReceiptRequest {
    /// Where the receipt document lives
    #[validate(length(min = 1, max = 255, message = "Receipt URL must be 1-255 characters"))]
    pub receipt_url: String,
}

/// Record a receipt reference for the logged-in client
///
/// Receipts are immutable once created. A non-client session gets the
/// same 401 as an unauthenticated request.
///
/// # Errors
///
/// - `401 Unauthorized`: no session, or session role is not client
/// - `422 Unprocessable Entity`: validation failed
/// - `500 Internal Server Error`: server error
pub async fn upload_receipt(
    State(state): State<AppState>,
    Extension(session): Extension<SessionUser>,
    Json(req): Json<UploadReceiptRequest>,
) -> ApiResult<Json<Receipt>> {
    if session.role != Role::Client {
        return Err(ApiError::Unauthorized("Not logged in".to_string()));
    }

    req.validate()?;

    let receipt = Receipt::create(
        &state.db,
        CreateReceipt {
            client_id: session.user_id,
            receipt_url: req.receipt_url,
        },
    )
    .await?;

    tracing::info!(receipt_id = %receipt.id, client_id = %receipt.client_id, "Receipt uploaded");

    Ok(Json(receipt))
}
