use actix_web::{web, HttpRequest, HttpResponse};

use mv_core::repositories::UserRepository;
use mv_core::services::{VerificationNotifier, VERIFIED_MESSAGE};

use super::AppState;
use crate::dto::MessageResponse;
use crate::handlers::ApiError;
use crate::middleware::RequestIdExt;

/// Handler for GET /user/verify-email/{username}/{verification_token}
///
/// Returns `{"message": "User successfully verified"}` on success; 404 for an
/// unknown user, 400 when already verified or the token does not match.
pub async fn verify_email<R, N>(
    req: HttpRequest,
    state: web::Data<AppState<R, N>>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ApiError>
where
    R: UserRepository + ?Sized + 'static,
    N: VerificationNotifier + ?Sized + 'static,
{
    let request_id = req.request_id();
    let (username, verification_token) = path.into_inner();

    log::info!(
        "[{}] Processing verify_email request for username: {}",
        request_id,
        username
    );

    state
        .verification_service
        .verify_email(&username, &verification_token)
        .await
        .map_err(|e| {
            log::warn!("[{}] Verification failed for {}: {}", request_id, username, e);
            e
        })?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(VERIFIED_MESSAGE)))
}
