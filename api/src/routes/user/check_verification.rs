use actix_web::{web, HttpRequest, HttpResponse};

use mv_core::repositories::UserRepository;
use mv_core::services::VerificationNotifier;

use super::AppState;
use crate::dto::MessageResponse;
use crate::handlers::ApiError;
use crate::middleware::RequestIdExt;

/// Handler for GET /user/check-verification/{username}
///
/// ```json
/// { "message": "User is not verified", "status": "not verified" }
/// ```
pub async fn check_verification<R, N>(
    req: HttpRequest,
    state: web::Data<AppState<R, N>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    R: UserRepository + ?Sized + 'static,
    N: VerificationNotifier + ?Sized + 'static,
{
    let username = path.into_inner();
    log::debug!(
        "[{}] Processing check_verification request for username: {}",
        req.request_id(),
        username
    );

    let status = state
        .verification_service
        .check_verification(&username)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(status.message()).with_status(status.as_str())))
}
