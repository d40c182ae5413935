use actix_web::{web, HttpRequest, HttpResponse};

use mv_core::repositories::UserRepository;
use mv_core::services::VerificationNotifier;
use mv_shared::utils::email::mask_email;

use super::AppState;
use crate::dto::{MessageResponse, RegisterUserRequest};
use crate::handlers::ApiError;
use crate::middleware::RequestIdExt;

/// Handler for POST /user/register
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "email": "alice@example.com" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "message": "User successfully registered" }
/// ```
///
/// ## Errors
/// - 400 validation failure
/// - 409 username or email already registered
/// - 422 store rejected the values
/// - 500 store or mail delivery failure
pub async fn register<R, N>(
    req: HttpRequest,
    state: web::Data<AppState<R, N>>,
    body: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, ApiError>
where
    R: UserRepository + ?Sized + 'static,
    N: VerificationNotifier + ?Sized + 'static,
{
    let request_id = req.request_id();
    let body = body.into_inner();

    log::info!(
        "[{}] Processing register request for username: {}, email: {}",
        request_id,
        body.username,
        mask_email(&body.email)
    );

    let receipt = state
        .verification_service
        .register(body.into())
        .await
        .map_err(|e| {
            log::warn!("[{}] Registration failed: {}", request_id, e);
            e
        })?;

    log::info!(
        "[{}] Registered {} ({}), message id {}",
        request_id,
        receipt.username,
        receipt.masked_email,
        receipt.message_id
    );

    Ok(HttpResponse::Ok().json(MessageResponse::new(receipt.message())))
}
