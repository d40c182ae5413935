//! Request bodies for the user routes

use serde::{Deserialize, Serialize};

use mv_core::services::RegistrationRequest;

/// Body of `POST /user/register`
///
/// Missing fields deserialize as empty strings so they surface as
/// validation messages rather than JSON errors.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegisterUserRequest {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub email: String,
}

impl From<RegisterUserRequest> for RegistrationRequest {
    fn from(request: RegisterUserRequest) -> Self {
        RegistrationRequest::new(request.username, request.email)
    }
}
