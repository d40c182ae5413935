//! Data transfer objects for request and response bodies

pub mod user;

pub use user::RegisterUserRequest;
pub use mv_shared::types::MessageResponse;
