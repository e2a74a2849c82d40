mod health;
mod login;
mod responses;
mod upload;

pub use health::health_handler;
pub use login::{CredentialCheck, LoginRequest, login_handler, verify_credentials};
pub use responses::{ErrorDetails, ErrorResponse};
pub use upload::{UploadResponse, upload_handler};
