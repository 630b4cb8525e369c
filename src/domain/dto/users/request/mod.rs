pub mod create_user_request;
pub mod login_request;

pub use create_user_request::CreateUserRequest;
pub use login_request::LoginRequest;
