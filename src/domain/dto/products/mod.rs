pub mod request;
pub mod response;

pub use request::CreateProductRequest;
pub use response::ProductResponse;
