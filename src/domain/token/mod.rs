pub mod token;

pub use token::TokenClaims;
