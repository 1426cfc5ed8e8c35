//! Application services: token signing and outbound mail.

pub mod email;
pub mod token;

pub use email::EmailService;
pub use token::{TokenError, TokenService};
