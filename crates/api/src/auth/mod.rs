//! Authentication primitives.
//!
//! - [`jwt`] -- JWT access-token generation, validation, and refresh-token
//!   helpers. Login itself is phone-OTP, handled in `handlers::auth`.

pub mod jwt;
