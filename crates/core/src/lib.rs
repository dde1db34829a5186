//! Matjar domain logic.
//!
//! Pure, persistence-free building blocks shared by the `matjar-db` and
//! `matjar-api` crates: error taxonomy, closed enumerations for every
//! enumerated domain (sectors, roles, onboarding steps, storefront
//! templates), and the onboarding progression rules.

pub mod error;
pub mod onboarding;
pub mod packages;
pub mod phone;
pub mod roles;
pub mod sectors;
pub mod sites;
pub mod types;
