//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the repositories in `matjar_db` and map errors via
//! [`crate::error::AppError`]. Business actions that count as onboarding
//! milestones advance the checklist through [`triggers::advance_step`].

pub mod account;
pub mod auth;
pub mod listings;
pub mod onboarding;
pub mod packages;
pub mod sites;
pub mod triggers;
