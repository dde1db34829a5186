//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod listing_repo;
pub mod onboarding_repo;
pub mod otp_repo;
pub mod session_repo;
pub mod site_repo;
pub mod user_repo;

pub use listing_repo::ListingRepo;
pub use onboarding_repo::OnboardingRepo;
pub use otp_repo::OtpRepo;
pub use session_repo::SessionRepo;
pub use site_repo::SiteRepo;
pub use user_repo::UserRepo;
