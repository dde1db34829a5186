//! Best-effort onboarding advancement for business-action call sites.

use matjar_core::onboarding::StepKey;
use matjar_core::types::DbId;
use matjar_db::repositories::OnboardingRepo;
use matjar_db::DbPool;

/// Mark an onboarding step done as a side effect of a business action.
///
/// Called *after* the primary write succeeds. Failures are logged and
/// swallowed: onboarding progress is a UX nicety, and a checklist hiccup
/// must never fail the listing/site/subscription action that triggered it.
pub async fn advance_step(pool: &DbPool, user_id: DbId, key: StepKey) {
    match OnboardingRepo::complete_step(pool, user_id, key).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            tracing::warn!(user_id, step = %key, "Onboarding not initialized for user");
        }
        Err(err) => {
            tracing::warn!(user_id, step = %key, error = %err, "Failed to advance onboarding step");
        }
    }
}
