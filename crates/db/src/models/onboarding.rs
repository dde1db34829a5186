//! Onboarding checklist row model.

use matjar_core::onboarding::{StepKey, StepState, StepStatus};
use matjar_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// One step row from the `onboarding_steps` table.
///
/// `step_key` and `status` parse into the closed core enums on load, so an
/// out-of-catalog value in the database surfaces as a decode error instead
/// of leaking into handlers.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OnboardingStep {
    pub id: DbId,
    pub user_id: DbId,
    #[sqlx(try_from = "String")]
    pub step_key: StepKey,
    pub step_order: i32,
    #[sqlx(try_from = "String")]
    pub status: StepStatus,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl OnboardingStep {
    /// Project the row down to the pure transition state.
    pub fn state(&self) -> StepState {
        StepState {
            key: self.step_key,
            status: self.status,
        }
    }
}
