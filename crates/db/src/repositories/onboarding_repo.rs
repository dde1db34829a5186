//! Repository for the `onboarding_steps` table: the progression engine.

use matjar_core::onboarding::{self, CompletionOutcome, StepKey, StepState, StepStatus};
use matjar_core::types::DbId;
use sqlx::PgPool;

use crate::models::onboarding::OnboardingStep;

/// Column list for `onboarding_steps` queries.
const COLUMNS: &str =
    "id, user_id, step_key, step_order, status, completed_at, created_at, updated_at";

/// Durable per-user checklist state plus the transactional transition that
/// marks a step done and re-derives the `current` pointer.
pub struct OnboardingRepo;

impl OnboardingRepo {
    /// Seed all checklist rows for a new user in one atomic batch: the
    /// first catalog step starts `current`, the rest `pending`.
    ///
    /// Re-initializing an already-seeded user is a no-op (`ON CONFLICT DO
    /// NOTHING` on the whole batch), so profile-completion retries cannot
    /// leave a user with duplicate or missing rows.
    pub async fn initialize(pool: &PgPool, user_id: DbId) -> Result<(), sqlx::Error> {
        // Values come from the closed catalog, not user input, so they can
        // be inlined; only the user id is bound.
        let values: Vec<String> = onboarding::initial_steps()
            .into_iter()
            .map(|s| {
                format!(
                    "($1, '{}', {}, '{}')",
                    s.key.as_str(),
                    s.key.order(),
                    s.status.as_str()
                )
            })
            .collect();

        let query = format!(
            "INSERT INTO onboarding_steps (user_id, step_key, step_order, status)
             VALUES {}
             ON CONFLICT (user_id, step_key) DO NOTHING",
            values.join(", ")
        );

        sqlx::query(&query).bind(user_id).execute(pool).await?;
        Ok(())
    }

    /// All checklist rows for a user, ordered by `step_order`.
    ///
    /// Returns an empty vec (not an error) for users that were never
    /// initialized; callers treat that as "no onboarding state yet."
    pub async fn get_all(pool: &PgPool, user_id: DbId) -> Result<Vec<OnboardingStep>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM onboarding_steps
             WHERE user_id = $1
             ORDER BY step_order ASC"
        );
        sqlx::query_as::<_, OnboardingStep>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Mark a step done and advance the `current` pointer, returning the
    /// full ordered row set after the transition.
    ///
    /// Returns `Ok(None)` when the user has no row for `key` (never
    /// initialized); completing an already-done step is an idempotent no-op
    /// that returns the rows unchanged without touching `completed_at`.
    ///
    /// The whole read-transition-write runs in one transaction holding
    /// `FOR UPDATE` locks on all of the user's rows, so concurrent
    /// completions for the same user serialize and the at-most-one-current
    /// invariant cannot be violated by a race. The transition itself is
    /// [`matjar_core::onboarding::apply_completion`].
    pub async fn complete_step(
        pool: &PgPool,
        user_id: DbId,
        key: StepKey,
    ) -> Result<Option<Vec<OnboardingStep>>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let lock_query = format!(
            "SELECT {COLUMNS} FROM onboarding_steps
             WHERE user_id = $1
             ORDER BY step_order ASC
             FOR UPDATE"
        );
        let rows: Vec<OnboardingStep> = sqlx::query_as(&lock_query)
            .bind(user_id)
            .fetch_all(&mut *tx)
            .await?;

        let mut states: Vec<StepState> = rows.iter().map(OnboardingStep::state).collect();

        match onboarding::apply_completion(&mut states, key) {
            CompletionOutcome::NotFound => {
                // Uninitialized user or (unreachable past the parse
                // boundary) a key with no row. Dropping the tx rolls back.
                Ok(None)
            }
            CompletionOutcome::AlreadyDone => {
                tx.commit().await?;
                Ok(Some(rows))
            }
            CompletionOutcome::Completed => {
                for (row, state) in rows.iter().zip(&states) {
                    if row.status == state.status {
                        continue;
                    }
                    if state.key == key {
                        // The target row also gets its completion stamp.
                        sqlx::query(
                            "UPDATE onboarding_steps
                             SET status = $1, completed_at = NOW(), updated_at = NOW()
                             WHERE id = $2",
                        )
                        .bind(StepStatus::Done.as_str())
                        .bind(row.id)
                        .execute(&mut *tx)
                        .await?;
                    } else {
                        sqlx::query(
                            "UPDATE onboarding_steps
                             SET status = $1, updated_at = NOW()
                             WHERE id = $2",
                        )
                        .bind(state.status.as_str())
                        .bind(row.id)
                        .execute(&mut *tx)
                        .await?;
                    }
                }

                let reread = format!(
                    "SELECT {COLUMNS} FROM onboarding_steps
                     WHERE user_id = $1
                     ORDER BY step_order ASC"
                );
                let updated: Vec<OnboardingStep> = sqlx::query_as(&reread)
                    .bind(user_id)
                    .fetch_all(&mut *tx)
                    .await?;

                tx.commit().await?;
                Ok(Some(updated))
            }
        }
    }
}
