//! Dealer onboarding checklist: step catalog and progression rules.
//!
//! Every dealer owns one row per [`StepKey`] (seeded at profile completion).
//! A step is `pending`, `current` (the single "next to do" pointer), or
//! `done`. Completion is monotonic and idempotent, and any pending step may
//! be completed directly -- business flows are allowed to finish steps out
//! of order (e.g. subscribing to a plan before identity verification).
//!
//! The transition rules live here as pure functions over [`StepState`] so
//! they can be tested without a database; `matjar-db` applies them inside a
//! transaction that holds row locks for all of the user's steps.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Step catalog
// ---------------------------------------------------------------------------

/// One onboarding milestone. The catalog is closed and totally ordered;
/// adding or reordering steps is a migration concern, not a runtime one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKey {
    /// National-identity verification succeeded.
    Nafath,
    /// FAAL dealer license verified.
    FaalLicense,
    /// Profile basics filled in.
    BasicInfo,
    /// Storefront configured (template picked).
    SiteSetup,
    /// First listing created.
    FirstListing,
    /// Subscribed to a package.
    Plan,
    /// Storefront published.
    PublishSite,
}

impl StepKey {
    /// Every step, in catalog order.
    pub const ALL: [StepKey; 7] = [
        StepKey::Nafath,
        StepKey::FaalLicense,
        StepKey::BasicInfo,
        StepKey::SiteSetup,
        StepKey::FirstListing,
        StepKey::Plan,
        StepKey::PublishSite,
    ];

    /// Fixed total-order position, 1..=7.
    pub fn order(self) -> i32 {
        match self {
            StepKey::Nafath => 1,
            StepKey::FaalLicense => 2,
            StepKey::BasicInfo => 3,
            StepKey::SiteSetup => 4,
            StepKey::FirstListing => 5,
            StepKey::Plan => 6,
            StepKey::PublishSite => 7,
        }
    }

    /// Wire/storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            StepKey::Nafath => "nafath",
            StepKey::FaalLicense => "faal_license",
            StepKey::BasicInfo => "basic_info",
            StepKey::SiteSetup => "site_setup",
            StepKey::FirstListing => "first_listing",
            StepKey::Plan => "plan",
            StepKey::PublishSite => "publish_site",
        }
    }
}

impl fmt::Display for StepKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StepKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown onboarding step '{s}'")))
    }
}

impl TryFrom<String> for StepKey {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ---------------------------------------------------------------------------
// Step status
// ---------------------------------------------------------------------------

/// Lifecycle state of one step row. `done` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Pending,
    Current,
    Done,
}

impl StepStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            StepStatus::Pending => "pending",
            StepStatus::Current => "current",
            StepStatus::Done => "done",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(StepStatus::Pending),
            "current" => Ok(StepStatus::Current),
            "done" => Ok(StepStatus::Done),
            other => Err(CoreError::Validation(format!(
                "Unknown step status '{other}'"
            ))),
        }
    }
}

impl TryFrom<String> for StepStatus {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ---------------------------------------------------------------------------
// Progression
// ---------------------------------------------------------------------------

/// In-memory view of one step row, as loaded inside the engine transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepState {
    pub key: StepKey,
    pub status: StepStatus,
}

/// What [`apply_completion`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// No row for this key -- the caller maps this to a 404.
    NotFound,
    /// The step was already done; the rows are untouched.
    AlreadyDone,
    /// The step transitioned to done and the current pointer was recomputed.
    Completed,
}

/// The freshly-seeded checklist: the first catalog step is `current`, the
/// rest are `pending`.
pub fn initial_steps() -> Vec<StepState> {
    StepKey::ALL
        .into_iter()
        .map(|key| StepState {
            key,
            status: if key.order() == 1 {
                StepStatus::Current
            } else {
                StepStatus::Pending
            },
        })
        .collect()
}

/// Mark `key` done and re-derive the current pointer.
///
/// Idempotent: completing an already-done step leaves every row untouched.
/// The caller is responsible for persisting rows whose status changed and
/// for stamping `completed_at` on the target when the outcome is
/// [`CompletionOutcome::Completed`].
pub fn apply_completion(steps: &mut [StepState], key: StepKey) -> CompletionOutcome {
    let Some(target) = steps.iter_mut().find(|s| s.key == key) else {
        return CompletionOutcome::NotFound;
    };

    if target.status == StepStatus::Done {
        return CompletionOutcome::AlreadyDone;
    }

    target.status = StepStatus::Done;

    // Demote a stale current (possible when the user completed some other
    // pending step directly). It rejoins the pending pool but does not
    // immediately reclaim the pointer -- the user just skipped past it.
    let demoted = steps
        .iter_mut()
        .find(|s| s.status == StepStatus::Current)
        .map(|s| {
            s.status = StepStatus::Pending;
            s.key
        });

    recompute_current(steps, demoted);
    CompletionOutcome::Completed
}

/// Re-derive the single `current` pointer from scratch.
///
/// Promotes the lowest-order `pending` row, preferring rows other than
/// `just_demoted`; the demoted row is only re-promoted when it is the last
/// pending step left. Recomputing instead of incrementing keeps the
/// at-most-one-current invariant no matter which step just finished, and
/// leaves zero `current` rows once everything is done.
pub fn recompute_current(steps: &mut [StepState], just_demoted: Option<StepKey>) {
    for step in steps.iter_mut() {
        if step.status == StepStatus::Current {
            step.status = StepStatus::Pending;
        }
    }

    let next_key = steps
        .iter()
        .filter(|s| s.status == StepStatus::Pending && Some(s.key) != just_demoted)
        .min_by_key(|s| s.key.order())
        .or_else(|| {
            steps
                .iter()
                .filter(|s| s.status == StepStatus::Pending)
                .min_by_key(|s| s.key.order())
        })
        .map(|s| s.key);

    if let Some(key) = next_key {
        if let Some(next) = steps.iter_mut().find(|s| s.key == key) {
            next.status = StepStatus::Current;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
