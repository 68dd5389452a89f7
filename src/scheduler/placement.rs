//! Placement rules and slot preference scoring.
//!
//! Hard eligibility is decided by a set of [`PlacementRule`]s composed
//! by conjunction: a slot is eligible only if every rule permits it.
//! New predicates extend the set without touching the scheduler loop.
//!
//! Soft desirability is a separate additive score: every eligible slot
//! starts at [`BASE_SCORE`] and collects time-of-day bonuses for the
//! subject type. Score ties are broken by enumeration order (day-major,
//! then slot-major): the earlier-enumerated slot wins.

use std::fmt::Debug;
use std::sync::Arc;

use crate::models::{hm, Day, GenerationConstraints, Subject, SubjectType};

/// Base desirability of any eligible slot.
pub const BASE_SCORE: i32 = 100;

/// A hard eligibility predicate for placing a subject into a slot.
///
/// Rules compose by conjunction: all must permit a placement. Rules must
/// be pure; the scheduler may evaluate them in any order and any number
/// of times.
pub trait PlacementRule: Send + Sync + Debug {
    /// Rule name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Whether `subject` may start at `start_min` on `day`.
    fn permits(
        &self,
        subject: &Subject,
        day: Day,
        start_min: i32,
        constraints: &GenerationConstraints,
    ) -> bool;
}

/// Keeps lab sessions out of the early morning.
///
/// When `constraints.avoid_early_labs` is set, lab subjects may not
/// start before 10:00. Inactive for non-lab subjects and when the
/// option is off.
#[derive(Debug, Clone, Copy)]
pub struct AvoidEarlyLabs;

impl PlacementRule for AvoidEarlyLabs {
    fn name(&self) -> &'static str {
        "AvoidEarlyLabs"
    }

    fn permits(
        &self,
        subject: &Subject,
        _day: Day,
        start_min: i32,
        constraints: &GenerationConstraints,
    ) -> bool {
        !(constraints.avoid_early_labs
            && subject.subject_type == SubjectType::Lab
            && start_min < hm(10, 0))
    }
}

/// A conjunction of placement rules.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Arc<dyn PlacementRule>>,
}

impl RuleSet {
    /// Creates an empty rule set (everything permitted).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the standard rule set: [`AvoidEarlyLabs`].
    pub fn standard() -> Self {
        Self::empty().with_rule(AvoidEarlyLabs)
    }

    /// Adds a rule to the conjunction.
    pub fn with_rule<R: PlacementRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Whether every rule permits the placement.
    pub fn permits(
        &self,
        subject: &Subject,
        day: Day,
        start_min: i32,
        constraints: &GenerationConstraints,
    ) -> bool {
        self.rules
            .iter()
            .all(|r| r.permits(subject, day, start_min, constraints))
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Scores the desirability of a slot for a subject.
///
/// Base 100, plus:
/// - +20 for core subjects starting before 12:00
/// - +15 for electives starting at or after 14:00
/// - +25 for labs starting in [10:00, 12:00)
///
/// Higher is better. The day does not influence the score; it
/// participates only through enumeration order on ties.
pub fn score_slot(subject: &Subject, _day: Day, start_min: i32) -> i32 {
    let mut score = BASE_SCORE;
    match subject.subject_type {
        SubjectType::Core if start_min < hm(12, 0) => score += 20,
        SubjectType::Elective if start_min >= hm(14, 0) => score += 15,
        SubjectType::Lab if (hm(10, 0)..hm(12, 0)).contains(&start_min) => score += 25,
        _ => {}
    }
    score
}
