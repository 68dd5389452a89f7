//! Subject prioritization.
//!
//! Orders subjects for allocation. Earlier subjects commit first and
//! constrain everyone after them, so the order encodes the department's
//! allocation policy: core subjects before labs, labs before
//! electives/tutorials, heavier weekly loads before lighter ones.

use crate::models::{Subject, SubjectType};

/// Allocation band: lower schedules first.
fn band(subject_type: SubjectType) -> u8 {
    match subject_type {
        SubjectType::Core => 0,
        SubjectType::Lab => 1,
        SubjectType::Elective | SubjectType::Tutorial => 2,
    }
}

/// Returns subject indices in allocation order.
///
/// Comparator, in order of precedence:
/// 1. `Core` before everything else
/// 2. `Lab` before `Elective`/`Tutorial`
/// 3. Descending `hours_per_week`
///
/// The sort is stable: ties retain input order, so identical inputs
/// always produce identical schedules.
pub fn prioritize(subjects: &[Subject]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..subjects.len()).collect();
    indices.sort_by(|&a, &b| {
        let (sa, sb) = (&subjects[a], &subjects[b]);
        band(sa.subject_type)
            .cmp(&band(sb.subject_type))
            .then(sb.hours_per_week.cmp(&sa.hours_per_week))
    });
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types_in_order(subjects: &[Subject]) -> Vec<SubjectType> {
        prioritize(subjects)
            .into_iter()
            .map(|i| subjects[i].subject_type)
            .collect()
    }

    #[test]
    fn test_core_then_lab_then_elective() {
        let subjects = vec![
            Subject::elective("E").with_weekly_hours(4),
            Subject::core("C").with_weekly_hours(2),
            Subject::lab("L").with_weekly_hours(3),
        ];
        assert_eq!(
            types_in_order(&subjects),
            vec![SubjectType::Core, SubjectType::Lab, SubjectType::Elective]
        );
    }

    #[test]
    fn test_hours_descending_within_band() {
        let subjects = vec![
            Subject::core("light").with_weekly_hours(2),
            Subject::core("heavy").with_weekly_hours(5),
            Subject::core("medium").with_weekly_hours(3),
        ];
        let order: Vec<&str> = prioritize(&subjects)
            .into_iter()
            .map(|i| subjects[i].id.as_str())
            .collect();
        assert_eq!(order, vec!["heavy", "medium", "light"]);
    }

    #[test]
    fn test_stable_on_ties() {
        let subjects = vec![
            Subject::tutorial("first").with_weekly_hours(2),
            Subject::tutorial("second").with_weekly_hours(2),
            Subject::elective("third").with_weekly_hours(2),
        ];
        let order: Vec<&str> = prioritize(&subjects)
            .into_iter()
            .map(|i| subjects[i].id.as_str())
            .collect();
        // Same band, same hours → input order preserved
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_tutorial_and_elective_share_band() {
        let subjects = vec![
            Subject::tutorial("T").with_weekly_hours(5),
            Subject::elective("E").with_weekly_hours(1),
            Subject::lab("L").with_weekly_hours(1),
        ];
        let order: Vec<&str> = prioritize(&subjects)
            .into_iter()
            .map(|i| subjects[i].id.as_str())
            .collect();
        // Lab outranks both; tutorial beats elective on hours only
        assert_eq!(order, vec!["L", "T", "E"]);
    }

    #[test]
    fn test_empty() {
        assert!(prioritize(&[]).is_empty());
    }
}
