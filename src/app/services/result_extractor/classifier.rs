//! Pass/fail derivation for one student
//!
//! Classification is a pure, total function of the raw aggregate-score token
//! and the subject rows. Two policies are supported because result sheets in
//! circulation disagree on whether subject outcomes count:
//! - strict: a valid score AND at least one subject with every subject passed
//! - lenient: a valid score is enough

use crate::app::models::{ResultStatus, SubjectGrade};
use crate::constants::INVALID_SCORE_TOKENS;
use serde::{Deserialize, Serialize};

/// How subject outcomes affect the overall result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationPolicy {
    /// Require every subject to pass (and at least one subject to exist)
    pub strict_subject_check: bool,
}

impl ClassificationPolicy {
    pub fn strict() -> Self {
        Self {
            strict_subject_check: true,
        }
    }

    pub fn lenient() -> Self {
        Self {
            strict_subject_check: false,
        }
    }
}

impl Default for ClassificationPolicy {
    fn default() -> Self {
        Self::strict()
    }
}

/// Derived values for one student
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub aggregate_score: f64,
    pub has_valid_aggregate_score: bool,
    pub passed_subject_count: usize,
    pub total_subject_count: usize,
    pub result_status: ResultStatus,
}

/// Parse a raw score token, returning the score only when it is valid
///
/// Valid means: not a reserved token, parses as a finite number, and is
/// strictly positive.
pub fn parse_valid_score(raw: &str) -> Option<f64> {
    let token = raw.trim();
    if INVALID_SCORE_TOKENS.contains(&token) {
        return None;
    }

    token
        .parse::<f64>()
        .ok()
        .filter(|score| score.is_finite() && *score > 0.0)
}

/// Number of subjects whose grade is outside the failing-grade set
pub fn count_passed(subjects: &[SubjectGrade]) -> usize {
    subjects.iter().filter(|subject| !subject.is_failing()).count()
}

/// Classify one student
pub fn classify(
    aggregate_score_raw: &str,
    subjects: &[SubjectGrade],
    policy: ClassificationPolicy,
) -> Classification {
    let valid_score = parse_valid_score(aggregate_score_raw);
    let has_valid_aggregate_score = valid_score.is_some();

    let total_subject_count = subjects.len();
    let passed_subject_count = count_passed(subjects);
    // Zero parsed subjects never counts as all passed
    let all_subjects_passed = total_subject_count > 0 && passed_subject_count == total_subject_count;

    let passes = if policy.strict_subject_check {
        has_valid_aggregate_score && all_subjects_passed
    } else {
        has_valid_aggregate_score
    };

    Classification {
        aggregate_score: valid_score.unwrap_or(0.0),
        has_valid_aggregate_score,
        passed_subject_count,
        total_subject_count,
        result_status: if passes {
            ResultStatus::Pass
        } else {
            ResultStatus::Fail
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(grade: &str) -> SubjectGrade {
        SubjectGrade::new("310241", "DATABASE MANAGEMENT SYSTEMS", grade, None)
    }

    #[test]
    fn test_reserved_tokens_are_never_valid() {
        for token in ["N/A", "--", "", "FF", "AB", "IC", "ABS"] {
            assert_eq!(parse_valid_score(token), None, "token {:?}", token);
        }
    }

    #[test]
    fn test_score_must_be_strictly_positive() {
        assert_eq!(parse_valid_score("8.5"), Some(8.5));
        assert_eq!(parse_valid_score("0.0"), None);
        assert_eq!(parse_valid_score("0"), None);
        assert_eq!(parse_valid_score("-1.5"), None);
        assert_eq!(parse_valid_score("NaN"), None);
        assert_eq!(parse_valid_score("inf"), None);
    }

    #[test]
    fn test_strict_policy_requires_all_subjects() {
        let subjects = vec![subject("A"), subject("F")];
        let result = classify("8.5", &subjects, ClassificationPolicy::strict());

        assert!(result.has_valid_aggregate_score);
        assert_eq!(result.passed_subject_count, 1);
        assert_eq!(result.total_subject_count, 2);
        assert_eq!(result.result_status, ResultStatus::Fail);
    }

    #[test]
    fn test_lenient_policy_ignores_subjects() {
        let subjects = vec![subject("A"), subject("F")];
        let result = classify("8.5", &subjects, ClassificationPolicy::lenient());

        assert_eq!(result.result_status, ResultStatus::Pass);
    }

    #[test]
    fn test_zero_subjects_fails_under_strict_policy() {
        let strict = classify("9.1", &[], ClassificationPolicy::strict());
        let lenient = classify("9.1", &[], ClassificationPolicy::lenient());

        assert_eq!(strict.result_status, ResultStatus::Fail);
        assert_eq!(lenient.result_status, ResultStatus::Pass);
    }

    #[test]
    fn test_invalid_score_fails_under_both_policies() {
        let subjects = vec![subject("O"), subject("A+")];
        for policy in [ClassificationPolicy::strict(), ClassificationPolicy::lenient()] {
            let result = classify("--", &subjects, policy);
            assert_eq!(result.aggregate_score, 0.0);
            assert!(!result.has_valid_aggregate_score);
            assert_eq!(result.result_status, ResultStatus::Fail);
        }
    }

    #[test]
    fn test_plus_grades_count_as_passed() {
        let subjects = vec![subject("A+"), subject("B+"), subject("O")];
        assert_eq!(count_passed(&subjects), 3);
    }

    #[test]
    fn test_failing_grades_are_case_sensitive() {
        let subjects = vec![subject("ff"), subject("Ab"), subject("ABS")];
        assert_eq!(count_passed(&subjects), 2);
    }
}
