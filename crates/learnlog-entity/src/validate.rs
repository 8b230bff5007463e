//! Advisory range validation for log records. Out-of-range values are
//! rejected before persistence, never clamped; the storage schema itself does
//! not repeat these checks.

use crate::attempt::AttemptFields;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldViolation {
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
}

impl FieldViolation {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Negative { field, .. } | Self::OutOfRange { field, .. } => field,
        }
    }
}

/// Rejection of a record, carrying every offending field.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("record rejected: {violations:?}")]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

pub trait Validate {
    fn violations(&self) -> Vec<FieldViolation>;

    fn validate(&self) -> Result<(), ValidationError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }
}

fn non_negative(field: &'static str, value: f64, violations: &mut Vec<FieldViolation>) {
    if value < 0.0 {
        violations.push(FieldViolation::Negative { field, value });
    }
}

fn in_range(
    field: &'static str,
    min: f64,
    max: f64,
    value: f64,
    violations: &mut Vec<FieldViolation>,
) {
    if !(min..=max).contains(&value) {
        violations.push(FieldViolation::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }
}

fn rating_scale(field: &'static str, value: Option<i32>, violations: &mut Vec<FieldViolation>) {
    if let Some(value) = value {
        in_range(field, 1.0, 5.0, f64::from(value), violations);
    }
}

impl Validate for crate::content::session::Model {
    fn violations(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        non_negative("time_spent", self.time_spent, &mut violations);
        non_negative("progress", self.progress, &mut violations);
        violations
    }
}

impl Validate for crate::content::summary::Model {
    fn violations(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        non_negative("time_spent", self.time_spent, &mut violations);
        in_range("progress", 0.0, 1.0, self.progress, &mut violations);
        violations
    }
}

impl Validate for crate::content::rating::Model {
    fn violations(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        rating_scale("quality", self.quality, &mut violations);
        rating_scale("ease", self.ease, &mut violations);
        rating_scale("learning", self.learning, &mut violations);
        violations
    }
}

impl Validate for crate::mastery::Model {
    fn violations(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        in_range(
            "mastery_level",
            1.0,
            10.0,
            f64::from(self.mastery_level),
            &mut violations,
        );
        violations
    }
}

impl Validate for crate::attempt::Model {
    fn violations(&self) -> Vec<FieldViolation> {
        self.attempt_violations()
    }
}

impl Validate for crate::exam::attempt::Model {
    fn violations(&self) -> Vec<FieldViolation> {
        self.attempt_violations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use uuid::Uuid;

    fn summary(progress: f64) -> crate::content::summary::Model {
        crate::content::summary::Model {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            content_id: Uuid::new_v4(),
            channel_id: Uuid::new_v4(),
            start_timestamp: NaiveDateTime::default(),
            end_timestamp: None,
            completion_timestamp: None,
            time_spent: 0.0,
            progress,
            kind: "exercise".to_owned(),
            extra_fields: "{}".to_owned(),
        }
    }

    #[test]
    fn summary_progress_bounds() {
        assert!(summary(0.0).validate().is_ok());
        assert!(summary(1.0).validate().is_ok());

        let err = summary(1.5).validate().unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].field(), "progress");

        // Rejected, not clamped: the value survives untouched on the record.
        let record = summary(1.5);
        assert!(record.validate().is_err());
        assert_eq!(record.progress, 1.5);
    }

    #[test]
    fn summary_reports_every_offending_field() {
        let mut record = summary(-0.1);
        record.time_spent = -3.0;
        let err = record.validate().unwrap_err();
        let fields: Vec<_> = err.violations.iter().map(FieldViolation::field).collect();
        assert_eq!(fields, ["time_spent", "progress"]);
    }

    #[test]
    fn session_progress_has_no_upper_bound() {
        let record = crate::content::session::Model {
            id: Uuid::new_v4(),
            user_id: None,
            content_id: Uuid::new_v4(),
            channel_id: Uuid::new_v4(),
            start_timestamp: NaiveDateTime::default(),
            end_timestamp: None,
            time_spent: 12.5,
            progress: 3.0,
            kind: "video".to_owned(),
            extra_fields: "{}".to_owned(),
        };
        assert!(record.validate().is_ok());
    }

    #[test]
    fn rating_scales() {
        let mut record = crate::content::rating::Model {
            id: Uuid::new_v4(),
            user_id: None,
            content_id: Uuid::new_v4(),
            channel_id: Uuid::new_v4(),
            quality: Some(5),
            ease: None,
            learning: Some(1),
            feedback: String::new(),
        };
        assert!(record.validate().is_ok());

        record.quality = Some(6);
        record.learning = Some(0);
        let err = record.validate().unwrap_err();
        let fields: Vec<_> = err.violations.iter().map(FieldViolation::field).collect();
        assert_eq!(fields, ["quality", "learning"]);
    }

    #[test]
    fn mastery_level_bounds() {
        let mut record = crate::mastery::Model {
            id: Uuid::new_v4(),
            summarylog_id: Uuid::new_v4(),
            mastery_criterion: "{\"m\":5,\"n\":7}".to_owned(),
            start_timestamp: NaiveDateTime::default(),
            end_timestamp: None,
            completion_timestamp: None,
            mastery_level: 1,
            complete: false,
        };
        assert!(record.validate().is_ok());
        record.mastery_level = 10;
        assert!(record.validate().is_ok());
        record.mastery_level = 11;
        assert!(record.validate().is_err());
        record.mastery_level = 0;
        assert!(record.validate().is_err());
    }

    #[test]
    fn attempt_correct_bounds() {
        let mut record = crate::attempt::Model {
            id: Uuid::new_v4(),
            sessionlog_id: Uuid::new_v4(),
            masterylog_id: None,
            item: "q1".to_owned(),
            start_timestamp: NaiveDateTime::default(),
            end_timestamp: NaiveDateTime::default(),
            completion_timestamp: None,
            time_spent: 4.0,
            complete: true,
            correct: 1.0,
            hinted: false,
            answer: "{}".to_owned(),
            simple_answer: String::new(),
            interaction_history: "[]".to_owned(),
            user_id: Uuid::new_v4(),
        };
        assert!(record.validate().is_ok());
        record.correct = 1.01;
        assert_eq!(record.validate().unwrap_err().violations[0].field(), "correct");
    }
}
