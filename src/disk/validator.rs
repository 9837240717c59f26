use std::num::IntErrorKind;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::warn;

use crate::common::{Cylinder, ValidationError, DISK_SIZE};

/// A disk workload that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskInput {
    /// Requested cylinders in arrival order
    pub requests: Vec<Cylinder>,
    /// Initial head position
    pub head_position: Cylinder,
}

/// Outcome of validating user-entered disk workload text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(DiskInput),
    Invalid { message: String },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    /// The rejection message, if validation failed
    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid { message } => Some(message),
        }
    }

    pub fn into_input(self) -> Option<DiskInput> {
        match self {
            ValidationResult::Valid(input) => Some(input),
            ValidationResult::Invalid { .. } => None,
        }
    }
}

impl From<Result<DiskInput, ValidationError>> for ValidationResult {
    fn from(result: Result<DiskInput, ValidationError>) -> Self {
        match result {
            Ok(input) => ValidationResult::Valid(input),
            Err(err) => ValidationResult::Invalid {
                message: err.to_string(),
            },
        }
    }
}

// Flat `{valid, message?, requests?, headPosition?}` shape.
impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ValidationResult::Valid(input) => {
                let mut state = serializer.serialize_struct("ValidationResult", 3)?;
                state.serialize_field("valid", &true)?;
                state.serialize_field("requests", &input.requests)?;
                state.serialize_field("headPosition", &input.head_position)?;
                state.end()
            }
            ValidationResult::Invalid { message } => {
                let mut state = serializer.serialize_struct("ValidationResult", 2)?;
                state.serialize_field("valid", &false)?;
                state.serialize_field("message", message)?;
                state.end()
            }
        }
    }
}

/// Validates raw request and head text, reporting the first violated rule
/// as a message instead of an error.
pub fn validate_disk_input(requests_text: &str, head_text: &str) -> ValidationResult {
    let result = parse_disk_input(requests_text, head_text);
    if let Err(err) = &result {
        warn!(%err, "rejected disk input");
    }
    result.into()
}

/// Parses comma-separated request cylinders and a head position.
///
/// Rules are checked in a fixed order: empty requests, empty head, head not a
/// number, any request not a number, head out of range, any request out of range.
pub fn parse_disk_input(
    requests_text: &str,
    head_text: &str,
) -> Result<DiskInput, ValidationError> {
    if requests_text.trim().is_empty() {
        return Err(ValidationError::EmptyRequests);
    }
    if head_text.trim().is_empty() {
        return Err(ValidationError::EmptyHead);
    }

    let head = parse_integer(head_text).ok_or(ValidationError::HeadNotANumber)?;

    let requests = requests_text
        .split(',')
        .map(parse_integer)
        .collect::<Option<Vec<_>>>()
        .ok_or(ValidationError::RequestNotANumber)?;

    let head_position = to_cylinder(head).ok_or(ValidationError::HeadOutOfRange)?;
    let requests = requests
        .into_iter()
        .map(to_cylinder)
        .collect::<Option<Vec<_>>>()
        .ok_or(ValidationError::RequestOutOfRange)?;

    Ok(DiskInput {
        requests,
        head_position,
    })
}

/// Parses a trimmed integer. Literals too large for `i64` saturate, so they
/// count as numbers and fail the range check instead.
fn parse_integer(text: &str) -> Option<i64> {
    match text.trim().parse::<i64>() {
        Ok(value) => Some(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

fn to_cylinder(value: i64) -> Option<Cylinder> {
    if (0..i64::from(DISK_SIZE)).contains(&value) {
        Some(value as Cylinder)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_input() {
        let input = parse_disk_input("98, 183,37 ,122", " 53 ").unwrap();
        assert_eq!(input.requests, vec![98, 183, 37, 122]);
        assert_eq!(input.head_position, 53);
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(parse_disk_input("", ""), Err(ValidationError::EmptyRequests));
        assert_eq!(parse_disk_input("1", "  "), Err(ValidationError::EmptyHead));
        // head parse is checked before request parse
        assert_eq!(parse_disk_input("x", "y"), Err(ValidationError::HeadNotANumber));
        // request parse is checked before head range
        assert_eq!(parse_disk_input("1,x", "500"), Err(ValidationError::RequestNotANumber));
        assert_eq!(parse_disk_input("500", "500"), Err(ValidationError::HeadOutOfRange));
        assert_eq!(parse_disk_input("10,200", "0"), Err(ValidationError::RequestOutOfRange));
    }

    #[test]
    fn test_range_bounds() {
        assert!(parse_disk_input("0,199", "199").is_ok());
        assert_eq!(parse_disk_input("-1", "5"), Err(ValidationError::RequestOutOfRange));
        assert_eq!(parse_disk_input("5", "-1"), Err(ValidationError::HeadOutOfRange));
    }

    #[test]
    fn test_huge_literals_are_out_of_range() {
        const HUGE: &str = "99999999999999999999";

        assert_eq!(parse_integer(HUGE), Some(i64::MAX));
        assert_eq!(parse_integer("-99999999999999999999"), Some(i64::MIN));
        assert_eq!(parse_integer("12abc"), None);

        assert_eq!(parse_disk_input("1", HUGE), Err(ValidationError::HeadOutOfRange));
        assert_eq!(
            parse_disk_input("1,99999999999999999999", "53"),
            Err(ValidationError::RequestOutOfRange)
        );
        // a huge head is a number, so the bad request is reported first
        assert_eq!(parse_disk_input("x", HUGE), Err(ValidationError::RequestNotANumber));
    }

    #[test]
    fn test_empty_element_is_not_a_number() {
        assert_eq!(parse_disk_input("1,,2", "5"), Err(ValidationError::RequestNotANumber));
    }

    #[test]
    fn test_validation_result_messages() {
        let result = validate_disk_input("1", "250");
        assert!(!result.is_valid());
        assert_eq!(result.message(), Some("Initial position must be between 0 and 199"));

        let result = validate_disk_input("1,2", "3");
        assert!(result.is_valid());
        assert_eq!(result.message(), None);
    }
}
