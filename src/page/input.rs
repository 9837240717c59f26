use crate::common::{PageId, ValidationError};

/// A page replacement workload that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInput {
    pub references: Vec<PageId>,
    pub capacity: usize,
}

/// Parses a reference string and a frame capacity.
///
/// Page numbers are separated by whitespace and/or commas. The capacity must
/// be a positive integer.
pub fn parse_page_input(
    references_text: &str,
    capacity_text: &str,
) -> Result<PageInput, ValidationError> {
    let references = parse_reference_string(references_text)?;

    let capacity = match capacity_text.trim().parse::<usize>() {
        Ok(capacity) if capacity > 0 => capacity,
        _ => return Err(ValidationError::InvalidCapacity),
    };

    Ok(PageInput {
        references,
        capacity,
    })
}

/// Parses whitespace- or comma-separated page numbers. Negative numbers are
/// valid page identifiers.
pub fn parse_reference_string(text: &str) -> Result<Vec<PageId>, ValidationError> {
    let references = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<i64>().map(PageId::new))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ValidationError::ReferenceNotANumber)?;

    if references.is_empty() {
        return Err(ValidationError::EmptyReferences);
    }
    Ok(references)
}
