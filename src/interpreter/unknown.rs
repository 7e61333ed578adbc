use super::Classified;
use crate::models::{Comparison, Finding, Interpretation};

/// Terminal pass: drains the store. Anything not matching at this point is
/// unknown and its status becomes part of the label; matches are absorbed
/// without being interpreted.
pub fn unknown_comparisons(remaining: Vec<Comparison>) -> Classified {
    let mut statuses: Vec<String> = Vec::new();
    let mut unknown_count = 0usize;

    for comparison in remaining.iter().filter(|c| !c.status.is_match()) {
        let status = comparison.status.as_str();
        if !statuses.iter().any(|s| s == status) {
            statuses.push(status.to_string());
        }
        unknown_count += 1;
    }

    let interpretations = if unknown_count == 0 {
        Vec::new()
    } else {
        vec![Interpretation::certain(Finding::Unknown(statuses), unknown_count)]
    };

    Classified {
        claimed: remaining,
        interpretations,
        remainder: Vec::new(),
    }
}
