use super::{claim_where, Classified};
use crate::models::{Comparison, Finding, Interpretation, Status};

type OperationKey<'a> = (Option<&'a str>, Option<&'a str>, Option<&'a str>);

fn operation_key(comparison: &Comparison) -> OperationKey<'_> {
    let imported = &comparison.imported;
    (
        imported.txid.as_deref(),
        imported.amount.as_deref(),
        imported.operation_type.as_deref(),
    )
}

/// Extra operations whose (txid, amount, operation type) appears at least
/// twice among the comparisons left when this pass starts.
pub fn duplicated_operations(remaining: Vec<Comparison>) -> Classified {
    let duplicated: Vec<bool> = remaining
        .iter()
        .map(|comparison| {
            if comparison.status != Status::ExtraOperation {
                return false;
            }
            let key = operation_key(comparison);
            let occurrences = remaining
                .iter()
                .filter(|other| operation_key(other) == key)
                .count();
            occurrences >= 2
        })
        .collect();

    let mut claimed = Vec::new();
    let mut remainder = Vec::new();
    for (comparison, is_duplicate) in remaining.into_iter().zip(duplicated) {
        if is_duplicate {
            claimed.push(comparison);
        } else {
            remainder.push(comparison);
        }
    }

    let interpretations = if claimed.is_empty() {
        Vec::new()
    } else {
        vec![Interpretation::certain(Finding::DuplicatedOperation, claimed.len())]
    };

    Classified {
        claimed,
        interpretations,
        remainder,
    }
}

/// Whatever extra operations the duplicate pass left behind.
pub fn unique_extra_operations(remaining: Vec<Comparison>) -> Classified {
    claim_where(
        remaining,
        |c| c.status == Status::ExtraOperation,
        |claimed| Interpretation::certain(Finding::NonduplicatedExtraOperation, claimed.len()),
    )
}
