use super::{claim_where, Classified};
use crate::models::{Comparison, Finding, Interpretation, MismatchKind, Status};

pub fn mismatches(remaining: Vec<Comparison>, kind: MismatchKind) -> Classified {
    claim_where(
        remaining,
        |c| c.status == Status::Mismatch(kind),
        |claimed| Interpretation::certain(Finding::Mismatch(kind), claimed.len()),
    )
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_mismatches_by_kind() {
        let comparisons = store(&[
            "Mismatch: amounts",
            "Mismatch: addresses",
            "Mismatch: amounts",
            "Mismatch: token amounts",
        ]);
        let result = mismatches(comparisons, MismatchKind::Amounts);
        assert_eq!(
            result.interpretations,
            vec![Interpretation::certain(Finding::Mismatch(MismatchKind::Amounts), 2)]
        );
        assert_eq!(result.remainder.len(), 2);
    }

    #[test]
    fn test_mismatch_passes_are_independent() {
        let mut remaining = store(&["Mismatch: token tickers", "Mismatch: addresses", "Match"]);
        let mut counts = Vec::new();
        for kind in MismatchKind::ALL {
            let result = mismatches(remaining, kind);
            counts.push(result.claimed.len());
            remaining = result.remainder;
        }
        assert_eq!(counts, vec![1, 0, 0, 1]);
        assert_eq!(remaining.len(), 1);
    }

    #[test]
    fn test_unlisted_mismatch_left_alone() {
        let result = mismatches(store(&["Mismatch: fees"]), MismatchKind::Amounts);
        assert!(result.claimed.is_empty());
        assert!(result.interpretations.is_empty());
    }
}
