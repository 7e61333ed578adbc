use std::collections::BTreeSet;

use super::{claim_where, Classified};
use crate::models::{Comparison, Edge, Finding, Interpretation};

const UNKNOWN_DATE: &str = "an unknown date";

fn boundary_date(comparison: Option<&Comparison>) -> String {
    comparison
        .and_then(|c| {
            c.actual
                .as_ref()
                .and_then(|a| a.date.clone())
                .or_else(|| c.imported.date.clone())
        })
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

/// Missing operations forming a contiguous run from either end of the report.
/// The run stops at the first comparison that is not missing.
pub fn out_of_sync(mut remaining: Vec<Comparison>, edge: Edge) -> Classified {
    let (claimed, remainder) = match edge {
        Edge::Oldest => {
            let run = remaining.iter().take_while(|c| c.status.is_missing()).count();
            let rest = remaining.split_off(run);
            (remaining, rest)
        }
        Edge::Latest => {
            let run = remaining
                .iter()
                .rev()
                .take_while(|c| c.status.is_missing())
                .count();
            let tail = remaining.split_off(remaining.len() - run);
            (tail, remaining)
        }
    };

    if claimed.is_empty() {
        return Classified::unchanged(remainder);
    }

    // the date reported is the one of the claimed operation closest to the synced part
    let date = match edge {
        Edge::Oldest => boundary_date(claimed.last()),
        Edge::Latest => boundary_date(claimed.first()),
    };
    let interpretation = Interpretation::certain(Finding::OutOfSync { edge, date }, claimed.len());

    Classified {
        claimed,
        interpretations: vec![interpretation],
        remainder,
    }
}

fn is_dust(comparison: &Comparison, threshold: f64) -> bool {
    if !comparison.status.is_missing() {
        return false;
    }
    let Some(actual) = &comparison.actual else {
        return false;
    };
    let received = actual
        .operation_type
        .as_deref()
        .is_some_and(|t| t.starts_with("Received"));
    received && actual.amount_value().is_some_and(|amount| amount <= threshold)
}

/// Missing received operations whose amount does not exceed `threshold`.
/// Uncertain: the right threshold depends on the asset.
pub fn dusts(remaining: Vec<Comparison>, threshold: f64) -> Classified {
    claim_where(
        remaining,
        |c| is_dust(c, threshold),
        |claimed| Interpretation::uncertain(Finding::Dust, claimed.len()),
    )
}

/// Clusters of adjacent missing operations. Uncertain: two gaps can sit
/// next to each other by coincidence.
pub fn pagination_issue(remaining: Vec<Comparison>) -> Classified {
    let mut previous_is_missing = false;
    let mut clustered = BTreeSet::new();

    for (index, comparison) in remaining.iter().enumerate() {
        if comparison.status.is_missing() {
            if previous_is_missing {
                clustered.insert(index - 1);
                clustered.insert(index);
            }
            previous_is_missing = true;
        } else {
            previous_is_missing = false;
        }
    }

    if clustered.is_empty() {
        return Classified::unchanged(remaining);
    }

    let (claimed, remainder): (Vec<_>, Vec<_>) = remaining
        .into_iter()
        .enumerate()
        .partition(|(index, _)| clustered.contains(index));
    let claimed: Vec<Comparison> = claimed.into_iter().map(|(_, c)| c).collect();
    let remainder = remainder.into_iter().map(|(_, c)| c).collect();

    Classified {
        interpretations: vec![Interpretation::uncertain(
            Finding::PaginationIssue,
            claimed.len(),
        )],
        claimed,
        remainder,
    }
}

pub fn nonspecific_missing(remaining: Vec<Comparison>) -> Classified {
    claim_where(
        remaining,
        |c| c.status.is_missing(),
        |claimed| Interpretation::certain(Finding::NonspecificMissingOperation, claimed.len()),
    )
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::models::Snapshot;

    fn statuses(comparisons: &[Comparison]) -> Vec<&str> {
        comparisons.iter().map(|c| c.status.as_str()).collect()
    }

    #[test]
    fn test_out_of_sync_oldest() {
        let comparisons = vec![
            received("Missing Operation", "1", "2020-01-01"),
            received("Missing Operation", "1", "2020-01-02"),
            Comparison::new("Match"),
            Comparison::new("Missing Operation"),
        ];
        let result = out_of_sync(comparisons, Edge::Oldest);
        assert_eq!(result.claimed.len(), 2);
        assert_eq!(statuses(&result.remainder), vec!["Match", "Missing Operation"]);
        assert_eq!(
            result.interpretations,
            vec![Interpretation::certain(
                Finding::OutOfSync { edge: Edge::Oldest, date: "2020-01-02".to_string() },
                2
            )]
        );
    }

    #[test]
    fn test_out_of_sync_latest() {
        let comparisons = vec![
            Comparison::new("Missing Operation"),
            Comparison::new("Match"),
            received("Missing Operation", "1", "2021-05-01"),
            received("Missing Operation", "1", "2021-05-02"),
            received("Missing Operation", "1", "2021-05-03"),
        ];
        let result = out_of_sync(comparisons, Edge::Latest);
        assert_eq!(result.claimed.len(), 3);
        assert_eq!(statuses(&result.remainder), vec!["Missing Operation", "Match"]);
        assert_eq!(result.interpretations[0].finding.label(), "out of sync since 2021-05-01");
    }

    #[test]
    fn test_out_of_sync_falls_back_to_imported_date() {
        let comparison = Comparison::new("Missing Operation").with_imported(Snapshot {
            date: Some("2019-12-31".to_string()),
            ..Default::default()
        });
        let result = out_of_sync(vec![comparison, Comparison::new("Match")], Edge::Oldest);
        assert_eq!(result.interpretations[0].finding.label(), "out of sync up to 2019-12-31");
    }

    #[test]
    fn test_out_of_sync_nothing_at_edge() {
        let result = out_of_sync(store(&["Match", "Missing Operation", "Match"]), Edge::Oldest);
        assert!(result.claimed.is_empty());
        assert!(result.interpretations.is_empty());
        assert_eq!(result.remainder.len(), 3);
    }

    #[test]
    fn test_out_of_sync_edges_do_not_overlap() {
        let oldest = out_of_sync(store(&["Missing", "Missing"]), Edge::Oldest);
        assert_eq!(oldest.claimed.len(), 2);
        let latest = out_of_sync(oldest.remainder, Edge::Latest);
        assert!(latest.claimed.is_empty());
        assert!(latest.interpretations.is_empty());
    }

    #[test]
    fn test_dust_threshold_is_inclusive() {
        let comparisons = vec![
            received("Missing Operation", "1000", "2020-01-01"),
            received("Missing Operation", "1000.01", "2020-01-02"),
            received("Missing Operation", "12", "2020-01-03"),
        ];
        let result = dusts(comparisons, 1000.0);
        assert_eq!(result.claimed.len(), 2);
        assert_eq!(result.remainder.len(), 1);
        assert_eq!(
            result.interpretations,
            vec![Interpretation::uncertain(Finding::Dust, 2)]
        );
    }

    #[test]
    fn test_dust_requires_received_missing_with_amount() {
        let sent = Comparison::new("Missing Operation").with_actual(Snapshot {
            amount: Some("1".to_string()),
            operation_type: Some("Sent".to_string()),
            ..Default::default()
        });
        let no_amount = Comparison::new("Missing Operation").with_actual(Snapshot {
            operation_type: Some("Received (non-sibling to change)".to_string()),
            ..Default::default()
        });
        let not_missing = received("Match", "1", "2020-01-01");
        let no_actual = Comparison::new("Missing Operation");
        let result = dusts(vec![sent, no_amount, not_missing, no_actual], 1000.0);
        assert!(result.claimed.is_empty());
        assert!(result.interpretations.is_empty());
        assert_eq!(result.remainder.len(), 4);
    }

    #[test]
    fn test_dust_matches_received_prefix() {
        let comparison = Comparison::new("Missing Operation").with_actual(Snapshot {
            amount: Some("3".to_string()),
            operation_type: Some("Received (non-sibling to change)".to_string()),
            ..Default::default()
        });
        assert_eq!(dusts(vec![comparison], 1000.0).claimed.len(), 1);
    }

    #[test]
    fn test_pagination_clusters() {
        let result = pagination_issue(store(&["Match", "Missing", "Missing", "Match", "Missing"]));
        assert_eq!(result.claimed.len(), 2);
        assert_eq!(statuses(&result.remainder), vec!["Match", "Match", "Missing"]);
        assert_eq!(
            result.interpretations,
            vec![Interpretation::uncertain(Finding::PaginationIssue, 2)]
        );

        let rest = nonspecific_missing(result.remainder);
        assert_eq!(
            rest.interpretations,
            vec![Interpretation::certain(Finding::NonspecificMissingOperation, 1)]
        );
    }

    #[test]
    fn test_pagination_long_run_counted_once() {
        let result = pagination_issue(store(&["Missing", "Missing", "Missing", "Match", "Missing", "Missing"]));
        assert_eq!(result.claimed.len(), 5);
        assert_eq!(statuses(&result.remainder), vec!["Match"]);
    }

    #[test]
    fn test_pagination_no_cluster() {
        let result = pagination_issue(store(&["Missing", "Match", "Missing"]));
        assert!(result.interpretations.is_empty());
        assert_eq!(result.remainder.len(), 3);
    }

    #[test]
    fn test_nonspecific_missing_catches_all_missing() {
        let result = nonspecific_missing(store(&["Missing Operation", "Match", "Missing (whatever)"]));
        assert_eq!(result.claimed.len(), 2);
        assert_eq!(statuses(&result.remainder), vec!["Match"]);
    }
}
