mod extra;
mod mismatches;
mod missing;
mod unknown;

use log::{debug, info};

use crate::models::{Comparison, Edge, Finding, Interpretation, MismatchKind, Statistics, Status};

pub const DUST_THRESHOLD: f64 = 1000.0;

/// Result of one classifier pass over the remaining comparisons.
#[derive(Debug, Default)]
pub struct Classified {
    pub claimed: Vec<Comparison>,
    pub interpretations: Vec<Interpretation>,
    pub remainder: Vec<Comparison>,
}

impl Classified {
    fn unchanged(remainder: Vec<Comparison>) -> Self {
        Self {
            claimed: Vec::new(),
            interpretations: Vec::new(),
            remainder,
        }
    }
}

/// Split `remaining` on `claims`, keeping the input order on both sides.
/// `interpret` is only called when at least one comparison was claimed.
fn claim_where<P, I>(remaining: Vec<Comparison>, claims: P, interpret: I) -> Classified
where
    P: Fn(&Comparison) -> bool,
    I: FnOnce(&[Comparison]) -> Interpretation,
{
    let (claimed, remainder): (Vec<_>, Vec<_>) = remaining.into_iter().partition(|c| claims(c));
    let interpretations = if claimed.is_empty() {
        Vec::new()
    } else {
        vec![interpret(&claimed)]
    };
    Classified {
        claimed,
        interpretations,
        remainder,
    }
}

fn skipped(remaining: Vec<Comparison>) -> Classified {
    // skipped operations are beyond the block height ceiling of the scan
    claim_where(
        remaining,
        |c| c.status == Status::Skipped,
        |claimed| Interpretation::certain(Finding::SkippedComparisons, claimed.len()),
    )
}

fn perfect_matching(remaining: Vec<Comparison>, stats: &Statistics) -> Classified {
    let mut classified = Classified::unchanged(remaining);
    if stats.is_perfect_matching() {
        classified.interpretations.push(Interpretation::perfect_matching());
    }
    classified
}

// ---------------------------------------------------------------------------
// Classifier kinds: enum dispatch, run in the order of `pipeline`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classifier {
    Skipped,
    PerfectMatching,
    OutOfSync(Edge),
    Dust { threshold: f64 },
    PaginationIssue,
    NonspecificMissing,
    DuplicatedExtra,
    UniqueExtra,
    Mismatch(MismatchKind),
    Unknown,
}

impl Classifier {
    /// The fixed classification order. Each pass drains comparisons that
    /// later, more general passes would otherwise misclassify.
    pub fn pipeline(dust_threshold: f64) -> Vec<Classifier> {
        let mut classifiers = vec![
            Self::Skipped,
            Self::PerfectMatching,
            Self::OutOfSync(Edge::Oldest),
            Self::OutOfSync(Edge::Latest),
            Self::Dust {
                threshold: dust_threshold,
            },
            Self::PaginationIssue,
            Self::NonspecificMissing,
            Self::DuplicatedExtra,
            Self::UniqueExtra,
        ];
        classifiers.extend(MismatchKind::ALL.into_iter().map(Self::Mismatch));
        classifiers.push(Self::Unknown);
        classifiers
    }

    pub fn name(&self) -> String {
        match self {
            Self::Skipped => "skipped comparisons".to_string(),
            Self::PerfectMatching => "perfect matching".to_string(),
            Self::OutOfSync(Edge::Oldest) => "out of sync (oldests)".to_string(),
            Self::OutOfSync(Edge::Latest) => "out of sync (latests)".to_string(),
            Self::Dust { .. } => "dusts".to_string(),
            Self::PaginationIssue => "pagination issue".to_string(),
            Self::NonspecificMissing => "remaining missing operations".to_string(),
            Self::DuplicatedExtra => "duplicated operations".to_string(),
            Self::UniqueExtra => "unique extra operations".to_string(),
            Self::Mismatch(kind) => kind.label().to_lowercase(),
            Self::Unknown => "unknown comparisons".to_string(),
        }
    }

    pub fn apply(&self, remaining: Vec<Comparison>, stats: &Statistics) -> Classified {
        match self {
            Self::Skipped => skipped(remaining),
            Self::PerfectMatching => perfect_matching(remaining, stats),
            Self::OutOfSync(edge) => missing::out_of_sync(remaining, *edge),
            Self::Dust { threshold } => missing::dusts(remaining, *threshold),
            Self::PaginationIssue => missing::pagination_issue(remaining),
            Self::NonspecificMissing => missing::nonspecific_missing(remaining),
            Self::DuplicatedExtra => extra::duplicated_operations(remaining),
            Self::UniqueExtra => extra::unique_extra_operations(remaining),
            Self::Mismatch(kind) => mismatches::mismatches(remaining, *kind),
            Self::Unknown => unknown::unknown_comparisons(remaining),
        }
    }
}

#[derive(Debug, Default)]
pub struct Outcome {
    pub interpretations: Vec<Interpretation>,
    /// Matching comparisons absorbed by the terminal pass without being interpreted.
    pub matched: usize,
    pub remainder: Vec<Comparison>,
}

impl Outcome {
    /// Number of comparisons accounted for by the emitted interpretations.
    pub fn interpreted(&self) -> usize {
        self.interpretations
            .iter()
            .filter_map(|i| i.interpreted_items_count)
            .sum()
    }
}

/// Thread `comparisons` through `classifiers` in order, collecting their interpretations.
pub fn run(classifiers: &[Classifier], comparisons: Vec<Comparison>, stats: &Statistics) -> Outcome {
    let mut outcome = Outcome::default();
    let mut remaining = comparisons;

    for classifier in classifiers {
        info!("Processing {}", classifier.name());
        let classified = classifier.apply(remaining, stats);
        debug!(
            "{}: claimed {}, {} left",
            classifier.name(),
            classified.claimed.len(),
            classified.remainder.len()
        );
        outcome.matched += classified
            .claimed
            .iter()
            .filter(|c| c.status.is_match())
            .count();
        outcome.interpretations.extend(classified.interpretations);
        remaining = classified.remainder;
    }

    outcome.remainder = remaining;
    outcome
}

pub fn interpret(comparisons: Vec<Comparison>, stats: &Statistics, dust_threshold: f64) -> Outcome {
    run(&Classifier::pipeline(dust_threshold), comparisons, stats)
}
