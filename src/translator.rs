use rand::seq::SliceRandom;

use crate::fmt::{capitalize, count};
use crate::models::{Finding, Interpretation, MismatchKind};

pub const TRANSITION_WORDS: &[&str] = &["Besides", "Furthermore", "Moreover", "In addition", "Also"];

pub const UNCERTAINTY_WORDS: &[&str] = &["it is probable that", "it seems that"];

/// Decides the order in which connective and hedge phrases are drawn.
/// Called once per word list for each rendered paragraph.
pub trait WordPicker {
    fn arrange(&mut self, words: &[&'static str]) -> Vec<&'static str>;
}

/// Random order on every render. Not reproducible.
pub struct ShuffledWords;

impl WordPicker for ShuffledWords {
    fn arrange(&mut self, words: &[&'static str]) -> Vec<&'static str> {
        let mut words = words.to_vec();
        words.shuffle(&mut rand::thread_rng());
        words
    }
}

/// Keeps the lists in their declared order.
pub struct InOrder;

impl WordPicker for InOrder {
    fn arrange(&mut self, words: &[&'static str]) -> Vec<&'static str> {
        words.to_vec()
    }
}

fn sentence(interpretation: &Interpretation) -> String {
    let n = interpretation.interpreted_items_count.unwrap_or(1);
    let plural = n > 1;
    let n = count(n);
    let there = if plural { "there are" } else { "there is" };
    let s = if plural { "s" } else { "" };
    let has = if plural { "s have" } else { " has" };

    match &interpretation.finding {
        Finding::PerfectMatching => {
            "all the imported operations match the actual ones".to_string()
        }
        Finding::SkippedComparisons => format!(
            "{n} comparison{s} {} skipped as {} beyond the block height limit of the scan",
            if plural { "were" } else { "was" },
            if plural { "they are" } else { "it is" },
        ),
        Finding::Dust => format!("{there} {n} dust operation{s}"),
        Finding::PaginationIssue => {
            format!("{there} {n} operation{s} missing because of a pagination issue")
        }
        Finding::NonspecificMissingOperation => format!(
            "{n} nonspecific operation{} missing",
            if plural { "s are" } else { " is" }
        ),
        Finding::DuplicatedOperation => format!(
            "{n} operation{} duplicated",
            if plural { "s are" } else { " is" }
        ),
        Finding::NonduplicatedExtraOperation => {
            if plural {
                format!(
                    "{there} {n} operations which are extra operations \
                     but not duplications of existing operations"
                )
            } else {
                format!(
                    "{there} {n} operation which is an extra operation \
                     but not a duplication of an existing operation"
                )
            }
        }
        Finding::Mismatch(MismatchKind::Addresses) => {
            format!("{n} operation{has} an erroneous derived address")
        }
        Finding::Mismatch(MismatchKind::Amounts) => {
            format!("{n} operation{has} an erroneous amount")
        }
        Finding::Mismatch(MismatchKind::TokenAmounts) => {
            format!("{n} token-related operation{has} an erroneous amount")
        }
        Finding::Mismatch(MismatchKind::TokenTickers) => {
            format!("{n} token-related operation{has} an erroneous ticker")
        }
        Finding::Unknown(_) => format!(
            "{there} {n} comparison{} {}",
            if plural { "s that are" } else { " that is" },
            interpretation.finding.label()
        ),
        Finding::OutOfSync { .. } | Finding::Other(_) => interpretation.finding.label(),
    }
}

/// Render interpretations as a single paragraph, in emission order.
///
/// Sentences after the first open with a connective; uncertain ones are
/// hedged. Both phrases are drawn by index from lists arranged once per call.
pub fn translate<P: WordPicker>(interpretations: &[Interpretation], picker: &mut P) -> String {
    let transition_words = picker.arrange(TRANSITION_WORDS);
    let uncertainty_words = picker.arrange(UNCERTAINTY_WORDS);
    let mut translation = String::new();

    for (i, interpretation) in interpretations.iter().enumerate() {
        if i > 0 {
            translation.push_str(transition_words[i % transition_words.len()]);
            translation.push_str(", ");
        }
        if !interpretation.certainty {
            translation.push_str(uncertainty_words[i % uncertainty_words.len()]);
            translation.push(' ');
        }
        translation.push_str(&sentence(interpretation));
        translation.push_str(". ");
    }

    capitalize(&translation)
}
