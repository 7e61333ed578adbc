use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Partial view of a transaction, either as imported or as observed on-chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub txid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Snapshot {
    /// Numeric amount, if present and parseable.
    pub fn amount_value(&self) -> Option<f64> {
        self.amount.as_deref().and_then(|a| a.trim().parse().ok())
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    #[serde(default)]
    pub imported: Snapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<Snapshot>,
    pub status: Status,
}

#[cfg(test)]
impl Comparison {
    pub fn new(status: &str) -> Self {
        Self {
            imported: Snapshot::default(),
            actual: None,
            status: Status::from(status),
        }
    }

    pub fn with_imported(mut self, imported: Snapshot) -> Self {
        self.imported = imported;
        self
    }

    pub fn with_actual(mut self, actual: Snapshot) -> Self {
        self.actual = Some(actual);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MismatchKind {
    Addresses,
    Amounts,
    TokenAmounts,
    TokenTickers,
}

impl MismatchKind {
    pub const ALL: [MismatchKind; 4] = [
        Self::Addresses,
        Self::Amounts,
        Self::TokenAmounts,
        Self::TokenTickers,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Addresses => "Mismatch: addresses",
            Self::Amounts => "Mismatch: amounts",
            Self::TokenAmounts => "Mismatch: token amounts",
            Self::TokenTickers => "Mismatch: token tickers",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.label() == label)
    }
}

/// Upstream comparison status, parsed into the families the interpreter knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Match(String),
    Missing(String),
    Mismatch(MismatchKind),
    ExtraOperation,
    Skipped,
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Match(raw) | Self::Missing(raw) | Self::Other(raw) => raw,
            Self::Mismatch(kind) => kind.label(),
            Self::ExtraOperation => "Extra Operation",
            Self::Skipped => "Skipped",
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }
}

impl From<&str> for Status {
    fn from(raw: &str) -> Self {
        if raw == "Extra Operation" {
            Self::ExtraOperation
        } else if raw == "Skipped" {
            Self::Skipped
        } else if let Some(kind) = MismatchKind::from_label(raw) {
            Self::Mismatch(kind)
        } else if raw.starts_with("Match") {
            Self::Match(raw.to_string())
        } else if raw.starts_with("Missing") {
            Self::Missing(raw.to_string())
        } else {
            Self::Other(raw.to_string())
        }
    }
}

impl From<String> for Status {
    fn from(raw: String) -> Self {
        Status::from(raw.as_str())
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which end of the report an out-of-sync run is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Oldest,
    Latest,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    PerfectMatching,
    SkippedComparisons,
    OutOfSync { edge: Edge, date: String },
    Dust,
    PaginationIssue,
    NonspecificMissingOperation,
    DuplicatedOperation,
    NonduplicatedExtraOperation,
    Mismatch(MismatchKind),
    Unknown(Vec<String>),
    /// Free-form label, rendered verbatim.
    #[allow(dead_code)]
    Other(String),
}

impl Finding {
    pub fn label(&self) -> String {
        match self {
            Self::PerfectMatching => "perfect matching".to_string(),
            Self::SkippedComparisons => "skipped comparisons".to_string(),
            Self::OutOfSync { edge: Edge::Oldest, date } => format!("out of sync up to {date}"),
            Self::OutOfSync { edge: Edge::Latest, date } => format!("out of sync since {date}"),
            Self::Dust => "dust".to_string(),
            Self::PaginationIssue => "pagination issue".to_string(),
            Self::NonspecificMissingOperation => "nonspecific missing operation".to_string(),
            Self::DuplicatedOperation => "duplicated operation".to_string(),
            Self::NonduplicatedExtraOperation => "nonduplicated extra operation".to_string(),
            Self::Mismatch(kind) => kind.label().to_string(),
            Self::Unknown(statuses) => format!("unknown ({})", statuses.join(", ")),
            Self::Other(label) => label.clone(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl Serialize for Finding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interpretation {
    #[serde(rename = "interpretation")]
    pub finding: Finding,
    pub certainty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpreted_items_count: Option<usize>,
}

impl Interpretation {
    pub fn certain(finding: Finding, count: usize) -> Self {
        Self {
            finding,
            certainty: true,
            interpreted_items_count: Some(count),
        }
    }

    pub fn uncertain(finding: Finding, count: usize) -> Self {
        Self {
            finding,
            certainty: false,
            interpreted_items_count: Some(count),
        }
    }

    pub fn perfect_matching() -> Self {
        Self {
            finding: Finding::PerfectMatching,
            certainty: true,
            interpreted_items_count: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub comparisons: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub skipped: usize,
}

impl Statistics {
    pub fn from_comparisons(comparisons: &[Comparison]) -> Self {
        let total = comparisons.len();
        let matches = comparisons.iter().filter(|c| c.status.is_match()).count();
        let skipped = comparisons
            .iter()
            .filter(|c| c.status == Status::Skipped)
            .count();
        Self {
            comparisons: total,
            matches,
            mismatches: total - matches - skipped,
            skipped,
        }
    }

    pub fn is_perfect_matching(&self) -> bool {
        self.matches == self.comparisons - self.skipped
    }
}
