use serde::Serialize;

/// Topology flag from the fourth table column.
///
/// The composite key always carries the flag exactly as written in the table;
/// this classification is only used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    /// `c` or `circular`
    Circular,
    /// `l` or `linear`
    Linear,
    /// Anything else; accepted as-is
    Other,
}

impl Topology {
    /// Classify a topology flag, ignoring case
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "c" | "circular" => Self::Circular,
            "l" | "linear" => Self::Linear,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Circular => write!(f, "circular"),
            Self::Linear => write!(f, "linear"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// How the rewriter decides that a header was not renamed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum UnmatchedDetection {
    /// A header is unmatched when no table key was found in its name
    #[default]
    Flag,
    /// A header is unmatched when its final name equals its original name.
    /// Also warns when a composite value happens to equal the original name.
    NameEquality,
}
