use std::fmt;

/// Machine-readable error codes for scripts and agents driving `tk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseError,
    InvalidDocument,
    InvalidIndex,
    InvalidItem,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigParseError => "E1002",
            Self::InvalidDocument => "E1003",
            Self::InvalidIndex => "E2001",
            Self::InvalidItem => "E2002",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigParseError => "Config file parse error",
            Self::InvalidDocument => "List document is malformed",
            Self::InvalidIndex => "Invalid item index",
            Self::InvalidItem => "Element is not a todo item",
        }
    }

    /// Optional remediation hint that can be surfaced to operators and agents.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigParseError => Some("Fix syntax in .ticks/config.toml and retry."),
            Self::InvalidDocument => {
                Some("Provide a JSON object with a \"title\" string and an \"items\" array.")
            }
            Self::InvalidIndex => Some("Use a whole number from 0 up to the list size minus one."),
            Self::InvalidItem => {
                Some("Each element of \"items\" must be an object with a \"title\" string.")
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised by [`ItemCollection`](crate::model::collection::ItemCollection)
/// and by list documents crossing the JSON boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// Index is not a whole number in `0..len`.
    #[error("invalid index: {index}")]
    InvalidIndex { index: String, len: usize },

    /// An element of a document's `items` array is not an item.
    #[error("can only add items: element {position}: {reason}")]
    InvalidItem { position: usize, reason: String },

    /// The document itself is not a list object.
    #[error("invalid list document: {0}")]
    InvalidDocument(String),
}

impl CollectionError {
    /// Build an index error for an index that was already a number.
    #[must_use]
    pub fn invalid_index(index: impl fmt::Display, len: usize) -> Self {
        Self::InvalidIndex {
            index: index.to_string(),
            len,
        }
    }

    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidIndex { .. } => ErrorCode::InvalidIndex,
            Self::InvalidItem { .. } => ErrorCode::InvalidItem,
            Self::InvalidDocument(_) => ErrorCode::InvalidDocument,
        }
    }

    /// Remediation text, specialised with the list size when known.
    #[must_use]
    pub fn suggestion(&self) -> String {
        match self {
            Self::InvalidIndex { len: 0, .. } => "The list is empty; add an item first.".to_string(),
            Self::InvalidIndex { len, .. } => {
                format!("Use an index between 0 and {}.", len - 1)
            }
            other => other
                .error_code()
                .hint()
                .unwrap_or_default()
                .to_string(),
        }
    }
}
