//! Tokens the configuration layer reads as boolean "true".

/// Strings accepted as "true" when no custom set is configured.
pub const DEFAULT_TRUTHY: &[&str] = &["yes", "true", "1", "on"];

/// An injected set of truthy strings, matched exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthyTokens {
    tokens: Vec<String>,
}

impl TruthyTokens {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.tokens.iter().any(|t| t == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl Default for TruthyTokens {
    fn default() -> Self {
        Self::new(DEFAULT_TRUTHY.iter().copied())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
