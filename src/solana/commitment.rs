use std::fmt;

use serde::{Deserialize, Serialize};

pub const PROCESSED: &str = "processed";
pub const CONFIRMED: &str = "confirmed";
pub const FINALIZED: &str = "finalized";

/// Commitment level forwarded to the node on read operations.
///
/// Held as the raw string rather than a closed enum: unknown values are
/// forwarded verbatim and the node rejects unsupported levels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Commitment(String);

impl Commitment {
    pub fn new(level: impl Into<String>) -> Self {
        Self(level.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Commitment {
    fn default() -> Self {
        Self(CONFIRMED.to_string())
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_confirmed() {
        assert_eq!(Commitment::default().as_str(), CONFIRMED);
    }

    #[test]
    fn serializes_as_bare_string() {
        let c = Commitment::new(FINALIZED);
        assert_eq!(serde_json::to_value(&c).unwrap(), serde_json::json!("finalized"));
    }

    #[test]
    fn unknown_levels_pass_through() {
        let c: Commitment = serde_json::from_str("\"superfinal\"").unwrap();
        assert_eq!(c.as_str(), "superfinal");
    }
}
