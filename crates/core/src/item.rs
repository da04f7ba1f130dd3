//! Item identifiers.
//!
//! Items are opaque to the grid: it only needs a stable, comparable name such
//! as `diamond` or `oak_planks`. Resolving a name to a texture or sound is the
//! presentation layer's job.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::GridError;

/// Maximum accepted identifier length.
pub const MAX_ITEM_ID_LEN: usize = 64;

/// Validated item identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Parse and validate an identifier.
    pub fn parse(id: &str) -> Result<Self, GridError> {
        if id.is_empty() {
            return Err(invalid(id, "identifier cannot be empty"));
        }
        if id.len() > MAX_ITEM_ID_LEN {
            return Err(invalid(id, "identifier too long (max 64)"));
        }
        if !id
            .chars()
            .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.'))
        {
            return Err(invalid(
                id,
                "identifier has invalid characters (allowed: a-z0-9_.-)",
            ));
        }
        Ok(Self(id.to_string()))
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(input: &str, reason: &'static str) -> GridError {
    GridError::InvalidItemId {
        id: input.to_string(),
        reason,
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemId {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ItemId {
    type Error = GridError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_ids() {
        let id = ItemId::parse("diamond").unwrap();
        assert_eq!(id.as_str(), "diamond");
        assert_eq!(ItemId::parse("oak_planks").unwrap().to_string(), "oak_planks");
    }

    #[test]
    fn rejects_empty() {
        assert!(ItemId::parse("").is_err());
        assert!(ItemId::parse("   ").is_err());
    }

    #[test]
    fn rejects_invalid_chars() {
        assert!(ItemId::parse("Diamond").is_err());
        assert!(ItemId::parse("golden apple").is_err());
        assert!(ItemId::parse("sword?").is_err());
        assert!(ItemId::parse(&"a".repeat(MAX_ITEM_ID_LEN + 1)).is_err());
    }

    #[test]
    fn deserialization_validates() {
        let ok: ItemId = serde_json::from_str("\"apple\"").unwrap();
        assert_eq!(ok.as_str(), "apple");
        assert!(serde_json::from_str::<ItemId>("\"Apple\"").is_err());
    }

    #[test]
    fn surrounding_whitespace_is_rejected_on_every_path() {
        assert!(matches!(
            ItemId::parse(" diamond"),
            Err(GridError::InvalidItemId { .. })
        ));
        assert!("diamond ".parse::<ItemId>().is_err());
        assert!(serde_json::from_str::<ItemId>("\" diamond\"").is_err());
    }
}
