use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod normalize;
pub mod recommend;
pub mod shared;

pub use recommend::{RecommendationEngine, DEFAULT_DECAY_FACTOR};
pub use shared::SharedEngine;

pub type UserId = String;
pub type ProductId = String;

/// Catalog entry. Re-adding the same id overwrites the previous entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
}

/// How a user touched a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    View,
    Purchase,
    Like,
}

/// One user-product interaction. Stored twice, keyed by user and by product,
/// and the two copies are kept identical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub score: f64,
    pub kind: InteractionKind,
    /// Seconds since `UNIX_EPOCH`, set when the interaction was recorded.
    pub timestamp: f64,
}

/// Which index `search_products` consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBy {
    Name,
    Category,
}

#[derive(Debug)]
pub struct ParseError {
    what: &'static str,
    input: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {:?}", self.what, self.input)
    }
}

impl std::error::Error for ParseError {}

impl FromStr for InteractionKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(Self::View),
            "purchase" => Ok(Self::Purchase),
            "like" => Ok(Self::Like),
            _ => Err(ParseError { what: "interaction kind", input: s.to_string() }),
        }
    }
}

impl FromStr for SearchBy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "category" => Ok(Self::Category),
            _ => Err(ParseError { what: "search field", input: s.to_string() }),
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::View => "view",
            Self::Purchase => "purchase",
            Self::Like => "like",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_round_trip_through_strings() {
        assert_eq!("view".parse::<InteractionKind>().unwrap(), InteractionKind::View);
        assert_eq!(InteractionKind::Purchase.to_string(), "purchase");
        assert!("rated".parse::<InteractionKind>().is_err());

        assert_eq!("name".parse::<SearchBy>().unwrap(), SearchBy::Name);
        assert_eq!("category".parse::<SearchBy>().unwrap(), SearchBy::Category);
        assert!("id".parse::<SearchBy>().is_err());
    }
}
