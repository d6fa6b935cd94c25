//! Static registry of reasoning algorithms.

use super::{ChainOfThought, ReasoningStrategy};
use crate::error::ReasonError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Known reasoning algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    ChainOfThought,
}

/// Listing entry for a registered algorithm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub name: String,
    pub display_name: String,
}

impl Algorithm {
    /// Every registered algorithm
    pub const ALL: &'static [Algorithm] = &[Algorithm::ChainOfThought];

    /// Look up an algorithm by its registered name.
    ///
    /// Names are matched exactly. An unknown name is an error carrying the
    /// name; there is no fallback algorithm.
    pub fn from_name(name: &str) -> Result<Self, ReasonError> {
        Self::ALL
            .iter()
            .copied()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| ReasonError::unsupported_algorithm(name))
    }

    /// Registered name used on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::ChainOfThought => "chain_of_thought",
        }
    }

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::ChainOfThought => "Chain of Thought",
        }
    }

    /// Construct the strategy implementing this algorithm
    pub fn strategy(&self) -> Box<dyn ReasoningStrategy> {
        match self {
            Algorithm::ChainOfThought => Box::new(ChainOfThought::new()),
        }
    }

    pub fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            name: self.name().to_string(),
            display_name: self.display_name().to_string(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ReasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Resolve a strategy for the given algorithm name.
pub fn resolve_strategy(name: &str) -> Result<Box<dyn ReasoningStrategy>, ReasonError> {
    Ok(Algorithm::from_name(name)?.strategy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_chain_of_thought() {
        let strategy = resolve_strategy("chain_of_thought").unwrap();
        assert_eq!(strategy.name(), "chain_of_thought");
    }

    #[test]
    fn test_unknown_algorithm_is_named() {
        for name in ["tree_of_thought", "reasoning_via_planning", "Chain_Of_Thought", ""] {
            match resolve_strategy(name) {
                Err(ReasonError::UnsupportedAlgorithm(rejected)) => assert_eq!(rejected, name),
                other => panic!("expected UnsupportedAlgorithm for {name:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_names_round_trip() {
        for algorithm in Algorithm::ALL {
            let parsed: Algorithm = algorithm.name().parse().unwrap();
            assert_eq!(parsed, *algorithm);
            assert_eq!(algorithm.strategy().name(), algorithm.name());
        }
    }

    #[test]
    fn test_info_listing() {
        let info = Algorithm::ChainOfThought.info();
        assert_eq!(info.name, "chain_of_thought");
        assert_eq!(info.display_name, "Chain of Thought");
        assert_eq!(Algorithm::ChainOfThought.to_string(), "chain_of_thought");
    }
}
