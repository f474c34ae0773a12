use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Playable hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hand {
    Rock,
    Paper,
    Scissors,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Paper, Hand::Scissors];

    /// The hand this one wins against
    pub fn beats(&self) -> Hand {
        match self {
            Hand::Rock => Hand::Scissors,
            Hand::Paper => Hand::Rock,
            Hand::Scissors => Hand::Paper,
        }
    }

    /// Ordinal encoding: rock=0, paper=1, scissors=2
    pub fn ordinal(&self) -> u8 {
        match self {
            Hand::Rock => 0,
            Hand::Paper => 1,
            Hand::Scissors => 2,
        }
    }

    /// Wire name used by the JSON API
    pub fn wire_name(&self) -> &'static str {
        match self {
            Hand::Rock => "rock",
            Hand::Paper => "paper",
            Hand::Scissors => "scissors",
        }
    }

    /// Display label for the host UI
    pub fn label(&self) -> &'static str {
        match self {
            Hand::Rock => "グー",
            Hand::Paper => "パー",
            Hand::Scissors => "チョキ",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Hand::Rock => "✊",
            Hand::Paper => "✋",
            Hand::Scissors => "✌️",
        }
    }

    /// Parse a wire name, rejecting anything outside the three-hand set
    pub fn parse(value: &str) -> Result<Hand, CoreError> {
        match value {
            "rock" => Ok(Hand::Rock),
            "paper" => Ok(Hand::Paper),
            "scissors" => Ok(Hand::Scissors),
            other => Err(CoreError::InvalidParameter(format!("unknown hand: {}", other))),
        }
    }

    /// Uniform random hand
    pub fn random() -> Hand {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Uniform random hand from a caller-supplied generator
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Hand {
        *Hand::ALL.choose(rng).expect("Hand::ALL is non-empty")
    }
}
