//! Miller-Rabin witness sets and the policy for choosing between them.
//!
//! A witness set is only a *deterministic* primality test below a proven
//! limit. These types keep each set paired with its limit so callers can
//! tell whether a verdict is exact.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An ordered, fixed sequence of Miller-Rabin bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WitnessSet {
    bases: &'static [u64],
    /// Exclusive bound below which every verdict is exact. `None` covers all of `u64`.
    limit: Option<u64>,
}

impl WitnessSet {
    /// The first seven primes: exact for every input below 341,550,071,728,321.
    pub const STANDARD: WitnessSet = WitnessSet {
        bases: &[2, 3, 5, 7, 11, 13, 17],
        limit: Some(341_550_071_728_321),
    };

    /// The first twelve primes: exact below 3.3 * 10^24, so for all of `u64`.
    pub const EXTENDED: WitnessSet = WitnessSet {
        bases: &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37],
        limit: None,
    };

    #[must_use]
    pub const fn bases(self) -> &'static [u64] {
        self.bases
    }

    /// Whether a verdict for `num` from this set is proven exact.
    #[must_use]
    pub const fn is_deterministic_for(self, num: u64) -> bool {
        match self.limit {
            Some(limit) => num < limit,
            None => true,
        }
    }
}

/// How the primality oracle picks its witness set for each candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WitnessPolicy {
    /// Always the seven-base set, with no range check.
    Standard,
    /// Always the twelve-base set.
    Extended,
    /// Seven bases inside their proven range, twelve beyond it.
    #[default]
    Auto,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown witness policy `{0}` (expected standard, extended or auto)")]
pub struct UnknownPolicyError(pub String);

impl WitnessPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            WitnessPolicy::Standard => "standard",
            WitnessPolicy::Extended => "extended",
            WitnessPolicy::Auto => "auto",
        }
    }

    /// Parse a policy name, ignoring case and surrounding whitespace.
    ///
    /// Accepts exactly the names serde uses, so a value that works on the
    /// command line also works in the config file.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(WitnessPolicy::Standard),
            "extended" => Some(WitnessPolicy::Extended),
            "auto" => Some(WitnessPolicy::Auto),
            _ => None,
        }
    }

    /// The witness set used for `num` under this policy.
    #[must_use]
    pub const fn witnesses_for(self, num: u64) -> WitnessSet {
        match self {
            WitnessPolicy::Standard => WitnessSet::STANDARD,
            WitnessPolicy::Extended => WitnessSet::EXTENDED,
            WitnessPolicy::Auto => {
                if WitnessSet::STANDARD.is_deterministic_for(num) {
                    WitnessSet::STANDARD
                } else {
                    WitnessSet::EXTENDED
                }
            }
        }
    }
}

impl FromStr for WitnessPolicy {
    type Err = UnknownPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownPolicyError(s.to_string()))
    }
}

impl fmt::Display for WitnessPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
