use std::{fmt::Write as _, str::FromStr};

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seed for a deterministic simulation run.
///
/// A 128-bit value used to initialize the run's random number generator.
/// Two runs constructed from the same seed and configuration make identical
/// random choices, enabling:
///
/// - Reproducible training runs for debugging
/// - Run records that can be replayed exactly
/// - Deterministic tests
///
/// Serializes as a 32-character hex string, and parses back from one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimSeed([u8; 16]);

/// Error parsing a [`SimSeed`] from a hex string.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("invalid seed: expected 32 hex characters")]
pub struct ParseSeedError;

impl SimSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Raw bytes, in the layout expected by `SeedableRng::from_seed`.
    #[must_use]
    pub const fn bytes(self) -> [u8; 16] {
        self.0
    }
}

impl FromStr for SimSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError);
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParseSeedError)?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for SimSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let num = u128::from_be_bytes(self.0);
        let mut hex_str = String::with_capacity(2 * self.0.len());
        write!(&mut hex_str, "{num:032x}").unwrap();
        serializer.serialize_str(&hex_str)
    }
}

impl<'de> Deserialize<'de> for SimSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows drawing a random `SimSeed` with `rng.random()`.
impl Distribution<SimSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SimSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        SimSeed(seed)
    }
}
