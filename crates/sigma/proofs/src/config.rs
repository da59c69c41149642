//! Proof engine configuration

use serde::{Deserialize, Serialize};
use sigma_algebra::HashMethod;
use std::sync::OnceLock;

/// How non-interactive challenges are derived
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FiatShamir {
    /// Hash of the byte-tree encoding, reduced into the challenge space
    Hash(HashMethod),
    /// Challenge bytes squeezed from a merlin transcript
    Transcript,
}

impl Default for FiatShamir {
    fn default() -> Self {
        FiatShamir::Hash(HashMethod::default())
    }
}

/// Configuration shared by the non-interactive constructors
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigmaConfig {
    /// Challenge derivation backend
    pub fiat_shamir: FiatShamir,
}

impl SigmaConfig {
    pub fn with_hash(method: HashMethod) -> Self {
        Self {
            fiat_shamir: FiatShamir::Hash(method),
        }
    }

    pub fn with_transcript() -> Self {
        Self {
            fiat_shamir: FiatShamir::Transcript,
        }
    }

    /// Process-wide default, built on first use and never mutated
    pub fn global() -> &'static SigmaConfig {
        static GLOBAL: OnceLock<SigmaConfig> = OnceLock::new();
        GLOBAL.get_or_init(SigmaConfig::default)
    }
}
