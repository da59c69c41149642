//! Merlin transcript support for Fiat-Shamir

use crate::errors::Result;
use merlin::Transcript;
use sigma_algebra::{BigUint, Element};

/// Extra challenge bytes beyond the modulus length, keeping the reduction
/// bias negligible
const CHALLENGE_MARGIN_BYTES: usize = 16;

/// Extension trait for Transcript to absorb elements and squeeze challenges
pub trait TranscriptProtocol {
    /// Append the byte-tree encoding of an element
    fn append_element(&mut self, label: &'static [u8], element: &Element) -> Result<()>;

    /// Challenge integer uniform enough in `[0, modulus)`
    fn challenge_integer(&mut self, label: &'static [u8], modulus: &BigUint) -> BigUint;
}

impl TranscriptProtocol for Transcript {
    fn append_element(&mut self, label: &'static [u8], element: &Element) -> Result<()> {
        self.append_message(label, &element.to_bytes()?);
        Ok(())
    }

    fn challenge_integer(&mut self, label: &'static [u8], modulus: &BigUint) -> BigUint {
        let length = (modulus.bits() as usize + 7) / 8 + CHALLENGE_MARGIN_BYTES;
        let mut buf = vec![0u8; length];
        self.challenge_bytes(label, &mut buf);
        BigUint::from_bytes_be(&buf) % modulus
    }
}

/// Create a new transcript with domain separation
pub fn sigma_transcript(domain_label: &'static [u8]) -> Transcript {
    let mut transcript = Transcript::new(b"SigmaProofs");
    transcript.append_message(b"domain", domain_label);
    transcript
}
