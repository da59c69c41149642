//! Shared setup for the sigma protocol walkthroughs
//!
//! ```bash
//! cargo run -p sigma-demos --example pedersen_commitment
//! cargo run -p sigma-demos --example or_proof
//! cargo run -p sigma-demos --example elgamal_validity
//! ```

use anyhow::Result;
use sigma_algebra::{CyclicGroup, Element, Set, Value};

/// 127-bit safe prime `p = 2q + 1`
pub const SAFE_PRIME: u128 = 170141183460469231731687303715884103007;

/// Order-`q` subgroup of `Z_p^*` for the 127-bit safe prime
pub fn demo_group() -> Result<CyclicGroup> {
    Ok(Set::gstarmod_safe_prime(SAFE_PRIME)?.to_cyclic_group()?)
}

/// Prover identity bound into non-interactive challenges
pub fn prover_id(name: &str) -> Result<Element> {
    Ok(Set::byte_arrays(0, 64)?.element_of(Value::Bytes(name.as_bytes().to_vec()))?)
}

/// Hex of the byte-tree encoding, shortened for display
pub fn short_hex(element: &Element) -> Result<String> {
    let encoded = hex::encode(element.to_bytes()?);
    if encoded.len() <= 32 {
        return Ok(encoded);
    }
    Ok(format!(
        "{}..{} ({} bytes)",
        &encoded[..16],
        &encoded[encoded.len() - 16..],
        encoded.len() / 2
    ))
}
