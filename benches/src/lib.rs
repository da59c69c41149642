//! # Sigma Benchmarks
//!
//! Benchmarks over the order-`q` subgroup of a 127-bit safe prime:
//!
//! - group exponentiation and byte-tree encoding
//! - preimage proof generation and verification for hash and transcript
//!   Fiat-Shamir backends
//! - OR proofs and ElGamal validity proofs as the number of disjuncts grows
//!
//! ```bash
//! cargo bench -p sigma-benches
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sigma_algebra::{CyclicGroup, Element, Set};

pub use sigma_algebra;
pub use sigma_morphisms;
pub use sigma_proofs;
pub use sigma_schemes;

/// 127-bit safe prime `p = 2q + 1`
pub const SAFE_PRIME: u128 = 170141183460469231731687303715884103007;

/// Disjunct counts used by the scaling benchmarks
pub const DISJUNCT_COUNTS: [usize; 4] = [2, 4, 8, 16];

pub fn bench_group() -> CyclicGroup {
    Set::gstarmod_safe_prime(SAFE_PRIME)
        .and_then(|set| set.to_cyclic_group())
        .unwrap_or_else(|e| panic!("benchmark group: {e}"))
}

/// Deterministic generator so runs are comparable
pub fn bench_rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0x5167_4d41)
}

/// `g^0, ..., g^(count-1)`
pub fn encoded_choices(group: &CyclicGroup, count: usize) -> Vec<Element> {
    let g = group
        .default_generator()
        .unwrap_or_else(|e| panic!("benchmark generator: {e}"));
    (0..count)
        .map(|k| {
            g.self_apply(&(k as i64).into())
                .unwrap_or_else(|e| panic!("encoded choice {k}: {e}"))
        })
        .collect()
}
