//! Number-theoretic helpers
//!
//! Primality testing, modular inverses and the Szudzik "elegant" pairing
//! used to encode heterogeneous tuples as a single integer.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Small primes used for trial division and as Miller-Rabin witnesses
const SMALL_PRIMES: [u32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

/// Number of Miller-Rabin witnesses tried for large candidates
const MILLER_RABIN_ROUNDS: usize = 20;

/// Miller-Rabin primality test with fixed prime witnesses.
///
/// Deterministic below 3.3e24; beyond that the error probability is
/// bounded by `4^-20` for non-adversarial inputs.
pub fn is_probable_prime(n: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    if n < &two {
        return false;
    }
    for p in SMALL_PRIMES {
        let p = BigUint::from(p);
        if n == &p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
    }

    let n_minus_one: BigUint = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for a in SMALL_PRIMES.iter().take(MILLER_RABIN_ROUNDS) {
        let mut x = BigUint::from(*a).modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// `p` is prime and so is `(p - 1) / 2`
pub fn is_safe_prime(p: &BigUint) -> bool {
    if p < &BigUint::from(5u32) || !is_probable_prime(p) {
        return false;
    }
    let q: BigUint = (p - 1u32) >> 1u32;
    is_probable_prime(&q)
}

/// Non-negative remainder of a signed value
pub fn mod_floor(value: &BigInt, modulus: &BigUint) -> BigUint {
    let modulus = BigInt::from(modulus.clone());
    value
        .mod_floor(&modulus)
        .to_biguint()
        .unwrap_or_default()
}

/// Modular inverse via the extended Euclidean algorithm
pub fn mod_inverse(value: &BigUint, modulus: &BigUint) -> Option<BigUint> {
    if modulus.is_zero() {
        return None;
    }
    if modulus.is_one() {
        return Some(BigUint::zero());
    }
    let m = BigInt::from(modulus.clone());
    let (mut old_r, mut r) = (BigInt::from(value % modulus), m.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }
    if !old_r.is_one() {
        return None;
    }
    old_s.mod_floor(&m).to_biguint()
}

/// Szudzik pairing of two naturals
pub fn elegant_pair(x: &BigUint, y: &BigUint) -> BigUint {
    if x < y {
        y * y + x
    } else {
        x * x + x + y
    }
}

/// Inverse of [`elegant_pair`]
pub fn elegant_unpair(z: &BigUint) -> (BigUint, BigUint) {
    let s = z.sqrt();
    let r = z - &s * &s;
    if r < s {
        (r, s)
    } else {
        let y = &r - &s;
        (s, y)
    }
}

/// Pairs `values` along a balanced binary tree of [`elegant_pair`] calls.
///
/// The empty sequence maps to zero and a single value maps to itself.
pub fn elegant_pair_all(values: &[BigUint]) -> BigUint {
    match values.len() {
        0 => BigUint::zero(),
        1 => values[0].clone(),
        _ => {
            let level: Vec<BigUint> = values
                .chunks(2)
                .map(|chunk| match chunk.len() {
                    2 => elegant_pair(&chunk[0], &chunk[1]),
                    _ => chunk[0].clone(),
                })
                .collect();
            elegant_pair_all(&level)
        }
    }
}

/// Inverse of [`elegant_pair_all`] for a known arity.
///
/// Returns `None` only for arity zero with a non-zero input.
pub fn elegant_unpair_all(z: &BigUint, arity: usize) -> Option<Vec<BigUint>> {
    match arity {
        0 => z.is_zero().then(Vec::new),
        1 => Some(vec![z.clone()]),
        n => {
            let parents = elegant_unpair_all(z, n / 2 + n % 2)?;
            let mut values = Vec::with_capacity(n);
            for (i, parent) in parents.iter().enumerate() {
                if i < n / 2 {
                    let (a, b) = elegant_unpair(parent);
                    values.push(a);
                    values.push(b);
                } else {
                    values.push(parent.clone());
                }
            }
            Some(values)
        }
    }
}
