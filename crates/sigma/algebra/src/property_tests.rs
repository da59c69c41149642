//! Property-based tests for group axioms, encodings and tuple projections

use crate::{BigInt, BigUint, Element, Set};
use proptest::collection::vec;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn test_groups() -> Vec<Set> {
    let z7 = Set::zmod(7u32).unwrap();
    let g23 = Set::gstarmod_safe_prime(23u32).unwrap();
    vec![
        Set::integers(),
        Set::zmod(12u32).unwrap(),
        Set::zstarmod(15u32).unwrap(),
        Set::gstarmod_safe_prime(1187u32).unwrap(),
        Set::polynomials(5u32).unwrap(),
        Set::product(vec![z7.clone(), g23.clone()]),
        Set::product(vec![Set::product_uniform(g23, 2), z7]),
    ]
}

fn test_rings() -> Vec<Set> {
    vec![
        Set::integers(),
        Set::zmod(12u32).unwrap(),
        Set::zmod(593u32).unwrap(),
        Set::polynomials(3u32).unwrap(),
    ]
}

/// Group axioms hold for sampled elements of every test group
proptest! {
    #[test]
    fn test_group_axioms(seed in any::<u64>()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        for set in test_groups() {
            let a = set.random_element(&mut rng);
            let b = set.random_element(&mut rng);
            let c = set.random_element(&mut rng);
            let identity = set.identity()?;

            prop_assert_eq!(a.apply(&b)?.apply(&c)?, a.apply(&b.apply(&c)?)?);
            prop_assert_eq!(a.apply(&identity)?, a.clone());
            prop_assert_eq!(identity.apply(&a)?, a.clone());
            prop_assert!(a.apply(&a.invert()?)?.is_identity());
        }
    }
}

/// Self-application agrees with repeated application, and negative
/// amounts invert
proptest! {
    #[test]
    fn test_self_apply_consistency(seed in any::<u64>(), amount in 0i64..40) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        for set in test_groups() {
            let a = set.random_element(&mut rng);
            let mut repeated = set.identity()?;
            for _ in 0..amount {
                repeated = repeated.apply(&a)?;
            }
            prop_assert_eq!(a.self_apply(&BigInt::from(amount))?, repeated.clone());
            prop_assert_eq!(a.self_apply(&BigInt::from(-amount))?, repeated.invert()?);
        }
    }
}

/// Multiplication distributes over addition
proptest! {
    #[test]
    fn test_ring_distributivity(seed in any::<u64>()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        for ring in test_rings() {
            let a = ring.random_element(&mut rng);
            let b = ring.random_element(&mut rng);
            let c = ring.random_element(&mut rng);
            prop_assert_eq!(
                a.multiply(&b.apply(&c)?)?,
                a.multiply(&b)?.apply(&a.multiply(&c)?)?
            );
            prop_assert_eq!(a.multiply(&ring.one()?)?, a.clone());
        }
    }
}

proptest! {
    #[test]
    fn test_zmod_encoding_roundtrip(modulus in 1u64..100_000, value in any::<u64>()) {
        let set = Set::zmod(modulus)?;
        let value = BigUint::from(value % modulus);
        prop_assert_eq!(set.element_from(&value)?.to_integer(), value);
    }

    #[test]
    fn test_integer_encoding_roundtrip(value in any::<u64>()) {
        let value = BigUint::from(value);
        prop_assert_eq!(Set::integers().element_from(&value)?.to_integer(), value);
    }

    #[test]
    fn test_uniform_product_encoding_roundtrip(
        modulus in 2u32..50,
        arity in 0usize..5,
        value in any::<u64>(),
    ) {
        let set = Set::product_uniform(Set::zmod(modulus)?, arity);
        let order = num_traits::pow(BigUint::from(modulus), arity);
        let value = BigUint::from(value) % order;
        prop_assert_eq!(set.element_from(&value)?.to_integer(), value);
    }

    #[test]
    fn test_uniform_group_product_encoding_roundtrip(seed in any::<u64>(), arity in 1usize..5) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let components = vec![
            Set::gstarmod_safe_prime(23u32)?,
            Set::gstarmod_safe_prime(1187u32)?,
            Set::zstarmod(7u32)?,
            Set::zstarmod(15u32)?,
            Set::polynomials(5u32)?,
            Set::integers(),
            Set::product(vec![Set::zmod(7u32)?, Set::gstarmod_safe_prime(23u32)?]),
            Set::product_uniform(Set::gstarmod_safe_prime(23u32)?, 2),
            Set::product_uniform(Set::zmod(6u32)?, 3),
        ];
        for component in components {
            let set = Set::product_uniform(component, arity);
            let element = set.random_element(&mut rng);
            let encoding = element.to_integer();
            prop_assert!(set.contains_integer(&encoding));
            prop_assert_eq!(set.element_from(&encoding)?, element);
        }
    }

    #[test]
    fn test_mixed_product_encoding_roundtrip(
        a in -1000i64..1000,
        b in 0u32..7,
        c in vec(any::<u8>(), 0..4),
    ) {
        let bytes = Set::byte_arrays(0, 3)?;
        let set = Set::product(vec![Set::integers(), Set::zmod(7u32)?, bytes.clone()]);
        let element = set.tuple(vec![
            Set::integers().element(a)?,
            Set::zmod(7u32)?.element(b)?,
            bytes.element_of(crate::Value::Bytes(c))?,
        ])?;
        prop_assert_eq!(set.element_from(&element.to_integer())?, element);
    }

    #[test]
    fn test_byte_array_encoding_roundtrip(bytes in vec(any::<u8>(), 1..6)) {
        let set = Set::byte_arrays(1, 5)?;
        let element = set.element_of(crate::Value::Bytes(bytes))?;
        prop_assert_eq!(set.element_from(&element.to_integer())?, element);
    }

    #[test]
    fn test_polynomial_encoding_roundtrip(value in any::<u64>()) {
        let ring = Set::polynomials(7u32)?;
        let value = BigUint::from(value);
        prop_assert_eq!(ring.element_from(&value)?.to_integer(), value);
    }
}

/// `get_at` returns the components and `remove_at` drops exactly one of
/// them, preserving order
proptest! {
    #[test]
    fn test_compound_projection(
        values in vec(0u32..97, 1..6),
        index in 0usize..6,
    ) {
        prop_assume!(index < values.len());
        let zq = Set::zmod(97u32)?;
        let elements: Vec<Element> = values
            .iter()
            .map(|v| zq.element(*v))
            .collect::<crate::Result<_>>()?;
        let compound = Element::tuple(elements.clone());

        prop_assert_eq!(compound.arity(), elements.len());
        for (i, element) in elements.iter().enumerate() {
            prop_assert_eq!(compound.get_at(i)?, element);
        }

        let removed = compound.remove_at(index)?;
        let mut expected = elements.clone();
        expected.remove(index);
        prop_assert_eq!(removed.arity(), elements.len() - 1);
        prop_assert_eq!(removed.components()?, &expected[..]);
        prop_assert_eq!(removed, Element::tuple(expected));
    }
}

proptest! {
    #[test]
    fn test_byte_tree_roundtrip(seed in any::<u64>()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        for set in test_groups() {
            let element = set.random_element(&mut rng);
            let bytes = element.to_bytes()?;
            prop_assert_eq!(set.element_from_bytes(&bytes)?, element);
        }
    }
}
