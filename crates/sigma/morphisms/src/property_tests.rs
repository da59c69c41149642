//! Property-based tests for function composition

use crate::{apply, composite, generator, invert, multi_identity, product, selection, Function};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sigma_algebra::{CyclicGroup, Element, Set};

fn group() -> CyclicGroup {
    Set::gstarmod_safe_prime(1187u32)
        .unwrap()
        .to_cyclic_group()
        .unwrap()
}

fn pipeline(group: &CyclicGroup) -> Vec<Function> {
    let g = group.default_generator().unwrap();
    let zq = group.zmod_order().unwrap();
    vec![
        multi_identity(zq, 2),
        product(vec![
            generator(group, &g).unwrap(),
            generator(group, &g).unwrap(),
        ]),
        apply(&group.as_monoid(), 2),
        invert(&group.as_group()),
    ]
}

proptest! {
    /// A composite agrees with applying its parts in sequence, however the
    /// parts are grouped
    #[test]
    fn test_composite_agrees_with_sequence(seed in any::<u64>(), split in 1usize..4) {
        let g = group();
        let parts = pipeline(&g);
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let input = parts[0].domain().random_element(&mut rng);

        let mut expected = input.clone();
        for part in &parts {
            expected = part.apply(&expected)?;
        }

        let whole = composite(parts.clone())?;
        prop_assert_eq!(whole.apply(&input)?, expected.clone());

        let left = composite(parts[..split].to_vec())?;
        let right = composite(parts[split..].to_vec())?;
        prop_assert_eq!(left.then(&right)?.apply(&input)?, expected);
    }

    /// Selecting each component of a product function's output equals
    /// applying the corresponding part
    #[test]
    fn test_product_projection(seed in any::<u64>()) {
        let g = group();
        let zq = g.zmod_order()?;
        let h = g.default_generator()?;
        let parts = vec![generator(&g, &h)?, invert(&g.as_group())];
        let f = product(parts.clone());
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let input = Element::pair(zq.random_element(&mut rng), g.random_element(&mut rng));

        let output = f.apply(&input)?;
        for (i, part) in parts.iter().enumerate() {
            let project = selection(f.co_domain(), &[i])?;
            prop_assert_eq!(project.apply(&output)?, part.apply(input.get_at(i)?)?);
        }
    }
}
