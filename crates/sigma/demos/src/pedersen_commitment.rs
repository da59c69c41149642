//! Example: Pedersen commitment with an equality proof
//!
//! Commits to a message, opens the commitment, then proves that the
//! committed message is also the discrete logarithm of a second public
//! value, without revealing either the message or the randomization.

use anyhow::{ensure, Result};
use rand::thread_rng;
use sigma_algebra::Element;
use sigma_demos::{demo_group, prover_id, short_hex};
use sigma_morphisms::{composite, generator, selection};
use sigma_proofs::{PreimageEqualityProofGenerator, ProofGenerator, SigmaConfig};
use sigma_schemes::PedersenCommitmentScheme;

fn main() -> Result<()> {
    println!("Pedersen Commitment Example");
    println!("===========================");

    let mut rng = thread_rng();
    let group = demo_group()?;
    let scheme = PedersenCommitmentScheme::new(group.clone())?;
    println!("g = {}", scheme.message_generator());
    println!("h = {}", scheme.randomization_generator());

    let message = scheme.message_space()?.element(42)?;
    let randomization = scheme.randomization_space()?.random_element(&mut rng);
    let commitment = scheme.commit(&message, &randomization)?;
    println!("commit(42, r) = {commitment}");
    ensure!(scheme.decommit(&message, &randomization, &commitment)?, "opening rejected");
    println!("opening (42, r) accepted");

    // (m, r) ↦ k^m for a third generator k
    let opening_space = scheme.commitment_function().domain().clone();
    let k = group.independent_generators(1, b"pedersen-demo-public-key")?.remove(0);
    let exponentiation = composite(vec![selection(&opening_space, &[0])?, generator(&group, &k)?])?;
    let public_value = k.self_apply_by(&message)?;

    let pg = PreimageEqualityProofGenerator::non_interactive(
        vec![scheme.commitment_function().clone(), exponentiation],
        Some(prover_id("Prover1")?),
        &SigmaConfig::default(),
    )?;
    let opening = Element::pair(message, randomization);
    let public_input = Element::pair(commitment, public_value);
    let proof = pg.generate(&opening, &public_input, &mut rng)?;
    println!("equality proof: {}", short_hex(&proof)?);

    let valid = pg.verify(&proof, &public_input)?;
    println!("proof verifies: {valid}");
    ensure!(valid, "equality proof rejected");
    Ok(())
}
