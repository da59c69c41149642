//! Example: OR composition of discrete-log proofs
//!
//! The prover knows the logarithm of one of five public values and
//! convinces the verifier without saying which.

use anyhow::{ensure, Result};
use rand::thread_rng;
use sigma_algebra::Element;
use sigma_demos::{demo_group, short_hex};
use sigma_morphisms::generator;
use sigma_proofs::{OrWitness, PreimageOrProofGenerator, ProofGenerator, SigmaConfig};

fn main() -> Result<()> {
    println!("OR Proof Example");
    println!("================");

    let mut rng = thread_rng();
    let group = demo_group()?;
    let functions = group
        .independent_generators(5, b"or-proof-demo")?
        .iter()
        .map(|base| generator(&group, base))
        .collect::<sigma_morphisms::Result<Vec<_>>>()?;

    // Only the third logarithm is known
    let known = 2;
    let secret = functions[known].domain().random_element(&mut rng);
    let mut publics = (0..functions.len())
        .map(|_| group.random_element(&mut rng))
        .collect::<Vec<_>>();
    publics[known] = functions[known].apply(&secret)?;
    let public_input = Element::tuple(publics);

    let config = SigmaConfig::with_transcript();
    let pg = PreimageOrProofGenerator::non_interactive(functions, None, &config)?;
    let proof = pg.generate(&OrWitness::new(secret, known), &public_input, &mut rng)?;
    println!("proof: {}", short_hex(&proof)?);

    let valid = pg.verify(&proof, &public_input)?;
    println!("proof verifies: {valid}");
    ensure!(valid, "OR proof rejected");
    Ok(())
}
