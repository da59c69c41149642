//! Example: ElGamal validity proof
//!
//! A voter encrypts one of four encoded choices `g^0..g^3` and proves the
//! ciphertext is valid. The proof travels as a byte bundle which the
//! verifier decodes and checks against the same candidate list.

use anyhow::{ensure, Result};
use rand::thread_rng;
use sigma_algebra::Element;
use sigma_demos::{demo_group, prover_id, short_hex};
use sigma_proofs::{MembershipWitness, ProofGenerator, SigmaConfig};
use sigma_schemes::{ElGamalEncryptionScheme, ElGamalValidityProofGenerator, ValidityProofBundle};

fn main() -> Result<()> {
    println!("ElGamal Validity Proof Example");
    println!("==============================");

    let mut rng = thread_rng();
    let scheme = ElGamalEncryptionScheme::new(demo_group()?)?;
    let (private_key, public_key) = scheme.key_pair(&mut rng)?;
    let plaintexts = (0..4)
        .map(|k| scheme.generator().self_apply(&k.into()))
        .collect::<sigma_algebra::Result<Vec<Element>>>()?;
    let config = SigmaConfig::default();

    // Prover side
    let choice = 2;
    let (ciphertext, randomization) = scheme.encrypt(&public_key, &plaintexts[choice], &mut rng)?;
    let prover = ElGamalValidityProofGenerator::non_interactive(
        scheme.clone(),
        public_key.clone(),
        plaintexts.clone(),
        Some(prover_id("Prover1")?),
        &config,
    )?;
    let witness = MembershipWitness::new(randomization, choice);
    let proof = prover.generate(&witness, &ciphertext, &mut rng)?;
    let bytes = ValidityProofBundle::new(proof, ciphertext, public_key).to_bytes()?;
    println!("bundle: {} bytes", bytes.len());

    // Verifier side
    let bundle = ValidityProofBundle::from_bytes(&bytes, &scheme, plaintexts.len())?;
    println!("ciphertext: {}", short_hex(&bundle.ciphertext)?);
    let verifier = ElGamalValidityProofGenerator::non_interactive(
        scheme.clone(),
        bundle.public_key.clone(),
        plaintexts.clone(),
        Some(prover_id("Prover1")?),
        &config,
    )?;
    let valid = verifier.verify(&bundle.proof, &bundle.ciphertext)?;
    println!("proof verifies: {valid}");
    ensure!(valid, "validity proof rejected");

    let decrypted = scheme.decrypt(&private_key, &bundle.ciphertext)?;
    ensure!(decrypted == plaintexts[choice], "decryption mismatch");
    println!("decrypted choice: {choice}");
    Ok(())
}
