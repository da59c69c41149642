//! ElGamal encryption validity proofs
//!
//! Proves that a ciphertext encrypts one of a public list of plaintexts
//! without revealing which. The membership function is the encryption
//! function with the public key fixed, `(m, r) ↦ (g^r, m ∘ pk^r)`, and the
//! delta function divides a candidate out of the ciphertext,
//! `(m, (a, b)) ↦ (a, b ∘ m^-1)`.

use crate::elgamal::ElGamalEncryptionScheme;
use crate::errors::{Result, SchemeError};
use rand_core::RngCore;
use sigma_algebra::{Element, Set};
use sigma_morphisms::{apply, composite, invert, multi_identity, product, selection, Function};
use sigma_proofs::{
    ChallengeGenerator, MembershipWitness, NonInteractiveChallengeGenerator, ProofGenerator,
    SetMembershipProofGenerator, SigmaConfig,
};
use std::sync::Arc;
use tracing::instrument;

/// `(m, (a, b)) ↦ (a, b ∘ m^-1)`
fn delta_function(scheme: &ElGamalEncryptionScheme) -> Result<Function> {
    let group = scheme.group();
    let domain = Set::product(vec![group.as_set().clone(), scheme.ciphertext_space().clone()]);
    let adjusted_second = composite(vec![
        multi_identity(domain.clone(), 2),
        product(vec![
            selection(&domain, &[1, 1])?,
            composite(vec![selection(&domain, &[0])?, invert(&group.as_group())])?,
        ]),
        apply(&group.as_monoid(), 2),
    ])?;
    Ok(composite(vec![
        multi_identity(domain.clone(), 2),
        product(vec![selection(&domain, &[1, 0])?, adjusted_second]),
    ])?)
}

fn membership_function(scheme: &ElGamalEncryptionScheme, public_key: &Element) -> Result<Function> {
    if !scheme.group().contains(public_key) {
        return Err(SchemeError::InvalidArgument(format!(
            "public key {public_key} is not in {}",
            scheme.group().as_set()
        )));
    }
    Ok(scheme.encryption_function().partially_apply(public_key, 0)?)
}

/// Validity proof for ciphertexts under one public key
#[derive(Clone, Debug)]
pub struct ElGamalValidityProofGenerator {
    scheme: ElGamalEncryptionScheme,
    public_key: Element,
    inner: SetMembershipProofGenerator,
}

impl ElGamalValidityProofGenerator {
    pub fn new(
        challenge_generator: Arc<dyn ChallengeGenerator>,
        scheme: ElGamalEncryptionScheme,
        public_key: Element,
        plaintexts: Vec<Element>,
    ) -> Result<Self> {
        let inner = SetMembershipProofGenerator::new(
            challenge_generator,
            membership_function(&scheme, &public_key)?,
            delta_function(&scheme)?,
            plaintexts,
        )?;
        Ok(Self {
            scheme,
            public_key,
            inner,
        })
    }

    pub fn non_interactive(
        scheme: ElGamalEncryptionScheme,
        public_key: Element,
        plaintexts: Vec<Element>,
        prover_id: Option<Element>,
        config: &SigmaConfig,
    ) -> Result<Self> {
        let challenge_generator = Self::default_challenge_generator(
            &scheme,
            &public_key,
            &plaintexts,
            prover_id,
            config,
        )?;
        Self::new(Arc::new(challenge_generator), scheme, public_key, plaintexts)
    }

    pub fn default_challenge_generator(
        scheme: &ElGamalEncryptionScheme,
        public_key: &Element,
        plaintexts: &[Element],
        prover_id: Option<Element>,
        config: &SigmaConfig,
    ) -> Result<NonInteractiveChallengeGenerator> {
        Ok(SetMembershipProofGenerator::default_challenge_generator(
            &membership_function(scheme, public_key)?,
            &delta_function(scheme)?,
            plaintexts,
            prover_id,
            config,
        )?)
    }

    /// Proof space of validity proofs over `count` plaintexts; it does not
    /// depend on the public key
    pub fn proof_space_for(scheme: &ElGamalEncryptionScheme, count: usize) -> Result<Set> {
        let randomizations = scheme.randomization_space();
        Ok(Set::product(vec![
            Set::product_uniform(scheme.ciphertext_space().clone(), count),
            Set::product_uniform(randomizations.zmod_minimal_order()?, count),
            Set::product_uniform(randomizations.clone(), count),
        ]))
    }

    pub fn scheme(&self) -> &ElGamalEncryptionScheme {
        &self.scheme
    }

    pub fn public_key(&self) -> &Element {
        &self.public_key
    }

    pub fn plaintexts(&self) -> &[Element] {
        self.inner.members()
    }
}

impl ProofGenerator for ElGamalValidityProofGenerator {
    type PrivateInput = MembershipWitness;

    fn public_input_space(&self) -> &Set {
        self.inner.public_input_space()
    }

    fn proof_space(&self) -> &Set {
        self.inner.proof_space()
    }

    #[instrument(
        skip_all,
        name = "validity_proof_generate",
        fields(plaintexts = self.plaintexts().len())
    )]
    fn generate(
        &self,
        witness: &MembershipWitness,
        ciphertext: &Element,
        rng: &mut dyn RngCore,
    ) -> sigma_proofs::Result<Element> {
        self.inner.generate(witness, ciphertext, rng)
    }

    #[instrument(
        skip_all,
        name = "validity_proof_verify",
        fields(plaintexts = self.plaintexts().len())
    )]
    fn verify(&self, proof: &Element, ciphertext: &Element) -> sigma_proofs::Result<bool> {
        self.inner.verify(proof, ciphertext)
    }
}

/// Persisted `(proof, ciphertext, public key)` triple
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidityProofBundle {
    pub proof: Element,
    pub ciphertext: Element,
    pub public_key: Element,
}

impl ValidityProofBundle {
    pub fn new(proof: Element, ciphertext: Element, public_key: Element) -> Self {
        Self {
            proof,
            ciphertext,
            public_key,
        }
    }

    pub fn to_element(&self) -> Element {
        Element::triple(
            self.proof.clone(),
            self.ciphertext.clone(),
            self.public_key.clone(),
        )
    }

    /// Byte-tree encoding of [`ValidityProofBundle::to_element`]
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.to_element().to_bytes()?)
    }

    /// Decodes a bundle of a validity proof over `count` plaintexts
    pub fn from_bytes(
        bytes: &[u8],
        scheme: &ElGamalEncryptionScheme,
        count: usize,
    ) -> Result<Self> {
        let space = Set::product(vec![
            ElGamalValidityProofGenerator::proof_space_for(scheme, count)?,
            scheme.ciphertext_space().clone(),
            scheme.group().as_set().clone(),
        ]);
        let element = space.element_from_bytes(bytes)?;
        let parts = element.components()?;
        Ok(Self::new(parts[0].clone(), parts[1].clone(), parts[2].clone()))
    }
}
