//! ElGamal encryption over a cyclic group
//!
//! Keys `sk ∈ Z_q`, `pk = g^sk`; a message `m` of the group encrypts under
//! randomization `r` to `(g^r, m ∘ pk^r)` and decrypts as `b ∘ (a^sk)^-1`.

use crate::errors::{Result, SchemeError};
use rand_core::RngCore;
use sigma_algebra::{CyclicGroup, Element, Set};
use sigma_morphisms::{generator, Function, FunctionError, Morphism};

/// `(pk, m, r) ↦ (g^r, m ∘ pk^r)`
#[derive(Debug)]
struct EncryptionFunction {
    generator: Element,
    domain: Set,
    co_domain: Set,
}

impl Morphism for EncryptionFunction {
    fn domain(&self) -> &Set {
        &self.domain
    }

    fn co_domain(&self) -> &Set {
        &self.co_domain
    }

    fn evaluate(&self, input: &Element) -> std::result::Result<Element, FunctionError> {
        let public_key = input.get_at(0)?;
        let message = input.get_at(1)?;
        let randomization = input.get_at(2)?;
        let first = self.generator.self_apply_by(randomization)?;
        let second = message.apply(&public_key.self_apply_by(randomization)?)?;
        Ok(self.co_domain.tuple(vec![first, second])?)
    }
}

#[derive(Clone, Debug)]
pub struct ElGamalEncryptionScheme {
    group: CyclicGroup,
    generator: Element,
    key_function: Function,
    encryption_function: Function,
}

impl ElGamalEncryptionScheme {
    /// Scheme over the group's default generator
    pub fn new(group: CyclicGroup) -> Result<Self> {
        let generator = group.default_generator()?;
        Self::with_generator(group, generator)
    }

    pub fn with_generator(group: CyclicGroup, generator_element: Element) -> Result<Self> {
        if !group.is_generator(&generator_element) {
            return Err(SchemeError::InvalidArgument(format!(
                "{generator_element} does not generate {}",
                group.as_set()
            )));
        }
        let key_function = generator(&group, &generator_element)?;
        let randomization_space = key_function.domain().clone();
        let encryption_function = Function::new(EncryptionFunction {
            generator: generator_element.clone(),
            domain: Set::product(vec![
                group.as_set().clone(),
                group.as_set().clone(),
                randomization_space,
            ]),
            co_domain: Set::product_uniform(group.as_set().clone(), 2),
        });
        Ok(Self {
            group,
            generator: generator_element,
            key_function,
            encryption_function,
        })
    }

    pub fn group(&self) -> &CyclicGroup {
        &self.group
    }

    pub fn generator(&self) -> &Element {
        &self.generator
    }

    pub fn private_key_space(&self) -> &Set {
        self.key_function.domain()
    }

    pub fn randomization_space(&self) -> &Set {
        self.key_function.domain()
    }

    pub fn message_space(&self) -> &Set {
        self.group.as_set()
    }

    pub fn ciphertext_space(&self) -> &Set {
        self.encryption_function.co_domain()
    }

    /// `(pk, m, r) ↦ (g^r, m ∘ pk^r)`
    pub fn encryption_function(&self) -> &Function {
        &self.encryption_function
    }

    pub fn generate_private_key(&self, rng: &mut dyn RngCore) -> Element {
        self.private_key_space().random_element(rng)
    }

    pub fn public_key(&self, private_key: &Element) -> Result<Element> {
        Ok(self.key_function.apply(private_key)?)
    }

    /// `(private key, public key)`
    pub fn key_pair(&self, rng: &mut dyn RngCore) -> Result<(Element, Element)> {
        let private_key = self.generate_private_key(rng);
        let public_key = self.public_key(&private_key)?;
        Ok((private_key, public_key))
    }

    /// Encrypts under fresh randomization, returned with the ciphertext
    pub fn encrypt(
        &self,
        public_key: &Element,
        message: &Element,
        rng: &mut dyn RngCore,
    ) -> Result<(Element, Element)> {
        let randomization = self.randomization_space().random_element(rng);
        let ciphertext = self.encrypt_with(public_key, message, &randomization)?;
        Ok((ciphertext, randomization))
    }

    pub fn encrypt_with(
        &self,
        public_key: &Element,
        message: &Element,
        randomization: &Element,
    ) -> Result<Element> {
        let input = Element::triple(public_key.clone(), message.clone(), randomization.clone());
        Ok(self.encryption_function.apply(&input)?)
    }

    pub fn decrypt(&self, private_key: &Element, ciphertext: &Element) -> Result<Element> {
        if !self.ciphertext_space().contains(ciphertext) {
            return Err(SchemeError::InvalidArgument(format!(
                "{ciphertext} is not in {}",
                self.ciphertext_space()
            )));
        }
        let a = ciphertext.get_at(0)?;
        let b = ciphertext.get_at(1)?;
        Ok(b.apply_inverse(&a.self_apply_by(private_key)?)?)
    }
}
