//! Hash methods and recursive element hashing

use crate::element::{Element, Value};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha512};

const LEAF_PREFIX: u8 = 0x01;
const NODE_PREFIX: u8 = 0x00;

/// Fixed-output hash function
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashMethod {
    #[default]
    Sha256,
    Sha512,
}

impl HashMethod {
    pub fn digest(&self, bytes: &[u8]) -> Vec<u8> {
        match self {
            HashMethod::Sha256 => Sha256::digest(bytes).to_vec(),
            HashMethod::Sha512 => Sha512::digest(bytes).to_vec(),
        }
    }

    /// Output length in bytes
    pub fn output_length(&self) -> usize {
        match self {
            HashMethod::Sha256 => 32,
            HashMethod::Sha512 => 64,
        }
    }

    /// Recursive hash: leaves hash their integer encoding, tuples hash the
    /// concatenated hashes of their components
    pub fn hash_element(&self, element: &Element) -> Vec<u8> {
        match element.value() {
            Value::Tuple(components) => {
                let mut input = vec![NODE_PREFIX];
                for component in components {
                    input.extend(self.hash_element(component));
                }
                self.digest(&input)
            }
            _ => {
                let mut input = vec![LEAF_PREFIX];
                input.extend(element.to_integer().to_bytes_be());
                self.digest(&input)
            }
        }
    }
}

impl Element {
    /// Recursive hash value of this element
    pub fn hash_value(&self, method: HashMethod) -> Vec<u8> {
        method.hash_element(self)
    }
}
