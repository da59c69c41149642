//! Byte-tree codec
//!
//! A versioned, length-prefixed tagged encoding of nested byte strings:
//!
//! ```text
//! tree  := version:u8 node
//! node  := 0x00 count:u32be node{count}
//!        | 0x01 length:u32be byte{length}
//! ```
//!
//! Elements map to trees structurally: tuples become nodes, everything else
//! becomes a leaf holding the big-endian integer encoding. Decoding is driven
//! by the target set, which supplies the structure and validates membership.

use crate::element::{Element, Value};
use crate::errors::{AlgebraError, Result};
use crate::set::Set;
use byteorder::{BigEndian, ByteOrder, ReadBytesExt};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::io::{Cursor, Read};

/// Current encoding version
pub const BYTE_TREE_VERSION: u8 = 1;

/// Nesting depth accepted when decoding
pub const MAX_DEPTH: usize = 64;

const NODE_TAG: u8 = 0x00;
const LEAF_TAG: u8 = 0x01;
const HEADER_LENGTH: usize = 5;

/// Nested byte strings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ByteTree {
    Leaf(Vec<u8>),
    Node(Vec<ByteTree>),
}

fn codec_error(message: impl Into<String>) -> AlgebraError {
    AlgebraError::Codec(message.into())
}

fn length_prefix(length: usize) -> Result<[u8; 4]> {
    let length = u32::try_from(length)
        .map_err(|_| codec_error(format!("length {length} exceeds u32")))?;
    let mut buf = [0u8; 4];
    BigEndian::write_u32(&mut buf, length);
    Ok(buf)
}

impl ByteTree {
    /// Version-prefixed encoding
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = vec![BYTE_TREE_VERSION];
        self.write_to(&mut out)?;
        Ok(out)
    }

    fn write_to(&self, out: &mut Vec<u8>) -> Result<()> {
        match self {
            ByteTree::Leaf(bytes) => {
                out.push(LEAF_TAG);
                out.extend_from_slice(&length_prefix(bytes.len())?);
                out.extend_from_slice(bytes);
            }
            ByteTree::Node(children) => {
                out.push(NODE_TAG);
                out.extend_from_slice(&length_prefix(children.len())?);
                for child in children {
                    child.write_to(out)?;
                }
            }
        }
        Ok(())
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<ByteTree> {
        let mut cursor = Cursor::new(bytes);
        let version = cursor
            .read_u8()
            .map_err(|_| codec_error("missing version byte"))?;
        if version != BYTE_TREE_VERSION {
            return Err(codec_error(format!("unsupported version {version}")));
        }
        let tree = Self::read_from(&mut cursor, 0)?;
        if cursor.position() as usize != bytes.len() {
            return Err(codec_error("trailing bytes after byte tree"));
        }
        Ok(tree)
    }

    fn read_from(cursor: &mut Cursor<&[u8]>, depth: usize) -> Result<ByteTree> {
        if depth > MAX_DEPTH {
            return Err(codec_error(format!("nesting deeper than {MAX_DEPTH}")));
        }
        let tag = cursor
            .read_u8()
            .map_err(|_| codec_error("truncated tag"))?;
        let length = cursor
            .read_u32::<BigEndian>()
            .map_err(|_| codec_error("truncated length"))? as usize;
        let remaining = cursor.get_ref().len() - cursor.position() as usize;

        match tag {
            LEAF_TAG => {
                if length > remaining {
                    return Err(codec_error(format!(
                        "leaf of {length} bytes with {remaining} bytes left"
                    )));
                }
                let mut bytes = vec![0u8; length];
                cursor
                    .read_exact(&mut bytes)
                    .map_err(|_| codec_error("truncated leaf"))?;
                Ok(ByteTree::Leaf(bytes))
            }
            NODE_TAG => {
                if length > remaining / HEADER_LENGTH {
                    return Err(codec_error(format!(
                        "node of {length} children with {remaining} bytes left"
                    )));
                }
                let children = (0..length)
                    .map(|_| Self::read_from(cursor, depth + 1))
                    .collect::<Result<Vec<_>>>()?;
                Ok(ByteTree::Node(children))
            }
            other => Err(codec_error(format!("unknown tag {other:#04x}"))),
        }
    }
}

impl Element {
    pub fn to_byte_tree(&self) -> ByteTree {
        match self.value() {
            Value::Tuple(components) => {
                ByteTree::Node(components.iter().map(Element::to_byte_tree).collect())
            }
            _ => ByteTree::Leaf(self.to_integer().to_bytes_be()),
        }
    }

    /// Version-prefixed byte-tree encoding
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.to_byte_tree().to_bytes()
    }
}

impl Set {
    /// Decodes a tree shaped like the elements of this set
    pub fn element_from_byte_tree(&self, tree: &ByteTree) -> Result<Element> {
        match tree {
            ByteTree::Node(children) if self.is_compound() => {
                if children.len() != self.arity() {
                    return Err(codec_error(format!(
                        "{} children for {self} of arity {}",
                        children.len(),
                        self.arity()
                    )));
                }
                let elements = children
                    .iter()
                    .enumerate()
                    .map(|(i, child)| self.get_at(i)?.element_from_byte_tree(child))
                    .collect::<Result<Vec<_>>>()?;
                self.tuple(elements)
            }
            ByteTree::Leaf(bytes) if !self.is_compound() => {
                self.element_from(&BigUint::from_bytes_be(bytes))
            }
            _ => Err(codec_error(format!("tree shape does not match {self}"))),
        }
    }

    pub fn element_from_bytes(&self, bytes: &[u8]) -> Result<Element> {
        self.element_from_byte_tree(&ByteTree::from_bytes(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let tree = ByteTree::Node(vec![ByteTree::Leaf(vec![0xab]), ByteTree::Node(vec![])]);
        let bytes = tree.to_bytes().unwrap();
        assert_eq!(
            bytes,
            vec![1, 0, 0, 0, 0, 2, 1, 0, 0, 0, 1, 0xab, 0, 0, 0, 0, 0]
        );
        assert_eq!(ByteTree::from_bytes(&bytes).unwrap(), tree);
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(ByteTree::from_bytes(&[]).is_err());
        assert!(ByteTree::from_bytes(&[2, 1, 0, 0, 0, 0]).is_err());
        // Leaf claims more bytes than present
        assert!(ByteTree::from_bytes(&[1, 1, 0, 0, 0, 9, 0xff]).is_err());
        // Node claims more children than could fit
        assert!(ByteTree::from_bytes(&[1, 0, 0xff, 0xff, 0xff, 0xff]).is_err());
        // Trailing garbage
        assert!(ByteTree::from_bytes(&[1, 1, 0, 0, 0, 0, 7]).is_err());
        // Unknown tag
        assert!(ByteTree::from_bytes(&[1, 7, 0, 0, 0, 0]).is_err());
    }

    #[test]
    fn test_depth_limit() {
        let mut bytes = vec![BYTE_TREE_VERSION];
        for _ in 0..=MAX_DEPTH + 1 {
            bytes.extend_from_slice(&[NODE_TAG, 0, 0, 0, 1]);
        }
        bytes.extend_from_slice(&[LEAF_TAG, 0, 0, 0, 0]);
        assert!(matches!(ByteTree::from_bytes(&bytes), Err(AlgebraError::Codec(_))));
    }

    #[test]
    fn test_element_roundtrip() {
        let group = Set::gstarmod_safe_prime(1187u32).unwrap();
        let zq = Set::zmod(593u32).unwrap();
        let g = group.default_generator().unwrap();
        let nested = Element::pair(
            Element::triple(g.clone(), zq.element(17).unwrap(), g.clone()),
            zq.element(0).unwrap(),
        );
        let bytes = nested.to_bytes().unwrap();
        assert_eq!(nested.set().element_from_bytes(&bytes).unwrap(), nested);
    }

    #[test]
    fn test_decoding_validates_membership() {
        let group = Set::gstarmod_safe_prime(23u32).unwrap();
        // 5 is not a quadratic residue modulo 23
        let tree = ByteTree::Leaf(vec![5]);
        assert!(matches!(
            group.element_from_byte_tree(&tree),
            Err(AlgebraError::InvalidElement(_))
        ));
        let pair = Set::product_uniform(group.clone(), 2);
        let tree = ByteTree::Node(vec![ByteTree::Leaf(vec![2])]);
        assert!(matches!(pair.element_from_byte_tree(&tree), Err(AlgebraError::Codec(_))));
    }
}
