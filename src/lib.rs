//! Exact arithmetic in the binary extension field GF(2^173).
//!
//! Elements are polynomials over GF(2) of degree < 173, reduced modulo the
//! irreducible pentanomial f(x) = x^173 + x^10 + x^2 + x + 1. Addition is
//! XOR; every other operation is built from multiplication and one reduction
//! routine.
//!
//! ```
//! use gf2m173::{FieldElement, Ring};
//!
//! let a: FieldElement = "0AE91DB7FBD1EBAC661F6488CC27F208C2B136493261".parse().unwrap();
//! let b: FieldElement = "0D5026BF220F27A2D765193E6C14502E37F19293A040".parse().unwrap();
//!
//! assert_eq!((a * b).to_string(), "1AD6F26D48849E96D7CB5852DE86C4A425B698A35B3E");
//! assert_eq!(a * a.inverse().unwrap(), FieldElement::ONE);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod algebra;
pub mod structures;
mod tracing;
pub mod utils;

pub use algebra::field::Field;
pub use algebra::ring::Ring;

pub use structures::codec::ParseError;
pub use structures::gf2m::{FieldElement, NotInvertible};
pub use structures::modulus::{M, REDUCTION_EXPONENTS};
pub use utils::{hex_char, hex_value};
