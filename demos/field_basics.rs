//! GF(2^173) Basics
//!
//! This example walks through the element API:
//! - Parsing and printing the binary and hex encodings
//! - Arithmetic (add, multiply, square, pow, inverse)
//! - Trace and square roots
//!
//! Run with: cargo run --example field_basics

use gf2m173::{FieldElement, Ring};

fn main() {
    println!("=== GF(2^173) with f(x) = x^173 + x^10 + x^2 + x + 1 ===\n");

    encodings();
    arithmetic();
    field_identities();
}

/// Demonstrate the two text encodings
fn encodings() {
    println!("--- Encodings ---\n");

    let a = FieldElement::from_hex_str("14828E13ADCFCC3BF7368BD43DE89041763C1DBFB2DE").unwrap();
    println!("a (hex)    = {}", a);
    println!("a (binary) = {:b}", a);
    println!("deg(a)     = {:?}", a.degree());

    match FieldElement::from_hex_str("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF") {
        Ok(x) => println!("unexpectedly parsed {}", x),
        Err(e) => println!("44 F digits rejected: {}", e),
    }

    println!();
}

/// Demonstrate field arithmetic
fn arithmetic() {
    println!("--- Arithmetic ---\n");

    let a = FieldElement::from_hex_str("14828E13ADCFCC3BF7368BD43DE89041763C1DBFB2DE").unwrap();
    let b = FieldElement::from_hex_str("15EB380F0A6C9DFC8BBF6A6A4811BF9D7C451CC12A4C").unwrap();
    let c = FieldElement::from_hex_str("1311EF56624F81C6C43609B74687D8BAF7E0916BDD1E").unwrap();

    println!("a + b    = {}", a + b);
    println!("a * b    = {}", a * b);
    println!("a^2      = {}", a.square());
    println!("a^c      = {}", a.pow(c));
    println!("Tr(a)    = {}", u8::from(a.trace()));

    match a.inverse() {
        Ok(a_inv) => {
            println!("a^(-1)   = {}", a_inv);
            println!("a*a^(-1) = {} (should be 1)", a * a_inv);
        }
        Err(e) => println!("a^(-1) failed: {}", e),
    }

    println!();
}

/// Demonstrate identities that hold in every element of the field
fn field_identities() {
    println!("--- Field Identities ---\n");

    let a = FieldElement::from_hex_str("0AE91DB7FBD1EBAC661F6488CC27F208C2B136493261").unwrap();

    println!("a + a = {} (characteristic 2)", a + a);

    let root = a.sqrt();
    println!("sqrt(a)^2 == a: {}", root.square() == a);

    let order = FieldElement::new([u64::MAX; 3]);
    println!("a^(2^173 - 1) = {} (group order)", a.pow(order));

    match FieldElement::ZERO.inverse() {
        Ok(_) => println!("zero inverted?!"),
        Err(e) => println!("0^(-1): {}", e),
    }

    println!();
}
