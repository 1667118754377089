//! Common implementations and shared functionality for the ecgost library
//!
//! This crate provides the integer helpers every other ecgost component
//! leans on: modular arithmetic over small prime fields, primality and
//! factorisation, bit-string conversions and uniform random selection.

pub mod bits;
pub mod math_common;
pub mod random;

pub use bits::{from_binary, plaintext_to_bits, split_blocks, to_binary};
pub use math_common::{
    bit_length, gcd, is_prime, mod_add, mod_exp, mod_inv, mod_mul, mod_positive, mod_sub,
    prime_factors,
};
pub use random::{choice_from, uniform_int};
