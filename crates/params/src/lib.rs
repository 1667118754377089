//! Constant values for the ecgost library
//!
//! Domain parameter tables, coefficient ranges and protocol limits shared by
//! the algorithm and signature crates. Everything here is a plain constant so
//! the crate stays `no_std`.

#![no_std]

pub mod traditional;
