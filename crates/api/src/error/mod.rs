//! Error handling for the ecgost library

mod types;

pub use types::{Error, Result};
