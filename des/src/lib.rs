//! Data Encryption Standard (DES) block cipher
//!
//! https://csrc.nist.gov/csrc/media/publications/fips/46/3/archive/1999-10-25/documents/fips46-3.pdf

mod bits;
mod cipher;
mod engine;
mod fused;
mod schedule;
mod tables;

pub use cipher::process;
pub use engine::{decrypt, encrypt, Engine};
