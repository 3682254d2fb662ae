//! ISO 6346 container number engine: check digits, unique batch generation and
//! transposition detection.

pub mod core;
pub mod util;
