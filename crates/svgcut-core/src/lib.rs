//! # SvgCut Core
//!
//! Shared foundation for the SvgCut workspace:
//!
//! - **number** - decimal parsing and rounding to the working precision
//! - **types** - [`Position`] and its exact hashing key
//! - **error** - the parse/document error taxonomy

pub mod error;
pub mod number;
pub mod types;

pub use error::{DocumentError, Error, ParseError, Result};
pub use number::{format_decimal, parse_decimal, round_to_precision, MAX_MAGNITUDE, PRECISION};
pub use types::{Position, PositionKey};
