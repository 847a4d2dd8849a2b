//! Embeds a binary font file into a C header as a `static const unsigned char`
//! array, wrapped in an include guard.

pub mod constants;
pub mod converter;
pub mod header;
pub mod identifier;
