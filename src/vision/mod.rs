//! Image intake for the analysis pipeline.
//!
//! Clients upload fridge photos as base64, either bare or wrapped in a data
//! URL. This module turns that string into raw bytes plus a MIME type that
//! can be forwarded to Gemini as `inlineData`.
//!
//! # Submodules
//!
//! - `models`: The decoded image type and MIME type helpers.
//! - `decode`: Data URL / base64 parsing.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod decode;
pub mod models;

pub use decode::decode_image;
pub use models::DecodedImage;
