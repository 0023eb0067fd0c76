// Data URL and base64 image decoding
// Author: kelexine (https://github.com/kelexine)

use super::models::{normalize_mime_type, DecodedImage, DEFAULT_MIME_TYPE};
use crate::error::{ChefError, Result};
use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use std::borrow::Cow;

const DATA_URL_PREFIX: &str = "data:";

/// Standard padded alphabet, tolerating non-zero trailing bits.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decode an uploaded image.
///
/// Accepts either a data URL (`data:<mime>[;params],<base64>`) or bare
/// base64. Bare base64 is assumed to be JPEG. The payload uses the standard
/// padded alphabet; line breaks inside it are skipped.
pub fn decode_image(input: &str) -> Result<DecodedImage> {
    let Some(rest) = input.strip_prefix(DATA_URL_PREFIX) else {
        let data = decode_payload(input)?;
        return Ok(DecodedImage::new(data, DEFAULT_MIME_TYPE));
    };

    let (meta, payload) = rest.split_once(',').ok_or(ChefError::MalformedInput)?;

    let mime = meta.split_once(';').map_or(meta, |(mime, _params)| mime);
    let data = decode_payload(payload)?;

    Ok(DecodedImage::new(data, normalize_mime_type(mime)))
}

fn decode_payload(payload: &str) -> Result<Vec<u8>> {
    let payload = if payload.contains(['\r', '\n']) {
        Cow::Owned(payload.replace(['\r', '\n'], ""))
    } else {
        Cow::Borrowed(payload)
    };
    Ok(PAYLOAD_ENGINE.decode(payload.as_bytes())?)
}
