use base64::{Engine as _, engine::general_purpose};
use bytes::Bytes;

use crate::domain::{
    common::entities::app_errors::CoreError,
    export::entities::{Blob, PNG_CONTENT_TYPE},
};

/// Size of the slices a decoded payload is split into when building a [`Blob`].
pub const SLICE_SIZE: usize = 512;

pub fn encode_image(data: &[u8]) -> String {
    general_purpose::STANDARD.encode(data)
}

pub fn decode_image(base64: &str) -> Result<Vec<u8>, CoreError> {
    general_purpose::STANDARD
        .decode(base64.trim())
        .map_err(|e| CoreError::InvalidImage(format!("invalid base64: {}", e)))
}

/// `data:` URI suitable for inlining the image in a page.
pub fn image_data_uri(base64: &str) -> String {
    format!("data:{};base64,{}", PNG_CONTENT_TYPE, base64)
}

/// Decode `base64` into a blob made of [`SLICE_SIZE`] parts.
///
/// Slicing only bounds the size of each allocation; the concatenated parts
/// are exactly the decoded payload.
pub fn b64_to_blob(base64: &str, content_type: &str) -> Result<Blob, CoreError> {
    let decoded = Bytes::from(decode_image(base64)?);

    let parts = (0..decoded.len())
        .step_by(SLICE_SIZE)
        .map(|offset| decoded.slice(offset..(offset + SLICE_SIZE).min(decoded.len())))
        .collect();

    Ok(Blob::new(parts, content_type))
}
