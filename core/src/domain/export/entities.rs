use bytes::{Bytes, BytesMut};

pub const PNG_CONTENT_TYPE: &str = "image/png";

/// Binary content assembled from independently allocated parts, tagged with
/// its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    parts: Vec<Bytes>,
    content_type: String,
}

impl Blob {
    pub fn new(parts: Vec<Bytes>, content_type: impl Into<String>) -> Self {
        Self {
            parts,
            content_type: content_type.into(),
        }
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn parts(&self) -> &[Bytes] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.iter().map(Bytes::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.iter().all(Bytes::is_empty)
    }

    /// Concatenate the parts into one contiguous buffer.
    pub fn to_bytes(&self) -> Bytes {
        match self.parts.as_slice() {
            [] => Bytes::new(),
            [single] => single.clone(),
            parts => {
                let mut buf = BytesMut::with_capacity(self.len());
                for part in parts {
                    buf.extend_from_slice(part);
                }
                buf.freeze()
            }
        }
    }
}
