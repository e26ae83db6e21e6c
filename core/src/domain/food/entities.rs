use std::fmt;

use bytes::Bytes;

/// Server-assigned identifier of a catalog entry. Opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoodId(String);

impl FoodId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw image bytes as received from the by-id endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodImage(Bytes);

impl FoodImage {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self(data.into())
    }

    pub fn bytes(&self) -> &Bytes {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodRecord {
    pub id: FoodId,
    pub title: String,
    /// Only present on by-id responses; listings never carry images.
    pub image: Option<FoodImage>,
}

impl FoodRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: FoodId::new(id),
            title: title.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: FoodImage) -> Self {
        self.image = Some(image);
        self
    }
}
