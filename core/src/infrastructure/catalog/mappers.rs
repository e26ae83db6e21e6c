use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    export::codec::decode_image,
    food::entities::{FoodId, FoodImage, FoodRecord},
};

/// A food document as the catalog serializes it.
#[derive(Debug, Deserialize)]
pub struct FoodDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image: Option<ImageDto>,
}

/// Image payloads come back as a serialized Node `Buffer`
/// (`{"type": "Buffer", "data": [..]}`); some deployments send base64 instead.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ImageDto {
    Buffer { data: Vec<u8> },
    Base64(String),
}

#[derive(Debug, Default, Deserialize)]
pub struct ErrorBodyDto {
    #[serde(default)]
    pub message: String,
}

impl ImageDto {
    fn into_image(self) -> Result<FoodImage, CoreError> {
        match self {
            ImageDto::Buffer { data } => Ok(FoodImage::new(data)),
            ImageDto::Base64(encoded) => decode_image(&encoded).map(FoodImage::new),
        }
    }
}

impl FoodDto {
    /// Listing entries never expose an image, whatever the server sent.
    pub fn into_listing_record(self) -> FoodRecord {
        FoodRecord {
            id: FoodId::new(self.id),
            title: self.title,
            image: None,
        }
    }
}

impl TryFrom<FoodDto> for FoodRecord {
    type Error = CoreError;

    fn try_from(dto: FoodDto) -> Result<Self, Self::Error> {
        let image = dto.image.map(ImageDto::into_image).transpose()?;

        Ok(FoodRecord {
            id: FoodId::new(dto.id),
            title: dto.title,
            image,
        })
    }
}
