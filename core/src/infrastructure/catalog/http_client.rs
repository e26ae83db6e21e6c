use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::domain::{
    common::{CatalogConfig, entities::app_errors::CoreError},
    food::{
        entities::{FoodId, FoodRecord},
        ports::CatalogClient,
        value_objects::ListFoodsFilter,
    },
};

use super::mappers::{ErrorBodyDto, FoodDto};

/// [`CatalogClient`] talking to the food catalog's REST endpoints.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    base_url: String,
    client: Client,
}

impl HttpCatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, CoreError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CoreError::InvalidConfig(format!("http client: {}", e)))?;

        tracing::info!(base_url = %config.base_url, "Initializing catalog client");

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn list_url(&self, filter: &ListFoodsFilter) -> String {
        match filter.title.as_deref() {
            Some(title) => format!(
                "{}/food?title={}",
                self.base_url,
                urlencoding::encode(title)
            ),
            None => format!("{}/food", self.base_url),
        }
    }

    fn food_url(&self, id: &FoodId) -> String {
        format!("{}/food/{}", self.base_url, urlencoding::encode(id.as_str()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CoreError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!("Catalog request failed: {}", e);
            CoreError::ExternalServiceError(format!("catalog request failed: {}", e))
        })?;

        let response = Self::check_status(response).await?;

        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to parse catalog response: {}", e);
            CoreError::ExternalServiceError(format!("failed to parse catalog response: {}", e))
        })
    }

    async fn check_status(response: Response) -> Result<Response, CoreError> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            let body = response.json::<ErrorBodyDto>().await.unwrap_or_default();
            tracing::debug!(message = %body.message, "Catalog returned 404");
            return Err(CoreError::NotFound(body.message));
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Catalog API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "catalog returned error: {} - {}",
                status, error_text
            )));
        }

        Ok(response)
    }
}

impl CatalogClient for HttpCatalogClient {
    #[instrument(skip(self))]
    async fn list_by_title(&self, filter: ListFoodsFilter) -> Result<Vec<FoodRecord>, CoreError> {
        let foods: Vec<FoodDto> = self.get_json(&self.list_url(&filter)).await?;

        tracing::debug!(count = foods.len(), "Listed foods");

        Ok(foods
            .into_iter()
            .map(FoodDto::into_listing_record)
            .collect())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: FoodId) -> Result<FoodRecord, CoreError> {
        let food: FoodDto = self.get_json(&self.food_url(&id)).await?;

        FoodRecord::try_from(food)
    }
}
