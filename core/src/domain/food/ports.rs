use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::{
        entities::{FoodId, FoodRecord},
        value_objects::ListFoodsFilter,
    },
};

/// Read access to the remote food catalog.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait CatalogClient: Send + Sync {
    /// List catalog entries, optionally narrowed by title on the server side.
    /// Images are never included.
    fn list_by_title(
        &self,
        filter: ListFoodsFilter,
    ) -> impl Future<Output = Result<Vec<FoodRecord>, CoreError>> + Send;

    /// Fetch a single entry with its image.
    /// Fails with `CoreError::NotFound` when the server reports 404.
    fn get_by_id(&self, id: FoodId)
    -> impl Future<Output = Result<FoodRecord, CoreError>> + Send;
}
