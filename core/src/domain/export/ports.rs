use std::future::Future;
use std::path::PathBuf;

use crate::domain::{common::entities::app_errors::CoreError, export::entities::Blob};

/// Destination for "save as" downloads.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait FileExporter: Send + Sync {
    /// Persist `blob` under `file_name`, returning where it ended up.
    fn save(
        &self,
        blob: Blob,
        file_name: String,
    ) -> impl Future<Output = Result<PathBuf, CoreError>> + Send;
}
