use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::{
    domain::{
        common::{FoodFinderConfig, entities::app_errors::CoreError},
        export::{entities::PNG_CONTENT_TYPE, ports::FileExporter, services::export_as_file},
        food::ports::CatalogClient,
        workflow::{
            debounce::Debouncer,
            entities::DisplayedFood,
            services::perform,
            value_objects::{Command, Completion},
        },
    },
    infrastructure::{catalog::HttpCatalogClient, export::FilesystemExporter},
};

pub type FoodFinderService = Service<HttpCatalogClient, FilesystemExporter>;

/// The adapters a front-end needs next to its [`SelectionWorkflow`].
///
/// [`SelectionWorkflow`]: crate::domain::workflow::services::SelectionWorkflow
pub struct Service<C, E>
where
    C: CatalogClient,
    E: FileExporter,
{
    catalog: Arc<C>,
    exporter: Arc<E>,
    debounce: Duration,
}

impl<C, E> Clone for Service<C, E>
where
    C: CatalogClient,
    E: FileExporter,
{
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            exporter: Arc::clone(&self.exporter),
            debounce: self.debounce,
        }
    }
}

impl<C, E> Service<C, E>
where
    C: CatalogClient,
    E: FileExporter,
{
    pub fn new(catalog: C, exporter: E, debounce: Duration) -> Self {
        Self {
            catalog: Arc::new(catalog),
            exporter: Arc::new(exporter),
            debounce,
        }
    }

    /// A keystroke debouncer configured with this service's quiet period.
    pub fn debouncer<T>(&self) -> Debouncer<T> {
        Debouncer::new(self.debounce)
    }

    pub async fn perform(&self, command: Command) -> Completion {
        perform(self.catalog.as_ref(), command).await
    }

    /// Save the displayed image as a PNG named after its title.
    pub async fn export_displayed(&self, food: &DisplayedFood) -> Result<PathBuf, CoreError> {
        export_as_file(
            self.exporter.as_ref(),
            &food.image_base64,
            PNG_CONTENT_TYPE,
            &food.title,
        )
        .await
    }
}

pub fn create_service(config: FoodFinderConfig) -> Result<FoodFinderService, CoreError> {
    let catalog = HttpCatalogClient::new(&config.catalog)?;
    let exporter = FilesystemExporter::new(&config.export);

    Ok(Service::new(catalog, exporter, config.debounce))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::{
        common::{CatalogConfig, ExportConfig},
        export::{codec::encode_image, ports::MockFileExporter},
        food::{
            entities::{FoodImage, FoodRecord},
            ports::MockCatalogClient,
        },
        workflow::services::SelectionWorkflow,
    };

    #[tokio::test]
    async fn test_search_select_and_export() {
        let mut catalog = MockCatalogClient::new();
        catalog.expect_list_by_title().times(1).returning(|_| {
            Box::pin(async {
                Ok::<_, CoreError>(vec![
                    FoodRecord::new("1", "Pizza"),
                    FoodRecord::new("2", "Salad"),
                ])
            })
        });
        catalog.expect_get_by_id().times(1).returning(|id| {
            Box::pin(async move {
                Ok::<_, CoreError>(
                    FoodRecord::new(id.as_str(), "Pizza").with_image(FoodImage::new(&b"png"[..])),
                )
            })
        });

        let mut exporter = MockFileExporter::new();
        exporter
            .expect_save()
            .withf(|blob, name| name == "Pizza.png" && blob.to_bytes().to_vec() == b"png".to_vec())
            .times(1)
            .returning(|_, name| Box::pin(async move { Ok::<_, CoreError>(PathBuf::from(name)) }));

        let service = Service::new(catalog, exporter, Duration::from_millis(200));
        let mut workflow = SelectionWorkflow::new();

        let command = workflow.on_query_changed("piz").unwrap();
        workflow.apply(service.perform(command).await);
        assert_eq!(workflow.suggestions().len(), 1);

        let command = workflow.press_enter().unwrap();
        workflow.apply(service.perform(command).await);

        let food = workflow.displayed().unwrap();
        let path = service.export_displayed(food).await.unwrap();
        assert_eq!(path, PathBuf::from("Pizza.png"));
    }

    #[tokio::test]
    async fn test_export_displayed_propagates_exporter_failure() {
        let mut exporter = MockFileExporter::new();
        exporter.expect_save().returning(|_, _| {
            Box::pin(async { Err::<PathBuf, _>(CoreError::ExportFailed("disk full".to_string())) })
        });

        let service = Service::new(MockCatalogClient::new(), exporter, Duration::ZERO);
        let food = DisplayedFood {
            title: "Soup".to_string(),
            image_base64: encode_image(b"soup"),
            generation: 1,
            fetched_at: Utc::now(),
        };

        assert_eq!(
            service.export_displayed(&food).await,
            Err(CoreError::ExportFailed("disk full".to_string()))
        );
    }

    #[test]
    fn test_create_service_validates_catalog_url() {
        let config = FoodFinderConfig {
            catalog: CatalogConfig {
                base_url: "::not a url::".to_string(),
                ..Default::default()
            },
            export: ExportConfig::default(),
            debounce: Duration::from_millis(200),
        };

        assert!(matches!(
            create_service(config),
            Err(CoreError::InvalidConfig(_))
        ));
    }
}
