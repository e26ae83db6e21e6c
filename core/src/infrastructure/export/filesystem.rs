use std::path::PathBuf;

use tokio::io::AsyncWriteExt;
use tracing::instrument;

use crate::domain::{
    common::{ExportConfig, entities::app_errors::CoreError},
    export::{entities::Blob, ports::FileExporter},
};

/// Saves downloads into a local directory.
#[derive(Debug, Clone)]
pub struct FilesystemExporter {
    download_dir: PathBuf,
}

impl FilesystemExporter {
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            download_dir: config.download_dir.clone(),
        }
    }
}

impl FileExporter for FilesystemExporter {
    #[instrument(skip(self, blob), fields(size = blob.len(), content_type = %blob.content_type()))]
    async fn save(&self, blob: Blob, file_name: String) -> Result<PathBuf, CoreError> {
        tokio::fs::create_dir_all(&self.download_dir)
            .await
            .map_err(|e| {
                CoreError::ExportFailed(format!("{}: {}", self.download_dir.display(), e))
            })?;

        let path = self.download_dir.join(&file_name);
        let mut file = tokio::fs::File::create(&path)
            .await
            .map_err(|e| CoreError::ExportFailed(format!("{}: {}", path.display(), e)))?;

        // Written part by part so the payload is never reassembled in memory.
        for part in blob.parts() {
            file.write_all(part)
                .await
                .map_err(|e| CoreError::ExportFailed(format!("{}: {}", path.display(), e)))?;
        }

        file.flush()
            .await
            .map_err(|e| CoreError::ExportFailed(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), "Wrote export file");

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::domain::export::{
        codec::encode_image, entities::PNG_CONTENT_TYPE, services::export_as_file,
    };

    #[tokio::test]
    async fn test_save_writes_all_parts_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FilesystemExporter::new(&ExportConfig {
            download_dir: dir.path().join("downloads"),
        });

        let blob = Blob::new(
            vec![Bytes::from_static(b"ab"), Bytes::from_static(b"cd")],
            PNG_CONTENT_TYPE,
        );
        let path = exporter.save(blob, "x.png".to_string()).await.unwrap();

        assert_eq!(path, dir.path().join("downloads").join("x.png"));
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"abcd");
    }

    #[tokio::test]
    async fn test_export_as_file_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FilesystemExporter::new(&ExportConfig {
            download_dir: dir.path().to_path_buf(),
        });

        let data: Vec<u8> = (0..=255u8).cycle().take(1025).collect();
        let path = export_as_file(&exporter, &encode_image(&data), PNG_CONTENT_TYPE, "Pad Thai")
            .await
            .unwrap();

        assert_eq!(path.file_name().unwrap(), "Pad Thai.png");
        assert_eq!(tokio::fs::read(&path).await.unwrap(), data);
    }
}
