use std::path::PathBuf;

use tracing::instrument;

use crate::domain::{
    common::entities::app_errors::CoreError,
    export::{
        codec::b64_to_blob,
        entities::PNG_CONTENT_TYPE,
        ports::FileExporter,
    },
};

const FALLBACK_FILE_NAME: &str = "food";

/// Decode `base64` and hand it to `exporter` as a file named after
/// `suggested_name`.
#[instrument(skip(exporter, base64), fields(size = base64.len()))]
pub async fn export_as_file<E: FileExporter>(
    exporter: &E,
    base64: &str,
    content_type: &str,
    suggested_name: &str,
) -> Result<PathBuf, CoreError> {
    let blob = b64_to_blob(base64, content_type)?;
    let file_name = file_name_for(suggested_name, content_type);

    let path = exporter.save(blob, file_name).await?;

    tracing::info!(path = %path.display(), "Image exported");

    Ok(path)
}

/// Turn a food title into a file name that cannot escape the download
/// directory.
pub fn file_name_for(title: &str, content_type: &str) -> String {
    let cleaned: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let mut name = cleaned.trim_matches('.').to_string();
    if name.is_empty() {
        name = FALLBACK_FILE_NAME.to_string();
    }

    if content_type == PNG_CONTENT_TYPE && !name.to_ascii_lowercase().ends_with(".png") {
        name.push_str(".png");
    }

    name
}
