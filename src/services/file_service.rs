use wasm_bindgen::JsValue;
use web_sys::{File, FormData};
use crate::config::CONFIG;
use crate::models::{ApiEnvelope, UploadPayload};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;

const UPLOAD_FIELD: &str = "file";

/// Comprobar el archivo antes de subirlo
pub fn validate_upload(name: &str, size: u64, max_bytes: u64) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Selecciona un archivo".to_string());
    }
    if size == 0 {
        return Err(format!("El archivo '{}' está vacío", name));
    }
    if size > max_bytes {
        return Err(format!(
            "El archivo '{}' supera el máximo de {} MB",
            name,
            max_bytes / (1024 * 1024)
        ));
    }
    Ok(())
}

pub async fn upload_file(api: &ApiClient, file: &File) -> Result<ApiEnvelope<UploadPayload>, ApiError> {
    validate_upload(&file.name(), file.size() as u64, CONFIG.max_upload_bytes)
        .map_err(ApiError::Build)?;

    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(js_error)?;

    log::info!("📤 Subiendo archivo: {} ({} bytes)", file.name(), file.size());
    api.upload("/file/upload", form).await
}

fn js_error(e: JsValue) -> ApiError {
    ApiError::Build(format!("{:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_oversized_files() {
        assert!(validate_upload("", 10, 100).is_err());
        assert!(validate_upload("a.txt", 0, 100).is_err());
        assert!(validate_upload("a.txt", 101, 100).is_err());
        assert!(validate_upload("a.txt", 100, 100).is_ok());
    }
}
