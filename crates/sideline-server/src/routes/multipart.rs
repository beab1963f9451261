use axum::extract::Multipart;

use crate::error::ApiError;

/// A file pulled out of a multipart form, plus any text fields seen
pub struct UploadedFile {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub content_type: String,
}

/// Read a multipart form containing a `file` part and an optional named
/// text field
///
/// Unknown fields are skipped. Missing `file` is a client error.
pub async fn read_upload(
    mut multipart: Multipart,
    text_field: Option<&str>,
) -> Result<(UploadedFile, Option<String>), ApiError> {
    let mut file: Option<UploadedFile> = None;
    let mut text_value: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to parse multipart form: {e}")))?
    {
        let name = field.name().unwrap_or("").to_owned();

        if name == "file" {
            let filename = field.file_name().unwrap_or("upload.bin").to_owned();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_owned();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read file data: {e}")))?
                .to_vec();

            file = Some(UploadedFile {
                bytes,
                filename,
                content_type,
            });
        } else if text_field == Some(name.as_str()) {
            text_value = Some(
                field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read {name} field: {e}")))?,
            );
        }
    }

    let file = file.ok_or_else(|| ApiError::BadRequest("Missing required 'file' field".to_owned()))?;

    Ok((file, text_value))
}
