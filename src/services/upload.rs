use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use crate::error::UploadError;
use crate::models::AvatarSource;

/// Reads a user-picked file entirely in the browser. Resolves once and
/// cannot be cancelled.
pub async fn read_avatar(file: File) -> Result<AvatarSource, UploadError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|err| UploadError {
            name: file.name(),
            reason: format!("{:?}", err),
        })?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    log::debug!("read {} bytes from {}", bytes.len(), file.name());
    Ok(AvatarSource::Upload {
        mime: file.type_(),
        bytes,
    })
}
