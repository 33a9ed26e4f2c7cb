use base64::{engine::general_purpose, Engine as _};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Read a file and return its bytes as standard padded base64.
pub fn encode_image_to_base64(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(general_purpose::STANDARD.encode(bytes))
}

/// Build the `data:` URL an `input_image` part carries.
pub fn image_data_url(path: &Path) -> Result<String> {
    let payload = encode_image_to_base64(path)?;
    Ok(format!("data:{};base64,{}", mime_type_for(path), payload))
}

fn mime_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}
