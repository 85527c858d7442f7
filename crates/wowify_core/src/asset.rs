use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// Uploads above this size are rejected before anything is submitted.
pub const MAX_UPLOAD_BYTES: u64 = 5_000_000;

/// Notice shown when the picked file exceeds [`MAX_UPLOAD_BYTES`].
pub const OVERSIZE_NOTICE: &str = "🙊 Oh no, your file is larger than 5MB!";

/// Locally-built `data:` URL for displaying the picked image without a
/// network round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRef(String);

impl PreviewRef {
    pub fn as_data_url(&self) -> &str {
        &self.0
    }
}

/// A validated image file, ready for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedAsset {
    pub bytes: Vec<u8>,
    pub preview: PreviewRef,
    pub derived_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    TooLarge { max_bytes: u64, actual: u64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::TooLarge { max_bytes, actual } => {
                write!(f, "file too large (max {max_bytes}, actual {actual})")
            }
        }
    }
}

/// Validates a picked file and derives its emoji name and preview handle.
///
/// The derived name is `wow-` plus the file name minus its last extension
/// segment (`photo.png` becomes `wow-photo`); names without a dot are used
/// whole.
pub fn validate(file_name: &str, bytes: Vec<u8>) -> Result<UploadedAsset, ValidationError> {
    let actual = bytes.len() as u64;
    if actual > MAX_UPLOAD_BYTES {
        return Err(ValidationError::TooLarge {
            max_bytes: MAX_UPLOAD_BYTES,
            actual,
        });
    }

    let stem = match file_name.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => file_name,
    };
    let derived_name = format!("wow-{stem}");

    let preview = PreviewRef(format!(
        "data:{};base64,{}",
        mime_for(file_name),
        BASE64.encode(&bytes)
    ));

    Ok(UploadedAsset {
        bytes,
        preview,
        derived_name,
    })
}

fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .unwrap_or_default();
    match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_file_at_exact_limit() {
        let bytes = vec![0u8; MAX_UPLOAD_BYTES as usize];
        let asset = validate("photo.png", bytes).expect("at limit is allowed");
        assert_eq!(asset.derived_name, "wow-photo");
    }

    #[test]
    fn rejects_file_over_limit() {
        let bytes = vec![0u8; MAX_UPLOAD_BYTES as usize + 1];
        let err = validate("big.png", bytes).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLarge {
                max_bytes: MAX_UPLOAD_BYTES,
                actual: MAX_UPLOAD_BYTES + 1,
            }
        );
    }

    #[test]
    fn derived_name_strips_last_extension_segment() {
        let asset = validate("cat.jpg", vec![1, 2, 3]).unwrap();
        assert_eq!(asset.derived_name, "wow-cat");

        let asset = validate("archive.tar.gz", vec![1]).unwrap();
        assert_eq!(asset.derived_name, "wow-archive.tar");

        let asset = validate("noext", vec![1]).unwrap();
        assert_eq!(asset.derived_name, "wow-noext");
    }

    #[test]
    fn preview_is_a_data_url_of_the_bytes() {
        let asset = validate("dot.png", vec![0xAA]).unwrap();
        assert_eq!(asset.preview.as_data_url(), "data:image/png;base64,qg==");
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        let asset = validate("weird.xyz", vec![0]).unwrap();
        assert!(asset
            .preview
            .as_data_url()
            .starts_with("data:application/octet-stream;base64,"));
    }
}
