use crate::error::ScoreError;
use bytes::Bytes;
use image::{GenericImageView, ImageFormat, ImageOutputFormat};
use providers::ImagePart;
use std::io::Cursor;
use std::path::Path;

/// A decoded image plus the payload that is shipped to the service.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub format: String,
    pub width: u32,
    pub height: u32,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl LoadedImage {
    pub fn to_part(&self) -> ImagePart {
        ImagePart {
            mime_type: self.mime_type.clone(),
            data: self.bytes.clone(),
        }
    }
}

/// Formats the service accepts as-is; anything else is re-encoded as PNG.
fn passthrough_mime(format: ImageFormat) -> Option<&'static str> {
    match format {
        ImageFormat::Png => Some("image/png"),
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::WebP => Some("image/webp"),
        _ => None,
    }
}

pub fn load(path: &Path) -> Result<LoadedImage, ScoreError> {
    let raw = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ScoreError::ImageNotFound(path.to_path_buf())
        } else {
            ScoreError::ImageRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let reader = image::io::Reader::new(Cursor::new(raw.as_slice()))
        .with_guessed_format()
        .map_err(|source| ScoreError::ImageRead {
            path: path.to_path_buf(),
            source,
        })?;
    let format = reader.format();
    let decoded = reader.decode().map_err(|source| ScoreError::ImageDecode {
        path: path.to_path_buf(),
        source,
    })?;
    let (width, height) = decoded.dimensions();

    let (mime_type, bytes) = match format.and_then(passthrough_mime) {
        Some(mime) => (mime.to_string(), Bytes::from(raw)),
        None => {
            let mut buf = Vec::new();
            decoded
                .write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Png)
                .map_err(|source| ScoreError::ImageDecode {
                    path: path.to_path_buf(),
                    source,
                })?;
            ("image/png".to_string(), Bytes::from(buf))
        }
    };

    Ok(LoadedImage {
        format: format
            .map(|f| format!("{f:?}").to_uppercase())
            .unwrap_or_else(|| "UNKNOWN".to_string()),
        width,
        height,
        mime_type,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use std::fs;

    #[test]
    fn png_is_passed_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.png");
        RgbImage::new(4, 3).save(&path).unwrap();

        let img = load(&path).unwrap();
        assert_eq!(img.format, "PNG");
        assert_eq!((img.width, img.height), (4, 3));
        assert_eq!(img.mime_type, "image/png");
        assert_eq!(img.bytes.as_ref(), fs::read(&path).unwrap().as_slice());
    }

    #[test]
    fn bmp_is_reencoded_as_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys.bmp");
        RgbImage::new(2, 2).save(&path).unwrap();

        let img = load(&path).unwrap();
        assert_eq!(img.format, "BMP");
        assert_eq!(img.mime_type, "image/png");
        assert_eq!(
            image::guess_format(&img.bytes).unwrap(),
            ImageFormat::Png
        );
        assert_eq!(img.to_part().mime_type, "image/png");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("gone.jpg")).unwrap_err();
        assert!(matches!(err, ScoreError::ImageNotFound(_)));
    }

    #[test]
    fn garbage_fails_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.jpg");
        fs::write(&path, b"definitely not pixels").unwrap();
        let err = load(&path).unwrap_err();
        assert!(matches!(err, ScoreError::ImageDecode { .. }));
    }
}
