use super::MediaError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Ссылка на изображение: обычный URL или встроенный data URL после загрузки.
/// Пустая строка означает отсутствие изображения.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaRef(String);

impl MediaRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Загружено файлом (data URL), а не введено как адрес
    pub fn is_embedded(&self) -> bool {
        self.0.starts_with("data:")
    }
}

impl From<&MediaUpload> for MediaRef {
    fn from(upload: &MediaUpload) -> Self {
        Self(upload.to_data_url())
    }
}

/// Файл, выбранный в форме, до подтверждения редактора
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl MediaUpload {
    /// Принимаются только `image/*`
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, MediaError> {
        let mime_type = mime_type.into();
        if !mime_type.starts_with("image/") {
            return Err(MediaError::NotAnImage { mime: mime_type });
        }
        Ok(Self {
            file_name: file_name.into(),
            mime_type,
            bytes,
        })
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_image() {
        let err = MediaUpload::new("notes.pdf", "application/pdf", vec![1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            MediaError::NotAnImage {
                mime: "application/pdf".to_string()
            }
        );
    }

    #[test]
    fn test_data_url() {
        let upload = MediaUpload::new("dot.png", "image/png", b"abc".to_vec()).unwrap();
        let media = MediaRef::from(&upload);
        assert_eq!(media.as_str(), "data:image/png;base64,YWJj");
        assert!(media.is_embedded());
        assert!(!MediaRef::new("/Bali.jpg").is_embedded());
        assert!(MediaRef::default().is_empty());
    }
}
