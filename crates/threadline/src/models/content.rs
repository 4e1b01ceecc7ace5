use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// One part of a multimodal conversation turn, as stored in the log
pub enum ContentPart {
    Text(TextPart),
    Image(ImageReference),
    File(FileReference),
    /// Marker for an image the assistant generated; the pixels live elsewhere
    GeneratedImage,
    /// Any part kind this version does not know about
    #[serde(other)]
    Unknown,
}

impl ContentPart {
    pub fn text<S: Into<String>>(text: S) -> Self {
        ContentPart::Text(TextPart {
            text: Some(text.into()),
        })
    }

    pub fn image<S: Into<String>>(uri: S) -> Self {
        ContentPart::Image(ImageReference {
            uri: Some(uri.into()),
        })
    }

    pub fn file<S: Into<String>>(file_id: S) -> Self {
        ContentPart::File(FileReference {
            file_id: Some(file_id.into()),
        })
    }

    pub fn generated_image() -> Self {
        ContentPart::GeneratedImage
    }

    /// Get the text if this is a Text variant, defaulting a missing text to ""
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentPart::Text(part) => Some(part.text.as_deref().unwrap_or_default()),
            _ => None,
        }
    }

    /// Get the image uri if this is an Image variant with a usable reference
    pub fn image_uri(&self) -> Option<&str> {
        match self {
            ContentPart::Image(image) => non_empty(image.uri.as_deref()),
            _ => None,
        }
    }

    /// Get the file id if this is a File variant with a usable reference
    pub fn file_id(&self) -> Option<&str> {
        match self {
            ContentPart::File(file) => non_empty(file.file_id.as_deref()),
            _ => None,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
