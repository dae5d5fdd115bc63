use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::ValidationError;

const BUBBLE_COLORS: [&str; 16] = [
    "#EF4444", "#F97316", "#F59E0B", "#EAB308", "#84CC16", "#22C55E", "#10B981", "#14B8A6",
    "#06B6D4", "#0EA5E9", "#3B82F6", "#6366F1", "#8B5CF6", "#A855F7", "#D946EF", "#EC4899",
];

/// Where a new avatar comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AvatarSource {
    /// One of the builtin preset image paths.
    Preset(String),
    /// Raw bytes of a local image file picked by the user.
    Upload { mime: String, bytes: Vec<u8> },
}

impl AvatarSource {
    /// Turns the source into the value stored in `User::avatar`.
    pub fn into_avatar(self) -> Result<String, ValidationError> {
        match self {
            Self::Preset(path) if path.trim().is_empty() => Err(ValidationError::EmptyAvatar),
            Self::Preset(path) => Ok(path),
            Self::Upload { mime, bytes } => data_url(&mime, &bytes),
        }
    }
}

/// Encodes image bytes as an embeddable `data:` URL.
pub fn data_url(mime: &str, bytes: &[u8]) -> Result<String, ValidationError> {
    if !mime.starts_with("image/") {
        return Err(ValidationError::NotAnImage(mime.to_owned()));
    }
    if bytes.is_empty() {
        return Err(ValidationError::EmptyAvatar);
    }
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

/// Background colour for the initial-letter bubble, stable per name.
pub fn bubble_color(name: &str) -> &'static str {
    let index = name.chars().map(|c| c as usize).sum::<usize>() % BUBBLE_COLORS.len();
    BUBBLE_COLORS[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn upload_becomes_base64_data_url() {
        let source = AvatarSource::Upload {
            mime: "image/png".into(),
            bytes: b"hello".to_vec(),
        };
        assert_eq!(
            source.into_avatar().unwrap(),
            "data:image/png;base64,aGVsbG8="
        );
    }

    #[rstest]
    #[case("text/plain", b"x".as_slice(), ValidationError::NotAnImage("text/plain".into()))]
    #[case("", b"x".as_slice(), ValidationError::NotAnImage(String::new()))]
    #[case("image/jpeg", b"".as_slice(), ValidationError::EmptyAvatar)]
    fn rejects_unusable_uploads(
        #[case] mime: &str,
        #[case] bytes: &[u8],
        #[case] expected: ValidationError,
    ) {
        assert_eq!(data_url(mime, bytes), Err(expected));
    }

    #[test]
    fn preset_is_stored_as_path() {
        let source = AvatarSource::Preset("avatars/sam.svg".into());
        assert_eq!(source.into_avatar().unwrap(), "avatars/sam.svg");
        assert_eq!(
            AvatarSource::Preset(" ".into()).into_avatar(),
            Err(ValidationError::EmptyAvatar)
        );
    }

    #[test]
    fn bubble_color_is_deterministic() {
        assert_eq!(bubble_color("alice"), bubble_color("alice"));
        assert!(BUBBLE_COLORS.contains(&bubble_color("")));
    }
}
