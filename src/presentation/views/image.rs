//! Contentful Images API URLs: `{src}?w={width}&q={quality}`.

use serde::Serialize;

pub const PLACEHOLDER_SRC: &str = "/placeholder.svg";
pub const DEFAULT_QUALITY: u8 = 75;
pub const DEFAULT_WIDTH: u32 = 1200;
const SRCSET_WIDTHS: [u32; 4] = [640, 828, 1200, 1920];

pub fn image_url(src: &str, width: u32, quality: Option<u8>) -> String {
    if src.is_empty() {
        return PLACEHOLDER_SRC.to_string();
    }
    let separator = if src.contains('?') { '&' } else { '?' };
    let quality = quality.unwrap_or(DEFAULT_QUALITY);
    format!("{src}{separator}w={width}&q={quality}")
}

pub fn srcset(src: &str) -> Option<String> {
    if src.is_empty() {
        return None;
    }
    Some(
        SRCSET_WIDTHS
            .iter()
            .map(|width| format!("{} {width}w", image_url(src, *width, None)))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

/// A responsive cover image as the templates consume it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ImageView {
    pub src: String,
    pub srcset: Option<String>,
    pub alt: String,
}

impl ImageView {
    pub fn cover(src: Option<&str>, alt: &str) -> Self {
        let src = src.unwrap_or_default();
        Self {
            src: image_url(src, DEFAULT_WIDTH, None),
            srcset: srcset(src),
            alt: alt.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_width_and_quality() {
        assert_eq!(
            image_url("https://images.ctfassets.net/a.png", 640, None),
            "https://images.ctfassets.net/a.png?w=640&q=75"
        );
        assert_eq!(
            image_url("https://images.ctfassets.net/a.png?fm=webp", 640, Some(90)),
            "https://images.ctfassets.net/a.png?fm=webp&w=640&q=90"
        );
    }

    #[test]
    fn missing_source_falls_back_to_placeholder() {
        let view = ImageView::cover(None, "Cover");
        assert_eq!(view.src, PLACEHOLDER_SRC);
        assert!(view.srcset.is_none());
    }

    #[test]
    fn srcset_lists_every_width() {
        let set = srcset("https://x/a.png").unwrap();
        assert_eq!(set.matches("w, ").count(), SRCSET_WIDTHS.len() - 1);
        assert!(set.ends_with("https://x/a.png?w=1920&q=75 1920w"));
    }
}
