//! Attachment classification: decides which Discord attachments go through
//! image extraction.

use serenity::model::channel::Attachment;

/// Classify an attachment as an image by content type or filename extension.
pub fn is_image_attachment(attachment: &Attachment) -> bool {
    is_image(attachment.content_type.as_deref(), &attachment.filename)
}

pub fn is_image(content_type: Option<&str>, filename: &str) -> bool {
    if content_type
        .map(|ct| ct.to_ascii_lowercase().contains("image"))
        .unwrap_or(false)
    {
        return true;
    }
    let lower = filename.to_ascii_lowercase();
    lower.ends_with(".png")
        || lower.ends_with(".jpg")
        || lower.ends_with(".jpeg")
        || lower.ends_with(".webp")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_wins_regardless_of_filename() {
        assert!(is_image(Some("image/png"), "chart"));
        assert!(is_image(Some("IMAGE/JPEG"), "data.bin"));
    }

    #[test]
    fn filename_extension_is_the_fallback() {
        assert!(is_image(None, "setup.PNG"));
        assert!(is_image(None, "chart.webp"));
        assert!(!is_image(None, "notes.txt"));
    }

    #[test]
    fn non_image_content_type_without_extension_is_rejected() {
        assert!(!is_image(Some("application/pdf"), "chart.pdf"));
        assert!(!is_image(Some("video/mp4"), "clip.mp4"));
    }
}
