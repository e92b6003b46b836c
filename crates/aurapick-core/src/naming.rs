//! Download file names for exported crops.

/// Prefix shared by every exported file.
pub const EXPORT_PREFIX: &str = "aurapick";

/// Slug used when no subject is available.
const FALLBACK_SUBJECT: &str = "edit";

/// Build the download name for an exported crop.
///
/// The subject (typically the first vibe tag of the verdict) is slugified:
/// lowercased, with every run of non-alphanumeric characters collapsed to a
/// single `-`.
///
/// ```text
/// Some("Dark Feminine") -> aurapick-dark-feminine-highres.jpg
/// None                  -> aurapick-edit-highres.jpg
/// ```
pub fn export_file_name(subject: Option<&str>) -> String {
    let slug = subject.map(slugify).unwrap_or_default();
    let slug = if slug.is_empty() {
        FALLBACK_SUBJECT
    } else {
        slug.as_str()
    };
    format!("{EXPORT_PREFIX}-{slug}-highres.jpg")
}

fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_is_slugified() {
        assert_eq!(
            export_file_name(Some("Dark Feminine")),
            "aurapick-dark-feminine-highres.jpg"
        );
        assert_eq!(
            export_file_name(Some("  Face Card!! ")),
            "aurapick-face-card-highres.jpg"
        );
    }

    #[test]
    fn test_missing_subject_falls_back() {
        assert_eq!(export_file_name(None), "aurapick-edit-highres.jpg");
        assert_eq!(export_file_name(Some("")), "aurapick-edit-highres.jpg");
        assert_eq!(export_file_name(Some("!!!")), "aurapick-edit-highres.jpg");
    }

    #[test]
    fn test_unicode_subject() {
        assert_eq!(export_file_name(Some("Café Vibe")), "aurapick-café-vibe-highres.jpg");
    }
}
