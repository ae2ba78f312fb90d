use lazy_regex::regex_is_match;
use strum::{Display, EnumIter, IntoEnumIterator};

/// Platforms the bot accepts links from
#[derive(EnumIter, Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    YouTube,
    Instagram,
    Facebook,
    Twitter,
}

impl Platform {
    pub fn domains(self) -> &'static [&'static str] {
        match self {
            Platform::YouTube => &["youtube.com", "youtu.be"],
            Platform::Instagram => &["instagram.com"],
            Platform::Facebook => &["facebook.com"],
            Platform::Twitter => &["twitter.com"],
        }
    }

    /// First platform whose domain appears anywhere in `url`.
    ///
    /// This is a plain substring test, not host parsing: a domain inside
    /// the path or query string also counts.
    pub fn detect(url: &str) -> Option<Self> {
        Self::iter().find(|platform| platform.domains().iter().any(|d| url.contains(d)))
    }
}

pub fn is_supported(url: &str) -> bool {
    Platform::detect(url).is_some()
}

/// Whether the message carries an `http://` or `https://` link anywhere
pub fn contains_url(text: &str) -> bool {
    regex_is_match!(r"https?://", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_supported() {
        assert!(is_supported("https://youtu.be/abc123"));
        assert!(is_supported("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_supported("https://www.instagram.com/reel/xyz/"));
        assert!(is_supported("https://facebook.com/watch/?v=1"));
        assert!(is_supported("http://twitter.com/user/status/1"));

        assert!(!is_supported("https://vimeo.com/abc"));
        assert!(!is_supported("https://x.com/user/status/1"));
        assert!(!is_supported(""));
    }

    #[test]
    fn domain_anywhere_in_the_url_counts() {
        assert!(is_supported("https://example.com/redirect?to=youtube.com"));
        assert!(is_supported("see instagram.com later"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!is_supported("https://YOUTUBE.COM/watch?v=1"));
    }

    #[test]
    fn test_detect() {
        assert_eq!(
            Platform::detect("https://youtu.be/abc123"),
            Some(Platform::YouTube)
        );
        assert_eq!(
            Platform::detect("https://m.facebook.com/story"),
            Some(Platform::Facebook)
        );
        assert_eq!(Platform::detect("https://vimeo.com/abc"), None);
        assert_eq!(Platform::YouTube.to_string(), "YouTube");
    }

    #[test]
    fn test_contains_url() {
        assert!(contains_url("https://vimeo.com/abc"));
        assert!(contains_url("look at this http://example.com"));
        assert!(contains_url("http://"));

        assert!(!contains_url("youtube.com/watch?v=1"));
        assert!(!contains_url("ftp://example.com"));
        assert!(!contains_url("hello"));
    }
}
