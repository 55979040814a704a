use serde::{Deserialize, Serialize};

/// UI language. Hebrew is the primary variant; everything else falls back
/// to English.
///
/// A `Locale` is an explicit immutable value passed into every lookup --
/// there is no ambient language state, and switching language is just
/// calling again with the other value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "he")]
    Hebrew,
    #[serde(rename = "en")]
    English,
}

/// Semantic keys for every user-visible string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    MailtoLabel,
    GmailLabel,
    CopiedMailto,
    CopiedGmail,
    CopyFailed,
    InvalidAddressList,
}

impl Locale {
    /// Pick a locale from a host-reported language tag (`he`, `he-IL`,
    /// `en_US.UTF-8`...). Hebrew when the tag starts with `he`, English for
    /// anything else including no tag at all.
    pub fn detect(tag: Option<&str>) -> Self {
        match tag {
            Some(tag) if tag.trim().to_ascii_lowercase().starts_with("he") => Self::Hebrew,
            _ => Self::English,
        }
    }

    pub fn text(&self, message: Message) -> &'static str {
        match self {
            Self::Hebrew => match message {
                Message::MailtoLabel => "קישור Mailto",
                Message::GmailLabel => "קישור Gmail",
                Message::CopiedMailto => "קישור המייל הועתק ללוח!",
                Message::CopiedGmail => "קישור Gmail הועתק ללוח!",
                Message::CopyFailed => "ההעתקה נכשלה, נסו שוב",
                Message::InvalidAddressList => "כתובת אימייל לא תקינה",
            },
            Self::English => match message {
                Message::MailtoLabel => "Mailto link",
                Message::GmailLabel => "Gmail link",
                Message::CopiedMailto => "Mailto link copied to clipboard!",
                Message::CopiedGmail => "Gmail link copied to clipboard!",
                Message::CopyFailed => "Copy failed, please try again",
                Message::InvalidAddressList => "Invalid email address",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_hebrew_tags() {
        assert_eq!(Locale::detect(Some("he")), Locale::Hebrew);
        assert_eq!(Locale::detect(Some("he-IL")), Locale::Hebrew);
        assert_eq!(Locale::detect(Some("HE_IL.UTF-8")), Locale::Hebrew);
    }

    #[test]
    fn test_detect_defaults_to_english() {
        assert_eq!(Locale::detect(None), Locale::English);
        assert_eq!(Locale::detect(Some("en_US.UTF-8")), Locale::English);
        assert_eq!(Locale::detect(Some("fr")), Locale::English);
        assert_eq!(Locale::detect(Some("")), Locale::English);
    }

    #[test]
    fn test_every_message_has_both_variants() {
        let messages = [
            Message::MailtoLabel,
            Message::GmailLabel,
            Message::CopiedMailto,
            Message::CopiedGmail,
            Message::CopyFailed,
            Message::InvalidAddressList,
        ];

        for message in messages {
            assert!(!Locale::Hebrew.text(message).is_empty());
            assert!(!Locale::English.text(message).is_empty());
            assert_ne!(
                Locale::Hebrew.text(message),
                Locale::English.text(message),
                "{message:?} should differ between languages"
            );
        }
    }

    #[test]
    fn test_serde_tags() {
        #[derive(Deserialize)]
        struct Wrapper {
            language: Locale,
        }

        let wrapper: Wrapper = toml::from_str("language = \"he\"").unwrap();
        assert_eq!(wrapper.language, Locale::Hebrew);

        let wrapper: Wrapper = toml::from_str("language = \"en\"").unwrap();
        assert_eq!(wrapper.language, Locale::English);
    }
}
