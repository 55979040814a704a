use super::LinkTarget;
use super::encode::encode_component;
use crate::compose::FieldValues;

/// Gmail web-compose endpoint; `view=cm` opens the compose view and `fs=1`
/// makes it full screen. Always present, always first.
pub const GMAIL_COMPOSE_BASE: &str = "https://mail.google.com/mail/u/0/?view=cm&fs=1";

/// Serialize field values into a Gmail compose URL.
///
/// Unlike mailto, every value here is an opaque query parameter and gets
/// fully percent-encoded -- including `@` in the recipient lists. Fields are
/// appended present-only in fixed order `to`, `cc`, `bcc`, `su`, `body`.
pub fn build_gmail_compose(values: &FieldValues) -> LinkTarget {
    let mut url = String::from(GMAIL_COMPOSE_BASE);

    for (key, value) in [
        ("to", &values.to),
        ("cc", &values.cc),
        ("bcc", &values.bcc),
        ("su", &values.subject),
        ("body", &values.body),
    ] {
        if !value.is_empty() {
            url.push('&');
            url.push_str(key);
            url.push('=');
            url.push_str(&encode_component(value));
        }
    }

    LinkTarget::GmailCompose(url)
}
