use url::form_urlencoded;

/// One snapshot of the compose form fields.
///
/// All values are trimmed on construction; an absent field is the empty
/// string, never `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub to: String,
    pub cc: String,
    pub bcc: String,
    pub subject: String,
    pub body: String,
}

impl FieldValues {
    pub fn new(to: &str, cc: &str, bcc: &str, subject: &str, body: &str) -> Self {
        Self {
            to: to.trim().to_string(),
            cc: cc.trim().to_string(),
            bcc: bcc.trim().to_string(),
            subject: subject.trim().to_string(),
            body: body.trim().to_string(),
        }
    }

    /// Prefill fields from a page URL's query string.
    ///
    /// Recognizes `to`, `cc`, `bcc`, `subject` and `body`; unknown keys are
    /// ignored, the last occurrence of a key wins, and no validation happens
    /// at load time.
    pub fn from_query(query: &str) -> Self {
        let mut values = Self::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim().to_string();
            match key.as_ref() {
                "to" => values.to = value,
                "cc" => values.cc = value,
                "bcc" => values.bcc = value,
                "subject" => values.subject = value,
                "body" => values.body = value,
                _ => {}
            }
        }

        values
    }

    pub fn is_empty(&self) -> bool {
        self.to.is_empty()
            && self.cc.is_empty()
            && self.bcc.is_empty()
            && self.subject.is_empty()
            && self.body.is_empty()
    }
}
