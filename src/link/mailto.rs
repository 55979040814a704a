use super::LinkTarget;
use super::encode::{encode_component, restore_at_signs};
use crate::compose::FieldValues;

/// Serialize field values into a `mailto:` URI.
///
/// The recipient goes into the path segment untouched -- encoding it breaks
/// clients that split the list on raw commas and `@`. Optional fields are
/// appended as query parameters in fixed order (`cc`, `bcc`, `subject`,
/// `body`), present-only. No validation happens here; gating is the caller's
/// job.
pub fn build_mailto(values: &FieldValues) -> LinkTarget {
    let mut params: Vec<String> = Vec::new();

    if !values.cc.is_empty() {
        params.push(format!(
            "cc={}",
            restore_at_signs(&encode_component(&values.cc))
        ));
    }
    if !values.bcc.is_empty() {
        params.push(format!(
            "bcc={}",
            restore_at_signs(&encode_component(&values.bcc))
        ));
    }
    if !values.subject.is_empty() {
        params.push(format!("subject={}", encode_component(&values.subject)));
    }
    if !values.body.is_empty() {
        params.push(format!("body={}", encode_component(&values.body)));
    }

    let mut link = format!("mailto:{}", values.to);
    if !params.is_empty() {
        link.push('?');
        link.push_str(&params.join("&"));
    }

    LinkTarget::Mailto(link)
}
