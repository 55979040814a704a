use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except alphanumerics and `- _ . ! ~ * ' ( )` is escaped, so a
/// space becomes `%20`, a newline `%0A`, `+` `%2B` and `@` `%40`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Turn every encoded `@` back into a literal one. Mail clients that split
/// recipient lists on a raw `@` choke on `%40`, so address-valued parameters
/// keep their `@` signs readable.
pub fn restore_at_signs(value: &str) -> String {
    value.replace("%40", "@")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_space_and_newline() {
        assert_eq!(encode_component("Hi there"), "Hi%20there");
        assert_eq!(encode_component("Line1\nLine2"), "Line1%0ALine2");
    }

    #[test]
    fn test_encode_reserved_characters() {
        assert_eq!(encode_component("a+b@c.com"), "a%2Bb%40c.com");
        assert_eq!(encode_component("x,y"), "x%2Cy");
        assert_eq!(encode_component("a&b=c?d"), "a%26b%3Dc%3Fd");
    }

    #[test]
    fn test_encode_keeps_unreserved_marks() {
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
    }

    #[test]
    fn test_encode_utf8() {
        // Hebrew is escaped byte by byte.
        assert_eq!(encode_component("שלום"), "%D7%A9%D7%9C%D7%95%D7%9D");
    }

    #[test]
    fn test_restore_at_signs_is_global() {
        assert_eq!(
            restore_at_signs("x%40y.com%2Cz%40w.com"),
            "x@y.com%2Cz@w.com"
        );
        assert_eq!(restore_at_signs("no-at-here"), "no-at-here");
    }
}
