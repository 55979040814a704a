/// Check that every address in a comma/whitespace-separated list looks like
/// `local@domain.tld`.
///
/// This is a permissive syntactic check, not RFC validation: a token passes
/// when it has exactly one `@` with something before it and a dotted domain
/// after it. Empty, whitespace-only and separator-only input is invalid --
/// there is nothing to send to.
pub fn is_valid_email_list(input: &str) -> bool {
    let tokens: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.is_empty() {
        return false;
    }

    tokens.iter().all(|token| is_valid_email(token))
}

fn is_valid_email(token: &str) -> bool {
    let Some((local, domain)) = token.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // At least one dot with a character on each side of it.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
