/// Loose address shape check: `local@domain.tld`, no whitespace, exactly one
/// `@`, and a dot in the domain with something on both sides of it.
/// Surrounding whitespace is ignored. Whitespace includes the byte order mark,
/// which browsers treat as a space.
pub fn is_valid_email(input: &str) -> bool {
    let email = input.trim_matches(is_space);
    if email.chars().any(is_space) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // any dot that is neither first nor last in the domain will do
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[inline]
fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}
