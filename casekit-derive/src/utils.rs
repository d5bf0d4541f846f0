/// Convert an identifier to SCREAMING_SNAKE_CASE.
///
/// Underscores are kept, and a new word starts wherever a lowercase letter or digit is followed by
/// an uppercase letter.
pub(crate) fn to_screaming_snake(s: &str) -> String {
    let mut result =
        String::with_capacity(s.len() + s.chars().filter(char::is_ascii_uppercase).count());
    let mut prev_was_lower = false;

    for ch in s.chars() {
        if ch.is_ascii_uppercase() && prev_was_lower {
            result.push('_');
        }
        result.push(ch.to_ascii_uppercase());
        prev_was_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screaming_snake() {
        assert_eq!(to_screaming_snake("http_requests"), "HTTP_REQUESTS");
        assert_eq!(to_screaming_snake("userId"), "USER_ID");
        assert_eq!(to_screaming_snake("v2Name"), "V2_NAME");
        assert_eq!(to_screaming_snake("URL"), "URL");
        assert_eq!(to_screaming_snake("_private"), "_PRIVATE");
    }
}
