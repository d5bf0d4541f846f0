use std::{fmt, str::FromStr};

/// The case convention an identifier is written in.
///
/// Detection is first-match-wins, in the order the variants are declared: a string that
/// qualifies as [`Case::Camel`] is never reported as kebab or snake, even if it also contains
/// separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    /// `fooBarBaz`
    Camel,
    /// `foo-bar-baz`
    Kebab,
    /// `foo_bar_baz`, and any plain run of letters and digits such as `foo`.
    Snake,
    /// No recognized convention. Empty strings land here.
    None,
}

impl Case {
    /// The convertible cases, in detection priority order.
    pub const ALL: [Case; 3] = [Case::Camel, Case::Kebab, Case::Snake];

    /// Classify `input`.
    ///
    /// # Example
    /// ```rust
    /// use casekit::Case;
    ///
    /// assert_eq!(Case::detect("fooBarBaz"), Case::Camel);
    /// assert_eq!(Case::detect("foo-bar-baz"), Case::Kebab);
    /// assert_eq!(Case::detect("foo_bar_baz"), Case::Snake);
    /// assert_eq!(Case::detect("foo"), Case::Snake);
    /// assert_eq!(Case::detect(""), Case::None);
    /// ```
    pub fn detect(input: &str) -> Self {
        if is_camel(input) {
            Self::Camel
        } else if is_kebab(input) {
            Self::Kebab
        } else if is_snake(input) {
            Self::Snake
        } else {
            Self::None
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Camel => "camel",
            Self::Kebab => "kebab",
            Self::Snake => "snake",
            Self::None => "none",
        }
    }

    /// Returns `true` if no convention was recognized.
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Case {
    type Err = ParseCaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "camel" => Ok(Self::Camel),
            "kebab" | "dashed" => Ok(Self::Kebab),
            "snake" | "underscore" => Ok(Self::Snake),
            "none" => Ok(Self::None),
            _ => Err(ParseCaseError(s.to_owned())),
        }
    }
}

/// Returned when a string does not name a [`Case`].
#[derive(Clone, PartialEq, Eq)]
pub struct ParseCaseError(String);

impl ParseCaseError {
    /// The rejected label.
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl std::error::Error for ParseCaseError {}

impl fmt::Display for ParseCaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unsupported case '{}'. Use camel, kebab, snake, or none",
            self.0
        )
    }
}

impl fmt::Debug for ParseCaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// A case transition is an uppercase letter anywhere past the first character, or a digit
/// directly after a letter or digit (`foo2`, `v1`).
fn is_camel(input: &str) -> bool {
    if input.chars().skip(1).any(|ch| ch.is_ascii_uppercase()) {
        return true;
    }

    input
        .as_bytes()
        .windows(2)
        .any(|pair| pair[0].is_ascii_alphanumeric() && pair[1].is_ascii_digit())
}

/// One or more alphanumeric segments joined by single hyphens, with at least one hyphen.
fn is_kebab(input: &str) -> bool {
    let mut segments = 0;
    for segment in input.split('-') {
        if segment.is_empty() || !segment.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            return false;
        }
        segments += 1;
    }

    segments > 1
}

fn is_snake(input: &str) -> bool {
    !input.is_empty()
        && input
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_priority() {
        // Camel wins over kebab and snake.
        assert_eq!(Case::detect("foo-Bar"), Case::Camel);
        assert_eq!(Case::detect("foo_Bar"), Case::Camel);
        assert_eq!(Case::detect("FooBar"), Case::Camel);
        assert_eq!(Case::detect("FOO"), Case::Camel);

        assert_eq!(Case::detect("foo-bar"), Case::Kebab);
        assert_eq!(Case::detect("Foo-bar"), Case::Kebab);
        assert_eq!(Case::detect("v-2"), Case::Kebab);

        assert_eq!(Case::detect("foo_bar"), Case::Snake);
        assert_eq!(Case::detect("_private"), Case::Snake);
        assert_eq!(Case::detect("Foo"), Case::Snake);
        assert_eq!(Case::detect("a_1"), Case::Snake);

        // Digit humps are camel too.
        assert_eq!(Case::detect("42"), Case::Camel);
        assert_eq!(Case::detect("v1-2"), Case::Camel);
        assert_eq!(Case::detect("user_id2"), Case::Camel);
    }

    #[test]
    fn unrecognized_inputs() {
        assert_eq!(Case::detect(""), Case::None);
        assert_eq!(Case::detect("-"), Case::None);
        assert_eq!(Case::detect("foo-"), Case::None);
        assert_eq!(Case::detect("foo--bar"), Case::None);
        assert_eq!(Case::detect("foo bar"), Case::None);
        assert_eq!(Case::detect("foo_bar-baz"), Case::None);
        assert_eq!(Case::detect("héllo"), Case::None);
        assert!(Case::detect("?").is_none());
    }

    #[test]
    fn labels() {
        for case in [Case::Camel, Case::Kebab, Case::Snake, Case::None] {
            assert_eq!(case.to_string().parse::<Case>().unwrap(), case);
        }

        assert_eq!(" Dashed ".parse::<Case>().unwrap(), Case::Kebab);
        assert_eq!("UNDERSCORE".parse::<Case>().unwrap(), Case::Snake);

        let err = "pascal".parse::<Case>().unwrap_err();
        assert_eq!(err.label(), "pascal");
        assert_eq!(
            err.to_string(),
            "Unsupported case 'pascal'. Use camel, kebab, snake, or none"
        );
    }
}
