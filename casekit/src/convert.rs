//! Conversion between case conventions.
//!
//! Every function here is pure: it classifies its input with [`Case::detect`], then builds a new
//! string in a single left-to-right pass. Inputs that are already in the target case, or that are
//! not in any recognized case, come back unchanged.

use crate::Case;

/// Detect which case `input` is written in. See [`Case::detect`].
pub fn detect_case(input: &str) -> Case {
    Case::detect(input)
}

/// Convert `input` to snake_case.
///
/// # Example
/// ```rust
/// assert_eq!(casekit::to_snake("fooBarBaz"), "foo_bar_baz");
/// assert_eq!(casekit::to_snake("foo-bar-baz"), "foo_bar_baz");
/// ```
pub fn to_snake(input: &str) -> String {
    convert_detected(input, Case::detect(input), Case::Snake)
}

/// Convert `input` to kebab-case.
///
/// # Example
/// ```rust
/// assert_eq!(casekit::to_kebab("fooBarBaz"), "foo-bar-baz");
/// assert_eq!(casekit::to_kebab("foo_bar_baz"), "foo-bar-baz");
/// ```
pub fn to_kebab(input: &str) -> String {
    convert_detected(input, Case::detect(input), Case::Kebab)
}

/// Convert `input` to camelCase.
///
/// # Example
/// ```rust
/// assert_eq!(casekit::to_camel("foo_bar_baz"), "fooBarBaz");
/// assert_eq!(casekit::to_camel("foo-bar-baz"), "fooBarBaz");
/// ```
pub fn to_camel(input: &str) -> String {
    convert_detected(input, Case::detect(input), Case::Camel)
}

/// Alias for [`to_kebab`].
pub fn to_dashed(input: &str) -> String {
    to_kebab(input)
}

/// Alias for [`to_snake`].
pub fn to_underscore(input: &str) -> String {
    to_snake(input)
}

/// Convert `input` to `target`. Converting to [`Case::None`] returns the input unchanged.
pub fn convert(input: &str, target: Case) -> String {
    convert_detected(input, Case::detect(input), target)
}

/// Convert `input`, already detected as `from`, to `target`.
pub(crate) fn convert_detected(input: &str, from: Case, target: Case) -> String {
    match (from, target) {
        (Case::Camel, Case::Snake) => split_humps(input, '_'),
        (Case::Camel, Case::Kebab) => split_humps(input, '-'),
        (Case::Kebab, Case::Snake) => swap_separator(input, '-', '_'),
        (Case::Snake, Case::Kebab) => swap_separator(input, '_', '-'),
        (Case::Snake, Case::Camel) => join_humps(input, '_'),
        (Case::Kebab, Case::Camel) => join_humps(input, '-'),
        _ => input.to_owned(),
    }
}

/// A stateless handle exposing the conversion functions as methods.
///
/// All instances are equivalent. Hosts that look converters up by name can register it under
/// [`CaseConverter::NAME`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseConverter;

impl CaseConverter {
    /// The name the converter is conventionally registered under.
    pub const NAME: &'static str = "caseConverter";

    pub const fn new() -> Self {
        Self
    }

    pub fn detect_case(&self, input: &str) -> Case {
        detect_case(input)
    }

    pub fn to_snake(&self, input: &str) -> String {
        to_snake(input)
    }

    pub fn to_kebab(&self, input: &str) -> String {
        to_kebab(input)
    }

    pub fn to_camel(&self, input: &str) -> String {
        to_camel(input)
    }

    pub fn to_dashed(&self, input: &str) -> String {
        to_dashed(input)
    }

    pub fn to_underscore(&self, input: &str) -> String {
        to_underscore(input)
    }

    pub fn convert(&self, input: &str, target: Case) -> String {
        convert(input, target)
    }
}

/// Put `separator` before every uppercase letter and lowercase it. The first character gets no
/// special treatment.
fn split_humps(input: &str, separator: char) -> String {
    let mut result =
        String::with_capacity(input.len() + input.chars().filter(char::is_ascii_uppercase).count());

    for ch in input.chars() {
        if ch.is_ascii_uppercase() {
            result.push(separator);
            result.push(ch.to_ascii_lowercase());
        } else {
            result.push(ch);
        }
    }

    result
}

/// Replace `from` with `to` wherever it is followed by a letter.
fn swap_separator(input: &str, from: char, to: char) -> String {
    rewrite_pairs(input, from, |result, letter| {
        result.push(to);
        result.push(letter);
    })
}

/// Drop `separator` wherever it is followed by a letter, and uppercase that letter.
fn join_humps(input: &str, separator: char) -> String {
    rewrite_pairs(input, separator, |result, letter| {
        result.push(letter.to_ascii_uppercase());
    })
}

/// Scan `input` once, handing every `separator`+letter pair to `on_pair`. Separators followed by
/// anything else (a digit, another separator, the end of input) are kept as-is.
fn rewrite_pairs(
    input: &str,
    separator: char,
    mut on_pair: impl FnMut(&mut String, char),
) -> String {
    let mut result = String::with_capacity(input.len());
    // Whether the previous character was a separator that has not been written yet.
    let mut pending = false;

    for ch in input.chars() {
        if pending {
            pending = false;
            if ch.is_ascii_alphabetic() {
                on_pair(&mut result, ch);
                continue;
            }
            result.push(separator);
        }

        if ch == separator {
            pending = true;
        } else {
            result.push(ch);
        }
    }

    if pending {
        result.push(separator);
    }

    result
}
