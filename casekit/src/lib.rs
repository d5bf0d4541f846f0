//! This library detects which case convention an identifier is written in, and converts
//! identifiers between conventions.
//! - [`Case`]: The detected convention: camel, kebab, snake, or none.
//! - [`to_snake`], [`to_kebab`], [`to_camel`]: Conversions. [`to_underscore`] and [`to_dashed`]
//!   are aliases.
//! - [`CaseConverter`]: A stateless handle exposing the same operations as methods.
//! - [`metrics::InstrumentedConverter`]: A converter that records Prometheus counters. Requires the
//!   `metrics` feature.
//!
//! Only ASCII letters take part in case detection and conversion. Acronym runs such as
//! `HTTPServer` get no special treatment.

mod case;
pub use case::{Case, ParseCaseError};

pub mod convert;
pub use convert::{
    CaseConverter, convert, detect_case, to_camel, to_dashed, to_kebab, to_snake, to_underscore,
};

#[cfg(feature = "metrics")]
pub mod metrics;

/// Implemented by structs annotated with `#[casekit_derive::field_names]`.
pub trait FieldNames {
    /// The case the field names were generated in.
    const CASE: Case;

    /// The field names, in declaration order.
    fn field_names() -> &'static [&'static str];
}
