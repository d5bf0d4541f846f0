use std::{collections::HashMap, fmt};

use prometheus::{IntCounterVec, Opts, Registry};
use tracing::{trace, warn};

use crate::Case;

/// The default prefix for all metric names.
const DEFAULT_PREFIX: &str = "casekit";

/// The separator between the prefix and the metric name.
/// NOTE: Prometheus does not support any other separators.
const SEPARATOR: &str = "_";

pub enum MetricsError {
    EmptyPrefix,
    Prometheus(prometheus::Error),
}

impl std::error::Error for MetricsError {}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPrefix => write!(f, "Metric prefix must not be empty"),
            Self::Prometheus(e) => write!(f, "Failed to register metric: {}", e),
        }
    }
}

impl fmt::Debug for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl From<prometheus::Error> for MetricsError {
    fn from(e: prometheus::Error) -> Self {
        Self::Prometheus(e)
    }
}

/// A case converter that records what it detects and converts as Prometheus counters.
///
/// # Metrics
/// - `<prefix>_case_detections_total{case}`: Calls to [`InstrumentedConverter::detect_case`], by
///   detected case.
/// - `<prefix>_case_conversions_total{from,to}`: Conversions, by detected source case and
///   requested target case.
///
/// Outputs are exactly those of the free conversion functions such as [`crate::to_snake`].
///
/// # Example
/// ```rust
/// use casekit::metrics::InstrumentedConverter;
/// use prometheus::Registry;
///
/// let registry = Registry::new();
/// let converter = InstrumentedConverter::builder()
///     .with_registry(&registry)
///     .with_prefix("api")
///     .build()
///     .unwrap();
///
/// assert_eq!(converter.to_snake("userId"), "user_id");
/// ```
#[derive(Debug, Clone)]
pub struct InstrumentedConverter {
    detections: IntCounterVec,
    conversions: IntCounterVec,
}

impl InstrumentedConverter {
    /// Create a new builder, initialized with the default registry, the default prefix and no
    /// labels.
    pub fn builder<'a>() -> InstrumentedConverterBuilder<'a> {
        InstrumentedConverterBuilder::default()
    }

    pub fn detect_case(&self, input: &str) -> Case {
        let case = Case::detect(input);
        self.detections.with_label_values(&[case.as_str()]).inc();
        trace!(input, %case, "detected case");
        case
    }

    pub fn to_snake(&self, input: &str) -> String {
        self.convert(input, Case::Snake)
    }

    pub fn to_kebab(&self, input: &str) -> String {
        self.convert(input, Case::Kebab)
    }

    pub fn to_camel(&self, input: &str) -> String {
        self.convert(input, Case::Camel)
    }

    pub fn to_dashed(&self, input: &str) -> String {
        self.to_kebab(input)
    }

    pub fn to_underscore(&self, input: &str) -> String {
        self.to_snake(input)
    }

    pub fn convert(&self, input: &str, target: Case) -> String {
        let from = Case::detect(input);
        self.conversions
            .with_label_values(&[from.as_str(), target.as_str()])
            .inc();

        let output = crate::convert::convert_detected(input, from, target);
        trace!(input, %from, to = %target, output = output.as_str(), "converted case");
        output
    }
}

pub struct InstrumentedConverterBuilder<'a> {
    registry: &'a Registry,
    prefix: String,
    labels: HashMap<String, String>,
}

impl Default for InstrumentedConverterBuilder<'_> {
    fn default() -> Self {
        Self {
            registry: prometheus::default_registry(),
            prefix: DEFAULT_PREFIX.to_owned(),
            labels: HashMap::new(),
        }
    }
}

impl fmt::Debug for InstrumentedConverterBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstrumentedConverterBuilder")
            .field("prefix", &self.prefix)
            .field("labels", &self.labels)
            .finish_non_exhaustive()
    }
}

impl<'a> InstrumentedConverterBuilder<'a> {
    /// Set the registry to register the counters with.
    pub fn with_registry(mut self, registry: &'a Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Set the prefix prepended to all metric names.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Add a static label to all metrics.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Build the converter and register its metrics. An existing registration of the same
    /// metrics on the registry is overwritten.
    pub fn build(self) -> Result<InstrumentedConverter, MetricsError> {
        if self.prefix.is_empty() {
            return Err(MetricsError::EmptyPrefix);
        }

        let detections = self.register(
            "case_detections_total",
            "The total number of case detections.",
            &["case"],
        )?;
        let conversions = self.register(
            "case_conversions_total",
            "The total number of case conversions.",
            &["from", "to"],
        )?;

        Ok(InstrumentedConverter {
            detections,
            conversions,
        })
    }

    fn register(
        &self,
        name: &str,
        help: &str,
        labels: &[&str],
    ) -> Result<IntCounterVec, MetricsError> {
        let name = format!("{}{}{}", self.prefix, SEPARATOR, name);
        let opts = Opts::new(name.as_str(), help).const_labels(self.labels.clone());
        let metric = IntCounterVec::new(opts, labels)?;

        let boxed = Box::new(metric.clone());
        if let Err(e) = self.registry.register(boxed.clone()) {
            // If the metric is already registered, overwrite it.
            if matches!(e, prometheus::Error::AlreadyReg) {
                warn!(metric = %name, "overwriting existing metric registration");
                self.registry.unregister(boxed.clone())?;
                self.registry.register(boxed)?;
            } else {
                return Err(e.into());
            }
        }

        Ok(metric)
    }
}
