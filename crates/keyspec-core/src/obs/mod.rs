//! Observability: in-process counters and the sink abstraction that feeds them.
//!
//! Builders and descriptors never touch metric state directly; they emit
//! `MetricsEvent`s through `sink::record`.

pub(crate) mod metrics;
pub(crate) mod sink;

#[cfg(test)]
mod tests;

// re-exports
pub use metrics::{EventOps, EventReport, IndexCounters};
pub use sink::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink};
