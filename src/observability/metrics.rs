//! Metrics collection and exposition.
//!
//! # Metrics
//! - `canonical_requests_total` (counter): GET requests inspected, by outcome
//! - `canonical_redirects_total` (counter): rules fired, by fix
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed
//! - Prometheus exporter runs its own HTTP listener

use std::net::SocketAddr;

use ::metrics::counter;
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::canonical::Decision;

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_decision(decision: &Decision) {
    match decision {
        Decision::Canonical => {
            counter!("canonical_requests_total", "outcome" => "canonical").increment(1);
        }
        Decision::Redirect(redirect) => {
            counter!("canonical_requests_total", "outcome" => "redirect").increment(1);
            for fix in redirect.fixes.labels() {
                counter!("canonical_redirects_total", "fix" => fix).increment(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::{Fixes, Redirect};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder, Snapshotter};

    fn counter(snapshotter: &Snapshotter, name: &str, label: (&str, &str)) -> Option<u64> {
        snapshotter
            .snapshot()
            .into_vec()
            .into_iter()
            .find_map(|(key, _, _, value)| {
                let key = key.key();
                let labelled = key
                    .labels()
                    .any(|l| l.key() == label.0 && l.value() == label.1);
                match value {
                    DebugValue::Counter(n) if key.name() == name && labelled => Some(n),
                    _ => None,
                }
            })
    }

    #[test]
    fn test_record_decision_counters() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        let redirect = Decision::Redirect(Redirect {
            location: "/about/".into(),
            fixes: Fixes {
                trailing_slash: true,
                lowercase_path: true,
                lowercase_query: false,
            },
        });
        ::metrics::with_local_recorder(&recorder, || {
            record_decision(&redirect);
            record_decision(&redirect);
            record_decision(&Decision::Canonical);
        });

        assert_eq!(
            counter(&snapshotter, "canonical_requests_total", ("outcome", "redirect")),
            Some(2)
        );
        assert_eq!(
            counter(&snapshotter, "canonical_requests_total", ("outcome", "canonical")),
            Some(1)
        );
        assert_eq!(
            counter(&snapshotter, "canonical_redirects_total", ("fix", "lowercase_path")),
            Some(2)
        );
        assert_eq!(
            counter(&snapshotter, "canonical_redirects_total", ("fix", "trailing_slash")),
            Some(2)
        );
        assert_eq!(
            counter(&snapshotter, "canonical_redirects_total", ("fix", "lowercase_query")),
            None
        );
    }
}
