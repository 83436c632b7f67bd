use super::*;
use crate::{
    index::{IndexBuilder, IndexKind, KeyPart, KeySpec, MissingPart},
    segment::Segment,
    values::Values,
};
use std::{cell::RefCell, rc::Rc};

fn join(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("#")
}

fn builder() -> IndexBuilder<Values> {
    IndexBuilder::<Values>::for_entity()
        .with_partition_key(KeySpec::new("pk", ["a"]))
        .with_sort_key(KeySpec::new("sk", ["b", "c"]))
}

///
/// CapturingSink
///

#[derive(Default)]
struct CapturingSink {
    events: RefCell<Vec<String>>,
}

impl MetricsSink for CapturingSink {
    fn record(&self, event: MetricsEvent<'_>) {
        self.events.borrow_mut().push(format!("{event:?}"));
    }
}

#[test]
fn global_counters_track_builds_and_keys() {
    metrics_reset_all();

    let index = builder()
        .with_name("metered")
        .with_encoding_method(join)
        .build()
        .expect("complete builder");

    index.partition_key(&Values::new().with("a", 1u64));
    index.sort_key(&Values::new().with("c", 2u64));
    index.sort_key_prefix();

    let report = metrics_report();
    assert_eq!(report.ops.builds, 1);
    assert_eq!(report.ops.partition_keys, 1);
    assert_eq!(report.ops.sort_keys, 2);
    assert_eq!(report.ops.sort_segments_dropped, 3);

    let counters = report.indexes.get("metered").expect("per-index counters");
    assert_eq!(counters.builds, 1);
    assert_eq!(counters.partition_keys, 1);
    assert_eq!(counters.sort_keys, 2);
    assert_eq!(counters.sort_segments_dropped, 3);

    metrics_reset_all();
    assert_eq!(metrics_report(), EventReport::default());
}

#[test]
fn repeated_encodes_accumulate_per_index() {
    metrics_reset_all();

    let first = builder()
        .with_name("first")
        .with_encoding_method(join)
        .build()
        .expect("complete builder");
    let second = builder()
        .with_name("second")
        .with_encoding_method(join)
        .build()
        .expect("complete builder");

    for n in 0..5u64 {
        first.partition_key(&Values::new().with("a", n));
    }
    second.sort_key(&Values::new().with("b", "x").with("c", "y"));

    let report = metrics_report();
    assert_eq!(report.indexes.len(), 2);
    assert_eq!(report.indexes["first"].partition_keys, 5);
    assert_eq!(report.indexes["first"].sort_keys, 0);
    assert_eq!(report.indexes["second"].sort_keys, 1);
    assert_eq!(report.indexes["second"].sort_segments_dropped, 0);
    assert_eq!(report.ops.partition_keys, 5);

    metrics_reset_all();
}

#[test]
fn rejected_builds_are_counted_by_missing_part() {
    metrics_reset_all();

    let _ = builder().build();
    let _ = builder().with_name("x").build();
    let _ = IndexBuilder::<Values>::for_entity_kind(IndexKind::Global)
        .with_name("y")
        .build();

    let report = metrics_report();
    assert_eq!(report.ops.build_rejections, 3);
    assert_eq!(report.ops.missing_name, 1);
    assert_eq!(report.ops.missing_encoding_method, 1);
    assert_eq!(report.ops.missing_partition_key_spec, 1);
    assert_eq!(report.ops.builds, 0);
    assert!(report.indexes.is_empty());
}

#[test]
fn override_sink_receives_events_instead_of_globals() {
    metrics_reset_all();
    let sink = Rc::new(CapturingSink::default());

    with_metrics_sink(sink.clone(), || {
        let index = builder()
            .with_name("captured")
            .with_encoding_method(join)
            .build()
            .expect("complete builder");

        index.sort_key(&Values::new().with("b", "x"));
        let _ = builder().build();
    });

    let events = sink.events.borrow();
    assert_eq!(events.len(), 3);
    assert_eq!(
        events[0],
        format!(
            "{:?}",
            MetricsEvent::IndexBuilt {
                kind: IndexKind::Composite,
                index: "captured",
            }
        )
    );
    assert_eq!(
        events[1],
        format!(
            "{:?}",
            MetricsEvent::KeyEncoded {
                kind: IndexKind::Composite,
                index: "captured",
                part: KeyPart::Sort,
                segments: 2,
                dropped: 1,
            }
        )
    );
    assert_eq!(
        events[2],
        format!(
            "{:?}",
            MetricsEvent::BuildRejected {
                kind: IndexKind::Composite,
                missing: MissingPart::Name,
            }
        )
    );

    // nothing reached the global counters
    assert_eq!(metrics_report(), EventReport::default());
}

#[test]
fn override_is_restored_after_panic() {
    metrics_reset_all();
    let sink = Rc::new(CapturingSink::default());

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        with_metrics_sink(sink.clone(), || panic!("inside override"));
    }));
    assert!(result.is_err());

    let _ = builder().build();
    assert!(sink.events.borrow().is_empty());
    assert_eq!(metrics_report().ops.build_rejections, 1);
}
