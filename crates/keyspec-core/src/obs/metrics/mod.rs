use crate::index::{IndexKind, KeyPart, MissingPart};
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::BTreeMap};

///
/// EventState
/// Ephemeral, per-thread counters for builder and encoder activity.
///

#[derive(Clone, Debug, Default)]
pub(crate) struct EventState {
    pub(crate) ops: EventOps,
    pub(crate) indexes: BTreeMap<String, IndexCounters>,
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventOps {
    // Builder outcomes
    pub builds: u64,
    pub global_builds: u64,
    pub build_rejections: u64,

    // Rejections by first missing slot
    pub missing_name: u64,
    pub missing_partition_key_spec: u64,
    pub missing_sort_key_spec: u64,
    pub missing_encoding_method: u64,

    // Encoding
    pub partition_keys: u64,
    pub sort_keys: u64,
    pub sort_segments_dropped: u64,
}

///
/// IndexCounters
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct IndexCounters {
    pub builds: u64,
    pub partition_keys: u64,
    pub sort_keys: u64,
    pub sort_segments_dropped: u64,
}

///
/// EventReport
/// Point-in-time copy of the counters.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventReport {
    pub ops: EventOps,
    pub indexes: BTreeMap<String, IndexCounters>,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters.
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventState::default());
}

pub(crate) fn report() -> EventReport {
    with_state(|m| EventReport {
        ops: m.ops.clone(),
        indexes: m.indexes.clone(),
    })
}

pub(crate) fn index_built(kind: IndexKind, index: &str) {
    with_state_mut(|m| {
        m.ops.builds = m.ops.builds.saturating_add(1);
        if kind == IndexKind::Global {
            m.ops.global_builds = m.ops.global_builds.saturating_add(1);
        }

        let entry = m.indexes.entry(index.to_string()).or_default();
        entry.builds = entry.builds.saturating_add(1);
    });
}

pub(crate) fn build_rejected(missing: MissingPart) {
    with_state_mut(|m| {
        m.ops.build_rejections = m.ops.build_rejections.saturating_add(1);

        let slot = match missing {
            MissingPart::Name => &mut m.ops.missing_name,
            MissingPart::PartitionKeySpec => &mut m.ops.missing_partition_key_spec,
            MissingPart::SortKeySpec => &mut m.ops.missing_sort_key_spec,
            MissingPart::EncodingMethod => &mut m.ops.missing_encoding_method,
        };
        *slot = slot.saturating_add(1);
    });
}

pub(crate) fn key_encoded(index: &str, part: KeyPart, dropped: usize) {
    let dropped = u64::try_from(dropped).unwrap_or(u64::MAX);

    with_state_mut(|m| {
        // keys are only allocated the first time an index encodes
        if !m.indexes.contains_key(index) {
            m.indexes.insert(index.to_string(), IndexCounters::default());
        }
        let Some(entry) = m.indexes.get_mut(index) else {
            return;
        };

        match part {
            KeyPart::Partition => {
                m.ops.partition_keys = m.ops.partition_keys.saturating_add(1);
                entry.partition_keys = entry.partition_keys.saturating_add(1);
            }
            KeyPart::Sort => {
                m.ops.sort_keys = m.ops.sort_keys.saturating_add(1);
                m.ops.sort_segments_dropped = m.ops.sort_segments_dropped.saturating_add(dropped);
                entry.sort_keys = entry.sort_keys.saturating_add(1);
                entry.sort_segments_dropped = entry.sort_segments_dropped.saturating_add(dropped);
            }
        }
    });
}
