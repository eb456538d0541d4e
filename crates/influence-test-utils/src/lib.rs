//! Test fixtures and assertions for influence map development.
//!
//! Provides the standard small maps used across integration tests and
//! benchmarks, plus float-tolerant assertions over [`Connections`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use influence_core::{ConnectionIndex, Connections};

/// Assert `|actual - expected| <= tolerance`.
#[track_caller]
pub fn assert_close(actual: f32, expected: f32, tolerance: f32) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

/// Assert every listed slot of `actual` is within `tolerance` of its
/// expected value.
#[track_caller]
pub fn assert_connections(
    actual: &Connections,
    expected: &[(ConnectionIndex, f32)],
    tolerance: f32,
) {
    for &(slot, value) in expected {
        let got = actual[slot.index()];
        assert!(
            (got - value).abs() <= tolerance,
            "slot {slot}: expected {value} ± {tolerance}, got {got}"
        );
    }
}

/// Expected values for all eight slots, in slot order.
pub fn slots(values: [f32; 8]) -> Vec<(ConnectionIndex, f32)> {
    ConnectionIndex::ALL.into_iter().zip(values).collect()
}
