// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural logging that costs nothing unless the `tracing` feature is on.
//!
//! With `tracing` enabled the macros forward to [`tracing`](https://docs.rs/tracing)
//! under the `understory_partition_tree` target. Without it they expand to nothing.
//!
//! ```bash
//! RUST_LOG=understory_partition_tree=trace cargo test --features tracing
//! ```

/// Per-node chatter: allocation, release, event dispatch.
#[cfg(feature = "tracing")]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!(target: "understory_partition_tree", $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

/// Whole-operation events: relocations, rejected edits, clears and prunes.
#[cfg(feature = "tracing")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!(target: "understory_partition_tree", $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

pub(crate) use debug_log;
pub(crate) use trace_log;
