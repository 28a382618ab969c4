// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with other Understory crates.
//!
//! Each adapter is gated behind a feature flag to keep the core engine free of
//! host dependencies.
//!
//! ## Available Adapters
//!
//! - [`element_tree`] (`element_tree_adapter` feature): implements
//!   [`MnemonicHost`](crate::MnemonicHost) over an
//!   [`understory_element_tree::ElementTree`] and its
//!   [`TimerQueue`](understory_element_tree::timers::TimerQueue).

#[cfg(feature = "element_tree_adapter")]
pub mod element_tree;
