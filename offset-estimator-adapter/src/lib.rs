//! Host-facing utilities for the `offset-estimator` crate.
//!
//! The `offset-estimator` crate is UI-agnostic and only does the math. This crate connects it to
//! a host's scroll primitive:
//!
//! - [`ScrollHost`]: the narrow interface a UI framework implements
//! - [`ScrollTargetPolicy`]: clamps offsets and picks jump vs. animate
//! - [`Controller`]: composes estimator, policy and host
//! - [`TweenScrollHost`] / [`Tween`]: adapter-driven smooth scrolling for hosts without native
//!   animation
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod host;
mod policy;
mod tween;
mod tween_host;


pub use controller::Controller;
pub use host::{ScrollHost, ScrollMotion};
pub use policy::{PolicyOptions, ScrollCommand, ScrollTargetPolicy};
pub use tween::{Easing, Tween};
pub use tween_host::TweenScrollHost;
