//! Platform-agnostic core of the anniversary card.
//!
//! Everything here is free of `std::time` and of any windowing backend so the
//! same logic drives the desktop simulator and can be reused on an embedded
//! display:
//!
//! - [`elapsed`]: Start instant and elapsed-time decomposition
//! - [`particles`]: Heart and star generators driven by an injected RNG
//! - [`reasons`]: Rotating reason selector with read-latest commits
//! - [`playback`]: Mirrored play/pause state for the background track
//! - [`animations`]: Per-frame sampling of particles and color fades
//! - [`pages`]: Page navigation enum
//! - [`content`]: Reasons, memories, the letter and asset paths
//! - [`colors`], [`config`], [`styles`]: Palette, layout constants, text styles
//! - [`profiling`]: On-screen event log
//! - [`widgets`]: Drawing routines generic over `DrawTarget`
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod colors;
pub mod config;
pub mod content;
pub mod elapsed;
pub mod pages;
pub mod particles;
pub mod playback;
pub mod profiling;
pub mod reasons;
pub mod styles;
pub mod widgets;

// Re-export commonly used items
pub use elapsed::{ElapsedDuration, EpochMillis, StartInstant};
pub use pages::Page;
pub use particles::{HeartField, HeartParticle, StarField, StarParticle};
pub use playback::{MediaEvent, Playback, PlaybackRequest};
pub use reasons::ReasonSelector;
