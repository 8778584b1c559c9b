// Copyright 2026 the Skala Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer contract and draw-command vocabulary for the skala chart engine.
//!
//! This crate is the boundary between chart layout and pixels:
//! - The layout engine (`skala_charts`) converts data into pixel-space
//!   geometry and drives a [`Renderer`] with primitive draw calls.
//! - Backends implement [`Renderer`] to rasterize those calls (PNG, SVG,
//!   an in-memory buffer, a GPU scene, ...). None of them live here.
//!
//! [`RecordingRenderer`] is the reference sink: it accumulates every call as
//! a [`DrawCommand`] and hands the finished command list back, which is how
//! the engine is tested without any rasterizer at all.

#![no_std]

extern crate alloc;

mod record;
mod render;
mod style;

pub use record::{DrawCommand, RecordingRenderer};
pub use render::{Renderer, StrokeStyle};
pub use style::{Hatching, TextAnchor};
