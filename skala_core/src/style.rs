// Copyright 2026 the Skala Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed vocabulary types shared between the engine and renderers.

/// Hatch patterns for filled bars.
///
/// Backends that cannot hatch may fall back to a plain fill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Hatching {
    /// Plain fill.
    #[default]
    None,
    /// `/` diagonal lines.
    ForwardSlash,
    /// `\` diagonal lines.
    BackwardSlash,
    /// Vertical lines.
    Vertical,
    /// Horizontal lines.
    Horizontal,
    /// Crossed diagonals.
    Cross,
    /// A grid of filled dots.
    FilledCircle,
    /// A grid of hollow dots.
    HollowCircle,
}

/// Horizontal anchoring of drawn text relative to its position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The position is the start (left edge) of the text.
    Start,
    /// The position is the horizontal center of the text.
    #[default]
    Middle,
    /// The position is the end (right edge) of the text.
    End,
}
