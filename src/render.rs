// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//
//! Frame rendering: turns channels of timed effects into per-prop RGB frame
//! buffers.

pub mod context;
pub mod effect;
pub mod error;
pub mod fill;
pub mod frame;
pub mod pairs;
pub mod renderer;


pub use context::RenderContext;
pub use effect::{EffectTypeRenderer, EffectTypeRenderers};
pub use error::RenderError;
pub use fill::{FillFunction, FillFunctions};
pub use frame::{Led, RenderedFrame, RenderedStagePropData, BYTES_PER_LED};
pub use pairs::{make_pairs, ChannelPropPair};
pub use renderer::{
    PropSummary, RenderResult, RenderSettings, RenderSummary, RenderWindow, Renderer,
};
