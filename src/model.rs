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

//! Read-only inputs to a render: stage props, channels, effects and their
//! fill/easing descriptors.

pub mod color;
pub mod easing;
pub mod effect;
pub mod param;
pub mod stage;

pub use color::Color;
pub use easing::Easing;
pub use effect::{effect_types, fill_types, Effect, Fill, Repetition};
pub use param::{names as param_names, ParamValue, Params};
pub use stage::{Sequence, SequenceChannel, StageProp};
