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

/// Errors that abort a render. No partial result is produced when one occurs.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("no renderer registered for effect type '{0}'")]
    UnknownEffectType(String),

    #[error("no fill function registered for fill type '{0}'")]
    UnknownFillType(String),

    #[error("unable to start render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
