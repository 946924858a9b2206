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

/// Returns the length of the intersection of two ranges, or 0 if they are disjoint.
/// Each range may be given start-to-end or end-to-start.
pub fn overlap(start1: f32, end1: f32, start2: f32, end2: f32) -> f32 {
    let (s1, e1) = (start1.min(end1), start1.max(end1));
    let (s2, e2) = (start2.min(end2), start2.max(end2));

    let start = s1.max(s2);
    let end = e1.min(e2);
    (end - start).max(0.0)
}

/// Maps a value from one range onto another.
///
/// `old_min` and `old_max` must differ; callers are responsible for avoiding
/// the degenerate range.
pub fn remap(value: f32, old_min: f32, old_max: f32, new_min: f32, new_max: f32) -> f32 {
    (value - old_min) * (new_max - new_min) / (old_max - old_min) + new_min
}
