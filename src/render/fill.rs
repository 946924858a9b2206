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

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::fill_types;

use super::context::RenderContext;
use super::error::RenderError;
use super::frame::Led;

mod gradient;
mod rainbow;
mod solid;

pub use gradient::GradientFill;
pub use rainbow::RainbowFill;
pub use solid::SolidFill;

/// A per-pixel color algorithm.
///
/// Implementations compute one color for `led`, scale it by `alpha` (0.0-1.0)
/// and composite it with exactly one call to [`Led::add_color`].
pub trait FillFunction: Send + Sync {
    fn fill(&self, ctx: &RenderContext<'_>, led: &mut Led<'_>, alpha: f32);
}

/// Fill functions keyed by fill type code.
#[derive(Clone)]
pub struct FillFunctions {
    functions: HashMap<String, Arc<dyn FillFunction>>,
}

impl FillFunctions {
    /// A registry with no fill functions.
    pub fn empty() -> Self {
        FillFunctions {
            functions: HashMap::new(),
        }
    }

    /// Registers `function` under `code`, replacing any previous registration.
    pub fn register(&mut self, code: &str, function: impl FillFunction + 'static) {
        self.functions
            .insert(code.to_ascii_uppercase(), Arc::new(function));
    }

    pub fn get(&self, code: &str) -> Result<&dyn FillFunction, RenderError> {
        self.functions
            .get(&code.to_ascii_uppercase())
            .map(|function| function.as_ref())
            .ok_or_else(|| RenderError::UnknownFillType(code.to_string()))
    }

    /// Registered codes, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

impl Default for FillFunctions {
    fn default() -> Self {
        let mut functions = Self::empty();
        functions.register(fill_types::SOLID, SolidFill);
        functions.register(fill_types::GRADIENT, GradientFill);
        functions.register(fill_types::RAINBOW, RainbowFill);
        functions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_codes() {
        assert_eq!(
            vec!["GRADIENT", "RAINBOW", "SOLID"],
            FillFunctions::default().codes()
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(FillFunctions::default().get("gradient").is_ok());
    }

    #[test]
    fn test_unknown_code() {
        match FillFunctions::default().get("SPARKLE") {
            Err(RenderError::UnknownFillType(code)) => assert_eq!("SPARKLE", code),
            _ => panic!("expected an unknown fill type error"),
        }
    }
}
