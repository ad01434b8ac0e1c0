// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::env;
use std::io::IsTerminal;

use crate::Level;

/// Construction options for a [`Logger`](crate::Logger).
///
/// Every field is optional; unset fields fall back to computed defaults
/// when the logger is built. Use struct update syntax to set a subset:
///
/// ```
/// use emblem::Level;
/// use emblem::Logger;
/// use emblem::Options;
///
/// let log = Logger::with_options(Options {
///     scope: Some("worker".to_string()),
///     level: Some(Level::Debug),
///     ..Options::new()
/// });
/// assert_eq!(log.min_level(), Level::Debug);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Scope label; defaults to an identifier derived from the caller's
    /// file, or `"anonymous"`.
    pub scope: Option<String>,
    /// Minimum level; defaults to [`Level::Info`].
    pub level: Option<Level>,
    /// Secret substrings to redact; appended to by
    /// [`Logger::secrets`](crate::Logger::secrets).
    pub secrets: Vec<String>,
    /// Colour output; defaults to a decision derived from the environment.
    pub colors: Option<bool>,
}

impl Options {
    /// Create empty options; all defaults computed at logger construction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options from the environment.
    ///
    /// Reads `EMBLEM_LOG` for the minimum level name
    /// (`trace|debug|info|warn|error|fatal`, case-insensitive). Unknown
    /// names are ignored. Colour signals are always consulted at logger
    /// construction and need no explicit option.
    pub fn from_env() -> Self {
        let mut options = Options::default();
        if let Ok(name) = env::var("EMBLEM_LOG") {
            options.level = name.parse().ok();
        }
        options
    }
}

/// The colour default: `FORCE_COLOR` forces colour on, `NO_COLOR` or
/// `NO_COLORS` disables it, otherwise colour is enabled only when stdout is
/// an interactive terminal.
pub(crate) fn colors_from_env() -> bool {
    resolve_colors(
        env::var_os("FORCE_COLOR").is_some(),
        env::var_os("NO_COLOR").is_some() || env::var_os("NO_COLORS").is_some(),
        std::io::stdout().is_terminal(),
    )
}

fn resolve_colors(force: bool, suppress: bool, terminal: bool) -> bool {
    if force {
        return true;
    }
    if suppress {
        return false;
    }
    terminal
}

#[cfg(test)]
mod tests {
    use super::resolve_colors;

    #[test]
    fn test_force_wins_over_suppress() {
        assert!(resolve_colors(true, true, false));
        assert!(resolve_colors(true, false, false));
    }

    #[test]
    fn test_suppress_wins_over_terminal() {
        assert!(!resolve_colors(false, true, true));
    }

    #[test]
    fn test_otherwise_follows_the_terminal() {
        assert!(resolve_colors(false, false, true));
        assert!(!resolve_colors(false, false, false));
    }
}
