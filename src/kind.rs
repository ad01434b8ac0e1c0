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

//! The severity and style registry.
//!
//! One [`Descriptor`] per named logging method, constant for the process
//! lifetime and shared across all logger instances.

use crate::Level;
use crate::Sink;
use crate::Style;

/// Styling and routing metadata for one named logging method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    /// Display text, right-padded to [`MAX_LABEL_WIDTH`] when rendered.
    pub label: &'static str,
    /// Short glyph prefixed before the label.
    pub badge: &'static str,
    /// Colour applied to badge and label.
    pub color: Style,
    /// Severity used for level gating.
    pub level: Level,
    /// Target output stream.
    pub sink: Sink,
}

/// The seven named logging methods.
///
/// `Success` and `Info` both gate at [`Level::Info`] but render different
/// badges and colours; gating uses the level only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Trace,
    Debug,
    Info,
    Success,
    Warn,
    Error,
    Fatal,
}

// Variant order must match `Kind`.
const DESCRIPTOR_TABLE: [Descriptor; 7] = [
    Descriptor {
        label: "trace",
        badge: "◌",
        color: Style::Magenta,
        level: Level::Trace,
        sink: Sink::Stdout,
    },
    Descriptor {
        label: "debug",
        badge: "◼",
        color: Style::Blue,
        level: Level::Debug,
        sink: Sink::Stdout,
    },
    Descriptor {
        label: "info",
        badge: "ℹ",
        color: Style::Cyan,
        level: Level::Info,
        sink: Sink::Stdout,
    },
    Descriptor {
        label: "success",
        badge: "✔",
        color: Style::Green,
        level: Level::Info,
        sink: Sink::Stdout,
    },
    Descriptor {
        label: "warn",
        badge: "⚠",
        color: Style::Yellow,
        level: Level::Warn,
        sink: Sink::Stdout,
    },
    Descriptor {
        label: "error",
        badge: "✖",
        color: Style::Red,
        level: Level::Error,
        sink: Sink::Stderr,
    },
    Descriptor {
        label: "fatal",
        badge: "‼",
        color: Style::BrightRed,
        level: Level::Fatal,
        sink: Sink::Stderr,
    },
];

static DESCRIPTORS: [Descriptor; 7] = DESCRIPTOR_TABLE;

/// The longest label length among all registered descriptors, used to
/// right-pad labels so messages start at a common column.
pub const MAX_LABEL_WIDTH: usize = max_label_width();

const fn max_label_width() -> usize {
    let mut widest = 0;
    let mut i = 0;
    while i < DESCRIPTOR_TABLE.len() {
        let len = DESCRIPTOR_TABLE[i].label.len();
        if len > widest {
            widest = len;
        }
        i += 1;
    }
    widest
}

impl Kind {
    /// All kinds, in registry order.
    pub const ALL: [Kind; 7] = [
        Kind::Trace,
        Kind::Debug,
        Kind::Info,
        Kind::Success,
        Kind::Warn,
        Kind::Error,
        Kind::Fatal,
    ];

    /// Look up the descriptor for this kind. Total; descriptors are
    /// `'static` and never change.
    pub fn descriptor(self) -> &'static Descriptor {
        &DESCRIPTORS[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_label_width_matches_registry() {
        let widest = Kind::ALL
            .iter()
            .map(|kind| kind.descriptor().label.len())
            .max()
            .unwrap();
        assert_eq!(MAX_LABEL_WIDTH, widest);
        assert_eq!(MAX_LABEL_WIDTH, "success".len());
    }

    #[test]
    fn test_labels_are_unique_and_non_empty() {
        for (i, kind) in Kind::ALL.iter().enumerate() {
            let label = kind.descriptor().label;
            assert!(!label.is_empty());
            for other in &Kind::ALL[i + 1..] {
                assert_ne!(label, other.descriptor().label);
            }
        }
    }

    #[test]
    fn test_success_and_info_share_level_but_not_badge() {
        let success = Kind::Success.descriptor();
        let info = Kind::Info.descriptor();
        assert_eq!(success.level, Level::Info);
        assert_eq!(info.level, Level::Info);
        assert_ne!(success.badge, info.badge);
        assert_ne!(success.color, info.color);
    }

    #[test]
    fn test_stream_routing() {
        assert_eq!(Kind::Error.descriptor().sink, Sink::Stderr);
        assert_eq!(Kind::Fatal.descriptor().sink, Sink::Stderr);
        for kind in [Kind::Trace, Kind::Debug, Kind::Info, Kind::Success, Kind::Warn] {
            assert_eq!(kind.descriptor().sink, Sink::Stdout);
        }
    }
}
