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

//! Style tokens and the colour encoder.
//!
//! The domain model never carries raw escape sequences; a [`Style`] token is
//! mapped to its encoded representation only at the point of emission, and
//! only when colour output is enabled.

use colored::Color;
use colored::ColoredString;
use colored::Colorize;

/// A style token applied to a fragment of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    BrightRed,
    /// Dim grey used for scope tags, the pointer glyph, plain message text,
    /// and error trace lines.
    Muted,
    Underline,
}

impl Style {
    fn apply(self, text: ColoredString) -> ColoredString {
        match self {
            Style::Red => text.color(Color::Red),
            Style::Green => text.color(Color::Green),
            Style::Yellow => text.color(Color::Yellow),
            Style::Blue => text.color(Color::Blue),
            Style::Magenta => text.color(Color::Magenta),
            Style::Cyan => text.color(Color::Cyan),
            Style::BrightRed => text.color(Color::BrightRed),
            Style::Muted => text.color(Color::BrightBlack),
            Style::Underline => text.underline(),
        }
    }
}

/// Wrap `text` with the escape sequences for `styles`, in order.
///
/// Returns the text unchanged when colour output is disabled or no styles
/// are given, so disabling colour yields identical text content without
/// escape codes.
pub(crate) fn paint(colors: bool, text: &str, styles: &[Style]) -> String {
    if !colors || styles.is_empty() {
        return text.to_string();
    }
    let mut styled = text.normal();
    for style in styles {
        styled = style.apply(styled);
    }
    styled.to_string()
}

#[cfg(test)]
mod tests {
    use super::Style;
    use super::paint;

    #[test]
    fn test_paint_disabled_returns_text_unchanged() {
        let text = "hello";
        assert_eq!(paint(false, text, &[Style::Red, Style::Underline]), text);
        assert_eq!(paint(false, text, &[]), text);
    }

    #[test]
    fn test_paint_enabled_wraps_with_escape_codes() {
        colored::control::set_override(true);
        let painted = paint(true, "hello", &[Style::Red]);
        assert!(painted.contains('\u{1b}'));
        assert!(painted.contains("hello"));
        assert!(painted.ends_with("\u{1b}[0m"));
    }

    #[test]
    fn test_paint_enabled_without_styles_stays_plain() {
        colored::control::set_override(true);
        assert_eq!(paint(true, "hello", &[]), "hello");
    }
}
