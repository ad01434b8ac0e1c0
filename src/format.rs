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

//! Payload formatting and message composition.

use crate::Style;
use crate::kind::Descriptor;
use crate::kind::MAX_LABEL_WIDTH;
use crate::payload::Payload;
use crate::style::paint;

/// Pointer glyph between the scope tag and the badge.
const POINTER: &str = "›";

/// Render the payload to its display text, or `None` when the payload
/// contributes nothing. The result may contain embedded newlines for
/// multi-line failure traces.
pub(crate) fn format_payload(payload: &Payload, colors: bool) -> Option<String> {
    if payload.is_empty() {
        return None;
    }
    let text = match payload {
        Payload::Text(text) => paint(colors, text, &[Style::Muted]),
        Payload::Structured(fields) => fields
            .iter()
            .map(|(key, value)| format!("{key} = {value}"))
            .collect::<Vec<_>>()
            .join(", "),
        Payload::Failure { message, trace } => {
            let mut lines = Vec::with_capacity(1 + trace.len());
            lines.push(paint(colors, message, &[Style::Underline]));
            for line in trace {
                lines.push(paint(colors, line, &[Style::Muted]));
            }
            lines.join("\n")
        }
    };
    Some(text)
}

/// Assemble the final line: scope tag, pointer, badge (one trailing space
/// baked in), label right-padded to the registry width, then the payload
/// text. The payload and its separating space are omitted when there is
/// none.
///
/// The label is underlined before padding so the pad spaces stay unstyled
/// and colour-off output is byte-identical minus escape codes.
pub(crate) fn compose(
    scope: &str,
    colors: bool,
    descriptor: &Descriptor,
    payload_text: Option<&str>,
) -> String {
    let scope_tag = paint(colors, &format!("[{scope}]"), &[Style::Muted]);
    let pointer = paint(colors, POINTER, &[Style::Muted]);
    let badge = format!("{} ", paint(colors, descriptor.badge, &[descriptor.color]));
    let label = paint(
        colors,
        descriptor.label,
        &[descriptor.color, Style::Underline],
    );
    let pad = " ".repeat(MAX_LABEL_WIDTH - descriptor.label.len());
    match payload_text {
        Some(text) => format!("{scope_tag} {pointer} {badge} {label}{pad} {text}"),
        None => format!("{scope_tag} {pointer} {badge} {label}{pad}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kind;

    #[test]
    fn test_compose_plain_line() {
        let line = compose(
            "server",
            false,
            Kind::Success.descriptor(),
            Some("listening"),
        );
        assert_eq!(line, "[server] › ✔  success listening");
    }

    #[test]
    fn test_short_labels_pad_to_a_common_column() {
        let warn = compose("s", false, Kind::Warn.descriptor(), Some("m"));
        let success = compose("s", false, Kind::Success.descriptor(), Some("m"));
        // "warn" is three characters shorter than "success".
        assert!(warn.contains("warn    m"));
        assert!(success.contains("success m"));
        assert_eq!(warn.chars().count(), success.chars().count());
    }

    #[test]
    fn test_payload_and_separator_omitted_together() {
        let line = compose("s", false, Kind::Info.descriptor(), None);
        assert_eq!(line, "[s] › ℹ  info   ");
    }

    #[test]
    fn test_structured_fields_render_canonical_values() {
        let payload = Payload::from([
            ("endpoint", "/users/profile"),
            ("responseTime", "700ms"),
        ]);
        let text = format_payload(&payload, false).unwrap();
        assert_eq!(
            text,
            r#"endpoint = "/users/profile", responseTime = "700ms""#
        );
    }

    #[test]
    fn test_failure_renders_trace_on_following_lines() {
        let payload = Payload::failure_with_trace("boom", ["caused by: io"]);
        let text = format_payload(&payload, false).unwrap();
        assert_eq!(text, "boom\ncaused by: io");
    }

    #[test]
    fn test_empty_text_contributes_nothing() {
        assert_eq!(format_payload(&Payload::from(()), false), None);
    }
}
