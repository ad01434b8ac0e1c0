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

//! The payload of a logging call.
//!
//! Logging methods accept `impl Into<Payload>`, so the payload shape is
//! resolved once at the call boundary and the formatter dispatches on a
//! closed sum type instead of inspecting runtime shapes.

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

/// What a logging call carries besides its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Plain text, rendered in the muted colour. An empty string renders
    /// nothing, which is how a payload-less call is expressed.
    Text(String),
    /// Ordered key-value fields, rendered as `key = value` pairs joined by
    /// `", "`. Values keep their canonical JSON form, so strings stay
    /// quoted and nested values stay legible.
    Structured(Vec<(String, Value)>),
    /// An error: the message on the first line, each cause on its own
    /// muted follow-up line.
    Failure {
        message: String,
        trace: Vec<String>,
    },
}

impl Payload {
    /// Build a [`Payload::Failure`] from an error, walking its
    /// [`source`](std::error::Error::source) chain into trace lines.
    ///
    /// ```
    /// use emblem::Payload;
    ///
    /// let error = std::io::Error::other("disk offline");
    /// let payload = Payload::failure(&error);
    /// assert!(matches!(payload, Payload::Failure { .. }));
    /// ```
    pub fn failure(error: &dyn std::error::Error) -> Self {
        let mut trace = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            trace.push(format!("caused by: {cause}"));
            source = cause.source();
        }
        Payload::Failure {
            message: error.to_string(),
            trace,
        }
    }

    /// Build a [`Payload::Failure`] from a message and pre-rendered trace
    /// lines, for callers that captured a trace themselves.
    pub fn failure_with_trace<M, I, T>(message: M, trace: I) -> Self
    where
        M: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Payload::Failure {
            message: message.into(),
            trace: trace.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the formatter would contribute nothing for this payload.
    pub(crate) fn is_empty(&self) -> bool {
        match self {
            Payload::Text(text) => text.is_empty(),
            Payload::Structured(fields) => fields.is_empty(),
            Payload::Failure { .. } => false,
        }
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<Cow<'_, str>> for Payload {
    fn from(text: Cow<'_, str>) -> Self {
        Payload::Text(text.into_owned())
    }
}

impl From<fmt::Arguments<'_>> for Payload {
    fn from(args: fmt::Arguments<'_>) -> Self {
        Payload::Text(args.to_string())
    }
}

/// The zero-argument call: the composer emits only scope, badge, and label.
impl From<()> for Payload {
    fn from((): ()) -> Self {
        Payload::Text(String::new())
    }
}

/// JSON objects become [`Payload::Structured`] with field order preserved;
/// bare strings become their text; every other value becomes its canonical
/// JSON text.
impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Payload::Structured(map.into_iter().collect()),
            Value::String(text) => Payload::Text(text),
            other => Payload::Text(other.to_string()),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Payload
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(fields: I) -> Self {
        Payload::Structured(
            fields
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Payload
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(fields: [(K, V); N]) -> Self {
        fields.into_iter().collect()
    }
}

/// Trailing plain-text arguments join with single spaces.
impl From<&[&str]> for Payload {
    fn from(words: &[&str]) -> Self {
        Payload::Text(words.join(" "))
    }
}

impl From<&anyhow::Error> for Payload {
    fn from(error: &anyhow::Error) -> Self {
        let mut chain = error.chain();
        let message = chain.next().map(|cause| cause.to_string()).unwrap_or_default();
        let trace = chain.map(|cause| format!("caused by: {cause}")).collect();
        Payload::Failure { message, trace }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Payload;

    #[test]
    fn test_object_value_becomes_structured_in_order() {
        let payload = Payload::from(json!({"zeta": 1, "alpha": "two"}));
        let Payload::Structured(fields) = payload else {
            panic!("expected a structured payload");
        };
        assert_eq!(fields[0].0, "zeta");
        assert_eq!(fields[1].0, "alpha");
    }

    #[test]
    fn test_scalar_values_fall_through_to_text() {
        assert_eq!(Payload::from(json!(42)), Payload::Text("42".to_string()));
        assert_eq!(
            Payload::from(json!("plain")),
            Payload::Text("plain".to_string())
        );
        assert_eq!(Payload::from(()), Payload::Text(String::new()));
    }

    #[test]
    fn test_word_slices_join_with_single_spaces() {
        let words: &[&str] = &["connection", "reset", "by", "peer"];
        assert_eq!(
            Payload::from(words),
            Payload::Text("connection reset by peer".to_string())
        );
    }

    #[test]
    fn test_failure_collects_the_source_chain() {
        let error = anyhow::anyhow!("disk offline").context("flush failed");
        let Payload::Failure { message, trace } = Payload::from(&error) else {
            panic!("expected a failure payload");
        };
        assert_eq!(message, "flush failed");
        assert_eq!(trace, vec!["caused by: disk offline".to_string()]);
    }

    #[test]
    fn test_failure_without_sources_has_no_trace() {
        let error = std::io::Error::other("bare");
        let Payload::Failure { message, trace } = Payload::failure(&error) else {
            panic!("expected a failure payload");
        };
        assert_eq!(message, "bare");
        assert!(trace.is_empty());
    }
}
