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

use std::panic::Location;
use std::path::Path;

use crate::Kind;
use crate::Level;
use crate::Options;
use crate::format::compose;
use crate::format::format_payload;
use crate::options::colors_from_env;
use crate::payload::Payload;
use crate::redact::redact;

const ANONYMOUS_SCOPE: &str = "anonymous";

/// A scoped console logger.
///
/// A `Logger` is an immutable configuration (scope, minimum level, secret
/// list, colour flag) plus the named logging methods. Every builder method
/// takes `&self` and returns a new instance; the receiver is never mutated,
/// so loggers can be derived freely and shared across threads.
///
/// Each logging call runs the full pipeline synchronously: gate on level,
/// format the payload, compose the line, redact secrets, then write the
/// line with a single trailing newline to the stream the kind routes to.
///
/// # Examples
///
/// ```
/// use emblem::Logger;
///
/// let log = Logger::new().scope("server");
/// let _ = log.success("listening on :8080");
/// let _ = log.warn("connection pool at capacity");
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    scope: String,
    min_level: Level,
    secrets: Vec<String>,
    colors: bool,
}

impl Logger {
    /// Create a logger with all defaults: scope derived from the calling
    /// file, minimum level [`Level::Info`], no secrets, colour decided by
    /// the environment.
    #[track_caller]
    pub fn new() -> Self {
        Self::with_options(Options::new())
    }

    /// Create a logger from explicit [`Options`], merged with computed
    /// defaults for every unset field.
    #[track_caller]
    pub fn with_options(options: Options) -> Self {
        let caller = Location::caller();
        Logger {
            scope: options
                .scope
                .unwrap_or_else(|| scope_from_file(caller.file())),
            min_level: options.level.unwrap_or(Level::Info),
            secrets: options.secrets,
            colors: options.colors.unwrap_or_else(colors_from_env),
        }
    }

    /// A new logger with the given scope label.
    pub fn scope(&self, name: impl Into<String>) -> Logger {
        let mut next = self.clone();
        next.scope = name.into();
        next
    }

    /// A new logger with the given minimum level.
    pub fn level(&self, level: Level) -> Logger {
        let mut next = self.clone();
        next.min_level = level;
        next
    }

    /// A new logger with the given secrets appended to the existing list.
    ///
    /// Secrets are kept in registration order and are not deduplicated;
    /// registering the same secret twice is harmless.
    pub fn secrets<I, S>(&self, secrets: I) -> Logger
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.clone();
        next.secrets.extend(secrets.into_iter().map(Into::into));
        next
    }

    /// A new logger with `options` merged over the current configuration.
    /// Unset fields keep their current values; secrets append.
    pub fn clone_with(&self, options: Options) -> Logger {
        let mut secrets = self.secrets.clone();
        secrets.extend(options.secrets);
        Logger {
            scope: options.scope.unwrap_or_else(|| self.scope.clone()),
            min_level: options.level.unwrap_or(self.min_level),
            secrets,
            colors: options.colors.unwrap_or(self.colors),
        }
    }

    /// The scope label.
    pub fn scope_name(&self) -> &str {
        &self.scope
    }

    /// The minimum level; messages below it are suppressed.
    pub fn min_level(&self) -> Level {
        self.min_level
    }

    /// Whether colour output is enabled.
    pub fn colors_enabled(&self) -> bool {
        self.colors
    }

    /// Whether a call of this kind would pass the level gate.
    pub fn enabled(&self, kind: Kind) -> bool {
        kind.descriptor().level >= self.min_level
    }

    /// Produce the exact line [`log`](Logger::log) would write, without
    /// writing it. Returns `None` when the kind is gated out.
    ///
    /// The line is fully composed and redacted; with colour enabled it
    /// contains the escape sequences as written.
    pub fn render(&self, kind: Kind, payload: impl Into<Payload>) -> Option<String> {
        if !self.enabled(kind) {
            return None;
        }
        let descriptor = kind.descriptor();
        let payload = payload.into();
        let payload_text = format_payload(&payload, self.colors);
        let line = compose(&self.scope, self.colors, descriptor, payload_text.as_deref());
        Some(redact(line, &self.secrets))
    }

    /// Run the pipeline for `kind`: gate, format, compose, redact, write.
    ///
    /// A gated call is a complete no-op; the gate check precedes all
    /// formatting. Write failures propagate to the caller; ignore them with
    /// `let _ =` when logging is best-effort.
    pub fn log(&self, kind: Kind, payload: impl Into<Payload>) -> anyhow::Result<()> {
        match self.render(kind, payload) {
            Some(line) => kind.descriptor().sink.write_line(&line),
            None => Ok(()),
        }
    }

    /// Log a success message. Gates at [`Level::Info`], writes to stdout.
    pub fn success(&self, payload: impl Into<Payload>) -> anyhow::Result<()> {
        self.log(Kind::Success, payload)
    }

    /// Log an informational message. Gates at [`Level::Info`], writes to
    /// stdout.
    ///
    /// ```
    /// use emblem::Logger;
    ///
    /// let log = Logger::new();
    /// let _ = log.info("cache warmed");
    /// let _ = log.info([("entries", 4096)]);
    /// ```
    pub fn info(&self, payload: impl Into<Payload>) -> anyhow::Result<()> {
        self.log(Kind::Info, payload)
    }

    /// Log a warning. Gates at [`Level::Warn`], writes to stdout.
    pub fn warn(&self, payload: impl Into<Payload>) -> anyhow::Result<()> {
        self.log(Kind::Warn, payload)
    }

    /// Log an error. Gates at [`Level::Error`], writes to stderr.
    ///
    /// Pass an error value to get its cause chain on muted follow-up
    /// lines:
    ///
    /// ```
    /// use emblem::Logger;
    /// use emblem::Payload;
    ///
    /// let log = Logger::new();
    /// let error = std::io::Error::other("connection reset");
    /// let _ = log.error(Payload::failure(&error));
    /// ```
    pub fn error(&self, payload: impl Into<Payload>) -> anyhow::Result<()> {
        self.log(Kind::Error, payload)
    }

    /// Log a fatal error. Gates at [`Level::Fatal`], writes to stderr.
    pub fn fatal(&self, payload: impl Into<Payload>) -> anyhow::Result<()> {
        self.log(Kind::Fatal, payload)
    }

    /// Log a trace message. Gates at [`Level::Trace`], writes to stdout.
    pub fn trace(&self, payload: impl Into<Payload>) -> anyhow::Result<()> {
        self.log(Kind::Trace, payload)
    }

    /// Log a debug message. Gates at [`Level::Debug`], writes to stdout.
    pub fn debug(&self, payload: impl Into<Payload>) -> anyhow::Result<()> {
        self.log(Kind::Debug, payload)
    }
}

/// `Default` cannot observe its caller, so the default logger uses the
/// `"anonymous"` scope.
impl Default for Logger {
    fn default() -> Self {
        Logger::with_options(Options {
            scope: Some(ANONYMOUS_SCOPE.to_string()),
            ..Options::new()
        })
    }
}

/// Best-effort scope from the caller's file: the file stem, or the parent
/// directory for `mod`/`lib`/`main` files, or `"anonymous"` when nothing
/// usable exists.
fn scope_from_file(file: &str) -> String {
    let path = Path::new(file);
    let stem = path.file_stem().and_then(|stem| stem.to_str());
    let stem = match stem {
        Some("mod" | "lib" | "main") | None => path
            .parent()
            .and_then(|dir| dir.file_name())
            .and_then(|dir| dir.to_str()),
        found => found,
    };
    match stem {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => ANONYMOUS_SCOPE.to_string(),
    }
}
