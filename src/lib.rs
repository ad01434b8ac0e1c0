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

//! Emblem is a badge-styled console logger: each message carries a scope
//! tag, a coloured badge and label, and an optionally colourized payload,
//! written as a single line to stdout or stderr depending on severity.
//! Registered secret substrings are redacted before anything is written.
//!
//! # Overview
//!
//! Loggers are immutable: `scope`, `level`, `secrets`, and `clone_with`
//! each return a new instance, so a base logger can be derived per
//! subsystem without affecting its siblings.
//!
//! ```
//! use emblem::Level;
//! use emblem::Logger;
//!
//! let log = Logger::new().scope("server").level(Level::Debug);
//! let _ = log.success("listening on :8080");
//! let _ = log.debug([("endpoint", "/users/profile"), ("responseTime", "700ms")]);
//!
//! let db = log.scope("db").secrets(["hunter2"]);
//! let _ = db.warn("authentication with password hunter2 failed");
//! ```
//!
//! The payload of a call is resolved at the call boundary into a
//! [`Payload`]: plain text, an ordered key-value record, or a failure with
//! its cause chain. Colour output defaults to an environment-derived
//! decision (`FORCE_COLOR`, `NO_COLOR`/`NO_COLORS`, otherwise whether
//! stdout is an interactive terminal) and can be pinned per logger via
//! [`Options`].

mod format;
mod kind;
mod level;
mod logger;
mod options;
mod payload;
mod redact;
mod sink;
mod style;

pub use kind::Descriptor;
pub use kind::Kind;
pub use kind::MAX_LABEL_WIDTH;
pub use level::Level;
pub use level::ParseLevelError;
pub use logger::Logger;
pub use options::Options;
pub use payload::Payload;
pub use redact::REDACTED;
pub use sink::Sink;
pub use style::Style;
