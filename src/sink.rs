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

use std::io::Write;

/// The output stream a message kind is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sink {
    Stdout,
    Stderr,
}

impl Sink {
    /// Write a fully composed line to the stream, appending exactly one
    /// trailing newline.
    ///
    /// The line is assembled in memory first, so either the whole line is
    /// handed to the stream in a single write or nothing is.
    pub(crate) fn write_line(self, line: &str) -> anyhow::Result<()> {
        let mut bytes = line.as_bytes().to_vec();
        bytes.push(b'\n');
        match self {
            Sink::Stdout => std::io::stdout().write_all(&bytes)?,
            Sink::Stderr => std::io::stderr().write_all(&bytes)?,
        }
        Ok(())
    }
}
