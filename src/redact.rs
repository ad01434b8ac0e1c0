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

/// The placeholder substituted for every occurrence of a registered secret.
pub const REDACTED: &str = "[REDACTED]";

/// Replace every non-overlapping occurrence of each secret with
/// [`REDACTED`], applying secrets in the order stored.
///
/// Runs on the fully composed line so secrets embedded anywhere in it are
/// caught. When a secret registered earlier is a substring of one registered
/// later, the earlier replacement can break the longer match; this
/// first-registered-wins behaviour is intentional and kept stable.
pub(crate) fn redact(line: String, secrets: &[String]) -> String {
    if secrets.is_empty() {
        return line;
    }
    let mut redacted = line;
    for secret in secrets {
        if secret.is_empty() || !redacted.contains(secret.as_str()) {
            continue;
        }
        redacted = redacted.replace(secret.as_str(), REDACTED);
    }
    redacted
}
