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

use emblem::Logger;
use emblem::Payload;

fn main() {
    let log = Logger::new().scope("server").secrets(["password123"]);

    // The secret never reaches the terminal, wherever it appears.
    let _ = log.warn("Tried to log in admin account with password password123");

    // Derived loggers keep the parent's configuration.
    let db = log.scope("db");
    let _ = db.info([("pool", 8), ("idle", 3)]);

    // Errors render their cause chain on muted follow-up lines.
    let error = anyhow::anyhow!("connection refused").context("migration failed");
    let _ = db.error(&error);

    // An explicit trace works as well.
    let _ = db.fatal(Payload::failure_with_trace(
        "replica out of sync",
        ["caused by: wal gap at segment 42"],
    ));
}
