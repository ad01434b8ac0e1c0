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

use emblem::Level;
use emblem::Logger;

fn main() {
    let log = Logger::new().scope("demo").level(Level::Trace);

    let _ = log.trace("polling the job queue");
    let _ = log.debug([("endpoint", "/users/profile"), ("responseTime", "700ms")]);
    let _ = log.info("cache warmed");
    let _ = log.success("listening on :8080");
    let _ = log.warn("connection pool at capacity");
    let _ = log.error("upstream returned 502");
    let _ = log.fatal("out of file descriptors");
}
