// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
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

//! Helper functions for memory tests

use super::*;

/// RAM base used by bus tests
pub const RAM_BASE: u32 = 0x1000;

/// RAM size used by bus tests
pub const RAM_SIZE: u32 = 256;

/// Creates a Bus with a single RAM device at [`RAM_BASE`]
pub fn create_test_bus() -> Bus {
    let mut bus = Bus::new();
    bus.add_device(Ram::new(RAM_BASE, RAM_SIZE));
    bus
}

/// Creates a Bus with RAM plus a capturing console right after it
#[allow(dead_code)]
pub fn create_bus_with_console() -> (Bus, ConsoleOutput) {
    let mut bus = create_test_bus();
    let (console, output) = Console::capture(RAM_BASE + RAM_SIZE, 0x10);
    bus.add_device(console);
    (bus, output)
}
