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

//! System module tests
//!
//! - `basic`: construction from configurations and accessors
//! - `execution`: stepping, run loop and tracing


use super::*;
use crate::core::config::{ConsoleConfig, RamConfig};
use crate::core::memory::ConsoleOutput;

pub(super) const RAM_BASE: u32 = 0x8000_0000;
pub(super) const CONSOLE_BASE: u32 = 0x1000_0000;

/// Small machine with 4 KiB of RAM and the console enabled
pub(super) fn small_config() -> MachineConfig {
    MachineConfig {
        ram: RamConfig {
            base: RAM_BASE,
            size: 0x1000,
        },
        console: ConsoleConfig {
            enabled: true,
            base: CONSOLE_BASE,
            size: 0x10,
        },
    }
}

/// System built from [`small_config`] with captured console output
pub(super) fn create_test_system() -> (System, ConsoleOutput) {
    let output = ConsoleOutput::default();
    let system = System::with_console_sink(&small_config(), Box::new(output.clone()))
        .expect("valid config");
    (system, output)
}

/// Write instruction words starting at the RAM base
pub(super) fn load_program(system: &mut System, program: &[u32]) {
    for (i, &word) in program.iter().enumerate() {
        system
            .bus_mut()
            .write32(RAM_BASE + (i as u32) * 4, word)
            .expect("Failed to write program");
    }
}
