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

//! Test fixtures for common test scenarios

use std::io::Write;

use rv32emu::core::config::{ConsoleConfig, MachineConfig, RamConfig};
use rv32emu::core::memory::{Bus, ConsoleOutput};
use rv32emu::core::system::System;
use tempfile::NamedTempFile;

/// RAM base used by integration tests
pub const RAM_BASE: u32 = 0x8000_0000;

/// Console base used by integration tests
#[allow(dead_code)]
pub const CONSOLE_BASE: u32 = 0x1000_0000;

/// Machine with 64 KiB of RAM and the console enabled
#[allow(dead_code)]
pub fn test_config() -> MachineConfig {
    MachineConfig {
        ram: RamConfig {
            base: RAM_BASE,
            size: 0x1_0000,
        },
        console: ConsoleConfig {
            enabled: true,
            base: CONSOLE_BASE,
            size: 0x10,
        },
    }
}

/// Create a System with captured console output
#[allow(dead_code)]
pub fn create_test_system() -> (System, ConsoleOutput) {
    let output = ConsoleOutput::default();
    let system = System::with_console_sink(&test_config(), Box::new(output.clone()))
        .expect("Failed to create system");
    (system, output)
}

/// Load a test program into memory at specified address
#[allow(dead_code)]
pub fn load_test_program(bus: &mut Bus, start_addr: u32, program: &[u32]) {
    for (i, &instruction) in program.iter().enumerate() {
        let addr = start_addr + (i as u32 * 4);
        bus.write32(addr, instruction)
            .expect("Failed to write to memory");
    }
}

/// Write an image to a temporary file that lives as long as the handle
#[allow(dead_code)]
pub fn write_temp_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(bytes).expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}
