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

//! System integration module
//!
//! This module ties together the emulator components (Core, Bus, RAM and
//! console) according to a [`MachineConfig`] and provides the main
//! emulation loop.

use std::io::Write;
use std::path::Path;

use super::config::MachineConfig;
use super::cpu::{Core, CpuTracer};
use super::error::Result;
use super::loader::{self, ElfInfo};
use super::memory::{Bus, Console, Ram};

/// RV32I machine
///
/// Owns the core and the bus and steps the core against the bus.
///
/// # Components
/// - Core: register file and PC
/// - Bus: RAM plus the optional console
///
/// # Example
/// ```no_run
/// use rv32emu::core::config::MachineConfig;
/// use rv32emu::core::system::System;
///
/// let mut system = System::new(&MachineConfig::default()).unwrap();
/// system.load_elf("hello.elf").unwrap();
/// system.run(Some(1000)).unwrap();
/// ```
pub struct System {
    /// Core instance
    core: Core,
    /// Memory bus
    bus: Bus,
    /// Instructions executed successfully
    instructions: u64,
    /// CPU tracer for debugging (optional)
    tracer: Option<CpuTracer>,
    /// Number of instructions traced so far
    trace_count: usize,
}

impl System {
    /// Create a new System from a machine configuration
    ///
    /// The console, when enabled, prints to stdout and is attached before
    /// RAM so that it wins any overlap.
    ///
    /// # Returns
    ///
    /// - `Ok(System)` with the PC at the RAM base
    /// - `Err(EmulatorError::Config)` if the configuration is invalid
    pub fn new(config: &MachineConfig) -> Result<Self> {
        Self::build(config, None)
    }

    /// Create a System whose console writes to `sink` instead of stdout
    ///
    /// The sink is used only if the console is enabled in `config`.
    pub fn with_console_sink(config: &MachineConfig, sink: Box<dyn Write>) -> Result<Self> {
        Self::build(config, Some(sink))
    }

    fn build(config: &MachineConfig, sink: Option<Box<dyn Write>>) -> Result<Self> {
        config.validate()?;

        let mut bus = Bus::new();

        if config.console.enabled {
            let console = match sink {
                Some(sink) => Console::with_sink(config.console.base, config.console.size, sink),
                None => Console::new(config.console.base, config.console.size),
            };
            bus.add_device(console);
        }

        bus.add_device(Ram::new(config.ram.base, config.ram.size));

        let mut core = Core::new();
        core.set_pc(config.ram.base);

        log::info!(
            "System: {} device(s) attached, RAM 0x{:08X}+0x{:X}, console {}",
            bus.len(),
            config.ram.base,
            config.ram.size,
            if config.console.enabled {
                "enabled"
            } else {
                "disabled"
            }
        );

        Ok(Self {
            core,
            bus,
            instructions: 0,
            tracer: None,
            trace_count: 0,
        })
    }

    /// Load an ELF executable from disk
    ///
    /// Copies its segments onto the bus and sets the PC to its entry point.
    pub fn load_elf<P: AsRef<Path>>(&mut self, path: P) -> Result<ElfInfo> {
        loader::load_elf_file(path, &mut self.bus, &mut self.core)
    }

    /// Load an ELF executable already in memory
    pub fn load_elf_bytes(&mut self, bytes: &[u8]) -> Result<ElfInfo> {
        loader::load_elf(bytes, &mut self.bus, &mut self.core)
    }

    /// Execute one instruction
    ///
    /// # Errors
    /// Returns the fetch or execution error; the instruction count is only
    /// incremented on success.
    pub fn step(&mut self) -> Result<()> {
        if let Some(ref mut tracer) = self.tracer {
            if let Err(e) = tracer.trace(&self.core, &self.bus) {
                log::warn!("Failed to write trace: {}", e);
            }
            self.trace_count += 1;

            if self.trace_count.is_multiple_of(100) {
                if let Err(e) = tracer.flush() {
                    log::warn!("Failed to flush trace: {}", e);
                }
            }
        }

        self.core.step(&mut self.bus)?;
        self.instructions += 1;
        Ok(())
    }

    /// Execute `n` instructions, stopping at the first error
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rv32emu::core::config::MachineConfig;
    /// use rv32emu::core::system::System;
    ///
    /// let mut system = System::new(&MachineConfig::default()).unwrap();
    /// system.step_n(100).unwrap(); // Execute 100 instructions
    /// ```
    pub fn step_n(&mut self, n: usize) -> Result<()> {
        for _ in 0..n {
            self.step()?;
        }
        Ok(())
    }

    /// Run until `limit` instructions have executed or a step fails
    ///
    /// With `None` the loop only ends on an error.
    ///
    /// # Returns
    ///
    /// - `Ok(count)` with the number of instructions executed by this call
    /// - `Err(EmulatorError)` from the failing step; the count so far is
    ///   available through [`instructions`](Self::instructions)
    pub fn run(&mut self, limit: Option<usize>) -> Result<usize> {
        let mut executed = 0;
        while limit.is_none_or(|limit| executed < limit) {
            if let Err(e) = self.step() {
                log::error!(
                    "Execution stopped at PC=0x{:08X} after {} instruction(s): {}",
                    self.core.pc(),
                    executed,
                    e
                );
                self.flush_trace();
                return Err(e);
            }
            executed += 1;
        }

        self.flush_trace();
        Ok(executed)
    }

    /// Get current PC value
    pub fn pc(&self) -> u32 {
        self.core.pc()
    }

    /// Instructions executed successfully since creation
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    /// Get reference to the core
    pub fn core(&self) -> &Core {
        &self.core
    }

    /// Get mutable reference to the core
    pub fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    /// Get reference to the bus
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Get mutable reference to the bus
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    /// Enable CPU execution tracing to a file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the trace file to write (overwritten)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rv32emu::core::config::MachineConfig;
    /// use rv32emu::core::system::System;
    ///
    /// let mut system = System::new(&MachineConfig::default()).unwrap();
    /// system.enable_tracing("trace.log").unwrap();
    /// ```
    pub fn enable_tracing(&mut self, path: &str) -> Result<()> {
        self.attach_tracer(CpuTracer::new(path)?);
        log::info!("CPU tracing enabled: {}", path);
        Ok(())
    }

    /// Trace every step through an existing tracer
    pub fn attach_tracer(&mut self, tracer: CpuTracer) {
        self.tracer = Some(tracer);
        self.trace_count = 0;
    }

    /// Disable CPU execution tracing
    pub fn disable_tracing(&mut self) {
        if self.tracer.is_some() {
            self.flush_trace();
            self.tracer = None;
            log::info!(
                "CPU tracing disabled (traced {} instructions)",
                self.trace_count
            );
            self.trace_count = 0;
        }
    }

    /// Check if tracing is currently enabled
    pub fn is_tracing(&self) -> bool {
        self.tracer.is_some()
    }

    /// Get the number of instructions traced so far
    pub fn trace_count(&self) -> usize {
        self.trace_count
    }

    fn flush_trace(&mut self) {
        if let Some(ref mut tracer) = self.tracer {
            if let Err(e) = tracer.flush() {
                log::warn!("Failed to flush trace: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests;
