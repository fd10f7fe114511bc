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

//! CPU execution tracer for debugging
//!
//! Logs CPU execution state to a file for analysis and debugging.

use super::{Core, Disassembler};
use crate::core::error::Result;
use crate::core::memory::Bus;
use std::fs::File;
use std::io::Write;

/// CPU execution tracer
///
/// Records CPU state and instruction execution to a sink for debugging
/// purposes. Each line shows:
/// - Program counter
/// - Raw instruction encoding
/// - Disassembled instruction
/// - Values of a few registers (ra, sp, a0, a1 by default)
///
/// # Example
/// ```no_run
/// use rv32emu::core::cpu::{Core, CpuTracer};
/// use rv32emu::core::memory::Bus;
///
/// let mut core = Core::new();
/// let mut bus = Bus::new();
/// let mut tracer = CpuTracer::new("trace.log").unwrap();
///
/// // Execute and trace
/// tracer.trace(&core, &bus).unwrap();
/// core.step(&mut bus).unwrap();
/// ```
pub struct CpuTracer {
    /// Enable/disable tracing
    enabled: bool,
    /// Output sink
    output: Box<dyn Write>,
}

impl CpuTracer {
    /// Registers shown by [`trace`](Self::trace)
    const DEFAULT_REGS: [u8; 4] = [1, 2, 10, 11];

    /// Create a tracer writing to a file
    ///
    /// If the file exists, it will be overwritten.
    ///
    /// # Errors
    ///
    /// Returns `EmulatorError::Io` if file creation fails
    pub fn new(path: &str) -> Result<Self> {
        let output = File::create(path)?;
        Ok(Self::with_writer(Box::new(output)))
    }

    /// Create a tracer writing to an arbitrary sink
    pub fn with_writer(output: Box<dyn Write>) -> Self {
        Self {
            enabled: true,
            output,
        }
    }

    /// Enable or disable tracing
    ///
    /// When disabled, trace() calls return immediately without writing.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Check if tracing is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Trace the instruction about to execute
    ///
    /// Writes one line with PC, raw word, disassembly and the default
    /// register selection. Call before [`Core::step`].
    ///
    /// # Errors
    ///
    /// Fails if the word at PC cannot be fetched or the write fails.
    pub fn trace(&mut self, core: &Core, bus: &Bus) -> Result<()> {
        self.trace_with_regs(core, bus, &Self::DEFAULT_REGS)
    }

    /// Trace with custom register selection
    ///
    /// Like `trace()`, but shows the given registers (up to 8).
    pub fn trace_with_regs(&mut self, core: &Core, bus: &Bus, regs: &[u8]) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let pc = core.pc();
        let instruction = core.fetch(bus)?;
        let disasm = Disassembler::disassemble(instruction, pc);

        write!(
            self.output,
            "PC=0x{:08X} [0x{:08X}] {:30} |",
            pc, instruction, disasm
        )?;

        for &reg in regs.iter().take(8) {
            write!(self.output, " x{}={:08X}", reg, core.reg(reg))?;
        }

        writeln!(self.output)?;
        Ok(())
    }

    /// Flush buffered trace output
    pub fn flush(&mut self) -> Result<()> {
        self.output.flush()?;
        Ok(())
    }
}
