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

use crate::core::error::Result;
use crate::core::memory::Bus;

/// RV32I hart (register file + program counter)
///
/// # Architecture
/// - Architecture: RISC-V RV32I subset
/// - Registers: 32 general-purpose 32-bit registers + PC
/// - Execution: one instruction to completion per [`step`](Core::step)
///
/// The Core does not own memory. It borrows the [`Bus`] for each step.
///
/// # Example
/// ```
/// use rv32emu::core::cpu::Core;
///
/// let mut core = Core::new();
/// core.set_reg(5, 0x1234);
/// assert_eq!(core.reg(5), 0x1234);
/// assert_eq!(core.pc(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Core {
    /// General purpose registers (x0-x31)
    ///
    /// x0 is an ordinary slot here; nothing forces it to zero.
    regs: [u32; 32],

    /// Program counter
    pc: u32,
}

// Module declarations
pub mod decode;
mod disassembler;
mod instructions;
#[cfg(test)]
mod tests;
mod tracer;

// Re-exports
pub use disassembler::Disassembler;
pub use tracer::CpuTracer;

impl Core {
    /// Create a new Core with all registers and PC at zero
    pub fn new() -> Self {
        Self {
            regs: [0u32; 32],
            pc: 0,
        }
    }

    /// Reset registers and PC to zero
    pub fn reset(&mut self) {
        self.regs = [0u32; 32];
        self.pc = 0;
    }

    /// Read from general purpose register
    ///
    /// # Arguments
    /// - `index`: Register number (0-31)
    ///
    /// # Panics
    /// Panics if `index > 31`. Decoded register fields are always in range.
    #[inline(always)]
    pub fn reg(&self, index: u8) -> u32 {
        self.regs[index as usize]
    }

    /// Write to general purpose register
    ///
    /// # Arguments
    /// - `index`: Register number (0-31)
    /// - `value`: Value to write
    ///
    /// # Example
    /// ```
    /// use rv32emu::core::cpu::Core;
    ///
    /// let mut core = Core::new();
    /// core.set_reg(1, 0x12345678);
    /// assert_eq!(core.reg(1), 0x12345678);
    /// ```
    #[inline(always)]
    pub fn set_reg(&mut self, index: u8, value: u32) {
        self.regs[index as usize] = value;
    }

    /// All 32 registers, x0 first
    pub fn regs(&self) -> &[u32; 32] {
        &self.regs
    }

    /// Get current PC value
    #[inline(always)]
    pub fn pc(&self) -> u32 {
        self.pc
    }

    /// Set the PC (used by loaders and tests)
    #[inline(always)]
    pub fn set_pc(&mut self, value: u32) {
        self.pc = value;
    }

    /// Fetch the instruction word at PC
    ///
    /// Reads four consecutive bytes through the bus, little-endian. No
    /// alignment check is made.
    ///
    /// # Errors
    ///
    /// [`EmulatorError::NoDevice`](crate::core::error::EmulatorError::NoDevice)
    /// if any of the four bytes is unmapped.
    pub fn fetch(&self, bus: &Bus) -> Result<u32> {
        bus.read32(self.pc)
    }

    /// Execute one instruction
    ///
    /// Fetches the word at PC and executes it. Any failure from either
    /// phase is returned as-is; a failed fetch leaves the Core untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use rv32emu::core::cpu::Core;
    /// use rv32emu::core::memory::{Bus, Ram};
    ///
    /// let mut core = Core::new();
    /// let mut bus = Bus::new();
    /// bus.add_device(Ram::new(0x0, 0x100));
    ///
    /// // li x10, 7
    /// bus.write32(0x0, 0x00700513).unwrap();
    /// core.step(&mut bus).unwrap();
    /// assert_eq!(core.reg(10), 7);
    /// assert_eq!(core.pc(), 4);
    /// ```
    pub fn step(&mut self, bus: &mut Bus) -> Result<()> {
        let instruction = self.fetch(bus)?;
        self.execute(bus, instruction)
    }

    /// Dump all registers for debugging
    ///
    /// Prints PC and x0-x31 in rows of 4.
    pub fn dump_registers(&self) {
        println!("CPU Registers:");
        println!("PC: 0x{:08X}", self.pc);
        println!();

        for i in 0..32u8 {
            if i % 4 == 0 && i > 0 {
                println!();
            }
            print!("x{:<2}: 0x{:08X}  ", i, self.reg(i));
        }
        println!("\n");
    }
}

impl Default for Core {
    fn default() -> Self {
        Self::new()
    }
}
