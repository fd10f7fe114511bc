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

//! CPU instruction implementations
//!
//! This module contains the dispatcher and the RV32I instruction handlers,
//! organized by instruction type. Every handler owns its PC update: most
//! advance by 4, control transfers set an absolute target.

use super::decode::{
    self, decode_b_type, decode_i_type, decode_j_type, decode_s_type, decode_u_type, funct3,
    opcode,
};
use super::{Core, Disassembler};
use crate::core::error::{EmulatorError, Result};
use crate::core::memory::Bus;

// Instruction modules organized by type
mod arithmetic;
mod branch;
mod jump;
mod load;
mod store;

impl Core {
    /// Decode and execute one instruction word
    ///
    /// The handler is selected by opcode and, where the format has one,
    /// funct3. LUI and JAL are selected by opcode alone.
    ///
    /// # Arguments
    ///
    /// * `bus` - Memory bus for loads and stores
    /// * `instruction` - Raw 32-bit instruction word
    ///
    /// # Returns
    ///
    /// Ok(()) on success. An unknown opcode/funct3 pair returns
    /// [`EmulatorError::UnsupportedInstruction`] and leaves all state
    /// untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use rv32emu::core::cpu::Core;
    /// use rv32emu::core::memory::Bus;
    ///
    /// let mut core = Core::new();
    /// let mut bus = Bus::new();
    ///
    /// // addi x10, x0, 42
    /// core.execute(&mut bus, 0x02A00513).unwrap();
    /// assert_eq!(core.reg(10), 42);
    /// assert_eq!(core.pc(), 4);
    /// ```
    pub fn execute(&mut self, bus: &mut Bus, instruction: u32) -> Result<()> {
        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "PC=0x{:08X} [0x{:08X}] {}",
                self.pc,
                instruction,
                Disassembler::disassemble(instruction, self.pc)
            );
        }

        match (decode::opcode(instruction), decode::funct3(instruction)) {
            (opcode::OP_IMM, funct3::ADDI) => self.op_addi(decode_i_type(instruction)),
            (opcode::LUI, _) => self.op_lui(decode_u_type(instruction)),
            (opcode::JAL, _) => self.op_jal(decode_j_type(instruction)),
            (opcode::JALR, funct3::JALR) => self.op_jalr(decode_i_type(instruction)),
            (opcode::BRANCH, funct3::BNE) => self.op_bne(decode_b_type(instruction)),
            (opcode::LOAD, funct3::LB) => self.op_lb(decode_i_type(instruction), bus),
            (opcode::LOAD, funct3::LBU) => self.op_lbu(decode_i_type(instruction), bus),
            (opcode::STORE, funct3::SB) => self.op_sb(decode_s_type(instruction), bus),
            _ => {
                log::debug!(
                    "Unsupported instruction 0x{:08X} at PC=0x{:08X}",
                    instruction,
                    self.pc
                );
                Err(EmulatorError::UnsupportedInstruction(instruction))
            }
        }
    }

    /// Advance PC to the next sequential instruction
    #[inline(always)]
    fn advance_pc(&mut self) {
        self.pc = self.pc.wrapping_add(4);
    }

    /// Effective address `rs1 + offset` with wrap-around
    #[inline(always)]
    fn effective_address(&self, rs1: u8, offset: i32) -> u32 {
        self.reg(rs1).wrapping_add(offset as u32)
    }
}
