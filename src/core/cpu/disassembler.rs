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

//! RV32I instruction disassembler for debugging
//!
//! Converts binary instruction encodings to human-readable assembly
//! mnemonics. Registers are printed by number (`x10`), not ABI name.

use super::decode::{
    self, decode_b_type, decode_i_type, decode_j_type, decode_s_type, decode_u_type, funct3,
    opcode,
};

/// Instruction disassembler
///
/// # Example
/// ```
/// use rv32emu::core::cpu::Disassembler;
///
/// let disasm = Disassembler::disassemble(0x00000513, 0x8000_0000);
/// assert_eq!(disasm, "addi x10, x0, 0");
/// ```
pub struct Disassembler;

impl Disassembler {
    /// Disassemble a single instruction to human-readable format
    ///
    /// # Arguments
    ///
    /// * `instruction` - The 32-bit instruction to disassemble
    /// * `pc` - Address of the instruction (used for branch/jump targets)
    ///
    /// # Returns
    ///
    /// String containing the disassembled instruction, or
    /// `unknown 0x........` for anything outside the supported subset
    ///
    /// # Example
    /// ```
    /// use rv32emu::core::cpu::Disassembler;
    ///
    /// // jal x1, +16
    /// let disasm = Disassembler::disassemble(0x010000EF, 0x8000_0000);
    /// assert_eq!(disasm, "jal x1, 0x80000010");
    /// ```
    pub fn disassemble(instruction: u32, pc: u32) -> String {
        match (decode::opcode(instruction), decode::funct3(instruction)) {
            (opcode::OP_IMM, funct3::ADDI) => {
                let i = decode_i_type(instruction);
                format!("addi x{}, x{}, {}", i.rd, i.rs1, i.imm)
            }
            (opcode::LUI, _) => {
                let u = decode_u_type(instruction);
                format!("lui x{}, 0x{:05X}", u.rd, u.imm)
            }
            (opcode::JAL, _) => {
                let j = decode_j_type(instruction);
                let target = pc.wrapping_add(j.imm as u32);
                format!("jal x{}, 0x{:08X}", j.rd, target)
            }
            (opcode::JALR, funct3::JALR) => {
                let i = decode_i_type(instruction);
                format!("jalr x{}, {}(x{})", i.rd, i.imm, i.rs1)
            }
            (opcode::BRANCH, funct3::BNE) => {
                let b = decode_b_type(instruction);
                let target = pc.wrapping_add(b.imm as u32);
                format!("bne x{}, x{}, 0x{:08X}", b.rs1, b.rs2, target)
            }
            (opcode::LOAD, funct3::LB) => {
                let i = decode_i_type(instruction);
                format!("lb x{}, {}(x{})", i.rd, i.imm, i.rs1)
            }
            (opcode::LOAD, funct3::LBU) => {
                let i = decode_i_type(instruction);
                format!("lbu x{}, {}(x{})", i.rd, i.imm, i.rs1)
            }
            (opcode::STORE, funct3::SB) => {
                let s = decode_s_type(instruction);
                format!("sb x{}, {}(x{})", s.rs2, s.imm, s.rs1)
            }
            _ => format!("unknown 0x{:08X}", instruction),
        }
    }
}
