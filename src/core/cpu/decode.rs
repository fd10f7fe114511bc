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

//! RV32I instruction decoding
//!
//! One pure function per encoding format. Each extracts fixed bit fields
//! from the raw word and assembles the sign-extended immediate. Field
//! positions follow the RISC-V base encoding exactly.
//!
//! ```text
//!            31        25 24   20 19   15 14  12 11        7 6      0
//! R-type   | funct7      | rs2   | rs1   | f3   | rd         | opcode |
//! I-type   | imm[11:0]           | rs1   | f3   | rd         | opcode |
//! S-type   | imm[11:5]   | rs2   | rs1   | f3   | imm[4:0]   | opcode |
//! B-type   | imm[12|10:5]| rs2   | rs1   | f3   | imm[4:1|11]| opcode |
//! U-type   | imm[31:12]                         | rd         | opcode |
//! J-type   | imm[20|10:1|11|19:12]              | rd         | opcode |
//! ```

use crate::core::bits::{bits_slice, sign_extend};

/// Major opcodes (bits [6:0])
pub mod opcode {
    pub const LOAD: u32 = 0b000_0011;
    pub const OP_IMM: u32 = 0b001_0011;
    pub const STORE: u32 = 0b010_0011;
    pub const LUI: u32 = 0b011_0111;
    pub const BRANCH: u32 = 0b110_0011;
    pub const JALR: u32 = 0b110_0111;
    pub const JAL: u32 = 0b110_1111;
}

/// funct3 selectors (bits [14:12])
pub mod funct3 {
    pub const ADDI: u32 = 0b000;
    pub const JALR: u32 = 0b000;
    pub const LB: u32 = 0b000;
    pub const LBU: u32 = 0b100;
    pub const SB: u32 = 0b000;
    pub const BNE: u32 = 0b001;
}

/// I-type: register-immediate operations, loads and JALR
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IType {
    pub rd: u8,
    pub rs1: u8,
    /// Sign-extended 12-bit immediate
    pub imm: i32,
}

/// U-type: upper-immediate operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UType {
    pub rd: u8,
    /// Raw 20-bit immediate, not yet shifted into place
    pub imm: u32,
}

/// S-type: stores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SType {
    pub rs1: u8,
    pub rs2: u8,
    /// Sign-extended 12-bit offset
    pub imm: i32,
}

/// B-type: conditional branches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BType {
    pub rs1: u8,
    pub rs2: u8,
    /// Sign-extended 13-bit byte offset (bit 0 always clear)
    pub imm: i32,
}

/// J-type: JAL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JType {
    pub rd: u8,
    /// Sign-extended 21-bit byte offset (bit 0 always clear)
    pub imm: i32,
}

/// Extract the major opcode (bits [6:0])
#[inline(always)]
pub fn opcode(instr: u32) -> u32 {
    bits_slice(instr, 0, 7)
}

/// Extract funct3 (bits [14:12])
#[inline(always)]
pub fn funct3(instr: u32) -> u32 {
    bits_slice(instr, 12, 15)
}

#[inline(always)]
fn rd(instr: u32) -> u8 {
    bits_slice(instr, 7, 12) as u8
}

#[inline(always)]
fn rs1(instr: u32) -> u8 {
    bits_slice(instr, 15, 20) as u8
}

#[inline(always)]
fn rs2(instr: u32) -> u8 {
    bits_slice(instr, 20, 25) as u8
}

/// Decode I-type instruction
///
/// Format: | imm[11:0] (12) | rs1 (5) | funct3 (3) | rd (5) | opcode (7) |
#[inline(always)]
pub fn decode_i_type(instr: u32) -> IType {
    IType {
        rd: rd(instr),
        rs1: rs1(instr),
        imm: sign_extend(bits_slice(instr, 20, 32), 12),
    }
}

/// Decode U-type instruction
///
/// Format: | imm[31:12] (20) | rd (5) | opcode (7) |
///
/// The immediate is returned unshifted; the handler places it.
#[inline(always)]
pub fn decode_u_type(instr: u32) -> UType {
    UType {
        rd: rd(instr),
        imm: bits_slice(instr, 12, 32),
    }
}

/// Decode S-type instruction
///
/// Format: | imm[11:5] (7) | rs2 (5) | rs1 (5) | funct3 (3) | imm[4:0] (5) | opcode (7) |
#[inline(always)]
pub fn decode_s_type(instr: u32) -> SType {
    let hi = bits_slice(instr, 25, 32);
    let lo = bits_slice(instr, 7, 12);
    SType {
        rs1: rs1(instr),
        rs2: rs2(instr),
        imm: sign_extend((hi << 5) | lo, 12),
    }
}

/// Decode B-type instruction
///
/// Format: | imm[12] | imm[10:5] (6) | rs2 (5) | rs1 (5) | funct3 (3) | imm[4:1] (4) | imm[11] | opcode (7) |
#[inline(always)]
pub fn decode_b_type(instr: u32) -> BType {
    let bit12 = bits_slice(instr, 31, 32);
    let bit11 = bits_slice(instr, 7, 8);
    let bits10_5 = bits_slice(instr, 25, 31);
    let bits4_1 = bits_slice(instr, 8, 12);
    let imm = (bit12 << 12) | (bit11 << 11) | (bits10_5 << 5) | (bits4_1 << 1);
    BType {
        rs1: rs1(instr),
        rs2: rs2(instr),
        imm: sign_extend(imm, 13),
    }
}

/// Decode J-type instruction
///
/// Format: | imm[20] | imm[10:1] (10) | imm[11] | imm[19:12] (8) | rd (5) | opcode (7) |
#[inline(always)]
pub fn decode_j_type(instr: u32) -> JType {
    let bit20 = bits_slice(instr, 31, 32);
    let bits19_12 = bits_slice(instr, 12, 20);
    let bit11 = bits_slice(instr, 20, 21);
    let bits10_1 = bits_slice(instr, 21, 31);
    let imm = (bit20 << 20) | (bits19_12 << 12) | (bit11 << 11) | (bits10_1 << 1);
    JType {
        rd: rd(instr),
        imm: sign_extend(imm, 21),
    }
}
