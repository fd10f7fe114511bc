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

//! CPU test modules
//!
//! Tests are organized into the following categories:
//! - `basic`: Core initialization, reset, register access, fetch
//! - `decode`: Instruction format decoding and encode/decode round-trips
//! - `instructions`: Per-instruction execution semantics
//! - `scenarios`: End-to-end fetch/decode/execute sequences

use super::*;
use crate::core::memory::Ram;





/// Base address of the RAM used by CPU tests
pub(super) const RAM_BASE: u32 = 0x8000_0000;

/// Size of the RAM used by CPU tests
pub(super) const RAM_SIZE: u32 = 0x1000;

/// Create a Core at `RAM_BASE` and a bus with RAM mapped there
pub(super) fn setup() -> (Core, Bus) {
    let mut bus = Bus::new();
    bus.add_device(Ram::new(RAM_BASE, RAM_SIZE));
    let mut core = Core::new();
    core.set_pc(RAM_BASE);
    (core, bus)
}

/// Write a program at `addr`, one word per instruction
pub(super) fn load_program(bus: &mut Bus, addr: u32, program: &[u32]) {
    for (i, &instruction) in program.iter().enumerate() {
        bus.write32(addr + (i as u32 * 4), instruction)
            .expect("Failed to write program");
    }
}

/// Instruction encoders used to build test programs
pub(super) mod encode {
    use crate::core::cpu::decode::{funct3, opcode};

    pub fn i_type(op: u32, f3: u32, rd: u8, rs1: u8, imm: i32) -> u32 {
        (((imm as u32) & 0xFFF) << 20)
            | ((rs1 as u32) << 15)
            | (f3 << 12)
            | ((rd as u32) << 7)
            | op
    }

    pub fn s_type(op: u32, f3: u32, rs1: u8, rs2: u8, imm: i32) -> u32 {
        let imm = (imm as u32) & 0xFFF;
        ((imm >> 5) << 25)
            | ((rs2 as u32) << 20)
            | ((rs1 as u32) << 15)
            | (f3 << 12)
            | ((imm & 0x1F) << 7)
            | op
    }

    pub fn b_type(op: u32, f3: u32, rs1: u8, rs2: u8, imm: i32) -> u32 {
        let imm = (imm as u32) & 0x1FFF;
        (((imm >> 12) & 1) << 31)
            | (((imm >> 5) & 0x3F) << 25)
            | ((rs2 as u32) << 20)
            | ((rs1 as u32) << 15)
            | (f3 << 12)
            | (((imm >> 1) & 0xF) << 8)
            | (((imm >> 11) & 1) << 7)
            | op
    }

    pub fn u_type(op: u32, rd: u8, imm20: u32) -> u32 {
        ((imm20 & 0xFFFFF) << 12) | ((rd as u32) << 7) | op
    }

    pub fn j_type(op: u32, rd: u8, imm: i32) -> u32 {
        let imm = (imm as u32) & 0x1FFFFF;
        (((imm >> 20) & 1) << 31)
            | (((imm >> 1) & 0x3FF) << 21)
            | (((imm >> 11) & 1) << 20)
            | (((imm >> 12) & 0xFF) << 12)
            | ((rd as u32) << 7)
            | op
    }

    pub fn addi(rd: u8, rs1: u8, imm: i32) -> u32 {
        i_type(opcode::OP_IMM, funct3::ADDI, rd, rs1, imm)
    }

    pub fn jalr(rd: u8, rs1: u8, imm: i32) -> u32 {
        i_type(opcode::JALR, funct3::JALR, rd, rs1, imm)
    }

    pub fn lb(rd: u8, rs1: u8, imm: i32) -> u32 {
        i_type(opcode::LOAD, funct3::LB, rd, rs1, imm)
    }

    pub fn lbu(rd: u8, rs1: u8, imm: i32) -> u32 {
        i_type(opcode::LOAD, funct3::LBU, rd, rs1, imm)
    }

    pub fn sb(rs2: u8, rs1: u8, imm: i32) -> u32 {
        s_type(opcode::STORE, funct3::SB, rs1, rs2, imm)
    }

    pub fn bne(rs1: u8, rs2: u8, imm: i32) -> u32 {
        b_type(opcode::BRANCH, funct3::BNE, rs1, rs2, imm)
    }

    pub fn lui(rd: u8, imm20: u32) -> u32 {
        u_type(opcode::LUI, rd, imm20)
    }

    pub fn jal(rd: u8, imm: i32) -> u32 {
        j_type(opcode::JAL, rd, imm)
    }
}
