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

//! Test program utilities: instruction encoders, small programs and an
//! ELF32 image builder

/// EM_RISCV machine number
#[allow(dead_code)]
pub const EM_RISCV: u16 = 243;

/// Address the hello program reads its string from
#[allow(dead_code)]
pub const HELLO_DATA_OFFSET: u32 = 0x100;

/// Offset of the hello program's final spin loop
#[allow(dead_code)]
pub const HELLO_DONE_OFFSET: u32 = 0x24;

#[allow(dead_code)]
pub fn addi(rd: u32, rs1: u32, imm: i32) -> u32 {
    (((imm as u32) & 0xFFF) << 20) | (rs1 << 15) | (rd << 7) | 0b001_0011
}

#[allow(dead_code)]
pub fn lui(rd: u32, imm20: u32) -> u32 {
    ((imm20 & 0xFFFFF) << 12) | (rd << 7) | 0b011_0111
}

#[allow(dead_code)]
pub fn lbu(rd: u32, rs1: u32, imm: i32) -> u32 {
    (((imm as u32) & 0xFFF) << 20) | (rs1 << 15) | (0b100 << 12) | (rd << 7) | 0b000_0011
}

#[allow(dead_code)]
pub fn sb(rs2: u32, rs1: u32, imm: i32) -> u32 {
    let imm = (imm as u32) & 0xFFF;
    ((imm >> 5) << 25) | (rs2 << 20) | (rs1 << 15) | ((imm & 0x1F) << 7) | 0b010_0011
}

#[allow(dead_code)]
pub fn bne(rs1: u32, rs2: u32, imm: i32) -> u32 {
    let imm = (imm as u32) & 0x1FFF;
    (((imm >> 12) & 1) << 31)
        | (((imm >> 5) & 0x3F) << 25)
        | (rs2 << 20)
        | (rs1 << 15)
        | (0b001 << 12)
        | (((imm >> 1) & 0xF) << 8)
        | (((imm >> 11) & 1) << 7)
        | 0b110_0011
}

#[allow(dead_code)]
pub fn jal(rd: u32, imm: i32) -> u32 {
    let imm = (imm as u32) & 0x1FFFFF;
    (((imm >> 20) & 1) << 31)
        | (((imm >> 1) & 0x3FF) << 21)
        | (((imm >> 11) & 1) << 20)
        | (((imm >> 12) & 0xFF) << 12)
        | (rd << 7)
        | 0b110_1111
}

/// Print the NUL-terminated string at `ram_base + HELLO_DATA_OFFSET` to the
/// console at `console_base`, then spin
///
/// Unconditional jumps link into x13 so x0 keeps reading as zero for the
/// NUL check.
#[allow(dead_code)]
pub fn hello_program(ram_base: u32, console_base: u32) -> Vec<u32> {
    vec![
        lui(10, console_base >> 12),          // 0x00: x10 = console
        lui(11, ram_base >> 12),              // 0x04: x11 = RAM
        addi(11, 11, HELLO_DATA_OFFSET as i32), // 0x08: x11 = string
        lbu(12, 11, 0),                       // 0x0C: loop: x12 = *x11
        bne(12, 0, 8),                        // 0x10: if x12 != 0 goto print
        jal(13, 0x10),                        // 0x14: goto done
        sb(12, 10, 0),                        // 0x18: print: console = x12
        addi(11, 11, 1),                      // 0x1C: x11++
        jal(13, -0x14),                       // 0x20: goto loop
        jal(13, 0),                           // 0x24: done: spin
    ]
}

/// Flatten instruction words to little-endian bytes
#[allow(dead_code)]
pub fn words_to_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

/// One PT_LOAD segment of a test image
#[allow(dead_code)]
pub struct Segment {
    pub vaddr: u32,
    pub data: Vec<u8>,
    pub mem_size: u32,
}

impl Segment {
    /// Segment whose memory size equals its file size
    #[allow(dead_code)]
    pub fn new(vaddr: u32, data: Vec<u8>) -> Self {
        let mem_size = data.len() as u32;
        Self {
            vaddr,
            data,
            mem_size,
        }
    }
}

/// Build a minimal ELF32 little-endian executable
#[allow(dead_code)]
pub fn build_elf(machine: u16, entry: u32, segments: &[Segment]) -> Vec<u8> {
    const EHDR_SIZE: u32 = 52;
    const PHDR_SIZE: u32 = 32;
    const PT_LOAD: u32 = 1;

    let mut image = Vec::new();
    image.extend_from_slice(&[0x7F, b'E', b'L', b'F', 1, 1, 1, 0]);
    image.extend_from_slice(&[0; 8]);
    image.extend_from_slice(&2u16.to_le_bytes()); // ET_EXEC
    image.extend_from_slice(&machine.to_le_bytes());
    image.extend_from_slice(&1u32.to_le_bytes());
    image.extend_from_slice(&entry.to_le_bytes());
    image.extend_from_slice(&EHDR_SIZE.to_le_bytes()); // e_phoff
    image.extend_from_slice(&0u32.to_le_bytes()); // e_shoff
    image.extend_from_slice(&0u32.to_le_bytes()); // e_flags
    image.extend_from_slice(&(EHDR_SIZE as u16).to_le_bytes());
    image.extend_from_slice(&(PHDR_SIZE as u16).to_le_bytes());
    image.extend_from_slice(&(segments.len() as u16).to_le_bytes());
    image.extend_from_slice(&40u16.to_le_bytes()); // e_shentsize
    image.extend_from_slice(&0u16.to_le_bytes()); // e_shnum
    image.extend_from_slice(&0u16.to_le_bytes()); // e_shstrndx

    let mut offset = EHDR_SIZE + PHDR_SIZE * segments.len() as u32;
    for seg in segments {
        let fields = [
            PT_LOAD,
            offset,
            seg.vaddr,
            seg.vaddr,
            seg.data.len() as u32,
            seg.mem_size,
            0b111, // RWX
            4,
        ];
        for field in fields {
            image.extend_from_slice(&field.to_le_bytes());
        }
        offset += seg.data.len() as u32;
    }

    for seg in segments {
        image.extend_from_slice(&seg.data);
    }
    image
}

/// ELF image of [`hello_program`] printing `message`
#[allow(dead_code)]
pub fn hello_elf(ram_base: u32, console_base: u32, message: &str) -> Vec<u8> {
    let text = words_to_bytes(&hello_program(ram_base, console_base));
    let mut data = message.as_bytes().to_vec();
    data.push(0);

    build_elf(
        EM_RISCV,
        ram_base,
        &[
            Segment::new(ram_base, text),
            Segment::new(ram_base + HELLO_DATA_OFFSET, data),
        ],
    )
}
