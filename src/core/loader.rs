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

//! ELF executable loading
//!
//! Loads statically linked 32-bit RISC-V ELF images into the memory map.
//! Every `PT_LOAD` segment is copied into the device mapped at the segment's
//! virtual address, the remainder of the segment (`.bss`) is zero-filled,
//! and the core's program counter is set to the image entry point.
//!
//! # Example
//!
//! ```no_run
//! use rv32emu::core::cpu::Core;
//! use rv32emu::core::loader;
//! use rv32emu::core::memory::{Bus, Ram};
//!
//! let mut bus = Bus::new();
//! bus.add_device(Ram::new(0x8000_0000, 0x10_0000));
//! let mut core = Core::new();
//!
//! let info = loader::load_elf_file("hello.elf", &mut bus, &mut core).unwrap();
//! assert_eq!(core.pc(), info.entry);
//! ```

use std::path::Path;

use goblin::elf::header::EM_RISCV;
use goblin::elf::program_header::PT_LOAD;
use goblin::elf::Elf;

use super::cpu::Core;
use super::error::{LoaderError, Result};
use super::memory::{Bus, Device};

/// Summary of a loaded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElfInfo {
    /// Entry point the PC was set to
    pub entry: u32,
    /// Number of `PT_LOAD` segments written
    pub segments: usize,
}

/// Load an ELF image from memory
///
/// # Arguments
///
/// * `bytes` - Complete ELF file contents
/// * `bus` - Bus whose devices receive the segments
/// * `core` - Core whose PC is set to the entry point
///
/// # Returns
///
/// - `Ok(ElfInfo)` on success
/// - `Err(EmulatorError::Loader)` if the image is malformed, not RV32, or a
///   segment has nowhere to go
/// - `Err` with the device error if a segment runs past the end of its device
pub fn load_elf(bytes: &[u8], bus: &mut Bus, core: &mut Core) -> Result<ElfInfo> {
    let elf = Elf::parse(bytes).map_err(LoaderError::from)?;

    if elf.is_64 {
        return Err(LoaderError::NotElf32.into());
    }
    if elf.header.e_machine != EM_RISCV {
        return Err(LoaderError::WrongMachine(elf.header.e_machine).into());
    }

    let mut segments = 0;
    for ph in elf.program_headers.iter().filter(|ph| ph.p_type == PT_LOAD) {
        let address = to_u32(ph.p_vaddr)?;
        log::debug!(
            "Loading segment at 0x{:08X} (memsz: {}, filesz: {}, offset: 0x{:X})",
            address,
            ph.p_memsz,
            ph.p_filesz,
            ph.p_offset
        );

        let data = segment_data(bytes, ph.p_offset, ph.p_filesz)?;

        let device = bus
            .find_device_mut(address)
            .ok_or(LoaderError::NoDeviceForSegment { address })?;

        write_segment(device, address, data, ph.p_memsz)?;
        segments += 1;
    }

    let entry = to_u32(elf.entry)?;
    core.set_pc(entry);
    log::debug!("ELF loaded: entry=0x{:08X}, segments={}", entry, segments);

    Ok(ElfInfo { entry, segments })
}

/// Read an ELF file from disk and load it
///
/// See [`load_elf`].
pub fn load_elf_file<P: AsRef<Path>>(path: P, bus: &mut Bus, core: &mut Core) -> Result<ElfInfo> {
    let path = path.as_ref();
    log::info!("Loading ELF: {}", path.display());
    let bytes = std::fs::read(path)?;
    load_elf(&bytes, bus, core)
}

/// Slice `[offset, offset + size)` of the file image
fn segment_data(bytes: &[u8], offset: u64, size: u64) -> Result<&[u8]> {
    let truncated = || LoaderError::Truncated {
        offset,
        size,
        len: bytes.len(),
    };

    let start = usize::try_from(offset).map_err(|_| truncated())?;
    let len = usize::try_from(size).map_err(|_| truncated())?;
    let end = start.checked_add(len).ok_or_else(truncated)?;

    bytes.get(start..end).ok_or_else(|| truncated().into())
}

/// Copy file bytes into the device, then zero-fill up to `mem_size`
fn write_segment(device: &mut dyn Device, address: u32, data: &[u8], mem_size: u64) -> Result<()> {
    for (i, &byte) in data.iter().enumerate() {
        device.write(address.wrapping_add(i as u32), byte)?;
    }

    let bss = mem_size.saturating_sub(data.len() as u64);
    for i in 0..bss {
        let offset = data.len() as u64 + i;
        device.write(address.wrapping_add(offset as u32), 0)?;
    }

    Ok(())
}

fn to_u32(value: u64) -> Result<u32> {
    u32::try_from(value).map_err(|_| LoaderError::AddressOverflow(value).into())
}
