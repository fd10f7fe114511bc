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

/// Emulator error types
use thiserror::Error;

/// Result type for emulator operations
pub type Result<T> = std::result::Result<T, EmulatorError>;

/// Main error type for the emulator
#[derive(Error, Debug)]
pub enum EmulatorError {
    #[error("No device mapped at 0x{address:08X}")]
    NoDevice { address: u32 },

    #[error("Address 0x{address:08X} is outside the range of device {device}")]
    AddressOutOfRange { device: String, address: u32 },

    #[error("Memory offset 0x{offset:08X} out of bounds (size 0x{size:08X})")]
    MemoryOutOfBounds { offset: u32, size: u32 },

    #[error("Unsupported instruction: 0x{0:08X} ({0:032b})")]
    UnsupportedInstruction(u32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Loader error: {0}")]
    Loader(#[from] LoaderError),
}

/// Machine configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid {region} region: base 0x{base:08X}, size 0x{size:08X}")]
    InvalidRegion {
        region: &'static str,
        base: u32,
        size: u32,
    },
}

/// ELF loader error types
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("ELF parse error: {0}")]
    Parse(#[from] goblin::error::Error),

    #[error("Not a 32-bit ELF image")]
    NotElf32,

    #[error("Unsupported machine type: {0} (expected RISC-V)")]
    WrongMachine(u16),

    #[error("No device found for segment at 0x{address:08X}")]
    NoDeviceForSegment { address: u32 },

    #[error("Segment at file offset 0x{offset:X} ({size} bytes) exceeds image size {len}")]
    Truncated { offset: u64, size: u64, len: usize },

    #[error("Segment address 0x{0:X} does not fit in 32 bits")]
    AddressOverflow(u64),
}
