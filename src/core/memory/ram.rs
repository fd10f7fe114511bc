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

//! RAM device

use super::{Device, MemoryCell};
use crate::core::error::Result;

/// Block of RAM mapped at a fixed base address
///
/// # Example
/// ```
/// use rv32emu::core::memory::{Device, Ram};
///
/// let mut ram = Ram::new(0x8000_0000, 0x100);
/// ram.write(0x8000_0010, 0xAB).unwrap();
/// assert_eq!(ram.read(0x8000_0010).unwrap(), 0xAB);
/// assert!(ram.read(0x8000_0100).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Ram {
    base_address: u32,
    memory: MemoryCell,
}

impl Ram {
    /// Create a zero-filled RAM of `size` bytes starting at `base_address`
    pub fn new(base_address: u32, size: u32) -> Self {
        Self {
            base_address,
            memory: MemoryCell::new(size),
        }
    }

    /// Zero the RAM contents
    pub fn clear(&mut self) {
        self.memory.clear();
    }
}

impl Device for Ram {
    fn base_address(&self) -> u32 {
        self.base_address
    }

    fn size(&self) -> u32 {
        self.memory.size()
    }

    fn read(&self, address: u32) -> Result<u8> {
        self.check_range(address)?;
        self.memory.read(address - self.base_address)
    }

    fn write(&mut self, address: u32, value: u8) -> Result<()> {
        self.check_range(address)?;
        self.memory.write(address - self.base_address, value)
    }

    fn name(&self) -> &str {
        "RAM"
    }
}
