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

//! Flat byte storage backing RAM devices

use crate::core::error::{EmulatorError, Result};

/// Fixed-size, byte-addressable storage block
///
/// Offsets are relative to the start of the cell. The cell never grows.
///
/// # Example
/// ```
/// use rv32emu::core::memory::MemoryCell;
///
/// let mut cell = MemoryCell::new(16);
/// cell.write(3, 0xAB).unwrap();
/// assert_eq!(cell.read(3).unwrap(), 0xAB);
/// assert!(cell.read(16).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MemoryCell {
    data: Vec<u8>,
}

impl MemoryCell {
    /// Create a zero-filled cell of `size` bytes
    pub fn new(size: u32) -> Self {
        log::debug!("Initializing memory cell of {} bytes", size);
        Self {
            data: vec![0u8; size as usize],
        }
    }

    /// Read the byte at `offset`
    ///
    /// # Errors
    ///
    /// Returns [`EmulatorError::MemoryOutOfBounds`] when `offset >= size`.
    #[inline]
    pub fn read(&self, offset: u32) -> Result<u8> {
        self.data
            .get(offset as usize)
            .copied()
            .ok_or(EmulatorError::MemoryOutOfBounds {
                offset,
                size: self.size(),
            })
    }

    /// Write `value` at `offset`
    ///
    /// # Errors
    ///
    /// Returns [`EmulatorError::MemoryOutOfBounds`] when `offset >= size`.
    #[inline]
    pub fn write(&mut self, offset: u32, value: u8) -> Result<()> {
        let size = self.size();
        match self.data.get_mut(offset as usize) {
            Some(byte) => {
                *byte = value;
                Ok(())
            }
            None => Err(EmulatorError::MemoryOutOfBounds { offset, size }),
        }
    }

    /// Size of the cell in bytes
    #[inline]
    pub fn size(&self) -> u32 {
        self.data.len() as u32
    }

    /// Zero the whole cell
    pub fn clear(&mut self) {
        self.data.fill(0);
    }
}
