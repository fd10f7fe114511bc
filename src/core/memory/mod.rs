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

//! Memory bus implementation
//!
//! The Bus routes every byte access to the device mapped at that address.
//! Devices are kept in insertion order, which is also their priority: when
//! ranges overlap, the device added first wins. Overlaps are not rejected.
//!
//! # Memory Map
//!
//! The default machine (see [`crate::core::config::MachineConfig`]) maps:
//!
//! | Address Range           | Device  | Size    | Access |
//! |-------------------------|---------|---------|--------|
//! | 0x10000000-0x1000000F   | Console | 16B     | W      |
//! | 0x80000000-0x8FFFFFFF   | RAM     | 256MB   | R/W    |
//!
//! Multi-byte values are little-endian.
//!
//! # Example
//!
//! ```
//! use rv32emu::core::memory::{Bus, Ram};
//!
//! let mut bus = Bus::new();
//! bus.add_device(Ram::new(0x8000_0000, 0x1000));
//!
//! bus.write32(0x8000_0000, 0x12345678).unwrap();
//! assert_eq!(bus.read8(0x8000_0000).unwrap(), 0x78);
//! assert_eq!(bus.read32(0x8000_0000).unwrap(), 0x12345678);
//! assert!(bus.read8(0x0000_0000).is_err());
//! ```

use crate::core::error::{EmulatorError, Result};

mod cell;
mod console;
mod device;
mod ram;

pub use cell::MemoryCell;
pub use console::{Console, ConsoleOutput};
pub use device::Device;
pub use ram::Ram;

/// Memory bus owning all attached devices
///
/// Lookup is a linear scan over a handful of regions.
#[derive(Default)]
pub struct Bus {
    /// Attached devices in priority order
    devices: Vec<Box<dyn Device>>,
}

impl Bus {
    /// Create a bus with no devices attached
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
        }
    }

    /// Attach a device
    ///
    /// The device gets lower priority than every device already attached.
    pub fn add_device<D: Device + 'static>(&mut self, device: D) {
        log::debug!(
            "Attaching {} at 0x{:08X} ({} bytes)",
            device.name(),
            device.base_address(),
            device.size()
        );
        self.devices.push(Box::new(device));
    }

    /// Find the first device whose range contains `address`
    ///
    /// Absence is a lookup result, not an error; callers turn it into
    /// [`EmulatorError::NoDevice`] where needed.
    pub fn find_device(&self, address: u32) -> Option<&dyn Device> {
        self.devices
            .iter()
            .find(|device| device.contains(address))
            .map(|device| device.as_ref())
    }

    /// Mutable variant of [`find_device`](Self::find_device)
    pub fn find_device_mut(&mut self, address: u32) -> Option<&mut dyn Device> {
        let device = self
            .devices
            .iter_mut()
            .find(|device| device.contains(address))?;
        Some(device.as_mut())
    }

    /// Read a byte
    ///
    /// # Errors
    ///
    /// [`EmulatorError::NoDevice`] if nothing is mapped at `address`, or the
    /// device's own error.
    #[inline]
    pub fn read8(&self, address: u32) -> Result<u8> {
        self.find_device(address)
            .ok_or(EmulatorError::NoDevice { address })?
            .read(address)
    }

    /// Write a byte
    ///
    /// # Errors
    ///
    /// [`EmulatorError::NoDevice`] if nothing is mapped at `address`, or the
    /// device's own error.
    #[inline]
    pub fn write8(&mut self, address: u32, value: u8) -> Result<()> {
        self.find_device_mut(address)
            .ok_or(EmulatorError::NoDevice { address })?
            .write(address, value)
    }

    /// Read a little-endian 32-bit word
    ///
    /// Each of the four bytes is routed on its own, so a word may straddle
    /// two devices. No alignment is required.
    pub fn read32(&self, address: u32) -> Result<u32> {
        let mut bytes = [0u8; 4];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = self.read8(address.wrapping_add(i as u32))?;
        }
        Ok(u32::from_le_bytes(bytes))
    }

    /// Write a little-endian 32-bit word
    pub fn write32(&mut self, address: u32, value: u32) -> Result<()> {
        self.write_bytes(address, &value.to_le_bytes())
    }

    /// Write a run of bytes starting at `address`
    ///
    /// Stops at the first failing byte; earlier bytes stay written.
    pub fn write_bytes(&mut self, address: u32, data: &[u8]) -> Result<()> {
        for (i, &byte) in data.iter().enumerate() {
            self.write8(address.wrapping_add(i as u32), byte)?;
        }
        Ok(())
    }

    /// Iterate over attached devices in priority order
    pub fn devices(&self) -> impl Iterator<Item = &(dyn Device + 'static)> + '_ {
        self.devices.iter().map(|device| device.as_ref())
    }

    /// Number of attached devices
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Check if no device is attached
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

#[cfg(test)]
mod tests;
