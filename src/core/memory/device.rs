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

//! Memory-mapped device trait
//!
//! Every addressable unit on the bus (RAM, console, ...) implements
//! [`Device`]. The Bus only knows about this trait, so new device kinds can
//! be attached without touching the routing code.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              Memory Bus                     │
//! ├─────────────────────────────────────────────┤
//! │  Devices: Vec<Box<dyn Device>>              │
//! │                                             │
//! │  read8(addr) {                              │
//! │    for device in devices {                  │
//! │      if device.contains(addr) {             │
//! │        return device.read(addr)             │
//! │      }                                      │
//! │    }                                        │
//! │  }                                          │
//! └─────────────────────────────────────────────┘
//!           ▲                   ▲
//!           │                   │
//!    ┌──────┴──────┐    ┌──────┴──────┐
//!    │    RAM      │    │  Console    │
//!    │  (Device)   │    │  (Device)   │
//!    └─────────────┘    └─────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use rv32emu::core::error::{EmulatorError, Result};
//! use rv32emu::core::memory::Device;
//!
//! struct Latch {
//!     base: u32,
//!     value: u8,
//! }
//!
//! impl Device for Latch {
//!     fn base_address(&self) -> u32 {
//!         self.base
//!     }
//!
//!     fn size(&self) -> u32 {
//!         1
//!     }
//!
//!     fn read(&self, address: u32) -> Result<u8> {
//!         self.check_range(address)?;
//!         Ok(self.value)
//!     }
//!
//!     fn write(&mut self, address: u32, value: u8) -> Result<()> {
//!         self.check_range(address)?;
//!         self.value = value;
//!         Ok(())
//!     }
//! }
//!
//! let mut latch = Latch { base: 0x2000, value: 0 };
//! latch.write(0x2000, 7).unwrap();
//! assert_eq!(latch.read(0x2000).unwrap(), 7);
//! assert!(latch.read(0x2001).is_err());
//! ```

use crate::core::error::{EmulatorError, Result};

/// Trait for memory-mapped devices
///
/// A device answers byte accesses over `[base_address, base_address + size)`.
/// Addresses passed to [`read`](Device::read) and [`write`](Device::write)
/// are absolute bus addresses, not offsets. Each device re-checks the
/// address against its own range and fails with
/// [`EmulatorError::AddressOutOfRange`] when it does not belong to it.
///
/// # Thread Safety
///
/// Devices do not need to be `Send` or `Sync`; the bus is only ever driven
/// from one thread.
pub trait Device {
    /// First address this device responds to
    fn base_address(&self) -> u32;

    /// Number of bytes this device spans
    fn size(&self) -> u32;

    /// Read one byte at an absolute bus address
    ///
    /// # Errors
    ///
    /// Returns [`EmulatorError::AddressOutOfRange`] when `address` is not
    /// inside this device.
    fn read(&self, address: u32) -> Result<u8>;

    /// Write one byte at an absolute bus address
    ///
    /// # Errors
    ///
    /// Returns [`EmulatorError::AddressOutOfRange`] when `address` is not
    /// inside this device.
    fn write(&mut self, address: u32, value: u8) -> Result<()>;

    /// Check if this device contains the given address
    ///
    /// The end of the range is computed in 64 bits so that a device may end
    /// exactly at the top of the address space.
    fn contains(&self, address: u32) -> bool {
        let base = self.base_address() as u64;
        let end = base + self.size() as u64;
        let address = address as u64;
        address >= base && address < end
    }

    /// Fail with `AddressOutOfRange` unless `address` lies in this device
    fn check_range(&self, address: u32) -> Result<()> {
        if self.contains(address) {
            Ok(())
        } else {
            Err(EmulatorError::AddressOutOfRange {
                device: self.name().to_string(),
                address,
            })
        }
    }

    /// Device name for logging and error messages
    fn name(&self) -> &str {
        "Unknown Device"
    }
}
