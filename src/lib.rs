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

//! RISC-V RV32I emulator core library
//!
//! This library provides the core emulation components for a small RV32I
//! machine: a CPU core with a fetch-decode-execute loop, a memory bus that
//! routes byte accesses to memory-mapped devices (RAM and a console), an
//! ELF loader and the system glue that drives them.
//!
//! # Example
//!
//! ```
//! use rv32emu::core::cpu::Core;
//! use rv32emu::core::memory::{Bus, Ram};
//!
//! let mut bus = Bus::new();
//! bus.add_device(Ram::new(0x8000_0000, 0x1000));
//!
//! let mut core = Core::new();
//! core.set_pc(0x8000_0000);
//!
//! // addi x10, x0, 42
//! bus.write32(0x8000_0000, 0x02A00513).unwrap();
//! core.step(&mut bus).unwrap();
//! assert_eq!(core.reg(10), 42);
//! ```

pub mod core;
