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

//! Console (TTY) device
//!
//! A write-only character device. Bytes written anywhere inside its range
//! are forwarded to a sink (stdout by default). Reads inside the range
//! return 0; keyboard input is not modelled.
//!
//! Guest code prints by storing bytes to the console address:
//!
//! ```text
//! lui  x10, 0x10000      # x10 = 0x1000_0000
//! addi x11, x0, 72       # 'H'
//! sb   x11, 0(x10)
//! ```

use super::Device;
use crate::core::error::Result;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Console device forwarding written bytes to a sink
pub struct Console {
    base_address: u32,
    size: u32,
    sink: Box<dyn Write>,
}

impl Console {
    /// Create a console that prints to stdout
    pub fn new(base_address: u32, size: u32) -> Self {
        Self::with_sink(base_address, size, Box::new(io::stdout()))
    }

    /// Create a console that forwards bytes to `sink`
    pub fn with_sink(base_address: u32, size: u32, sink: Box<dyn Write>) -> Self {
        Self {
            base_address,
            size,
            sink,
        }
    }

    /// Create a console whose output is captured in memory
    ///
    /// # Example
    /// ```
    /// use rv32emu::core::memory::{Console, Device};
    ///
    /// let (mut console, output) = Console::capture(0x1000_0000, 0x10);
    /// console.write(0x1000_0000, b'o').unwrap();
    /// console.write(0x1000_0000, b'k').unwrap();
    /// assert_eq!(output.as_string(), "ok");
    /// ```
    pub fn capture(base_address: u32, size: u32) -> (Self, ConsoleOutput) {
        let output = ConsoleOutput::default();
        let console = Self::with_sink(base_address, size, Box::new(output.clone()));
        (console, output)
    }
}

impl Device for Console {
    fn base_address(&self) -> u32 {
        self.base_address
    }

    fn size(&self) -> u32 {
        self.size
    }

    fn read(&self, address: u32) -> Result<u8> {
        self.check_range(address)?;
        Ok(0)
    }

    fn write(&mut self, address: u32, value: u8) -> Result<()> {
        self.check_range(address)?;
        self.sink.write_all(&[value])?;
        self.sink.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "Console"
    }
}

/// Shared in-memory buffer receiving console output
///
/// Clones share the same buffer, so one handle can be given to the console
/// and another kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct ConsoleOutput {
    buffer: Rc<RefCell<Vec<u8>>>,
}

impl ConsoleOutput {
    /// Copy of all bytes written so far
    pub fn contents(&self) -> Vec<u8> {
        self.buffer.borrow().clone()
    }

    /// Output decoded as UTF-8, replacing invalid sequences
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.buffer.borrow()).into_owned()
    }
}

impl Write for ConsoleOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
