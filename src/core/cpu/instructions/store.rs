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

use super::super::decode::SType;
use super::super::Core;
use crate::core::error::Result;
use crate::core::memory::Bus;

impl Core {
    // === Store Instructions ===

    /// SB: Store Byte
    ///
    /// Stores the low 8 bits of rs2 to memory. No alignment restrictions.
    /// PC only advances when the write succeeds.
    ///
    /// Format: sb rs2, offset(rs1)
    /// Operation: memory[rs1 + sign_extend(offset)] = rs2[7:0]
    ///
    /// # Arguments
    ///
    /// * `instr` - Decoded S-type fields
    /// * `bus` - Memory bus for writing
    ///
    /// # Returns
    ///
    /// Ok(()) on success, `NoDevice` if the address is unmapped
    pub(crate) fn op_sb(&mut self, instr: SType, bus: &mut Bus) -> Result<()> {
        log::trace!("Executing SB: {:?}", instr);
        let addr = self.effective_address(instr.rs1, instr.imm);
        let value = (self.reg(instr.rs2) & 0xFF) as u8;

        bus.write8(addr, value)?;
        self.advance_pc();
        Ok(())
    }
}
