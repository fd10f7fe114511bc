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

use super::super::decode::IType;
use super::super::Core;
use crate::core::bits::sign_extend;
use crate::core::error::Result;
use crate::core::memory::Bus;

impl Core {
    // === Load Instructions ===

    /// LB: Load Byte (8-bit, sign-extended)
    ///
    /// Loads an 8-bit byte from memory and sign-extends it to 32 bits.
    /// No alignment restrictions. On a failed read neither rd nor PC change.
    ///
    /// Format: lb rd, offset(rs1)
    /// Operation: rd = sign_extend(memory[rs1 + sign_extend(offset)])
    ///
    /// # Arguments
    ///
    /// * `instr` - Decoded I-type fields
    /// * `bus` - Memory bus for reading
    ///
    /// # Returns
    ///
    /// Ok(()) on success, `NoDevice` if the address is unmapped
    pub(crate) fn op_lb(&mut self, instr: IType, bus: &mut Bus) -> Result<()> {
        log::trace!("Executing LB: {:?}", instr);
        let addr = self.effective_address(instr.rs1, instr.imm);

        let value = bus.read8(addr)?;
        self.set_reg(instr.rd, sign_extend(value as u32, 8) as u32);
        self.advance_pc();
        Ok(())
    }

    /// LBU: Load Byte Unsigned (8-bit, zero-extended)
    ///
    /// Loads an 8-bit byte from memory and zero-extends it to 32 bits.
    /// No alignment restrictions. On a failed read neither rd nor PC change.
    ///
    /// Format: lbu rd, offset(rs1)
    /// Operation: rd = zero_extend(memory[rs1 + sign_extend(offset)])
    ///
    /// # Arguments
    ///
    /// * `instr` - Decoded I-type fields
    /// * `bus` - Memory bus for reading
    ///
    /// # Returns
    ///
    /// Ok(()) on success, `NoDevice` if the address is unmapped
    pub(crate) fn op_lbu(&mut self, instr: IType, bus: &mut Bus) -> Result<()> {
        log::trace!("Executing LBU: {:?}", instr);
        let addr = self.effective_address(instr.rs1, instr.imm);

        let value = bus.read8(addr)?;
        self.set_reg(instr.rd, value as u32);
        self.advance_pc();
        Ok(())
    }
}
