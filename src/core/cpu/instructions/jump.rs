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

use super::super::decode::{IType, JType};
use super::super::Core;
use crate::core::error::Result;

impl Core {
    // === Jump Instructions ===

    /// JAL: Jump and Link
    ///
    /// PC-relative jump, saving the address of the next instruction in rd.
    ///
    /// Format: jal rd, offset
    /// Operation: rd = PC + 4; PC = PC + sign_extend(offset)
    ///
    /// # Arguments
    ///
    /// * `instr` - Decoded J-type fields
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(crate) fn op_jal(&mut self, instr: JType) -> Result<()> {
        log::trace!("Executing JAL: {:?}", instr);
        let return_address = self.pc.wrapping_add(4);
        let target = self.pc.wrapping_add(instr.imm as u32);
        self.set_reg(instr.rd, return_address);
        self.pc = target;
        Ok(())
    }

    /// JALR: Jump and Link Register
    ///
    /// Indirect jump to rs1 + offset with bit 0 cleared, saving the address
    /// of the next instruction in rd. rs1 is read before rd is written, so
    /// `jalr x1, 0(x1)` jumps to the old value of x1.
    ///
    /// Format: jalr rd, offset(rs1)
    /// Operation: target = (rs1 + sign_extend(offset)) & !1; rd = PC + 4; PC = target
    ///
    /// # Arguments
    ///
    /// * `instr` - Decoded I-type fields
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(crate) fn op_jalr(&mut self, instr: IType) -> Result<()> {
        log::trace!("Executing JALR: {:?}", instr);
        let target = self.effective_address(instr.rs1, instr.imm) & !1;
        let return_address = self.pc.wrapping_add(4);
        self.set_reg(instr.rd, return_address);
        self.pc = target;
        Ok(())
    }
}
