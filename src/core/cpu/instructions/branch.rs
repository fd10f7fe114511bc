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

use super::super::decode::BType;
use super::super::Core;
use crate::core::error::Result;

impl Core {
    // === Branch Instructions ===

    /// BNE: Branch on Not Equal
    ///
    /// Conditional PC-relative branch if two registers differ.
    ///
    /// Format: bne rs1, rs2, offset
    /// Operation: if (rs1 != rs2) PC = PC + sign_extend(offset) else PC = PC + 4
    ///
    /// # Arguments
    ///
    /// * `instr` - Decoded B-type fields
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(crate) fn op_bne(&mut self, instr: BType) -> Result<()> {
        log::trace!("Executing BNE: {:?}", instr);
        if self.reg(instr.rs1) != self.reg(instr.rs2) {
            self.branch(instr.imm);
        } else {
            self.advance_pc();
        }
        Ok(())
    }

    /// Take a branch relative to the branch instruction's own address
    ///
    /// # Arguments
    ///
    /// * `offset` - Signed byte offset from the current PC
    pub(crate) fn branch(&mut self, offset: i32) {
        self.pc = self.pc.wrapping_add(offset as u32);
    }
}
