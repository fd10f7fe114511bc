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

use super::super::decode::{IType, UType};
use super::super::Core;
use crate::core::error::Result;

impl Core {
    // === Arithmetic Instructions ===

    /// ADDI: Add Immediate
    ///
    /// Adds a sign-extended 12-bit immediate to rs1. Overflow wraps.
    ///
    /// Format: addi rd, rs1, imm
    /// Operation: rd = rs1 + sign_extend(imm)
    ///
    /// # Arguments
    ///
    /// * `instr` - Decoded I-type fields
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(crate) fn op_addi(&mut self, instr: IType) -> Result<()> {
        log::trace!("Executing ADDI: {:?}", instr);
        let value = self.reg(instr.rs1).wrapping_add(instr.imm as u32);
        self.set_reg(instr.rd, value);
        self.advance_pc();
        Ok(())
    }

    /// LUI: Load Upper Immediate
    ///
    /// Places the 20-bit immediate in the upper bits of rd, clearing the
    /// low 12 bits.
    ///
    /// Format: lui rd, imm
    /// Operation: rd = imm << 12
    pub(crate) fn op_lui(&mut self, instr: UType) -> Result<()> {
        log::trace!("Executing LUI: {:?}", instr);
        self.set_reg(instr.rd, instr.imm << 12);
        self.advance_pc();
        Ok(())
    }
}
