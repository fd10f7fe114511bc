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

//! Bit manipulation helpers
//!
//! Field extraction and sign extension shared by every instruction decoder.
//! Bit ranges are half-open: `[start, end)`, counted from the least
//! significant bit.

/// Return a mask with the low `bits` bits set
///
/// Widths of 32 or more saturate to all ones.
///
/// # Example
/// ```
/// use rv32emu::core::bits::mask;
///
/// assert_eq!(mask(0), 0);
/// assert_eq!(mask(5), 0b1_1111);
/// assert_eq!(mask(40), 0xFFFF_FFFF);
/// ```
#[inline(always)]
pub fn mask(bits: u8) -> u32 {
    if bits >= 32 {
        u32::MAX
    } else {
        (1u32 << bits) - 1
    }
}

/// Return `mask(bits)` shifted left by `shift`
#[inline(always)]
pub fn shifted_mask(bits: u8, shift: u8) -> u32 {
    mask(bits).checked_shl(shift as u32).unwrap_or(0)
}

/// Extract bits `[start, end)` of `value`, right-justified
///
/// Returns 0 for an invalid range (`start > end` or `end > 32`).
///
/// # Example
/// ```
/// use rv32emu::core::bits::bits_slice;
///
/// // rd field of `addi x10, x0, 0`
/// assert_eq!(bits_slice(0x0000_0513, 7, 12), 10);
/// assert_eq!(bits_slice(0x0000_0513, 12, 7), 0);
/// ```
#[inline(always)]
pub fn bits_slice(value: u32, start: u8, end: u8) -> u32 {
    if start > end || end > 32 {
        return 0;
    }
    value.checked_shr(start as u32).unwrap_or(0) & mask(end - start)
}

/// Sign-extend the low `bits` bits of `value` to a full `i32`
///
/// Widths of 32 or more reinterpret `value` unchanged. A width of 0 yields 0.
///
/// # Example
/// ```
/// use rv32emu::core::bits::sign_extend;
///
/// assert_eq!(sign_extend(0x7FF, 12), 2047);
/// assert_eq!(sign_extend(0x800, 12), -2048);
/// assert_eq!(sign_extend(0xCD, 8), -51);
/// ```
#[inline(always)]
pub fn sign_extend(value: u32, bits: u8) -> i32 {
    if bits >= 32 {
        return value as i32;
    }
    if bits == 0 {
        return 0;
    }

    let shift = 32 - bits as u32;
    ((value << shift) as i32) >> shift
}
