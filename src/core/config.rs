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

//! Machine configuration
//!
//! Describes the memory map of the emulated machine: where RAM lives, how
//! large it is, and whether the console device is attached. Configurations
//! are read from TOML files:
//!
//! ```toml
//! [ram]
//! base = 0x80000000
//! size = 0x10000000
//!
//! [console]
//! enabled = true
//! base = 0x10000000
//! size = 0x10
//! ```
//!
//! Missing tables and keys fall back to the defaults shown above (with the
//! console disabled).

use std::path::Path;

use serde::Deserialize;

use super::error::ConfigError;

/// Default RAM base address
pub const DEFAULT_RAM_BASE: u32 = 0x8000_0000;

/// Default RAM size (256 MiB)
pub const DEFAULT_RAM_SIZE: u32 = 0x1000_0000;

/// Default console base address
pub const DEFAULT_CONSOLE_BASE: u32 = 0x1000_0000;

/// Default console window size
pub const DEFAULT_CONSOLE_SIZE: u32 = 0x10;

/// Environment variable naming the default configuration file
pub const CONFIG_ENV_VAR: &str = "RV32EMU_CONFIG";

/// Complete machine configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MachineConfig {
    /// Main memory
    pub ram: RamConfig,
    /// Character output device
    pub console: ConsoleConfig,
}

/// RAM placement
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RamConfig {
    pub base: u32,
    pub size: u32,
}

impl Default for RamConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_RAM_BASE,
            size: DEFAULT_RAM_SIZE,
        }
    }
}

/// Console placement
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Attach the console to the bus
    pub enabled: bool,
    pub base: u32,
    pub size: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base: DEFAULT_CONSOLE_BASE,
            size: DEFAULT_CONSOLE_SIZE,
        }
    }
}

impl MachineConfig {
    /// Parse and validate a configuration from TOML text
    ///
    /// # Example
    ///
    /// ```
    /// use rv32emu::core::config::MachineConfig;
    ///
    /// let config = MachineConfig::from_toml_str("[console]\nenabled = true").unwrap();
    /// assert!(config.console.enabled);
    /// assert_eq!(config.ram.base, 0x8000_0000);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: MachineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a TOML file
    ///
    /// # Returns
    ///
    /// - `Ok(MachineConfig)` if the file is valid
    /// - `Err(ConfigError)` if it cannot be read, parsed or validated
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded machine config from {}", path.display());
        Ok(config)
    }

    /// Check that every region is non-empty and stays below 2^32
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_region("ram", self.ram.base, self.ram.size)?;
        if self.console.enabled {
            check_region("console", self.console.base, self.console.size)?;
        }
        Ok(())
    }
}

fn check_region(region: &'static str, base: u32, size: u32) -> Result<(), ConfigError> {
    let end = base as u64 + size as u64;
    if size == 0 || end > (1u64 << 32) {
        return Err(ConfigError::InvalidRegion { region, base, size });
    }
    Ok(())
}
