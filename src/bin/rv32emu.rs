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

use clap::Parser;
use log::{error, info, warn};
use rv32emu::core::config::{MachineConfig, CONFIG_ENV_VAR};
use rv32emu::core::error::Result;
use rv32emu::core::system::System;

/// Progress interval for unbounded runs
const UNBOUNDED_LOG_INTERVAL: u64 = 10_000_000;

/// RISC-V RV32I emulator
#[derive(Parser)]
#[command(name = "rv32emu")]
#[command(about = "RISC-V RV32I emulator", long_about = None)]
struct Args {
    /// Path to a statically linked RV32I ELF executable
    elf_file: String,

    /// Number of instructions to execute (0 = run until an error)
    #[arg(short = 'n', long, default_value = "0")]
    steps: u64,

    /// Attach the console device at its configured address
    #[arg(long)]
    dummy_tty: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Machine configuration file (TOML)
    #[arg(long)]
    config: Option<String>,

    /// Write an execution trace to this file
    #[arg(long)]
    trace: Option<String>,
}

fn main() -> Result<()> {
    // Optional .env for RUST_LOG / RV32EMU_CONFIG during development
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    info!("rv32emu v{}", env!("CARGO_PKG_VERSION"));
    info!("Starting RISC-V RV32I emulator");

    let mut config = load_config(args.config.as_deref())?;
    if args.dummy_tty {
        config.console.enabled = true;
    }

    let mut system = System::new(&config)?;

    if let Some(path) = &args.trace {
        system.enable_tracing(path)?;
    }

    info!("Loading ELF from: {}", args.elf_file);
    match system.load_elf(&args.elf_file) {
        Ok(elf) => info!(
            "ELF loaded: entry=0x{:08X}, {} segment(s)",
            elf.entry, elf.segments
        ),
        Err(e) => {
            error!("Failed to load ELF file: {}", e);
            return Err(e);
        }
    }

    info!("Starting execution...");

    let total = args.steps;
    let log_interval = if total == 0 {
        UNBOUNDED_LOG_INTERVAL
    } else {
        (total / 10).max(1)
    };

    let mut executed: u64 = 0;
    while total == 0 || executed < total {
        if executed % log_interval == 0 && executed > 0 {
            info!(
                "Progress: {} instructions | PC: 0x{:08X}",
                executed,
                system.pc()
            );
        }

        if let Err(e) = system.step() {
            error!("Error at PC=0x{:08X}: {}", system.pc(), e);
            error!("Instruction count: {}", executed);
            system.core().dump_registers();
            system.disable_tracing();
            return Err(e);
        }
        executed += 1;
    }

    system.disable_tracing();

    info!("Emulation completed successfully!");
    info!("Total instructions: {}", system.instructions());
    info!("Final PC: 0x{:08X}", system.pc());

    Ok(())
}

/// Resolve the machine configuration
///
/// `--config` wins over `RV32EMU_CONFIG`; with neither, defaults apply.
fn load_config(path: Option<&str>) -> Result<MachineConfig> {
    let path = path
        .map(str::to_owned)
        .or_else(|| std::env::var(CONFIG_ENV_VAR).ok());

    match path {
        Some(path) => {
            info!("Loading machine config from: {}", path);
            Ok(MachineConfig::load(&path)?)
        }
        None => {
            warn!("No machine config given, using defaults");
            Ok(MachineConfig::default())
        }
    }
}
