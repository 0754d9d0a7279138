// Application layer: wires configuration into the core helpers for the CLI.

#[cfg(feature = "cli")]
pub mod commands;
