//! The ingext operator CLI library.
//!
//! Manages named cluster profiles, resolves the effective context of each
//! command, assembles resource configuration from typed parameters and calls
//! the platform API through one narrow service per resource domain.
//!
//! # Modules
//!
//! - `configuration`: the profile store persisted in `~/.ingext/config.yaml`
//! - `context`: context resolution and the per-command execution context
//! - `assembler`: config and secret documents built from `--config*` flags
//! - `secrets`: bootstrap values read from Kubernetes
//! - `platform`: HTTP transport to the platform API
//! - `services`: user, role, integration and stream services
//! - `commands` / `actions`: CLI definitions and their handlers

pub mod actions;
pub mod assembler;
pub mod commands;
pub mod configuration;
pub mod context;
pub mod error;
pub mod format;
pub mod model;
pub mod param_utils;
pub mod platform;
pub mod secrets;
pub mod services;
