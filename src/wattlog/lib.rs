//! # Wattlog Architecture
//!
//! Wattlog is a UI-agnostic appliance tracking library with an interactive
//! console client on top. The core never assumes a terminal; the binary is
//! the only place that reads stdin or writes stdout.
//!
//! ## Layers
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI layer (cli/, wired by main.rs)                        │
//! │  - Menu loop, prompt/retry loops, table rendering          │
//! │  - The ONLY place that touches stdin/stdout/exit codes     │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  API layer (api.rs)                                        │
//! │  - Thin facade over commands, owns the registry            │
//! │  - Returns structured CmdResult values                     │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command layer (commands/*.rs)                             │
//! │  - Pure business logic, one file per feature               │
//! │  - No I/O assumptions whatsoever                           │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Registry (registry.rs)                                    │
//! │  - Insertion-ordered in-memory collection                  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input validation follows the same split: [`input`] holds pure
//! `&str -> Result` parsers, and the CLI layer wraps them in
//! prompt-until-valid loops. The parsers carry all the domain rules and are
//! tested without any terminal.
//!
//! ## Testing Strategy
//!
//! 1. **Commands and input** get thorough unit tests beside the code; this
//!    is where most testing lives.
//! 2. **CLI** is driven by unit tests over scripted in-memory readers and
//!    writers (the session is generic over `BufRead`/`Write`).
//! 3. **End to end**: `tests/` runs the compiled binary with scripted stdin
//!    and asserts on the table output contract.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for register, list, and search
//! - [`registry`]: The in-memory collection and display indexing
//! - [`model`]: The `Appliance` record
//! - [`input`]: Pure input validation
//! - [`error`]: Error types
//! - `cli`: Menu loop, prompting, and rendering for the binary (not part
//!   of the lib API)

pub mod api;
pub mod commands;
pub mod error;
pub mod input;
pub mod model;
pub mod registry;
