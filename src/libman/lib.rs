//! # Libman Architecture
//!
//! Libman keeps a small library's books, members and loans in a single JSON
//! file. It is a library with a console client: the menu in `cli/` is one
//! possible front end, and everything from `api.rs` inward is UI-agnostic.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the menu loop, prints results     │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the in-memory Document, loaded once                 │
//! │  - Dispatches to commands, saves after every mutation       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business rules over the Document                         │
//! │  - No I/O whatsoever                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: ensure_initialized / load / save        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules Enforced
//!
//! - A borrowed book cannot be removed.
//! - A member holding loans cannot be removed.
//! - A book cannot be borrowed twice.
//! - Member ids are unique; book and loan ids are generated and never reused.
//!
//! A book is borrowed exactly when a loan references it. Only
//! `borrow_book` and `return_book` flip that flag.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests on plain `Document` values.
//! 2. **API** (`api.rs`): persistence behavior against `InMemoryStore`.
//! 3. **Store** (`store/fs.rs`): real files in temp directories.
//! 4. **CLI** (`tests/`): the binary driven through stdin.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic per entity, plus housekeeping
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Book`, `Person`, `Loan`, `Document`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
