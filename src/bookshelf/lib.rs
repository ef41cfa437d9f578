//! # Bookshelf Architecture
//!
//! Bookshelf is a small home-library catalog driven by numbered text menus and
//! stored as one JSON file. The catalog logic is a library; the binary only
//! wires it to a terminal.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, cli/)                                     │
//! │  - Flags, config, logging setup, stdin/stdout console       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Screens (screens/) on the menu engine (menu/)              │
//! │  - A stack of menus, each rendered from the current catalog │
//! │  - All terminal I/O goes through the `Console` trait        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the save policy          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Catalog operations returning `CmdResult` + messages      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `BookStorage` in memory, JSON load/save in `store::fs`   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Printing Below the Screens
//!
//! From `api.rs` inward, code returns `Result<CmdResult>` and never writes to
//! stdout or stderr. Screens turn messages into console lines; tests swap the
//! terminal for a [`menu::console::ScriptedConsole`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per catalog operation
//! - [`store`]: `BookStorage` and its JSON file format
//! - [`model`]: `Book` and `BookStatus`
//! - [`search`]: `Pattern` and `SearchCondition`
//! - [`events`]: Removal notifications with weak subscribers
//! - [`menu`]: Menu stack engine and console abstraction
//! - [`input`]: Retry-until-valid prompts
//! - [`pagination`]: Page arithmetic for list screens
//! - [`screens`]: The application's menus
//! - [`config`]: `config.json` handling
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod input;
pub mod menu;
pub mod model;
pub mod pagination;
pub mod screens;
pub mod search;
pub mod store;
