// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Case-sensitive keyword search over an address book.
//!
//! - [`models`]: contact records and keyword sets.
//! - [`logic`]: the keyword filter.
//! - [`storage`]: JSON-backed address book repository.
//! - [`commands`]: the `find` command, its parser, and result formatting.

pub mod commands;
pub mod logic;
pub mod models;
pub mod storage;
