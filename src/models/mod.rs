// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: contact records, keyword sets, and their validation helpers.

pub mod keywords;
pub mod person;
