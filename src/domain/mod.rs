// SPDX-License-Identifier: MPL-2.0
//! Domain types for the carousel engine.
//!
//! Pure value types with no I/O: the item contract the engine requires, and
//! validated newtypes for values that must stay within known bounds.

pub mod item;
pub mod newtypes;
