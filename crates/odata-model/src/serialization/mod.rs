// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Format-neutral parse and write abstractions.
//!
//! Models only talk to [`ParseNode`] and [`SerializationWriter`]; the JSON
//! implementation lives in [`crate::json`].

mod parse_node;
mod primitive;
mod writer;

pub use parse_node::{deserialize_into, ParseNode};
pub use primitive::Primitive;
pub use writer::SerializationWriter;
