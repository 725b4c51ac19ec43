//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains some of:
//! - `mod.rs`: Domain types (validated, business-logic-ready)
//! - `wire.rs`: Raw serde structs matching API requests and responses
//! - `convert.rs`: `TryFrom`/`From` conversions with validation
//! - `client.rs`: Sub-client with HTTP methods

pub mod offer;
pub mod order;
pub mod search;
pub mod token;
