//! The nested operation log and its outbound feed.
//!
//! This module provides:
//! - [`Stroke`] / [`Page`] / [`History`] - pages of strokes of operations
//! - [`OutboundQueue`] - append-only feed of committed operations
//! - [`wire`] - JSON batches exchanged with remote peers
//!
//! ## Wire format
//!
//! Operations are adjacently tagged JSON objects:
//!
//! ```text
//! {"type":"setStroke","data":{"color":"#000000","width":2.0}}
//! {"type":"start","data":{"x":10.0,"y":10.0}}
//! {"type":"draw","data":{"x":20.0,"y":20.0}}
//! {"type":"stop"}
//! {"type":"clear"}
//! ```
//!
//! A batch is a JSON array of these objects, in commit order.

mod history;
mod outbound;
mod stroke;
pub mod wire;

pub use history::History;
pub use outbound::OutboundQueue;
pub use stroke::{Page, Stroke};
pub use wire::{decode_operations, encode_operations, WireError};
