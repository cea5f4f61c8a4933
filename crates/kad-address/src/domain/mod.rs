//! Domain Layer - Pure address space logic with no I/O
//!
//! - Fixed-width addresses and their textual encodings
//! - Proximity order and XOR distance comparison
//! - Address generation at a target proximity, key ranges
//! - Address space configuration

pub mod address;
pub mod config;
pub mod generation;
pub mod proximity;

pub use address::*;
pub use config::*;
pub use generation::*;
pub use proximity::*;
