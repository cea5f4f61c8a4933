//! # Ports Layer
//!
//! - `inbound` - Driving port (the API exposed to routing code)
//! - `outbound` - Driven ports (fill-byte source, configuration)

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
