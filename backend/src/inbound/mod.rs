//! Inbound adapters that translate external requests into domain service
//! calls while keeping framework details at the edge.
//!
//! REST handlers live under [`http`]; [`events`] consumes the
//! account-created channel.

pub mod events;
pub mod http;
