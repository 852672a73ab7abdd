//! JSON-RPC API Layer
//!
//! Exposes the job query & statistics engine as JSON-RPC 2.0 methods.
//! The caller (an authenticating gateway) supplies `owner_id` on every request.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use server::{RpcServer, RpcServerConfig};
