//! # sentinel-stream - Server Connections
//!
//! Owns everything that talks to the directive server: the two push-stream
//! WebSocket clients and the REST directive API.
//!
//! Depends on [`sentinel_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Stream Clients
//! - [`StreamClient`] - One persistent WebSocket connection driven by a background task
//! - [`StreamHandler`] - Four-callback lifecycle trait (`on_open`, `on_message`, `on_error`, `on_close`)
//! - [`ConnectionState`] - Connecting / Connected / Disconnected
//!
//! ### Endpoints
//! - [`Endpoints`] - Resolved WebSocket and REST URLs for a server host
//! - [`TransportSecurity`] - Scheme selection policy (auto, secure, insecure)
//!
//! ### Directive API
//! - [`DirectiveApi`] - `reqwest` client for the retry/cancel endpoints
//! - [`DirectiveControl`] - Async trait over the API, mockable in tests
//! - [`DirectiveAction`] - Retry or Cancel

pub mod actions;
pub mod client;
pub mod endpoints;

pub use actions::{ActionResponse, DirectiveAction, DirectiveApi, DirectiveControl};
pub use client::{ConnectionState, StreamClient, StreamHandler};
pub use endpoints::{is_loopback_host, Endpoints, TransportSecurity};
