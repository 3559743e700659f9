//! # Grist Core
//!
//! `grist-core` is the library powering the `grist` CLI. It provides a typed client for the
//! [Grist](https://www.getgrist.com) REST API: organizations, workspaces, documents, tables,
//! columns, records and users.
//!
//! ## Key Components
//!
//! * **[`GristClient`](client::GristClient):** The main entry point. Every method performs a
//!   single HTTP round trip and decodes the JSON response into the types of [`client`].
//! * **[`CellValue`](cell::CellValue):** The value of a single spreadsheet cell. Grist sends cells
//!   as an untagged JSON union, the [`cell`] module owns the codec that maps it to a Rust enum.
//!
//! ## Transport
//!
//! The client does not talk to `reqwest` directly. It goes through the [`transport::Transport`] trait,
//! with [`transport::ReqwestTransport`] as the default implementation. Any other implementation
//! (an in-memory double in tests, a proxying layer, ...) can be plugged in with
//! [`GristClient::with_transport`](client::GristClient::with_transport).
//!
//! ## Re-exports
//!
//! This crate re-exports `http` and `serde_json` so that consumers build requests and payloads
//! with compatible versions of these dependencies.
pub mod cell;
pub mod client;
pub mod transport;

// Re-exports
pub use http;
pub use serde_json;

pub use cell::{CellValue, GristObjCode, GristObject};
pub use client::{ClientConfig, GristClient};
