//! # Ports Layer
//!
//! Trait definitions for the inbound interface.

pub mod inbound;

pub use inbound::WebhookSignatureApi;
