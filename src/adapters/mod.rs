//! Adapters - Inbound interfaces to the domain.

pub mod http;
