//! Networking for the chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the `/api/chat` wire schema and the transport seam the state
//! machine sends through.

pub mod api;
