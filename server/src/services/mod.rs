//! Service layer: domain logic behind the HTTP routes.
//!
//! DESIGN
//! ======
//! Routes stay thin: they extract state and body, call into a service, and
//! map the service error to a response.

pub mod chat;
pub mod persona;
