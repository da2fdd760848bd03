//! Client side of the Faltadas REST API: wire types, the HTTP backend, and
//! the task-spawning sync client the main loop talks to.

pub mod client;
pub mod error;
pub mod model;
pub mod sync;
