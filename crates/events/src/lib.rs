//! Domain events: the `Event` contract, deterministic command execution,
//! and in-memory read-model projections.

pub mod event;
pub mod handler;
pub mod projection;

pub use event::Event;
pub use handler::execute;
pub use projection::Projection;
