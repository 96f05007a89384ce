// --- File: crates/agendify_availability/src/lib.rs ---
// Declare modules within this crate
pub mod doc;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod routes;
pub mod store;
#[cfg(test)]
mod test_support;

pub use error::AvailabilityError;
pub use handlers::AvailabilityState;
pub use routes::{router_with_state, routes};
pub use store::{DynScheduleStore, InMemoryScheduleStore};
