//! Worker process supervision.
//!
//! The supervisor owns a fixed arena of worker slots (one per CPU by default).
//! Each slot holds at most one child process serving HTTP on the shared
//! `SO_REUSEPORT` address. Whenever a child exits, for any reason, the slot
//! spawns a replacement so the pool returns to its configured size.

mod exit;
mod launcher;
mod pool;

pub use launcher::CommandLauncher;
pub use pool::WorkerSupervisor;
