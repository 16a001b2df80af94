//! Host-side helpers: save files and logging.

pub mod logging;
pub mod persistence;
