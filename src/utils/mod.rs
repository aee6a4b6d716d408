//! Utility Module
//!
//! Small helpers shared by the sweep stages: file checks, file name
//! inspection and logger setup.

pub mod io;
pub mod logger;
pub mod naming;

pub use self::{
    io::file_exists,
    logger::init_logging,
    naming::{file_name, has_uppercase},
};
