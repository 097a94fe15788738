//! Filesystem primitives used by the zone services.
//!
//! Everything here works on plain paths and knows nothing about zones, so
//! the helpers can be tested against temporary directories in isolation.

pub mod error;
pub mod helpers;
pub mod metadata;
pub mod mv;
pub mod path;
pub mod stat;
pub mod test_helpers;

pub use error::FsOpError;
