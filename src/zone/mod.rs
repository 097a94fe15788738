//! Drop zones: the registry of folder bindings and the two services that
//! move files into and between them.
//!
//! The services never touch UI state. They return report values which the
//! shell renders; the registry is the only owner of zone state.

pub mod batch;
pub mod conflict;
pub mod error;
pub mod reassign;
pub mod registry;
pub mod relocate;
pub mod report;
pub mod store;

pub use batch::{MoveBatch, Step};
pub use conflict::{AlwaysOverwrite, AlwaysSkip, Collision, ConflictResolver, Decision};
pub use error::ZoneError;
pub use reassign::{reassign, Reassignment};
pub use registry::{Zone, ZoneId, ZoneRegistry, DEFAULT_CAPACITY, DEFAULT_ZONE_COUNT};
pub use relocate::{relocate, Relocation};
pub use report::{ItemReport, Outcome, ReassignmentReport, RelocationReport};
pub use store::{Restored, StoreError, StoredZone, StoredZones, ZoneStore};
