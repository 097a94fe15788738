use thiserror::Error;

use crate::fs_op::FsOpError;
use crate::zone::registry::ZoneId;
use crate::zone::store::StoreError;

/// Errors that abort a whole zone operation.
///
/// Problems with individual files never show up here; they are recorded in
/// the operation's report instead.
#[derive(Debug, Error)]
pub enum ZoneError {
    #[error("no zone with id {0}")]
    UnknownZone(ZoneId),

    #[error("zone limit reached ({capacity} zones)")]
    CapacityReached { capacity: usize },

    #[error("zone name cannot be empty")]
    EmptyName,

    #[error(transparent)]
    Fs(#[from] FsOpError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
