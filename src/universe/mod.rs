//! The type universe: what the host platform has loaded.
//!
//! The harvester never performs live reflection. It walks typed metadata
//! records exposed through the [`TypeUniverse`] trait, and all host-specific
//! capability checks are plain predicates over those records. The one
//! shipped implementation, [`SnapshotUniverse`], reads a JSON snapshot the
//! host adapter dumps out of the running platform.

pub mod snapshot;
pub mod types;

pub use snapshot::{ContextActionEntry, SnapshotUniverse, SnapshotUnit};
pub use types::{TypeMetadata, TypeUniverse, UnitSkip, UnitTypes};
