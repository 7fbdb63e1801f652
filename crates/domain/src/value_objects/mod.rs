//! Value objects - Immutable objects defined by their attributes

mod bio;
mod clan;
mod pool;
mod priority;

pub use bio::{BioField, CharacterBio};
pub use clan::Clan;
pub use pool::{pool_label, PoolResolver, PoolTable};
pub use priority::{Priorities, PriorityAssignment};
