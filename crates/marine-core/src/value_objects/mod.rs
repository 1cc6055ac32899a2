//! Value objects - immutable types that represent domain concepts

mod record_id;
mod segment;

pub use record_id::{RecordId, RecordKind};
pub use segment::Segment;
