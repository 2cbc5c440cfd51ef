//! Geometry and host render-tree integration for tapnode.
//!
//! - [`Point`], [`Size`], [`Rect`]: the geometry a widget needs for hit-testing
//! - [`RenderHost`]: the attach/detach surface the host render tree provides
//! - [`RecordingHost`]: an in-memory host that logs operations

mod host;
mod types;

pub use host::{HostOp, NodeKey, RecordingHost, RenderHost};
pub use types::{Point, Rect, Size};
