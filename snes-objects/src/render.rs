//! JSON diagnostic listing of decoded objects
//!
//! ```text
//! {
//!   "objects": [
//!     {
//!       "num": 0,
//!       "flags": "EASY|ACTIVE",
//!       "type": "Player1Start",
//!       "coords": [-64, 512],
//!       "angle": 90
//!     }
//!   ]
//! }
//! ```

use serde::Serialize;

use crate::UNKNOWN_TYPE_NAME;
use crate::object::ObjectRecord;
use crate::types::object_type;

/// Top-level listing document
#[derive(Debug, Clone, Serialize)]
pub struct ObjectListing {
    pub objects: Vec<ObjectEntry>,
}

/// One listed object
#[derive(Debug, Clone, Serialize)]
pub struct ObjectEntry {
    /// 0-based position in the lump
    pub num: usize,
    /// Pipe-joined flag names
    pub flags: String,
    /// Type display name
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub coords: [i16; 2],
    /// Angle in degrees
    pub angle: i16,
}

impl ObjectListing {
    pub fn new(objects: &[ObjectRecord]) -> Self {
        Self {
            objects: objects
                .iter()
                .enumerate()
                .map(|(num, obj)| ObjectEntry::new(num, obj))
                .collect(),
        }
    }
}

impl ObjectEntry {
    pub fn new(num: usize, obj: &ObjectRecord) -> Self {
        Self {
            num,
            flags: obj.flags.describe(),
            type_name: type_name(obj.kind),
            coords: [obj.x, obj.y],
            angle: obj.doom_angle(),
        }
    }
}

/// Display name for a type index, "Unknown" outside the table
pub fn type_name(kind: u8) -> &'static str {
    object_type(kind).map_or(UNKNOWN_TYPE_NAME, |info| info.name)
}

/// Render objects as a pretty-printed JSON document
pub fn render_objects(objects: &[ObjectRecord]) -> String {
    let listing = ObjectListing::new(objects);
    // Only strings, integers and arrays, so serialization cannot fail
    serde_json::to_string_pretty(&listing).unwrap_or_default()
}
