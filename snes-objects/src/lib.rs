//! snes-objects: SNES Doom OBJECTS lump decoder and PC Doom THINGS encoder
//!
//! The SNES port of Doom stores map object placements in an "OBJECTS" lump
//! with its own compact encoding: a one byte type index into the console's
//! object data table, a one byte flag set, big-endian coordinates, and an
//! optional short BAM angle that is only present for spawn points and
//! teleport destinations.
//!
//! This crate decodes those lumps, renders them as a JSON listing for
//! inspection, and re-encodes them as PC Doom "THINGS" lumps that the usual
//! PC level tooling understands.
//!
//! # Usage
//!
//! ```ignore
//! use snes_objects::{decode_objects, encode_things, render_objects, EncodeOptions};
//!
//! let data = std::fs::read("OBJECTS.01")?;
//! let objects = decode_objects(&data);
//!
//! println!("{}", render_objects(&objects));
//!
//! let things = encode_things(&objects, &EncodeOptions::default())?;
//! std::fs::write("THINGS.01", things)?;
//! ```
//!
//! # OBJECTS Record Layout
//!
//! ```text
//! 0x00: flags  u8
//! 0x01: type   u8      index into TYPE_TABLE
//! 0x02: x      i16 BE
//! 0x04: y      i16 BE
//! 0x06: angle  u16 BE  only when type <= LAST_ANGULAR
//! ```
//!
//! Records are concatenated with no header or length prefix, so a record is
//! either 6 or 8 bytes long depending on its type byte.

mod error;
mod object;
mod reader;
mod render;
mod things;
mod types;

pub use error::ThingsError;
pub use object::{ObjectCollection, ObjectFlags, ObjectRecord, doom_angle};
pub use reader::{ObjectReader, decode_objects};
pub use render::{ObjectEntry, ObjectListing, render_objects, type_name};
pub use things::{
    EncodeOptions, EncodeReport, ThingOptions, ThingRecord, UnknownTypePolicy, decode_things,
    encode_things, encode_things_with_report, write_things,
};
pub use types::{LAST_ANGULAR, ObjectTypeInfo, TYPE_COUNT, TYPE_TABLE, is_angular, object_type};

// =============================================================================
// Constants
// =============================================================================

/// Size of the fixed part of an OBJECTS record (flags, type, x, y)
pub const MIN_RECORD_SIZE: usize = 6;

/// Size of the trailing angle field carried by angular records
pub const ANGLE_FIELD_SIZE: usize = 2;

/// Size of an angular OBJECTS record
pub const MAX_RECORD_SIZE: usize = MIN_RECORD_SIZE + ANGLE_FIELD_SIZE;

/// Size of one PC Doom THINGS record
pub const THING_SIZE: usize = 10;

/// Display name used for type indices outside the table
pub const UNKNOWN_TYPE_NAME: &str = "Unknown";
