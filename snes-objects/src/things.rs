//! PC Doom THINGS lump encoding
//!
//! # Layout
//! ```text
//! 0x00: x         i16 LE
//! 0x02: y         i16 LE
//! 0x04: angle     i16 LE  degrees
//! 0x06: type      i16 LE  DoomEd number
//! 0x08: options   u16 LE
//! ```
//!
//! Records are packed back to back with no header.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::THING_SIZE;
use crate::error::ThingsError;
use crate::object::{ObjectFlags, ObjectRecord};
use crate::types::object_type;

/// PC Doom thing option bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThingOptions(u16);

impl ThingOptions {
    /// Present on skill levels 1 and 2
    pub const SKILL_1_2: Self = Self(0x0001);
    /// Present on skill level 3
    pub const SKILL_3: Self = Self(0x0002);
    /// Present on skill levels 4 and 5
    pub const SKILL_4_5: Self = Self(0x0004);
    /// Deaf monster
    pub const AMBUSH: Self = Self(0x0008);
    /// Not spawned in single player
    pub const NOT_SINGLE: Self = Self(0x0010);

    /// SNES flag to PC option pairs. MOVABLE and ACTIVE have no PC equivalent.
    const FROM_OBJECT: [(ObjectFlags, Self); 4] = [
        (ObjectFlags::SKILL_1_2, Self::SKILL_1_2),
        (ObjectFlags::SKILL_3, Self::SKILL_3),
        (ObjectFlags::SKILL_4_5, Self::SKILL_4_5),
        (ObjectFlags::MULTIPLAYER, Self::NOT_SINGLE),
    ];

    /// Create options from raw u16
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Get raw bits
    pub const fn bits(&self) -> u16 {
        self.0
    }

    /// Check if option is set
    pub const fn contains(&self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Translate SNES placement flags
    pub fn from_object_flags(flags: ObjectFlags) -> Self {
        Self::FROM_OBJECT
            .iter()
            .filter(|(flag, _)| flags.contains(*flag))
            .fold(Self::default(), |acc, (_, option)| acc | *option)
    }
}

impl std::ops::BitOr for ThingOptions {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// One PC Doom THINGS record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThingRecord {
    pub x: i16,
    pub y: i16,
    /// Facing angle in degrees
    pub angle: i16,
    /// DoomEd number
    pub doomednum: i16,
    pub options: ThingOptions,
}

impl ThingRecord {
    /// Translate an OBJECTS record, `None` if its type is not in the table
    pub fn from_object(obj: &ObjectRecord) -> Option<Self> {
        let info = object_type(obj.kind)?;
        Some(Self {
            x: obj.x,
            y: obj.y,
            angle: obj.doom_angle(),
            doomednum: info.doomednum,
            options: ThingOptions::from_object_flags(obj.flags),
        })
    }

    /// Write record to bytes
    pub fn to_bytes(&self) -> [u8; THING_SIZE] {
        let mut bytes = [0u8; THING_SIZE];
        bytes[0..2].copy_from_slice(&self.x.to_le_bytes());
        bytes[2..4].copy_from_slice(&self.y.to_le_bytes());
        bytes[4..6].copy_from_slice(&self.angle.to_le_bytes());
        bytes[6..8].copy_from_slice(&self.doomednum.to_le_bytes());
        bytes[8..10].copy_from_slice(&self.options.bits().to_le_bytes());
        bytes
    }

    /// Read record from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < THING_SIZE {
            return None;
        }
        Some(Self {
            x: i16::from_le_bytes([bytes[0], bytes[1]]),
            y: i16::from_le_bytes([bytes[2], bytes[3]]),
            angle: i16::from_le_bytes([bytes[4], bytes[5]]),
            doomednum: i16::from_le_bytes([bytes[6], bytes[7]]),
            options: ThingOptions::from_bits(u16::from_le_bytes([bytes[8], bytes[9]])),
        })
    }
}

/// What to do with objects whose type is outside the type table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownTypePolicy {
    /// Fail the whole lump
    #[default]
    Reject,
    /// Leave the object out
    Skip,
}

impl std::str::FromStr for UnknownTypePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "skip" => Ok(Self::Skip),
            other => Err(format!(
                "unknown policy '{}' (expected 'reject' or 'skip')",
                other
            )),
        }
    }
}

/// THINGS encoding options
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    pub unknown_types: UnknownTypePolicy,
}

impl EncodeOptions {
    pub fn with_unknown_types(unknown_types: UnknownTypePolicy) -> Self {
        Self { unknown_types }
    }
}

/// Outcome of an encode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeReport {
    /// Things written
    pub written: usize,
    /// Collection indices left out under `UnknownTypePolicy::Skip`
    pub skipped: Vec<usize>,
}

/// Encode objects as a THINGS lump
///
/// # Arguments
/// * `objects` - Decoded OBJECTS records
/// * `options` - Handling of types with no DoomEd number
///
/// # Returns
/// * `Ok(Vec<u8>)` - THINGS lump bytes, `THING_SIZE` per encoded record
/// * `Err(ThingsError::UnknownType)` - Unknown type under `UnknownTypePolicy::Reject`
pub fn encode_things(
    objects: &[ObjectRecord],
    options: &EncodeOptions,
) -> Result<Vec<u8>, ThingsError> {
    encode_things_with_report(objects, options).map(|(data, _)| data)
}

/// Encode objects as a THINGS lump, reporting skipped objects
pub fn encode_things_with_report(
    objects: &[ObjectRecord],
    options: &EncodeOptions,
) -> Result<(Vec<u8>, EncodeReport), ThingsError> {
    let mut data = Vec::with_capacity(objects.len() * THING_SIZE);
    let mut report = EncodeReport::default();

    for (index, obj) in objects.iter().enumerate() {
        match ThingRecord::from_object(obj) {
            Some(thing) => {
                data.extend_from_slice(&thing.to_bytes());
                report.written += 1;
            }
            None => match options.unknown_types {
                UnknownTypePolicy::Reject => {
                    return Err(ThingsError::UnknownType {
                        index,
                        kind: obj.kind,
                    });
                }
                UnknownTypePolicy::Skip => report.skipped.push(index),
            },
        }
    }

    Ok((data, report))
}

/// Encode objects and write them to a THINGS file
///
/// Nothing is written if encoding fails.
///
/// # Arguments
/// * `objects` - Decoded OBJECTS records
/// * `path` - Destination file, created or truncated
/// * `options` - Handling of types with no DoomEd number
///
/// # Returns
/// * `Ok(EncodeReport)` - Things written and indices skipped
/// * `Err(ThingsError)` - Encoding or IO error
pub fn write_things(
    objects: &[ObjectRecord],
    path: &Path,
    options: &EncodeOptions,
) -> Result<EncodeReport, ThingsError> {
    let (data, report) = encode_things_with_report(objects, options)?;
    std::fs::write(path, &data)?;

    tracing::debug!(
        "Wrote {} things ({} bytes, {} skipped) to {}",
        report.written,
        data.len(),
        report.skipped.len(),
        path.display()
    );

    Ok(report)
}

/// Decode a THINGS lump
pub fn decode_things(data: &[u8]) -> Result<Vec<ThingRecord>, ThingsError> {
    if !data.len().is_multiple_of(THING_SIZE) {
        return Err(ThingsError::InvalidLength(data.len()));
    }
    Ok(data
        .chunks_exact(THING_SIZE)
        .filter_map(ThingRecord::from_bytes)
        .collect())
}
