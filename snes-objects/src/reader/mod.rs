//! OBJECTS lump decoding
//!
//! The lump is a flat run of records with no header. Each record is 6 bytes,
//! or 8 when its type is angular and there is room left for the angle.
//! Anything shorter than a full record at the end is discarded.

use crate::object::{ObjectCollection, ObjectFlags, ObjectRecord};
use crate::types::is_angular;
use crate::{ANGLE_FIELD_SIZE, MAX_RECORD_SIZE, MIN_RECORD_SIZE};


/// Decode every record in an OBJECTS lump
///
/// Never fails: a trailing partial record is dropped, and an angular record
/// without room for its angle decodes with angle 0.
///
/// # Arguments
/// * `data` - Raw OBJECTS lump bytes
///
/// # Returns
/// Every complete record, in lump order
///
/// # Example
/// ```ignore
/// let data = std::fs::read("OBJECTS.01")?;
/// for obj in decode_objects(&data) {
///     println!("{} at ({}, {})", obj.kind, obj.x, obj.y);
/// }
/// ```
pub fn decode_objects(data: &[u8]) -> ObjectCollection {
    let mut objects = Vec::with_capacity(data.len() / MIN_RECORD_SIZE);
    objects.extend(ObjectReader::new(data));
    objects
}

/// Streaming OBJECTS decoder
///
/// Yields records front to back until fewer than `MIN_RECORD_SIZE` bytes
/// remain.
#[derive(Debug, Clone)]
pub struct ObjectReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ObjectReader<'a> {
    /// Create a reader over raw lump bytes
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes consumed by the records yielded so far
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_u16_be(&mut self) -> u16 {
        let value = u16::from_be_bytes([self.data[self.pos], self.data[self.pos + 1]]);
        self.pos += 2;
        value
    }
}

impl Iterator for ObjectReader<'_> {
    type Item = ObjectRecord;

    fn next(&mut self) -> Option<ObjectRecord> {
        if self.remaining() < MIN_RECORD_SIZE {
            return None;
        }

        let flags = ObjectFlags::from_bits(self.data[self.pos]);
        let kind = self.data[self.pos + 1];
        self.pos += 2;
        let x = self.read_u16_be() as i16;
        let y = self.read_u16_be() as i16;

        let angle = if is_angular(kind) && self.remaining() >= ANGLE_FIELD_SIZE {
            self.read_u16_be()
        } else {
            0
        };

        Some(ObjectRecord {
            flags,
            kind,
            x,
            y,
            angle,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        let min = remaining / MAX_RECORD_SIZE;
        let max = remaining / MIN_RECORD_SIZE;
        (min.min(max), Some(max))
    }
}

impl std::iter::FusedIterator for ObjectReader<'_> {}
