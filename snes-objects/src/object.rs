//! OBJECTS record types

use crate::types::is_angular;

/// Decoded OBJECTS lump, in encounter order
pub type ObjectCollection = Vec<ObjectRecord>;

/// One map object placement read from an OBJECTS lump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ObjectRecord {
    /// Placement flags (unknown bits are kept as read)
    pub flags: ObjectFlags,
    /// Index into `TYPE_TABLE`; not validated at decode time
    pub kind: u8,
    /// Map x coordinate
    pub x: i16,
    /// Map y coordinate
    pub y: i16,
    /// Short BAM facing angle, 0 for non-angular types
    pub angle: u16,
}

impl ObjectRecord {
    /// Create a record without an angle
    pub const fn new(flags: ObjectFlags, kind: u8, x: i16, y: i16) -> Self {
        Self {
            flags,
            kind,
            x,
            y,
            angle: 0,
        }
    }

    /// Set the BAM angle
    pub const fn with_angle(mut self, angle: u16) -> Self {
        self.angle = angle;
        self
    }

    /// Whether this record's type carries an angle field
    pub const fn is_angular(&self) -> bool {
        is_angular(self.kind)
    }

    /// Facing angle in degrees, 0 for non-angular records
    pub const fn doom_angle(&self) -> i16 {
        if self.is_angular() {
            doom_angle(self.angle)
        } else {
            0
        }
    }
}

/// Convert a short BAM angle to whole degrees (0-359)
///
/// Truncates, so several consecutive BAM values map to the same degree.
pub const fn doom_angle(bam: u16) -> i16 {
    (bam as u32 * 360 / 0x10000) as i16
}

/// SNES object placement flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ObjectFlags(u8);

impl ObjectFlags {
    /// Present on skill levels 1 and 2
    pub const SKILL_1_2: Self = Self(0x01);
    /// Present on skill level 3
    pub const SKILL_3: Self = Self(0x02);
    /// Present on skill levels 4 and 5
    pub const SKILL_4_5: Self = Self(0x04);
    /// Multiplayer only
    pub const MULTIPLAYER: Self = Self(0x10);
    /// Movable object
    pub const MOVABLE: Self = Self(0x40);
    /// Initially active
    pub const ACTIVE: Self = Self(0x80);

    /// Named flags in display order
    pub const NAMED: [(Self, &'static str); 6] = [
        (Self::SKILL_1_2, "EASY"),
        (Self::SKILL_3, "MEDIUM"),
        (Self::SKILL_4_5, "HARD"),
        (Self::MULTIPLAYER, "MULTI"),
        (Self::MOVABLE, "MOVABLE"),
        (Self::ACTIVE, "ACTIVE"),
    ];

    /// Create flags from raw u8
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Get raw bits
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Check if flag is set
    pub const fn contains(&self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Names of the set flags, pipe separated (empty if none are set)
    ///
    /// Bits without a name are ignored.
    pub fn describe(&self) -> String {
        Self::NAMED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl std::ops::BitOr for ObjectFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for ObjectFlags {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}
