//! SNES object type table
//!
//! The OBJECTS type byte indexes the console's object data table. This module
//! mirrors that table's order and pairs every entry with the PC Doom DoomEd
//! number it translates to.

/// One entry of the object type table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectTypeInfo {
    /// PC Doom DoomEd number
    pub doomednum: i16,
    /// Display name
    pub name: &'static str,
}

const fn entry(doomednum: i16, name: &'static str) -> ObjectTypeInfo {
    ObjectTypeInfo { doomednum, name }
}

/// Number of entries in the object type table
pub const TYPE_COUNT: usize = 64;

/// Highest type index that carries an angle field (TeleportSpot)
///
/// Angular types are a prefix of `TYPE_TABLE`: the player starts, the
/// deathmatch start and the teleport destination. Reordering the table
/// breaks decoding.
pub const LAST_ANGULAR: u8 = 5;

/// Object type table, indexed by the OBJECTS type byte
pub const TYPE_TABLE: [ObjectTypeInfo; TYPE_COUNT] = [
    // Angular
    entry(1, "Player1Start"),
    entry(2, "Player2Start"),
    entry(3, "Player3Start"),
    entry(4, "Player4Start"),
    entry(11, "DeathMatchStart"),
    entry(14, "TeleportSpot"),
    // Monsters
    entry(3004, "Soldier"),
    entry(9, "Sergeant"),
    entry(3001, "Trooper"),
    entry(3002, "Demon"),
    entry(3005, "CacoDemon"),
    entry(3006, "LostSoul"),
    entry(3003, "BaronOfHell"),
    entry(16, "CyberDemon"),
    entry(7, "SpiderDemon"),
    // Weapons
    entry(2001, "ShotGun"),
    entry(2005, "ChainSaw"),
    entry(2002, "ChainGun"),
    entry(2003, "RocketLauncher"),
    entry(2004, "PlasmaGun"),
    entry(2006, "BFG9000"),
    // Keys
    entry(13, "RedKeyCard"),
    entry(5, "BlueKeyCard"),
    entry(6, "YellowKeyCard"),
    entry(38, "RedSkullKey"),
    entry(39, "YellowSkullKey"),
    entry(40, "BlueSkullKey"),
    // Ammo
    entry(8, "BackPack"),
    entry(2007, "Clip"),
    entry(2048, "AmmoBox"),
    entry(2008, "Shells"),
    entry(2049, "ShellsBox"),
    entry(2010, "Rocket"),
    entry(2046, "RocketBox"),
    entry(2047, "Cell"),
    entry(17, "CellPack"),
    // Health, armor and powerups
    entry(2011, "StimPak"),
    entry(2012, "Medikit"),
    entry(2014, "HealthBonus"),
    entry(2015, "ArmorBonus"),
    entry(2018, "ArmorGreen"),
    entry(2019, "ArmorBlue"),
    entry(2013, "SoulSphere"),
    entry(2022, "Invulnerable"),
    entry(2023, "Berserk"),
    entry(2024, "Invisible"),
    entry(2025, "RadiationSuit"),
    entry(2026, "ComputerMap"),
    entry(2045, "LightGoggles"),
    // Decorations
    entry(2035, "Barrel"),
    entry(2028, "FloorLamp"),
    entry(10, "BloodyMess"),
    entry(20, "DeadTrooper"),
    entry(21, "DeadDemon"),
    entry(27, "SkullOnPole"),
    entry(31, "PillarShortGreen"),
    entry(34, "Candle"),
    entry(35, "Candelabra"),
    entry(42, "FlamingSkullRock"),
    entry(43, "TreeGray"),
    entry(46, "FireStickTallRed"),
    entry(47, "ShrubBrown"),
    entry(48, "ColumnTechTall"),
    entry(55, "FireStickShortBlue"),
];

/// Look up a type index, `None` if it is outside the table
pub fn object_type(kind: u8) -> Option<&'static ObjectTypeInfo> {
    TYPE_TABLE.get(kind as usize)
}

/// Whether records of this type carry a trailing angle field
pub const fn is_angular(kind: u8) -> bool {
    kind <= LAST_ANGULAR
}
