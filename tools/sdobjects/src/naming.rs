//! THINGS output file naming
//!
//! An input named like `OBJECTS.12` produces `THINGS.12`. Inputs without a
//! two-digit extension are numbered `THINGS.0`, `THINGS.1`, ... in the order
//! they are named.

use std::path::{Path, PathBuf};

/// Output name prefix
const THINGS_PREFIX: &str = "THINGS";

/// Assigns output paths inside a directory
#[derive(Debug)]
pub struct OutputNamer {
    dir: PathBuf,
    next: u32,
}

impl OutputNamer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            next: 0,
        }
    }

    /// Output path for an input file
    pub fn output_path(&mut self, input: &Path) -> PathBuf {
        let name = match map_extension(input) {
            Some(ext) => format!("{}.{}", THINGS_PREFIX, ext),
            None => {
                let name = format!("{}.{}", THINGS_PREFIX, self.next);
                self.next += 1;
                name
            }
        };
        self.dir.join(name)
    }
}

/// Two trailing digits after a dot, e.g. "07" for `maps/OBJECTS.07`
fn map_extension(input: &Path) -> Option<String> {
    let text = input.to_string_lossy();
    let bytes = text.as_bytes();
    match bytes {
        [.., b'.', a, b] if a.is_ascii_digit() && b.is_ascii_digit() => {
            Some(format!("{}{}", *a as char, *b as char))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_extension() {
        assert_eq!(map_extension(Path::new("OBJECTS.01")).as_deref(), Some("01"));
        assert_eq!(map_extension(Path::new("a/b/e1m1.23")).as_deref(), Some("23"));
        assert_eq!(map_extension(Path::new(".99")).as_deref(), Some("99"));
        assert_eq!(map_extension(Path::new("OBJECTS.1")), None);
        assert_eq!(map_extension(Path::new("OBJECTS.123")), None);
        assert_eq!(map_extension(Path::new("OBJECTS.a1")), None);
        assert_eq!(map_extension(Path::new("01")), None);
    }

    #[test]
    fn test_numbered_outputs() {
        let mut namer = OutputNamer::new("out");
        assert_eq!(namer.output_path(Path::new("first.bin")), Path::new("out/THINGS.0"));
        assert_eq!(namer.output_path(Path::new("map.05")), Path::new("out/THINGS.05"));
        assert_eq!(namer.output_path(Path::new("second")), Path::new("out/THINGS.1"));
        assert_eq!(namer.output_path(Path::new("third.lmp")), Path::new("out/THINGS.2"));
    }
}
