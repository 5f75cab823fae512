//! The composite `src` attribute: `"<offset>:<length>:<fileId>"`.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier the compiler assigns to every Solidity AST node within one
/// compilation unit. Negative values denote built-in global symbols.
pub type AstNodeId = i64;

/// Byte range of a node in its source file.
///
/// All three components may be `-1` when the compiler has no location to
/// report (for example the `nameLocation` of compiler-generated nodes),
/// which is why they are kept signed here. [`Src::offsets`] yields the
/// unsigned range for locations known to be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Src {
    pub byte_offset: i64,
    pub byte_length: i64,
    pub file_id: i64,
}

impl Src {
    /// Whether the compiler actually reported a location.
    pub fn is_set(&self) -> bool {
        self.byte_offset >= 0
    }

    /// `[start, end)` byte offsets. Panics when the location is unset.
    pub fn offsets(&self) -> (usize, usize) {
        assert!(self.is_set(), "src location is unset: {self}");
        let start = self.byte_offset as usize;
        (start, start + self.byte_length.max(0) as usize)
    }
}

impl FromStr for Src {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':').map(|p| p.parse::<i64>());
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(byte_offset)), Some(Ok(byte_length)), Some(Ok(file_id)), None) => Ok(Src {
                byte_offset,
                byte_length,
                file_id,
            }),
            _ => Err(format!(
                "src must be '<offset>:<length>:<fileId>', got {s:?}"
            )),
        }
    }
}

impl fmt::Display for Src {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.byte_offset, self.byte_length, self.file_id)
    }
}

impl Serialize for Src {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Src {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_src_triple() {
        let src: Src = "12:34:0".parse().unwrap();
        assert_eq!(src.byte_offset, 12);
        assert_eq!(src.byte_length, 34);
        assert_eq!(src.file_id, 0);
        assert_eq!(src.offsets(), (12, 46));
    }

    #[test]
    fn parses_unset_src() {
        let src: Src = "-1:-1:-1".parse().unwrap();
        assert!(!src.is_set());
    }

    #[test]
    fn rejects_malformed_src() {
        assert!("12:34".parse::<Src>().is_err());
        assert!("a:b:c".parse::<Src>().is_err());
        assert!("1:2:3:4".parse::<Src>().is_err());
    }

    #[test]
    fn deserializes_from_json_string() {
        let src: Src = serde_json::from_str("\"7:3:1\"").unwrap();
        assert_eq!(src.offsets(), (7, 10));
        assert_eq!(serde_json::to_string(&src).unwrap(), "\"7:3:1\"");
    }
}
