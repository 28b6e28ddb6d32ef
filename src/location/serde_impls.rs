//! Canonical-string serde implementations.
//!
//! Locations serialize as their canonical encoding and deserialize through
//! the analyzer, so the wire format is exactly the codec string and invalid
//! shapes are rejected at the serde boundary.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::location::groups::Location;
use crate::location::types::{AbsDir, AbsFile, RelDir, RelFile};

macro_rules! string_codec_serde {
    ($ty:ident, $expecting:literal) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.encode())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct CodecVisitor;

                impl Visitor<'_> for CodecVisitor {
                    type Value = $ty;

                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        write!(f, $expecting)
                    }

                    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                        $ty::decode(value).map_err(de::Error::custom)
                    }
                }

                deserializer.deserialize_str(CodecVisitor)
            }
        }
    };
}

string_codec_serde!(AbsFile, "an absolute file path string");
string_codec_serde!(AbsDir, "an absolute directory path string");
string_codec_serde!(RelFile, "a relative file path string");
string_codec_serde!(RelDir, "a relative directory path string");
string_codec_serde!(Location, "a file or directory path string");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_canonical_string() {
        let dir = AbsDir::decode("/home").unwrap();
        assert_eq!(serde_json::to_string(&dir).unwrap(), "\"/home/\"");

        let file = RelFile::decode("../lib/a.js").unwrap();
        assert_eq!(serde_json::to_string(&file).unwrap(), "\"./../lib/a.js\"");
    }

    #[test]
    fn test_deserialize_round_trip() {
        let file = AbsFile::decode("/a/b.txt").unwrap();
        let json = serde_json::to_string(&file).unwrap();
        let back: AbsFile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, file);
    }

    #[test]
    fn test_deserialize_rejects_wrong_shape() {
        let result: Result<AbsFile, _> = serde_json::from_str("\"/a/b/\"");
        assert!(result.is_err());

        let result: Result<RelDir, _> = serde_json::from_str("\"/a/\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_location_deserialize_any_shape() {
        for input in ["\"/a/b.txt\"", "\"/a/\"", "\"a.txt\"", "\"./\""] {
            let loc: Location = serde_json::from_str(input).unwrap();
            let json = serde_json::to_string(&loc).unwrap();
            let back: Location = serde_json::from_str(&json).unwrap();
            assert_eq!(back, loc);
        }
    }

    #[test]
    fn test_deserialize_rejects_non_string() {
        let result: Result<Location, _> = serde_json::from_str("42");
        assert!(result.is_err());
    }
}
