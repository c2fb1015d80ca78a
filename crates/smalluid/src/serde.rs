use crate::SmallUid;
use core::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

impl Serialize for SmallUid {
    /// Renders as the base62 display string, never the hex form.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SmallUid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DisplayVisitor;

        impl de::Visitor<'_> for DisplayVisitor {
            type Value = SmallUid;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a base62 identifier string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                SmallUid::from_string(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(DisplayVisitor)
    }
}
