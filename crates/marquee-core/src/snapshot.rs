//! Minimal structural snapshot for persistence.
//!
//! Only the frame data and the step survive a round trip; cursor position
//! and the step counter are transient playback state. The actual storage
//! format and location belong to the embedding host.

use serde::{Deserialize, Serialize};

/// Persistent form of a [`MarqueeText`](crate::MarqueeText).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Frames in playback order.
    pub data: Vec<String>,
    /// Step as stored. Reads as 0 when missing or malformed; restoring
    /// maps 0 to the default step of 1.
    #[serde(default, deserialize_with = "lenient_step")]
    pub step: u32,
}

// Snapshots written by older hosts carry anything from no step at all to a
// stringly-typed one; a malformed step must not invalidate the frame data.
fn lenient_step<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
    use std::fmt;

    struct StepVisitor;

    impl<'de> Visitor<'de> for StepVisitor {
        type Value = u32;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer step")
        }

        fn visit_u64<E>(self, value: u64) -> Result<u32, E>
        where
            E: de::Error,
        {
            Ok(u32::try_from(value).unwrap_or(0))
        }

        fn visit_i64<E>(self, value: i64) -> Result<u32, E>
        where
            E: de::Error,
        {
            Ok(u32::try_from(value).unwrap_or(0))
        }

        fn visit_f64<E>(self, _: f64) -> Result<u32, E>
        where
            E: de::Error,
        {
            Ok(0)
        }

        fn visit_bool<E>(self, _: bool) -> Result<u32, E>
        where
            E: de::Error,
        {
            Ok(0)
        }

        fn visit_str<E>(self, _: &str) -> Result<u32, E>
        where
            E: de::Error,
        {
            Ok(0)
        }

        fn visit_unit<E>(self) -> Result<u32, E>
        where
            E: de::Error,
        {
            Ok(0)
        }

        fn visit_none<E>(self) -> Result<u32, E>
        where
            E: de::Error,
        {
            Ok(0)
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<u32, A::Error>
        where
            A: SeqAccess<'de>,
        {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(0)
        }

        fn visit_map<A>(self, mut map: A) -> Result<u32, A::Error>
        where
            A: MapAccess<'de>,
        {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(0)
        }
    }

    deserializer.deserialize_any(StepVisitor)
}
