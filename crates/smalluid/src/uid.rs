use crate::{
    Hex, InvalidFormat, RandSource, SystemClock, ThreadRandom, TimeSource, decode_base62,
    encode_base62, hex::hex_to_u64,
};
use core::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A compact, time-sortable 64-bit identifier.
///
/// The canonical **binary form** is 16 lower-case hex characters: 11 chars
/// (44 bits) of millisecond-precision Unix timestamp followed by 5 chars
/// (20 bits) of randomness. The **display form** is the base62 rendering
/// produced by [`encode_base62`], cached at construction and always
/// consistent with the binary form.
///
/// Binary forms of identifiers generated at increasing times compare
/// lexicographically in temporal order. Display forms deliberately do *not*:
/// the codec reverses the hex before conversion so consecutive identifiers
/// get distinct leading characters.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SmallUid {
    hex: Hex,
    value: String,
}

impl SmallUid {
    /// Total hex characters in the binary form.
    pub const TOTAL_HEX_CHARS: usize = 16;

    /// Hex characters of the trailing random suffix.
    pub const RANDOM_HEX_CHARS: usize = 5;

    /// Hex characters of the leading timestamp.
    pub const TIMESTAMP_HEX_CHARS: usize = Self::TOTAL_HEX_CHARS - Self::RANDOM_HEX_CHARS;

    /// The all-zero sentinel identifier; renders as `"0"`.
    #[must_use]
    pub fn nil() -> Self {
        // The zero numeral is the one that keeps its single zero digit.
        Self {
            hex: Hex::zeroed(Self::TOTAL_HEX_CHARS),
            value: String::from("0"),
        }
    }

    /// Generates a fresh identifier from the system clock and the
    /// thread-local RNG.
    #[must_use]
    pub fn generate() -> Self {
        Self::generate_with(&SystemClock, &ThreadRandom)
    }

    /// Generates a fresh identifier from the provided clock and random
    /// source.
    ///
    /// Uniqueness is probabilistic: 20 random bits per millisecond tick.
    ///
    /// # Panics
    ///
    /// Panics if the clock reports a time past what 44 bits of milliseconds
    /// can hold (around year 2527).
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(time, rng)))]
    #[must_use]
    pub fn generate_with<T, R>(time: &T, rng: &R) -> Self
    where
        T: TimeSource,
        R: RandSource,
    {
        let millis = time.current_millis();
        let timestamp = format!("{millis:0width$x}", width = Self::TIMESTAMP_HEX_CHARS);
        let random = Hex::random_with(Self::RANDOM_HEX_CHARS, rng);
        let hex = Hex::from_raw(format!("{timestamp}{random}"));
        Self::from_hex(hex).expect("system time exceeds the 44-bit timestamp range")
    }

    /// Constructs an identifier from its 16-char binary form, eagerly
    /// computing the display form.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFormat::InvalidHexLength`] unless `hex` is exactly
    /// [`Self::TOTAL_HEX_CHARS`] characters.
    pub fn from_hex(hex: Hex) -> Result<Self, InvalidFormat> {
        let value = encode_base62(&hex)?;
        Ok(Self { hex, value })
    }

    /// Parses an identifier from its base62 display form.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFormat`] if the string is empty, contains a byte
    /// outside `[0-9A-Za-z]`, or decodes past the 64-bit range.
    pub fn from_string(value: &str) -> Result<Self, InvalidFormat> {
        let hex = decode_base62(value)?;
        Self::from_hex(hex)
    }

    /// The base62 display form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The 16-char hex binary form.
    #[must_use]
    pub fn to_hex(&self) -> &Hex {
        &self.hex
    }

    /// The embedded creation time in milliseconds since the Unix epoch.
    #[must_use]
    pub fn timestamp_millis(&self) -> u64 {
        hex_to_u64(&self.hex.as_str()[..Self::TIMESTAMP_HEX_CHARS])
    }

    /// The embedded creation time, at whole-second resolution.
    ///
    /// The millisecond remainder is discarded, so identifiers stamped within
    /// the first second of the epoch report `UNIX_EPOCH` itself.
    #[must_use]
    pub fn datetime(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(self.timestamp_millis() / 1000)
    }
}

/// Returns whether `value` is a well-formed base62 display form: non-empty,
/// `[0-9A-Za-z]` only, and decodable into the 64-bit identifier range.
///
/// Pure and side-effect-free; bulk callers can pre-check untrusted input
/// here instead of routing through the error path of
/// [`SmallUid::from_string`].
#[must_use]
pub fn is_valid_display(value: &str) -> bool {
    decode_base62(value).is_ok()
}

impl fmt::Display for SmallUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl fmt::Debug for SmallUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmallUid")
            .field("hex", &self.hex.as_str())
            .field("base62", &self.value)
            .finish()
    }
}

impl core::str::FromStr for SmallUid {
    type Err = InvalidFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl TryFrom<&str> for SmallUid {
    type Error = InvalidFormat;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_string(s)
    }
}

impl From<SmallUid> for String {
    fn from(uid: SmallUid) -> Self {
        uid.value
    }
}

impl AsRef<str> for SmallUid {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

/// Defines a distinct identifier type for one entity kind, sharing the
/// [`SmallUid`] behavior.
///
/// Different resources get different types so they cannot be mixed up at
/// compile time, while construction, parsing, rendering, and (with the
/// `serde` feature) serialization all delegate to the shared core.
///
/// ```
/// use smalluid::define_small_uid;
///
/// define_small_uid!(UserId);
/// define_small_uid!(OrderId);
///
/// let id = UserId::generate();
/// let parsed = UserId::parse(id.as_str()).unwrap();
/// assert_eq!(id, parsed);
/// ```
#[macro_export]
macro_rules! define_small_uid {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name($crate::SmallUid);

        impl $name {
            /// Generates a fresh identifier.
            #[must_use]
            pub fn generate() -> Self {
                Self($crate::SmallUid::generate())
            }

            /// Generates a fresh identifier from the provided clock and
            /// random source.
            #[must_use]
            pub fn generate_with<T, R>(time: &T, rng: &R) -> Self
            where
                T: $crate::TimeSource,
                R: $crate::RandSource,
            {
                Self($crate::SmallUid::generate_with(time, rng))
            }

            /// The all-zero sentinel identifier.
            #[must_use]
            pub fn nil() -> Self {
                Self($crate::SmallUid::nil())
            }

            /// Constructs from the 16-char hex binary form.
            pub fn from_hex(hex: $crate::Hex) -> Result<Self, $crate::InvalidFormat> {
                $crate::SmallUid::from_hex(hex).map(Self)
            }

            /// Parses from the base62 display form.
            pub fn parse(value: &str) -> Result<Self, $crate::InvalidFormat> {
                $crate::SmallUid::from_string(value).map(Self)
            }

            /// The shared identifier value.
            #[must_use]
            pub fn uid(&self) -> &$crate::SmallUid {
                &self.0
            }

            /// The base62 display form.
            #[must_use]
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }

            /// The 16-char hex binary form.
            #[must_use]
            pub fn to_hex(&self) -> &$crate::Hex {
                self.0.to_hex()
            }

            /// The embedded creation time, at whole-second resolution.
            #[must_use]
            pub fn datetime(&self) -> std::time::SystemTime {
                self.0.datetime()
            }
        }

        impl From<$crate::SmallUid> for $name {
            fn from(uid: $crate::SmallUid) -> Self {
                Self(uid)
            }
        }

        impl From<$name> for $crate::SmallUid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::InvalidFormat;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        $crate::cfg_serde! {
            impl $crate::__internal::serde::Serialize for $name {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: $crate::__internal::serde::Serializer,
                {
                    $crate::__internal::serde::Serialize::serialize(&self.0, serializer)
                }
            }

            impl<'de> $crate::__internal::serde::Deserialize<'de> for $name {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: $crate::__internal::serde::Deserializer<'de>,
                {
                    <$crate::SmallUid as $crate::__internal::serde::Deserialize<'de>>::deserialize(
                        deserializer,
                    )
                    .map(Self)
                }
            }
        }
    };
}
