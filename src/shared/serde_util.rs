//! Custom serde helpers for API wire formats.

/// Accepts an integer sent either as a JSON number or a decimal string and
/// keeps it as a `String`.
///
/// Seaport amounts routinely exceed `u64`, and the API is not consistent about
/// quoting `startTime`, `salt`, `counter` and friends. A bare number above
/// `u64::MAX` only reaches us as an `f64`, so one that is not exactly
/// representable (beyond 2^53) is rejected; such values must be quoted.
pub mod string_or_number {
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    /// 2^53, the largest magnitude below which every integer is an exact `f64`.
    const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

    #[allow(clippy::ptr_arg)]
    pub fn serialize<S>(value: &String, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StringOrNumber;

        impl<'de> Visitor<'de> for StringOrNumber {
            type Value = String;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string or an integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
                Ok(v.to_string())
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
                Ok(v)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
                Ok(v.to_string())
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
                Ok(v.to_string())
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
                if !v.is_finite() || v.fract() != 0.0 {
                    return Err(E::custom(format!("Expected an integer, got {v}")));
                }
                if v.abs() > MAX_EXACT_F64 {
                    return Err(E::custom(format!(
                        "Integer {v:.0} is too large to be read exactly from a JSON number; send it as a string"
                    )));
                }
                Ok(format!("{v:.0}"))
            }
        }

        deserializer.deserialize_any(StringOrNumber)
    }
}
