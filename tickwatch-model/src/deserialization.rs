/// Determine the `DateTime<Utc>` from the provided `Duration` since the epoch.
pub fn datetime_utc_from_epoch_duration(
    duration: std::time::Duration,
) -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::<chrono::Utc>::from(std::time::UNIX_EPOCH + duration)
}

/// Determine the `DateTime<Utc>` from a milliseconds since the epoch value.
pub fn datetime_utc_from_epoch_ms(epoch_ms: u64) -> chrono::DateTime<chrono::Utc> {
    datetime_utc_from_epoch_duration(std::time::Duration::from_millis(epoch_ms))
}

/// Deserialize a `String` as the desired type.
///
/// Native JSON numbers are rejected, the value must arrive as a string.
pub fn de_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::de::Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let data: String = serde::de::Deserialize::deserialize(deserializer)?;
    data.parse::<T>().map_err(serde::de::Error::custom)
}

/// Deserialize a plain decimal `String`, eg/ "-0.00085500", as a [`rust_decimal::Decimal`].
///
/// Only an optional leading `-`, digits and a single `.` are accepted. Exponents, `_` separators
/// and values that cannot be represented without rounding are rejected.
pub fn de_decimal_str<'de, D>(deserializer: D) -> Result<rust_decimal::Decimal, D::Error>
where
    D: serde::de::Deserializer<'de>,
{
    let data: String = serde::de::Deserialize::deserialize(deserializer)?;

    let digits = data.strip_prefix('-').unwrap_or(&data);
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let is_plain = !integer.is_empty()
        && integer.bytes().all(|byte| byte.is_ascii_digit())
        && fraction.bytes().all(|byte| byte.is_ascii_digit());

    if !is_plain {
        return Err(serde::de::Error::invalid_value(
            serde::de::Unexpected::Str(&data),
            &"a plain decimal string",
        ));
    }

    rust_decimal::Decimal::from_str_exact(&data).map_err(serde::de::Error::custom)
}

/// Serialize any `Display` type as a JSON string, the inverse of [`de_str`].
pub fn se_str<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::ser::Serializer,
    T: std::fmt::Display,
{
    serializer.collect_str(value)
}
