//! Lenient deserializers for backend rows

use serde::{Deserialize, Deserializer};

/// `null` becomes `T::default()`; pair with `#[serde(default)]` for absent keys.
pub(super) fn nullable<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// Nested one-to-one records come back as a single object or an array.
/// The first array element wins; an empty array is no record.
pub(super) fn first_record<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    Ok(match Option::<OneOrMany<T>>::deserialize(d)? {
        Some(OneOrMany::Many(records)) => records.into_iter().next(),
        Some(OneOrMany::One(record)) => Some(record),
        None => None,
    })
}

/// Ids are strings in some tables and integers in others.
pub(super) fn flexible_id<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(d)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

/// Rows without an `is_active` flag are active.
pub(super) const fn active() -> bool {
    true
}
