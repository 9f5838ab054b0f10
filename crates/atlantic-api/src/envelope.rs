use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::ApiError;

/// Body returned when the provider rejects a request.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ApiError,
}

/// A JSON object whose keys are provider-assigned and meaningless to callers.
///
/// Only the values are kept. They come out ordered by key so the sequence is
/// stable for a given response. An absent or `null` set decodes as empty.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Keyed<T>(Vec<T>);

impl<T> Keyed<T> {
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Default for Keyed<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<'de, T> Deserialize<'de> for Keyed<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Option::<BTreeMap<String, T>>::deserialize(deserializer)?;
        Ok(Self(map.map(|m| m.into_values().collect()).unwrap_or_default()))
    }
}
