//! The resolver's output map: parameter name to captured string.

use rustc_hash::FxHashMap;

/// Case-insensitive mapping from parameter name to the raw string captured
/// during a match.
///
/// Repeated options accumulate their values joined by a single ASCII space;
/// this is the documented wire format between the resolver and the binder
/// crate, which splits on it again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bindings {
    values: FxHashMap<String, String>,
}

impl Bindings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fresh capture. Overwrites any prior value for `name`.
    pub fn insert(&mut self, name: &str, value: String) {
        self.values.insert(name.to_ascii_lowercase(), value);
    }

    /// Append `value` to an existing repeated-option capture, space-joined,
    /// or insert it as the first value if `name` hasn't been seen yet.
    pub fn append(&mut self, name: &str, value: &str) {
        let key = name.to_ascii_lowercase();
        self.values
            .entry(key)
            .and_modify(|existing| {
                existing.push(' ');
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(&name.to_ascii_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
