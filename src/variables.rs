use std::collections::HashMap;

use log::debug;

/// Named variables referenced by the expression, resolved at evaluation time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    values: HashMap<String, f64>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `name` exists, starting at 0. An existing value is kept.
    pub fn declare(&mut self, name: &str) {
        if !self.values.contains_key(name) {
            debug!("Declaring variable '{}' with value 0", name);
            self.values.insert(name.to_string(), 0.0);
        }
    }

    pub fn set(&mut self, name: &str, value: f64) {
        debug!("Setting variable '{}' = {}", name, value);
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Copy of this table with one binding overridden
    pub fn with(&self, name: &str, value: f64) -> Self {
        let mut copy = self.clone();
        copy.values.insert(name.to_string(), value);
        copy
    }
}
