use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    pub base: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional: Option<String>,
}

/// Inflection-type rules from the help page, keyed by rule number ("12", "12a").
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    entries: HashMap<String, RuleEntry>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    // A recurring number replaces the earlier entry.
    pub fn insert(&mut self, number: impl Into<String>, entry: RuleEntry) {
        self.entries.insert(number.into(), entry);
    }

    pub fn get(&self, number: &str) -> Option<&RuleEntry> {
        self.entries.get(number)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
