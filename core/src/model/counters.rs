use std::collections::BTreeMap;

/// Which per-class tally a counter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterKind {
    Absences,
    Cancellations,
}

impl CounterKind {
    pub fn label(&self) -> &'static str {
        match self {
            CounterKind::Absences => "absences",
            CounterKind::Cancellations => "cancellations",
        }
    }
}

/// Per-class tally, keyed by class name only (not by day).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Counters {
    counts: BTreeMap<String, u32>,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, class_name: &str) -> u32 {
        self.counts.get(class_name).copied().unwrap_or(0)
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.counts.contains_key(class_name)
    }

    pub fn set(&mut self, class_name: impl Into<String>, value: u32) {
        self.counts.insert(class_name.into(), value);
    }

    /// Starts the counter at 0 unless it already exists.
    pub fn ensure(&mut self, class_name: &str) {
        if !self.counts.contains_key(class_name) {
            self.counts.insert(class_name.to_string(), 0);
        }
    }

    pub fn increment(&mut self, class_name: &str) -> u32 {
        let entry = self.counts.entry(class_name.to_string()).or_insert(0);
        *entry = entry.saturating_add(1);
        *entry
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }
}
