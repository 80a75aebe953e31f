//! Variable definitions and the lookup table built from them.

use std::collections::HashMap;

/// One variable as supplied by the external provider: a name and its
/// current value.
#[derive(Clone, Debug)]
pub struct VariableDef {
    pub name: String,
    pub value: String,
}

impl VariableDef {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Name → value map built once per substitution pass.
///
/// Construction walks the definition list in order, so a duplicate name
/// overwrites the earlier entry (last write wins). Lookup is
/// case-sensitive.
#[derive(Clone, Debug, Default)]
pub struct VariableTable {
    entries: HashMap<String, String>,
}

impl VariableTable {
    pub fn from_defs(defs: &[VariableDef]) -> Self {
        let mut entries = HashMap::with_capacity(defs.len());
        for def in defs {
            entries.insert(def.name.clone(), def.value.clone());
        }
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
