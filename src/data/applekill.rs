use std::collections::HashMap;

use serde_json::Value;

/// The three stage groupings apple-kill percentages are bucketed into.
/// Display order is the declaration order here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageGroup {
    BfKalos,
    SvTown,
    SbfFdPs2Hollow,
}

pub const ALL_STAGE_GROUPS: [StageGroup; 3] = [
    StageGroup::BfKalos,
    StageGroup::SvTown,
    StageGroup::SbfFdPs2Hollow,
];

impl StageGroup {
    /// Key as it appears in `applekill.json`.
    pub fn key(self) -> &'static str {
        match self {
            StageGroup::BfKalos => "BF_Kalos",
            StageGroup::SvTown => "SV_Town",
            StageGroup::SbfFdPs2Hollow => "SBF_FD_PS2_Hollow",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StageGroup::BfKalos => "BF and Kalos",
            StageGroup::SvTown => "SV and Town",
            StageGroup::SbfFdPs2Hollow => "SBF, FD, PS2, and Hollow",
        }
    }
}

const NO_DATA: &str = "No data";

/// Values for the three stage groups, indexed by declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StageValues {
    values: [Option<String>; 3],
}

impl StageValues {
    fn from_object(obj: &serde_json::Map<String, Value>) -> Self {
        let mut values: [Option<String>; 3] = Default::default();
        for (i, group) in ALL_STAGE_GROUPS.iter().enumerate() {
            values[i] = obj.get(group.key()).and_then(scalar_to_string);
        }
        Self { values }
    }

    pub fn get(&self, group: StageGroup) -> Option<&str> {
        let idx = ALL_STAGE_GROUPS.iter().position(|g| *g == group)?;
        self.values[idx].as_deref()
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A character's apple-kill table. The flat-vs-nested shape is decided once
/// here, at load time, never re-sniffed when rendering.
#[derive(Clone, Debug, PartialEq)]
pub enum KillTable {
    Flat(StageValues),
    /// Sub-dimension rows (e.g. "Grounded" vs "On platform") in storage order.
    Nested(Vec<(String, StageValues)>),
}

impl KillTable {
    /// Shape rule: if the entry's first value is itself an object the whole
    /// entry is nested, otherwise flat. An empty or non-object entry renders
    /// as a flat table with no data.
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(obj) = value else {
            return KillTable::Flat(StageValues::default());
        };

        let nested = obj
            .values()
            .next()
            .map(|first| matches!(first, Value::Object(_)))
            .unwrap_or(false);

        if nested {
            let rows = obj
                .iter()
                .map(|(sub, stages)| {
                    let values = match stages {
                        Value::Object(stage_obj) => StageValues::from_object(stage_obj),
                        _ => StageValues::default(),
                    };
                    (sub.clone(), values)
                })
                .collect();
            KillTable::Nested(rows)
        } else {
            KillTable::Flat(StageValues::from_object(obj))
        }
    }

    /// Human-readable lines: three fixed stage-group lines per table, with a
    /// sub-dimension header line before each group of three when nested.
    pub fn render(&self) -> String {
        let mut out: Vec<String> = Vec::new();
        match self {
            KillTable::Flat(values) => {
                for group in ALL_STAGE_GROUPS {
                    let value = values.get(group).unwrap_or(NO_DATA);
                    out.push(format!("🍎 {}: {}", group.label(), value));
                }
            }
            KillTable::Nested(rows) => {
                for (sub, values) in rows {
                    out.push(format!("🍎 {sub}:"));
                    for group in ALL_STAGE_GROUPS {
                        let value = values.get(group).unwrap_or(NO_DATA);
                        out.push(format!(" - {}: {}", group.label(), value));
                    }
                }
            }
        }
        out.join("\n")
    }
}

/// All apple-kill tables from `applekill.json`, keyed by canonical name.
#[derive(Clone, Debug, Default)]
pub struct AppleKillBook {
    tables: HashMap<String, KillTable>,
}

impl AppleKillBook {
    pub fn from_json(text: &str) -> Self {
        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(text) else {
            return Self::default();
        };

        let tables = map
            .iter()
            .map(|(character, value)| (character.clone(), KillTable::from_value(value)))
            .collect();

        Self { tables }
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn get(&self, character: &str) -> Option<&KillTable> {
        self.tables.get(character)
    }
}
