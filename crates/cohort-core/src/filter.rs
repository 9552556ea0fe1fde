use serde::{Deserialize, Serialize};

///
/// Wire filter tree
///
/// The declarative structure a client-side filter builder submits. Field and
/// operator names are plain strings at this layer; resolution against the
/// entity schema and the operator table happens during compilation, where
/// unresolvable leaves are dropped rather than rejected.
///

///
/// Logic
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Logic {
    #[default]
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
}

///
/// FilterCondition
///
/// One leaf test. `value`'s expected shape depends on the operator:
/// scalar, `[min, max]` pair, or array. Text comparisons default to
/// case-insensitive unless `caseSensitive` is set.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCondition {
    pub field: String,
    pub operator: String,
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default)]
    pub case_sensitive: bool,
}

impl FilterCondition {
    #[must_use]
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<String>,
        value: serde_json::Value,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value,
            case_sensitive: false,
        }
    }

    #[must_use]
    pub const fn case_sensitive(mut self) -> Self {
        self.case_sensitive = true;
        self
    }
}

///
/// FilterGroup
///
/// A subtree combining direct conditions and nested groups under one
/// logical connective. The root of a submitted tree is structurally
/// identical and reduced by the same rule.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct FilterGroup {
    #[serde(default)]
    pub logic: Logic,
    #[serde(default)]
    pub conditions: Vec<FilterCondition>,
    #[serde(default)]
    pub groups: Vec<FilterGroup>,
}

/// Root of a submitted filter tree.
pub type FilterDefinition = FilterGroup;

impl FilterGroup {
    #[must_use]
    pub fn all() -> Self {
        Self {
            logic: Logic::And,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn any() -> Self {
        Self {
            logic: Logic::Or,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn condition(mut self, condition: FilterCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    #[must_use]
    pub fn group(mut self, group: Self) -> Self {
        self.groups.push(group);
        self
    }
}

///
/// TESTS
///
