// Attribute filters over catalog records
use serde::{Deserialize, Serialize};

use crate::record::{BeerId, BeerRecord};

/// A single per-attribute constraint.
///
/// Membership conditions pass when the record's value is in the allowed
/// set; `AbvBetween` is a closed range, both ends inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FilterCondition {
    NumberIn(Vec<BeerId>),
    SectionIn(Vec<String>),
    StateIn(Vec<String>),
    StyleIn(Vec<String>),
    AbvBetween { min: f32, max: f32 },
}

impl FilterCondition {
    pub fn matches(&self, record: &BeerRecord) -> bool {
        match self {
            FilterCondition::NumberIn(ids) => ids.contains(&record.id),
            FilterCondition::SectionIn(sections) => sections.contains(&record.section),
            FilterCondition::StateIn(states) => states.contains(&record.state),
            FilterCondition::StyleIn(styles) => styles.contains(&record.style),
            FilterCondition::AbvBetween { min, max } => {
                record.abv >= *min && record.abv <= *max
            }
        }
    }
}

/// An ordered list of conditions combined with short-circuiting AND.
///
/// No conditions means no constraint: every record matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterPredicate {
    conditions: Vec<FilterCondition>,
}

impl FilterPredicate {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn with(mut self, condition: FilterCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn push(&mut self, condition: FilterCondition) {
        self.conditions.push(condition);
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn conditions(&self) -> &[FilterCondition] {
        &self.conditions
    }

    pub fn matches(&self, record: &BeerRecord) -> bool {
        self.conditions.iter().all(|c| c.matches(record))
    }
}
