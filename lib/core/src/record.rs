use serde::{Deserialize, Serialize};

/// Festival entry number of a beer. Stable for the lifetime of a catalog.
pub type BeerId = u32;

/// One catalog entry describing a single entrant beer.
///
/// Records are loaded once at startup and never mutated; identity is the
/// `id` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeerRecord {
    /// Festival entry number (the `num` column of the source data)
    #[serde(alias = "num", alias = "Number")]
    pub id: BeerId,
    #[serde(alias = "beer", alias = "Beer")]
    pub name: String,
    #[serde(alias = "Section")]
    pub section: String,
    #[serde(alias = "State")]
    pub state: String,
    #[serde(alias = "Style")]
    pub style: String,
    #[serde(alias = "Brewery")]
    pub brewery: String,
    /// Alcohol by volume, percent. Non-negative.
    #[serde(alias = "Abv")]
    pub abv: f32,
    /// Free-text tasting notes
    #[serde(default, alias = "Notes")]
    pub notes: String,
}

impl BeerRecord {
    #[inline]
    #[must_use]
    pub fn new(id: BeerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            section: String::new(),
            state: String::new(),
            style: String::new(),
            brewery: String::new(),
            abv: 0.0,
            notes: String::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_brewery(mut self, brewery: impl Into<String>) -> Self {
        self.brewery = brewery.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_abv(mut self, abv: f32) -> Self {
        self.abv = abv;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}
