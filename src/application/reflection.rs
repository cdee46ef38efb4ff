//! Daily reflections.

use chrono::NaiveDate;

use crate::domain::{reflection_for, Reflection, REFLECTIONS};

#[derive(Debug, Default, Clone, Copy)]
pub struct ReflectionService;

impl ReflectionService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The reflection shown on `date`.
    #[must_use]
    pub fn today(&self, date: NaiveDate) -> &'static Reflection {
        reflection_for(date)
    }

    #[must_use]
    pub fn all(&self) -> &'static [Reflection] {
        &REFLECTIONS
    }
}
