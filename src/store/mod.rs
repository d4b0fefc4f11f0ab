use crate::error::{AppError, AppResult};
use crate::ids;
use crate::models::{Power, Source, SourceSummary};
use crate::seed;

/// The in-memory catalog of sources and their powers.
///
/// Nothing is persisted: a new store starts from whatever it is built with and
/// lives as long as its owner. Lookups are linear scans by id, which is fine
/// for a catalog of a few dozen entries.
#[derive(Debug, Default)]
pub struct SourceStore {
    sources: Vec<Source>,
}

impl SourceStore {
    pub fn new(sources: Vec<Source>) -> Self {
        Self { sources }
    }

    /// Store holding the fixed startup catalog.
    pub fn seeded() -> Self {
        Self::new(seed::seed_sources())
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// One summary per source, in catalog order.
    pub fn summaries(&self) -> Vec<SourceSummary> {
        self.sources.iter().map(Source::summary).collect()
    }

    pub fn source(&self, source_id: &str) -> AppResult<&Source> {
        self.sources
            .iter()
            .find(|s| s.id == source_id)
            .ok_or_else(AppError::source_not_found)
    }

    fn source_mut(&mut self, source_id: &str) -> AppResult<&mut Source> {
        self.sources
            .iter_mut()
            .find(|s| s.id == source_id)
            .ok_or_else(AppError::source_not_found)
    }

    /// Append a new switched-off power to the end of the source's list.
    pub fn add_power(&mut self, source_id: &str, label: impl Into<String>) -> AppResult<Power> {
        let source = self.source_mut(source_id)?;
        let power = Power {
            id: ids::generate(),
            label: label.into(),
            status: false,
        };
        source.powers.push(power.clone());
        Ok(power)
    }

    /// Flip a power's status and return its new value.
    ///
    /// The source is resolved before the power, so an unknown source always
    /// reports "Source not found" whatever the power id.
    pub fn toggle_power(&mut self, source_id: &str, power_id: &str) -> AppResult<bool> {
        let power = self
            .source_mut(source_id)?
            .powers
            .iter_mut()
            .find(|p| p.id == power_id)
            .ok_or_else(AppError::power_not_found)?;
        power.status = !power.status;
        Ok(power.status)
    }
}
