use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::ids::PatternId;
use crate::model::pattern::Pattern;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog cannot be empty")]
    Empty,

    #[error("duplicate pattern id: {0}")]
    DuplicateId(PatternId),

    #[error("id range is reversed: {start}..={end}")]
    ReversedRange { start: PatternId, end: PatternId },

    #[error("pattern id {0} is not in the catalog")]
    UnknownId(PatternId),
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Immutable mapping from `PatternId` to its content record.
///
/// Built once from configuration data and never mutated; sessions draw their
/// id order from here and look content back up by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternCatalog {
    patterns: BTreeMap<PatternId, Pattern>,
}

impl PatternCatalog {
    /// Builds a catalog from pattern records.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` when no patterns are given and
    /// `CatalogError::DuplicateId` when two records share an id.
    pub fn from_patterns(
        patterns: impl IntoIterator<Item = Pattern>,
    ) -> Result<Self, CatalogError> {
        let mut map = BTreeMap::new();
        for pattern in patterns {
            let id = pattern.id();
            if map.insert(id, pattern).is_some() {
                return Err(CatalogError::DuplicateId(id));
            }
        }
        if map.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { patterns: map })
    }

    /// Looks up a pattern by id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownId` when the id is not present.
    pub fn get(&self, id: PatternId) -> Result<&Pattern, CatalogError> {
        self.patterns.get(&id).ok_or(CatalogError::UnknownId(id))
    }

    #[must_use]
    pub fn contains(&self, id: PatternId) -> bool {
        self.patterns.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = PatternId> + '_ {
        self.patterns.keys().copied()
    }

    /// Builds a sub-catalog covering the inclusive id range `start..=end`.
    ///
    /// This is the configuration step of the quiz: the active subset of the
    /// content tables is fixed here, before any session starts.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ReversedRange` when `start > end` and
    /// `CatalogError::UnknownId` when any id in the range is missing.
    pub fn slice(&self, start: PatternId, end: PatternId) -> Result<Self, CatalogError> {
        if start > end {
            return Err(CatalogError::ReversedRange { start, end });
        }

        let mut patterns = BTreeMap::new();
        for value in start.value()..=end.value() {
            let id = PatternId::new(value);
            let pattern = self.get(id)?.clone();
            patterns.insert(id, pattern);
        }
        Ok(Self { patterns })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::pattern::ImageRef;

    fn build_pattern(id: u32) -> Pattern {
        Pattern::new(
            PatternId::new(id),
            format!("Pattern {id}"),
            format!("intent {id}"),
            format!("- highlight {id}"),
            ImageRef::from_file(format!("images/gof{id}.jpg")).unwrap(),
        )
        .unwrap()
    }

    fn build_catalog(ids: impl IntoIterator<Item = u32>) -> PatternCatalog {
        PatternCatalog::from_patterns(ids.into_iter().map(build_pattern)).unwrap()
    }

    #[test]
    fn catalog_rejects_empty_input() {
        let err = PatternCatalog::from_patterns(Vec::new()).unwrap_err();
        assert_eq!(err, CatalogError::Empty);
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let err =
            PatternCatalog::from_patterns(vec![build_pattern(1), build_pattern(1)]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId(PatternId::new(1)));
    }

    #[test]
    fn lookup_by_id() {
        let catalog = build_catalog(1..=3);
        assert_eq!(catalog.get(PatternId::new(2)).unwrap().name(), "Pattern 2");
        let err = catalog.get(PatternId::new(9)).unwrap_err();
        assert_eq!(err, CatalogError::UnknownId(PatternId::new(9)));
    }

    #[test]
    fn slice_keeps_content_for_in_range_ids() {
        let catalog = build_catalog(1..=5);
        let sliced = catalog.slice(PatternId::new(2), PatternId::new(4)).unwrap();

        assert_eq!(sliced.len(), 3);
        let ids: Vec<u32> = sliced.ids().map(|id| id.value()).collect();
        assert_eq!(ids, vec![2, 3, 4]);
        assert_eq!(
            sliced.get(PatternId::new(3)).unwrap(),
            catalog.get(PatternId::new(3)).unwrap()
        );
    }

    #[test]
    fn slice_of_single_id_works() {
        let catalog = build_catalog(1..=5);
        let sliced = catalog.slice(PatternId::new(5), PatternId::new(5)).unwrap();
        assert_eq!(sliced.len(), 1);
    }

    #[test]
    fn slice_rejects_reversed_range() {
        let catalog = build_catalog(1..=5);
        let err = catalog.slice(PatternId::new(4), PatternId::new(2)).unwrap_err();
        assert!(matches!(err, CatalogError::ReversedRange { .. }));
    }

    #[test]
    fn slice_rejects_out_of_bounds_range() {
        let catalog = build_catalog(1..=5);
        let err = catalog.slice(PatternId::new(3), PatternId::new(8)).unwrap_err();
        assert_eq!(err, CatalogError::UnknownId(PatternId::new(6)));
    }
}
