use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::graph::{next_id, VertexId};

/// Bidirectional label ↔ id mapping.
///
/// `labels[id]` is the id→label direction and `ids` the reverse; the two are
/// kept mutual inverses by refusing duplicate registrations.
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    labels: Vec<String>,
    ids: HashMap<String, VertexId>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(label_count: usize) -> Self {
        Self {
            labels: Vec::with_capacity(label_count),
            ids: HashMap::with_capacity(label_count),
        }
    }

    /// Assign the next id to `label`.
    ///
    /// Fails with [`Error::DuplicateLabel`] if the label is already registered,
    /// or [`Error::TooManyVertices`] once every `VertexId` is taken.
    pub fn register(&mut self, label: impl Into<String>) -> Result<VertexId> {
        let label = label.into();
        if let Some(&existing) = self.ids.get(&label) {
            return Err(Error::DuplicateLabel { label, existing });
        }
        let id = next_id(self.labels.len())?;
        self.ids.insert(label.clone(), id);
        self.labels.push(label);
        Ok(id)
    }

    pub fn id_of(&self, label: &str) -> Result<VertexId> {
        self.ids
            .get(label)
            .copied()
            .ok_or_else(|| Error::UnknownLabel(label.to_string()))
    }

    pub fn label_of(&self, id: VertexId) -> Result<&str> {
        self.labels
            .get(id as usize)
            .map(String::as_str)
            .ok_or(Error::UnknownId(id))
    }

    /// A uniformly chosen registered label.
    pub fn any<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str> {
        self.labels
            .choose(rng)
            .map(String::as_str)
            .ok_or(Error::EmptyRegistry)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.ids.contains_key(label)
    }

    /// All labels in registration order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn registry(labels: &[&str]) -> NameRegistry {
        let mut r = NameRegistry::new();
        for l in labels {
            r.register(*l).unwrap();
        }
        r
    }

    #[test]
    fn test_ids_follow_registration_order() {
        let r = registry(&["Alpha", "Beta", "Gamma"]);
        assert_eq!(r.id_of("Alpha"), Ok(0));
        assert_eq!(r.id_of("Beta"), Ok(1));
        assert_eq!(r.id_of("Gamma"), Ok(2));
        assert_eq!(r.labels(), &["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_mappings_are_inverse() {
        let r = registry(&["x", "y", "z", "Ünïcode label"]);
        for (i, label) in r.labels().iter().enumerate() {
            let id = r.id_of(label).unwrap();
            assert_eq!(id as usize, i);
            assert_eq!(r.label_of(id).unwrap(), label);
        }
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let mut r = registry(&["A", "B"]);
        let err = r.register("A").unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateLabel {
                label: "A".to_string(),
                existing: 0
            }
        );
        // Registry is unchanged by the rejected call
        assert_eq!(r.len(), 2);
        assert_eq!(r.id_of("A"), Ok(0));
    }

    #[test]
    fn test_unknown_lookups() {
        let r = registry(&["A"]);
        assert_eq!(r.id_of("nope"), Err(Error::UnknownLabel("nope".to_string())));
        assert_eq!(r.label_of(1), Err(Error::UnknownId(1)));
        assert!(!r.contains("nope"));
    }

    #[test]
    fn test_any_on_empty_registry() {
        let r = NameRegistry::new();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(r.any(&mut rng), Err(Error::EmptyRegistry));
    }

    #[test]
    fn test_any_covers_all_labels() {
        let r = registry(&["A", "B", "C", "D"]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..400 {
            seen.insert(r.any(&mut rng).unwrap().to_string());
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_any_is_reproducible_with_seed() {
        let r = registry(&["A", "B", "C", "D", "E"]);
        let picks = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| r.any(&mut rng).unwrap().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(3), picks(3));
    }
}
