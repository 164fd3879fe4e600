use restapi_core::{DomainResult, EntityId};
use restapi_tutorials::{Tutorial, TutorialChanges};

use crate::store::{EntityStore, InMemoryEntityStore};

use super::update_with;

/// Tutorial storage plus the title and published-flag queries.
#[derive(Debug)]
pub struct TutorialRepository<S = InMemoryEntityStore<Tutorial>> {
    store: S,
}

impl TutorialRepository {
    /// An empty, process-local tutorial repository.
    pub fn in_memory() -> Self {
        Self::new(InMemoryEntityStore::new("tutorials"))
    }
}

impl<S> TutorialRepository<S>
where
    S: EntityStore<Tutorial>,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Tutorials whose title contains `needle` (case-sensitive), in insertion order.
    pub fn find_by_title_containing(&self, needle: &str) -> Vec<Tutorial> {
        self.store.filter(&|t: &Tutorial| t.title_contains(needle))
    }

    /// Tutorials whose published flag equals `published`, in insertion order.
    pub fn find_by_published(&self, published: bool) -> Vec<Tutorial> {
        self.store.filter(&|t: &Tutorial| t.published == published)
    }

    /// Insert a new tutorial built from `changes`.
    pub fn create(&self, changes: TutorialChanges) -> Tutorial {
        self.store.save(Tutorial::from(changes))
    }

    /// Overwrite the editable fields of tutorial `id`.
    pub fn update(&self, id: EntityId, changes: TutorialChanges) -> DomainResult<Tutorial> {
        update_with(&self.store, id, |t: &mut Tutorial| t.apply_changes(changes))
    }
}

super::delegate_entity_store!(TutorialRepository, Tutorial);
