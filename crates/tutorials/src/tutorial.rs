use serde::{Deserialize, Serialize};

use restapi_core::{Entity, EntityId};

/// A tutorial record.
///
/// Absent JSON fields fall back to their zero values, so `{}` decodes to an
/// unpublished tutorial with empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tutorial {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub published: bool,
}

impl Tutorial {
    /// Create an unsaved tutorial (id unassigned).
    pub fn new(title: impl Into<String>, description: impl Into<String>, published: bool) -> Self {
        Self {
            id: EntityId::UNASSIGNED,
            title: title.into(),
            description: description.into(),
            published,
        }
    }

    /// Overwrite every editable field with the values of `changes`, keeping `self.id`.
    pub fn apply_changes(&mut self, changes: TutorialChanges) {
        self.title = changes.title;
        self.description = changes.description;
        self.published = changes.published;
    }

    pub fn title_contains(&self, needle: &str) -> bool {
        self.title.contains(needle)
    }
}

impl Entity for Tutorial {
    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

impl core::fmt::Display for Tutorial {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Tutorial [id={}, title={}, desc={}, published={}]",
            self.id, self.title, self.description, self.published
        )
    }
}

/// Editable fields of a tutorial, as accepted by create/update requests.
///
/// Any `id` present in the payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TutorialChanges {
    pub title: String,
    pub description: String,
    pub published: bool,
}

impl From<TutorialChanges> for Tutorial {
    fn from(changes: TutorialChanges) -> Self {
        Tutorial::new(changes.title, changes.description, changes.published)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tutorial_is_unsaved_and_unpublished() {
        let tutorial = Tutorial::default();

        assert_eq!(tutorial.id, EntityId::UNASSIGNED);
        assert!(tutorial.is_new());
        assert!(tutorial.title.is_empty());
        assert!(tutorial.description.is_empty());
        assert!(!tutorial.published);
    }

    #[test]
    fn new_keeps_fields_and_leaves_id_unassigned() {
        let tutorial = Tutorial::new("Spring Boot Tutorial", "Learn Spring Boot 3", true);

        assert_eq!(tutorial.id, EntityId::UNASSIGNED);
        assert_eq!(tutorial.title, "Spring Boot Tutorial");
        assert_eq!(tutorial.description, "Learn Spring Boot 3");
        assert!(tutorial.published);
    }

    #[test]
    fn set_id_assigns_identity() {
        let mut tutorial = Tutorial::default();
        tutorial.set_id(EntityId::new(123));

        assert_eq!(tutorial.id(), EntityId::new(123));
        assert!(!tutorial.is_new());
    }

    #[test]
    fn display_matches_log_format() {
        let mut tutorial = Tutorial::new("Test Title", "Test Description", true);
        tutorial.set_id(EntityId::new(1));

        assert_eq!(
            tutorial.to_string(),
            "Tutorial [id=1, title=Test Title, desc=Test Description, published=true]"
        );
    }

    #[test]
    fn display_of_default_tutorial() {
        assert_eq!(
            Tutorial::default().to_string(),
            "Tutorial [id=0, title=, desc=, published=false]"
        );
    }

    #[test]
    fn apply_changes_overwrites_fields_but_not_id() {
        let mut tutorial = Tutorial::new("Original", "Original description", false);
        tutorial.set_id(EntityId::new(7));

        tutorial.apply_changes(TutorialChanges {
            title: "Updated".to_string(),
            description: "Updated description".to_string(),
            published: true,
        });

        assert_eq!(tutorial.id, EntityId::new(7));
        assert_eq!(tutorial.title, "Updated");
        assert_eq!(tutorial.description, "Updated description");
        assert!(tutorial.published);
    }

    #[test]
    fn title_contains_is_case_sensitive() {
        let tutorial = Tutorial::new("Spring Data JPA", "", false);

        assert!(tutorial.title_contains("Spring"));
        assert!(!tutorial.title_contains("spring"));
    }

    #[test]
    fn missing_json_fields_default_to_zero_values() {
        let tutorial: Tutorial = serde_json::from_str(r#"{"title":"Only a title"}"#).unwrap();

        assert_eq!(tutorial.id, EntityId::UNASSIGNED);
        assert_eq!(tutorial.title, "Only a title");
        assert_eq!(tutorial.description, "");
        assert!(!tutorial.published);
    }

    #[test]
    fn changes_ignore_client_supplied_id() {
        let changes: TutorialChanges =
            serde_json::from_str(r#"{"id":99,"title":"T","description":"D","published":true}"#).unwrap();
        let tutorial = Tutorial::from(changes);

        assert_eq!(tutorial.id, EntityId::UNASSIGNED);
        assert_eq!(tutorial.title, "T");
    }
}
