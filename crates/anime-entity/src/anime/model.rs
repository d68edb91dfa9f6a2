//! Anime entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::validation::violation_messages;

/// A catalogued anime title.
///
/// The same shape is used for request payloads and stored rows: payloads
/// may omit `id`, stored rows always carry one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, Validate)]
pub struct Anime {
    /// Unique anime identifier, absent until first saved.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Display title.
    #[serde(default)]
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
}

impl Anime {
    /// Build an unsaved anime with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Return a copy carrying the given identifier.
    pub fn with_id(self, id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    /// Return a copy carrying the given name.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    /// Return a copy guaranteed to carry an identifier, generating a
    /// random one when absent.
    pub fn with_generated_id(self) -> Self {
        match self.id {
            Some(_) => self,
            None => self.with_id(Uuid::new_v4()),
        }
    }

    /// Whether this anime has never been assigned an identifier.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Messages for every violated constraint, ordered by field name.
    pub fn violations(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => violation_messages(&errors),
        }
    }
}
