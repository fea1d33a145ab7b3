use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable, NamedEntity};

/// The single user object cached locally between sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub document: String,
}

impl Patient {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        document: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            document: document.into(),
        }
    }
}

impl Identifiable for Patient {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Patient {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Patient {
    fn display_label(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }
}

/// Input collected by the registration form before a `Patient` exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub document: String,
    pub password: String,
    pub password_confirmation: String,
}
