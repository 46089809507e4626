//! # Domain models for the user directory
//!
//! Defines the records exchanged with the remote `/users` collection and the
//! draft held by the create form. These types are `Serialize + Deserialize`
//! so they can be sent to and read from the collection as JSON.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`RecordId`] | An opaque, server-assigned identifier. The collection may use numbers or strings, so both are accepted and rendered back verbatim in request paths. |
//! | [`User`] | One user record. Every field is a plain string defaulting to empty. Fields the directory does not edit (`address`, `company`, ...) are kept in [`User::extra`] so an update sends back what was fetched. |
//! | [`UserDraft`] | The in-progress record behind the create dialog, including the derived `username`. |
//!
//! ## The [`Record`] trait
//!
//! [`crate::LocalList`], [`crate::filter`] and the remote collection client are
//! generic over the record shape. [`Record`] is the small surface they need:
//! identity, a display name for filtering, and the provisional marker used for
//! client-synthesized identifiers.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Prefix of every derived username.
pub const USERNAME_PREFIX: &str = "USER-";

/// Opaque record identifier as the collection returned it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for RecordId {
    fn from(n: u64) -> Self {
        RecordId::Number(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

/// Shape-independent view of a record held in a local list.
pub trait Record: Clone + PartialEq + Serialize + DeserializeOwned + 'static {
    fn id(&self) -> Option<&RecordId>;
    fn set_id(&mut self, id: RecordId);
    /// Text the name filter matches against.
    fn display_name(&self) -> &str;
    /// Whether the identifier was synthesized locally rather than assigned by the server.
    fn is_provisional(&self) -> bool;
    fn mark_provisional(&mut self);
}

/// A user record from the remote collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    /// Only filled by the create flow.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub street: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(default, rename = "companyName", skip_serializing_if = "String::is_empty")]
    pub company_name: String,
    /// Server fields the directory does not edit, sent back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    pub provisional: bool,
}

impl User {
    /// Text for the id column; empty when the record has no id yet.
    pub fn id_label(&self) -> String {
        self.id.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    /// Row key for rendering. Falls back to the name for id-less records.
    pub fn row_key(&self) -> String {
        match &self.id {
            Some(id) => id.to_string(),
            None => format!("~{}", self.name),
        }
    }
}

impl Record for User {
    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn is_provisional(&self) -> bool {
        self.provisional
    }

    fn mark_provisional(&mut self) {
        self.provisional = true;
    }
}

/// Fields of the create dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Website,
    Street,
    City,
    CompanyName,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Website => "Website",
            Field::Street => "Street",
            Field::City => "City",
            Field::CompanyName => "Company Name (Optional)",
        }
    }
}

/// The not-yet-submitted record behind the create dialog.
///
/// `username` is never edited directly: it is re-derived from the name on
/// every [`set_name`](UserDraft::set_name).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub username: String,
    pub phone: String,
    pub website: String,
    pub street: String,
    pub city: String,
    #[serde(rename = "companyName")]
    pub company_name: String,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            username: USERNAME_PREFIX.to_string(),
            phone: String::new(),
            website: String::new(),
            street: String::new(),
            city: String::new(),
            company_name: String::new(),
        }
    }
}

impl UserDraft {
    /// Set the name and re-derive the username from it.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
        self.username = derive_username(name);
    }

    /// Update one field from a form input. Name changes also update the username.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.set_name(&value),
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Website => self.website = value,
            Field::Street => self.street = value,
            Field::City => self.city = value,
            Field::CompanyName => self.company_name = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Website => &self.website,
            Field::Street => &self.street,
            Field::City => &self.city,
            Field::CompanyName => &self.company_name,
        }
    }

    /// The payload for a create request: the full draft, no id.
    pub fn to_user(&self) -> User {
        User {
            id: None,
            name: self.name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            website: self.website.clone(),
            street: self.street.clone(),
            city: self.city.clone(),
            company_name: self.company_name.clone(),
            extra: Map::new(),
            provisional: false,
        }
    }
}

/// `"USER-" + name`, including for an empty name.
pub fn derive_username(name: &str) -> String {
    format!("{USERNAME_PREFIX}{name}")
}
