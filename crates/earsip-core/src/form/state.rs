//! Values and errors of one open form.

use std::collections::HashMap;

use earsip_api::{
    Category, FormData, InboxMail, NewUser, Organization, OutboxMail, Role, User, UserStatus,
    UserUpdate, date_only,
};
use tracing::debug;

use super::schema::{FieldKind, FormKind, FormSchema};
use super::validation::{ValidationErrors, split_paths, validate};

/// Editable state of a form card.
#[derive(Debug, Clone)]
pub struct FormState {
    schema: FormSchema,
    values: HashMap<&'static str, String>,
    errors: ValidationErrors,
    submitting: bool,
}

impl FormState {
    /// Creates an empty form with its default choices filled in.
    #[must_use]
    pub fn new(kind: FormKind) -> Self {
        let mut state = Self {
            schema: kind.schema(),
            values: HashMap::new(),
            errors: ValidationErrors::default(),
            submitting: false,
        };
        if kind == FormKind::UserRegister {
            state.set("role", Role::User.as_str());
            state.set("status", UserStatus::Active.as_str());
        }
        state
    }

    /// Edit form for an incoming letter.
    #[must_use]
    pub fn from_inbox(mail: &InboxMail) -> Self {
        let mut state = Self::new(FormKind::InboxEdit);
        state.set("number", &mail.number);
        state.set("category", &mail.category);
        state.set("date", date_only(&mail.date));
        state.set(
            "recievedDate",
            mail.received_date.as_deref().map(date_only).unwrap_or_default(),
        );
        state.set("origin", &mail.origin);
        state.set("summary", &mail.summary);
        state
    }

    /// Edit form for an outgoing letter.
    #[must_use]
    pub fn from_outbox(mail: &OutboxMail) -> Self {
        let mut state = Self::new(FormKind::OutboxEdit);
        state.set("number", &mail.number);
        state.set("category", &mail.category);
        state.set("date", date_only(&mail.date));
        state.set("destination", &mail.destination);
        state.set("summary", &mail.summary);
        state.set("sign", mail.sign.as_deref().unwrap_or_default());
        state.set("content", mail.content.as_deref().unwrap_or_default());
        state
    }

    /// Administrator edit form for another account.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        let mut state = Self::new(FormKind::UserManage);
        state.set("name", &user.name);
        state.set("address", user.address.as_deref().unwrap_or_default());
        state.set("position", user.position.as_deref().unwrap_or_default());
        state.set("number", user.number.as_deref().unwrap_or_default());
        state.set("role", user.role.as_str());
        state.set("status", user.status.as_str());
        state
    }

    /// Own profile form.
    #[must_use]
    pub fn from_profile(user: &User) -> Self {
        let mut state = Self::new(FormKind::Profile);
        state.set("name", &user.name);
        state.set("address", user.address.as_deref().unwrap_or_default());
        state.set("position", user.position.as_deref().unwrap_or_default());
        state.set("number", user.number.as_deref().unwrap_or_default());
        state.set("nbm", user.nbm.as_deref().unwrap_or_default());
        state
    }

    /// Organization form, prefilled when the profile already exists.
    #[must_use]
    pub fn from_organization(org: Option<&Organization>) -> Self {
        let mut state = Self::new(FormKind::Organization);
        if let Some(org) = org {
            state.set("name", &org.name);
            state.set("address", &org.address);
            state.set("number", &org.number);
            state.set("email", &org.email);
        }
        state
    }

    /// Rename form for a category.
    #[must_use]
    pub fn from_category(category: &Category) -> Self {
        let mut state = Self::new(FormKind::Category);
        state.set("name", &category.name);
        state
    }

    /// Which form this is.
    #[must_use]
    pub const fn kind(&self) -> FormKind {
        self.schema.kind
    }

    /// Field list and messages.
    #[must_use]
    pub const fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Current value of a field (empty if unset).
    #[must_use]
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map_or("", String::as_str)
    }

    /// Sets a field and clears its error. Unknown fields are ignored.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        let Some(spec) = self.schema.field(field) else {
            debug!("Ignoring unknown field {} on {:?}", field, self.schema.kind);
            return;
        };
        self.values.insert(spec.name, value.into());
        self.errors.remove(field);
    }

    /// Error currently shown under a field.
    #[must_use]
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    /// All current errors.
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Validates and keeps the errors for display.
    ///
    /// # Errors
    ///
    /// Returns the summary notification text when any field fails.
    pub fn validate(&mut self) -> Result<(), String> {
        match validate(&self.schema, &self.values) {
            Ok(()) => {
                self.errors = ValidationErrors::default();
                Ok(())
            }
            Err(errors) => {
                let summary = errors.summary().to_string();
                debug!("{:?} failed validation on {} field(s)", self.schema.kind, errors.len());
                self.errors = errors;
                Err(summary)
            }
        }
    }

    /// Returns true while a submit is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validates and marks the form as submitting.
    ///
    /// # Errors
    ///
    /// Returns the summary notification when validation fails, or `None` as
    /// the error when a submit is already in flight.
    pub fn begin_submit(&mut self) -> Result<(), Option<String>> {
        if self.submitting {
            return Err(None);
        }
        self.validate().map_err(Some)?;
        self.submitting = true;
        Ok(())
    }

    /// Clears the in-flight flag after the service answered.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// Clears every value and error.
    pub fn reset(&mut self) {
        *self = Self::new(self.schema.kind);
    }

    /// Multipart body of the submitted fields.
    ///
    /// File fields become file parts; `;`-separated lists become one part per
    /// path; blank optional fields are left out.
    #[must_use]
    pub fn to_form_data(&self) -> FormData {
        let mut form = FormData::new();
        for spec in self.schema.fields.iter().filter(|f| f.submit) {
            let value = self.value(spec.name);
            match spec.kind {
                FieldKind::File => {
                    if !value.trim().is_empty() {
                        form.push_file(spec.name, value.trim());
                    }
                }
                FieldKind::Files => {
                    for path in split_paths(value) {
                        form.push_file(spec.name, path);
                    }
                }
                FieldKind::Password => form.push_text(spec.name, value),
                _ => {
                    if spec.is_required() || !value.trim().is_empty() {
                        form.push_text(spec.name, value.trim());
                    }
                }
            }
        }
        form
    }

    /// Outgoing letter body, stamped with the organization letterhead.
    #[must_use]
    pub fn to_outbox_form(&self, org: &Organization) -> FormData {
        self.to_form_data()
            .text("orgName", &org.name)
            .text("orgNumber", &org.number)
            .text("orgAddress", &org.address)
            .text("orgEmail", &org.email)
            .text("orgLogoUrl", org.logo.as_deref().unwrap_or_default())
    }

    /// Registration body.
    #[must_use]
    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            name: self.trimmed("name"),
            username: self.trimmed("username"),
            password: self.value("password").to_string(),
            address: self.trimmed("address"),
            number: self.trimmed("number"),
            position: self.trimmed("position"),
            nbm: self.trimmed("nbm"),
            role: parse_role(self.value("role")),
            status: parse_status(self.value("status")),
        }
    }

    /// Administrator update body.
    #[must_use]
    pub fn to_user_update(&self) -> UserUpdate {
        UserUpdate {
            name: self.trimmed("name"),
            address: self.trimmed("address"),
            position: self.trimmed("position"),
            number: self.trimmed("number"),
            role: parse_role(self.value("role")),
            status: parse_status(self.value("status")),
        }
    }

    fn trimmed(&self, field: &str) -> String {
        self.value(field).trim().to_string()
    }
}

fn parse_role(value: &str) -> Role {
    Role::ALL
        .into_iter()
        .find(|r| r.as_str() == value.trim())
        .unwrap_or_default()
}

fn parse_status(value: &str) -> UserStatus {
    UserStatus::ALL
        .into_iter()
        .find(|s| s.as_str() == value.trim())
        .unwrap_or_default()
}
