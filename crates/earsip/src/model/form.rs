//! Form cards: a [`FormState`] plus the widget state iced needs to edit it.

use std::collections::HashMap;

use earsip_api::{ApiClient, Category, User};
use earsip_core::{FieldKind, FormKind, FormState};
use iced::widget::text_editor;
use tracing::{debug, warn};

/// Messages shared by every form.
#[derive(Debug, Clone)]
pub enum FormMessage {
    /// Single-line field, choice or path list changed.
    Input(&'static str, String),
    /// Multi-line field edited.
    Edit(&'static str, text_editor::Action),
    /// Submit pressed.
    Submit,
    /// Cancel pressed.
    Cancel,
}

/// What the owner of a form has to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// The user asked to submit.
    Submit,
    /// The user backed out.
    Cancel,
}

/// Editable form with its multi-line buffers and category choices.
pub struct FormModel {
    state: FormState,
    editors: HashMap<&'static str, text_editor::Content>,
    categories: Vec<String>,
}

impl FormModel {
    /// Wraps a prefilled form.
    #[must_use]
    pub fn new(state: FormState) -> Self {
        let editors = state
            .schema()
            .fields
            .iter()
            .filter(|f| f.kind == FieldKind::Multiline)
            .map(|f| (f.name, text_editor::Content::with_text(state.value(f.name))))
            .collect();
        Self {
            state,
            editors,
            categories: Vec::new(),
        }
    }

    /// Empty form of `kind`.
    #[must_use]
    pub fn empty(kind: FormKind) -> Self {
        Self::new(FormState::new(kind))
    }

    pub const fn state(&self) -> &FormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    /// Buffer of a multi-line field.
    pub fn editor(&self, field: &str) -> Option<&text_editor::Content> {
        self.editors.get(field)
    }

    /// Category names offered by category pickers.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories.into_iter().map(|c| c.name).collect();
    }

    /// Returns true if the form has a category picker.
    #[must_use]
    pub fn needs_categories(&self) -> bool {
        self.state
            .schema()
            .fields
            .iter()
            .any(|f| f.kind == FieldKind::Category)
    }

    /// Applies an edit; returns the event the owner must handle.
    pub fn update(&mut self, message: FormMessage) -> Option<FormEvent> {
        match message {
            FormMessage::Input(field, value) => {
                self.state.set(field, value);
            }
            FormMessage::Edit(field, action) => {
                let Some(content) = self.editors.get_mut(field) else {
                    debug!("No editor for {}", field);
                    return None;
                };
                let is_edit = action.is_edit();
                content.perform(action);
                if is_edit {
                    self.state.set(field, content.text());
                }
            }
            FormMessage::Submit => return Some(FormEvent::Submit),
            FormMessage::Cancel => return Some(FormEvent::Cancel),
        }
        None
    }

    /// Clears values and buffers, keeping the category choices.
    pub fn reset(&mut self) {
        let categories = std::mem::take(&mut self.categories);
        *self = Self::empty(self.state.kind());
        self.categories = categories;
    }
}

/// What a standalone form produced.
#[derive(Debug, Clone)]
pub enum Submitted {
    /// Record saved.
    Saved,
    /// Own profile saved; carries the refreshed user.
    Profile(User),
}

/// Sends a standalone form (not tied to a list row).
///
/// Outgoing letters are stamped with the organization letterhead, fetched
/// at submit time.
///
/// # Errors
///
/// Returns the service error.
pub async fn submit(client: ApiClient, form: FormState) -> earsip_api::Result<Submitted> {
    match form.kind() {
        FormKind::InboxCreate => {
            client.create_inbox(form.to_form_data()).await?;
        }
        FormKind::OutboxCreate => {
            let org = client.get_organization().await?.unwrap_or_default();
            client.create_outbox(form.to_outbox_form(&org)).await?;
        }
        FormKind::UserRegister => {
            client.register_user(&form.to_new_user()).await?;
        }
        FormKind::Profile => {
            let user = client.update_me(form.to_form_data()).await?;
            return Ok(Submitted::Profile(user));
        }
        FormKind::Password => {
            client
                .change_password(form.value("currentPassword"), form.value("newPassword"))
                .await?;
        }
        kind => {
            warn!("{:?} is not a standalone form", kind);
            return Err(earsip_api::Error::InvalidResponse(format!(
                "{kind:?} cannot be submitted here"
            )));
        }
    }
    Ok(Submitted::Saved)
}

/// A form shown as its own page.
pub struct FormCard {
    pub model: FormModel,
}

impl FormCard {
    pub fn new(state: FormState) -> Self {
        Self {
            model: FormModel::new(state),
        }
    }
}
