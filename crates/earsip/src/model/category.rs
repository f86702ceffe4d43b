//! Category editor: create form, inline rename and delete.

use earsip_api::{ApiClient, Category};
use earsip_core::{FormKind, FormState};
use iced::Task;
use iced::task;
use tracing::debug;

use super::Notice;
use super::form::{FormEvent, FormMessage, FormModel};

const LOAD_ERROR: &str = "Gagal memuat kategori";
const DELETED: &str = "Kategori berhasil dihapus";
const DELETE_ERROR: &str = "Gagal menghapus kategori";

#[derive(Debug, Clone)]
pub enum CategoryMessage {
    /// A load finished; the number identifies the request.
    Loaded(u64, Result<Vec<Category>, String>),
    Refresh,
    /// Create form input.
    New(FormMessage),
    /// Start renaming a category.
    StartEdit(String),
    /// Inline rename input.
    Edit(FormMessage),
    AskDelete(String),
    ConfirmDelete,
    CancelDelete,
    /// A write finished with its notification text.
    Saved(Result<&'static str, String>),
}

/// What the last write was, so a failure unlocks the right form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Create,
    Rename,
    Delete,
}

pub struct CategoryCard {
    categories: Vec<Category>,
    loading: bool,
    issued: u64,
    fetch: Option<task::Handle>,
    create: FormModel,
    editing: Option<(String, FormModel)>,
    confirm_delete: Option<Category>,
    pending: Option<Pending>,
}

impl CategoryCard {
    pub fn new(client: &ApiClient) -> (Self, Task<CategoryMessage>) {
        let mut card = Self {
            categories: Vec::new(),
            loading: false,
            issued: 0,
            fetch: None,
            create: FormModel::empty(FormKind::Category),
            editing: None,
            confirm_delete: None,
            pending: None,
        };
        let task = card.load(client);
        (card, task)
    }

    /// Starts a load; a newer load aborts the previous one.
    fn load(&mut self, client: &ApiClient) -> Task<CategoryMessage> {
        self.issued += 1;
        self.loading = true;
        let ticket = self.issued;
        let client = client.clone();
        let (task, handle) =
            Task::perform(async move { client.list_categories().await }, move |result| {
                CategoryMessage::Loaded(ticket, result.map_err(|e| e.user_message(LOAD_ERROR)))
            })
            .abortable();
        self.fetch = Some(handle.abort_on_drop());
        task
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub const fn create_form(&self) -> &FormModel {
        &self.create
    }

    /// Id of the category being renamed and its form.
    pub fn editing(&self) -> Option<(&str, &FormModel)> {
        self.editing.as_ref().map(|(id, f)| (id.as_str(), f))
    }

    pub const fn confirm_delete(&self) -> Option<&Category> {
        self.confirm_delete.as_ref()
    }

    pub const fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn update(
        &mut self,
        message: CategoryMessage,
        client: &ApiClient,
    ) -> (Task<CategoryMessage>, Option<Notice>) {
        match message {
            CategoryMessage::Loaded(ticket, result) => {
                if ticket != self.issued {
                    debug!("Dropping stale category load {}", ticket);
                    return (Task::none(), None);
                }
                self.loading = false;
                self.fetch = None;
                match result {
                    Ok(categories) => {
                        debug!("Loaded {} categories", categories.len());
                        self.categories = categories;
                    }
                    Err(message) => return (Task::none(), Some(Notice::error(message))),
                }
            }
            CategoryMessage::Refresh => return (self.load(client), None),
            CategoryMessage::New(message) => {
                if self.create.update(message) == Some(FormEvent::Submit) {
                    return self.submit_create(client);
                }
            }
            CategoryMessage::StartEdit(id) => {
                if let Some(category) = self.categories.iter().find(|c| c.id == id) {
                    self.editing = Some((id, FormModel::new(FormState::from_category(category))));
                }
            }
            CategoryMessage::Edit(message) => {
                let event = self.editing.as_mut().and_then(|(_, form)| form.update(message));
                match event {
                    Some(FormEvent::Submit) => return self.submit_rename(client),
                    Some(FormEvent::Cancel) if self.pending.is_none() => self.editing = None,
                    _ => {}
                }
            }
            CategoryMessage::AskDelete(id) => {
                if let Some(category) = self.categories.iter().find(|c| c.id == id) {
                    self.confirm_delete = Some(category.clone());
                }
            }
            CategoryMessage::CancelDelete => {
                if self.pending.is_none() {
                    self.confirm_delete = None;
                }
            }
            CategoryMessage::ConfirmDelete => {
                let Some(id) = self.confirm_delete().map(|c| c.id.clone()) else {
                    return (Task::none(), None);
                };
                if self.pending.is_some() {
                    return (Task::none(), None);
                }
                self.pending = Some(Pending::Delete);
                let client = client.clone();
                let task = Task::perform(
                    async move { client.delete_category(&id).await },
                    |result| {
                        CategoryMessage::Saved(
                            result.map(|_| DELETED).map_err(|e| e.user_message(DELETE_ERROR)),
                        )
                    },
                );
                return (task, None);
            }
            CategoryMessage::Saved(result) => return self.finish(result, client),
        }
        (Task::none(), None)
    }

    fn submit_create(&mut self, client: &ApiClient) -> (Task<CategoryMessage>, Option<Notice>) {
        if self.pending.is_some() {
            return (Task::none(), None);
        }
        if let Err(summary) = self.create.state_mut().begin_submit() {
            return (Task::none(), summary.map(Notice::error));
        }
        self.pending = Some(Pending::Create);
        let schema = *self.create.state().schema();
        let name = self.create.state().value("name").trim().to_string();
        let client = client.clone();
        let task = Task::perform(
            async move { client.create_category(&name).await },
            move |result| {
                CategoryMessage::Saved(
                    result
                        .map(|_| schema.success)
                        .map_err(|e| e.user_message(schema.failure)),
                )
            },
        );
        (task, None)
    }

    fn submit_rename(&mut self, client: &ApiClient) -> (Task<CategoryMessage>, Option<Notice>) {
        if self.pending.is_some() {
            return (Task::none(), None);
        }
        let Some((id, form)) = self.editing.as_mut() else {
            return (Task::none(), None);
        };
        let id = id.clone();
        if let Err(summary) = form.state_mut().begin_submit() {
            return (Task::none(), summary.map(Notice::error));
        }
        self.pending = Some(Pending::Rename);
        let schema = *form.state().schema();
        let name = form.state().value("name").trim().to_string();
        let client = client.clone();
        let task = Task::perform(
            async move { client.update_category(&id, &name).await },
            move |result| {
                CategoryMessage::Saved(
                    result
                        .map(|_| schema.success)
                        .map_err(|e| e.user_message(schema.failure)),
                )
            },
        );
        (task, None)
    }

    fn finish(
        &mut self,
        result: Result<&'static str, String>,
        client: &ApiClient,
    ) -> (Task<CategoryMessage>, Option<Notice>) {
        let pending = self.pending.take();
        match result {
            Ok(message) => {
                match pending {
                    Some(Pending::Create) => self.create.reset(),
                    Some(Pending::Rename) => self.editing = None,
                    Some(Pending::Delete) => self.confirm_delete = None,
                    None => {}
                }
                (self.load(client), Some(Notice::success(message)))
            }
            Err(message) => {
                match pending {
                    Some(Pending::Create) => self.create.state_mut().finish_submit(),
                    Some(Pending::Rename) => {
                        if let Some((_, form)) = self.editing.as_mut() {
                            form.state_mut().finish_submit();
                        }
                    }
                    Some(Pending::Delete) => self.confirm_delete = None,
                    None => {}
                }
                (Task::none(), Some(Notice::error(message)))
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn card() -> CategoryCard {
        CategoryCard {
            categories: vec![
                Category {
                    id: "c1".into(),
                    name: "Undangan".into(),
                },
                Category {
                    id: "c2".into(),
                    name: "Edaran".into(),
                },
            ],
            loading: false,
            issued: 0,
            fetch: None,
            create: FormModel::empty(FormKind::Category),
            editing: None,
            confirm_delete: None,
            pending: None,
        }
    }

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:5000/api/").unwrap()
    }

    #[test]
    fn test_blank_name_is_rejected_locally() {
        let mut card = card();
        let (_, notice) = card.update(CategoryMessage::New(FormMessage::Submit), &client());
        assert_eq!(notice.map(|n| n.level), Some(earsip_core::Level::Error));
        assert!(!card.is_busy());
        assert!(card.create_form().state().error("name").is_some());
    }

    #[test]
    fn test_start_edit_prefills_name() {
        let mut card = card();
        card.update(CategoryMessage::StartEdit("c2".into()), &client());
        let (id, form) = card.editing().unwrap();
        assert_eq!(id, "c2");
        assert_eq!(form.state().value("name"), "Edaran");

        card.update(CategoryMessage::Edit(FormMessage::Cancel), &client());
        assert!(card.editing().is_none());
    }

    #[test]
    fn test_delete_prompt_for_unknown_id_is_ignored() {
        let mut card = card();
        card.update(CategoryMessage::AskDelete("c9".into()), &client());
        assert!(card.confirm_delete().is_none());
        card.update(CategoryMessage::AskDelete("c1".into()), &client());
        assert_eq!(card.confirm_delete().map(|c| c.name.as_str()), Some("Undangan"));
    }

    #[test]
    fn test_failed_load_keeps_rows() {
        let mut card = card();
        card.update(CategoryMessage::Refresh, &client());
        let ticket = card.issued;
        let (_, notice) =
            card.update(CategoryMessage::Loaded(ticket, Err(LOAD_ERROR.into())), &client());
        assert_eq!(notice, Some(Notice::error(LOAD_ERROR)));
        assert_eq!(card.categories().len(), 2);
        assert!(!card.is_loading());
    }

    #[test]
    fn test_older_load_is_dropped() {
        let mut card = card();
        card.update(CategoryMessage::Refresh, &client());
        let older = card.issued;
        card.update(CategoryMessage::Refresh, &client());
        let newer = card.issued;

        let only = vec![Category {
            id: "c3".into(),
            name: "Surat Tugas".into(),
        }];
        card.update(CategoryMessage::Loaded(newer, Ok(only)), &client());
        let (_, notice) = card.update(CategoryMessage::Loaded(older, Ok(Vec::new())), &client());
        assert!(notice.is_none());
        assert_eq!(card.categories().len(), 1);
        assert_eq!(card.categories()[0].id, "c3");
    }

    #[test]
    fn test_delete_prompt_survives_reload() {
        let mut card = card();
        card.update(CategoryMessage::AskDelete("c1".into()), &client());
        card.update(CategoryMessage::Refresh, &client());
        let ticket = card.issued;
        let reordered = vec![
            Category {
                id: "c2".into(),
                name: "Edaran".into(),
            },
            Category {
                id: "c1".into(),
                name: "Undangan".into(),
            },
        ];
        card.update(CategoryMessage::Loaded(ticket, Ok(reordered)), &client());
        assert_eq!(card.confirm_delete().map(|c| c.id.as_str()), Some("c1"));

        card.update(CategoryMessage::StartEdit("c1".into()), &client());
        assert_eq!(card.editing().map(|(id, _)| id), Some("c1"));
    }
}
