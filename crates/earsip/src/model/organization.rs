//! Organization profile card: the singleton letterhead record.

use earsip_api::{ApiClient, Organization};
use earsip_core::FormState;
use iced::Task;
use tracing::{debug, info};

use super::Notice;
use super::form::{FormEvent, FormMessage, FormModel};

const LOAD_ERROR: &str = "Gagal memuat data organisasi";

#[derive(Debug, Clone)]
pub enum OrganizationMessage {
    Loaded(Result<Option<Organization>, String>),
    Form(FormMessage),
    Saved(Result<(), String>),
}

pub struct OrganizationCard {
    organization: Option<Organization>,
    loading: bool,
    form: FormModel,
}

impl OrganizationCard {
    pub fn new(client: &ApiClient) -> (Self, Task<OrganizationMessage>) {
        let card = Self {
            organization: None,
            loading: true,
            form: FormModel::new(FormState::from_organization(None)),
        };
        (card, load(client))
    }

    pub const fn organization(&self) -> Option<&Organization> {
        self.organization.as_ref()
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub const fn form(&self) -> &FormModel {
        &self.form
    }

    /// Returns true once the profile exists on the server.
    pub fn exists(&self) -> bool {
        self.organization.as_ref().is_some_and(|o| o.id.is_some())
    }

    pub fn update(
        &mut self,
        message: OrganizationMessage,
        client: &ApiClient,
    ) -> (Task<OrganizationMessage>, Option<Notice>) {
        match message {
            OrganizationMessage::Loaded(result) => {
                self.loading = false;
                match result {
                    Ok(organization) => {
                        debug!("Organization profile present: {}", organization.is_some());
                        self.form = FormModel::new(FormState::from_organization(
                            organization.as_ref(),
                        ));
                        self.organization = organization;
                    }
                    Err(message) => return (Task::none(), Some(Notice::error(message))),
                }
            }
            OrganizationMessage::Form(message) => match self.form.update(message) {
                Some(FormEvent::Submit) => return self.submit(client),
                Some(FormEvent::Cancel) => {
                    if !self.form.state().is_submitting() {
                        self.form = FormModel::new(FormState::from_organization(
                            self.organization.as_ref(),
                        ));
                    }
                }
                None => {}
            },
            OrganizationMessage::Saved(result) => {
                let schema = *self.form.state().schema();
                self.form.state_mut().finish_submit();
                return match result {
                    Ok(()) => {
                        info!("Organization profile saved");
                        self.loading = true;
                        (load(client), Some(Notice::success(schema.success)))
                    }
                    Err(message) => (Task::none(), Some(Notice::error(message))),
                };
            }
        }
        (Task::none(), None)
    }

    fn submit(&mut self, client: &ApiClient) -> (Task<OrganizationMessage>, Option<Notice>) {
        if let Err(summary) = self.form.state_mut().begin_submit() {
            return (Task::none(), summary.map(Notice::error));
        }
        let failure = self.form.state().schema().failure;
        let body = self.form.state().to_form_data();
        let exists = self.exists();
        let client = client.clone();
        let task = Task::perform(
            async move {
                if exists {
                    client.update_organization(body).await
                } else {
                    client.create_organization(body).await
                }
            },
            move |result| {
                OrganizationMessage::Saved(result.map(|_| ()).map_err(|e| e.user_message(failure)))
            },
        );
        (task, None)
    }
}

fn load(client: &ApiClient) -> Task<OrganizationMessage> {
    let client = client.clone();
    Task::perform(async move { client.get_organization().await }, |result| {
        OrganizationMessage::Loaded(result.map_err(|e| e.user_message(LOAD_ERROR)))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:5000/api/").unwrap()
    }

    fn card() -> OrganizationCard {
        OrganizationCard {
            organization: None,
            loading: true,
            form: FormModel::new(FormState::from_organization(None)),
        }
    }

    #[test]
    fn test_loaded_profile_prefills_form() {
        let mut card = card();
        let org = Organization {
            id: Some("o1".into()),
            name: "PCM Kalasan".into(),
            address: "Jl. Solo".into(),
            number: "0274".into(),
            email: "pcm@kalasan.id".into(),
            logo: None,
        };
        card.update(OrganizationMessage::Loaded(Ok(Some(org))), &client());
        assert!(!card.is_loading());
        assert!(card.exists());
        assert_eq!(card.form().state().value("name"), "PCM Kalasan");
    }

    #[test]
    fn test_missing_profile_means_create() {
        let mut card = card();
        card.update(OrganizationMessage::Loaded(Ok(None)), &client());
        assert!(!card.exists());
        assert_eq!(card.form().state().value("name"), "");
    }

    #[test]
    fn test_save_failure_unlocks_form() {
        let mut card = card();
        let (_, notice) = card.update(OrganizationMessage::Saved(Err("Gagal".into())), &client());
        assert_eq!(notice, Some(Notice::error("Gagal")));
        assert!(!card.form().state().is_submitting());
    }
}
