//! The page currently shown and the route it came from.

use earsip_api::{ApiClient, Category, InboxMail, LogbookEntry, OutboxMail, Role, User};
use earsip_core::list::{
    DispositionQueue, InboxList, LogbookList, OutboxList, UserList, VerificationQueue,
};
use earsip_core::routes::{AksiView, LogbookView, MailView, ProfileView, UsersView};
use earsip_core::{FormKind, FormState, Route};
use iced::Task;
use tracing::{debug, info};

use super::category::{CategoryCard, CategoryMessage};
use super::dashboard::{DashboardCard, DashboardMessage};
use super::form::{self, FormCard, FormEvent, FormMessage, FormModel, Submitted};
use super::list_card::{ListCard, ListMessage};
use super::organization::{OrganizationCard, OrganizationMessage};
use super::resource::Resource;
use super::Notice;

/// What a screen needs from the app to build or update itself.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub client: &'a ApiClient,
    pub user: Option<&'a User>,
    pub page_size: u32,
}

impl Context<'_> {
    fn role(&self) -> Role {
        self.user.map_or(Role::User, |u| u.role)
    }
}

/// Something only the app can do.
#[derive(Debug, Clone)]
pub enum Effect {
    Notify(Notice),
    /// Own profile changed on the server.
    UserUpdated(User),
    /// Login form passed validation.
    Login { username: String, password: String },
}

#[derive(Debug, Clone)]
pub enum ScreenMessage {
    Login(FormMessage),
    Dashboard(DashboardMessage),
    Logbook(ListMessage<LogbookEntry>),
    Inbox(ListMessage<InboxMail>),
    Outbox(ListMessage<OutboxMail>),
    Dispositions(ListMessage<InboxMail>),
    Verifications(ListMessage<OutboxMail>),
    Users(ListMessage<User>),
    Form(FormMessage),
    FormCategories(Result<Vec<Category>, String>),
    FormSubmitted(Result<Submitted, String>),
    Organization(OrganizationMessage),
    Category(CategoryMessage),
}

pub enum Screen {
    /// Session probe in flight.
    Loading,
    Login(FormModel),
    Dashboard(DashboardCard),
    Logbook(ListCard<LogbookList>),
    Inbox(ListCard<InboxList>),
    Outbox(ListCard<OutboxList>),
    Dispositions(ListCard<DispositionQueue>),
    Verifications(ListCard<VerificationQueue>),
    Users(ListCard<UserList>),
    Form(FormCard),
    Organization(OrganizationCard),
    Category(CategoryCard),
    Unauthorized,
}

impl Screen {
    /// Builds the page for an already guarded route and its first fetch.
    pub fn open(route: Route, ctx: Context<'_>) -> (Self, Task<ScreenMessage>) {
        debug!("Opening {}", route);
        let client = ctx.client;
        let limit = ctx.page_size;
        match route {
            Route::Login => (Self::Login(FormModel::empty(FormKind::Login)), Task::none()),
            Route::Dashboard => {
                let (card, task) = DashboardCard::new(client, ctx.role());
                (Self::Dashboard(card), task.map(ScreenMessage::Dashboard))
            }
            Route::Logbook(LogbookView::All) => {
                let (card, task) = ListCard::new(client, limit);
                (Self::Logbook(card), task.map(ScreenMessage::Logbook))
            }
            Route::Logbook(LogbookView::Inbox) => {
                let (card, task) = ListCard::new(client, limit);
                (Self::Inbox(card), task.map(ScreenMessage::Inbox))
            }
            Route::Logbook(LogbookView::Outbox) => {
                let (card, task) = ListCard::new(client, limit);
                (Self::Outbox(card), task.map(ScreenMessage::Outbox))
            }
            Route::Aksi(AksiView::Disposisi) => {
                let (card, task) = ListCard::new(client, limit);
                (Self::Dispositions(card), task.map(ScreenMessage::Dispositions))
            }
            Route::Aksi(AksiView::Verifikasi) => {
                let (card, task) = ListCard::new(client, limit);
                (Self::Verifications(card), task.map(ScreenMessage::Verifications))
            }
            Route::Users(UsersView::List) => {
                let (card, task) = ListCard::new(client, limit);
                (Self::Users(card), task.map(ScreenMessage::Users))
            }
            Route::Users(UsersView::Add) => form_page(FormState::new(FormKind::UserRegister), client),
            Route::Mail(MailView::Inbox) => form_page(FormState::new(FormKind::InboxCreate), client),
            Route::Mail(MailView::Outbox) => {
                form_page(FormState::new(FormKind::OutboxCreate), client)
            }
            Route::Profile(ProfileView::Data) => {
                let state = ctx
                    .user
                    .map_or_else(|| FormState::new(FormKind::Profile), FormState::from_profile);
                form_page(state, client)
            }
            Route::Profile(ProfileView::Password) => {
                form_page(FormState::new(FormKind::Password), client)
            }
            Route::Organization => {
                let (card, task) = OrganizationCard::new(client);
                (Self::Organization(card), task.map(ScreenMessage::Organization))
            }
            Route::Category => {
                let (card, task) = CategoryCard::new(client);
                (Self::Category(card), task.map(ScreenMessage::Category))
            }
            Route::Unauthorized => (Self::Unauthorized, Task::none()),
        }
    }

    /// Stops listening for fetches of a page being left.
    pub fn leave(&mut self) {
        match self {
            Self::Logbook(card) => card.detach(),
            Self::Inbox(card) => card.detach(),
            Self::Outbox(card) => card.detach(),
            Self::Dispositions(card) => card.detach(),
            Self::Verifications(card) => card.detach(),
            Self::Users(card) => card.detach(),
            _ => {}
        }
    }

    /// Unlocks the login form after a rejected sign-in.
    pub fn finish_login(&mut self) {
        if let Self::Login(form) = self {
            form.state_mut().finish_submit();
        }
    }

    /// Refetches whatever the page shows.
    pub fn refresh(&mut self, ctx: Context<'_>) -> Task<ScreenMessage> {
        let client = ctx.client;
        match self {
            Self::Dashboard(_) => Task::done(ScreenMessage::Dashboard(DashboardMessage::Refresh)),
            Self::Logbook(card) => card.refresh(client).map(ScreenMessage::Logbook),
            Self::Inbox(card) => card.refresh(client).map(ScreenMessage::Inbox),
            Self::Outbox(card) => card.refresh(client).map(ScreenMessage::Outbox),
            Self::Dispositions(card) => card.refresh(client).map(ScreenMessage::Dispositions),
            Self::Verifications(card) => card.refresh(client).map(ScreenMessage::Verifications),
            Self::Users(card) => card.refresh(client).map(ScreenMessage::Users),
            Self::Category(_) => Task::done(ScreenMessage::Category(CategoryMessage::Refresh)),
            _ => Task::none(),
        }
    }

    /// Escape: closes a dialog or backs out of an inline edit.
    pub fn cancel(&self) -> Option<ScreenMessage> {
        match self {
            Self::Logbook(c) => c.dialog().map(|_| ScreenMessage::Logbook(ListMessage::CloseDialog)),
            Self::Inbox(c) => c.dialog().map(|_| ScreenMessage::Inbox(ListMessage::CloseDialog)),
            Self::Outbox(c) => c.dialog().map(|_| ScreenMessage::Outbox(ListMessage::CloseDialog)),
            Self::Dispositions(c) => c
                .dialog()
                .map(|_| ScreenMessage::Dispositions(ListMessage::CloseDialog)),
            Self::Verifications(c) => c
                .dialog()
                .map(|_| ScreenMessage::Verifications(ListMessage::CloseDialog)),
            Self::Users(c) => c.dialog().map(|_| ScreenMessage::Users(ListMessage::CloseDialog)),
            Self::Category(c) => {
                if c.confirm_delete().is_some() {
                    Some(ScreenMessage::Category(CategoryMessage::CancelDelete))
                } else {
                    c.editing()
                        .map(|_| ScreenMessage::Category(CategoryMessage::Edit(FormMessage::Cancel)))
                }
            }
            _ => None,
        }
    }

    /// Ctrl+Enter: submits the form in focus.
    pub fn submit(&self) -> Option<ScreenMessage> {
        let submit = FormMessage::Submit;
        match self {
            Self::Login(_) => Some(ScreenMessage::Login(submit)),
            Self::Form(_) => Some(ScreenMessage::Form(submit)),
            Self::Organization(_) => Some(ScreenMessage::Organization(OrganizationMessage::Form(submit))),
            Self::Category(c) if c.editing().is_some() => {
                Some(ScreenMessage::Category(CategoryMessage::Edit(submit)))
            }
            Self::Category(_) => Some(ScreenMessage::Category(CategoryMessage::New(submit))),
            Self::Logbook(c) => c.dialog().map(|_| ScreenMessage::Logbook(ListMessage::Form(submit))),
            Self::Inbox(c) => c.dialog().map(|_| ScreenMessage::Inbox(ListMessage::Form(submit))),
            Self::Outbox(c) => c.dialog().map(|_| ScreenMessage::Outbox(ListMessage::Form(submit))),
            Self::Dispositions(c) => c
                .dialog()
                .map(|_| ScreenMessage::Dispositions(ListMessage::Form(submit))),
            Self::Verifications(c) => c
                .dialog()
                .map(|_| ScreenMessage::Verifications(ListMessage::Form(submit))),
            Self::Users(c) => c.dialog().map(|_| ScreenMessage::Users(ListMessage::Form(submit))),
            _ => None,
        }
    }

    /// PageUp/PageDown: moves `delta` pages in a list.
    pub fn page_step(&self, delta: i64) -> Option<ScreenMessage> {
        fn target<S: Resource>(card: &ListCard<S>, delta: i64) -> Option<ListMessage<S::Item>> {
            let page = u32::try_from(i64::from(card.list().page()) + delta).ok()?;
            card.list().can_go(page).then_some(ListMessage::GoTo(page))
        }
        match self {
            Self::Logbook(c) => target(c, delta).map(ScreenMessage::Logbook),
            Self::Inbox(c) => target(c, delta).map(ScreenMessage::Inbox),
            Self::Outbox(c) => target(c, delta).map(ScreenMessage::Outbox),
            Self::Dispositions(c) => target(c, delta).map(ScreenMessage::Dispositions),
            Self::Verifications(c) => target(c, delta).map(ScreenMessage::Verifications),
            Self::Users(c) => target(c, delta).map(ScreenMessage::Users),
            _ => None,
        }
    }

    pub fn update(
        &mut self,
        message: ScreenMessage,
        ctx: Context<'_>,
    ) -> (Task<ScreenMessage>, Vec<Effect>) {
        let client = ctx.client;
        let role = ctx.role();
        match (self, message) {
            (Self::Login(form), ScreenMessage::Login(message)) => {
                if form.update(message) != Some(FormEvent::Submit) {
                    return (Task::none(), Vec::new());
                }
                match form.state_mut().begin_submit() {
                    Ok(()) => {
                        let state = form.state();
                        let effect = Effect::Login {
                            username: state.value("username").trim().to_string(),
                            password: state.value("password").to_string(),
                        };
                        (Task::none(), vec![effect])
                    }
                    Err(summary) => (Task::none(), notify(summary.map(Notice::error))),
                }
            }
            (Self::Dashboard(card), ScreenMessage::Dashboard(message)) => {
                let (task, notice) = card.update(message, client, role);
                (task.map(ScreenMessage::Dashboard), notify(notice))
            }
            (Self::Logbook(card), ScreenMessage::Logbook(message)) => {
                list_update(card, message, ctx, ScreenMessage::Logbook)
            }
            (Self::Inbox(card), ScreenMessage::Inbox(message)) => {
                list_update(card, message, ctx, ScreenMessage::Inbox)
            }
            (Self::Outbox(card), ScreenMessage::Outbox(message)) => {
                list_update(card, message, ctx, ScreenMessage::Outbox)
            }
            (Self::Dispositions(card), ScreenMessage::Dispositions(message)) => {
                list_update(card, message, ctx, ScreenMessage::Dispositions)
            }
            (Self::Verifications(card), ScreenMessage::Verifications(message)) => {
                list_update(card, message, ctx, ScreenMessage::Verifications)
            }
            (Self::Users(card), ScreenMessage::Users(message)) => {
                list_update(card, message, ctx, ScreenMessage::Users)
            }
            (Self::Form(card), ScreenMessage::Form(message)) => match card.model.update(message) {
                Some(FormEvent::Submit) => {
                    if let Err(summary) = card.model.state_mut().begin_submit() {
                        return (Task::none(), notify(summary.map(Notice::error)));
                    }
                    let failure = card.model.state().schema().failure;
                    let task = Task::perform(
                        form::submit(client.clone(), card.model.state().clone()),
                        move |result| {
                            ScreenMessage::FormSubmitted(result.map_err(|e| e.user_message(failure)))
                        },
                    );
                    (task, Vec::new())
                }
                Some(FormEvent::Cancel) => {
                    if !card.model.state().is_submitting() {
                        card.model.reset();
                    }
                    (Task::none(), Vec::new())
                }
                None => (Task::none(), Vec::new()),
            },
            (Self::Form(card), ScreenMessage::FormCategories(result)) => match result {
                Ok(categories) => {
                    card.model.set_categories(categories);
                    (Task::none(), Vec::new())
                }
                Err(message) => (Task::none(), notify(Some(Notice::error(message)))),
            },
            (Self::Form(card), ScreenMessage::FormSubmitted(result)) => {
                card.model.state_mut().finish_submit();
                match result {
                    Ok(submitted) => {
                        let success = card.model.state().schema().success;
                        info!("{}", success);
                        let mut effects = vec![Effect::Notify(Notice::success(success))];
                        match submitted {
                            Submitted::Profile(user) => {
                                card.model = FormModel::new(FormState::from_profile(&user));
                                effects.push(Effect::UserUpdated(user));
                            }
                            Submitted::Saved => card.model.reset(),
                        }
                        (Task::none(), effects)
                    }
                    Err(message) => (Task::none(), notify(Some(Notice::error(message)))),
                }
            }
            (Self::Organization(card), ScreenMessage::Organization(message)) => {
                let (task, notice) = card.update(message, client);
                (task.map(ScreenMessage::Organization), notify(notice))
            }
            (Self::Category(card), ScreenMessage::Category(message)) => {
                let (task, notice) = card.update(message, client);
                (task.map(ScreenMessage::Category), notify(notice))
            }
            (_, message) => {
                debug!("Dropping message for another screen: {:?}", message);
                (Task::none(), Vec::new())
            }
        }
    }
}

fn notify(notice: Option<Notice>) -> Vec<Effect> {
    notice.into_iter().map(Effect::Notify).collect()
}

fn list_update<S: Resource>(
    card: &mut ListCard<S>,
    message: ListMessage<S::Item>,
    ctx: Context<'_>,
    wrap: fn(ListMessage<S::Item>) -> ScreenMessage,
) -> (Task<ScreenMessage>, Vec<Effect>) {
    let (task, notice) = card.update(message, ctx.client, ctx.role());
    (task.map(wrap), notify(notice))
}

/// Standalone form page; forms with a category picker fetch the choices.
fn form_page(state: FormState, client: &ApiClient) -> (Screen, Task<ScreenMessage>) {
    let card = FormCard::new(state);
    let task = if card.model.needs_categories() {
        let client = client.clone();
        Task::perform(async move { client.list_categories().await }, |result| {
            ScreenMessage::FormCategories(result.map_err(|e| e.user_message("Gagal memuat kategori")))
        })
    } else {
        Task::none()
    };
    (Screen::Form(card), task)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use earsip_api::UserStatus;

    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:5000/api/").unwrap()
    }

    fn user() -> User {
        User {
            id: "u1".into(),
            name: "Siti".into(),
            username: "siti".into(),
            role: Role::User,
            status: UserStatus::Active,
            ..User::default()
        }
    }

    #[test]
    fn test_routes_open_their_pages() {
        let client = client();
        let user = user();
        let ctx = Context {
            client: &client,
            user: Some(&user),
            page_size: 10,
        };
        assert!(matches!(Screen::open(Route::Login, ctx).0, Screen::Login(_)));
        assert!(matches!(
            Screen::open(Route::Logbook(LogbookView::Inbox), ctx).0,
            Screen::Inbox(_)
        ));
        assert!(matches!(Screen::open(Route::Category, ctx).0, Screen::Category(_)));
        match Screen::open(Route::Profile(ProfileView::Data), ctx).0 {
            Screen::Form(card) => assert_eq!(card.model.state().value("name"), "Siti"),
            _ => panic!("profile should open a form"),
        }
        match Screen::open(Route::Mail(MailView::Outbox), ctx).0 {
            Screen::Form(card) => assert_eq!(card.model.state().kind(), FormKind::OutboxCreate),
            _ => panic!("mail should open a form"),
        }
    }

    #[test]
    fn test_blank_login_never_reaches_the_app() {
        let client = client();
        let ctx = Context {
            client: &client,
            user: None,
            page_size: 10,
        };
        let mut screen = Screen::Login(FormModel::empty(FormKind::Login));
        let (_, effects) = screen.update(ScreenMessage::Login(FormMessage::Submit), ctx);
        assert!(matches!(effects.as_slice(), [Effect::Notify(n)] if n.level == earsip_core::Level::Error));
    }

    #[test]
    fn test_valid_login_emits_credentials() {
        let client = client();
        let ctx = Context {
            client: &client,
            user: None,
            page_size: 10,
        };
        let mut screen = Screen::Login(FormModel::empty(FormKind::Login));
        screen.update(ScreenMessage::Login(FormMessage::Input("username", " siti ".into())), ctx);
        screen.update(ScreenMessage::Login(FormMessage::Input("password", "rahasia".into())), ctx);
        let (_, effects) = screen.update(ScreenMessage::Login(FormMessage::Submit), ctx);
        assert!(matches!(
            effects.as_slice(),
            [Effect::Login { username, password }] if username == "siti" && password == "rahasia"
        ));

        // Second submit while in flight is swallowed
        let (_, effects) = screen.update(ScreenMessage::Login(FormMessage::Submit), ctx);
        assert!(effects.is_empty());
        screen.finish_login();
        let (_, effects) = screen.update(ScreenMessage::Login(FormMessage::Submit), ctx);
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn test_password_mismatch_stays_local() {
        let client = client();
        let ctx = Context {
            client: &client,
            user: None,
            page_size: 10,
        };
        let (mut screen, _) = Screen::open(Route::Profile(ProfileView::Password), ctx);
        for (field, value) in [
            ("currentPassword", "lama"),
            ("newPassword", "baru123"),
            ("confirmPassword", "baru124"),
        ] {
            screen.update(ScreenMessage::Form(FormMessage::Input(field, value.into())), ctx);
        }
        let (_, effects) = screen.update(ScreenMessage::Form(FormMessage::Submit), ctx);
        assert!(matches!(
            effects.as_slice(),
            [Effect::Notify(n)] if n.message == "Konfirmasi password tidak cocok"
        ));
        match screen {
            Screen::Form(card) => assert!(!card.model.state().is_submitting()),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_inbox_without_number_sends_nothing() {
        let client = client();
        let user = user();
        let ctx = Context {
            client: &client,
            user: Some(&user),
            page_size: 10,
        };
        let (mut screen, _) = Screen::open(Route::Mail(MailView::Inbox), ctx);
        for (field, value) in [
            ("origin", "Kecamatan"),
            ("date", "2025-09-01"),
            ("summary", "Undangan rapat"),
        ] {
            screen.update(ScreenMessage::Form(FormMessage::Input(field, value.into())), ctx);
        }
        let (_, effects) = screen.update(ScreenMessage::Form(FormMessage::Submit), ctx);
        assert!(matches!(
            effects.as_slice(),
            [Effect::Notify(n)] if n.message == "Harap isi semua kolom wajib!"
        ));
        match screen {
            Screen::Form(card) => {
                let state = card.model.state();
                assert_eq!(state.kind(), FormKind::InboxCreate);
                assert_eq!(state.error("number"), Some("Nomor surat wajib diisi"));
                assert!(!state.is_submitting());
            }
            _ => panic!("mail should open a form"),
        }
    }
}
