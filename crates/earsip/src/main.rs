//! E-ARSIP - Desktop dashboard for the letter archive
//!
//! Built with Rust and the iced GUI framework on top of the E-ARSIP REST
//! service.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use std::time::{Duration, Instant};

use earsip_api::{ApiClient, User};
use earsip_core::config::DEFAULT_API_URL;
use earsip_core::{AppSettings, Authenticator, Notifications, Route, Session, resolve};
use iced::keyboard::{self, Key, Modifiers};
use iced::{Element, Subscription, Task, time};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use message::{KeyboardAction, Message};
use model::{Context, Effect, Notice, Screen, ScreenMessage};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "earsip=debug,earsip_core=debug,earsip_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting E-ARSIP");

    let settings = AppSettings::load();
    let client = match ApiClient::new(settings.api_url()) {
        Ok(client) => client,
        Err(e) => {
            warn!("Invalid API URL {}: {}; using {}", settings.api_url(), e, DEFAULT_API_URL);
            ApiClient::new(DEFAULT_API_URL)?
        }
    };
    info!("API at {}", client.base_url());

    // Optional start page, e.g. `earsip /logbook/inbox`
    let start = std::env::args()
        .nth(1)
        .map_or(Route::Dashboard, |path| Route::parse(&path));

    iced::application(
        move || EArsip::new(settings.clone(), client.clone(), start),
        EArsip::update,
        EArsip::view,
    )
    .title("E-ARSIP")
    .subscription(EArsip::subscription)
    .run()?;

    Ok(())
}

/// Main application state.
struct EArsip {
    client: ApiClient,
    auth: Authenticator<ApiClient>,
    /// Owned here; every view reads it by reference.
    session: Session,
    settings: AppSettings,
    notifications: Notifications,
    /// Page the user asked for.
    requested: Route,
    /// Page actually built after the guard ran.
    shown: Option<Route>,
    screen: Screen,
    /// Bumped whenever a page is built; messages from older pages are dropped.
    generation: u64,
    sidebar_visible: bool,
}

impl EArsip {
    /// Create new application instance and start the session probe.
    fn new(settings: AppSettings, client: ApiClient, start: Route) -> (Self, Task<Message>) {
        style::widgets::palette::set_theme(settings.theme_mode);
        let mut app = Self {
            auth: Authenticator::new(client.clone()),
            client,
            session: Session::new(),
            settings,
            notifications: Notifications::default(),
            requested: start,
            shown: None,
            screen: Screen::Loading,
            generation: 0,
            sidebar_visible: true,
        };

        let probe = if app.session.begin_probe() {
            let auth = app.auth.clone();
            Task::perform(async move { auth.initialize().await }, Message::SessionProbed)
        } else {
            Task::none()
        };
        let open = app.navigate(start);
        (app, Task::batch([probe, open]))
    }

    fn context(&self) -> Context<'_> {
        Context {
            client: &self.client,
            user: self.session.user(),
            page_size: self.settings.page_size(),
        }
    }

    /// Runs the guard for `route` and builds whatever page it allows.
    fn navigate(&mut self, route: Route) -> Task<Message> {
        self.requested = route;
        let decision = resolve(self.session.state(), route);
        let target = decision.target(route);
        debug!("Navigate {} -> {:?}", route, decision);

        self.screen.leave();
        self.generation += 1;
        let generation = self.generation;
        self.shown = target;

        let Some(target) = target else {
            self.screen = Screen::Loading;
            return Task::none();
        };
        let (screen, task) = Screen::open(target, self.context());
        self.screen = screen;
        task.map(move |m| Message::Screen(generation, m))
    }

    fn notify(&mut self, notice: Notice) {
        match notice.level {
            earsip_core::Level::Success => self.notifications.success(notice.message),
            earsip_core::Level::Error => self.notifications.error(notice.message),
        };
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => return self.navigate(route),
            Message::ToggleSidebar => {
                self.sidebar_visible = !self.sidebar_visible;
            }
            Message::SessionProbed(user) => {
                self.session.finish_probe(user);
                return self.navigate(self.requested);
            }
            Message::LoggedIn(result) => match result {
                Ok(user) => {
                    self.session.apply_login(user);
                    self.notify(Notice::success("Login berhasil"));
                    return self.navigate(Route::Dashboard);
                }
                Err(message) => {
                    self.screen.finish_login();
                    self.notify(Notice::error(message));
                }
            },
            Message::Logout => {
                let auth = self.auth.clone();
                return Task::perform(async move { auth.logout().await }, |()| Message::LoggedOut);
            }
            Message::LoggedOut => {
                self.session.clear();
                self.notify(Notice::success("Logout berhasil"));
                return self.navigate(Route::Login);
            }
            Message::ToggleTheme => {
                self.settings.theme_mode = self.settings.theme_mode.toggled();
                style::widgets::palette::set_theme(self.settings.theme_mode);
                return Task::perform(
                    save_settings(self.settings.clone()),
                    Message::SettingsSaved,
                );
            }
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    warn!("Failed to save settings: {}", e);
                }
            }
            Message::Tick => {
                self.notifications.prune(Instant::now());
            }
            Message::DismissNotification(id) => self.notifications.dismiss(id),
            Message::Screen(generation, message) => {
                return self.handle_screen(generation, message);
            }
            Message::KeyPressed(action) => return self.handle_keyboard_action(action),
            Message::KeyIgnored => {}
        }
        Task::none()
    }

    fn handle_screen(&mut self, generation: u64, message: ScreenMessage) -> Task<Message> {
        if generation != self.generation {
            debug!("Dropping message for a page already left");
            return Task::none();
        }
        let ctx = Context {
            client: &self.client,
            user: self.session.user(),
            page_size: self.settings.page_size(),
        };
        let (task, effects) = self.screen.update(message, ctx);
        let mut tasks = vec![task.map(move |m| Message::Screen(generation, m))];

        for effect in effects {
            match effect {
                Effect::Notify(notice) => self.notify(notice),
                Effect::UserUpdated(user) => self.session.refresh_user(user),
                Effect::Login { username, password } => {
                    let auth = self.auth.clone();
                    tasks.push(Task::perform(
                        async move { auth.login(&username, &password).await },
                        |result: earsip_core::Result<User>| {
                            Message::LoggedIn(result.map_err(|e| e.user_message("Login gagal")))
                        },
                    ));
                }
            }
        }
        Task::batch(tasks)
    }

    fn handle_keyboard_action(&mut self, action: KeyboardAction) -> Task<Message> {
        let generation = self.generation;
        let wrap = move |m: ScreenMessage| Message::Screen(generation, m);
        match action {
            KeyboardAction::Refresh => {
                let ctx = Context {
                    client: &self.client,
                    user: self.session.user(),
                    page_size: self.settings.page_size(),
                };
                self.screen.refresh(ctx).map(wrap)
            }
            KeyboardAction::Cancel => self.screen.cancel().map_or_else(Task::none, |m| Task::done(wrap(m))),
            KeyboardAction::Submit => self.screen.submit().map_or_else(Task::none, |m| Task::done(wrap(m))),
            KeyboardAction::PrevPage => self
                .screen
                .page_step(-1)
                .map_or_else(Task::none, |m| Task::done(wrap(m))),
            KeyboardAction::NextPage => self
                .screen
                .page_step(1)
                .map_or_else(Task::none, |m| Task::done(wrap(m))),
            KeyboardAction::ToggleSidebar => Task::done(Message::ToggleSidebar),
            KeyboardAction::ToggleTheme => Task::done(Message::ToggleTheme),
        }
    }

    /// Builds the window; the guard is re-checked on every render.
    fn view(&self) -> Element<'_, Message> {
        let decision = resolve(self.session.state(), self.requested);
        if decision.target(self.requested).is_none() {
            return view::view_loading();
        }
        let body = view::view_page(
            &self.screen,
            self.session.user(),
            self.shown,
            self.generation,
            self.sidebar_visible,
            self.settings.theme_mode,
        );
        view::with_toasts(body, &self.notifications)
    }

    /// Keyboard shortcuts, plus a tick while notifications are visible.
    fn subscription(&self) -> Subscription<Message> {
        let keys = keyboard::listen().map(|event| {
            if let keyboard::Event::KeyPressed { key, modifiers, .. } = event {
                handle_key_press(key, modifiers).unwrap_or(Message::KeyIgnored)
            } else {
                Message::KeyIgnored
            }
        });

        if self.notifications.is_empty() {
            keys
        } else {
            Subscription::batch([keys, time::every(Duration::from_secs(1)).map(|_| Message::Tick)])
        }
    }
}

fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<Message> {
    let ctrl = modifiers.command(); // Ctrl on Linux/Windows, Cmd on macOS

    match key {
        // Ctrl+Enter: Submit
        Key::Named(keyboard::key::Named::Enter) if ctrl => {
            Some(Message::KeyPressed(KeyboardAction::Submit))
        }
        // Escape: Cancel
        Key::Named(keyboard::key::Named::Escape) => {
            Some(Message::KeyPressed(KeyboardAction::Cancel))
        }
        // F5: Refresh
        Key::Named(keyboard::key::Named::F5) => Some(Message::KeyPressed(KeyboardAction::Refresh)),
        Key::Named(keyboard::key::Named::PageUp) => {
            Some(Message::KeyPressed(KeyboardAction::PrevPage))
        }
        Key::Named(keyboard::key::Named::PageDown) => {
            Some(Message::KeyPressed(KeyboardAction::NextPage))
        }
        // Ctrl+B: Toggle sidebar
        Key::Character(c) if ctrl && c.as_str() == "b" => {
            Some(Message::KeyPressed(KeyboardAction::ToggleSidebar))
        }
        // Ctrl+D: Toggle theme
        Key::Character(c) if ctrl && c.as_str() == "d" => {
            Some(Message::KeyPressed(KeyboardAction::ToggleTheme))
        }
        _ => None,
    }
}

async fn save_settings(settings: AppSettings) -> Result<(), String> {
    tokio::task::spawn_blocking(move || settings.save())
        .await
        .map_err(|e| e.to_string())?
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts() {
        let ctrl = Modifiers::COMMAND;
        assert!(matches!(
            handle_key_press(Key::Named(keyboard::key::Named::F5), Modifiers::empty()),
            Some(Message::KeyPressed(KeyboardAction::Refresh))
        ));
        assert!(matches!(
            handle_key_press(Key::Named(keyboard::key::Named::Enter), Modifiers::empty()),
            None
        ));
        assert!(matches!(
            handle_key_press(Key::Character("d".into()), ctrl),
            Some(Message::KeyPressed(KeyboardAction::ToggleTheme))
        ));
    }
}
