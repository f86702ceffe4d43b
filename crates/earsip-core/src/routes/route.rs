//! Route table.

use std::fmt;

use earsip_api::{MailKind, Role};

const ANY_ROLE: &[Role] = &[];
const ADMINS: &[Role] = &[Role::Admin, Role::Superadmin];
const SUPERADMIN: &[Role] = &[Role::Superadmin];

/// `/logbook/:sub`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogbookView {
    /// Both registers.
    #[default]
    All,
    /// Incoming letters.
    Inbox,
    /// Outgoing letters.
    Outbox,
}

/// `/mail/:sub`, the entry forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MailView {
    /// Record an incoming letter.
    #[default]
    Inbox,
    /// Draft an outgoing letter.
    Outbox,
}

impl MailView {
    /// Register the form writes to.
    #[must_use]
    pub const fn kind(self) -> MailKind {
        match self {
            Self::Inbox => MailKind::Inbox,
            Self::Outbox => MailKind::Outbox,
        }
    }
}

/// `/profile/:sub`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProfileView {
    /// Own profile data.
    #[default]
    Data,
    /// Password change.
    Password,
}

/// `/users/:sub`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UsersView {
    /// Account list.
    #[default]
    List,
    /// Register an account.
    Add,
}

/// `/aksi/:sub`, the approval queues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AksiView {
    /// Inbox dispositions.
    #[default]
    Disposisi,
    /// Outbox verification.
    Verifikasi,
}

/// A client-side page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Sign-in page.
    Login,
    /// Counters and quick actions.
    #[default]
    Dashboard,
    /// Letter registers.
    Logbook(LogbookView),
    /// Letter entry forms.
    Mail(MailView),
    /// Own profile.
    Profile(ProfileView),
    /// Account management.
    Users(UsersView),
    /// Organization profile.
    Organization,
    /// Category editor.
    Category,
    /// Disposition and verification queues.
    Aksi(AksiView),
    /// Access denied page.
    Unauthorized,
}

impl Route {
    /// Parses a path such as `/logbook/inbox`.
    ///
    /// Unknown sub-pages fall back to the section's first page and unknown
    /// paths fall back to the dashboard.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let mut segments = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .split('/')
            .filter(|s| !s.is_empty());
        let section = segments.next().unwrap_or_default();
        let sub = segments.next().unwrap_or_default();

        match section {
            "login" => Self::Login,
            "logbook" => Self::Logbook(match sub {
                "inbox" => LogbookView::Inbox,
                "outbox" => LogbookView::Outbox,
                _ => LogbookView::All,
            }),
            "mail" => Self::Mail(match sub {
                "outbox" => MailView::Outbox,
                _ => MailView::Inbox,
            }),
            "profile" => Self::Profile(match sub {
                "password" => ProfileView::Password,
                _ => ProfileView::Data,
            }),
            "users" => Self::Users(match sub {
                "add" => UsersView::Add,
                _ => UsersView::List,
            }),
            "organization" => Self::Organization,
            "category" => Self::Category,
            "aksi" => Self::Aksi(match sub {
                "verifikasi" => AksiView::Verifikasi,
                _ => AksiView::Disposisi,
            }),
            "unauthorized" => Self::Unauthorized,
            _ => Self::Dashboard,
        }
    }

    /// Canonical path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Logbook(LogbookView::All) => "/logbook/all",
            Self::Logbook(LogbookView::Inbox) => "/logbook/inbox",
            Self::Logbook(LogbookView::Outbox) => "/logbook/outbox",
            Self::Mail(MailView::Inbox) => "/mail/inbox",
            Self::Mail(MailView::Outbox) => "/mail/outbox",
            Self::Profile(ProfileView::Data) => "/profile/data",
            Self::Profile(ProfileView::Password) => "/profile/password",
            Self::Users(UsersView::List) => "/users/list",
            Self::Users(UsersView::Add) => "/users/add",
            Self::Organization => "/organization",
            Self::Category => "/category",
            Self::Aksi(AksiView::Disposisi) => "/aksi/disposisi",
            Self::Aksi(AksiView::Verifikasi) => "/aksi/verifikasi",
            Self::Unauthorized => "/unauthorized",
        }
    }

    /// Page title shown in the header breadcrumb.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Login => "Masuk",
            Self::Dashboard => "Dashboard",
            Self::Logbook(LogbookView::All) => "Semua Surat",
            Self::Logbook(LogbookView::Inbox) => "Surat Masuk",
            Self::Logbook(LogbookView::Outbox) => "Surat Keluar",
            Self::Mail(MailView::Inbox) => "Input Surat Masuk",
            Self::Mail(MailView::Outbox) => "Buat Surat Keluar",
            Self::Profile(ProfileView::Data) => "Ubah Data Diri",
            Self::Profile(ProfileView::Password) => "Ganti Kata Sandi",
            Self::Users(UsersView::List) => "Data Anggota",
            Self::Users(UsersView::Add) => "Tambah Anggota",
            Self::Organization => "Organisasi",
            Self::Category => "Kategori",
            Self::Aksi(AksiView::Disposisi) => "Disposisi",
            Self::Aksi(AksiView::Verifikasi) => "Verifikasi",
            Self::Unauthorized => "Akses Ditolak",
        }
    }

    /// Roles allowed to open the page; empty means any signed-in user.
    #[must_use]
    pub const fn allowed_roles(self) -> &'static [Role] {
        match self {
            Self::Users(_) | Self::Organization | Self::Category => SUPERADMIN,
            Self::Aksi(_) => ADMINS,
            _ => ANY_ROLE,
        }
    }

    /// Returns true for pages shown without a session.
    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Login)
    }

    /// Every page a signed-in user can navigate to, in sidebar order.
    pub const NAVIGABLE: [Self; 14] = [
        Self::Dashboard,
        Self::Logbook(LogbookView::All),
        Self::Logbook(LogbookView::Inbox),
        Self::Logbook(LogbookView::Outbox),
        Self::Mail(MailView::Inbox),
        Self::Mail(MailView::Outbox),
        Self::Profile(ProfileView::Data),
        Self::Profile(ProfileView::Password),
        Self::Aksi(AksiView::Disposisi),
        Self::Aksi(AksiView::Verifikasi),
        Self::Users(UsersView::List),
        Self::Users(UsersView::Add),
        Self::Organization,
        Self::Category,
    ];
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_goes_to_dashboard() {
        assert_eq!(Route::parse("/"), Route::Dashboard);
        assert_eq!(Route::parse(""), Route::Dashboard);
        assert_eq!(Route::parse("/nowhere"), Route::Dashboard);
    }

    #[test]
    fn test_unknown_sub_uses_section_default() {
        assert_eq!(Route::parse("/profile/xyz"), Route::Profile(ProfileView::Data));
        assert_eq!(Route::parse("/users"), Route::Users(UsersView::List));
        assert_eq!(Route::parse("/logbook/"), Route::Logbook(LogbookView::All));
        assert_eq!(Route::parse("/aksi/foo"), Route::Aksi(AksiView::Disposisi));
    }

    #[test]
    fn test_path_round_trip() {
        for route in Route::NAVIGABLE {
            assert_eq!(Route::parse(route.path()), route);
        }
        assert_eq!(Route::parse(Route::Login.path()), Route::Login);
        assert_eq!(Route::parse(Route::Unauthorized.path()), Route::Unauthorized);
    }

    #[test]
    fn test_query_string_ignored() {
        assert_eq!(
            Route::parse("/logbook/outbox?page=2"),
            Route::Logbook(LogbookView::Outbox)
        );
    }

    #[test]
    fn test_allow_lists() {
        assert_eq!(Route::Category.allowed_roles(), &[Role::Superadmin]);
        assert_eq!(
            Route::Aksi(AksiView::Verifikasi).allowed_roles(),
            &[Role::Admin, Role::Superadmin]
        );
        assert!(Route::Logbook(LogbookView::Inbox).allowed_roles().is_empty());
    }
}
