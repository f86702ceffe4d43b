//! Which endpoint feeds a list card.

use std::future::Future;

use earsip_api::{ApiClient, InboxMail, ListQuery, LogbookEntry, OutboxMail, Page, User};

/// A paginated resource a list card can show.
///
/// Implementors are zero-sized markers; the card is generic over them, so one
/// card implementation serves every register.
pub trait ListSource: Send + Sync + 'static {
    /// Row type.
    type Item: Clone + std::fmt::Debug + Send + 'static;

    /// Card heading.
    const TITLE: &'static str;

    /// Text shown when a page has no rows.
    const EMPTY: &'static str;

    /// Notification shown when a fetch fails without a server message.
    const LOAD_ERROR: &'static str;

    /// Fetches one page.
    fn fetch(
        client: ApiClient,
        query: ListQuery,
    ) -> impl Future<Output = earsip_api::Result<Page<Self::Item>>> + Send + 'static;
}

/// `inbox`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InboxList;

impl ListSource for InboxList {
    type Item = InboxMail;
    const TITLE: &'static str = "Surat Masuk";
    const EMPTY: &'static str = "Belum ada surat masuk";
    const LOAD_ERROR: &'static str = "Gagal memuat surat masuk";

    fn fetch(
        client: ApiClient,
        query: ListQuery,
    ) -> impl Future<Output = earsip_api::Result<Page<InboxMail>>> + Send + 'static {
        async move { client.list_inbox(&query).await }
    }
}

/// `outbox`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutboxList;

impl ListSource for OutboxList {
    type Item = OutboxMail;
    const TITLE: &'static str = "Surat Keluar";
    const EMPTY: &'static str = "Belum ada surat keluar";
    const LOAD_ERROR: &'static str = "Gagal memuat surat keluar";

    fn fetch(
        client: ApiClient,
        query: ListQuery,
    ) -> impl Future<Output = earsip_api::Result<Page<OutboxMail>>> + Send + 'static {
        async move { client.list_outbox(&query).await }
    }
}

/// `logbook/all`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogbookList;

impl ListSource for LogbookList {
    type Item = LogbookEntry;
    const TITLE: &'static str = "Semua Surat";
    const EMPTY: &'static str = "Belum ada surat";
    const LOAD_ERROR: &'static str = "Gagal memuat logbook";

    fn fetch(
        client: ApiClient,
        query: ListQuery,
    ) -> impl Future<Output = earsip_api::Result<Page<LogbookEntry>>> + Send + 'static {
        async move { client.list_logbook(&query).await }
    }
}

/// `inbox/disposisi`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DispositionQueue;

impl ListSource for DispositionQueue {
    type Item = InboxMail;
    const TITLE: &'static str = "Disposisi Surat Masuk";
    const EMPTY: &'static str = "Tidak ada surat yang menunggu disposisi";
    const LOAD_ERROR: &'static str = "Gagal memuat data disposisi";

    fn fetch(
        client: ApiClient,
        query: ListQuery,
    ) -> impl Future<Output = earsip_api::Result<Page<InboxMail>>> + Send + 'static {
        async move { client.list_inbox_dispositions(&query).await }
    }
}

/// `outbox/verifikasi`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerificationQueue;

impl ListSource for VerificationQueue {
    type Item = OutboxMail;
    const TITLE: &'static str = "Verifikasi Surat Keluar";
    const EMPTY: &'static str = "Tidak ada surat yang menunggu verifikasi";
    const LOAD_ERROR: &'static str = "Gagal memuat data verifikasi";

    fn fetch(
        client: ApiClient,
        query: ListQuery,
    ) -> impl Future<Output = earsip_api::Result<Page<OutboxMail>>> + Send + 'static {
        async move { client.list_outbox_verifications(&query).await }
    }
}

/// `user/list`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserList;

impl ListSource for UserList {
    type Item = User;
    const TITLE: &'static str = "Data Anggota";
    const EMPTY: &'static str = "Belum ada anggota";
    const LOAD_ERROR: &'static str = "Gagal memuat data anggota";

    fn fetch(
        client: ApiClient,
        query: ListQuery,
    ) -> impl Future<Output = earsip_api::Result<Page<User>>> + Send + 'static {
        async move { client.list_users(&query).await }
    }
}
