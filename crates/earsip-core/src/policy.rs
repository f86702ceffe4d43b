//! What each role may do besides opening pages.

use earsip_api::{MailStatus, Role};

/// Disposition actions offered for a waiting incoming letter.
pub const DISPOSITION_ACTIONS: [&str; 9] = [
    "Tindak lanjuti",
    "Setuju",
    "Tolak",
    "Teliti & pendapat",
    "Untuk diketahui",
    "Selesaikan",
    "Sesuai catatan",
    "Untuk Diperhatikan",
    "Edarkan",
];

/// Returns true if `action` is one of [`DISPOSITION_ACTIONS`].
#[must_use]
pub fn is_disposition_action(action: &str) -> bool {
    DISPOSITION_ACTIONS.contains(&action)
}

/// Edit and delete buttons in the registers are superadmin-only.
#[must_use]
pub fn can_edit_mail(role: Role) -> bool {
    role == Role::Superadmin
}

/// Disposition is offered to administrators while the letter still waits.
#[must_use]
pub fn can_dispose(role: Role, status: &MailStatus) -> bool {
    role.is_admin() && status.is_waiting()
}

/// Verification is offered to administrators while the letter still waits.
#[must_use]
pub fn can_verify(role: Role, status: &MailStatus) -> bool {
    role.is_admin() && status.is_waiting()
}

/// Dashboard shows the waiting-disposition counter to administrators and a
/// profile shortcut to everyone else.
#[must_use]
pub const fn sees_waiting_counter(role: Role) -> bool {
    role.is_admin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_superadmin_edits_mail() {
        assert!(can_edit_mail(Role::Superadmin));
        assert!(!can_edit_mail(Role::Admin));
        assert!(!can_edit_mail(Role::User));
    }

    #[test]
    fn test_disposition_only_while_waiting() {
        assert!(can_dispose(Role::Admin, &MailStatus::Wait));
        assert!(!can_dispose(Role::Admin, &MailStatus::Other("Setuju".to_string())));
        assert!(!can_dispose(Role::User, &MailStatus::Wait));
        assert!(!can_verify(Role::Superadmin, &MailStatus::Verified));
    }

    #[test]
    fn test_action_list() {
        assert!(is_disposition_action("Teliti & pendapat"));
        assert!(!is_disposition_action("Hapus"));
    }
}
