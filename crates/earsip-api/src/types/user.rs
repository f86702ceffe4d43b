//! User account types.

use serde::{Deserialize, Serialize};

/// Access role of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular staff member.
    #[default]
    User,
    /// Administrator (handles dispositions).
    Admin,
    /// Super administrator (manages users, organization, categories).
    Superadmin,
}

impl Role {
    /// Every role, lowest privilege first.
    pub const ALL: [Self; 3] = [Self::User, Self::Admin, Self::Superadmin];

    /// Wire value of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Superadmin => "superadmin",
        }
    }

    /// Returns true for `admin` and `superadmin`.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin | Self::Superadmin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an account may sign in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Account is active.
    #[default]
    Active,
    /// Account is deactivated (accounts are never deleted).
    Inactive,
}

impl UserStatus {
    /// Both statuses.
    pub const ALL: [Self; 2] = [Self::Active, Self::Inactive];

    /// Wire value of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Aktif",
            Self::Inactive => "Nonaktif",
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user account as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    /// Server identifier.
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    /// Full name.
    #[serde(default)]
    pub name: String,
    /// Login name.
    #[serde(default)]
    pub username: String,
    /// Access role.
    #[serde(default)]
    pub role: Role,
    /// Account status.
    #[serde(default)]
    pub status: UserStatus,
    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,
    /// Job position.
    #[serde(default)]
    pub position: Option<String>,
    /// Phone number.
    #[serde(default)]
    pub number: Option<String>,
    /// Member registration number.
    #[serde(default)]
    pub nbm: Option<String>,
    /// Profile picture URL.
    #[serde(default)]
    pub picture: Option<String>,
}

impl User {
    /// Returns true if the account is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

/// `{ "user": ... }` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct UserEnvelope {
    /// The wrapped user.
    pub user: User,
}

/// Body for registering a new account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NewUser {
    /// Full name.
    pub name: String,
    /// Login name.
    pub username: String,
    /// Initial password.
    pub password: String,
    /// Postal address.
    pub address: String,
    /// Phone number.
    pub number: String,
    /// Job position.
    pub position: String,
    /// Member registration number.
    pub nbm: String,
    /// Access role.
    pub role: Role,
    /// Account status.
    pub status: UserStatus,
}

/// Body for an administrator editing another account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct UserUpdate {
    /// Full name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Job position.
    pub position: String,
    /// Phone number.
    pub number: String,
    /// Access role.
    pub role: Role,
    /// Account status.
    pub status: UserStatus,
}

impl From<&User> for UserUpdate {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            address: user.address.clone().unwrap_or_default(),
            position: user.position.clone().unwrap_or_default(),
            number: user.number.clone().unwrap_or_default(),
            role: user.role,
            status: user.status,
        }
    }
}

/// Body for changing the signed-in user's password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    /// Current password.
    pub current_password: String,
    /// Replacement password.
    pub new_password: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_mongo_shape() {
        let json = r#"{
            "_id": "66a1",
            "name": "Siti Aminah",
            "username": "siti",
            "role": "superadmin",
            "status": "inactive",
            "position": "Sekretaris"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "66a1");
        assert_eq!(user.role, Role::Superadmin);
        assert!(!user.is_active());
        assert_eq!(user.position.as_deref(), Some("Sekretaris"));
        assert_eq!(user.address, None);
    }

    #[test]
    fn test_user_defaults() {
        let user: User = serde_json::from_str(r#"{"id":"1","username":"budi"}"#).unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(user.status, UserStatus::Active);
    }

    #[test]
    fn test_password_change_wire_names() {
        let body = PasswordChange {
            current_password: "lama".to_string(),
            new_password: "baru".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["currentPassword"], "lama");
        assert_eq!(json["newPassword"], "baru");
    }

    #[test]
    fn test_role_ordering_helpers() {
        assert!(!Role::User.is_admin());
        assert!(Role::Admin.is_admin());
        assert_eq!(Role::Superadmin.to_string(), "superadmin");
    }
}
