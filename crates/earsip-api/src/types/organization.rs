//! Organization profile singleton.

use serde::{Deserialize, Serialize};

/// The organization that owns the archive; printed on outgoing letters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Organization {
    /// Server identifier, absent before the profile is first created.
    #[serde(rename = "_id", alias = "id", default)]
    pub id: Option<String>,
    /// Organization name.
    #[serde(default)]
    pub name: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// Phone number.
    #[serde(default)]
    pub number: String,
    /// Contact e-mail.
    #[serde(default)]
    pub email: String,
    /// Logo URL.
    #[serde(default)]
    pub logo: Option<String>,
}

/// The service answers either `{organization}` or the bare object.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OrganizationReply {
    #[serde(default, alias = "data")]
    organization: Option<Organization>,
    #[serde(flatten)]
    bare: Organization,
}

impl OrganizationReply {
    pub(crate) fn into_option(self) -> Option<Organization> {
        let bare = self.bare;
        self.organization
            .or_else(|| (bare.id.is_some() || !bare.name.is_empty()).then_some(bare))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_shapes() {
        let wrapped: OrganizationReply =
            serde_json::from_str(r#"{"organization":{"_id":"o1","name":"PCM Sleman"}}"#).unwrap();
        assert_eq!(wrapped.into_option().unwrap().name, "PCM Sleman");

        let bare: OrganizationReply =
            serde_json::from_str(r#"{"_id":"o1","name":"PCM Sleman","email":"a@b.id"}"#).unwrap();
        assert_eq!(bare.into_option().unwrap().email, "a@b.id");

        let missing: OrganizationReply =
            serde_json::from_str(r#"{"organization":null}"#).unwrap();
        assert!(missing.into_option().is_none());

        let empty: OrganizationReply = serde_json::from_str("{}").unwrap();
        assert!(empty.into_option().is_none());
    }
}
