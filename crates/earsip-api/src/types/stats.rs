//! Dashboard counters.

use serde::Deserialize;

/// Total number of letters in both registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct TotalMail {
    /// Letter count.
    #[serde(rename = "totalMail", default)]
    pub total: u64,
}

/// Number of inbox letters still waiting for a disposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct WaitingDispositions {
    /// Waiting count.
    #[serde(rename = "totalWaitingInbox", default)]
    pub total: u64,
}

/// One month of the yearly series.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct MonthlyPoint {
    /// Month number (1-12) or name as sent by the service.
    #[serde(default, deserialize_with = "month_label")]
    pub month: String,
    /// Incoming letters that month.
    #[serde(default, alias = "suratMasuk")]
    pub inbox: u64,
    /// Outgoing letters that month.
    #[serde(default, alias = "suratKeluar")]
    pub outbox: u64,
}

fn month_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Month {
        Number(u32),
        Name(String),
    }

    Ok(match Month::deserialize(deserializer)? {
        Month::Number(n) => n.to_string(),
        Month::Name(s) => s,
    })
}

/// Monthly letter counts for one year.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct MonthlyStats {
    /// One entry per month.
    #[serde(default)]
    pub data: Vec<MonthlyPoint>,
}

/// Letter count for one category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CategoryCount {
    /// Category name.
    #[serde(default, alias = "_id")]
    pub category: String,
    /// Letter count.
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CategoryCounts {
    #[serde(default)]
    pub data: Vec<CategoryCount>,
}
