//! Client-side validation, run before any request is sent.

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;

use super::schema::{FieldKind, FormSchema, Rule};

/// Shown when a confirmation field differs from its target.
pub const CONFIRM_MISMATCH: &str = "Konfirmasi password tidak cocok";

/// Shown for a malformed letter number.
pub const LETTER_NUMBER_FORMAT: &str = "Format nomor surat tidak valid (contoh: 001/UND/IX/2025)";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Field-level errors plus the summary notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: Vec<(&'static str, String)>,
    summary: String,
}

impl ValidationErrors {
    /// Returns true if no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Error for one field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, msg)| msg.as_str())
    }

    /// Summary notification text.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Failing fields in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(n, m)| (*n, m.as_str()))
    }

    pub(crate) fn remove(&mut self, field: &str) {
        self.fields.retain(|(name, _)| *name != field);
    }
}

/// Checks `values` against `schema`.
///
/// The summary is the schema's "incomplete" text when a required field is
/// blank, otherwise the first field error.
///
/// # Errors
///
/// Returns every failing field.
pub fn validate(schema: &FormSchema, values: &HashMap<&'static str, String>) -> Result<(), ValidationErrors> {
    let mut fields = Vec::new();
    let mut missing_required = false;

    for spec in schema.fields {
        let value = values.get(spec.name).map_or("", String::as_str);
        let blank = match spec.kind {
            FieldKind::Password => value.is_empty(),
            _ => value.trim().is_empty(),
        };

        if blank {
            if let Some(message) = spec.required {
                missing_required = true;
                fields.push((spec.name, message.to_string()));
            }
            continue;
        }

        if let Some(message) = check_kind(spec.kind, value) {
            fields.push((spec.name, message));
            continue;
        }

        let rule_error = match spec.rule {
            Rule::None => None,
            Rule::LetterNumber => {
                (!is_valid_letter_number(value)).then(|| LETTER_NUMBER_FORMAT.to_string())
            }
            Rule::Matches(other) => {
                let target = values.get(other).map_or("", String::as_str);
                (target != value).then(|| CONFIRM_MISMATCH.to_string())
            }
        };
        if let Some(message) = rule_error {
            fields.push((spec.name, message));
        }
    }

    if fields.is_empty() {
        return Ok(());
    }

    let summary = if missing_required {
        schema.incomplete.to_string()
    } else {
        fields[0].1.clone()
    };
    Err(ValidationErrors { fields, summary })
}

fn check_kind(kind: FieldKind, value: &str) -> Option<String> {
    match kind {
        FieldKind::Date => (!is_valid_date(value))
            .then(|| "Format tanggal harus YYYY-MM-DD".to_string()),
        FieldKind::Email => (!is_valid_email(value)).then(|| "Format email tidak valid".to_string()),
        FieldKind::Choice(options) => {
            (!options.contains(&value.trim())).then(|| "Pilihan tidak valid".to_string())
        }
        FieldKind::File => {
            let path = Path::new(value.trim());
            (!path.is_file()).then(|| format!("File tidak ditemukan: {}", path.display()))
        }
        FieldKind::Files => split_paths(value)
            .find(|p| !Path::new(p).is_file())
            .map(|p| format!("File tidak ditemukan: {p}")),
        FieldKind::Text | FieldKind::Multiline | FieldKind::Password | FieldKind::Category => None,
    }
}

/// Splits a `;`-separated path list, skipping blanks.
pub fn split_paths(value: &str) -> impl Iterator<Item = &str> {
    value.split(';').map(str::trim).filter(|p| !p.is_empty())
}

/// Letter number: a numeric sequence followed by one or more `/`-separated
/// segments of letters, digits, `.` or `-` (e.g. `012/UND/IX/2025`).
#[must_use]
pub fn is_valid_letter_number(value: &str) -> bool {
    let mut segments = value.trim().split('/');
    let Some(first) = segments.next() else {
        return false;
    };
    if first.is_empty() || !first.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let mut rest = 0;
    for segment in segments {
        if segment.is_empty()
            || !segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }
        rest += 1;
    }
    rest > 0
}

/// `YYYY-MM-DD` calendar date.
#[must_use]
pub fn is_valid_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).is_ok()
}

/// Basic email validation.
fn is_valid_email(email: &str) -> bool {
    let email = email.trim();

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Domain needs a dot and no empty labels
    !domain.is_empty() && domain.contains('.') && !domain.split('.').any(str::is_empty)
}
