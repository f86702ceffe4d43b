//! Letter categories.

use serde::{Deserialize, Serialize};

/// A letter category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Category {
    /// Server identifier.
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    /// Category name.
    #[serde(default)]
    pub name: String,
}

/// Body for creating or renaming a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBody<'a> {
    /// Category name.
    pub name: &'a str,
}

/// Category list; the service sends either a bare array or `{categories}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum CategoryList {
    Bare(Vec<Category>),
    Wrapped {
        #[serde(alias = "data")]
        categories: Vec<Category>,
    },
}

impl CategoryList {
    pub(crate) fn into_vec(self) -> Vec<Category> {
        match self {
            Self::Bare(list) | Self::Wrapped { categories: list } => list,
        }
    }
}
