//! Shortcut records — identity, search, grouping and validation.
//!
//! Pure functions only. Persistence lives behind `ShortcutStore`.

use chrono::{DateTime, Utc};
use shortcut_common::{ShortcutKind, ShortcutRecord};

use crate::domain::error::ShortcutError;
use crate::domain::validate::check_target;

/// Category label used when a shortcut has none.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Fields a user supplies when creating a shortcut.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewShortcut {
    pub name: String,
    pub description: String,
    pub target: String,
    pub parameters: String,
    pub icon: String,
    pub category: String,
    pub kind: ShortcutKind,
    pub working_directory: Option<String>,
}

impl NewShortcut {
    /// Validate and turn into a stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the target fails validation.
    pub fn into_record(self, id: String, created_at: DateTime<Utc>) -> Result<ShortcutRecord, ShortcutError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ShortcutError::MissingName);
        }
        check_target(&self.target).map_err(|source| ShortcutError::InvalidTarget {
            name: name.clone(),
            source,
        })?;
        Ok(ShortcutRecord {
            id,
            name,
            description: self.description,
            target: self.target,
            parameters: self.parameters,
            icon: self.icon,
            category: self.category,
            kind: self.kind,
            working_directory: self.working_directory.filter(|dir| !dir.is_empty()),
            created_at,
            last_used: None,
        })
    }
}

/// Field changes for an existing shortcut. `None` leaves a field as it is.
///
/// An empty `working_directory` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub target: Option<String>,
    pub parameters: Option<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub kind: Option<ShortcutKind>,
    pub working_directory: Option<String>,
}

impl ShortcutPatch {
    /// `true` when no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply to `record`, keeping its id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting name is blank or the resulting target
    /// fails validation. `record` is left untouched either way.
    pub fn apply(self, record: &ShortcutRecord) -> Result<ShortcutRecord, ShortcutError> {
        let mut updated = record.clone();
        if let Some(name) = self.name {
            updated.name = name.trim().to_string();
        }
        if updated.name.is_empty() {
            return Err(ShortcutError::MissingName);
        }
        if let Some(target) = self.target {
            check_target(&target).map_err(|source| ShortcutError::InvalidTarget {
                name: updated.name.clone(),
                source,
            })?;
            updated.target = target;
        }
        if let Some(description) = self.description {
            updated.description = description;
        }
        if let Some(parameters) = self.parameters {
            updated.parameters = parameters;
        }
        if let Some(icon) = self.icon {
            updated.icon = icon;
        }
        if let Some(category) = self.category {
            updated.category = category;
        }
        if let Some(kind) = self.kind {
            updated.kind = kind;
        }
        if let Some(dir) = self.working_directory {
            updated.working_directory = Some(dir).filter(|dir| !dir.is_empty());
        }
        Ok(updated)
    }
}

/// Generate a shortcut id: `sc-` followed by 16 lowercase hex characters.
#[must_use]
pub fn generate_shortcut_id() -> String {
    use std::collections::hash_map::RandomState;
    use std::hash::{BuildHasher, Hasher};

    let mut hasher = RandomState::new().build_hasher();
    hasher.write_u128(
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0),
    );
    hasher.write_u64(RandomState::new().build_hasher().finish());
    format!("sc-{:016x}", hasher.finish())
}

/// Case-insensitive substring match over name, description and category.
#[must_use]
pub fn matches_search(record: &ShortcutRecord, term: &str) -> bool {
    let term = term.to_lowercase();
    [&record.name, &record.description, &record.category]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

/// Display label for a record's category.
#[must_use]
pub fn category_label(record: &ShortcutRecord) -> &str {
    if record.category.trim().is_empty() {
        UNCATEGORIZED
    } else {
        &record.category
    }
}

/// Group records by category, keeping categories in order of first appearance.
#[must_use]
pub fn group_by_category(records: &[ShortcutRecord]) -> Vec<(&str, Vec<&ShortcutRecord>)> {
    let mut groups: Vec<(&str, Vec<&ShortcutRecord>)> = Vec::new();
    for record in records {
        let label = category_label(record);
        match groups.iter_mut().find(|(name, _)| *name == label) {
            Some((_, members)) => members.push(record),
            None => groups.push((label, vec![record])),
        }
    }
    groups
}

/// Find a record by exact id, falling back to a case-insensitive name match.
#[must_use]
pub fn find_by_id_or_name<'a>(records: &'a [ShortcutRecord], key: &str) -> Option<&'a ShortcutRecord> {
    records
        .iter()
        .find(|r| r.id == key)
        .or_else(|| records.iter().find(|r| r.name.eq_ignore_ascii_case(key)))
}
