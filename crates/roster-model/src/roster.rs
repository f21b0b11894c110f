//! Document types with derived counts and key-based lookup.
//!
//! Grades are stored in document order in a flat `Vec`, groups inside their
//! grade likewise. Lookups are linear scans: the roster is a handful of
//! grades with a handful of groups each, so an index map buys nothing.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Site display strings from `config.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    /// Main site title.
    pub title: String,
    /// Subtitle shown under the title.
    pub subtitle: String,
    /// "Managed by" attribution line.
    pub managed_by: String,
}

/// The full roster tree from `data.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Grades in display order.
    pub grades: Vec<Grade>,
}

/// A school year cohort.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    /// Stable identifier, unique across the roster. Used for URL linking.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Teaching groups in display order.
    pub groups: Vec<Group>,
}

/// A teaching group within a grade.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Stable identifier, unique within the grade. Used for URL linking.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Teaching staff line.
    pub teacher: String,
    /// Student names in display order.
    pub students: Vec<String>,
}

/// Structural validation error.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The same grade key appears more than once in the roster.
    #[error("duplicate grade key: {0}")]
    DuplicateGradeKey(String),
    /// The same group id appears more than once within one grade.
    #[error("duplicate group id in grade {grade}: {id}")]
    DuplicateGroupId {
        /// Grade key containing the duplicate.
        grade: String,
        /// The duplicated group id.
        id: String,
    },
}

impl Group {
    /// Number of students in this group. Always derived.
    #[must_use]
    pub fn size(&self) -> usize {
        self.students.len()
    }
}

impl Grade {
    /// Number of students across all groups of this grade.
    #[must_use]
    pub fn size(&self) -> usize {
        self.groups.iter().map(Group::size).sum()
    }

    /// Look up a group by id.
    #[must_use]
    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }
}

impl Roster {
    /// School-wide student count.
    #[must_use]
    pub fn size(&self) -> usize {
        self.grades.iter().map(Grade::size).sum()
    }

    /// Look up a grade by key.
    #[must_use]
    pub fn grade(&self, key: &str) -> Option<&Grade> {
        self.grades.iter().find(|g| g.key == key)
    }

    /// Validate identifier uniqueness.
    ///
    /// Grade keys must be unique across the roster; group ids must be unique
    /// within their grade. Keys are immutable identifiers used for URL
    /// linking, so a duplicate silently shadows a page.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] naming the first offending identifier.
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut grade_keys = HashSet::new();
        for grade in &self.grades {
            if !grade_keys.insert(grade.key.as_str()) {
                return Err(ModelError::DuplicateGradeKey(grade.key.clone()));
            }
            let mut group_ids = HashSet::new();
            for group in &grade.groups {
                if !group_ids.insert(group.id.as_str()) {
                    return Err(ModelError::DuplicateGroupId {
                        grade: grade.key.clone(),
                        id: group.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
