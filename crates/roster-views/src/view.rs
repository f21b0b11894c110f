//! View models: the plain-data description of each page.
//!
//! Everything an adapter needs to populate a page lives here — display
//! strings, derived totals, navigation targets and prefetch hints. The
//! structs serialize to camelCase JSON so the `--json` output matches the
//! document key style.

use serde::Serialize;

/// Rendered page description, one variant per page kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "camelCase")]
pub enum ViewModel {
    /// Site overview.
    #[serde(rename = "home")]
    Home(HomeView),
    /// Group listing for one grade.
    #[serde(rename = "grade")]
    Grade(GradeView),
    /// Student table for one group.
    #[serde(rename = "group")]
    Group(GroupView),
}

impl ViewModel {
    /// Prefetch hints for the next likely navigation targets.
    #[must_use]
    pub fn prefetch(&self) -> &[String] {
        match self {
            Self::Home(v) => &v.prefetch,
            Self::Grade(v) => &v.prefetch,
            Self::Group(_) => &[],
        }
    }
}

/// Home page: site strings plus one navigable entry per grade.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    /// Site title.
    pub title: String,
    /// Site subtitle.
    pub subtitle: String,
    /// Attribution line.
    pub managed_by: String,
    /// One entry per grade, in roster order.
    pub grades: Vec<GradeEntry>,
    /// School-wide student total (derived).
    pub school_total: usize,
    /// Hrefs to prefetch: every grade page.
    pub prefetch: Vec<String>,
}

/// One grade row on the home page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeEntry {
    /// Grade key.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Grade student total (derived).
    pub size: usize,
    /// Link target for the grade page.
    pub href: String,
}

/// Grade page: one navigable entry per group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeView {
    /// Grade display label.
    pub label: String,
    /// One entry per group, in roster order.
    pub groups: Vec<GroupEntry>,
    /// Grade student total (derived).
    pub grade_total: usize,
    /// Back-link to the home page.
    pub back_href: String,
    /// Hrefs to prefetch: every group page of this grade.
    pub prefetch: Vec<String>,
}

/// One group row on the grade page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupEntry {
    /// Group id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Teaching staff line.
    pub teacher: String,
    /// Group student total (derived).
    pub size: usize,
    /// Link target for the group page.
    pub href: String,
}

/// Group page: ordered student table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupView {
    /// Label of the containing grade.
    pub grade_label: String,
    /// Group display name.
    pub name: String,
    /// Teaching staff line.
    pub teacher: String,
    /// Student rows in input order, numbered from 1.
    pub rows: Vec<StudentRow>,
    /// Group student total (derived).
    pub group_total: usize,
    /// Back-link to the grade page.
    pub back_href: String,
}

/// One student table row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRow {
    /// 1-based row number.
    pub number: usize,
    /// Student name.
    pub name: String,
}
