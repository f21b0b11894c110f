//! The render dispatch: page kind + parameters + documents → view model.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use roster_model::{Grade, Roster, SiteInfo};

use crate::ViewError;
use crate::page::{PageKind, PageParams};
use crate::view::{GradeEntry, GradeView, GroupEntry, GroupView, HomeView, StudentRow, ViewModel};

/// Characters escaped in query parameter values.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

/// Href of the home page.
#[must_use]
pub fn home_href() -> String {
    "index.html".to_owned()
}

/// Href of a grade page.
#[must_use]
pub fn grade_href(key: &str) -> String {
    format!("grade.html?g={}", utf8_percent_encode(key, QUERY_VALUE))
}

/// Href of a group page.
#[must_use]
pub fn group_href(grade_key: &str, group_id: &str) -> String {
    format!(
        "group.html?g={}&group={}",
        utf8_percent_encode(grade_key, QUERY_VALUE),
        utf8_percent_encode(group_id, QUERY_VALUE)
    )
}

/// Render one page.
///
/// Pure over its inputs: all counts are recomputed here from the `students`
/// sequences, and the result carries everything the adapter needs,
/// including prefetch hints for the next likely navigation targets.
///
/// # Errors
///
/// Returns [`ViewError`] when a required parameter is missing or a
/// referenced grade/group does not exist. On error nothing is rendered —
/// the page regions stay untouched.
pub fn render(
    kind: PageKind,
    params: &PageParams,
    site: &SiteInfo,
    roster: &Roster,
) -> Result<ViewModel, ViewError> {
    match kind {
        PageKind::Home => Ok(ViewModel::Home(render_home(site, roster))),
        PageKind::Grade => render_grade(params, roster).map(ViewModel::Grade),
        PageKind::Group => render_group(params, roster).map(ViewModel::Group),
    }
}

fn render_home(site: &SiteInfo, roster: &Roster) -> HomeView {
    let grades: Vec<GradeEntry> = roster
        .grades
        .iter()
        .map(|grade| GradeEntry {
            key: grade.key.clone(),
            label: grade.label.clone(),
            size: grade.size(),
            href: grade_href(&grade.key),
        })
        .collect();

    let prefetch = grades.iter().map(|g| g.href.clone()).collect();

    HomeView {
        title: site.title.clone(),
        subtitle: site.subtitle.clone(),
        managed_by: site.managed_by.clone(),
        school_total: roster.size(),
        grades,
        prefetch,
    }
}

fn render_grade(params: &PageParams, roster: &Roster) -> Result<GradeView, ViewError> {
    let grade = resolve_grade(params, roster)?;

    let groups: Vec<GroupEntry> = grade
        .groups
        .iter()
        .map(|group| GroupEntry {
            id: group.id.clone(),
            name: group.name.clone(),
            teacher: group.teacher.clone(),
            size: group.size(),
            href: group_href(&grade.key, &group.id),
        })
        .collect();

    let prefetch = groups.iter().map(|g| g.href.clone()).collect();

    Ok(GradeView {
        label: grade.label.clone(),
        grade_total: grade.size(),
        groups,
        back_href: home_href(),
        prefetch,
    })
}

fn render_group(params: &PageParams, roster: &Roster) -> Result<GroupView, ViewError> {
    let grade = resolve_grade(params, roster)?;
    let id = params.require_group()?;
    let group = grade.group(id).ok_or_else(|| ViewError::GroupNotFound {
        grade: grade.key.clone(),
        id: id.to_owned(),
    })?;

    let rows = group
        .students
        .iter()
        .enumerate()
        .map(|(i, name)| StudentRow {
            number: i + 1,
            name: name.clone(),
        })
        .collect();

    Ok(GroupView {
        grade_label: grade.label.clone(),
        name: group.name.clone(),
        teacher: group.teacher.clone(),
        group_total: group.size(),
        rows,
        back_href: grade_href(&grade.key),
    })
}

/// Resolve the `g` parameter against the roster.
fn resolve_grade<'r>(params: &PageParams, roster: &'r Roster) -> Result<&'r Grade, ViewError> {
    let key = params.require_grade()?;
    roster
        .grade(key)
        .ok_or_else(|| ViewError::GradeNotFound(key.to_owned()))
}
