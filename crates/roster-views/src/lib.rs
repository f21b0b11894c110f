//! Pure page rendering for the roster site.
//!
//! This crate maps a page kind, URL query parameters and the two fetched
//! documents to a [`ViewModel`] — a plain data description of one of the
//! three pages (home, grade, group). Nothing here touches a concrete UI:
//! a thin adapter applies the view model to whatever output exists, which
//! keeps every rendering rule unit-testable.
//!
//! The load-and-render pipeline returns `Result<ViewModel, ViewError>`; the
//! adapter translates `Err` into the single error region using the localized
//! messages in [`locale`].
//!
//! Also provided: the navigation-intercept decision helper ([`nav`]), a pure
//! function over the attributes of an anchor click.

mod error;
pub mod locale;
pub mod nav;
mod page;
mod render;
mod view;

pub use error::ViewError;
pub use page::{PageKind, PageParams};
pub use render::{grade_href, group_href, home_href, render};
pub use view::{GradeEntry, GradeView, GroupEntry, GroupView, HomeView, StudentRow, ViewModel};
