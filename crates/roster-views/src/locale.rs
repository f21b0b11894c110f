//! Localized (Hebrew) user-facing messages.
//!
//! Every error the pipeline can produce maps to one message for the single
//! error region. Load failures are context-sensitive: a page opened straight
//! from local files (no HTTP server) gets different wording than a normal
//! network failure, because "reload" will not help there.

use crate::ViewError;

/// Message for the error region when page rendering fails.
#[must_use]
pub fn view_error_message(err: &ViewError) -> &'static str {
    match err {
        ViewError::MissingParameter(_) => "חסר פרמטר בכתובת הדף",
        ViewError::GradeNotFound(_) => "השכבה המבוקשת לא נמצאה",
        ViewError::GroupNotFound { .. } => "ההקבצה המבוקשת לא נמצאה",
        ViewError::UnsupportedPage(_) => "סוג הדף אינו נתמך",
    }
}

/// Message for the error region when loading the documents fails.
///
/// `local_file` is true when the page is being accessed directly from local
/// storage rather than through an HTTP server.
#[must_use]
pub fn load_error_message(local_file: bool) -> &'static str {
    if local_file {
        "הדפים נפתחו ישירות מהקבצים המקומיים. יש להפעיל שרת מקומי כדי לטעון את הנתונים."
    } else {
        "אירעה שגיאה בטעינת הנתונים. נסו לרענן את הדף."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_view_error_has_a_message() {
        let errors = [
            ViewError::MissingParameter("g"),
            ViewError::GradeNotFound("x".to_owned()),
            ViewError::GroupNotFound {
                grade: "z".to_owned(),
                id: "nope".to_owned(),
            },
            ViewError::UnsupportedPage("teachers".to_owned()),
        ];
        for err in &errors {
            assert!(!view_error_message(err).is_empty());
        }
    }

    #[test]
    fn test_grade_and_group_messages_differ() {
        let grade = view_error_message(&ViewError::GradeNotFound("x".to_owned()));
        let group = view_error_message(&ViewError::GroupNotFound {
            grade: "z".to_owned(),
            id: "nope".to_owned(),
        });
        assert_ne!(grade, group);
    }

    #[test]
    fn test_load_messages_depend_on_context() {
        assert_ne!(load_error_message(true), load_error_message(false));
    }
}
