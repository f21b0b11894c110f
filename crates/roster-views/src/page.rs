//! Page kind marker and URL query parameters.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use crate::ViewError;

/// The three mutually exclusive page kinds.
///
/// Selected by an out-of-band marker on the page itself, read once at
/// startup — never from user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    /// Site overview with one entry per grade.
    Home,
    /// Group listing for one grade (`g` parameter).
    Grade,
    /// Student table for one group (`g` and `group` parameters).
    Group,
}

impl PageKind {
    /// Parse the page marker.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::UnsupportedPage`] for any unrecognized marker.
    pub fn from_marker(marker: &str) -> Result<Self, ViewError> {
        match marker {
            "home" => Ok(Self::Home),
            "grade" => Ok(Self::Grade),
            "group" => Ok(Self::Group),
            other => Err(ViewError::UnsupportedPage(other.to_owned())),
        }
    }
}

/// Parsed URL query parameters.
///
/// Only the two linking parameters are kept; everything else in the query
/// string (e.g., the cache-bust token) is ignored. An empty value counts as
/// missing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageParams {
    /// Grade key from `g`.
    pub grade: Option<String>,
    /// Group id from `group`.
    pub group: Option<String>,
}

impl PageParams {
    /// Parse a raw query string (with or without the leading `?`).
    ///
    /// Values are percent-decoded; `+` is not treated as a space (the site
    /// never encodes spaces that way).
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::default();

        for pair in query.split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if value.is_empty() {
                continue;
            }
            let value = decode(value);
            match key {
                "g" => params.grade = Some(value.into_owned()),
                "group" => params.group = Some(value.into_owned()),
                _ => {}
            }
        }

        params
    }

    /// The grade key, or the missing-parameter error for `g`.
    pub(crate) fn require_grade(&self) -> Result<&str, ViewError> {
        self.grade
            .as_deref()
            .ok_or(ViewError::MissingParameter("g"))
    }

    /// The group id, or the missing-parameter error for `group`.
    pub(crate) fn require_group(&self) -> Result<&str, ViewError> {
        self.group
            .as_deref()
            .ok_or(ViewError::MissingParameter("group"))
    }
}

/// Percent-decode a query value, falling back to the raw text on invalid
/// UTF-8.
fn decode(value: &str) -> Cow<'_, str> {
    match percent_decode_str(value).decode_utf8() {
        Ok(decoded) => decoded,
        Err(_) => Cow::Borrowed(value),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_marker_parsing() {
        assert_eq!(PageKind::from_marker("home"), Ok(PageKind::Home));
        assert_eq!(PageKind::from_marker("grade"), Ok(PageKind::Grade));
        assert_eq!(PageKind::from_marker("group"), Ok(PageKind::Group));
    }

    #[test]
    fn test_unknown_marker_is_unsupported() {
        let err = PageKind::from_marker("teachers").unwrap_err();
        assert_eq!(err, ViewError::UnsupportedPage("teachers".to_owned()));
    }

    #[test]
    fn test_query_both_parameters() {
        let params = PageParams::from_query("g=z&group=z_a");
        assert_eq!(params.grade.as_deref(), Some("z"));
        assert_eq!(params.group.as_deref(), Some("z_a"));
    }

    #[test]
    fn test_query_leading_question_mark() {
        let params = PageParams::from_query("?g=h");
        assert_eq!(params.grade.as_deref(), Some("h"));
        assert_eq!(params.group, None);
    }

    #[test]
    fn test_query_empty_value_is_missing() {
        let params = PageParams::from_query("g=&group=z_a");
        assert_eq!(params.grade, None);
        assert_eq!(params.group.as_deref(), Some("z_a"));
    }

    #[test]
    fn test_query_ignores_unknown_keys() {
        let params = PageParams::from_query("g=z&v=1a2b&utm_source=x");
        assert_eq!(params.grade.as_deref(), Some("z"));
        assert_eq!(params.group, None);
    }

    #[test]
    fn test_query_percent_decoding() {
        let params = PageParams::from_query("g=%D7%96&group=z_a");
        assert_eq!(params.grade.as_deref(), Some("ז"));
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(PageParams::from_query(""), PageParams::default());
    }
}
