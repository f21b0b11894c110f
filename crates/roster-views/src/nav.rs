//! Navigation-intercept decisions.
//!
//! Primary-button, no-modifier clicks on same-origin anchors pointing to
//! another page of the site are intercepted: the adapter suppresses the
//! default navigation, plays a short leaving transition, then navigates
//! programmatically after [`NAV_DELAY`]. Everything else — external links,
//! anchors with a non-self target, download links, fragment-only links,
//! modified or non-primary clicks — passes through unmodified.
//!
//! [`decide`] is a pure function over the click's attributes so the rules
//! are testable without any event system.

use std::time::Duration;

/// Delay between the leaving transition and the programmatic navigation.
pub const NAV_DELAY: Duration = Duration::from_millis(80);

/// Primary (left) mouse button.
const PRIMARY_BUTTON: u8 = 0;

/// Attributes of a click on an anchor.
#[derive(Clone, Debug)]
pub struct LinkClick<'a> {
    /// Mouse button index (0 = primary).
    pub button: u8,
    /// Any of Ctrl/Alt/Shift/Meta held.
    pub modifier: bool,
    /// The anchor's `target` attribute, if set.
    pub target: Option<&'a str>,
    /// The anchor carries a download attribute.
    pub download: bool,
    /// The link resolves to the same origin as the current page.
    pub same_origin: bool,
    /// The resolved href.
    pub href: &'a str,
}

/// What the adapter should do with a click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavDecision {
    /// Leave the default navigation alone.
    PassThrough,
    /// Suppress the default, transition, then navigate to `href` after
    /// `delay`.
    Intercept {
        /// Navigation target.
        href: String,
        /// Transition delay before navigating.
        delay: Duration,
    },
}

/// Decide whether to intercept a click.
#[must_use]
pub fn decide(click: &LinkClick<'_>) -> NavDecision {
    if click.button != PRIMARY_BUTTON || click.modifier || click.download {
        return NavDecision::PassThrough;
    }
    if let Some(target) = click.target
        && target != "_self"
    {
        return NavDecision::PassThrough;
    }
    if !click.same_origin {
        return NavDecision::PassThrough;
    }
    // Fragment-only links scroll within the current page
    if click.href.is_empty() || click.href.starts_with('#') {
        return NavDecision::PassThrough;
    }

    NavDecision::Intercept {
        href: click.href.to_owned(),
        delay: NAV_DELAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_click(href: &str) -> LinkClick<'_> {
        LinkClick {
            button: 0,
            modifier: false,
            target: None,
            download: false,
            same_origin: true,
            href,
        }
    }

    #[test]
    fn test_plain_same_origin_click_is_intercepted() {
        let decision = decide(&plain_click("grade.html?g=z"));
        assert_eq!(
            decision,
            NavDecision::Intercept {
                href: "grade.html?g=z".to_owned(),
                delay: NAV_DELAY,
            }
        );
    }

    #[test]
    fn test_middle_button_passes_through() {
        let click = LinkClick {
            button: 1,
            ..plain_click("grade.html?g=z")
        };
        assert_eq!(decide(&click), NavDecision::PassThrough);
    }

    #[test]
    fn test_modifier_click_passes_through() {
        let click = LinkClick {
            modifier: true,
            ..plain_click("grade.html?g=z")
        };
        assert_eq!(decide(&click), NavDecision::PassThrough);
    }

    #[test]
    fn test_blank_target_passes_through() {
        let click = LinkClick {
            target: Some("_blank"),
            ..plain_click("grade.html?g=z")
        };
        assert_eq!(decide(&click), NavDecision::PassThrough);
    }

    #[test]
    fn test_self_target_is_intercepted() {
        let click = LinkClick {
            target: Some("_self"),
            ..plain_click("grade.html?g=z")
        };
        assert!(matches!(decide(&click), NavDecision::Intercept { .. }));
    }

    #[test]
    fn test_download_link_passes_through() {
        let click = LinkClick {
            download: true,
            ..plain_click("roster.csv")
        };
        assert_eq!(decide(&click), NavDecision::PassThrough);
    }

    #[test]
    fn test_external_link_passes_through() {
        let click = LinkClick {
            same_origin: false,
            ..plain_click("https://other.example/")
        };
        assert_eq!(decide(&click), NavDecision::PassThrough);
    }

    #[test]
    fn test_fragment_only_link_passes_through() {
        assert_eq!(decide(&plain_click("#groups")), NavDecision::PassThrough);
        assert_eq!(decide(&plain_click("")), NavDecision::PassThrough);
    }

    #[test]
    fn test_delay_is_brief() {
        assert!(NAV_DELAY >= Duration::from_millis(60));
        assert!(NAV_DELAY <= Duration::from_millis(120));
    }
}
