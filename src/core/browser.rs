//! Browser project classification
//!
//! Users type browser names as free text ("Chrome, safari, mobile"). Each
//! comma-separated token is matched against an ordered rule table; the first
//! rule whose substring appears in the token wins. Tokens that match no rule
//! are discarded and reported back so the caller can log them.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::core::config::default_browsers;

/// Browser projects that can appear in the generated Playwright config.
///
/// The declaration order is the order projects are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BrowserProject {
    Chromium,
    Firefox,
    Webkit,
    MobileChrome,
}

impl BrowserProject {
    pub const ALL: [BrowserProject; 4] = [
        BrowserProject::Chromium,
        BrowserProject::Firefox,
        BrowserProject::Webkit,
        BrowserProject::MobileChrome,
    ];

    /// Project name as written into `playwright.config.ts`
    pub fn canonical_name(&self) -> &'static str {
        match self {
            BrowserProject::Chromium => "chromium",
            BrowserProject::Firefox => "firefox",
            BrowserProject::Webkit => "webkit",
            BrowserProject::MobileChrome => "mobile-chrome",
        }
    }

    /// Entry of Playwright's `devices` registry used for this project
    pub fn device_descriptor(&self) -> &'static str {
        match self {
            BrowserProject::Chromium => "Desktop Chrome",
            BrowserProject::Firefox => "Desktop Firefox",
            BrowserProject::Webkit => "Desktop Safari",
            BrowserProject::MobileChrome => "Pixel 5",
        }
    }
}

impl fmt::Display for BrowserProject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

impl FromStr for BrowserProject {
    type Err = String;

    /// Strict parse of a canonical name; use [`classify_token`] for free text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|project| project.canonical_name() == s)
            .ok_or_else(|| format!("Unknown browser project: {s}"))
    }
}

/// Ordered substring rules. "mobile" must be checked before "chrome".
const CLASSIFICATION_RULES: &[(&[&str], BrowserProject)] = &[
    (&["mobile"], BrowserProject::MobileChrome),
    (&["chrome", "chromium"], BrowserProject::Chromium),
    (&["firefox"], BrowserProject::Firefox),
    (&["webkit", "safari"], BrowserProject::Webkit),
];

/// Outcome of classifying a free-text browser answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserSelection {
    pub projects: BTreeSet<BrowserProject>,
    /// Normalized tokens that matched no rule
    pub discarded: Vec<String>,
    /// True when nothing matched and the default set was used
    pub defaulted: bool,
}

/// Classify a single token, already lower-cased and trimmed
pub fn classify_token(token: &str) -> Option<BrowserProject> {
    CLASSIFICATION_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| token.contains(needle)))
        .map(|(_, project)| *project)
}

/// Parse a comma-separated browser answer into a non-empty project set
pub fn parse_browser_selection(input: &str) -> BrowserSelection {
    let mut projects = BTreeSet::new();
    let mut discarded = Vec::new();

    for token in input
        .split(',')
        .map(|raw| raw.trim().to_lowercase())
        .filter(|token| !token.is_empty())
    {
        match classify_token(&token) {
            Some(project) => {
                projects.insert(project);
            }
            None => discarded.push(token),
        }
    }

    let defaulted = projects.is_empty();
    if defaulted {
        projects = default_browsers();
    }

    BrowserSelection {
        projects,
        discarded,
        defaulted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_token_rules() {
        assert_eq!(classify_token("chrome"), Some(BrowserProject::Chromium));
        assert_eq!(classify_token("google chrome"), Some(BrowserProject::Chromium));
        assert_eq!(classify_token("firefox"), Some(BrowserProject::Firefox));
        assert_eq!(classify_token("safari"), Some(BrowserProject::Webkit));
        assert_eq!(classify_token("webkit"), Some(BrowserProject::Webkit));
        assert_eq!(classify_token("mobile"), Some(BrowserProject::MobileChrome));
        assert_eq!(classify_token("edge"), None);
    }

    #[test]
    fn test_mobile_wins_over_chrome() {
        assert_eq!(
            classify_token("chrome mobile edge"),
            Some(BrowserProject::MobileChrome)
        );
        assert_eq!(
            classify_token("mobile-chrome"),
            Some(BrowserProject::MobileChrome)
        );
    }

    #[test]
    fn test_canonical_names_classify_to_themselves() {
        for project in BrowserProject::ALL {
            assert_eq!(classify_token(project.canonical_name()), Some(project));
        }
    }

    #[test]
    fn test_mixed_input() {
        let selection = parse_browser_selection("chrome, MOBILE, foo");
        assert_eq!(
            selection.projects,
            BTreeSet::from([BrowserProject::Chromium, BrowserProject::MobileChrome])
        );
        assert_eq!(selection.discarded, vec!["foo".to_string()]);
        assert!(!selection.defaulted);
    }

    #[test]
    fn test_duplicates_collapse() {
        let selection = parse_browser_selection("Safari, webkit,SAFARI");
        assert_eq!(selection.projects, BTreeSet::from([BrowserProject::Webkit]));
        assert!(selection.discarded.is_empty());
    }

    #[test]
    fn test_unrecognized_only_uses_default() {
        let selection = parse_browser_selection("opera, edge");
        assert_eq!(selection.projects, default_browsers());
        assert_eq!(selection.discarded.len(), 2);
        assert!(selection.defaulted);
    }

    #[test]
    fn test_blank_uses_default_without_discards() {
        let selection = parse_browser_selection("  , ,");
        assert_eq!(selection.projects, default_browsers());
        assert!(selection.discarded.is_empty());
        assert!(selection.defaulted);
    }

    #[test]
    fn test_from_str_canonical() {
        for project in BrowserProject::ALL {
            assert_eq!(project.canonical_name().parse::<BrowserProject>(), Ok(project));
        }
        assert!("chrome".parse::<BrowserProject>().is_err());
    }
}
