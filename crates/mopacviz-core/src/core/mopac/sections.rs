use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

/// Marker line that precedes the results of a converged geometry optimization.
pub const FINAL_HEAT_MARKER: &str = "FINAL HEAT OF FORMATION";

/// The part of the document a [`SectionMatcher`] is allowed to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Search the entire document.
    Whole,
    /// Search only the text following the last occurrence of the marker.
    /// Nothing matches when the marker is absent.
    AfterLast(&'static str),
}

/// A named strategy that locates one table block inside MOPAC output.
///
/// The first capture group of the pattern is the block body, i.e. the table rows
/// without their column headers.
#[derive(Debug)]
pub struct SectionMatcher {
    name: &'static str,
    pattern: Regex,
    scope: SearchScope,
}

impl SectionMatcher {
    fn new(name: &'static str, pattern: &str, scope: SearchScope) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("built-in section pattern must compile"),
            scope,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn scope(&self) -> SearchScope {
        self.scope
    }

    /// Returns the captured block body, or `None` if this strategy does not match.
    pub fn find<'a>(&self, text: &'a str) -> Option<&'a str> {
        let haystack = match self.scope {
            SearchScope::Whole => text,
            SearchScope::AfterLast(marker) => {
                let start = text.rfind(marker)? + marker.len();
                &text[start..]
            }
        };
        self.pattern
            .captures(haystack)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// A block located by a matcher, together with the name of the matcher that found it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionMatch<'a> {
    pub strategy: &'static str,
    pub block: &'a str,
}

const NUMBERED_CARTESIAN_HEADER: &str = r"(?s)ATOM\s+CHEMICAL\s+X\s+Y\s+Z\s*\n\s*NUMBER\s+SYMBOL\s+\(ANGSTROMS\)\s+\(ANGSTROMS\)\s+\(ANGSTROMS\)\s*\n\s*\n(.*?)\n\n\s*";

/// Geometry strategies in the order they are tried.
pub static GEOMETRY_MATCHERS: Lazy<[SectionMatcher; 4]> = Lazy::new(|| {
    [
        SectionMatcher::new(
            "inline-units-header",
            r"(?s)ATOM\s+CHEMICAL\s+X\s+Y\s+Z\s*\(ANGSTROMS\)\s*\(ANGSTROMS\)\s*\(ANGSTROMS\)\s*\n\s*\n(.*?)\n\n\s*CARTESIAN COORDINATES",
            SearchScope::Whole,
        ),
        SectionMatcher::new(
            "after-final-heat",
            r"(?s)FINAL HEAT OF FORMATION =.*?\n\n(.*?)\n\n\s*CARTESIAN COORDINATES",
            SearchScope::Whole,
        ),
        SectionMatcher::new(
            "numbered-header",
            &format!("{NUMBERED_CARTESIAN_HEADER}CARTESIAN COORDINATES"),
            SearchScope::Whole,
        ),
        SectionMatcher::new(
            "numbered-header-after-last-final-heat",
            &format!("{NUMBERED_CARTESIAN_HEADER} CARTESIAN COORDINATES"),
            SearchScope::AfterLast(FINAL_HEAT_MARKER),
        ),
    ]
});

pub static MULLIKEN_MATCHER: Lazy<SectionMatcher> = Lazy::new(|| {
    SectionMatcher::new(
        "mulliken-table",
        r"(?s)MULLIKEN POPULATIONS AND CHARGES\s*\n\s*\n\s*NO\.\s+ATOM\s+POPULATION\s+CHARGE\s*\n(.*?)\n\s*\*",
        SearchScope::Whole,
    )
});

/// Tries every geometry strategy in order and returns the first match.
pub fn locate_geometry(text: &str) -> Option<SectionMatch<'_>> {
    locate_with(GEOMETRY_MATCHERS.iter(), text)
}

pub fn locate_mulliken(text: &str) -> Option<SectionMatch<'_>> {
    locate_with(std::iter::once(&*MULLIKEN_MATCHER), text)
}

fn locate_with<'m, 'a>(
    matchers: impl IntoIterator<Item = &'m SectionMatcher>,
    text: &'a str,
) -> Option<SectionMatch<'a>> {
    for matcher in matchers {
        match matcher.find(text) {
            Some(block) => {
                debug!(
                    "Section located by strategy '{}' ({} bytes).",
                    matcher.name(),
                    block.len()
                );
                return Some(SectionMatch {
                    strategy: matcher.name(),
                    block,
                });
            }
            None => trace!("Strategy '{}' did not match.", matcher.name()),
        }
    }
    None
}
