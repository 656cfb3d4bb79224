//! Rule evaluation.

use super::tracker::DuplicateTracker;
use super::types::{CheckCategory, Issue, IssueDetail};
use crate::config::{
    DESCRIPTION_MAX_LENGTH, DESCRIPTION_MIN_LENGTH, TITLE_MAX_LENGTH, TITLE_MIN_LENGTH,
};
use crate::parse::PageFields;

/// Evaluates every check against one page's fields.
///
/// Records the page's title and description in `tracker` before reading the
/// duplicate counts, so it must be called exactly once per page, in visit order.
pub fn classify(url: &str, fields: &PageFields, tracker: &mut DuplicateTracker) -> Vec<Issue> {
    let mut issues = Vec::new();

    let title_seen = tracker.record_title(&fields.title);
    text_checks(
        &mut issues,
        url,
        CheckCategory::TitleTag,
        fields.title_length(),
        (TITLE_MIN_LENGTH, TITLE_MAX_LENGTH),
        title_seen,
        fields.title_count,
    );

    let description_seen = tracker.record_description(&fields.description);
    text_checks(
        &mut issues,
        url,
        CheckCategory::MetaDescription,
        fields.description_length(),
        (DESCRIPTION_MIN_LENGTH, DESCRIPTION_MAX_LENGTH),
        description_seen,
        fields.description_count,
    );

    match fields.h1_count {
        0 => issues.push(Issue::new(url, CheckCategory::H1Tag, IssueDetail::MissingH1, 0)),
        1 => {}
        n => issues.push(Issue::new(url, CheckCategory::H1Tag, IssueDetail::MultipleH1, n)),
    }

    if fields.is_noindex() {
        issues.push(Issue::new(
            url,
            CheckCategory::Indexability,
            IssueDetail::NoindexMeta,
            1,
        ));
    }

    if fields.canonical.is_none() {
        issues.push(Issue::new(url, CheckCategory::CanonicalTag, IssueDetail::Missing, 0));
    }
    if fields.canonical_count > 1 {
        issues.push(Issue::new(
            url,
            CheckCategory::CanonicalTag,
            IssueDetail::Multiple,
            fields.canonical_count,
        ));
    }

    issues
}

/// Missing/Short/Long, Duplicate and Multiple checks shared by title and
/// description. Bounds are inclusive of acceptable lengths.
fn text_checks(
    issues: &mut Vec<Issue>,
    url: &str,
    category: CheckCategory,
    length: usize,
    (min, max): (usize, usize),
    seen: usize,
    element_count: usize,
) {
    if length == 0 {
        issues.push(Issue::new(url, category, IssueDetail::Missing, 0));
    } else if length < min {
        issues.push(Issue::new(url, category, IssueDetail::Short, length));
    } else if length > max {
        issues.push(Issue::new(url, category, IssueDetail::Long, length));
    }

    if length > 0 && seen > 1 {
        issues.push(Issue::new(url, category, IssueDetail::Duplicate, seen));
    }

    if element_count > 1 {
        issues.push(Issue::new(url, category, IssueDetail::Multiple, element_count));
    }
}
