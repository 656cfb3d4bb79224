//! Issue types.

use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

/// The SEO check an issue belongs to.
///
/// Declaration order is the report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIterMacro)]
pub enum CheckCategory {
    TitleTag,
    MetaDescription,
    H1Tag,
    Indexability,
    CanonicalTag,
}

impl CheckCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckCategory::TitleTag => "Title Tag",
            CheckCategory::MetaDescription => "Meta Description",
            CheckCategory::H1Tag => "H1 Tag",
            CheckCategory::Indexability => "Indexability",
            CheckCategory::CanonicalTag => "Canonical Tag",
        }
    }
}

/// What is wrong within a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIterMacro)]
pub enum IssueDetail {
    Missing,
    Short,
    Long,
    Duplicate,
    Multiple,
    MissingH1,
    MultipleH1,
    NoindexMeta,
}

impl IssueDetail {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueDetail::Missing => "Missing",
            IssueDetail::Short => "Short",
            IssueDetail::Long => "Long",
            IssueDetail::Duplicate => "Duplicate",
            IssueDetail::Multiple => "Multiple",
            IssueDetail::MissingH1 => "Missing H1",
            IssueDetail::MultipleH1 => "Multiple H1",
            IssueDetail::NoindexMeta => "Noindex Meta",
        }
    }
}

impl std::fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for IssueDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CheckCategory {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for IssueDetail {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One detected problem on one page.
///
/// `measurement` is the value that triggered it: the length for Short/Long, the
/// seen count for Duplicate, the element count for Multiple, 0 for Missing and
/// 1 for Noindex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub url: String,
    pub category: CheckCategory,
    pub detail: IssueDetail,
    pub measurement: usize,
}

impl Issue {
    pub fn new(url: &str, category: CheckCategory, detail: IssueDetail, measurement: usize) -> Self {
        Self {
            url: url.to_string(),
            category,
            detail,
            measurement,
        }
    }
}
