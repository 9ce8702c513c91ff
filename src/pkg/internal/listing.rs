//! Filtering and pagination over an in-memory list of job records.
//!
//! Everything here is a pure function of its arguments: inputs are never
//! mutated and the same inputs always produce the same output.

use serde::{Serialize, Serializer};

use crate::pkg::internal::adaptors::jobs::spec::JobRecord;

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Number of page links shown on either side of the current page.
const PAGE_WINDOW: usize = 2;

/// The active filter selection. An empty field places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub search: String,
    pub category: String,
    pub location: String,
    pub experience_level: String,
}

impl FilterSpec {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.category.is_empty()
            && self.location.is_empty()
            && self.experience_level.is_empty()
    }

    pub fn matches(&self, job: &JobRecord) -> bool {
        Matcher::new(self).matches(job)
    }
}

/// Lowercased needles, computed once per filter pass.
struct Matcher {
    search: Option<String>,
    category: Option<String>,
    location: Option<String>,
    experience_level: Option<String>,
}

impl Matcher {
    fn new(spec: &FilterSpec) -> Self {
        let needle = |s: &str| (!s.is_empty()).then(|| s.to_lowercase());
        Matcher {
            search: needle(&spec.search),
            category: needle(&spec.category),
            location: needle(&spec.location),
            experience_level: needle(&spec.experience_level),
        }
    }

    fn matches(&self, job: &JobRecord) -> bool {
        if let Some(term) = &self.search {
            let hit = contains(&job.title, term)
                || contains(&job.company, term)
                || job.tags.iter().any(|tag| contains(tag, term));
            if !hit {
                return false;
            }
        }
        // category is matched through tags
        if let Some(category) = &self.category {
            if !job.tags.iter().any(|tag| contains(tag, category)) {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if !contains(&job.location, location) {
                return false;
            }
        }
        if let Some(level) = &self.experience_level {
            if !contains(&job.experience_level, level) {
                return false;
            }
        }
        true
    }
}

fn contains(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// Returns the records matching every non-empty field of `spec`, in their
/// original relative order.
pub fn filter_jobs(records: &[JobRecord], spec: &FilterSpec) -> Vec<JobRecord> {
    if spec.is_empty() {
        return records.to_vec();
    }
    let matcher = Matcher::new(spec);
    records
        .iter()
        .filter(|job| matcher.matches(job))
        .cloned()
        .collect()
}

/// Returns the 1-indexed page `page_number` of `records`.
///
/// Pages past the end, page 0 and a page size of 0 all yield an empty slice.
pub fn paginate<T>(records: &[T], page_number: usize, page_size: usize) -> &[T] {
    if page_number == 0 || page_size == 0 {
        return &[];
    }
    let start = (page_number - 1).saturating_mul(page_size);
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// One entry of a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Number(usize),
    Gap,
}

impl Serialize for PageMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageMarker::Number(n) => serializer.serialize_u64(*n as u64),
            PageMarker::Gap => serializer.serialize_str("..."),
        }
    }
}

/// Page links to render around `current`: always the first and last page,
/// up to two neighbours either side, and a gap where pages are skipped.
/// Nothing is rendered for a single page.
pub fn visible_pages(current: usize, total: usize) -> Vec<PageMarker> {
    if total <= 1 {
        return Vec::new();
    }
    let low = current.saturating_sub(PAGE_WINDOW);
    let high = current.saturating_add(PAGE_WINDOW);
    let mut pages = vec![PageMarker::Number(1)];
    if low > 2 {
        pages.push(PageMarker::Gap);
    }
    pages.extend((low.max(2)..=high.min(total - 1)).map(PageMarker::Number));
    if high < total - 1 {
        pages.push(PageMarker::Gap);
    }
    pages.push(PageMarker::Number(total));
    pages
}

/// A single page of results along with what a client needs to render
/// pagination controls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub pages: Vec<PageMarker>,
}

impl<T: Clone> Page<T> {
    pub fn of(records: &[T], page: usize, page_size: usize) -> Self {
        let total_pages = total_pages(records.len(), page_size);
        Page {
            items: paginate(records, page, page_size).to_vec(),
            page,
            page_size,
            total_items: records.len(),
            total_pages,
            pages: visible_pages(page, total_pages),
        }
    }
}

/// Filters `records` and cuts out the requested page.
pub fn list_page(
    records: &[JobRecord],
    spec: &FilterSpec,
    page: usize,
    page_size: usize,
) -> Page<JobRecord> {
    Page::of(&filter_jobs(records, spec), page, page_size)
}
