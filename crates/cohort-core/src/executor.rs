use crate::{
    clock::Clock,
    error::Error,
    filter::FilterDefinition,
    predicate::{self, CompileDiagnostics, Predicate},
    schema::EntityKind,
    store::Store,
};

///
/// CONSTANTS
///

/// Page size used when the caller omits `limit`.
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Upper bound on any requested page size.
pub const MAX_PAGE_LIMIT: u32 = 500;

///
/// Page
///
/// One bounded preview page plus the total match count across the whole
/// collection (drives "matches: N" in the preview UI).
///

#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    pub results: Vec<serde_json::Value>,
    pub total_count: u64,
    pub diagnostics: CompileDiagnostics,
}

// Pagination window in usize-domain: rows in [offset, keep_count) are kept.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct PageWindow {
    offset: usize,
    keep_count: usize,
}

fn compute_page_window(offset: Option<u32>, limit: Option<u32>) -> PageWindow {
    let offset = usize::try_from(offset.unwrap_or(0)).unwrap_or(usize::MAX);
    let limit = usize::try_from(limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT))
        .unwrap_or(usize::MAX);

    PageWindow {
        offset,
        keep_count: offset.saturating_add(limit),
    }
}

///
/// Executor
///
/// Stateless query execution: compile the filter tree once, then make a
/// single pass over the target collection. Constructed once at process
/// start with its store and clock; holds no mutable state of its own.
///

pub struct Executor<S, C> {
    store: S,
    clock: C,
}

impl<S: Store, C: Clock> Executor<S, C> {
    #[must_use]
    pub const fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Run a bounded, paginated read against the entity's collection.
    ///
    /// A filter tree with no resolvable clauses returns an unfiltered page:
    /// absence of valid filters means "match everything", not "match
    /// nothing".
    pub fn preview(
        &self,
        entity: EntityKind,
        definition: &FilterDefinition,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Page, Error> {
        let compiled = predicate::compile(entity, definition, &self.clock)?;
        let window = compute_page_window(offset, limit);

        let mut results = Vec::new();
        let mut total: u64 = 0;
        self.store.scan(entity, &mut |row| {
            if !matches(compiled.predicate.as_ref(), row) {
                return;
            }

            // total spans the whole collection, not just the page
            let index = usize::try_from(total).unwrap_or(usize::MAX);
            total += 1;

            if index >= window.offset && index < window.keep_count {
                results.push(row.to_json());
            }
        })?;

        Ok(Page {
            results,
            total_count: total,
            diagnostics: compiled.diagnostics,
        })
    }

    /// Count-only variant of `preview`.
    pub fn count(&self, entity: EntityKind, definition: &FilterDefinition) -> Result<u64, Error> {
        let compiled = predicate::compile(entity, definition, &self.clock)?;

        let mut total: u64 = 0;
        self.store.scan(entity, &mut |row| {
            if matches(compiled.predicate.as_ref(), row) {
                total += 1;
            }
        })?;

        Ok(total)
    }
}

fn matches(predicate: Option<&Predicate>, row: &dyn crate::model::Record) -> bool {
    predicate.is_none_or(|predicate| predicate::eval(row, predicate))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        clock::FixedClock,
        filter::{FilterCondition, FilterGroup},
        model::{Account, Contact},
        store::MemoryStore,
        types::Timestamp,
    };
    use serde_json::json;
    use ulid::Ulid;

    const NOW: Timestamp = Timestamp::from_seconds(1_750_000_000);

    fn id(n: u128) -> Ulid {
        Ulid::from_parts(0, n)
    }

    fn account(n: u128, name: &str, industry: Option<&str>) -> Account {
        Account {
            id: id(n),
            name: name.to_string(),
            domain: None,
            industry: industry.map(str::to_string),
            status: "active".to_string(),
            employee_count: 100,
            annual_revenue: 1_000_000.0,
            created_at: NOW.minus_days(90),
        }
    }

    fn contact(n: u128, status: &str, score: i64) -> Contact {
        Contact {
            id: id(n),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: Some(format!("c{n}@example.com")),
            status: status.to_string(),
            lifecycle_stage: "lead".to_string(),
            engagement_score: score,
            tags: vec![],
            created_at: NOW.minus_days(30),
            last_activity_at: None,
        }
    }

    fn executor() -> Executor<MemoryStore, FixedClock> {
        let mut store = MemoryStore::new();
        store.insert_account(account(1, "Initech", Some("Technology")));
        store.insert_account(account(2, "Globex", Some("technology")));
        store.insert_account(account(3, "Umbrella", Some("Pharma")));
        store.insert_account(account(4, "Hooli", None));

        store.insert_contact(contact(10, "active", 40));
        store.insert_contact(contact(11, "churned", 85));
        store.insert_contact(contact(12, "churned", 10));

        Executor::new(store, FixedClock(NOW))
    }

    fn eq(field: &str, value: serde_json::Value) -> FilterCondition {
        FilterCondition::new(field, "equals", value)
    }

    #[test]
    fn equals_is_case_insensitive_by_default() {
        let exec = executor();
        let tree = FilterGroup::all().condition(eq("industry", json!("Technology")));

        let page = exec.preview(EntityKind::Accounts, &tree, None, None).unwrap();
        assert_eq!(page.total_count, 2);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0]["name"], json!("Initech"));
        assert_eq!(page.results[1]["name"], json!("Globex"));
    }

    #[test]
    fn or_with_nested_and_group() {
        let exec = executor();
        let tree = FilterGroup::any()
            .condition(FilterCondition::new("engagementScore", "greater_or_equal", json!(80)))
            .group(FilterGroup::all().condition(eq("status", json!("active"))));

        // score >= 80 OR status == active
        assert_eq!(exec.count(EntityKind::Contacts, &tree).unwrap(), 2);
    }

    #[test]
    fn unresolvable_tree_returns_unfiltered_page() {
        let exec = executor();
        let tree = FilterGroup::all().condition(eq("doesNotExist", json!("x")));

        let page = exec.preview(EntityKind::Accounts, &tree, Some(2), Some(1)).unwrap();
        assert_eq!(page.total_count, 4);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0]["name"], json!("Globex"));
        assert_eq!(page.diagnostics.dropped.len(), 1);
    }

    #[test]
    fn empty_tree_counts_everything() {
        let exec = executor();

        assert_eq!(exec.count(EntityKind::Contacts, &FilterGroup::all()).unwrap(), 3);
    }

    #[test]
    fn window_clamps_and_offsets() {
        let exec = executor();
        let tree = FilterGroup::all();

        let page = exec.preview(EntityKind::Accounts, &tree, Some(0), None).unwrap();
        assert_eq!(page.total_count, 4);
        assert!(page.results.is_empty());

        let window = compute_page_window(None, Some(9_999));
        assert_eq!(window.keep_count, MAX_PAGE_LIMIT as usize);

        let past_end = exec
            .preview(EntityKind::Accounts, &tree, Some(10), Some(100))
            .unwrap();
        assert_eq!(past_end.total_count, 4);
        assert!(past_end.results.is_empty());
    }
}
