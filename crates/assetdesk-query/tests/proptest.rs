//! Property-based tests for the query pipeline using proptest.

use assetdesk_query::{
    execute, paginate, Dir, Field, FilterBindings, PagedResult, QueryRequest, Queryable, Schema,
    Value,
};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: i64,
    group: i64,
    name: Option<String>,
    site: String,
}

fn id(item: &Item) -> Value<'_> {
    Value::Integer(item.id)
}

fn group(item: &Item) -> Value<'_> {
    Value::Integer(item.group)
}

fn name(item: &Item) -> Value<'_> {
    Value::opt_text(item.name.as_deref())
}

fn site(item: &Item) -> Value<'_> {
    Value::text(&item.site)
}

static ITEMS: Schema<Item> = Schema {
    entity: "item",
    identity: Field {
        key: "id",
        accessor: id,
    },
    fields: &[
        Field {
            key: "group",
            accessor: group,
        },
        Field {
            key: "name",
            accessor: name,
        },
        Field {
            key: "site",
            accessor: site,
        },
    ],
    default_order: &[("id", Dir::Asc)],
    search: &["name"],
    filters: FilterBindings {
        location: Some("site"),
        ..FilterBindings::NONE
    },
};

impl Queryable for Item {
    fn schema() -> &'static Schema<Self> {
        &ITEMS
    }
}

// Ids are unique so results can be compared by id
fn items_strategy() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(
        (
            0i64..4,
            prop::option::of("[a-cA-C]{0,3}"),
            prop::sample::select(vec!["HN", "HCM", "DN"]),
        ),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (group, name, site))| Item {
                id: i as i64,
                group,
                name,
                site: site.to_string(),
            })
            .collect()
    })
}

fn sort_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["id", "group", "name", "site", "bogus"]),
            prop::sample::select(vec!["asc", "desc", "DESC", "sideways"]),
        ),
        0..3,
    )
    .prop_map(|keys| {
        keys.into_iter()
            .map(|(field, dir)| format!("{field}:{dir}"))
            .collect::<Vec<_>>()
            .join(",")
    })
}

fn ids(result: &PagedResult<&Item>) -> Vec<i64> {
    result.items.iter().map(|item| item.id).collect()
}

fn everything(items: &[Item], request: QueryRequest) -> Vec<i64> {
    let all = execute(items, &request.page(1).per_page(items.len().max(1) as i64));
    ids(&all)
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Concatenating every page reproduces the full ordered result.
    #[test]
    fn pages_concatenate_to_full_result(
        items in items_strategy(),
        sort in sort_strategy(),
        page_size in 1i64..8,
    ) {
        let base = QueryRequest::new().sort(&sort);
        let full = everything(&items, base.clone());

        let first = execute(&items, &base.clone().per_page(page_size));
        let mut collected = Vec::new();
        for page in 1..=i64::from(first.total_pages) {
            let result = execute(&items, &base.clone().page(page).per_page(page_size));
            prop_assert!(result.len() as i64 <= page_size);
            collected.extend(ids(&result));
        }
        prop_assert_eq!(collected, full);
    }

    /// Identical inputs give identical pages.
    #[test]
    fn execute_is_idempotent(
        items in items_strategy(),
        sort in sort_strategy(),
        page in -2i64..6,
        page_size in -1i64..6,
    ) {
        let request = QueryRequest::new().sort(&sort).page(page).per_page(page_size);
        prop_assert_eq!(execute(&items, &request), execute(&items, &request));
    }

    /// Records tied on the sort key keep their input order.
    #[test]
    fn sort_is_stable(items in items_strategy()) {
        let result = everything(&items, QueryRequest::new().sort("group:desc"));
        for pair in result.windows(2) {
            let (a, b) = (&items[pair[0] as usize], &items[pair[1] as usize]);
            prop_assert!(a.group >= b.group);
            if a.group == b.group {
                prop_assert!(a.id < b.id);
            }
        }
    }

    /// Descending is the exact reverse of ascending, missing values included.
    #[test]
    fn descending_reverses_ascending(items in items_strategy()) {
        let names = |sort: &str| -> Vec<Option<String>> {
            everything(&items, QueryRequest::new().sort(sort))
                .into_iter()
                .map(|id| items[id as usize].name.clone())
                .collect()
        };
        let mut desc = names("name:desc");
        desc.reverse();
        prop_assert_eq!(names("name:asc"), desc);
    }

    /// Unknown keys order by the identity field.
    #[test]
    fn unknown_key_orders_by_identity(items in items_strategy()) {
        let result = everything(&items, QueryRequest::new().sort("nope:asc"));
        let expected: Vec<i64> = (0..items.len() as i64).collect();
        prop_assert_eq!(result, expected);
    }

    /// Narrowing never adds records.
    #[test]
    fn filters_never_grow_result(
        items in items_strategy(),
        term in "[a-c]{0,2}",
        site in prop::sample::select(vec!["HN", "hcm", "Nowhere"]),
    ) {
        let result = execute(&items, &QueryRequest::new().search(term).location(site));
        prop_assert!(result.total_items <= items.len());
    }

    /// Whitespace-only search terms do not narrow.
    #[test]
    fn blank_search_matches_everything(items in items_strategy(), blanks in "[ \t]{0,4}") {
        let result = execute(&items, &QueryRequest::new().search(blanks));
        prop_assert_eq!(result.total_items, items.len());
    }

    /// Pages past the end are empty but keep their metadata.
    #[test]
    fn page_past_end_is_empty(
        items in prop::collection::vec(any::<u8>(), 1..50),
        page_size in 1i64..10,
        beyond in 1i64..5,
    ) {
        let total_pages = (items.len() as i64 + page_size - 1) / page_size;
        let result = paginate(&items, total_pages + beyond, page_size);
        prop_assert!(result.is_empty());
        prop_assert!(!result.has_next_page);
        prop_assert!(result.has_previous_page);
        prop_assert_eq!(i64::from(result.total_pages), total_pages);
    }

    /// Non-positive page parameters behave like 1.
    #[test]
    fn page_parameters_clamp_to_one(
        items in prop::collection::vec(any::<u8>(), 0..20),
        page in -10i64..=1,
        page_size in -10i64..=1,
    ) {
        let result = paginate(&items, page, page_size);
        let expected = paginate(&items, 1, 1);
        prop_assert_eq!(result, expected);
    }
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn empty_source() {
    let items: Vec<Item> = Vec::new();
    let result = execute(&items, &QueryRequest::new());
    assert!(result.is_empty());
    assert_eq!(result.total_items, 0);
    assert_eq!(result.total_pages, 0);
    assert!(!result.has_next_page);
    assert!(!result.has_previous_page);
}
