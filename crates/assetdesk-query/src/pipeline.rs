//! The query pipeline: search, filter, sort, paginate.
//!
//! Every stage is driven by the record type's [`Schema`](crate::Schema); the
//! control flow is the same for every entity kind.

use tracing::{debug, debug_span};

use crate::clause::{Clause, Predicate, Selection};
use crate::config::QueryConfig;
use crate::ordering::Comparator;
use crate::page::{PageRequest, PagedResult};
use crate::request::{Filters, QueryRequest};
use crate::traits::Queryable;

/// Builds the free-text search predicate for `T`.
///
/// A missing or blank term matches everything. Otherwise the trimmed term
/// must appear, ignoring case, in at least one searchable field.
pub fn search_predicate<T: Queryable>(term: Option<&str>) -> Predicate<T> {
    let term = match term.map(str::trim) {
        Some(term) if !term.is_empty() => term,
        _ => return Predicate::Always,
    };
    let schema = T::schema();
    let clauses: Vec<Clause<T>> = schema
        .search
        .iter()
        .map(|key| Clause::contains(*schema.resolve(key), term))
        .collect();
    if clauses.is_empty() {
        Predicate::Always
    } else {
        Predicate::Any(clauses)
    }
}

/// Builds the conjunctive filter predicate for `T`.
///
/// Each filter dimension maps to the field the schema binds it to.
/// Dimensions the record type does not bind are skipped.
pub fn filter_predicate<T: Queryable>(filters: &Filters, config: &QueryConfig) -> Predicate<T> {
    let schema = T::schema();
    let bindings = &schema.filters;
    let mut clauses = Vec::new();

    let mut bind = |dimension: &'static str, target: Option<&'static str>, clause: Narrowing| {
        match (target, clause) {
            (_, Narrowing::Skip) => {}
            (None, _) => debug!(entity = schema.entity, dimension, "filter not supported, ignored"),
            (Some(key), Narrowing::OneOf(values)) => {
                clauses.push(Clause::one_of(*schema.resolve(key), values))
            }
            (Some(key), Narrowing::OnDay(day)) => {
                clauses.push(Clause::on_day(*schema.resolve(key), day))
            }
        }
    };

    bind(
        "state",
        bindings.state,
        Selection::from_list(filters.states.as_deref(), &config.all_sentinel).into(),
    );
    bind(
        "category",
        bindings.category,
        Selection::from_list(filters.categories.as_deref(), &config.all_sentinel).into(),
    );
    bind(
        "type",
        bindings.user_type,
        Selection::from_single(filters.user_type.as_deref(), &config.type_sentinel).into(),
    );
    // Location has no sentinel: a supplied value always narrows.
    bind(
        "location",
        bindings.location,
        match &filters.location {
            Some(location) => Narrowing::OneOf(vec![location.trim().to_string()]),
            None => Narrowing::Skip,
        },
    );
    bind(
        "date",
        bindings.date,
        match filters.date {
            Some(at) => Narrowing::OnDay(at.date_naive()),
            None => Narrowing::Skip,
        },
    );

    if clauses.is_empty() {
        Predicate::Always
    } else {
        Predicate::All(clauses)
    }
}

/// What one filter dimension asks for, before it is bound to a field.
enum Narrowing {
    Skip,
    OneOf(Vec<String>),
    OnDay(chrono::NaiveDate),
}

impl From<Selection> for Narrowing {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::Any => Narrowing::Skip,
            Selection::OneOf(values) => Narrowing::OneOf(values),
        }
    }
}

/// Runs the pipeline with the default configuration.
pub fn execute<'a, T, I>(source: I, request: &QueryRequest) -> PagedResult<&'a T>
where
    T: Queryable,
    I: IntoIterator<Item = &'a T>,
{
    execute_with(source, request, &QueryConfig::default())
}

/// Runs the pipeline over records of a single type.
pub fn execute_with<'a, T, I>(
    source: I,
    request: &QueryRequest,
    config: &QueryConfig,
) -> PagedResult<&'a T>
where
    T: Queryable,
    I: IntoIterator<Item = &'a T>,
{
    execute_by(source, |item| Some(item), request, config)
}

/// Runs the pipeline over a heterogeneous source.
///
/// `view` projects each source item onto the record type being queried;
/// items it rejects are skipped. The page holds the source items, so callers
/// get back exactly what they passed in.
///
/// Stages run in a fixed order: search, filter, sort, paginate. The sort is
/// stable and always completes before the page is cut.
pub fn execute_by<'a, S, T, I, F>(
    source: I,
    view: F,
    request: &QueryRequest,
    config: &QueryConfig,
) -> PagedResult<&'a S>
where
    S: 'a,
    T: Queryable,
    I: IntoIterator<Item = &'a S>,
    F: Fn(&'a S) -> Option<&'a T>,
{
    let schema = T::schema();
    let span = debug_span!("query", entity = schema.entity);
    let _enter = span.enter();

    let mut rows: Vec<(&'a S, &'a T)> = source
        .into_iter()
        .filter_map(|item| view(item).map(|record| (item, record)))
        .collect();
    let loaded = rows.len();

    let search = search_predicate::<T>(request.search_term());
    if !search.is_always() {
        rows.retain(|(_, record)| search.matches(record));
    }
    let searched = rows.len();

    let filter = filter_predicate::<T>(request.filters(), config);
    if !filter.is_always() {
        rows.retain(|(_, record)| filter.matches(record));
    }
    let filtered = rows.len();

    let comparator = Comparator::<T>::new(request.sort_keys());
    rows.sort_by(|(_, a), (_, b)| comparator.compare(a, b));

    let page_size = request
        .page_size()
        .unwrap_or_else(|| i64::from(config.page_size_for(schema.entity)));
    let page = PageRequest::new(request.page_number(), page_size).capped(config.max_page_size);
    let result = page.paginate(rows.into_iter().map(|(item, _)| item));

    debug!(
        loaded,
        searched,
        filtered,
        sort = ?comparator.keys().collect::<Vec<_>>(),
        page = result.current_page,
        page_size = result.page_size,
        total_pages = result.total_pages,
        returned = result.len(),
        "query executed"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::Op;
    use crate::ordering::Dir;
    use crate::registry::{Field, FilterBindings, Schema};
    use crate::value::Value;
    use chrono::{TimeZone, Utc};

    #[derive(Debug, PartialEq)]
    struct Ticket {
        id: i64,
        title: String,
        status: String,
        site: String,
    }

    fn id(t: &Ticket) -> Value<'_> {
        Value::Integer(t.id)
    }

    fn title(t: &Ticket) -> Value<'_> {
        Value::text(&t.title)
    }

    fn status(t: &Ticket) -> Value<'_> {
        Value::text(&t.status)
    }

    fn site(t: &Ticket) -> Value<'_> {
        Value::text(&t.site)
    }

    static TICKETS: Schema<Ticket> = Schema {
        entity: "ticket",
        identity: Field {
            key: "id",
            accessor: id,
        },
        fields: &[
            Field {
                key: "title",
                accessor: title,
            },
            Field {
                key: "status",
                accessor: status,
            },
            Field {
                key: "site",
                accessor: site,
            },
        ],
        default_order: &[("id", Dir::Asc)],
        search: &["title", "status"],
        filters: FilterBindings {
            state: Some("status"),
            location: Some("site"),
            ..FilterBindings::NONE
        },
    };

    impl Queryable for Ticket {
        fn schema() -> &'static Schema<Self> {
            &TICKETS
        }
    }

    fn ticket(id: i64, title: &str, status: &str, site: &str) -> Ticket {
        Ticket {
            id,
            title: title.to_string(),
            status: status.to_string(),
            site: site.to_string(),
        }
    }

    fn sample() -> Vec<Ticket> {
        vec![
            ticket(3, "Broken screen", "Open", "HN"),
            ticket(1, "Keyboard", "Closed", "HCM"),
            ticket(2, "Screen flicker", "Open", "HCM"),
        ]
    }

    fn ids(result: &PagedResult<&Ticket>) -> Vec<i64> {
        result.items.iter().map(|t| t.id).collect()
    }

    #[test]
    fn blank_search_is_always() {
        assert!(search_predicate::<Ticket>(None).is_always());
        assert!(search_predicate::<Ticket>(Some("")).is_always());
        assert!(search_predicate::<Ticket>(Some(" \t ")).is_always());
    }

    #[test]
    fn search_covers_searchable_fields() {
        let predicate = search_predicate::<Ticket>(Some(" open "));
        let keys: Vec<_> = predicate.clauses().iter().map(|c| c.field_key()).collect();
        assert_eq!(keys, vec!["title", "status"]);
        assert!(predicate.clauses().iter().all(|c| c.op() == Op::Contains));
    }

    #[test]
    fn empty_filters_are_always() {
        let predicate = filter_predicate::<Ticket>(&Filters::default(), &QueryConfig::default());
        assert!(predicate.is_always());
    }

    #[test]
    fn unbound_dimensions_are_ignored() {
        let filters = Filters {
            categories: Some(vec!["Laptop".into()]),
            user_type: Some("Admin".into()),
            date: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            ..Filters::default()
        };
        let predicate = filter_predicate::<Ticket>(&filters, &QueryConfig::default());
        assert!(predicate.is_always());
    }

    #[test]
    fn filters_bind_to_schema_fields() {
        let filters = Filters {
            states: Some(vec!["open".into()]),
            location: Some("HCM".into()),
            ..Filters::default()
        };
        let predicate = filter_predicate::<Ticket>(&filters, &QueryConfig::default());
        let keys: Vec<_> = predicate.clauses().iter().map(|c| c.field_key()).collect();
        assert_eq!(keys, vec!["status", "site"]);
    }

    #[test]
    fn configured_sentinel_is_honoured() {
        let config = QueryConfig {
            all_sentinel: "*".into(),
            ..QueryConfig::default()
        };
        let filters = Filters {
            states: Some(vec!["*".into()]),
            ..Filters::default()
        };
        assert!(filter_predicate::<Ticket>(&filters, &config).is_always());
    }

    #[test]
    fn stages_compose() {
        let data = sample();
        let request = QueryRequest::new()
            .search("screen")
            .location("hcm")
            .sort("title:desc");
        let result = execute(&data, &request);
        assert_eq!(ids(&result), vec![2]);
        assert_eq!(result.total_items, 1);
    }

    #[test]
    fn default_order_without_keys() {
        let data = sample();
        let result = execute(&data, &QueryRequest::new());
        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn page_size_comes_from_config() {
        let data = sample();
        let mut config = QueryConfig::default();
        config.page_sizes.insert("ticket".into(), 2);
        let result = execute_with(&data, &QueryRequest::new(), &config);
        assert_eq!(ids(&result), vec![1, 2]);
        assert_eq!(result.page_size, 2);
        assert_eq!(result.total_pages, 2);
    }

    #[test]
    fn request_page_size_wins_but_is_capped() {
        let data = sample();
        let config = QueryConfig {
            max_page_size: Some(2),
            ..QueryConfig::default()
        };
        let result = execute_with(&data, &QueryRequest::new().per_page(50), &config);
        assert_eq!(result.page_size, 2);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn execute_by_skips_rejected_items() {
        enum Row {
            Ticket(Ticket),
            Other,
        }
        let rows = vec![
            Row::Other,
            Row::Ticket(ticket(5, "Mouse", "Open", "HN")),
            Row::Other,
        ];
        let result = execute_by(
            &rows,
            |row| match row {
                Row::Ticket(ticket) => Some(ticket),
                Row::Other => None,
            },
            &QueryRequest::new(),
            &QueryConfig::default(),
        );
        assert_eq!(result.total_items, 1);
        assert!(matches!(result.items[0], Row::Ticket(t) if t.id == 5));
    }
}
