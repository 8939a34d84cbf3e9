// AQL query construction. The service expects clauses like
// `(name:"Giana Sisters") & (type:d64)`; free-text fields are quoted,
// everything else (dates, categories, ratings, types, sort, ...) is not.

/// Filter names whose values are sent as quoted strings.
pub const QUOTED_FILTERS: [&str; 4] = ["name", "group", "handle", "event"];

/// Builds an AQL query from `(filter, value)` pairs.
///
/// One clause per pair, in iteration order, joined with `" & "`. Unknown
/// filter names pass through unchecked; the server rejects them if needed.
pub fn build_query<I, K, V>(filters: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    filters
        .into_iter()
        .map(|(key, value)| clause(key.as_ref(), value.as_ref()))
        .collect::<Vec<_>>()
        .join(" & ")
}

fn clause(key: &str, value: &str) -> String {
    if QUOTED_FILTERS.contains(&key) {
        format!("({key}:\"{value}\")")
    } else {
        format!("({key}:{value})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn builds_giana_sisters_query_in_order() {
        let query = build_query([
            ("name", "Giana Sisters"),
            ("type", "d64"),
            ("category", "games"),
        ]);
        assert_eq!(
            query,
            r#"(name:"Giana Sisters") & (type:d64) & (category:games)"#
        );
    }

    #[test]
    fn empty_filters_give_empty_query() {
        let filters: Vec<(&str, &str)> = Vec::new();
        assert_eq!(build_query(filters), "");
    }

    #[test]
    fn quotes_only_free_text_filters() {
        for key in QUOTED_FILTERS {
            assert_eq!(build_query([(key, "x y")]), format!("({key}:\"x y\")"));
        }
        for key in ["date", "category", "subcat", "rating", "type", "repo", "latest", "sort", "order"] {
            assert_eq!(build_query([(key, "v")]), format!("({key}:v)"));
        }
    }

    #[test]
    fn one_clause_per_pair() {
        let filters = vec![
            ("group".to_string(), "Fairlight".to_string()),
            ("date".to_string(), "1987".to_string()),
            ("rating".to_string(), "8".to_string()),
            ("unknown".to_string(), "anything".to_string()),
        ];
        let query = build_query(filters.iter().map(|(k, v)| (k, v)));
        let clauses: Vec<&str> = query.split(" & ").collect();
        assert_eq!(clauses.len(), filters.len());
        assert_eq!(clauses[0], r#"(group:"Fairlight")"#);
        assert_eq!(clauses[3], "(unknown:anything)");
    }

    #[test]
    fn follows_map_iteration_order() {
        let mut filters = BTreeMap::new();
        filters.insert("type", "d64");
        filters.insert("name", "Space Taxi");
        assert_eq!(build_query(filters), r#"(name:"Space Taxi") & (type:d64)"#);
    }

    #[test]
    fn duplicate_keys_are_kept() {
        let query = build_query([("type", "d64"), ("type", "t64")]);
        assert_eq!(query, "(type:d64) & (type:t64)");
    }
}
