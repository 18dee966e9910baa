//! # Query Catalog
//!
//! The fixed mapping from query-type tokens to sort/limit descriptors.
//! Two vocabularies exist: the primary camelCase one used by
//! `GET /performQuery/{queryType}`, and a legacy snake_case one used by
//! `POST /perform_query`. They are deliberately kept separate; see the
//! notes on each table.

use crate::store::SortDirection;

/// What a query token resolves to: which field to sort on, in which
/// direction, and how many records to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub field: &'static str,
    pub direction: SortDirection,
    /// `None` means unbounded
    pub limit: Option<usize>,
}

/// Primary query vocabulary.
///
/// `fewestFieldGoals` is historically misnamed: it returns every record
/// sorted by `madeFieldGoals` descending, not the single lowest. Kept
/// as-is for wire compatibility.
const QUERY_CATALOG: &[(&str, QueryDescriptor)] = &[
    (
        "mostTouchdowns",
        QueryDescriptor {
            field: "touchdownsThrown",
            direction: SortDirection::Descending,
            limit: Some(1),
        },
    ),
    (
        "mostRushingYards",
        QueryDescriptor {
            field: "rushingYards",
            direction: SortDirection::Descending,
            limit: Some(1),
        },
    ),
    (
        "leastRushingYards",
        QueryDescriptor {
            field: "rushingYards",
            direction: SortDirection::Ascending,
            limit: Some(1),
        },
    ),
    (
        "fewestFieldGoals",
        QueryDescriptor {
            field: "madeFieldGoals",
            direction: SortDirection::Descending,
            limit: None,
        },
    ),
    (
        "mostNumberOfSacks",
        QueryDescriptor {
            field: "sacks",
            direction: SortDirection::Descending,
            limit: Some(1),
        },
    ),
];

/// Legacy query vocabulary.
///
/// Older clients post snake_case tokens that sort on field names no record
/// carries (`touchdowns`, `rushing_yards` instead of `touchdownsThrown`,
/// `rushingYards`). Every record ties on a missing field, so these queries
/// fall back to insertion order. Kept verbatim; merging this table into
/// the primary one would change observable behavior.
const LEGACY_QUERY_CATALOG: &[(&str, QueryDescriptor)] = &[
    (
        "most_touchdowns",
        QueryDescriptor {
            field: "touchdowns",
            direction: SortDirection::Descending,
            limit: Some(1),
        },
    ),
    (
        "most_rushing_yards",
        QueryDescriptor {
            field: "rushing_yards",
            direction: SortDirection::Descending,
            limit: Some(1),
        },
    ),
];

/// Resolve a primary query token
pub fn resolve(token: &str) -> Option<QueryDescriptor> {
    lookup(QUERY_CATALOG, token)
}

/// Resolve a legacy query token
pub fn resolve_legacy(token: &str) -> Option<QueryDescriptor> {
    lookup(LEGACY_QUERY_CATALOG, token)
}

fn lookup(table: &[(&str, QueryDescriptor)], token: &str) -> Option<QueryDescriptor> {
    table
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, descriptor)| *descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_tokens_resolve() {
        let d = resolve("mostTouchdowns").unwrap();
        assert_eq!(d.field, "touchdownsThrown");
        assert_eq!(d.direction, SortDirection::Descending);
        assert_eq!(d.limit, Some(1));

        let d = resolve("leastRushingYards").unwrap();
        assert_eq!(d.field, "rushingYards");
        assert_eq!(d.direction, SortDirection::Ascending);
        assert_eq!(d.limit, Some(1));

        let d = resolve("mostNumberOfSacks").unwrap();
        assert_eq!(d.field, "sacks");
        assert_eq!(d.limit, Some(1));
    }

    #[test]
    fn test_fewest_field_goals_is_descending_and_unbounded() {
        let d = resolve("fewestFieldGoals").unwrap();
        assert_eq!(d.field, "madeFieldGoals");
        assert_eq!(d.direction, SortDirection::Descending);
        assert_eq!(d.limit, None);
    }

    #[test]
    fn test_unknown_token_is_unmatched() {
        assert!(resolve("bogusToken").is_none());
        assert!(resolve("").is_none());
        // Vocabularies do not bleed into each other
        assert!(resolve("most_touchdowns").is_none());
        assert!(resolve_legacy("mostTouchdowns").is_none());
    }

    #[test]
    fn test_legacy_tokens_sort_on_absent_fields() {
        let d = resolve_legacy("most_touchdowns").unwrap();
        assert_eq!(d.field, "touchdowns");
        assert_eq!(d.limit, Some(1));

        let d = resolve_legacy("most_rushing_yards").unwrap();
        assert_eq!(d.field, "rushing_yards");
        assert_eq!(d.direction, SortDirection::Descending);
    }
}
