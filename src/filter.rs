//! Collection filtering.
//!
//! A pure narrowing pass over an in-memory snapshot of the collection:
//! free-text query plus structured filters, combined conjunctively. Never
//! touches storage and never mutates its input records.

use crate::model::{Wine, WineType};

/// The structured filter set from the browse screen.
///
/// An empty type list, an unset year bound, and a zero minimum rating each
/// disable that predicate entirely; they do not match "only unset values".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WineFilters {
    pub types: Vec<WineType>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub min_rating: u8,
}

impl WineFilters {
    /// True when any structured predicate would narrow the collection.
    pub fn is_active(&self) -> bool {
        !self.types.is_empty()
            || self.min_year.is_some()
            || self.max_year.is_some()
            || self.min_rating > 0
    }
}

/// Narrow `wines` to the records matching `query` and `filters`.
///
/// Predicates run as independent passes in a fixed order (text query, type
/// set, minimum year, maximum year, minimum rating), each narrowing the
/// candidate list. They are independent and commutative, so the order does
/// not change the result set; it is fixed anyway so behavior stays easy to
/// audit against the tests.
pub fn apply(mut wines: Vec<Wine>, query: &str, filters: &WineFilters) -> Vec<Wine> {
    if !query.is_empty() {
        let query = query.to_lowercase();
        wines.retain(|wine| matches_query(wine, &query));
    }

    if !filters.types.is_empty() {
        wines.retain(|wine| filters.types.contains(&wine.wine_type));
    }

    if let Some(min_year) = filters.min_year {
        wines.retain(|wine| vintage_year(wine).is_some_and(|year| year >= min_year));
    }

    if let Some(max_year) = filters.max_year {
        wines.retain(|wine| vintage_year(wine).is_some_and(|year| year <= max_year));
    }

    if filters.min_rating > 0 {
        wines.retain(|wine| wine.rating >= filters.min_rating);
    }

    wines
}

/// Case-insensitive substring match over the searchable text fields.
/// A record matches if the query appears in any of them.
fn matches_query(wine: &Wine, query: &str) -> bool {
    [
        &wine.name,
        &wine.producer,
        &wine.region,
        &wine.country,
        &wine.grapes,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(query))
}

/// A vintage that does not parse as a year ("NV", free text) never
/// satisfies a bounded range.
fn vintage_year(wine: &Wine) -> Option<i32> {
    wine.vintage.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WineDetails;

    fn wine(name: &str, wine_type: WineType, vintage: &str, rating: u8) -> Wine {
        Wine::new(WineDetails {
            name: name.to_string(),
            producer: "Producer".to_string(),
            vintage: vintage.to_string(),
            wine_type,
            rating,
            ..Default::default()
        })
    }

    fn sample_collection() -> Vec<Wine> {
        vec![
            wine("Opus One", WineType::Red, "2015", 4),
            wine("Chardonnay X", WineType::White, "2020", 2),
        ]
    }

    #[test]
    fn empty_query_and_filters_match_everything() {
        let wines = sample_collection();
        let result = apply(wines.clone(), "", &WineFilters::default());
        assert_eq!(result, wines);
    }

    #[test]
    fn query_and_type_are_conjunctive() {
        // "o" appears in both names, but only one record is Red.
        let filters = WineFilters {
            types: vec![WineType::Red],
            ..Default::default()
        };
        let result = apply(sample_collection(), "o", &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Opus One");
    }

    #[test]
    fn query_is_case_insensitive_across_fields() {
        let mut wines = sample_collection();
        wines[1].region = "Burgundy".to_string();

        let by_name = apply(wines.clone(), "OPUS", &WineFilters::default());
        assert_eq!(by_name.len(), 1);

        let by_region = apply(wines, "burg", &WineFilters::default());
        assert_eq!(by_region.len(), 1);
        assert_eq!(by_region[0].name, "Chardonnay X");
    }

    #[test]
    fn query_matches_grapes_and_country() {
        let mut wines = sample_collection();
        wines[0].grapes = "Cabernet Sauvignon".to_string();
        wines[1].country = "France".to_string();

        assert_eq!(apply(wines.clone(), "cabernet", &WineFilters::default()).len(), 1);
        assert_eq!(apply(wines, "fran", &WineFilters::default()).len(), 1);
    }

    #[test]
    fn type_filter_allows_any_member_of_the_set() {
        let filters = WineFilters {
            types: vec![WineType::Red, WineType::White],
            ..Default::default()
        };
        assert_eq!(apply(sample_collection(), "", &filters).len(), 2);
    }

    #[test]
    fn year_bounds_narrow_the_range() {
        let filters = WineFilters {
            min_year: Some(2016),
            ..Default::default()
        };
        let result = apply(sample_collection(), "", &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Chardonnay X");

        let filters = WineFilters {
            min_year: Some(2010),
            max_year: Some(2016),
            ..Default::default()
        };
        let result = apply(sample_collection(), "", &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Opus One");
    }

    #[test]
    fn unparseable_vintage_is_excluded_under_any_bound() {
        let mut wines = sample_collection();
        wines.push(wine("Non-Vintage Fizz", WineType::Sparkling, "NV", 3));

        // No bound active: the NV record is included.
        assert_eq!(apply(wines.clone(), "", &WineFilters::default()).len(), 3);

        let min_only = WineFilters {
            min_year: Some(1900),
            ..Default::default()
        };
        assert!(apply(wines.clone(), "", &min_only)
            .iter()
            .all(|w| w.name != "Non-Vintage Fizz"));

        let max_only = WineFilters {
            max_year: Some(2100),
            ..Default::default()
        };
        assert!(apply(wines, "", &max_only)
            .iter()
            .all(|w| w.name != "Non-Vintage Fizz"));
    }

    #[test]
    fn zero_min_rating_disables_the_predicate() {
        let filters = WineFilters {
            min_rating: 0,
            ..Default::default()
        };
        assert_eq!(apply(sample_collection(), "", &filters).len(), 2);
    }

    #[test]
    fn min_rating_is_inclusive() {
        let filters = WineFilters {
            min_rating: 4,
            ..Default::default()
        };
        let result = apply(sample_collection(), "", &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].rating, 4);
    }

    #[test]
    fn is_active_reflects_each_predicate() {
        assert!(!WineFilters::default().is_active());
        assert!(WineFilters {
            types: vec![WineType::Red],
            ..Default::default()
        }
        .is_active());
        assert!(WineFilters {
            min_year: Some(2000),
            ..Default::default()
        }
        .is_active());
        assert!(WineFilters {
            min_rating: 1,
            ..Default::default()
        }
        .is_active());
    }
}
