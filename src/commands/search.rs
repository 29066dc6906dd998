use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::{self, WineFilters};
use crate::store::{StorageBackend, WineStore};

/// Fetch the full collection once, then narrow it in memory. Results keep
/// storage order; the browse screen never re-sorts matches.
pub fn run<B: StorageBackend>(
    store: &WineStore<B>,
    query: &str,
    filters: &WineFilters,
) -> Result<CmdResult> {
    let wines = store.get_all();
    let matched = filter::apply(wines, query, filters);
    Ok(CmdResult::default().with_listed_wines(matched))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::{WineDetails, WineType};
    use crate::store::memory::MemBackend;

    fn seeded_store() -> WineStore<MemBackend> {
        let store = WineStore::new(MemBackend::new());
        add::run(
            &store,
            WineDetails {
                name: "Opus One".into(),
                producer: "Opus One Winery".into(),
                vintage: "2015".into(),
                wine_type: WineType::Red,
                rating: 4,
                ..Default::default()
            },
        )
        .unwrap();
        add::run(
            &store,
            WineDetails {
                name: "Chardonnay X".into(),
                producer: "Maison X".into(),
                vintage: "2020".into(),
                wine_type: WineType::White,
                rating: 2,
                ..Default::default()
            },
        )
        .unwrap();
        store
    }

    #[test]
    fn no_query_and_no_filters_returns_the_whole_collection() {
        let store = seeded_store();
        let result = run(&store, "", &WineFilters::default()).unwrap();
        assert_eq!(result.listed_wines.len(), 2);
    }

    #[test]
    fn query_and_type_filter_combine_conjunctively() {
        let store = seeded_store();
        let filters = WineFilters {
            types: vec![WineType::Red],
            ..Default::default()
        };
        let result = run(&store, "o", &filters).unwrap();
        assert_eq!(result.listed_wines.len(), 1);
        assert_eq!(result.listed_wines[0].name, "Opus One");
    }

    #[test]
    fn empty_store_searches_to_nothing() {
        let store: WineStore<MemBackend> = WineStore::new(MemBackend::new());
        let result = run(&store, "anything", &WineFilters::default()).unwrap();
        assert!(result.listed_wines.is_empty());
    }
}
