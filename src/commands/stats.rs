use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Wine, WineType};
use crate::store::{StorageBackend, WineStore};
use serde::Serialize;

/// Collection breakdown shown on the profile screen: counts per style
/// (Dessert and Fortified grouped as "other") and the average rating,
/// rounded to one decimal.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CollectionStats {
    pub total: usize,
    pub red: usize,
    pub white: usize,
    pub rose: usize,
    pub sparkling: usize,
    pub other: usize,
    pub average_rating: f64,
}

pub fn run<B: StorageBackend>(store: &WineStore<B>) -> Result<CmdResult> {
    let wines = store.get_all();
    Ok(CmdResult {
        stats: Some(tally(&wines)),
        ..Default::default()
    })
}

pub fn tally(wines: &[Wine]) -> CollectionStats {
    let mut stats = CollectionStats {
        total: wines.len(),
        ..Default::default()
    };

    for wine in wines {
        match wine.wine_type {
            WineType::Red => stats.red += 1,
            WineType::White => stats.white += 1,
            WineType::Rose => stats.rose += 1,
            WineType::Sparkling => stats.sparkling += 1,
            WineType::Dessert | WineType::Fortified => stats.other += 1,
        }
    }

    if !wines.is_empty() {
        let total_rating: u32 = wines.iter().map(|wine| wine.rating as u32).sum();
        let average = total_rating as f64 / wines.len() as f64;
        stats.average_rating = (average * 10.0).round() / 10.0;
    }

    stats
}
