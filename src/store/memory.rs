use super::StorageBackend;
use crate::error::{CellarError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the store is
/// single-threaded; this keeps `StorageBackend` at `&self` without the
/// overhead of a lock.
pub struct MemBackend {
    entries: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write-error simulation for testing error propagation.
    /// Reads keep working so soft-fail and hard-fail paths can be
    /// exercised independently.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(CellarError::Storage("Simulated write error".to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(CellarError::Storage("Simulated write error".to_string()));
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{Wine, WineDetails, WineType};

    /// A minimal valid record with the given name.
    pub fn sample_wine(name: &str) -> Wine {
        Wine::new(sample_details(name))
    }

    pub fn sample_details(name: &str) -> WineDetails {
        WineDetails {
            name: name.to_string(),
            producer: format!("{} Estate", name),
            wine_type: WineType::Red,
            ..Default::default()
        }
    }

    /// A fully populated record, for whole-record replacement tests.
    pub fn full_details(name: &str) -> WineDetails {
        WineDetails {
            name: name.to_string(),
            producer: format!("{} Winery", name),
            vintage: "2015".to_string(),
            wine_type: WineType::Red,
            region: "Napa Valley".to_string(),
            country: "USA".to_string(),
            grapes: "Cabernet Sauvignon, Merlot".to_string(),
            rating: 4,
            price: "$389".to_string(),
            purchase_date: "2024-02-11".to_string(),
            notes: "Decant for an hour.".to_string(),
            image_uri: Some("file:///photos/bottle.jpg".to_string()),
        }
    }
}
