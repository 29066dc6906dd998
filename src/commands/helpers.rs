use crate::error::{CellarError, Result};
use crate::model::WineDetails;

pub const MAX_RATING: u8 = 5;

/// Reject details that must not reach the store: name and producer are
/// required (the wine type is an enum and cannot be absent), and ratings
/// run 0–5. The store trusts its input once this passes.
pub fn validate_details(details: &WineDetails) -> Result<()> {
    if details.name.trim().is_empty() {
        return Err(CellarError::Validation("name is required".to_string()));
    }
    if details.producer.trim().is_empty() {
        return Err(CellarError::Validation("producer is required".to_string()));
    }
    if details.rating > MAX_RATING {
        return Err(CellarError::Validation(format!(
            "rating must be between 0 and {}",
            MAX_RATING
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures;

    #[test]
    fn accepts_minimal_details() {
        assert!(validate_details(&fixtures::sample_details("Ok")).is_ok());
    }

    #[test]
    fn rejects_blank_name() {
        let mut details = fixtures::sample_details("X");
        details.name = "   ".to_string();
        assert!(matches!(
            validate_details(&details),
            Err(CellarError::Validation(_))
        ));
    }

    #[test]
    fn rejects_blank_producer() {
        let mut details = fixtures::sample_details("X");
        details.producer = String::new();
        assert!(matches!(
            validate_details(&details),
            Err(CellarError::Validation(_))
        ));
    }

    #[test]
    fn rejects_rating_above_five() {
        let mut details = fixtures::sample_details("X");
        details.rating = 6;
        assert!(matches!(
            validate_details(&details),
            Err(CellarError::Validation(_))
        ));
    }

    #[test]
    fn rating_of_five_is_fine() {
        let mut details = fixtures::sample_details("X");
        details.rating = 5;
        assert!(validate_details(&details).is_ok());
    }
}
