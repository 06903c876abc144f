//! City registry: the set of cities the dashboard can compare.

use crate::db::CachedStore;

/// Shown when no source contains any city, so the picker is never
/// empty against a not-yet-populated store. The literal order is kept;
/// derived lists are sorted, this one is not.
pub const FALLBACK_CITIES: [&str; 4] = ["Nairobi", "Sydney", "New York", "London"];

/// All cities observed across the three sources, sorted ascending and
/// deduplicated; the fixed fallback list when the union is empty.
pub async fn available_cities(store: &CachedStore) -> Vec<String> {
    let cities = store.cities().await;
    if cities.is_empty() {
        FALLBACK_CITIES.iter().map(|c| c.to_string()).collect()
    } else {
        cities.as_ref().clone()
    }
}

/// Candidates for the second city: everything except the first.
pub fn candidates_for_second<'a>(cities: &'a [String], first: &str) -> Vec<&'a str> {
    cities
        .iter()
        .filter(|city| city.as_str() != first)
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_city_excludes_the_first() {
        let cities = vec![
            "London".to_string(),
            "Nairobi".to_string(),
            "Sydney".to_string(),
        ];
        assert_eq!(
            candidates_for_second(&cities, "Nairobi"),
            vec!["London", "Sydney"]
        );
    }

    #[test]
    fn second_city_candidates_empty_with_one_city() {
        let cities = vec!["Nairobi".to_string()];
        assert!(candidates_for_second(&cities, "Nairobi").is_empty());
    }
}
