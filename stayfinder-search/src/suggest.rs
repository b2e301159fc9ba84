use stayfinder_core::Hotel;

/// Destination autocomplete. Matches the typed prefix against city names
/// and hotel names, case-insensitively, deduplicating while preserving the
/// order entries first appear in the catalog.
pub fn suggest_destinations(hotels: &[Hotel], input: &str, limit: usize) -> Vec<String> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut suggestions: Vec<String> = Vec::new();
    let mut push = |candidate: &str| {
        if suggestions.len() < limit
            && candidate.to_lowercase().contains(&needle)
            && !suggestions.iter().any(|s| s == candidate)
        {
            suggestions.push(candidate.to_string());
        }
    };

    for hotel in hotels {
        push(&hotel.location.city);
        push(&hotel.name);
    }

    suggestions
}
