//! In-memory text filtering for event searches.

use crate::store::EventSnapshot;

/// Conjunction of case-insensitive contains filters over the text fields
/// of an event. Omitted or empty fields impose no constraint; quotes and
/// other punctuation in a filter value match literally.
#[derive(Debug, Default)]
pub struct TextFilter {
    title: Option<String>,
    location: Option<String>,
    notes: Option<String>,
}

impl TextFilter {
    pub fn new(title: Option<String>, location: Option<String>, notes: Option<String>) -> Self {
        TextFilter {
            title: needle(title),
            location: needle(location),
            notes: needle(notes),
        }
    }

    /// True when every supplied filter matches; an event without a field
    /// cannot match a filter on that field.
    pub fn matches_event(&self, event: &EventSnapshot) -> bool {
        contains(self.title.as_deref(), Some(event.title.as_str()))
            && contains(self.location.as_deref(), event.location.as_deref())
            && contains(self.notes.as_deref(), event.notes.as_deref())
    }
}

fn needle(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(|v| v.to_lowercase())
}

fn contains(needle: Option<&str>, haystack: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(needle) => haystack
            .map(|haystack| haystack.to_lowercase().contains(needle))
            .unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(title: &str, location: Option<&str>, notes: Option<&str>) -> EventSnapshot {
        EventSnapshot {
            id: "id".to_string(),
            title: title.to_string(),
            location: location.map(str::to_string),
            notes: notes.map(str::to_string),
        }
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let filter = TextFilter::new(Some("lunch".to_string()), Some("cafe".to_string()), None);
        assert!(filter.matches_event(&event("Team Lunch", Some("Blue Cafe"), None)));
        assert!(!filter.matches_event(&event("Team Lunch", Some("Office"), None)));
        assert!(!filter.matches_event(&event("Standup", Some("Blue Cafe"), None)));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let filter = TextFilter::new(Some("LUNCH".to_string()), None, None);
        assert!(filter.matches_event(&event("lunch with Sam", None, None)));
    }

    #[test]
    fn test_empty_fields_impose_no_constraint() {
        let filter = TextFilter::new(Some(String::new()), None, Some(String::new()));
        assert!(filter.matches_event(&event("anything", None, None)));
    }

    #[test]
    fn test_quotes_match_literally() {
        let filter = TextFilter::new(Some("O'Brien".to_string()), None, None);
        assert!(filter.matches_event(&event("Dinner with O'Brien", None, None)));
        assert!(!filter.matches_event(&event("Dinner with OBrien", None, None)));
    }

    #[test]
    fn test_missing_event_field_fails_a_filter_on_it() {
        let filter = TextFilter::new(None, Some("cafe".to_string()), None);
        assert!(!filter.matches_event(&event("Lunch", None, None)));
    }
}
