use regex::RegexBuilder;

use crate::domain::food::entities::FoodRecord;

/// Keep the records whose title contains `query`, ignoring case.
///
/// The query is matched literally anywhere in the title and the listing order
/// is preserved. An empty query yields no suggestions at all: suggestions only
/// make sense once something has been typed.
pub fn filter_suggestions(listing: &[FoodRecord], query: &str) -> Vec<FoodRecord> {
    if query.is_empty() {
        return Vec::new();
    }

    let matcher = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(matcher) => matcher,
        Err(e) => {
            // An escaped literal only fails to compile when it blows the size limit.
            tracing::warn!(error = %e, "suggestion query too large to match");
            return Vec::new();
        }
    };

    listing
        .iter()
        .filter(|food| matcher.is_match(&food.title))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(titles: &[&str]) -> Vec<FoodRecord> {
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| FoodRecord::new(format!("id-{i}"), *title))
            .collect()
    }

    fn titles(records: &[FoodRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_piz_matches_pizza_only() {
        let foods = listing(&["Pizza", "Salad"]);
        let matches = filter_suggestions(&foods, "piz");
        assert_eq!(titles(&matches), vec!["Pizza"]);
        assert_eq!(matches[0].id.as_str(), "id-0");
    }

    #[test]
    fn test_empty_query_yields_nothing() {
        let foods = listing(&["Pizza", "Salad", "Pasta"]);
        assert!(filter_suggestions(&foods, "").is_empty());
    }

    #[test]
    fn test_match_is_unanchored_case_insensitive_and_ordered() {
        let foods = listing(&["Beef Stew", "Apple PIE", "Stewed pears", "Toast"]);
        assert_eq!(
            titles(&filter_suggestions(&foods, "STEW")),
            vec!["Beef Stew", "Stewed pears"]
        );
        assert_eq!(titles(&filter_suggestions(&foods, "pie")), vec!["Apple PIE"]);
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let foods = listing(&["Mac (and) cheese", "Mac and cheese", "C++ cake"]);
        assert_eq!(
            titles(&filter_suggestions(&foods, "(and)")),
            vec!["Mac (and) cheese"]
        );
        assert_eq!(titles(&filter_suggestions(&foods, "c++")), vec!["C++ cake"]);
        assert!(filter_suggestions(&foods, ".*").is_empty());
    }

    #[test]
    fn test_every_returned_title_contains_query() {
        let foods = listing(&["Ramen", "Rambutan", "Pho", "Crème brûlée", "ram"]);
        for query in ["ra", "AM", "m", "brû", "x"] {
            let lowered = query.to_lowercase();
            let matches = filter_suggestions(&foods, query);
            assert!(
                matches
                    .iter()
                    .all(|f| f.title.to_lowercase().contains(&lowered))
            );
            let expected = foods
                .iter()
                .filter(|f| f.title.to_lowercase().contains(&lowered))
                .count();
            assert_eq!(matches.len(), expected);
        }
    }
}
