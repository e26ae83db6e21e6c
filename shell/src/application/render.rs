use std::fmt::Write as _;

use food_finder_core::domain::workflow::{
    entities::{DisplayedFood, Phase},
    services::SelectionWorkflow,
};

/// Text view of the search box, dropdown and error dialog.
pub fn render_search(workflow: &SelectionWorkflow) -> String {
    let mut out = String::new();

    match workflow.phase() {
        Phase::LoadingList { query, .. } => {
            let _ = writeln!(out, "searching \"{query}\"... (input disabled)");
        }
        Phase::LoadingDetail { index, .. } => {
            let title = workflow
                .suggestions()
                .get(*index)
                .map(|f| f.title.as_str())
                .unwrap_or_default();
            let _ = writeln!(out, "fetching \"{title}\"... (input disabled)");
        }
        Phase::Error { message } => {
            let _ = writeln!(out, "Sorry! {message}");
            let _ = writeln!(out, "(:close to dismiss)");
        }
        Phase::NoMatches => {
            let _ = writeln!(out, "no suggestions for \"{}\"", workflow.query().as_str());
        }
        Phase::Idle | Phase::ShowingSuggestions => {}
    }

    if workflow.suggestions_visible() && !workflow.is_loading() {
        for (i, food) in workflow.suggestions().iter().enumerate() {
            let marker = if i == workflow.highlighted() { '>' } else { ' ' };
            let _ = writeln!(out, "{marker} {:>2}. {}", i + 1, food.title);
        }
    }

    out
}

/// Text view of the image card.
pub fn render_food(food: &DisplayedFood) -> String {
    let size = food.image_bytes().map(|b| b.len()).unwrap_or_default();
    format!(
        "[#{}] {} ({} bytes, fetched {}) - :save to download\n",
        food.generation,
        food.title,
        size,
        food.fetched_at.format("%H:%M:%S")
    )
}

#[cfg(test)]
mod tests {
    use food_finder_core::domain::{
        common::entities::app_errors::CoreError,
        food::entities::{FoodImage, FoodRecord},
    };

    use super::*;

    fn searched(query: &str, titles: &[&str]) -> SelectionWorkflow {
        let mut workflow = SelectionWorkflow::new();
        let command = workflow.on_query_changed(query).unwrap();
        let listing = titles
            .iter()
            .enumerate()
            .map(|(i, t)| FoodRecord::new(i.to_string(), *t))
            .collect();
        workflow.on_list_loaded(command.ticket(), Ok(listing));
        workflow
    }

    #[test]
    fn test_renders_suggestions_with_highlight() {
        let mut workflow = searched("pi", &["Pizza", "Pie", "Soup"]);
        workflow.highlight(1);

        assert_eq!(render_search(&workflow), "   1. Pizza\n>  2. Pie\n");

        workflow.hide_dropdown();
        assert_eq!(render_search(&workflow), "");
    }

    #[test]
    fn test_renders_no_matches_and_error() {
        let mut workflow = searched("sushi", &["Pizza"]);
        assert_eq!(render_search(&workflow), "no suggestions for \"sushi\"\n");

        workflow.press_enter();
        assert!(render_search(&workflow).starts_with("Sorry! There is no food"));
    }

    #[test]
    fn test_renders_loading_and_displayed_food() {
        let mut workflow = searched("pi", &["Pizza"]);
        let command = workflow.press_enter().unwrap();
        assert_eq!(
            render_search(&workflow),
            "fetching \"Pizza\"... (input disabled)\n"
        );

        workflow.on_detail_loaded(
            command.ticket(),
            Ok::<_, CoreError>(FoodRecord::new("0", "Pizza").with_image(FoodImage::new(&b"abcd"[..]))),
        );
        let food = workflow.displayed().unwrap();
        let card = render_food(food);
        assert!(card.starts_with("[#1] Pizza (4 bytes, fetched "));
    }
}
