//! CSS selectors for the target site's search UI.
//!
//! Centralising these keeps the stages free of page-structure knowledge:
//! when the site ships a redesign, this file is the blast radius. Selectors
//! prefer `data-testid` hooks over generated class names wherever the site
//! provides them.

/// Accept button on the cookie/privacy consent prompt.
pub const CONSENT_ACCEPT: &str = "button[data-testid=\"GDPR-accept\"]";

/// Magnifying-glass toggle that reveals the search input.
pub const SEARCH_BUTTON: &str = "button[data-testid=\"search-button\"]";

/// Search text input revealed by the toggle.
pub const SEARCH_INPUT: &str = "input[data-testid=\"search-input\"]";

/// Container holding the result listing.
pub const SEARCH_RESULTS: &str = "[data-testid=\"search-results\"]";

/// All result items, in display order.
pub const RESULT_ITEMS: &str = "[data-testid=\"search-results\"] > li";

/// Date-type dropdown toggle.
pub const DATE_TYPE_BUTTON: &str = "button[data-testid=\"search-date-dropdown-a\"]";

/// Option list revealed by the date-type dropdown.
pub const DATE_TYPE_OPTION_LIST: &str = "[data-testid=\"search-date-dropdown-list\"]";

/// Start input of the custom date range.
pub const START_DATE_INPUT: &str = "#startDate";

/// End input of the custom date range.
pub const END_DATE_INPUT: &str = "#endDate";

/// Sort-order `<select>`; options are addressed by value, not label.
pub const SORT_SELECT: &str = "select[data-testid=\"SearchForm-sortBy\"]";

/// Section filter dropdown toggle.
pub const SECTION_BUTTON: &str = "button[data-testid=\"search-multiselect-button\"]";

/// Option list revealed by the section dropdown.
pub const SECTION_OPTION_LIST: &str = "[data-testid=\"multi-select-dropdown-list\"]";

/// "Show more" pagination control under the listing.
pub const SHOW_MORE_BUTTON: &str = "button[data-testid=\"search-show-more-button\"]";

/// Displayed publication date inside a result item.
pub const ITEM_DATE: &str = "[data-testid=\"todays-date\"]";

/// Headline element inside a result item.
pub const ITEM_TITLE: &str = "h4";

/// Summary paragraph inside a result item.
pub const ITEM_DESCRIPTION: &str = "p";

/// Thumbnail image inside a result item.
pub const ITEM_IMAGE: &str = "img";

/// Selector for the `index`-th result item (1-based, CSS `:nth-child`).
pub fn result_item(index: usize) -> String {
    format!("{RESULT_ITEMS}:nth-child({index})")
}

/// Selector for all options of a dropdown list.
pub fn option_items(list: &str) -> String {
    format!("{list} li")
}

/// Selector for the `index`-th option of a dropdown list (1-based).
pub fn option_item(list: &str, index: usize) -> String {
    format!("{list} li:nth-child({index})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_item_is_nth_child_addressed() {
        assert_eq!(
            result_item(3),
            "[data-testid=\"search-results\"] > li:nth-child(3)"
        );
    }

    #[test]
    fn test_option_selectors() {
        assert_eq!(option_items("ul.sections"), "ul.sections li");
        assert_eq!(option_item("ul.sections", 1), "ul.sections li:nth-child(1)");
    }
}
