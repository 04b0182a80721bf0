use dioxus::prelude::*;

use crate::ui::styles::pagination_button_style;
use crate::usecase::services::grid_state::GridState;

const PAGE_BUTTONS: usize = 5;

/// Page numbers around the current page, at most `width` of them.
pub fn page_window(page_index: usize, page_count: usize, width: usize) -> Vec<usize> {
    let width = width.max(1).min(page_count);
    let start = page_index
        .saturating_sub(width / 2)
        .min(page_count.saturating_sub(width));
    (start..start + width).collect()
}

pub fn showing_label(page_index: usize, page_size: usize, total: usize) -> String {
    if total == 0 {
        return "Showing 0 of 0".to_string();
    }
    let first = page_index * page_size + 1;
    let last = ((page_index + 1) * page_size).min(total);
    format!("Showing {first}-{last} of {total}")
}

#[component]
pub fn PaginationBar(mut grid: Signal<GridState>) -> Element {
    let (page_index, page_count, page_size, total) = {
        let state = grid.read();
        let adapter = state.adapter();
        (
            adapter.page_index(),
            adapter.page_count(),
            adapter.page_size(),
            adapter.visible_row_count(),
        )
    };
    let last = page_count - 1;
    let at_start = page_index == 0;
    let at_end = page_index >= last;
    let label = showing_label(page_index, page_size, total);

    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; gap: 8px;",
            span { style: "color: #555; font-size: 13px;", "{label}" }
            div {
                style: "display: flex; gap: 4px;",
                button {
                    style: pagination_button_style(false, at_start),
                    disabled: at_start,
                    onclick: move |_| grid.write().set_page(0),
                    "«"
                }
                button {
                    style: pagination_button_style(false, at_start),
                    disabled: at_start,
                    onclick: move |_| grid.write().set_page(page_index.saturating_sub(1)),
                    "‹"
                }
                {page_window(page_index, page_count, PAGE_BUTTONS).into_iter().map(|page| {
                    let current = page == page_index;
                    rsx!(
                        button {
                            key: "{page}",
                            style: pagination_button_style(current, false),
                            onclick: move |_| grid.write().set_page(page),
                            "{page + 1}"
                        }
                    )
                })}
                button {
                    style: pagination_button_style(false, at_end),
                    disabled: at_end,
                    onclick: move |_| grid.write().set_page(page_index + 1),
                    "›"
                }
                button {
                    style: pagination_button_style(false, at_end),
                    disabled: at_end,
                    onclick: move |_| grid.write().set_page(last),
                    "»"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_centres_on_current_page_and_stays_in_range() {
        assert_eq!(page_window(0, 1, 5), vec![0]);
        assert_eq!(page_window(0, 10, 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(9, 10, 5), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn showing_label_clamps_the_last_page() {
        assert_eq!(showing_label(0, 10, 0), "Showing 0 of 0");
        assert_eq!(showing_label(0, 10, 23), "Showing 1-10 of 23");
        assert_eq!(showing_label(2, 10, 23), "Showing 21-23 of 23");
    }
}
