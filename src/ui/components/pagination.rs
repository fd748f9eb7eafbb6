//! Pagination control.
//!
//! Computes the page count from the total item count and renders a
//! Previous / numbered pages / Next strip. Navigation is surfaced as a
//! [`PaginationAction`]; the requested page number is not validated here,
//! the host decides what to do with it.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::theme;

/// Number of pages in a paginated list, by ceiling division.
///
/// Zero items (or a zero page size) means zero pages.
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    (total + per_page - 1) / per_page
}

/// Action resulting from pagination input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationAction {
    /// Navigate to the given page (1-based).
    Page(usize),
}

/// Pagination state: what is known about the paginated list.
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    /// Total number of items.
    pub total: usize,
    /// Items per page.
    pub items_per_page: usize,
    /// The active page, 1-based.
    pub active_page: usize,
}

impl Pagination {
    /// Create pagination state.
    pub fn new(total: usize, items_per_page: usize, active_page: usize) -> Self {
        Self {
            total,
            items_per_page,
            active_page,
        }
    }

    /// The number of pages.
    pub fn page_count(&self) -> usize {
        page_count(self.total, self.items_per_page)
    }

    /// Handle navigation keys.
    ///
    /// Left/h requests the previous page, right/l the next, and a digit
    /// jumps straight to that page. Requests beyond the first page clamp at
    /// 1; requests beyond the last page are passed through as-is (an
    /// out-of-range page renders as an empty slice, which is defined
    /// behavior, not an error).
    pub fn handle_input(&self, key: KeyEvent) -> Option<PaginationAction> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                if self.active_page > 1 {
                    Some(PaginationAction::Page(self.active_page - 1))
                } else {
                    None
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.active_page < self.page_count() {
                    Some(PaginationAction::Page(self.active_page + 1))
                } else {
                    None
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                Some(PaginationAction::Page(c as usize - '0' as usize))
            }
            _ => None,
        }
    }

    /// Render the pagination strip.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let pages = self.page_count();
        if pages == 0 {
            return;
        }

        let mut spans: Vec<Span> = Vec::new();
        let nav_style = Style::default().fg(t.dim);

        spans.push(Span::styled("◀ Prev ", nav_style));
        for page in 1..=pages {
            let label = format!(" {} ", page);
            if page == self.active_page {
                spans.push(Span::styled(
                    label,
                    Style::default()
                        .fg(t.accent)
                        .add_modifier(Modifier::REVERSED),
                ));
            } else {
                spans.push(Span::styled(label, Style::default().fg(t.fg)));
            }
        }
        spans.push(Span::styled(" Next ▶", nav_style));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_page_count_exact_division() {
        assert_eq!(page_count(20, 10), 2);
    }

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(21, 10), 3);
        assert_eq!(page_count(1, 10), 1);
    }

    #[test]
    fn test_page_count_empty() {
        assert_eq!(page_count(0, 10), 0);
    }

    #[test]
    fn test_page_count_zero_per_page() {
        assert_eq!(page_count(20, 0), 0);
    }

    #[test]
    fn test_next_page() {
        let pagination = Pagination::new(30, 10, 1);
        assert_eq!(
            pagination.handle_input(key(KeyCode::Right)),
            Some(PaginationAction::Page(2))
        );
    }

    #[test]
    fn test_prev_page_clamps_at_first() {
        let pagination = Pagination::new(30, 10, 1);
        assert_eq!(pagination.handle_input(key(KeyCode::Left)), None);
    }

    #[test]
    fn test_next_page_stops_at_last() {
        let pagination = Pagination::new(30, 10, 3);
        assert_eq!(pagination.handle_input(key(KeyCode::Right)), None);
    }

    #[test]
    fn test_digit_jump_is_unvalidated() {
        let pagination = Pagination::new(30, 10, 1);
        // Page 9 does not exist; the request is passed through regardless
        assert_eq!(
            pagination.handle_input(key(KeyCode::Char('9'))),
            Some(PaginationAction::Page(9))
        );
    }

    #[test]
    fn test_vim_style_navigation() {
        let pagination = Pagination::new(30, 10, 2);
        assert_eq!(
            pagination.handle_input(key(KeyCode::Char('h'))),
            Some(PaginationAction::Page(1))
        );
        assert_eq!(
            pagination.handle_input(key(KeyCode::Char('l'))),
            Some(PaginationAction::Page(3))
        );
    }
}
