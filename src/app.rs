use crate::catalog::{Catalog, MovieId, MovieRecord};
use crate::filter::{self, MovieFilter};
use crate::form::DraftForm;
use crate::links;
use crate::overlay::Overlay;
use crate::route::Route;
use ratatui::layout::Rect;
use tracing::{info, warn};

/// Which control has focus in the filter overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Title,
    Rating,
}

impl FilterField {
    pub fn toggle(self) -> Self {
        match self {
            Self::Title => Self::Rating,
            Self::Rating => Self::Title,
        }
    }
}

/// Rows used by header, filter bar, borders and status line in the list view.
pub const LIST_OVERHEAD: u16 = 8;
/// Rows taken by one movie card.
pub const CARD_HEIGHT: u16 = 3;

/// Main application state. Owns the catalog; everything else is view state.
pub struct App {
    pub catalog: Catalog,
    pub should_quit: bool,
    pub route: Route,
    pub help: Overlay,

    // List view state
    pub filter: MovieFilter,
    pub filter_overlay: Overlay,
    pub filter_focus: FilterField,
    pub list_selected: usize,
    pub page_size: usize,

    // Add-movie flow
    pub form: DraftForm,
    pub add_overlay: Overlay,

    // Detail view state
    pub trailer: Overlay,
    pub detail_scroll: u16,

    pub placeholder_poster: String,
    /// Terminal area of the last drawn frame, for mouse hit testing.
    pub viewport: Rect,
    pub status_msg: String,
}

impl App {
    pub fn new(catalog: Catalog, placeholder_poster: String) -> Self {
        let status_msg = format!("{} movies loaded", catalog.len());
        Self {
            catalog,
            should_quit: false,
            route: Route::Catalog,
            help: Overlay::new("help"),

            filter: MovieFilter::default(),
            filter_overlay: Overlay::new("filter"),
            filter_focus: FilterField::Title,
            list_selected: 0,
            page_size: 5,

            form: DraftForm::default(),
            add_overlay: Overlay::new("add-movie"),

            trailer: Overlay::new("trailer"),
            detail_scroll: 0,

            placeholder_poster,
            viewport: Rect::default(),
            status_msg,
        }
    }

    /// The filtered view of the catalog, derived from current state.
    pub fn visible(&self) -> Vec<&MovieRecord> {
        filter::apply(self.catalog.movies(), &self.filter)
    }

    pub fn selected_movie(&self) -> Option<&MovieRecord> {
        self.visible().get(self.list_selected).copied()
    }

    /// Movie addressed by the current route, if any.
    pub fn current_movie(&self) -> Option<&MovieRecord> {
        match &self.route {
            Route::Movie(id) => self.catalog.find(id),
            Route::Catalog => None,
        }
    }

    /// Update page size based on terminal height.
    pub fn update_page_size(&mut self, terminal_height: u16) {
        let rows = terminal_height.saturating_sub(LIST_OVERHEAD) / CARD_HEIGHT;
        self.page_size = usize::from(rows).max(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.list_selected = self.list_selected.min(len.saturating_sub(1));
    }

    pub fn list_next(&mut self) {
        if self.list_selected + 1 < self.visible().len() {
            self.list_selected += 1;
        }
    }

    pub fn list_prev(&mut self) {
        self.list_selected = self.list_selected.saturating_sub(1);
    }

    pub fn list_page_down(&mut self) {
        self.list_selected += self.page_size;
        self.clamp_selection();
    }

    pub fn list_page_up(&mut self) {
        self.list_selected = self.list_selected.saturating_sub(self.page_size);
    }

    pub fn list_first(&mut self) {
        self.list_selected = 0;
    }

    pub fn list_last(&mut self) {
        self.list_selected = self.visible().len().saturating_sub(1);
    }

    /// Move to a navigation address. Unknown movie ids are allowed and render as not found.
    pub fn navigate(&mut self, route: Route) {
        info!(route = %route, "navigate");
        if let Route::Movie(id) = &route {
            if self.catalog.find(id).is_none() {
                self.status_msg = format!("No movie with id {id}");
            } else {
                self.status_msg.clear();
            }
        }
        self.route = route;
        self.detail_scroll = 0;
        self.trailer.close();
    }

    /// Open the detail view for the selected card.
    pub fn open_selected(&mut self) {
        let id: Option<MovieId> = self.selected_movie().map(|m| m.id.clone());
        if let Some(id) = id {
            self.navigate(Route::Movie(id));
        }
    }

    pub fn back_to_list(&mut self) {
        self.navigate(Route::Catalog);
        self.clamp_selection();
        self.status_msg = format!("{} movies", self.visible().len());
    }

    // ── Filter ──

    fn filter_changed(&mut self) {
        self.clamp_selection();
        self.status_msg = format!(
            "{} movies found for {}",
            self.visible().len(),
            self.filter.describe()
        );
    }

    pub fn filter_push(&mut self, c: char) {
        self.filter.title.push(c);
        self.filter_changed();
    }

    pub fn filter_pop(&mut self) {
        self.filter.title.pop();
        self.filter_changed();
    }

    pub fn filter_raise_rating(&mut self) {
        self.filter.raise_rating();
        self.filter_changed();
    }

    pub fn filter_lower_rating(&mut self) {
        self.filter.lower_rating();
        self.filter_changed();
    }

    pub fn clear_filter(&mut self) {
        if self.filter.is_active() {
            self.filter.clear();
            self.filter_changed();
        }
    }

    // ── Add movie ──

    /// Validate the form and append the draft. Keeps the overlay open on error.
    pub fn submit_draft(&mut self) -> Option<MovieId> {
        match self.form.submit() {
            Ok(draft) => {
                let title = draft.title.clone();
                let id = self.catalog.append(draft);
                info!(id = %id, title = %title, "movie added");
                self.form.reset();
                self.add_overlay.close();
                self.clamp_selection();
                self.status_msg = format!("Added \"{}\"", title);
                Some(id)
            }
            Err(e) => {
                warn!(error = %e, "draft rejected");
                self.status_msg = e.to_string();
                self.form.set_error(e);
                None
            }
        }
    }

    // ── Detail / trailer ──

    pub fn watch_trailer(&mut self) {
        if self.current_movie().is_some() {
            self.trailer.open();
        }
    }

    pub fn play_trailer_externally(&mut self) {
        let Some(url) = self.current_movie().map(|m| m.trailer_url.clone()) else {
            return;
        };
        self.status_msg = if links::open_in_browser(&url) {
            format!("Opening: {}", url)
        } else {
            format!("Trailer: {} (no opener available)", url)
        };
    }

    pub fn copy_trailer_link(&mut self) {
        let Some(url) = self.current_movie().map(|m| m.trailer_url.clone()) else {
            return;
        };
        self.status_msg = if links::copy_to_clipboard(&url) {
            format!("Copied: {}", url)
        } else {
            format!("Link: {} (clipboard not available)", url)
        };
    }

    pub fn scroll_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn scroll_page_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(10);
    }

    pub fn scroll_page_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(10);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DEFAULT_PLACEHOLDER_POSTER;
    use crate::form::DraftForm;

    fn app() -> App {
        App::new(Catalog::seeded(), DEFAULT_PLACEHOLDER_POSTER.to_string())
    }

    fn titles(app: &App) -> Vec<String> {
        app.visible().iter().map(|m| m.title.clone()).collect()
    }

    #[test]
    fn test_new_app_shows_seed_catalog() {
        let app = app();
        assert_eq!(app.route, Route::Catalog);
        assert_eq!(app.visible().len(), 4);
        assert_eq!(app.status_msg, "4 movies loaded");
    }

    #[test]
    fn test_filter_typing_rederives_view() {
        let mut app = app();
        for c in "dark".chars() {
            app.filter_push(c);
        }
        assert_eq!(titles(&app), ["The Dark Knight"]);
        assert_eq!(app.status_msg, "1 movies found for title ~ \"dark\"");

        app.clear_filter();
        assert_eq!(app.visible().len(), 4);
    }

    #[test]
    fn test_rating_filter_clamps_selection() {
        let mut app = app();
        app.list_last();
        assert_eq!(app.list_selected, 3);
        for _ in 0..10 {
            app.filter_raise_rating();
        }
        assert_eq!(app.filter.min_rating, 5.0);
        assert!(app.visible().is_empty());
        assert_eq!(app.list_selected, 0);
        assert!(app.selected_movie().is_none());
    }

    #[test]
    fn test_list_navigation_bounds() {
        let mut app = app();
        app.list_prev();
        assert_eq!(app.list_selected, 0);
        for _ in 0..10 {
            app.list_next();
        }
        assert_eq!(app.list_selected, 3);
        app.page_size = 2;
        app.list_page_up();
        assert_eq!(app.list_selected, 1);
        app.list_page_down();
        app.list_page_down();
        assert_eq!(app.list_selected, 3);
        app.list_first();
        assert_eq!(app.list_selected, 0);
    }

    #[test]
    fn test_update_page_size() {
        let mut app = app();
        app.update_page_size(LIST_OVERHEAD + CARD_HEIGHT * 6);
        assert_eq!(app.page_size, 6);
        app.update_page_size(2);
        assert_eq!(app.page_size, 1);
    }

    #[test]
    fn test_open_selected_and_back() {
        let mut app = app();
        app.list_next();
        app.open_selected();
        assert_eq!(app.route, Route::Movie(MovieId::new("2")));
        assert_eq!(
            app.current_movie().map(|m| m.title.as_str()),
            Some("The Shawshank Redemption")
        );

        app.back_to_list();
        assert_eq!(app.route, Route::Catalog);
        assert!(app.current_movie().is_none());
    }

    #[test]
    fn test_navigate_to_unknown_id() {
        let mut app = app();
        app.navigate(Route::parse("/movie/does-not-exist").unwrap());
        assert!(app.current_movie().is_none());
        assert_eq!(app.catalog.len(), 4);
        assert_eq!(app.status_msg, "No movie with id does-not-exist");

        app.watch_trailer();
        assert!(!app.trailer.is_open());
    }

    #[test]
    fn test_submit_draft_appends_and_resets() {
        let mut app = app();
        app.add_overlay.open();
        app.form = DraftForm {
            title: "Test".to_string(),
            rating: "3.0".to_string(),
            poster_url: "https://example.com/p.jpg".to_string(),
            trailer_url: "https://www.youtube.com/embed/t".to_string(),
            description: "short".to_string(),
            long_description: "long".to_string(),
            ..DraftForm::default()
        };

        let id = app.submit_draft().expect("draft should be accepted");
        assert_eq!(app.catalog.len(), 5);
        assert!(!app.add_overlay.is_open());
        assert!(app.form.title.is_empty());
        assert_eq!(app.status_msg, "Added \"Test\"");

        app.navigate(Route::Movie(id));
        assert_eq!(app.current_movie().map(|m| m.title.as_str()), Some("Test"));
    }

    #[test]
    fn test_submit_invalid_draft_keeps_overlay_open() {
        let mut app = app();
        app.add_overlay.open();
        app.form.title = "Only a title".to_string();

        assert!(app.submit_draft().is_none());
        assert_eq!(app.catalog.len(), 4);
        assert!(app.add_overlay.is_open());
        assert!(app.form.error.is_some());
        assert_eq!(app.form.title, "Only a title");
    }

    #[test]
    fn test_navigation_closes_trailer() {
        let mut app = app();
        app.navigate(Route::Movie(MovieId::new("3")));
        app.scroll_page_down();
        app.watch_trailer();
        assert!(app.trailer.is_open());

        app.back_to_list();
        assert!(!app.trailer.is_open());
        assert_eq!(app.detail_scroll, 0);
    }
}
