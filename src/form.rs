use crate::catalog::{MovieDraft, is_http_url};
use crate::filter::MAX_RATING;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

/// Fields of the add-movie form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Rating,
    PosterUrl,
    TrailerUrl,
    Description,
    LongDescription,
}

impl DraftField {
    pub const ALL: [DraftField; 6] = [
        Self::Title,
        Self::Rating,
        Self::PosterUrl,
        Self::TrailerUrl,
        Self::Description,
        Self::LongDescription,
    ];

    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Rating,
            Self::Rating => Self::PosterUrl,
            Self::PosterUrl => Self::TrailerUrl,
            Self::TrailerUrl => Self::Description,
            Self::Description => Self::LongDescription,
            Self::LongDescription => Self::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::LongDescription,
            Self::Rating => Self::Title,
            Self::PosterUrl => Self::Rating,
            Self::TrailerUrl => Self::PosterUrl,
            Self::Description => Self::TrailerUrl,
            Self::LongDescription => Self::Description,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Rating => "Rating",
            Self::PosterUrl => "Poster URL",
            Self::TrailerUrl => "Trailer URL (YouTube Embed)",
            Self::Description => "Short Description",
            Self::LongDescription => "Full Description",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Title => "Movie title",
            Self::Rating => "0.0 - 5.0",
            Self::PosterUrl => "https://...",
            Self::TrailerUrl => "https://www.youtube.com/embed/...",
            Self::Description => "Brief movie description...",
            Self::LongDescription => "Detailed movie description...",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DraftError {
    #[error("{} is required", .0.label())]
    Missing(DraftField),

    #[error("rating must be a number, got \"{0}\"")]
    InvalidRating(String),

    #[error("rating must be between 0 and 5, got {0}")]
    RatingOutOfRange(f64),

    #[error("{} must be an http(s) URL", .0.label())]
    InvalidUrl(DraftField),
}

impl DraftError {
    /// The field the user has to fix.
    pub fn field(&self) -> DraftField {
        match self {
            Self::Missing(field) | Self::InvalidUrl(field) => *field,
            Self::InvalidRating(_) | Self::RatingOutOfRange(_) => DraftField::Rating,
        }
    }
}

/// What the user asked the form to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Submit,
    Cancel,
}

/// Text state of the add-movie form.
#[derive(Debug, Clone)]
pub struct DraftForm {
    pub title: String,
    pub rating: String,
    pub poster_url: String,
    pub trailer_url: String,
    pub description: String,
    pub long_description: String,
    pub focus: DraftField,
    pub error: Option<DraftError>,
}

impl Default for DraftForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            rating: "0".to_string(),
            poster_url: String::new(),
            trailer_url: String::new(),
            description: String::new(),
            long_description: String::new(),
            focus: DraftField::Title,
            error: None,
        }
    }
}

impl DraftForm {
    pub fn value(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Rating => &self.rating,
            DraftField::PosterUrl => &self.poster_url,
            DraftField::TrailerUrl => &self.trailer_url,
            DraftField::Description => &self.description,
            DraftField::LongDescription => &self.long_description,
        }
    }

    fn value_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Title => &mut self.title,
            DraftField::Rating => &mut self.rating,
            DraftField::PosterUrl => &mut self.poster_url,
            DraftField::TrailerUrl => &mut self.trailer_url,
            DraftField::Description => &mut self.description,
            DraftField::LongDescription => &mut self.long_description,
        }
    }

    /// Handle keyboard input. Returns an action when the user submits or cancels.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FormAction> {
        match key.code {
            KeyCode::Esc => Some(FormAction::Cancel),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(FormAction::Submit)
            }
            KeyCode::Enter if self.focus == DraftField::LongDescription => Some(FormAction::Submit),
            KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                None
            }
            KeyCode::Backspace => {
                self.value_mut(self.focus).pop();
                self.error = None;
                None
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
            KeyCode::Char(c) => {
                self.value_mut(self.focus).push(c);
                self.error = None;
                None
            }
            _ => None,
        }
    }

    /// Parse the current field values into a draft.
    pub fn submit(&self) -> Result<MovieDraft, DraftError> {
        let required = |field: DraftField| -> Result<String, DraftError> {
            let value = self.value(field).trim();
            if value.is_empty() {
                Err(DraftError::Missing(field))
            } else {
                Ok(value.to_string())
            }
        };
        let url = |field: DraftField| -> Result<String, DraftError> {
            let value = required(field)?;
            if is_http_url(&value) {
                Ok(value)
            } else {
                Err(DraftError::InvalidUrl(field))
            }
        };

        let title = required(DraftField::Title)?;
        let rating = parse_rating(&required(DraftField::Rating)?)?;
        let poster_url = url(DraftField::PosterUrl)?;
        let trailer_url = url(DraftField::TrailerUrl)?;
        let description = required(DraftField::Description)?;
        let long_description = required(DraftField::LongDescription)?;

        Ok(MovieDraft {
            title,
            description,
            long_description,
            poster_url,
            trailer_url,
            rating,
        })
    }

    /// Record a failed submission and move focus to the offending field.
    pub fn set_error(&mut self, error: DraftError) {
        self.focus = error.field();
        self.error = Some(error);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn parse_rating(raw: &str) -> Result<f64, DraftError> {
    let rating: f64 = raw
        .parse()
        .map_err(|_| DraftError::InvalidRating(raw.to_string()))?;
    if !rating.is_finite() {
        return Err(DraftError::InvalidRating(raw.to_string()));
    }
    if !(0.0..=MAX_RATING).contains(&rating) {
        return Err(DraftError::RatingOutOfRange(rating));
    }
    Ok(rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> DraftForm {
        DraftForm {
            title: "Test".to_string(),
            rating: "3.0".to_string(),
            poster_url: "https://example.com/p.jpg".to_string(),
            trailer_url: "https://www.youtube.com/embed/abc".to_string(),
            description: "short".to_string(),
            long_description: "long".to_string(),
            ..DraftForm::default()
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_submit_parses_draft() {
        let draft = filled().submit().unwrap();
        assert_eq!(draft.title, "Test");
        assert_eq!(draft.rating, 3.0);
        assert_eq!(draft.long_description, "long");
    }

    #[test]
    fn test_missing_field() {
        let mut form = filled();
        form.description = "   ".to_string();
        assert_eq!(form.submit(), Err(DraftError::Missing(DraftField::Description)));
    }

    #[test]
    fn test_rating_errors() {
        let mut form = filled();
        form.rating = "abc".to_string();
        assert_eq!(form.submit(), Err(DraftError::InvalidRating("abc".to_string())));

        form.rating = "NaN".to_string();
        assert!(matches!(form.submit(), Err(DraftError::InvalidRating(_))));

        form.rating = "7.5".to_string();
        assert_eq!(form.submit(), Err(DraftError::RatingOutOfRange(7.5)));

        form.rating = "5".to_string();
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_url_validation() {
        let mut form = filled();
        form.trailer_url = "youtube.com/embed/abc".to_string();
        assert_eq!(form.submit(), Err(DraftError::InvalidUrl(DraftField::TrailerUrl)));
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = DraftForm::default();
        for c in "Up".chars() {
            assert!(form.handle_key(key(KeyCode::Char(c))).is_none());
        }
        form.handle_key(key(KeyCode::Tab));
        form.handle_key(key(KeyCode::Backspace));
        form.handle_key(key(KeyCode::Char('4')));
        assert_eq!(form.title, "Up");
        assert_eq!(form.rating, "4");
        assert_eq!(form.focus, DraftField::PosterUrl);
    }

    #[test]
    fn test_enter_advances_then_submits() {
        let mut form = DraftForm::default();
        for _ in 0..5 {
            assert!(form.handle_key(key(KeyCode::Enter)).is_none());
        }
        assert_eq!(form.focus, DraftField::LongDescription);
        assert_eq!(form.handle_key(key(KeyCode::Enter)), Some(FormAction::Submit));
    }

    #[test]
    fn test_ctrl_s_and_escape() {
        let mut form = DraftForm::default();
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(form.handle_key(ctrl_s), Some(FormAction::Submit));
        assert_eq!(form.handle_key(key(KeyCode::Esc)), Some(FormAction::Cancel));
        assert!(form.title.is_empty());
    }

    #[test]
    fn test_set_error_focuses_field_and_reset_clears() {
        let mut form = filled();
        form.set_error(DraftError::RatingOutOfRange(9.0));
        assert_eq!(form.focus, DraftField::Rating);
        assert!(form.error.is_some());

        form.reset();
        assert!(form.title.is_empty());
        assert_eq!(form.rating, "0");
        assert!(form.error.is_none());
        assert_eq!(form.focus, DraftField::Title);
    }

    #[test]
    fn test_editing_clears_error() {
        let mut form = filled();
        form.rating = "9".to_string();
        let error = form.submit().unwrap_err();
        form.set_error(error);
        assert_eq!(form.focus, DraftField::Rating);

        form.handle_key(key(KeyCode::Backspace));
        assert!(form.error.is_none());

        form.set_error(DraftError::Missing(DraftField::Rating));
        form.handle_key(key(KeyCode::Char('4')));
        assert!(form.error.is_none());
        assert_eq!(form.rating, "4");

        // moving between fields leaves the error alone
        form.set_error(DraftError::Missing(DraftField::Rating));
        form.handle_key(key(KeyCode::Tab));
        assert!(form.error.is_some());
    }

    #[test]
    fn test_control_chords_do_not_insert_text() {
        let mut form = DraftForm::default();
        form.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        form.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL | KeyModifiers::SHIFT));
        assert!(form.title.is_empty());

        form.handle_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
        assert_eq!(form.title, "A");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(DraftError::Missing(DraftField::PosterUrl).to_string(), "Poster URL is required");
        assert_eq!(DraftError::RatingOutOfRange(6.0).field(), DraftField::Rating);
    }
}
