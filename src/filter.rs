use crate::catalog::MovieRecord;

pub const MAX_RATING: f64 = 5.0;
pub const RATING_STEP: f64 = 0.5;

/// Transient list criteria: title substring and minimum rating.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieFilter {
    pub title: String,
    /// `0.0` (or NaN) means "no rating constraint".
    pub min_rating: f64,
}

impl MovieFilter {
    pub fn matches(&self, movie: &MovieRecord) -> bool {
        let title_ok = self.title.is_empty()
            || movie.title.to_lowercase().contains(&self.title.to_lowercase());
        let rating_ok = !self.has_rating_constraint() || movie.rating >= self.min_rating;
        title_ok && rating_ok
    }

    fn has_rating_constraint(&self) -> bool {
        self.min_rating != 0.0 && !self.min_rating.is_nan()
    }

    pub fn is_active(&self) -> bool {
        !self.title.is_empty() || self.has_rating_constraint()
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.min_rating = 0.0;
    }

    pub fn raise_rating(&mut self) {
        self.min_rating = (self.min_rating + RATING_STEP).min(MAX_RATING);
    }

    pub fn lower_rating(&mut self) {
        self.min_rating = (self.min_rating - RATING_STEP).max(0.0);
    }

    /// Short human description, e.g. `title ~ "dark", rating >= 4.5`.
    pub fn describe(&self) -> String {
        match (self.title.is_empty(), !self.has_rating_constraint()) {
            (true, true) => "all".to_string(),
            (false, true) => format!("title ~ \"{}\"", self.title),
            (true, false) => format!("rating >= {:.1}", self.min_rating),
            (false, false) => format!("title ~ \"{}\", rating >= {:.1}", self.title, self.min_rating),
        }
    }
}

/// Records matching `filter`, in catalog order.
pub fn apply<'a>(movies: &'a [MovieRecord], filter: &MovieFilter) -> Vec<&'a MovieRecord> {
    movies.iter().filter(|m| filter.matches(m)).collect()
}
