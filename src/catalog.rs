use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

pub const DEFAULT_PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/400x600?text=Movie+Poster";

/// Identifier of a movie record. Unique among the records held by a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// A single movie in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    pub description: String,
    #[serde(rename = "longDescription")]
    pub long_description: String,
    #[serde(rename = "posterURL")]
    pub poster_url: String,
    #[serde(rename = "trailerURL")]
    pub trailer_url: String,
    pub rating: f64,
}

impl MovieRecord {
    /// Poster locator to display, or `placeholder` when the stored one is unusable.
    pub fn poster_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if is_http_url(&self.poster_url) {
            &self.poster_url
        } else {
            placeholder
        }
    }
}

/// A movie record that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDraft {
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub poster_url: String,
    pub trailer_url: String,
    pub rating: f64,
}

impl MovieDraft {
    fn into_record(self, id: MovieId) -> MovieRecord {
        MovieRecord {
            id,
            title: self.title,
            description: self.description,
            long_description: self.long_description,
            poster_url: self.poster_url,
            trailer_url: self.trailer_url,
            rating: self.rating,
        }
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("duplicate movie id: {0}")]
    DuplicateId(MovieId),

    #[error("movie {0} has a non-finite rating")]
    NonFiniteRating(MovieId),

    #[error("could not read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse catalog file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Hands out sequential numeric ids, skipping any already taken.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn with_offset(offset: u64) -> Self {
        Self { next: offset }
    }

    /// Starts above the largest numeric id in `existing`.
    fn after<'a>(existing: impl Iterator<Item = &'a MovieId>) -> Self {
        let max = existing
            .filter_map(|id| id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self::with_offset(max.saturating_add(1))
    }

    fn generate(&mut self, taken: &HashSet<MovieId>) -> MovieId {
        loop {
            let candidate = MovieId::new(self.next.to_string());
            self.next = self.next.wrapping_add(1);
            if !taken.contains(&candidate) {
                return candidate;
            }
        }
    }
}

/// The ordered, in-memory movie collection. Records are only ever appended.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<MovieRecord>,
    ids: HashSet<MovieId>,
    generator: IdGenerator,
}

impl Catalog {
    /// Catalog holding the built-in seed movies.
    pub fn seeded() -> Self {
        let movies = seed_movies();
        let ids = movies.iter().map(|m| m.id.clone()).collect();
        let generator = IdGenerator::after(movies.iter().map(|m| &m.id));
        Self { movies, ids, generator }
    }

    pub fn from_records(movies: Vec<MovieRecord>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::with_capacity(movies.len());
        for movie in &movies {
            if !movie.rating.is_finite() {
                return Err(CatalogError::NonFiniteRating(movie.id.clone()));
            }
            if !ids.insert(movie.id.clone()) {
                return Err(CatalogError::DuplicateId(movie.id.clone()));
            }
        }
        let generator = IdGenerator::after(movies.iter().map(|m| &m.id));
        Ok(Self { movies, ids, generator })
    }

    /// Load a JSON array of movie records.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let movies: Vec<MovieRecord> = serde_json::from_str(&raw)?;
        let catalog = Self::from_records(movies)?;
        info!(path = %path.display(), movies = catalog.len(), "loaded seed catalog");
        Ok(catalog)
    }

    /// Assign a fresh id to `draft` and add it at the end of the catalog.
    pub fn append(&mut self, draft: MovieDraft) -> MovieId {
        let id = self.generator.generate(&self.ids);
        self.ids.insert(id.clone());
        self.movies.push(draft.into_record(id.clone()));
        debug!(id = %id, total = self.movies.len(), "appended movie");
        id
    }

    /// First record whose id equals `id`.
    pub fn find(&self, id: &MovieId) -> Option<&MovieRecord> {
        self.movies.iter().find(|m| &m.id == id)
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Whether `s` parses as an absolute `http`/`https` URL with a host.
pub fn is_http_url(s: &str) -> bool {
    Url::parse(s).is_ok_and(|u| matches!(u.scheme(), "http" | "https") && u.host().is_some())
}

fn seed(
    id: &str,
    title: &str,
    rating: f64,
    description: &str,
    long_description: &str,
    poster: &str,
    trailer: &str,
) -> MovieRecord {
    MovieRecord {
        id: MovieId::new(id),
        title: title.to_string(),
        description: description.to_string(),
        long_description: long_description.to_string(),
        poster_url: format!("https://image.tmdb.org/t/p/w500/{poster}"),
        trailer_url: format!("https://www.youtube.com/embed/{trailer}"),
        rating,
    }
}

fn seed_movies() -> Vec<MovieRecord> {
    vec![
        seed(
            "1",
            "Inception",
            4.8,
            "A thief who enters the dreams of others to steal secrets from their subconscious during the dream state.",
            "Dom Cobb is a skilled thief, the absolute best in the dangerous art of extraction, stealing valuable secrets from deep within the subconscious during the dream state, when the mind is at its most vulnerable. Cobb's rare ability has made him a coveted player in this treacherous new world of corporate espionage, but it has also made him an international fugitive and cost him everything he loves.",
            "8IB2e4r4oVhHnANbnm7O3Tj6tF8.jpg",
            "YoHD9XEInc0",
        ),
        seed(
            "2",
            "The Shawshank Redemption",
            4.9,
            "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.",
            "Andy Dufresne is a young and successful banker whose life changes drastically when he is convicted and sentenced to life imprisonment for the murder of his wife and her lover. Set in the 1940s, the film shows how Andy, with the help of his friend Red, the prison contraband smuggler, turns out to be a most unconventional prisoner.",
            "q6y0Go1tsGEsmtFryDOJo3dEmqu.jpg",
            "NmzuHjWmXOc",
        ),
        seed(
            "3",
            "Interstellar",
            4.7,
            "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
            "In the near future, Earth's resources have been depleted, and humanity is on the brink of extinction. As the dust cloud from a disappearing sun threatens to extinguish all life on Earth, a group of astronauts is sent on a mission to find a new home for humanity.",
            "gEU2QniE6E77NI6lCU6MxlNBvIx.jpg",
            "zSWdZVtXT7E",
        ),
        seed(
            "4",
            "The Dark Knight",
            4.9,
            "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.",
            "Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice. When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, the Dark Knight must accept him as a partner in his fight to stop the chaos.",
            "qJ2tW6WMUDux911r6m7haRef0WH.jpg",
            "EXeTwQWrcwY",
        ),
    ]
}

#[cfg(test)]
pub(crate) fn draft(title: &str, rating: f64) -> MovieDraft {
    MovieDraft {
        title: title.to_string(),
        description: format!("{title} in short"),
        long_description: format!("{title} at length"),
        poster_url: "https://example.com/poster.jpg".to_string(),
        trailer_url: "https://www.youtube.com/embed/test".to_string(),
        rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Write;

    #[test]
    fn test_seeded_catalog() {
        let catalog = Catalog::seeded();
        let titles: Vec<&str> = catalog.movies().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Inception", "The Shawshank Redemption", "Interstellar", "The Dark Knight"]
        );
        let ratings: Vec<f64> = catalog.movies().iter().map(|m| m.rating).collect();
        assert_eq!(ratings, [4.8, 4.9, 4.7, 4.9]);
    }

    #[test]
    fn test_append_then_find() {
        let mut catalog = Catalog::seeded();
        let id = catalog.append(draft("Test", 3.0));

        let found = catalog.find(&id).expect("appended movie should be found");
        assert_eq!(found.title, "Test");
        assert_eq!(found.id, id);
        assert_eq!(catalog.movies().last().map(|m| &m.id), Some(&id));
    }

    #[test]
    fn test_ids_continue_after_seed() {
        let mut catalog = Catalog::seeded();
        assert_eq!(catalog.append(draft("A", 1.0)).as_str(), "5");
        assert_eq!(catalog.append(draft("B", 1.0)).as_str(), "6");
    }

    #[test]
    fn test_rapid_appends_get_distinct_ids() {
        let mut catalog = Catalog::seeded();
        let first = catalog.append(draft("Same", 2.0));
        let second = catalog.append(draft("Same", 2.0));
        assert_ne!(first, second);
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_generator_starts_above_largest_numeric_id() {
        let mut records = Catalog::seeded().movies().to_vec();
        records[0].id = MovieId::new("abc");
        records[1].id = MovieId::new("7");
        let mut catalog = Catalog::from_records(records).unwrap();
        assert_eq!(catalog.append(draft("Next", 1.0)).as_str(), "8");
    }

    #[test]
    fn test_generator_skips_taken_ids() {
        let taken: HashSet<MovieId> = ["1", "2", "4"].into_iter().map(MovieId::new).collect();
        let mut generator = IdGenerator::with_offset(1);
        assert_eq!(generator.generate(&taken).as_str(), "3");
        assert_eq!(generator.generate(&taken).as_str(), "5");
    }

    #[test]
    fn test_find_unknown_id() {
        let catalog = Catalog::seeded();
        assert!(catalog.find(&MovieId::new("does-not-exist")).is_none());
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_from_records_rejects_duplicates() {
        let mut records = Catalog::seeded().movies().to_vec();
        records[1].id = MovieId::new("1");
        assert!(matches!(
            Catalog::from_records(records),
            Err(CatalogError::DuplicateId(id)) if id.as_str() == "1"
        ));
    }

    #[test]
    fn test_from_records_rejects_nan_rating() {
        let mut records = Catalog::seeded().movies().to_vec();
        records[2].rating = f64::NAN;
        assert!(matches!(
            Catalog::from_records(records),
            Err(CatalogError::NonFiniteRating(_))
        ));
    }

    #[test]
    fn test_load_json_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"a1","title":"Heat","description":"d","longDescription":"ld",
                "posterURL":"https://example.com/heat.jpg","trailerURL":"https://example.com/t","rating":4.2}}]"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        let heat = catalog.find(&MovieId::new("a1")).unwrap();
        assert_eq!(heat.long_description, "ld");
        assert_eq!(heat.poster_url, "https://example.com/heat.jpg");
    }

    #[test]
    fn test_load_malformed_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(Catalog::load(file.path()), Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_record_json_field_names() {
        let catalog = Catalog::seeded();
        let json = serde_json::to_value(&catalog.movies()[0]).unwrap();
        assert_eq!(json["id"], "1");
        assert!(json.get("posterURL").is_some());
        assert!(json.get("trailerURL").is_some());
        assert!(json.get("longDescription").is_some());
    }

    #[test]
    fn test_poster_fallback() {
        let mut movie = Catalog::seeded().movies()[0].clone();
        assert_eq!(movie.poster_or("placeholder"), movie.poster_url.clone());
        movie.poster_url = "not a url".to_string();
        assert_eq!(movie.poster_or("placeholder"), "placeholder");
        movie.poster_url = String::new();
        assert_eq!(movie.poster_or("placeholder"), "placeholder");
    }

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("https://www.youtube.com/embed/x"));
        assert!(is_http_url("http://localhost:8080"));
        assert!(!is_http_url("ftp://example.com"));
        assert!(!is_http_url("https://"));
        assert!(!is_http_url("https:// spaced"));
    }

    #[test]
    fn test_is_http_url_rejects_malformed_locators() {
        for malformed in ["https://[", "https://a:b:c", "http://%%%", "https://exa<mple>.com/x"] {
            assert!(!is_http_url(malformed), "{malformed} should be rejected");
        }
    }

    proptest! {
        #[test]
        fn prop_append_preserves_order_and_uniqueness(
            titles in proptest::collection::vec("[a-zA-Z ]{0,12}", 1..20),
        ) {
            let mut catalog = Catalog::seeded();
            for title in titles {
                let before: Vec<MovieId> = catalog.movies().iter().map(|m| m.id.clone()).collect();
                let id = catalog.append(draft(&title, 2.5));

                prop_assert_eq!(catalog.len(), before.len() + 1);
                prop_assert!(!before.contains(&id));
                let after: Vec<MovieId> = catalog.movies()[..before.len()].iter().map(|m| m.id.clone()).collect();
                prop_assert_eq!(after, before);
            }
        }
    }
}
