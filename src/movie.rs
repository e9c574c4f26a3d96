use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Every field except the favorite flag is fixed once the record is built.
/// The flag is flipped only by the store that owns the record, so the public
/// surface is read-only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    id: String,
    title: String,
    year: u16,
    genre: String,
    director: String,
    actors: String,
    plot: String,
    #[serde(default)]
    images: Vec<String>,
    #[serde(default)]
    trailer: String,
    rating: String,
    #[serde(default)]
    is_favorite: bool,
}

impl Movie {
    /// Start building a movie with the given identifier and title.
    pub fn builder(id: impl Into<String>, title: impl Into<String>) -> MovieBuilder {
        MovieBuilder::new(id, title)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    /// Comma separated cast list.
    pub fn actors(&self) -> &str {
        &self.actors
    }

    pub fn plot(&self) -> &str {
        &self.plot
    }

    /// Gallery images in display order.
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// The primary poster: the first gallery image, if any.
    pub fn poster(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Trailer resource name, resolved by the host player.
    pub fn trailer(&self) -> &str {
        &self.trailer
    }

    pub fn rating(&self) -> &str {
        &self.rating
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    /// Flip the favorite flag and return the new value.
    pub(crate) fn toggle_favorite(&mut self) -> bool {
        self.is_favorite = !self.is_favorite;
        self.is_favorite
    }
}

/// Builder for [`Movie`] records, used for seed tables and tests.
#[derive(Debug, Clone)]
pub struct MovieBuilder {
    movie: Movie,
}

impl MovieBuilder {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        MovieBuilder {
            movie: Movie {
                id: id.into(),
                title: title.into(),
                year: 0,
                genre: String::new(),
                director: String::new(),
                actors: String::new(),
                plot: String::new(),
                images: Vec::new(),
                trailer: String::new(),
                rating: String::new(),
                is_favorite: false,
            },
        }
    }

    pub fn year(mut self, year: u16) -> Self {
        self.movie.year = year;
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.movie.genre = genre.into();
        self
    }

    pub fn director(mut self, director: impl Into<String>) -> Self {
        self.movie.director = director.into();
        self
    }

    pub fn actors(mut self, actors: impl Into<String>) -> Self {
        self.movie.actors = actors.into();
        self
    }

    pub fn plot(mut self, plot: impl Into<String>) -> Self {
        self.movie.plot = plot.into();
        self
    }

    /// Append one gallery image. The first image added is the poster.
    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.movie.images.push(url.into());
        self
    }

    pub fn images<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.movie.images.extend(urls.into_iter().map(Into::into));
        self
    }

    pub fn trailer(mut self, trailer: impl Into<String>) -> Self {
        self.movie.trailer = trailer.into();
        self
    }

    pub fn rating(mut self, rating: impl Into<String>) -> Self {
        self.movie.rating = rating.into();
        self
    }

    /// Mark the movie as a favorite from the start.
    pub fn favorite(mut self, is_favorite: bool) -> Self {
        self.movie.is_favorite = is_favorite;
        self
    }

    pub fn build(self) -> Movie {
        self.movie
    }
}
