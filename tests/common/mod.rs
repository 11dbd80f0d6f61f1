#![allow(dead_code)]

use filmdb::{
    Catalog, Config,
    entities::{
        genre, keyword, movie, movie_cast, movie_crew, movie_genre, movie_keyword,
        movie_ratings_summary, person,
    },
    import::{self, Dataset, ImportSummary},
};

pub async fn catalog() -> Catalog {
    Catalog::open(&Config::in_memory()).await.expect("open in-memory catalog")
}

pub fn movie(movie_id: i32, title: &str) -> movie::Model {
    movie::Model {
        movie_id,
        title: title.to_string(),
        original_title: None,
        original_language: Some("en".to_string()),
        release_date: None,
        release_year: None,
        runtime: None,
        budget: 0,
        revenue: 0,
        popularity: None,
        vote_average: None,
        vote_count: None,
        tagline: None,
        overview: None,
    }
}

/// Builds a dataset fluently and loads it in one go.
#[derive(Default)]
pub struct Seed {
    dataset: Dataset,
}

impl Seed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn movie(mut self, movie: movie::Model) -> Self {
        self.dataset.movies.push(movie);
        self
    }

    pub fn genre(mut self, genre_id: i32, name: &str) -> Self {
        self.dataset.genres.push(genre::Model { genre_id, name: name.to_string() });
        self
    }

    pub fn person(mut self, person_id: i32, name: &str) -> Self {
        self.dataset.people.push(person::Model { person_id, name: name.to_string() });
        self
    }

    pub fn keyword(mut self, keyword_id: i32, name: &str) -> Self {
        self.dataset.keywords.push(keyword::Model { keyword_id, name: name.to_string() });
        self
    }

    pub fn movie_genre(mut self, movie_id: i32, genre_id: i32) -> Self {
        self.dataset.movie_genres.push(movie_genre::Model { movie_id, genre_id });
        self
    }

    pub fn cast(mut self, movie_id: i32, person_id: i32, cast_order: i32) -> Self {
        self.dataset.movie_cast.push(movie_cast::Model {
            movie_id,
            person_id,
            cast_order,
            character_name: None,
        });
        self
    }

    pub fn crew(mut self, movie_id: i32, person_id: i32, department: &str, job: &str) -> Self {
        self.dataset.movie_crew.push(movie_crew::Model {
            movie_id,
            person_id,
            department: department.to_string(),
            job: job.to_string(),
        });
        self
    }

    pub fn director(self, movie_id: i32, person_id: i32) -> Self {
        self.crew(movie_id, person_id, "Directing", "Director")
    }

    pub fn movie_keyword(mut self, movie_id: i32, keyword_id: i32) -> Self {
        self.dataset.movie_keywords.push(movie_keyword::Model { movie_id, keyword_id });
        self
    }

    pub fn rating(mut self, movie_id: i32, rating_avg: f64, rating_count: i32) -> Self {
        self.dataset.ratings.push(movie_ratings_summary::Model {
            movie_id,
            rating_avg: Some(rating_avg),
            rating_count: Some(rating_count),
        });
        self
    }

    pub fn into_dataset(self) -> Dataset {
        self.dataset
    }

    pub async fn load(self, catalog: &Catalog) -> ImportSummary {
        import::load(catalog.db(), self.dataset).await.expect("seed dataset")
    }
}
