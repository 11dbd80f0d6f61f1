//! One entity per catalog table. Junction rows belong to both sides and
//! cascade with them.

pub mod genre;
pub mod keyword;
pub mod movie;
pub mod movie_cast;
pub mod movie_crew;
pub mod movie_genre;
pub mod movie_keyword;
pub mod movie_ratings_summary;
pub mod person;
