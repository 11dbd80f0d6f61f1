use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub movie_id: i32,
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub runtime: Option<i32>,
    /// 0 when not reported.
    #[serde(default)]
    pub budget: i64,
    /// 0 when not reported.
    #[serde(default)]
    pub revenue: i64,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<i32>,
    #[serde(default)]
    #[sea_orm(column_type = "Text", nullable)]
    pub tagline: Option<String>,
    #[serde(default)]
    #[sea_orm(column_type = "Text", nullable)]
    pub overview: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_genre::Entity")]
    MovieGenre,
    #[sea_orm(has_many = "super::movie_cast::Entity")]
    MovieCast,
    #[sea_orm(has_many = "super::movie_crew::Entity")]
    MovieCrew,
    #[sea_orm(has_many = "super::movie_keyword::Entity")]
    MovieKeyword,
    #[sea_orm(has_one = "super::movie_ratings_summary::Entity")]
    MovieRatingsSummary,
}

impl Related<super::movie_genre::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieGenre.def()
    }
}

impl Related<super::movie_cast::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieCast.def()
    }
}

impl Related<super::movie_crew::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieCrew.def()
    }
}

impl Related<super::movie_keyword::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieKeyword.def()
    }
}

impl Related<super::movie_ratings_summary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieRatingsSummary.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
