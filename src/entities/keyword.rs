use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "keywords")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub keyword_id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_keyword::Entity")]
    MovieKeyword,
}

impl Related<super::movie_keyword::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieKeyword.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
