use sea_orm::{entity::prelude::*, sea_query::OnConflict, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub address: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().all(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id.to_string()).one(db).await?)
}

/// Insert or overwrite `name`/`address` for `id` in a single statement.
pub async fn upsert(db: &DatabaseConnection, id: &str, name: &str, address: &str) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(id.to_string()),
        name: Set(name.to_string()),
        address: Set(address.to_string()),
    };
    Entity::insert(am)
        .on_conflict(
            OnConflict::column(Column::Id)
                .update_columns([Column::Name, Column::Address])
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    Ok(Model { id: id.to_string(), name: name.to_string(), address: address.to_string() })
}

/// Returns whether a row was removed.
pub async fn delete(db: &DatabaseConnection, id: &str) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id.to_string()).exec(db).await?;
    Ok(res.rows_affected > 0)
}

pub async fn delete_all(db: &DatabaseConnection) -> Result<u64, ModelError> {
    let res = Entity::delete_many().exec(db).await?;
    Ok(res.rows_affected)
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, ModelError> {
    use sea_orm::PaginatorTrait;
    Ok(Entity::find().count(db).await?)
}
