use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use tracing::info;

use crate::entities::category;
use crate::error::Error;

pub async fn create(db: &DatabaseConnection, name: &str) -> Result<category::Model, Error> {
    let txn = db.begin().await?;
    let created = category::ActiveModel {
        name: Set(name.to_owned()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;
    info!(id = created.id, name = %created.name, "category created");
    Ok(created)
}

pub async fn rename(
    db: &DatabaseConnection,
    id: i32,
    name: &str,
) -> Result<category::Model, Error> {
    let txn = db.begin().await?;
    let found = category::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(Error::CategoryNotFound(id))?;
    let mut active: category::ActiveModel = found.into();
    active.name = Set(name.to_owned());
    let updated = active.update(&txn).await?;
    txn.commit().await?;
    Ok(updated)
}

/// Deleting a category cascades to its products and, through them, to any
/// order lines that referenced those products.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), Error> {
    let txn = db.begin().await?;
    let found = category::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(Error::CategoryNotFound(id))?;
    let active: category::ActiveModel = found.into();
    active.delete(&txn).await?;
    txn.commit().await?;
    info!(id, "category deleted, dependent products and order lines cascaded");
    Ok(())
}
