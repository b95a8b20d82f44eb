use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use tracing::info;

use crate::entities::{category, product};
use crate::error::Error;

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock_quantity: i32,
}

pub async fn create(db: &DatabaseConnection, new: NewProduct) -> Result<product::Model, Error> {
    let txn = db.begin().await?;
    if category::Entity::find_by_id(new.category_id)
        .one(&txn)
        .await?
        .is_none()
    {
        return Err(Error::CategoryNotFound(new.category_id));
    }
    let created = product::ActiveModel {
        category_id: Set(new.category_id),
        name: Set(new.name),
        description: Set(new.description),
        price: Set(new.price),
        stock_quantity: Set(new.stock_quantity),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;
    info!(id = created.id, name = %created.name, "product created");
    Ok(created)
}

#[derive(Debug, Default)]
pub struct ProductUpdate {
    pub category_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub price: Option<Decimal>,
    pub stock_quantity: Option<i32>,
}

pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    changes: ProductUpdate,
) -> Result<product::Model, Error> {
    let txn = db.begin().await?;
    let found = product::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(Error::ProductNotFound(id))?;
    let mut active: product::ActiveModel = found.into();
    if let Some(category_id) = changes.category_id {
        if category::Entity::find_by_id(category_id)
            .one(&txn)
            .await?
            .is_none()
        {
            return Err(Error::CategoryNotFound(category_id));
        }
        active.category_id = Set(category_id);
    }
    if let Some(name) = changes.name {
        active.name = Set(name);
    }
    if let Some(description) = changes.description {
        active.description = Set(description);
    }
    if let Some(price) = changes.price {
        active.price = Set(price);
    }
    if let Some(stock_quantity) = changes.stock_quantity {
        active.stock_quantity = Set(stock_quantity);
    }
    let updated = active.update(&txn).await?;
    txn.commit().await?;
    Ok(updated)
}

/// Deleting a product cascades to every order line that referenced it,
/// past orders included.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), Error> {
    let txn = db.begin().await?;
    let found = product::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(Error::ProductNotFound(id))?;
    let active: product::ActiveModel = found.into();
    active.delete(&txn).await?;
    txn.commit().await?;
    info!(id, "product deleted, order lines cascaded");
    Ok(())
}
