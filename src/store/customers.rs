use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, Set, SqlErr, TransactionTrait,
};
use tracing::info;

use crate::entities::customer;
use crate::error::Error;

pub async fn create(
    db: &DatabaseConnection,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<customer::Model, Error> {
    let txn = db.begin().await?;
    let inserted = customer::ActiveModel {
        first_name: Set(first_name.to_owned()),
        last_name: Set(last_name.to_owned()),
        email: Set(email.to_owned()),
        password: Set(password.to_owned()),
        ..Default::default()
    }
    .insert(&txn)
    .await;
    let created = match inserted {
        Ok(created) => created,
        Err(err) => {
            return Err(match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Error::DuplicateEmail(email.to_owned())
                }
                _ => Error::Db(err),
            });
        }
    };
    txn.commit().await?;
    info!(id = created.id, "customer created");
    Ok(created)
}

#[derive(Debug, Default)]
pub struct CustomerUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    changes: CustomerUpdate,
) -> Result<customer::Model, Error> {
    let txn = db.begin().await?;
    let found = customer::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(Error::CustomerNotFound(id))?;
    let mut active: customer::ActiveModel = found.into();
    if let Some(first_name) = changes.first_name {
        active.first_name = Set(first_name);
    }
    if let Some(last_name) = changes.last_name {
        active.last_name = Set(last_name);
    }
    let attempted_email = changes.email.clone();
    if let Some(email) = changes.email {
        active.email = Set(email);
    }
    if let Some(password) = changes.password {
        active.password = Set(password);
    }
    let updated = active.update(&txn).await.map_err(|err| match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            Error::DuplicateEmail(attempted_email.unwrap_or_default())
        }
        _ => Error::Db(err),
    })?;
    txn.commit().await?;
    Ok(updated)
}

/// Deleting a customer cascades to their orders and order lines. The whole
/// purchase history goes with the row.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), Error> {
    let txn = db.begin().await?;
    let found = customer::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(Error::CustomerNotFound(id))?;
    let active: customer::ActiveModel = found.into();
    active.delete(&txn).await?;
    txn.commit().await?;
    info!(id, "customer deleted, order history cascaded");
    Ok(())
}
