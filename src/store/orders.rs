//! Order placement and line edits. `orders.total_amount` is recomputed
//! from the lines inside the same transaction as every write here, which
//! is the only thing keeping the stored total honest.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, QuerySelect, Set, TransactionTrait,
};
use tracing::info;

use crate::entities::{customer, order, order_detail, product};
use crate::error::Error;

#[derive(Debug, Clone, Copy)]
pub struct NewOrderLine {
    pub product_id: i32,
    pub quantity: i32,
}

/// Places an order for `customer_id`. Each line's `unit_price` is copied
/// from the product's current price, and duplicate product ids in `lines`
/// are folded into one line before writing.
pub async fn place(
    db: &DatabaseConnection,
    customer_id: i32,
    order_date: NaiveDate,
    lines: &[NewOrderLine],
) -> Result<order::Model, Error> {
    if lines.is_empty() {
        return Err(Error::EmptyOrder);
    }
    let mut folded: Vec<NewOrderLine> = Vec::with_capacity(lines.len());
    for line in lines {
        if line.quantity <= 0 {
            return Err(Error::InvalidQuantity(line.quantity));
        }
        match folded.iter_mut().find(|f| f.product_id == line.product_id) {
            Some(existing) => existing.quantity += line.quantity,
            None => folded.push(*line),
        }
    }

    let txn = db.begin().await?;
    if customer::Entity::find_by_id(customer_id)
        .one(&txn)
        .await?
        .is_none()
    {
        return Err(Error::CustomerNotFound(customer_id));
    }

    let mut total = Decimal::ZERO;
    let mut priced = Vec::with_capacity(folded.len());
    for line in &folded {
        let item = product::Entity::find_by_id(line.product_id)
            .one(&txn)
            .await?
            .ok_or(Error::ProductNotFound(line.product_id))?;
        total += item.price * Decimal::from(line.quantity);
        priced.push((line.product_id, line.quantity, item.price));
    }

    let placed = order::ActiveModel {
        customer_id: Set(customer_id),
        order_date: Set(order_date),
        total_amount: Set(total),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    order_detail::Entity::insert_many(priced.into_iter().map(
        |(product_id, quantity, unit_price)| order_detail::ActiveModel {
            order_id: Set(placed.id),
            product_id: Set(product_id),
            quantity: Set(quantity),
            unit_price: Set(unit_price),
            ..Default::default()
        },
    ))
    .exec(&txn)
    .await?;

    txn.commit().await?;
    info!(id = placed.id, customer_id, total = %placed.total_amount, "order placed");
    Ok(placed)
}

/// Adds a product to an existing order. If the order already has a line
/// for that product the quantities are merged and the line keeps its
/// original `unit_price` snapshot; otherwise a new line is written at the
/// product's current price.
pub async fn add_line(
    db: &DatabaseConnection,
    order_id: i32,
    product_id: i32,
    quantity: i32,
) -> Result<order_detail::Model, Error> {
    if quantity <= 0 {
        return Err(Error::InvalidQuantity(quantity));
    }
    let txn = db.begin().await?;
    if order::Entity::find_by_id(order_id).one(&txn).await?.is_none() {
        return Err(Error::OrderNotFound(order_id));
    }
    let item = product::Entity::find_by_id(product_id)
        .one(&txn)
        .await?
        .ok_or(Error::ProductNotFound(product_id))?;

    let existing = order_detail::Entity::find()
        .filter(order_detail::Column::OrderId.eq(order_id))
        .filter(order_detail::Column::ProductId.eq(product_id))
        .one(&txn)
        .await?;
    let line = match existing {
        Some(line) => {
            let merged = line.quantity + quantity;
            let mut active: order_detail::ActiveModel = line.into();
            active.quantity = Set(merged);
            active.update(&txn).await?
        }
        None => {
            order_detail::ActiveModel {
                order_id: Set(order_id),
                product_id: Set(product_id),
                quantity: Set(quantity),
                unit_price: Set(item.price),
                ..Default::default()
            }
            .insert(&txn)
            .await?
        }
    };

    recompute_total(&txn, order_id).await?;
    txn.commit().await?;
    Ok(line)
}

pub async fn set_line_quantity(
    db: &DatabaseConnection,
    line_id: i32,
    quantity: i32,
) -> Result<order_detail::Model, Error> {
    if quantity <= 0 {
        return Err(Error::InvalidQuantity(quantity));
    }
    let txn = db.begin().await?;
    let found = order_detail::Entity::find_by_id(line_id)
        .one(&txn)
        .await?
        .ok_or(Error::OrderLineNotFound(line_id))?;
    let order_id = found.order_id;
    let mut active: order_detail::ActiveModel = found.into();
    active.quantity = Set(quantity);
    let updated = active.update(&txn).await?;
    recompute_total(&txn, order_id).await?;
    txn.commit().await?;
    Ok(updated)
}

pub async fn remove_line(db: &DatabaseConnection, line_id: i32) -> Result<(), Error> {
    let txn = db.begin().await?;
    let found = order_detail::Entity::find_by_id(line_id)
        .one(&txn)
        .await?
        .ok_or(Error::OrderLineNotFound(line_id))?;
    let order_id = found.order_id;
    let active: order_detail::ActiveModel = found.into();
    active.delete(&txn).await?;
    recompute_total(&txn, order_id).await?;
    txn.commit().await?;
    Ok(())
}

pub async fn reschedule(
    db: &DatabaseConnection,
    order_id: i32,
    order_date: NaiveDate,
) -> Result<order::Model, Error> {
    let txn = db.begin().await?;
    let found = order::Entity::find_by_id(order_id)
        .one(&txn)
        .await?
        .ok_or(Error::OrderNotFound(order_id))?;
    let mut active: order::ActiveModel = found.into();
    active.order_date = Set(order_date);
    let updated = active.update(&txn).await?;
    txn.commit().await?;
    Ok(updated)
}

pub async fn delete(db: &DatabaseConnection, order_id: i32) -> Result<(), Error> {
    let txn = db.begin().await?;
    let found = order::Entity::find_by_id(order_id)
        .one(&txn)
        .await?
        .ok_or(Error::OrderNotFound(order_id))?;
    let active: order::ActiveModel = found.into();
    active.delete(&txn).await?;
    txn.commit().await?;
    info!(id = order_id, "order deleted, lines cascaded");
    Ok(())
}

async fn recompute_total(txn: &DatabaseTransaction, order_id: i32) -> Result<Decimal, Error> {
    let lines: Vec<(i32, Decimal)> = order_detail::Entity::find()
        .select_only()
        .column(order_detail::Column::Quantity)
        .column(order_detail::Column::UnitPrice)
        .filter(order_detail::Column::OrderId.eq(order_id))
        .into_tuple()
        .all(txn)
        .await?;
    let total: Decimal = lines
        .into_iter()
        .map(|(quantity, unit_price)| Decimal::from(quantity) * unit_price)
        .sum();

    let found = order::Entity::find_by_id(order_id)
        .one(txn)
        .await?
        .ok_or(Error::OrderNotFound(order_id))?;
    let mut active: order::ActiveModel = found.into();
    active.total_amount = Set(total);
    active.update(txn).await?;
    Ok(total)
}
