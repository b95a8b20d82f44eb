//! Read-only reporting queries over the shop schema.
//!
//! All three are stateless aggregates; given the same data they return the
//! same rows, including tie order (ties are broken by id so results are
//! reproducible).
//!
//! A note on the denormalized columns these reports lean on.
//! `orders.total_amount` duplicates what SUM over the order's lines would
//! produce, which lets [`daily_revenue`] and [`high_value_customers`] skip
//! the join against `order_details` entirely. The cost is update
//! complexity: every line write must recompute the total (the store layer
//! does), and a bug there silently skews revenue. Likewise
//! `order_details.unit_price` duplicates `product.price` as it stood at
//! order time, so reports over past orders survive price changes. The
//! cascading foreign keys cut the other way: deleting a product or a
//! customer erases the order lines these queries aggregate, so historical
//! reports quietly shrink.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, Order, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};
use serde::Serialize;

use crate::entities::{customer, order, order_detail, product};
use crate::error::Error;

#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub total: Decimal,
}

/// Sum of `orders.total_amount` for a single date. Returns `None` when no
/// orders exist on that date.
pub async fn daily_revenue(
    db: &DatabaseConnection,
    date: NaiveDate,
) -> Result<Option<DailyRevenue>, Error> {
    let row = order::Entity::find()
        .select_only()
        .column_as(order::Column::OrderDate, "date")
        .column_as(order::Column::TotalAmount.sum(), "total")
        .filter(order::Column::OrderDate.eq(date))
        .group_by(order::Column::OrderDate)
        .into_model::<DailyRevenue>()
        .one(db)
        .await?;
    Ok(row)
}

#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize)]
pub struct ProductSales {
    pub product_id: i32,
    pub name: String,
    pub total_quantity: i64,
}

/// Best-selling products by unit count over the half-open date range
/// `[start, end)`, highest first, ties broken by product id.
pub async fn top_selling_products(
    db: &DatabaseConnection,
    start: NaiveDate,
    end: NaiveDate,
    limit: u64,
) -> Result<Vec<ProductSales>, Error> {
    let rows = order_detail::Entity::find()
        .select_only()
        .column_as(order_detail::Column::ProductId, "product_id")
        .column_as(product::Column::Name, "name")
        .column_as(order_detail::Column::Quantity.sum(), "total_quantity")
        .join(JoinType::InnerJoin, order_detail::Relation::Order.def())
        .join(JoinType::InnerJoin, order_detail::Relation::Product.def())
        .filter(order::Column::OrderDate.gte(start))
        .filter(order::Column::OrderDate.lt(end))
        .group_by(order_detail::Column::ProductId)
        .group_by(product::Column::Name)
        .order_by(order_detail::Column::Quantity.sum(), Order::Desc)
        .order_by(order_detail::Column::ProductId, Order::Asc)
        .limit(limit)
        .into_model::<ProductSales>()
        .all(db)
        .await?;
    Ok(rows)
}

#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize)]
pub struct CustomerSpend {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub total_spent: Decimal,
}

/// Customers whose order totals over `[start, end)` sum to strictly more
/// than `threshold`, biggest spenders first.
pub async fn high_value_customers(
    db: &DatabaseConnection,
    start: NaiveDate,
    end: NaiveDate,
    threshold: Decimal,
) -> Result<Vec<CustomerSpend>, Error> {
    let rows = order::Entity::find()
        .select_only()
        .column_as(order::Column::CustomerId, "customer_id")
        .column_as(customer::Column::FirstName, "first_name")
        .column_as(customer::Column::LastName, "last_name")
        .column_as(order::Column::TotalAmount.sum(), "total_spent")
        .join(JoinType::InnerJoin, order::Relation::Customer.def())
        .filter(order::Column::OrderDate.gte(start))
        .filter(order::Column::OrderDate.lt(end))
        .group_by(order::Column::CustomerId)
        .group_by(customer::Column::FirstName)
        .group_by(customer::Column::LastName)
        .having(Expr::expr(order::Column::TotalAmount.sum()).gt(threshold))
        .order_by(order::Column::TotalAmount.sum(), Order::Desc)
        .order_by(order::Column::CustomerId, Order::Asc)
        .into_model::<CustomerSpend>()
        .all(db)
        .await?;
    Ok(rows)
}
