//! Creates the five tables of the shop schema.
//!
//! The statements are written out by hand rather than derived from the
//! entities because the check constraints (`price > 0`, `stock_quantity >=
//! 0`, `quantity > 0`, `unit_price >= 0`) have no entity-macro equivalent.
//! Every foreign key cascades on both delete and update, which means
//! deleting a category takes its products and their historical order lines
//! with it, and deleting a customer erases their whole order history.

use sea_orm::sea_query::{
    ColumnDef, Expr, ForeignKey, ForeignKeyAction, Table, TableCreateStatement,
};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};
use tracing::debug;

use crate::entities::{category, customer, order, order_detail, product};

pub async fn setup_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    for statement in [
        create_category_table(),
        create_customer_table(),
        create_product_table(),
        create_orders_table(),
        create_order_details_table(),
    ] {
        db.execute(backend.build(&statement)).await?;
    }
    debug!("schema ready");
    Ok(())
}

fn create_category_table() -> TableCreateStatement {
    Table::create()
        .table(category::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(category::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(category::Column::Name).string().not_null())
        .to_owned()
}

fn create_customer_table() -> TableCreateStatement {
    Table::create()
        .table(customer::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(customer::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(customer::Column::FirstName)
                .string()
                .not_null(),
        )
        .col(
            ColumnDef::new(customer::Column::LastName)
                .string()
                .not_null(),
        )
        .col(
            ColumnDef::new(customer::Column::Email)
                .string()
                .not_null()
                .unique_key(),
        )
        .col(
            ColumnDef::new(customer::Column::Password)
                .string()
                .not_null(),
        )
        .to_owned()
}

fn create_product_table() -> TableCreateStatement {
    Table::create()
        .table(product::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(product::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(product::Column::CategoryId)
                .integer()
                .not_null(),
        )
        .col(ColumnDef::new(product::Column::Name).string().not_null())
        .col(ColumnDef::new(product::Column::Description).text())
        .col(
            ColumnDef::new(product::Column::Price)
                .decimal_len(10, 2)
                .not_null()
                .check(Expr::col(product::Column::Price).gt(0)),
        )
        .col(
            ColumnDef::new(product::Column::StockQuantity)
                .integer()
                .not_null()
                .check(Expr::col(product::Column::StockQuantity).gte(0)),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_product_category")
                .from(product::Entity, product::Column::CategoryId)
                .to(category::Entity, category::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn create_orders_table() -> TableCreateStatement {
    Table::create()
        .table(order::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(order::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(order::Column::CustomerId)
                .integer()
                .not_null(),
        )
        .col(ColumnDef::new(order::Column::OrderDate).date().not_null())
        .col(
            ColumnDef::new(order::Column::TotalAmount)
                .decimal_len(10, 2)
                .not_null(),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_orders_customer")
                .from(order::Entity, order::Column::CustomerId)
                .to(customer::Entity, customer::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn create_order_details_table() -> TableCreateStatement {
    Table::create()
        .table(order_detail::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(order_detail::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(order_detail::Column::OrderId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(order_detail::Column::ProductId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(order_detail::Column::Quantity)
                .integer()
                .not_null()
                .check(Expr::col(order_detail::Column::Quantity).gt(0)),
        )
        .col(
            ColumnDef::new(order_detail::Column::UnitPrice)
                .decimal_len(10, 2)
                .not_null()
                .check(Expr::col(order_detail::Column::UnitPrice).gte(0)),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_order_details_order")
                .from(order_detail::Entity, order_detail::Column::OrderId)
                .to(order::Entity, order::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_order_details_product")
                .from(order_detail::Entity, order_detail::Column::ProductId)
                .to(product::Entity, product::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}
