use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use minimart::entities::{category, customer, product};
use minimart::setup_schema;
use minimart::store::{categories, customers, products, NewProduct};

pub async fn fresh_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .expect("failed to open in-memory sqlite");
    setup_schema(&db).await.expect("failed to create schema");
    db
}

pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

pub async fn add_category(db: &DatabaseConnection, name: &str) -> category::Model {
    categories::create(db, name).await.expect("create category")
}

pub async fn add_customer(
    db: &DatabaseConnection,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> customer::Model {
    customers::create(db, first_name, last_name, email, "opaque")
        .await
        .expect("create customer")
}

pub async fn add_product(
    db: &DatabaseConnection,
    category_id: i32,
    name: &str,
    price: Decimal,
) -> product::Model {
    products::create(
        db,
        NewProduct {
            category_id,
            name: name.to_owned(),
            description: None,
            price,
            stock_quantity: 100,
        },
    )
    .await
    .expect("create product")
}
