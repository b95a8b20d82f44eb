//! Demo data for the binary: a small catalog, two customers, and a few
//! January orders, all written through the store layer.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::error::Error;
use crate::store::{categories, customers, orders, products, NewOrderLine, NewProduct};

pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), Error> {
    let kitchen = categories::create(db, "Kitchen").await?;
    let stationery = categories::create(db, "Stationery").await?;

    let widget = products::create(
        db,
        NewProduct {
            category_id: kitchen.id,
            name: "Widget".to_owned(),
            description: Some("A general-purpose widget.".to_owned()),
            price: dec!(15.00),
            stock_quantity: 120,
        },
    )
    .await?;
    let kettle = products::create(
        db,
        NewProduct {
            category_id: kitchen.id,
            name: "Copper Kettle".to_owned(),
            description: None,
            price: dec!(60.25),
            stock_quantity: 8,
        },
    )
    .await?;
    let notebook = products::create(
        db,
        NewProduct {
            category_id: stationery.id,
            name: "Notebook".to_owned(),
            description: Some("Ruled, 96 pages.".to_owned()),
            price: dec!(26.50),
            stock_quantity: 40,
        },
    )
    .await?;
    let pen = products::create(
        db,
        NewProduct {
            category_id: stationery.id,
            name: "Fountain Pen".to_owned(),
            description: None,
            price: dec!(42.00),
            stock_quantity: 15,
        },
    )
    .await?;

    let alice = customers::create(db, "Alice", "Carter", "alice@example.com", "hunter2").await?;
    let ben = customers::create(db, "Ben", "Okoro", "ben@example.com", "swordfish").await?;

    orders::place(
        db,
        alice.id,
        day(2025, 1, 5),
        &[NewOrderLine {
            product_id: kettle.id,
            quantity: 2,
        }],
    )
    .await?;
    orders::place(
        db,
        ben.id,
        day(2025, 1, 5),
        &[NewOrderLine {
            product_id: notebook.id,
            quantity: 3,
        }],
    )
    .await?;
    orders::place(
        db,
        alice.id,
        day(2025, 1, 12),
        &[
            NewOrderLine {
                product_id: widget.id,
                quantity: 3,
            },
            NewOrderLine {
                product_id: pen.id,
                quantity: 1,
            },
        ],
    )
    .await?;
    orders::place(
        db,
        ben.id,
        day(2025, 1, 20),
        &[NewOrderLine {
            product_id: widget.id,
            quantity: 5,
        }],
    )
    .await?;

    info!("demo data seeded");
    Ok(())
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
