mod common;

use rust_decimal_macros::dec;

use common::{add_category, add_customer, add_product, day, fresh_db};
use minimart::reports;
use minimart::store::{orders, NewOrderLine};

#[tokio::test]
async fn daily_revenue_sums_orders_for_one_date() {
    let db = fresh_db().await;
    let kitchen = add_category(&db, "Kitchen").await;
    let kettle = add_product(&db, kitchen.id, "Copper Kettle", dec!(60.25)).await;
    let notebook = add_product(&db, kitchen.id, "Notebook", dec!(26.50)).await;
    let alice = add_customer(&db, "Alice", "Carter", "alice@example.com").await;
    let ben = add_customer(&db, "Ben", "Okoro", "ben@example.com").await;

    // 120.50 + 79.50 on the 5th, an unrelated order on the 12th.
    orders::place(
        &db,
        alice.id,
        day(2025, 1, 5),
        &[NewOrderLine {
            product_id: kettle.id,
            quantity: 2,
        }],
    )
    .await
    .unwrap();
    orders::place(
        &db,
        ben.id,
        day(2025, 1, 5),
        &[NewOrderLine {
            product_id: notebook.id,
            quantity: 3,
        }],
    )
    .await
    .unwrap();
    orders::place(
        &db,
        ben.id,
        day(2025, 1, 12),
        &[NewOrderLine {
            product_id: notebook.id,
            quantity: 1,
        }],
    )
    .await
    .unwrap();

    let row = reports::daily_revenue(&db, day(2025, 1, 5))
        .await
        .unwrap()
        .expect("revenue row");
    assert_eq!(row.date, day(2025, 1, 5));
    assert_eq!(row.total, dec!(200.00));

    assert!(reports::daily_revenue(&db, day(2025, 1, 6))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn top_selling_products_ranks_by_quantity() {
    let db = fresh_db().await;
    let kitchen = add_category(&db, "Kitchen").await;
    let widget = add_product(&db, kitchen.id, "Widget", dec!(15.00)).await;
    let notebook = add_product(&db, kitchen.id, "Notebook", dec!(26.50)).await;
    let alice = add_customer(&db, "Alice", "Carter", "alice@example.com").await;

    // Widget sells 3 + 5 across two January orders, Notebook sells 4.
    orders::place(
        &db,
        alice.id,
        day(2025, 1, 5),
        &[
            NewOrderLine {
                product_id: widget.id,
                quantity: 3,
            },
            NewOrderLine {
                product_id: notebook.id,
                quantity: 4,
            },
        ],
    )
    .await
    .unwrap();
    orders::place(
        &db,
        alice.id,
        day(2025, 1, 20),
        &[NewOrderLine {
            product_id: widget.id,
            quantity: 5,
        }],
    )
    .await
    .unwrap();

    let rows = reports::top_selling_products(&db, day(2025, 1, 1), day(2025, 2, 1), 5)
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Widget");
    assert_eq!(rows[0].total_quantity, 8);
    assert_eq!(rows[1].name, "Notebook");
    assert_eq!(rows[1].total_quantity, 4);
}

#[tokio::test]
async fn top_selling_products_limits_and_breaks_ties_by_product_id() {
    let db = fresh_db().await;
    let kitchen = add_category(&db, "Kitchen").await;
    let alice = add_customer(&db, "Alice", "Carter", "alice@example.com").await;

    let mut lines = Vec::new();
    let mut ids = Vec::new();
    for (name, quantity) in [
        ("Apron", 10),
        ("Bowl", 9),
        ("Colander", 8),
        ("Dish Rack", 7),
        ("Egg Timer", 5),
        ("Funnel", 5),
    ] {
        let item = add_product(&db, kitchen.id, name, dec!(5.00)).await;
        lines.push(NewOrderLine {
            product_id: item.id,
            quantity,
        });
        ids.push(item.id);
    }
    orders::place(&db, alice.id, day(2025, 1, 5), &lines)
        .await
        .unwrap();

    let rows = reports::top_selling_products(&db, day(2025, 1, 1), day(2025, 2, 1), 5)
        .await
        .unwrap();
    assert_eq!(rows.len(), 5);
    // Egg Timer and Funnel tie at 5; the lower product id takes the last slot.
    assert_eq!(rows[4].product_id, ids[4]);
    assert_eq!(rows[4].name, "Egg Timer");
    let quantities: Vec<i64> = rows.iter().map(|r| r.total_quantity).collect();
    assert_eq!(quantities, vec![10, 9, 8, 7, 5]);
}

#[tokio::test]
async fn top_selling_products_range_is_half_open() {
    let db = fresh_db().await;
    let kitchen = add_category(&db, "Kitchen").await;
    let widget = add_product(&db, kitchen.id, "Widget", dec!(15.00)).await;
    let alice = add_customer(&db, "Alice", "Carter", "alice@example.com").await;

    for (date, quantity) in [
        (day(2025, 1, 1), 2),  // inclusive lower bound
        (day(2025, 1, 31), 3), // last day in range
        (day(2025, 2, 1), 7),  // exclusive upper bound
    ] {
        orders::place(
            &db,
            alice.id,
            date,
            &[NewOrderLine {
                product_id: widget.id,
                quantity,
            }],
        )
        .await
        .unwrap();
    }

    let rows = reports::top_selling_products(&db, day(2025, 1, 1), day(2025, 2, 1), 5)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].total_quantity, 5);
}

#[tokio::test]
async fn high_value_customers_filters_on_total_spent() {
    let db = fresh_db().await;
    let furniture = add_category(&db, "Furniture").await;
    let armchair = add_product(&db, furniture.id, "Armchair", dec!(300.00)).await;
    let rug = add_product(&db, furniture.id, "Rug", dec!(250.00)).await;
    let lamp = add_product(&db, furniture.id, "Lamp", dec!(400.00)).await;
    let sofa = add_product(&db, furniture.id, "Sofa", dec!(600.00)).await;

    let alice = add_customer(&db, "Alice", "Carter", "alice@example.com").await;
    let ben = add_customer(&db, "Ben", "Okoro", "ben@example.com").await;
    let carol = add_customer(&db, "Carol", "Singh", "carol@example.com").await;

    // Alice: 300 + 250 = 550. Ben: a single 400. Carol: 600.
    for (customer_id, product_id, date) in [
        (alice.id, armchair.id, day(2025, 1, 3)),
        (alice.id, rug.id, day(2025, 1, 17)),
        (ben.id, lamp.id, day(2025, 1, 8)),
        (carol.id, sofa.id, day(2025, 1, 22)),
    ] {
        orders::place(
            &db,
            customer_id,
            date,
            &[NewOrderLine {
                product_id,
                quantity: 1,
            }],
        )
        .await
        .unwrap();
    }

    let rows =
        reports::high_value_customers(&db, day(2025, 1, 1), day(2025, 2, 1), dec!(500.00))
            .await
            .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].first_name, "Carol");
    assert_eq!(rows[0].total_spent, dec!(600.00));
    assert_eq!(rows[1].first_name, "Alice");
    assert_eq!(rows[1].total_spent, dec!(550.00));
}
