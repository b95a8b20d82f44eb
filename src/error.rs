use sea_orm::DbErr;
use thiserror::Error;

/// Everything the store and report layers can fail with.
///
/// Constraint violations the engine reports but sea-orm does not classify
/// (check constraints, mainly) surface as [`Error::Db`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("database error: {0}")]
    Db(#[from] DbErr),
    #[error("no category with id {0}")]
    CategoryNotFound(i32),
    #[error("no customer with id {0}")]
    CustomerNotFound(i32),
    #[error("no product with id {0}")]
    ProductNotFound(i32),
    #[error("no order with id {0}")]
    OrderNotFound(i32),
    #[error("no order line with id {0}")]
    OrderLineNotFound(i32),
    #[error("email {0} is already registered")]
    DuplicateEmail(String),
    #[error("an order needs at least one line")]
    EmptyOrder,
    #[error("quantity must be greater than 0, got {0}")]
    InvalidQuantity(i32),
}
