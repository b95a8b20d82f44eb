use sea_orm::entity::prelude::*;
use serde::Serialize;
use crate::entities::customer::Entity as Customer;

/// `total_amount` is stored redundantly rather than derived from the
/// order's lines; the store layer recomputes it on every write that
/// touches them. No trigger keeps it honest.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_id: i32,
    pub order_date: Date,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total_amount: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Customer",
        from = "Column::CustomerId",
        to = "crate::entities::customer::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade",
    )]
    Customer,
}

impl Related<crate::entities::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
