//! `SeaORM` active enums mapped to database enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Transaction polarity, stored in the `transaction_kind` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "transaction_kind")]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money received.
    #[sea_orm(string_value = "income")]
    Income,
    /// Money spent.
    #[sea_orm(string_value = "expense")]
    Expense,
}

impl From<TransactionKind> for fintrack_core::summary::TransactionKind {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Income => Self::Income,
            TransactionKind::Expense => Self::Expense,
        }
    }
}

impl From<fintrack_core::summary::TransactionKind> for TransactionKind {
    fn from(kind: fintrack_core::summary::TransactionKind) -> Self {
        match kind {
            fintrack_core::summary::TransactionKind::Income => Self::Income,
            fintrack_core::summary::TransactionKind::Expense => Self::Expense,
        }
    }
}
