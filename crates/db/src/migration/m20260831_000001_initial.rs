//! Initial schema: users and transactions.
//!
//! Deleting a user must delete all owned transactions; the cascade on
//! `transactions.user_id` is the enforcement point for that invariant.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(INITIAL_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS transactions CASCADE;
             DROP TABLE IF EXISTS users CASCADE;
             DROP TYPE IF EXISTS transaction_kind;",
        )
        .await?;
        Ok(())
    }
}

const INITIAL_SQL: &str = r"
-- Transaction polarity
CREATE TYPE transaction_kind AS ENUM ('income', 'expense');

CREATE TABLE users (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(100) NOT NULL,
    email VARCHAR(120) NOT NULL UNIQUE,
    password_hash VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE transactions (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    kind transaction_kind NOT NULL,
    category VARCHAR(50) NOT NULL,
    amount NUMERIC(14, 2) NOT NULL,
    description TEXT,
    occurred_at TIMESTAMPTZ NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_amount_positive CHECK (amount > 0)
);

-- Listing is always per user, newest first
CREATE INDEX idx_transactions_user_date ON transactions(user_id, occurred_at DESC);
";
