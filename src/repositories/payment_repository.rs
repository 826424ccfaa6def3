use crate::models::payment::{MockEsewaTransaction, TransactionStatus};
use crate::utils::errors::AppError;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

const UNIQUE_VIOLATION: &str = "23505";

pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn record(
        &self,
        pid: String,
        user_id: Uuid,
        vehicle_id: Uuid,
        booking_id: Option<Uuid>,
        esewa_id: String,
        amount: Decimal,
        status: TransactionStatus,
    ) -> Result<MockEsewaTransaction, AppError> {
        let transaction = sqlx::query_as::<_, MockEsewaTransaction>(
            r#"
            INSERT INTO mock_esewa_transactions (id, pid, user_id, vehicle_id, booking_id, esewa_id, amount, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(pid)
        .bind(user_id)
        .bind(vehicle_id)
        .bind(booking_id)
        .bind(esewa_id)
        .bind(amount)
        .bind(status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                    return AppError::Conflict("El pid ya fue utilizado".to_string());
                }
            }
            AppError::Database(format!("Error recording transaction: {}", e))
        })?;

        Ok(transaction)
    }

    pub async fn list_all(&self) -> Result<Vec<MockEsewaTransaction>, AppError> {
        let transactions = sqlx::query_as::<_, MockEsewaTransaction>(
            "SELECT * FROM mock_esewa_transactions ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing transactions: {}", e)))?;

        Ok(transactions)
    }
}
