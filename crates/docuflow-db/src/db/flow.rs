use docuflow_core::flow::StepUpdate;
use docuflow_core::models::{StepSpec, ValidationFlow, ValidationStep};
use docuflow_core::AppError;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

const STEP_COLUMNS: &str =
    "id, flow_id, step_order, approver, status, reason, action_date, created_at, updated_at";

/// Repository for validation flows and their steps
#[derive(Clone)]
pub struct FlowRepository {
    pool: PgPool,
}

impl FlowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a flow with all steps PENDING, inside the caller's
    /// transaction. Step specs must already be validated (non-empty,
    /// unique orders); the unique constraint on (flow_id, step_order) is
    /// the last line of defense.
    pub async fn create(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        document_id: Uuid,
        steps: &[StepSpec],
    ) -> Result<ValidationFlow, AppError> {
        let flow = sqlx::query_as::<_, ValidationFlow>(
            r#"
            INSERT INTO validation_flows (document_id)
            VALUES ($1)
            RETURNING id, document_id, created_at, updated_at
            "#,
        )
        .bind(document_id)
        .fetch_one(&mut **tx)
        .await?;

        for spec in steps {
            sqlx::query(
                r#"
                INSERT INTO validation_steps (flow_id, step_order, approver)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(flow.id)
            .bind(spec.order)
            .bind(spec.approver)
            .execute(&mut **tx)
            .await?;
        }

        Ok(flow)
    }

    pub async fn get_by_document(
        &self,
        document_id: Uuid,
    ) -> Result<Option<ValidationFlow>, AppError> {
        let flow = sqlx::query_as::<_, ValidationFlow>(
            r#"
            SELECT id, document_id, created_at, updated_at
            FROM validation_flows
            WHERE document_id = $1
            "#,
        )
        .bind(document_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(flow)
    }

    pub async fn get_by_document_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        document_id: Uuid,
    ) -> Result<Option<ValidationFlow>, AppError> {
        let flow = sqlx::query_as::<_, ValidationFlow>(
            r#"
            SELECT id, document_id, created_at, updated_at
            FROM validation_flows
            WHERE document_id = $1
            "#,
        )
        .bind(document_id)
        .fetch_optional(&mut **tx)
        .await?;

        Ok(flow)
    }

    pub async fn list_steps(&self, flow_id: Uuid) -> Result<Vec<ValidationStep>, AppError> {
        let steps = sqlx::query_as::<_, ValidationStep>(&format!(
            r#"
            SELECT {STEP_COLUMNS}
            FROM validation_steps
            WHERE flow_id = $1
            ORDER BY step_order, created_at
            "#
        ))
        .bind(flow_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(steps)
    }

    /// Locking read of the full step list for a transition. Ordered the
    /// same way the engine orders steps so target selection is
    /// deterministic.
    pub async fn steps_for_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        flow_id: Uuid,
    ) -> Result<Vec<ValidationStep>, AppError> {
        let steps = sqlx::query_as::<_, ValidationStep>(&format!(
            r#"
            SELECT {STEP_COLUMNS}
            FROM validation_steps
            WHERE flow_id = $1
            ORDER BY step_order, created_at
            FOR UPDATE
            "#
        ))
        .bind(flow_id)
        .fetch_all(&mut **tx)
        .await?;

        Ok(steps)
    }

    pub async fn apply_step_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        update: &StepUpdate,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE validation_steps
            SET status = $2, reason = $3, action_date = $4, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(update.step_id)
        .bind(update.status)
        .bind(&update.reason)
        .bind(update.action_date)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }
}
