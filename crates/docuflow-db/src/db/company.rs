use docuflow_core::models::{Company, CompanyMembership};
use docuflow_core::AppError;
use sqlx::PgPool;
use uuid::Uuid;

/// Repository for the company catalog
#[derive(Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str) -> Result<Company, AppError> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(company)
    }

    pub async fn get(&self, company_id: Uuid) -> Result<Option<Company>, AppError> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM companies
            WHERE id = $1
            "#,
        )
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(company)
    }
}

/// Repository answering "is user U a member of company C?"
#[derive(Clone)]
pub struct MembershipRepository {
    pool: PgPool,
}

impl MembershipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn add(
        &self,
        company_id: Uuid,
        user_id: Uuid,
    ) -> Result<CompanyMembership, AppError> {
        let membership = sqlx::query_as::<_, CompanyMembership>(
            r#"
            INSERT INTO company_memberships (company_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (company_id, user_id) DO UPDATE SET updated_at = NOW()
            RETURNING id, company_id, user_id, created_at, updated_at
            "#,
        )
        .bind(company_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(membership)
    }

    pub async fn is_member(&self, company_id: Uuid, user_id: Uuid) -> Result<bool, AppError> {
        let exists: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM company_memberships
                WHERE company_id = $1 AND user_id = $2
            )
            "#,
        )
        .bind(company_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists.0)
    }
}
