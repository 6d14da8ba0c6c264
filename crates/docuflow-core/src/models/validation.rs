use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Status of a validation step, and of a document once a flow is attached.
///
/// A document without a flow has no status at all (`None` at the document
/// level). Step statuses only ever move out of `Pending`, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "validation_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    Pending,
    Approved,
    Rejected,
}

/// Validation flow attached to exactly one document.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ValidationFlow {
    pub id: Uuid,
    pub document_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One approval checkpoint within a flow.
///
/// Steps are totally ordered by `(order, created_at)`; `order` is unique
/// within a flow and immutable after creation.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ValidationStep {
    pub id: Uuid,
    pub flow_id: Uuid,
    #[sqlx(rename = "step_order")]
    pub order: i32,
    pub approver: Option<Uuid>,
    pub status: ValidationStatus,
    pub reason: String,
    pub action_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Step specification supplied at document submission.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StepSpec {
    /// Position in the flow; must be positive and unique per flow
    pub order: i32,
    /// Designated approver for this step
    #[serde(default)]
    pub approver: Option<Uuid>,
}

/// Request body for approve/reject actions.
#[derive(Debug, Deserialize, ToSchema)]
pub struct StepActionRequest {
    /// Explicit target step. When omitted, the first step still pending
    /// (lowest order) is targeted.
    #[serde(default)]
    pub step_id: Option<Uuid>,
    /// Free-text reason recorded on the acted-upon step
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationStepResponse {
    pub id: Uuid,
    pub order: i32,
    pub approver: Option<Uuid>,
    pub status: ValidationStatus,
    pub reason: String,
    pub action_date: Option<DateTime<Utc>>,
}

impl From<ValidationStep> for ValidationStepResponse {
    fn from(step: ValidationStep) -> Self {
        ValidationStepResponse {
            id: step.id,
            order: step.order,
            approver: step.approver,
            status: step.status,
            reason: step.reason,
            action_date: step.action_date,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationFlowResponse {
    pub id: Uuid,
    pub steps: Vec<ValidationStepResponse>,
}

impl ValidationFlowResponse {
    pub fn from_parts(flow: ValidationFlow, steps: Vec<ValidationStep>) -> Self {
        ValidationFlowResponse {
            id: flow.id,
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ValidationStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&ValidationStatus::Approved).unwrap(),
            "\"approved\""
        );
        assert_eq!(
            serde_json::to_string(&ValidationStatus::Rejected).unwrap(),
            "\"rejected\""
        );
    }

    #[test]
    fn test_step_spec_approver_defaults_to_none() {
        let spec: StepSpec = serde_json::from_str(r#"{"order": 1}"#).unwrap();
        assert_eq!(spec.order, 1);
        assert!(spec.approver.is_none());
    }
}
