use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::validation::{StepSpec, ValidationStatus, ValidationStep};

/// Direction of the automatic approval cascade when a step is approved.
///
/// `EarlierSteps` (the default) auto-approves every still-pending step with
/// a lower order than the approved one: a later sign-off implies its
/// precursors were implicitly fine. `LaterSteps` is the opposite reading
/// found in some deployments; both are supported, one must be chosen at
/// engine construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadePolicy {
    EarlierSteps,
    LaterSteps,
}

/// A single step mutation produced by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepUpdate {
    pub step_id: Uuid,
    pub status: ValidationStatus,
    pub reason: String,
    pub action_date: DateTime<Utc>,
}

/// Outcome of an approve/reject call: the step mutations to persist and the
/// recomputed document status. Both must be written in one transaction.
#[derive(Debug, Clone)]
pub struct FlowTransition {
    pub step_updates: Vec<StepUpdate>,
    pub document_status: ValidationStatus,
}

/// Validate step specs at flow-creation time.
///
/// The `order` uniqueness check here is the only guard against ties; the
/// engine itself leaves duplicate orders undefined.
pub fn validate_step_specs(specs: &[StepSpec]) -> Result<(), AppError> {
    if specs.is_empty() {
        return Err(AppError::Validation(
            "at least one validation step is required".to_string(),
        ));
    }

    let mut seen = std::collections::HashSet::new();
    for spec in specs {
        if spec.order <= 0 {
            return Err(AppError::Validation(format!(
                "step order must be a positive integer, got {}",
                spec.order
            )));
        }
        if !seen.insert(spec.order) {
            return Err(AppError::Validation(format!(
                "step order {} is duplicated; orders must be unique within a flow",
                spec.order
            )));
        }
    }

    Ok(())
}

/// Computes legal transitions for one document's validation flow.
#[derive(Debug, Clone)]
pub struct FlowEngine {
    cascade: CascadePolicy,
}

impl Default for FlowEngine {
    fn default() -> Self {
        FlowEngine::new(CascadePolicy::EarlierSteps)
    }
}

impl FlowEngine {
    pub fn new(cascade: CascadePolicy) -> Self {
        FlowEngine { cascade }
    }

    pub fn cascade_policy(&self) -> CascadePolicy {
        self.cascade
    }

    /// Approve the target step on behalf of `acting_user`.
    ///
    /// Steps are the complete flow, in any order; `document_status` is the
    /// document's current derived status (`None` means no flow, which is a
    /// validation error). Re-approving a step that is already approved via
    /// an explicit `target_step` is a no-op.
    pub fn approve(
        &self,
        document_status: Option<ValidationStatus>,
        steps: &[ValidationStep],
        target_step: Option<Uuid>,
        acting_user: Uuid,
        reason: &str,
        now: DateTime<Utc>,
    ) -> Result<FlowTransition, AppError> {
        let current = require_flow(document_status, steps)?;

        if current == ValidationStatus::Rejected {
            return Err(AppError::Conflict(
                "document was already rejected and cannot be approved".to_string(),
            ));
        }

        let ordered = sorted(steps);
        let target = resolve_target(&ordered, target_step)?;
        require_approver(target, acting_user)?;

        match target.status {
            ValidationStatus::Rejected => {
                return Err(AppError::Conflict(
                    "step was rejected and cannot be approved".to_string(),
                ));
            }
            ValidationStatus::Approved => {
                // Explicitly re-approving an approved step changes nothing.
                return Ok(FlowTransition {
                    step_updates: vec![],
                    document_status: derive_status(&ordered, &[]),
                });
            }
            ValidationStatus::Pending => {}
        }

        let mut updates = vec![StepUpdate {
            step_id: target.id,
            status: ValidationStatus::Approved,
            reason: reason.to_string(),
            action_date: now,
        }];

        for step in &ordered {
            if step.status != ValidationStatus::Pending || step.id == target.id {
                continue;
            }
            let cascaded = match self.cascade {
                CascadePolicy::EarlierSteps => step.order < target.order,
                CascadePolicy::LaterSteps => step.order > target.order,
            };
            if cascaded {
                updates.push(StepUpdate {
                    step_id: step.id,
                    status: ValidationStatus::Approved,
                    reason: String::new(),
                    action_date: now,
                });
            }
        }

        Ok(FlowTransition {
            document_status: derive_status(&ordered, &updates),
            step_updates: updates,
        })
    }

    /// Reject the target step on behalf of `acting_user`.
    ///
    /// No cascade: other steps keep their current status. The document
    /// status becomes REJECTED unconditionally and stays there.
    pub fn reject(
        &self,
        document_status: Option<ValidationStatus>,
        steps: &[ValidationStep],
        target_step: Option<Uuid>,
        acting_user: Uuid,
        reason: &str,
        now: DateTime<Utc>,
    ) -> Result<FlowTransition, AppError> {
        let current = require_flow(document_status, steps)?;

        match current {
            ValidationStatus::Approved => {
                return Err(AppError::Conflict(
                    "document was already approved and cannot be rejected".to_string(),
                ));
            }
            ValidationStatus::Rejected => {
                return Err(AppError::Conflict(
                    "document was already rejected".to_string(),
                ));
            }
            ValidationStatus::Pending => {}
        }

        let ordered = sorted(steps);
        let target = resolve_target(&ordered, target_step)?;
        require_approver(target, acting_user)?;

        if target.status != ValidationStatus::Pending {
            return Err(AppError::Conflict(
                "step already left the pending state and cannot be rejected".to_string(),
            ));
        }

        Ok(FlowTransition {
            step_updates: vec![StepUpdate {
                step_id: target.id,
                status: ValidationStatus::Rejected,
                reason: reason.to_string(),
                action_date: now,
            }],
            document_status: ValidationStatus::Rejected,
        })
    }
}

fn require_flow(
    document_status: Option<ValidationStatus>,
    steps: &[ValidationStep],
) -> Result<ValidationStatus, AppError> {
    if steps.is_empty() {
        return Err(AppError::Validation(
            "document has no validation flow".to_string(),
        ));
    }
    document_status.ok_or_else(|| {
        AppError::Validation("document has no validation flow".to_string())
    })
}

fn sorted(steps: &[ValidationStep]) -> Vec<ValidationStep> {
    let mut ordered = steps.to_vec();
    ordered.sort_by(|a, b| {
        a.order
            .cmp(&b.order)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
    ordered
}

/// Resolve the step the action applies to: the explicit id when given,
/// otherwise the first step still pending in `(order, created_at)` order.
fn resolve_target(
    ordered: &[ValidationStep],
    target_step: Option<Uuid>,
) -> Result<&ValidationStep, AppError> {
    match target_step {
        Some(step_id) => ordered
            .iter()
            .find(|step| step.id == step_id)
            .ok_or_else(|| AppError::NotFound("validation step not found".to_string())),
        None => ordered
            .iter()
            .find(|step| step.status == ValidationStatus::Pending)
            .ok_or_else(|| AppError::Validation("no pending step to act on".to_string())),
    }
}

fn require_approver(step: &ValidationStep, acting_user: Uuid) -> Result<(), AppError> {
    if step.approver != Some(acting_user) {
        return Err(AppError::Authorization(
            "user is not the designated approver for this step".to_string(),
        ));
    }
    Ok(())
}

/// Document status after the given updates: APPROVED once nothing is left
/// pending, PENDING otherwise. Rejection never goes through here.
fn derive_status(ordered: &[ValidationStep], updates: &[StepUpdate]) -> ValidationStatus {
    let still_pending = ordered.iter().any(|step| {
        step.status == ValidationStatus::Pending
            && !updates.iter().any(|update| update.step_id == step.id)
    });
    if still_pending {
        ValidationStatus::Pending
    } else {
        ValidationStatus::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn step(order: i32, approver: Option<Uuid>, status: ValidationStatus) -> ValidationStep {
        let created = Utc::now() + Duration::seconds(order as i64);
        ValidationStep {
            id: Uuid::new_v4(),
            flow_id: Uuid::new_v4(),
            order,
            approver,
            status,
            reason: String::new(),
            action_date: None,
            created_at: created,
            updated_at: created,
        }
    }

    fn apply(steps: &mut [ValidationStep], transition: &FlowTransition) {
        for update in &transition.step_updates {
            let target = steps
                .iter_mut()
                .find(|s| s.id == update.step_id)
                .expect("update for unknown step");
            target.status = update.status;
            target.reason = update.reason.clone();
            target.action_date = Some(update.action_date);
        }
    }

    #[test]
    fn test_validate_step_specs_rejects_empty() {
        let err = validate_step_specs(&[]).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_validate_step_specs_rejects_duplicate_orders() {
        let specs = vec![
            StepSpec {
                order: 1,
                approver: None,
            },
            StepSpec {
                order: 1,
                approver: None,
            },
        ];
        let err = validate_step_specs(&specs).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_validate_step_specs_rejects_non_positive_order() {
        let specs = vec![StepSpec {
            order: 0,
            approver: None,
        }];
        assert!(validate_step_specs(&specs).is_err());
    }

    #[test]
    fn test_validate_step_specs_accepts_unique_orders() {
        let specs = vec![
            StepSpec {
                order: 2,
                approver: Some(Uuid::new_v4()),
            },
            StepSpec {
                order: 1,
                approver: None,
            },
        ];
        assert!(validate_step_specs(&specs).is_ok());
    }

    #[test]
    fn full_sequential_approval_approves_document() {
        let engine = FlowEngine::default();
        let u1 = Uuid::new_v4();
        let u2 = Uuid::new_v4();
        let mut steps = vec![
            step(1, Some(u1), ValidationStatus::Pending),
            step(2, Some(u2), ValidationStatus::Pending),
        ];
        let now = Utc::now();

        let first = engine
            .approve(Some(ValidationStatus::Pending), &steps, None, u1, "ok", now)
            .unwrap();
        assert_eq!(first.document_status, ValidationStatus::Pending);
        assert_eq!(first.step_updates.len(), 1);
        apply(&mut steps, &first);
        assert_eq!(steps[0].status, ValidationStatus::Approved);
        assert_eq!(steps[1].status, ValidationStatus::Pending);

        let second = engine
            .approve(Some(ValidationStatus::Pending), &steps, None, u2, "ok", now)
            .unwrap();
        assert_eq!(second.document_status, ValidationStatus::Approved);
        apply(&mut steps, &second);
        assert!(steps
            .iter()
            .all(|s| s.status == ValidationStatus::Approved && s.action_date.is_some()));
    }

    #[test]
    fn approve_targets_first_pending_by_order() {
        let engine = FlowEngine::default();
        let u1 = Uuid::new_v4();
        let u2 = Uuid::new_v4();
        // Supplied out of order; the engine must sort by order.
        let steps = vec![
            step(2, Some(u2), ValidationStatus::Pending),
            step(1, Some(u1), ValidationStatus::Pending),
        ];

        // u2 is the approver of step 2, but the first pending step is step 1.
        let err = engine
            .approve(
                Some(ValidationStatus::Pending),
                &steps,
                None,
                u2,
                "",
                Utc::now(),
            )
            .unwrap_err();
        assert!(matches!(err, AppError::Authorization(_)));
    }

    #[test]
    fn approve_with_explicit_unknown_step_is_not_found() {
        let engine = FlowEngine::default();
        let u1 = Uuid::new_v4();
        let steps = vec![step(1, Some(u1), ValidationStatus::Pending)];
        let err = engine
            .approve(
                Some(ValidationStatus::Pending),
                &steps,
                Some(Uuid::new_v4()),
                u1,
                "",
                Utc::now(),
            )
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn approve_by_non_approver_is_denied() {
        let engine = FlowEngine::default();
        let steps = vec![step(1, Some(Uuid::new_v4()), ValidationStatus::Pending)];
        let err = engine
            .approve(
                Some(ValidationStatus::Pending),
                &steps,
                None,
                Uuid::new_v4(),
                "",
                Utc::now(),
            )
            .unwrap_err();
        assert!(matches!(err, AppError::Authorization(_)));
    }

    #[test]
    fn approve_step_without_designated_approver_is_denied() {
        let engine = FlowEngine::default();
        let steps = vec![step(1, None, ValidationStatus::Pending)];
        let err = engine
            .approve(
                Some(ValidationStatus::Pending),
                &steps,
                None,
                Uuid::new_v4(),
                "",
                Utc::now(),
            )
            .unwrap_err();
        assert!(matches!(err, AppError::Authorization(_)));
    }

    #[test]
    fn approve_on_rejected_document_is_conflict() {
        let engine = FlowEngine::default();
        let u1 = Uuid::new_v4();
        let steps = vec![step(1, Some(u1), ValidationStatus::Rejected)];
        let err = engine
            .approve(
                Some(ValidationStatus::Rejected),
                &steps,
                None,
                u1,
                "",
                Utc::now(),
            )
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn approve_without_flow_is_validation_error() {
        let engine = FlowEngine::default();
        let err = engine
            .approve(None, &[], None, Uuid::new_v4(), "", Utc::now())
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn approve_with_no_pending_step_is_validation_error() {
        let engine = FlowEngine::default();
        let u1 = Uuid::new_v4();
        let steps = vec![step(1, Some(u1), ValidationStatus::Approved)];
        let err = engine
            .approve(
                Some(ValidationStatus::Approved),
                &steps,
                None,
                u1,
                "",
                Utc::now(),
            )
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn re_approving_an_approved_step_explicitly_is_a_noop() {
        let engine = FlowEngine::default();
        let u1 = Uuid::new_v4();
        let u2 = Uuid::new_v4();
        let steps = vec![
            step(1, Some(u1), ValidationStatus::Approved),
            step(2, Some(u2), ValidationStatus::Pending),
        ];
        let transition = engine
            .approve(
                Some(ValidationStatus::Pending),
                &steps,
                Some(steps[0].id),
                u1,
                "again",
                Utc::now(),
            )
            .unwrap();
        assert!(transition.step_updates.is_empty());
        assert_eq!(transition.document_status, ValidationStatus::Pending);
    }

    #[test]
    fn cascade_auto_approves_earlier_pending_steps() {
        let engine = FlowEngine::new(CascadePolicy::EarlierSteps);
        let u3 = Uuid::new_v4();
        let mut steps = vec![
            step(1, Some(Uuid::new_v4()), ValidationStatus::Pending),
            step(2, Some(Uuid::new_v4()), ValidationStatus::Pending),
            step(3, Some(u3), ValidationStatus::Pending),
        ];
        let now = Utc::now();
        let target = steps[2].id;

        let transition = engine
            .approve(
                Some(ValidationStatus::Pending),
                &steps,
                Some(target),
                u3,
                "final sign-off",
                now,
            )
            .unwrap();

        assert_eq!(transition.step_updates.len(), 3);
        assert_eq!(transition.document_status, ValidationStatus::Approved);
        assert!(transition
            .step_updates
            .iter()
            .all(|u| u.status == ValidationStatus::Approved && u.action_date == now));
        apply(&mut steps, &transition);
        assert!(steps.iter().all(|s| s.action_date == Some(now)));
        // Only the acted-upon step carries the reason.
        assert_eq!(steps[2].reason, "final sign-off");
        assert_eq!(steps[0].reason, "");
    }

    #[test]
    fn cascade_later_steps_policy_approves_successors() {
        let engine = FlowEngine::new(CascadePolicy::LaterSteps);
        let u1 = Uuid::new_v4();
        let steps = vec![
            step(1, Some(u1), ValidationStatus::Pending),
            step(2, Some(Uuid::new_v4()), ValidationStatus::Pending),
            step(3, Some(Uuid::new_v4()), ValidationStatus::Pending),
        ];

        let transition = engine
            .approve(
                Some(ValidationStatus::Pending),
                &steps,
                None,
                u1,
                "",
                Utc::now(),
            )
            .unwrap();

        assert_eq!(transition.step_updates.len(), 3);
        assert_eq!(transition.document_status, ValidationStatus::Approved);
    }

    #[test]
    fn approving_middle_step_leaves_later_steps_pending() {
        let engine = FlowEngine::default();
        let u2 = Uuid::new_v4();
        let mut steps = vec![
            step(1, Some(Uuid::new_v4()), ValidationStatus::Pending),
            step(2, Some(u2), ValidationStatus::Pending),
            step(3, Some(Uuid::new_v4()), ValidationStatus::Pending),
        ];
        let target = steps[1].id;

        let transition = engine
            .approve(
                Some(ValidationStatus::Pending),
                &steps,
                Some(target),
                u2,
                "",
                Utc::now(),
            )
            .unwrap();

        // Step 1 cascades, step 3 stays pending, document stays pending.
        assert_eq!(transition.step_updates.len(), 2);
        assert_eq!(transition.document_status, ValidationStatus::Pending);
        apply(&mut steps, &transition);
        assert_eq!(steps[2].status, ValidationStatus::Pending);
    }

    #[test]
    fn reject_sets_document_rejected_and_keeps_other_steps() {
        let engine = FlowEngine::default();
        let u1 = Uuid::new_v4();
        let mut steps = vec![
            step(1, Some(u1), ValidationStatus::Pending),
            step(2, Some(Uuid::new_v4()), ValidationStatus::Pending),
        ];
        let now = Utc::now();

        let transition = engine
            .reject(
                Some(ValidationStatus::Pending),
                &steps,
                None,
                u1,
                "incomplete data",
                now,
            )
            .unwrap();

        assert_eq!(transition.document_status, ValidationStatus::Rejected);
        assert_eq!(transition.step_updates.len(), 1);
        apply(&mut steps, &transition);
        assert_eq!(steps[0].status, ValidationStatus::Rejected);
        assert_eq!(steps[0].reason, "incomplete data");
        assert_eq!(steps[0].action_date, Some(now));
        assert_eq!(steps[1].status, ValidationStatus::Pending);
    }

    #[test]
    fn reject_on_approved_document_is_conflict() {
        let engine = FlowEngine::default();
        let u1 = Uuid::new_v4();
        let steps = vec![step(1, Some(u1), ValidationStatus::Approved)];
        let err = engine
            .reject(
                Some(ValidationStatus::Approved),
                &steps,
                None,
                u1,
                "",
                Utc::now(),
            )
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn reject_on_rejected_document_is_conflict() {
        let engine = FlowEngine::default();
        let u1 = Uuid::new_v4();
        let steps = vec![
            step(1, Some(u1), ValidationStatus::Rejected),
            step(2, Some(Uuid::new_v4()), ValidationStatus::Pending),
        ];
        let err = engine
            .reject(
                Some(ValidationStatus::Rejected),
                &steps,
                None,
                u1,
                "",
                Utc::now(),
            )
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn reject_explicit_approved_step_is_conflict() {
        let engine = FlowEngine::default();
        let u1 = Uuid::new_v4();
        let steps = vec![
            step(1, Some(u1), ValidationStatus::Approved),
            step(2, Some(Uuid::new_v4()), ValidationStatus::Pending),
        ];
        let err = engine
            .reject(
                Some(ValidationStatus::Pending),
                &steps,
                Some(steps[0].id),
                u1,
                "",
                Utc::now(),
            )
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn ties_on_order_break_by_creation_time() {
        let engine = FlowEngine::default();
        let early_approver = Uuid::new_v4();
        let mut early = step(1, Some(early_approver), ValidationStatus::Pending);
        let mut late = step(1, Some(Uuid::new_v4()), ValidationStatus::Pending);
        early.created_at = Utc::now() - Duration::seconds(60);
        late.created_at = Utc::now();

        let transition = engine
            .approve(
                Some(ValidationStatus::Pending),
                &[late, early.clone()],
                None,
                early_approver,
                "",
                Utc::now(),
            )
            .unwrap();
        assert_eq!(transition.step_updates[0].step_id, early.id);
    }
}
