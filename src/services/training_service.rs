use chrono::{Local, NaiveDate};
use serde::Deserialize;
use sqlx::PgPool;

use super::{ensure_id, interpret, interpret_created, Mutation, ServiceError};
use crate::database::models::{Assignment, AssignmentStatus, Session};
use crate::database::repository::assignments::AssignmentFilter;
use crate::database::repository::{AssignmentRepository, SessionRepository};
use crate::error::FieldErrors;
use crate::middleware::{AuthUser, Validate, Validator};

pub const MAX_PLANNED_SESSIONS: i32 = 100;

/// Assign a cognitive variable to a student under a trainer
#[derive(Debug, Deserialize)]
pub struct AssignTrainingRequest {
    pub student_id: i32,
    pub trainer_id: i32,
    pub variable_id: i32,
    pub planned_sessions: i32,
    /// Defaults to today
    pub start_date: Option<NaiveDate>,
}

impl Validate for AssignTrainingRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        Validator::new()
            .positive("student_id", self.student_id)
            .positive("trainer_id", self.trainer_id)
            .positive("variable_id", self.variable_id)
            .range("planned_sessions", self.planned_sessions, 1, MAX_PLANNED_SESSIONS)
            .finish()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ModifyTrainingRequest {
    pub trainer_id: Option<i32>,
    pub planned_sessions: Option<i32>,
    pub end_date: Option<NaiveDate>,
}

impl Validate for ModifyTrainingRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.check(
            "training",
            self.trainer_id.is_some() || self.planned_sessions.is_some() || self.end_date.is_some(),
            "At least one of trainer_id, planned_sessions or end_date is required",
        );
        if let Some(trainer_id) = self.trainer_id {
            v.positive("trainer_id", trainer_id);
        }
        if let Some(planned) = self.planned_sessions {
            v.range("planned_sessions", planned, 1, MAX_PLANNED_SESSIONS);
        }
        v.finish()
    }
}

/// Body of the abandon endpoints for both assignments and sessions
#[derive(Debug, Deserialize)]
pub struct AbandonRequest {
    pub reason: String,
}

impl Validate for AbandonRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        Validator::new()
            .required("reason", &self.reason)
            .max_len("reason", &self.reason, 500)
            .finish()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AssignmentQuery {
    pub status: Option<AssignmentStatus>,
    pub trainer_id: Option<i32>,
    pub student_id: Option<i32>,
}

/// Assignment lifecycle: creation, modification, finish and abandon.
///
/// Trainers may only touch their own assignments. Admins act with a NULL
/// actor and the stored functions skip the ownership check for them.
pub struct TrainingService {
    assignments: AssignmentRepository,
    sessions: SessionRepository,
}

impl TrainingService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            assignments: AssignmentRepository::new(pool.clone()),
            sessions: SessionRepository::new(pool),
        }
    }

    pub async fn list(&self, query: &AssignmentQuery) -> Result<Vec<Assignment>, ServiceError> {
        if let Some(trainer_id) = query.trainer_id {
            ensure_id("trainer_id", trainer_id)?;
        }
        if let Some(student_id) = query.student_id {
            ensure_id("student_id", student_id)?;
        }
        let filter = AssignmentFilter {
            status: query.status,
            trainer_id: query.trainer_id,
            student_id: query.student_id,
        };
        Ok(self.assignments.select_any(filter).await?)
    }

    /// Assignments of the calling trainer
    pub async fn list_own(
        &self,
        user: &AuthUser,
        status: Option<AssignmentStatus>,
    ) -> Result<Vec<Assignment>, ServiceError> {
        let trainer_id = user
            .trainer_id
            .ok_or_else(|| ServiceError::Forbidden("No trainer profile linked to this account".into()))?;
        let filter = AssignmentFilter {
            status,
            trainer_id: Some(trainer_id),
            student_id: None,
        };
        Ok(self.assignments.select_any(filter).await?)
    }

    pub async fn get(&self, user: &AuthUser, id: i32) -> Result<Assignment, ServiceError> {
        let id = ensure_id("id", id)?;
        let assignment = self.assignments.select_404(id).await?;
        check_owner(user, &assignment)?;
        Ok(assignment)
    }

    pub async fn sessions(&self, user: &AuthUser, id: i32) -> Result<Vec<Session>, ServiceError> {
        let assignment = self.get(user, id).await?;
        Ok(self.sessions.select_by_assignment(assignment.id).await?)
    }

    /// Creates the assignment and its planned sessions in one database call
    pub async fn assign(&self, request: &AssignTrainingRequest) -> Result<Mutation, ServiceError> {
        let start_date = request.start_date.unwrap_or_else(|| Local::now().date_naive());
        let row = self
            .assignments
            .assign(
                request.student_id,
                request.trainer_id,
                request.variable_id,
                request.planned_sessions,
                start_date,
            )
            .await?;
        let mutation = interpret_created(row)?;
        tracing::info!(
            "Assigned variable {} to student {} (trainer {}, {} sessions)",
            request.variable_id,
            request.student_id,
            request.trainer_id,
            request.planned_sessions
        );
        Ok(mutation)
    }

    pub async fn modify(
        &self,
        user: &AuthUser,
        id: i32,
        request: &ModifyTrainingRequest,
    ) -> Result<Mutation, ServiceError> {
        let assignment = self.open_assignment(user, id).await?;
        check_reassign(user, request)?;

        let message = self
            .assignments
            .modify_training(
                assignment.id,
                user.acting_trainer(),
                request.trainer_id,
                request.planned_sessions,
                request.end_date,
            )
            .await?;
        interpret(message)
    }

    pub async fn finish(&self, user: &AuthUser, id: i32) -> Result<Mutation, ServiceError> {
        let assignment = self.open_assignment(user, id).await?;
        interpret(self.assignments.finish(assignment.id, user.acting_trainer()).await?)
    }

    pub async fn abandon(&self, user: &AuthUser, id: i32, request: &AbandonRequest) -> Result<Mutation, ServiceError> {
        let assignment = self.open_assignment(user, id).await?;
        let message = self
            .assignments
            .abandon(assignment.id, user.acting_trainer(), request.reason.trim())
            .await?;
        interpret(message)
    }

    async fn open_assignment(&self, user: &AuthUser, id: i32) -> Result<Assignment, ServiceError> {
        let assignment = self.get(user, id).await?;
        if !assignment.status.is_open() {
            return Err(ServiceError::InvalidState(format!(
                "Assignment {} is {}",
                assignment.id, assignment.status
            )));
        }
        Ok(assignment)
    }
}

fn check_owner(user: &AuthUser, assignment: &Assignment) -> Result<(), ServiceError> {
    if user.may_act_for(assignment.trainer_id) {
        Ok(())
    } else {
        Err(ServiceError::Forbidden(format!(
            "Assignment {} belongs to another trainer",
            assignment.id
        )))
    }
}

fn check_reassign(user: &AuthUser, request: &ModifyTrainingRequest) -> Result<(), ServiceError> {
    match request.trainer_id {
        Some(target) if !user.is_admin() && Some(target) != user.trainer_id => Err(ServiceError::Forbidden(
            "Only an administrator can move an assignment to another trainer".into(),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;

    fn trainer(trainer_id: i32) -> AuthUser {
        AuthUser {
            user_id: 10,
            trainer_id: Some(trainer_id),
            name: "Carlos Mendoza".into(),
            email: "carlos@uleam.edu.ec".into(),
            role: Role::Trainer,
        }
    }

    fn assignment(trainer_id: i32) -> Assignment {
        Assignment {
            id: 7,
            student_id: 3,
            student: "María Zambrano".into(),
            trainer_id,
            trainer: "Carlos Mendoza".into(),
            variable_id: 1,
            variable: "Atención".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            end_date: None,
            planned_sessions: 10,
            completed_sessions: 2,
            status: AssignmentStatus::InProgress,
        }
    }

    #[test]
    fn trainers_only_see_their_assignments() {
        assert!(check_owner(&trainer(4), &assignment(4)).is_ok());
        assert!(matches!(
            check_owner(&trainer(5), &assignment(4)),
            Err(ServiceError::Forbidden(_))
        ));

        let admin = AuthUser {
            trainer_id: None,
            role: Role::Admin,
            ..trainer(0)
        };
        assert!(check_owner(&admin, &assignment(4)).is_ok());
    }

    #[test]
    fn only_admins_move_assignments_between_trainers() {
        let to = |trainer_id| ModifyTrainingRequest {
            trainer_id: Some(trainer_id),
            ..Default::default()
        };

        assert!(matches!(
            check_reassign(&trainer(4), &to(9)),
            Err(ServiceError::Forbidden(_))
        ));
        assert!(check_reassign(&trainer(4), &to(4)).is_ok());
        assert!(check_reassign(&trainer(4), &ModifyTrainingRequest::default()).is_ok());

        let admin = AuthUser {
            trainer_id: None,
            role: Role::Admin,
            ..trainer(0)
        };
        assert!(check_reassign(&admin, &to(9)).is_ok());
    }

    #[test]
    fn modify_requires_some_change() {
        let errors = ModifyTrainingRequest::default().validate().unwrap_err();
        assert!(errors.contains_key("training"));

        let request = ModifyTrainingRequest {
            planned_sessions: Some(0),
            ..Default::default()
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("planned_sessions"));
    }

    #[test]
    fn assign_request_bounds() {
        let request: AssignTrainingRequest = serde_json::from_value(serde_json::json!({
            "student_id": 3,
            "trainer_id": 4,
            "variable_id": 1,
            "planned_sessions": 101
        }))
        .unwrap();
        assert!(request.start_date.is_none());
        assert!(request.validate().unwrap_err().contains_key("planned_sessions"));
    }

    #[test]
    fn abandon_needs_a_reason() {
        let request = AbandonRequest { reason: "   ".into() };
        assert!(request.validate().is_err());
    }
}
