use serde::Deserialize;
use sqlx::PgPool;

use super::training_service::AbandonRequest;
use super::{ensure_id, interpret, Mutation, ServiceError};
use crate::database::models::{Session, SessionAction};
use crate::database::repository::SessionRepository;
use crate::error::FieldErrors;
use crate::middleware::{AuthUser, Validate, Validator};

#[derive(Debug, Deserialize)]
pub struct FinishSessionRequest {
    pub score: f64,
    pub observations: Option<String>,
}

impl Validate for FinishSessionRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.score("score", self.score);
        if let Some(observations) = &self.observations {
            v.max_len("observations", observations, 1000);
        }
        v.finish()
    }
}

pub struct SessionService {
    sessions: SessionRepository,
}

impl SessionService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            sessions: SessionRepository::new(pool),
        }
    }

    pub async fn get(&self, user: &AuthUser, id: i32) -> Result<Session, ServiceError> {
        let id = ensure_id("id", id)?;
        let session = self.sessions.select_404(id).await?;
        check_owner(user, &session)?;
        Ok(session)
    }

    pub async fn start(&self, user: &AuthUser, id: i32) -> Result<Mutation, ServiceError> {
        let session = self.prepare(user, id, SessionAction::Start).await?;
        interpret(self.sessions.start(session.id, user.acting_trainer()).await?)
    }

    pub async fn finish(
        &self,
        user: &AuthUser,
        id: i32,
        request: &FinishSessionRequest,
    ) -> Result<Mutation, ServiceError> {
        let session = self.prepare(user, id, SessionAction::Finish).await?;
        let observations = request
            .observations
            .as_deref()
            .map(str::trim)
            .filter(|o| !o.is_empty());
        let message = self
            .sessions
            .finish(session.id, user.acting_trainer(), request.score, observations)
            .await?;
        interpret(message)
    }

    pub async fn abandon(&self, user: &AuthUser, id: i32, request: &AbandonRequest) -> Result<Mutation, ServiceError> {
        let session = self.prepare(user, id, SessionAction::Abandon).await?;
        let message = self
            .sessions
            .abandon(session.id, user.acting_trainer(), request.reason.trim())
            .await?;
        interpret(message)
    }

    /// Load the session and refuse moves its current status does not allow.
    /// The stored function re-checks everything inside its transaction.
    async fn prepare(&self, user: &AuthUser, id: i32, action: SessionAction) -> Result<Session, ServiceError> {
        let session = self.get(user, id).await?;
        check_transition(&session, action)?;
        Ok(session)
    }
}

fn check_owner(user: &AuthUser, session: &Session) -> Result<(), ServiceError> {
    if user.may_act_for(session.trainer_id) {
        Ok(())
    } else {
        Err(ServiceError::Forbidden(format!(
            "Session {} belongs to another trainer",
            session.id
        )))
    }
}

fn check_transition(session: &Session, action: SessionAction) -> Result<(), ServiceError> {
    match session.status.apply(action) {
        Some(_) => Ok(()),
        None => Err(ServiceError::InvalidState(format!(
            "Cannot {} session {} while it is {}",
            action.as_str(),
            session.id,
            session.status
        ))),
    }
}
