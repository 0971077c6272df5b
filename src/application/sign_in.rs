use crate::application::submit::{InFlightGuard, SubmitOutcome};
use crate::domain::error::FlowError;
use crate::domain::form::SignInData;
use crate::domain::ports::{AuthProvider, NoticeKind, Notifier};
use crate::domain::validation::{Schema, sign_in_schema};
use std::sync::Arc;
use tracing::{info, instrument, trace, warn};
use uuid::Uuid;

/// Submit handler for the sign-in screen. Credential exchange and the
/// resulting session are owned by the authentication collaborator; on
/// success this flow has nothing further to do.
pub struct SignInFlow<A: AuthProvider> {
    auth: Arc<A>,
    notifier: Arc<dyn Notifier>,
    schema: Schema,
    in_flight: InFlightGuard,
}

impl<A: AuthProvider> SignInFlow<A> {
    pub fn new(auth: Arc<A>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            auth,
            notifier,
            schema: sign_in_schema(),
            in_flight: InFlightGuard::new(),
        }
    }

    #[instrument(skip(self, data), fields(email = %data.email, attempt_id = %Uuid::new_v4()))]
    pub async fn submit(&self, data: SignInData) -> SubmitOutcome {
        let Some(_permit) = self.in_flight.try_begin() else {
            warn!("Submission already in flight, ignoring");
            return SubmitOutcome::InFlight;
        };

        match self.attempt(&data).await {
            Ok(()) => {
                info!(email = %data.email, "Signed in successfully");
                SubmitOutcome::Completed
            }
            Err(FlowError::Validation(errors)) => {
                info!(violations = errors.len(), "Sign-in form rejected by schema");
                SubmitOutcome::FieldErrors(errors)
            }
            Err(FlowError::Operation(reason)) => {
                warn!(error = %reason, "Authentication failed");
                self.notifier.notify(
                    NoticeKind::Error,
                    "Authentication failed",
                    "There was a problem with your credentials.",
                );
                SubmitOutcome::Failed
            }
        }
    }

    async fn attempt(&self, data: &SignInData) -> Result<(), FlowError> {
        trace!("Validating sign-in form");
        self.schema.validate(data).map_err(FlowError::Validation)?;

        trace!("Exchanging credentials");
        self.auth
            .sign_in(data)
            .await
            .map_err(|e| FlowError::Operation(e.to_string()))?;

        Ok(())
    }
}
