use crate::application::submit::{InFlightGuard, SubmitOutcome};
use crate::domain::error::FlowError;
use crate::domain::form::SignUpData;
use crate::domain::ports::{Navigator, NoticeKind, Notifier, UserGateway};
use crate::domain::validation::{Schema, sign_up_schema};
use std::sync::Arc;
use tracing::{error, info, instrument, trace, warn};
use uuid::Uuid;

/// Submit handler for the sign-up screen: validate, create the user record
/// remotely, confirm and navigate back.
pub struct SignUpFlow<G: UserGateway> {
    gateway: Arc<G>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    schema: Schema,
    in_flight: InFlightGuard,
}

impl<G: UserGateway> SignUpFlow<G> {
    pub fn new(gateway: Arc<G>, navigator: Arc<dyn Navigator>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            gateway,
            navigator,
            notifier,
            schema: sign_up_schema(),
            in_flight: InFlightGuard::new(),
        }
    }

    #[instrument(skip(self, data), fields(email = %data.email, attempt_id = %Uuid::new_v4()))]
    pub async fn submit(&self, data: SignUpData) -> SubmitOutcome {
        let Some(_permit) = self.in_flight.try_begin() else {
            warn!("Submission already in flight, ignoring");
            return SubmitOutcome::InFlight;
        };

        match self.attempt(&data).await {
            Ok(()) => {
                info!(email = %data.email, "User registered successfully");
                self.notifier.notify(
                    NoticeKind::Info,
                    "Registration complete!",
                    "You can now sign in to the application.",
                );
                self.navigator.go_back();
                SubmitOutcome::Completed
            }
            Err(FlowError::Validation(errors)) => {
                info!(violations = errors.len(), "Sign-up form rejected by schema");
                SubmitOutcome::FieldErrors(errors)
            }
            Err(FlowError::Operation(reason)) => {
                error!(error = %reason, "Failed to create user");
                self.notifier.notify(
                    NoticeKind::Error,
                    "Registration failed",
                    "Something went wrong while creating your account. Try again.",
                );
                SubmitOutcome::Failed
            }
        }
    }

    async fn attempt(&self, data: &SignUpData) -> Result<(), FlowError> {
        trace!("Validating sign-up form");
        self.schema.validate(data).map_err(FlowError::Validation)?;

        trace!("Creating user record");
        self.gateway
            .create_user(data)
            .await
            .map_err(|e| FlowError::Operation(e.to_string()))?;

        Ok(())
    }
}
