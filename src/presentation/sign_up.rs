use crate::application::sign_up::SignUpFlow;
use crate::application::submit::SubmitOutcome;
use crate::domain::form::{FieldName, SignUpData};
use crate::domain::ports::{Navigator, UserGateway};
use crate::presentation::form::{FieldHandle, FormController};
use std::sync::Arc;
use tracing::instrument;

/// The account-creation screen: name, email and password inputs, a submit
/// action and a "back to logon" link.
pub struct SignUpScreen<G: UserGateway> {
    form: FormController,
    flow: Arc<SignUpFlow<G>>,
    navigator: Arc<dyn Navigator>,
}

impl<G: UserGateway> SignUpScreen<G> {
    pub fn new(flow: Arc<SignUpFlow<G>>, navigator: Arc<dyn Navigator>) -> Self {
        let form = FormController::new(vec![
            FieldHandle::new(FieldName::Name, "Name"),
            FieldHandle::new(FieldName::Email, "E-mail"),
            FieldHandle::secure(FieldName::Password, "Password"),
        ]);
        Self {
            form,
            flow,
            navigator,
        }
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    /// Gathers the current field values and runs one submission attempt.
    /// Field errors from a failed validation pass are mapped back onto the
    /// form; previous annotations are cleared first.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.form.reset_errors();

        let data = SignUpData {
            name: self.form.value(FieldName::Name).to_string(),
            email: self.form.value(FieldName::Email).to_string(),
            password: self.form.value(FieldName::Password).to_string(),
        };

        let outcome = self.flow.submit(data).await;
        if let SubmitOutcome::FieldErrors(errors) = &outcome {
            self.form.set_errors(errors);
        }
        outcome
    }

    pub fn back_to_logon(&self) {
        self.navigator.go_back();
    }
}
