use crate::application::sign_in::SignInFlow;
use crate::application::submit::SubmitOutcome;
use crate::domain::form::{FieldName, SignInData};
use crate::domain::ports::{AuthProvider, Navigator, ScreenName};
use crate::presentation::form::{FieldHandle, FormController};
use std::sync::Arc;
use tracing::{debug, instrument};

/// The logon screen: email and password inputs, a submit action, a
/// forgot-password link and a link to the account-creation screen.
pub struct SignInScreen<A: AuthProvider> {
    form: FormController,
    flow: Arc<SignInFlow<A>>,
    navigator: Arc<dyn Navigator>,
}

impl<A: AuthProvider> SignInScreen<A> {
    pub fn new(flow: Arc<SignInFlow<A>>, navigator: Arc<dyn Navigator>) -> Self {
        let form = FormController::new(vec![
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
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.form.reset_errors();

        let data = SignInData {
            email: self.form.value(FieldName::Email).to_string(),
            password: self.form.value(FieldName::Password).to_string(),
        };

        let outcome = self.flow.submit(data).await;
        if let SubmitOutcome::FieldErrors(errors) = &outcome {
            self.form.set_errors(errors);
        }
        outcome
    }

    pub fn create_account(&self) {
        self.navigator.navigate(ScreenName::SignUp);
    }

    // TODO: wire to a password-recovery flow once the API exposes one.
    pub fn forgot_password(&self) {
        debug!("Forgot-password requested, no recovery flow available");
    }
}
