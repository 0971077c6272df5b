use crate::domain::form::{SignInData, SignUpData};
use anyhow::Result;
use async_trait::async_trait;
use std::fmt;

/// Remote user-creation endpoint. Any transport error or non-2xx response is
/// reported as an error; no response schema is consumed.
#[async_trait]
pub trait UserGateway: Send + Sync {
    async fn create_user(&self, req: &SignUpData) -> Result<()>;
}

/// External authentication collaborator. Owns the session; this crate only
/// triggers the credential exchange.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, req: &SignInData) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenName {
    SignIn,
    SignUp,
}

impl fmt::Display for ScreenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenName::SignIn => f.write_str("sign-in"),
            ScreenName::SignUp => f.write_str("sign-up"),
        }
    }
}

/// Screen transitions. Nothing is round-tripped back into form state.
pub trait Navigator: Send + Sync {
    fn navigate(&self, screen: ScreenName);
    fn go_back(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Single alert capability injected into the submit handlers, keeping the
/// flows independent of how dialogs are presented.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, title: &str, message: &str);
}
