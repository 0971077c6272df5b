#![allow(dead_code)]

use anyhow::{Result, bail};
use async_trait::async_trait;
use mobile_signon::domain::form::{SignInData, SignUpData};
use mobile_signon::domain::ports::{
    AuthProvider, Navigator, NoticeKind, Notifier, ScreenName, UserGateway,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

pub fn valid_sign_up() -> SignUpData {
    SignUpData {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "secret123".to_string(),
    }
}

pub fn valid_sign_in() -> SignInData {
    SignInData {
        email: "alice@example.com".to_string(),
        password: "secret123".to_string(),
    }
}

/// User-creation double that counts calls and can fail or park until
/// released, for exercising the in-flight guard.
#[derive(Default)]
pub struct RecordingGateway {
    pub calls: AtomicUsize,
    fail: bool,
    hold: Option<Arc<Notify>>,
}

impl RecordingGateway {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn holding(release: Arc<Notify>) -> Self {
        Self {
            hold: Some(release),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserGateway for RecordingGateway {
    async fn create_user(&self, _req: &SignUpData) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(release) = &self.hold {
            release.notified().await;
        }
        if self.fail {
            bail!("User creation rejected with status 500 Internal Server Error");
        }
        Ok(())
    }
}

/// Authentication double.
#[derive(Default)]
pub struct RecordingAuth {
    pub calls: AtomicUsize,
    fail: bool,
}

impl RecordingAuth {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthProvider for RecordingAuth {
    async fn sign_in(&self, _req: &SignInData) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            bail!("Credential exchange rejected with status 401 Unauthorized");
        }
        Ok(())
    }
}

/// Navigation double recording every transition.
#[derive(Default)]
pub struct RecordingNavigator {
    pub navigations: Mutex<Vec<ScreenName>>,
    pub backs: AtomicUsize,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn back_count(&self) -> usize {
        self.backs.load(Ordering::SeqCst)
    }

    pub fn navigation_count(&self) -> usize {
        self.navigations.lock().unwrap().len()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, screen: ScreenName) {
        self.navigations.lock().unwrap().push(screen);
    }

    fn go_back(&self) {
        self.backs.fetch_add(1, Ordering::SeqCst);
    }
}

/// Alert double recording every notice.
#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<(NoticeKind, String, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<(NoticeKind, String, String)> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NoticeKind, title: &str, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push((kind, title.to_string(), message.to_string()));
    }
}
