use crate::domain::ports::{Navigator, ScreenName};
use std::sync::Mutex;
use tracing::{debug, warn};

/// In-memory navigation stack. `navigate` pushes, `go_back` pops but never
/// below the root screen.
#[derive(Debug)]
pub struct ScreenStack {
    stack: Mutex<Vec<ScreenName>>,
}

impl ScreenStack {
    pub fn new(root: ScreenName) -> Self {
        Self {
            stack: Mutex::new(vec![root]),
        }
    }

    pub fn current(&self) -> ScreenName {
        let stack = self.stack.lock().expect("screen stack poisoned");
        *stack.last().expect("screen stack is never empty")
    }
}

impl Navigator for ScreenStack {
    fn navigate(&self, screen: ScreenName) {
        let mut stack = self.stack.lock().expect("screen stack poisoned");
        debug!(screen = %screen, "Navigating");
        stack.push(screen);
    }

    fn go_back(&self) {
        let mut stack = self.stack.lock().expect("screen stack poisoned");
        if stack.len() > 1 {
            let left = stack.pop();
            debug!(screen = ?left, "Navigated back");
        } else {
            warn!("go_back on root screen ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_and_go_back_round_trip() {
        let nav = ScreenStack::new(ScreenName::SignIn);
        assert_eq!(nav.current(), ScreenName::SignIn);

        nav.navigate(ScreenName::SignUp);
        assert_eq!(nav.current(), ScreenName::SignUp);

        nav.go_back();
        assert_eq!(nav.current(), ScreenName::SignIn);
    }

    #[test]
    fn test_go_back_never_pops_the_root() {
        let nav = ScreenStack::new(ScreenName::SignIn);
        nav.go_back();
        nav.go_back();
        assert_eq!(nav.current(), ScreenName::SignIn);
    }
}
