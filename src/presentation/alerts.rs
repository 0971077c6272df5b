use crate::domain::ports::{NoticeKind, Notifier};
use tracing::info;

/// Console rendition of the alert dialog: one blocking message per notice,
/// no structured detail, no retry offered.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NoticeKind, title: &str, message: &str) {
        let tag = match kind {
            NoticeKind::Info => "OK",
            NoticeKind::Error => "ERROR",
        };
        info!(kind = ?kind, title = title, "Showing alert");
        println!("\n[{tag}] {title}\n      {message}\n");
    }
}
