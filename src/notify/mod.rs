//! Delivery of matched announcements to the operator.

mod email;
mod render;

pub use email::EmailNotifier;
pub use render::{render_html, render_subject};

use std::{future::Future, pin::Pin};

use crate::{core::IdxError, matcher::MatchResult};

/// What a notifier did with a non-empty batch of matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// The alert was delivered.
    Sent,
    /// Delivery is not configured; nothing was attempted.
    Skipped,
}

/// Boxed future returned by [`Notifier::notify`].
pub type NotifyFuture<'a> =
    Pin<Box<dyn Future<Output = Result<NotifyOutcome, IdxError>> + Send + 'a>>;

/// A sink for alert batches.
///
/// Implemented by [`EmailNotifier`]; the run pipeline only depends on this
/// trait so it can be exercised without an SMTP server.
pub trait Notifier: Send + Sync {
    /// Delivers one batch. Callers only invoke this with at least one match.
    fn notify<'a>(&'a self, matches: &'a [MatchResult]) -> NotifyFuture<'a>;
}
