//! idx-alert: watches the IDX disclosure feed for announcements of interest.
//!
//! A run fetches one page of the announcement listing, keeps the entries
//! published within a trailing window whose titles contain a keyword, and
//! emails them to an operator. Runs are stateless and meant to be triggered
//! by an external scheduler.
//!
//! ```no_run
//! use chrono::Utc;
//! use idx_alert::{Config, EmailNotifier, IdxClient, KeywordSet, run_once};
//!
//! # async fn demo() -> Result<(), idx_alert::IdxError> {
//! let config = Config::from_env();
//! let client = IdxClient::builder().build()?;
//! let notifier = EmailNotifier::from_config(&config);
//! let outcome = run_once(&client, &config, &KeywordSet::default(), &notifier, Utc::now()).await;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```

pub mod announcements;
pub mod config;
pub mod core;
pub mod matcher;
pub mod notify;
pub mod run;

pub use announcements::{Announcement, AnnouncementsBuilder};
pub use config::Config;
pub use crate::core::{IdxClient, IdxClientBuilder, IdxError};
pub use matcher::{KeywordSet, MatchResult, filter_recent_matches};
pub use notify::{EmailNotifier, Notifier, NotifyOutcome};
pub use run::{RunOutcome, run_once};
