//! Utilities to track the progression of a save

use std::fmt::{Display, Error, Formatter};

use chrono::NaiveDate;

use crate::item::{OccurrenceId, SeriesId};

/// An event that happens while a submission or an edit is saved
#[derive(Clone, Debug)]
pub enum SaveEvent {
    /// Save has not started
    NotStarted,
    /// Save has just started but nothing has been written yet
    Started,
    /// Save is in progress.
    InProgress{ series: String, done: usize, details: String },
    /// Save is finished
    Finished{ success: bool },
}

impl Display for SaveEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            SaveEvent::NotStarted => write!(f, "Not started"),
            SaveEvent::Started => write!(f, "Save has started..."),
            SaveEvent::InProgress{series, done, details} => write!(f, "[{}] {} ({} done)...", series, details, done),
            SaveEvent::Finished{success} => match success {
                true => write!(f, "Save successfully finished"),
                false => write!(f, "Save finished with errors"),
            }
        }
    }
}

impl Default for SaveEvent {
    fn default() -> Self {
        Self::NotStarted
    }
}



/// See [`feedback_channel`]
pub type FeedbackSender = tokio::sync::watch::Sender<SaveEvent>;
/// See [`feedback_channel`]
pub type FeedbackReceiver = tokio::sync::watch::Receiver<SaveEvent>;

/// Create a feeback channel, that can be used to retrieve the current progress of a save
pub fn feedback_channel() -> (FeedbackSender, FeedbackReceiver) {
    tokio::sync::watch::channel(SaveEvent::default())
}



/// What was being done to an occurrence when it failed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Insert,
    Update,
    Delete,
}

/// An occurrence that could not be written
#[derive(Clone, Debug, PartialEq)]
pub struct OccurrenceFailure {
    pub local_date: NaiveDate,
    /// `None` for an occurrence that was never stored
    pub id: Option<OccurrenceId>,
    pub operation: Operation,
    /// What the storage layer said
    pub error: String,
}

impl Display for OccurrenceFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let what = match self.operation {
            Operation::Insert | Operation::Update => "saved",
            Operation::Delete => "deleted",
        };
        write!(f, "Event on {} could not be {}", self.local_date.format("%Y-%m-%d"), what)
    }
}


/// What happened to a series and its occurrences while they were saved
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SaveReport {
    pub series_id: Option<SeriesId>,
    pub inserted: Vec<OccurrenceId>,
    pub updated: Vec<OccurrenceId>,
    pub deleted: Vec<OccurrenceId>,
    /// Occurrences that were already up to date
    pub unchanged: Vec<OccurrenceId>,
    pub failures: Vec<OccurrenceFailure>,
    /// Dates that have not been handled, because an earlier write failed
    pub skipped: Vec<NaiveDate>,
    /// Whether the series has been deleted because it had no occurrence left
    pub series_deleted: bool,
    /// Set when the series itself could not be updated or deleted
    pub series_failure: Option<String>,
}

impl SaveReport {
    /// Whether everything that had to be written has actually been written
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.skipped.is_empty() && self.series_failure.is_none()
    }

    /// Messages that can be shown to the submitter
    pub fn user_messages(&self) -> Vec<String> {
        self.failures.iter().map(|failure| failure.to_string()).collect()
    }
}


/// A structure that tracks the progression and the errors that happen during a save
pub struct SaveProgress {
    n_errors: u32,
    n_done: usize,
    feedback_channel: Option<FeedbackSender>
}
impl SaveProgress {
    pub fn new() -> Self {
        Self { n_errors: 0, n_done: 0, feedback_channel: None }
    }
    pub fn new_with_feedback_channel(channel: FeedbackSender) -> Self {
        Self { n_errors: 0, n_done: 0, feedback_channel: Some(channel) }
    }

    pub fn is_success(&self) -> bool {
        self.n_errors == 0
    }

    /// Increment the count of written items
    pub fn increment_counter(&mut self) {
        self.n_done += 1;
    }
    pub fn counter(&self) -> usize {
        self.n_done
    }

    /// Log an error
    pub fn error(&mut self, text: &str) {
        log::error!("{}", text);
        self.n_errors += 1;
    }
    /// Log a warning
    pub fn warn(&mut self, text: &str) {
        log::warn!("{}", text);
        self.n_errors += 1;
    }
    /// Log an info
    pub fn info(&mut self, text: &str) {
        log::info!("{}", text);
    }
    /// Log a debug message
    pub fn debug(&mut self, text: &str) {
        log::debug!("{}", text);
    }
    /// Log a trace message
    pub fn trace(&mut self, text: &str) {
        log::trace!("{}", text);
    }
    /// Send an event as a feedback to the listener (if any).
    pub fn feedback(&mut self, event: SaveEvent) {
        if let Some(sender) = self.feedback_channel.as_ref() {
            // Nobody listening is fine
            let _ = sender.send(event);
        }
    }
}

impl Default for SaveProgress {
    fn default() -> Self {
        Self::new()
    }
}
