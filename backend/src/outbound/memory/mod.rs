//! In-process adapters for tests and local wiring.
//!
//! Behaviour mirrors the production adapters where callers can observe it:
//! the repository rejects duplicate ticket numbers, and the notifier can be
//! switched into a failing mode to exercise delivery errors.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{
    ComplaintRepository, ComplaintRepositoryError, Notifier, NotifierError, TicketGenerator,
};
use crate::domain::{
    Complaint, ComplaintDraft, ComplaintParts, ComplaintStatus, Notification,
    RandomTicketGenerator, TicketNumber,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Default)]
struct Table {
    next_id: i64,
    rows: HashMap<TicketNumber, Complaint>,
}

/// Complaint store held in a map keyed by ticket number.
#[derive(Debug, Default)]
pub struct InMemoryComplaintRepository {
    table: Mutex<Table>,
}

impl InMemoryComplaintRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored complaints.
    pub fn len(&self) -> usize {
        lock(&self.table).rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the complaint filed under `ticket_number`.
    pub fn get(&self, ticket_number: &TicketNumber) -> Option<Complaint> {
        lock(&self.table).rows.get(ticket_number).cloned()
    }
}

#[async_trait]
impl ComplaintRepository for InMemoryComplaintRepository {
    async fn create(
        &self,
        draft: &ComplaintDraft,
        ticket_number: &TicketNumber,
    ) -> Result<Complaint, ComplaintRepositoryError> {
        let mut table = lock(&self.table);
        if table.rows.contains_key(ticket_number) {
            return Err(ComplaintRepositoryError::duplicate_ticket(
                ticket_number.as_str(),
            ));
        }

        table.next_id += 1;
        let now = Utc::now();
        let complaint = Complaint::from_parts(ComplaintParts {
            id: table.next_id,
            email: draft.email().to_owned(),
            body: draft.body().to_owned(),
            ticket_number: ticket_number.clone(),
            status: ComplaintStatus::Pending,
            created_at: now,
            updated_at: now,
        });
        table.rows.insert(ticket_number.clone(), complaint.clone());
        Ok(complaint)
    }

    async fn find_by_ticket(
        &self,
        ticket_number: &TicketNumber,
    ) -> Result<Option<Complaint>, ComplaintRepositoryError> {
        Ok(self.get(ticket_number))
    }

    async fn mark_resolved(
        &self,
        ticket_number: &TicketNumber,
    ) -> Result<Option<Complaint>, ComplaintRepositoryError> {
        let mut table = lock(&self.table);
        Ok(table.rows.get_mut(ticket_number).map(|complaint| {
            complaint.resolve(Utc::now());
            complaint.clone()
        }))
    }
}

/// Notifier that records every notification instead of sending it.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
    failure: Mutex<Option<NotifierError>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent sends fail with `error` until cleared.
    pub fn fail_with(&self, error: NotifierError) {
        *lock(&self.failure) = Some(error);
    }

    pub fn succeed(&self) {
        *lock(&self.failure) = None;
    }

    /// Notifications delivered so far, oldest first.
    pub fn sent(&self) -> Vec<Notification> {
        lock(&self.sent).clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, notification: &Notification) -> Result<(), NotifierError> {
        if let Some(error) = lock(&self.failure).clone() {
            return Err(error);
        }
        lock(&self.sent).push(notification.clone());
        Ok(())
    }
}

/// Generator that replays a fixed script before drawing randomly.
#[derive(Debug, Default)]
pub struct ScriptedTicketGenerator {
    script: Mutex<VecDeque<TicketNumber>>,
    fallback: RandomTicketGenerator,
}

impl ScriptedTicketGenerator {
    pub fn new(script: impl IntoIterator<Item = TicketNumber>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            fallback: RandomTicketGenerator,
        }
    }
}

impl TicketGenerator for ScriptedTicketGenerator {
    fn generate(&self) -> TicketNumber {
        lock(&self.script)
            .pop_front()
            .unwrap_or_else(|| self.fallback.generate())
    }
}
