//! In-memory tracker used by unit tests.

use super::{IssueTracker, NewIssue, TrackerError};
use crate::labels::LabelDefinition;
use crate::registry::TrackerIssueNumber;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// A request observed by [`FakeTracker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    CreateLabel(String),
    CreateIssue(NewIssue),
    GetIssue(u64),
    UpdateIssue(u64, String),
}

#[derive(Debug, Default)]
struct State {
    next_number: u64,
    calls: Vec<Call>,
    bodies: HashMap<u64, String>,
    existing_labels: HashSet<String>,
}

/// Records every call and hands out sequential issue numbers.
#[derive(Debug, Default)]
pub(crate) struct FakeTracker {
    state: Mutex<State>,
    failing_titles: HashSet<String>,
    failing_labels: HashSet<String>,
    failing_reads: HashSet<u64>,
    failing_writes: HashSet<u64>,
}

impl FakeTracker {
    pub(crate) fn starting_at(first_number: u64) -> Self {
        let tracker = Self::default();
        tracker.state.lock().unwrap().next_number = first_number;
        tracker
    }

    pub(crate) fn fail_title(mut self, title: &str) -> Self {
        self.failing_titles.insert(title.to_string());
        self
    }

    pub(crate) fn fail_label(mut self, name: &str) -> Self {
        self.failing_labels.insert(name.to_string());
        self
    }

    pub(crate) fn fail_read(mut self, number: u64) -> Self {
        self.failing_reads.insert(number);
        self
    }

    pub(crate) fn fail_write(mut self, number: u64) -> Self {
        self.failing_writes.insert(number);
        self
    }

    pub(crate) fn with_existing_label(self, name: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .existing_labels
            .insert(name.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub(crate) fn created_issues(&self) -> Vec<NewIssue> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreateIssue(issue) => Some(issue),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn body(&self, number: u64) -> Option<String> {
        self.state.lock().unwrap().bodies.get(&number).cloned()
    }

    pub(crate) fn labels(&self) -> HashSet<String> {
        self.state.lock().unwrap().existing_labels.clone()
    }
}

fn api_error(status: u16, message: &str) -> TrackerError {
    TrackerError::Api {
        status,
        message: message.to_string(),
    }
}

#[async_trait]
impl IssueTracker for FakeTracker {
    async fn create_label(&self, label: &LabelDefinition) -> Result<(), TrackerError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreateLabel(label.name.to_string()));

        if self.failing_labels.contains(label.name) {
            return Err(api_error(403, "Resource not accessible by integration"));
        }
        if !state.existing_labels.insert(label.name.to_string()) {
            return Err(api_error(422, "Validation Failed"));
        }
        Ok(())
    }

    async fn create_issue(&self, issue: &NewIssue) -> Result<TrackerIssueNumber, TrackerError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreateIssue(issue.clone()));

        if self.failing_titles.contains(&issue.title) {
            return Err(api_error(410, "Issues are disabled for this repo"));
        }
        let number = state.next_number;
        state.next_number += 1;
        state.bodies.insert(number, issue.body.clone());
        Ok(TrackerIssueNumber(number))
    }

    async fn get_issue_body(&self, number: TrackerIssueNumber) -> Result<String, TrackerError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::GetIssue(number.get()));

        if self.failing_reads.contains(&number.get()) {
            return Err(api_error(404, "Not Found"));
        }
        state
            .bodies
            .get(&number.get())
            .cloned()
            .ok_or_else(|| api_error(404, "Not Found"))
    }

    async fn update_issue_body(
        &self,
        number: TrackerIssueNumber,
        body: &str,
    ) -> Result<(), TrackerError> {
        let mut state = self.state.lock().unwrap();
        state
            .calls
            .push(Call::UpdateIssue(number.get(), body.to_string()));

        if self.failing_writes.contains(&number.get()) {
            return Err(api_error(403, "Forbidden"));
        }
        state.bodies.insert(number.get(), body.to_string());
        Ok(())
    }
}
