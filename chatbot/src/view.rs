//! View model behind the chatbot page.
//!
//! The view owns every piece of UI state and is the only thing that mutates
//! it. A submission runs in two phases so that the caller decides where the
//! network call is awaited:
//!
//! 1. `begin_upload` / `begin_ask` check the inputs, enter the busy state and
//!    hand back what has to be sent.
//! 2. `finish_upload` / `finish_ask` apply the outcome and return to `Idle`.
//!
//! `submit_upload` / `submit_question` chain both phases around a
//! [`ChatbotBackend`] call.

use crate::backend_service::ChatbotBackend;
use crate::error::{BackendError, ViewError};
use crate::models::*;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    UploadingFile,
    AwaitingAnswer,
}

/// Outcome or progress of the most recent network operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Empty,
    Uploading,
    Uploaded(String),
    /// `None` when no server detail is available.
    UploadFailed(Option<String>),
    Thinking,
    AnswerReceived,
    AskFailed(Option<String>),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Empty => Ok(()),
            Status::Uploading => write!(f, "Uploading..."),
            Status::Uploaded(message) if message.is_empty() => write!(f, "Upload succeeded"),
            Status::Uploaded(message) => write!(f, "Upload succeeded: {}", message),
            Status::UploadFailed(Some(detail)) => write!(f, "Upload failed: {}", detail),
            Status::UploadFailed(None) => write!(f, "Upload failed. Check that the server is reachable."),
            Status::Thinking => write!(f, "Thinking..."),
            Status::AnswerReceived => write!(f, "Answer received"),
            Status::AskFailed(Some(detail)) => write!(f, "Could not get an answer: {}", detail),
            Status::AskFailed(None) => write!(f, "Could not get an answer. Check that the server is reachable."),
        }
    }
}

#[derive(Debug, Default)]
pub struct ChatbotView {
    selected_file: Option<SelectedFile>,
    question: String,
    answer: String,
    status: Status,
    state: ViewState,
}

impl ChatbotView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn status_message(&self) -> String {
        self.status.to_string()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state != ViewState::Idle
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        self.selected_file = Some(file);
        self.status = Status::Empty;
        self.answer.clear();
    }

    pub fn set_question(&mut self, text: impl Into<String>) {
        self.question = text.into();
    }

    pub fn begin_upload(&mut self) -> Result<SelectedFile, ViewError> {
        if self.is_busy() {
            return Err(ViewError::Busy);
        }
        let file = self
            .selected_file
            .clone()
            .ok_or(ViewError::NoFileSelected)?;

        self.state = ViewState::UploadingFile;
        self.status = Status::Uploading;
        Ok(file)
    }

    pub fn finish_upload(&mut self, outcome: Result<UploadReceipt, BackendError>) {
        if self.state != ViewState::UploadingFile {
            log::warn!("Ignoring upload result while {:?}", self.state);
            return;
        }

        self.status = match outcome {
            Ok(receipt) => {
                log::info!("Upload succeeded: {}", receipt.message);
                Status::Uploaded(receipt.message)
            }
            Err(e) => Status::UploadFailed(failure_detail("upload", &e)),
        };
        self.state = ViewState::Idle;
    }

    pub fn begin_ask(&mut self) -> Result<String, ViewError> {
        if self.is_busy() {
            return Err(ViewError::Busy);
        }
        if self.question.is_empty() {
            return Err(ViewError::EmptyQuestion);
        }

        self.state = ViewState::AwaitingAnswer;
        self.status = Status::Thinking;
        Ok(self.question.clone())
    }

    pub fn finish_ask(&mut self, outcome: Result<Answer, BackendError>) {
        if self.state != ViewState::AwaitingAnswer {
            log::warn!("Ignoring answer while {:?}", self.state);
            return;
        }

        match outcome {
            Ok(answer) => {
                self.answer = answer.text;
                self.status = Status::AnswerReceived;
            }
            Err(e) => {
                self.answer.clear();
                self.status = Status::AskFailed(failure_detail("ask", &e));
            }
        }
        self.state = ViewState::Idle;
    }

    pub async fn submit_upload(&mut self, backend: &dyn ChatbotBackend) -> Result<(), ViewError> {
        let file = self.begin_upload()?;
        let outcome = backend.upload(file).await;
        self.finish_upload(outcome);
        Ok(())
    }

    pub async fn submit_question(&mut self, backend: &dyn ChatbotBackend) -> Result<(), ViewError> {
        let question = self.begin_ask()?;
        let outcome = backend.ask(&question).await;
        self.finish_ask(outcome);
        Ok(())
    }
}

fn failure_detail(operation: &str, error: &BackendError) -> Option<String> {
    match error.server_detail() {
        Some(detail) => {
            log::warn!("Server rejected {}: {}", operation, detail);
            Some(detail.to_string())
        }
        None => {
            log::error!("{} failed: {}", operation, error);
            None
        }
    }
}
