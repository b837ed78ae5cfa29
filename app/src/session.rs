use crate::command::{Command, HELP};
use crate::render::{notice, render};
use anyhow::Result;
use chatbot_core::{
    pick_pdf, Answer, BackendError, ChatbotBackend, ChatbotView, SelectedFile, UploadReceipt,
    ViewError,
};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

enum Completion {
    Upload(Result<UploadReceipt, BackendError>),
    Ask(Result<Answer, BackendError>),
    Health(Result<String, BackendError>),
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Drives a [`ChatbotView`] from line-based input. Requests run on spawned
/// tasks and report back over a channel, so input is read while they are
/// outstanding.
pub struct Session {
    view: ChatbotView,
    backend: Arc<dyn ChatbotBackend>,
    tx: UnboundedSender<Completion>,
    rx: UnboundedReceiver<Completion>,
    in_flight: usize,
}

impl Session {
    pub fn new(backend: Arc<dyn ChatbotBackend>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            view: ChatbotView::new(),
            backend,
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// Runs until `quit`, or until input ends and every request has finished.
    pub async fn run<R, W>(mut self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        write_out(&mut output, &format!("{}\n\n{}", HELP, render(&self.view))).await?;

        let mut lines = input.lines();
        let mut input_closed = false;

        loop {
            tokio::select! {
                line = lines.next_line(), if !input_closed => match line? {
                    Some(line) => {
                        if self.handle_line(&line, &mut output).await? == Flow::Quit {
                            if self.in_flight > 0 {
                                log::info!("Abandoning {} outstanding request(s)", self.in_flight);
                            }
                            break;
                        }
                    }
                    None => {
                        input_closed = true;
                        if self.in_flight == 0 {
                            break;
                        }
                    }
                },
                Some(done) = self.rx.recv() => {
                    self.in_flight -= 1;
                    self.apply(done, &mut output).await?;
                    if input_closed && self.in_flight == 0 {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    pub fn spawn_health(&mut self) {
        let backend = Arc::clone(&self.backend);
        self.spawn(
            async move { Completion::Health(backend.health().await) },
            |e| Completion::Health(Err(e)),
        );
    }

    fn spawn_upload(&mut self, file: SelectedFile) {
        let backend = Arc::clone(&self.backend);
        self.spawn(
            async move { Completion::Upload(backend.upload(file).await) },
            |e| Completion::Upload(Err(e)),
        );
    }

    fn spawn_ask(&mut self, question: String) {
        let backend = Arc::clone(&self.backend);
        self.spawn(
            async move { Completion::Ask(backend.ask(&question).await) },
            |e| Completion::Ask(Err(e)),
        );
    }

    /// Runs `request` on its own task. A watcher forwards the result, or
    /// `on_failure` when the task panics, so every request reports back once.
    fn spawn<F>(&mut self, request: F, on_failure: fn(BackendError) -> Completion)
    where
        F: std::future::Future<Output = Completion> + Send + 'static,
    {
        let tx = self.tx.clone();
        self.in_flight += 1;
        let task = tokio::spawn(request);
        tokio::spawn(async move {
            let done = match task.await {
                Ok(done) => done,
                Err(e) => {
                    log::error!("Request task failed: {}", e);
                    on_failure(BackendError::Interrupted(e.to_string()))
                }
            };
            // The receiver only goes away once the session has quit.
            let _ = tx.send(done);
        });
    }

    async fn handle_line<W>(&mut self, line: &str, output: &mut W) -> Result<Flow>
    where
        W: AsyncWrite + Unpin,
    {
        let Some(command) = Command::parse(line) else {
            return Ok(Flow::Continue);
        };

        let text = match command {
            Command::Open(_) if self.view.is_busy() => notice(ViewError::Busy),
            Command::Open(path) => match pick_pdf(&path).await {
                Ok(file) => {
                    self.view.select_file(file);
                    render(&self.view)
                }
                Err(e) => notice(e),
            },
            Command::Upload => match self.view.begin_upload() {
                Ok(file) => {
                    self.spawn_upload(file);
                    render(&self.view)
                }
                Err(e) => notice(e),
            },
            Command::Question(text) => {
                self.view.set_question(text);
                render(&self.view)
            }
            Command::Ask(text) => {
                if let Some(text) = text {
                    self.view.set_question(text);
                }
                match self.view.begin_ask() {
                    Ok(question) => {
                        self.spawn_ask(question);
                        render(&self.view)
                    }
                    Err(e) => notice(e),
                }
            }
            Command::Ping => {
                self.spawn_health();
                String::new()
            }
            Command::Show => render(&self.view),
            Command::Help => format!("{}\n", HELP),
            Command::Quit => return Ok(Flow::Quit),
            Command::Invalid(message) => notice(message),
        };

        write_out(output, &text).await?;
        Ok(Flow::Continue)
    }

    async fn apply<W>(&mut self, done: Completion, output: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let text = match done {
            Completion::Upload(outcome) => {
                self.view.finish_upload(outcome);
                render(&self.view)
            }
            Completion::Ask(outcome) => {
                self.view.finish_ask(outcome);
                render(&self.view)
            }
            Completion::Health(Ok(banner)) => format!("🟢 {}\n", banner),
            Completion::Health(Err(e)) => {
                log::warn!("Backend health check failed: {}", e);
                notice(format!("Backend unreachable: {}", e))
            }
        };

        write_out(output, &text).await
    }
}

async fn write_out<W>(output: &mut W, text: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
