use crate::config::ClientConfig;
use crate::error::BackendError;
use crate::models::*;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};

pub const UPLOAD_FIELD: &str = "file";
const PDF_MIME: &str = "application/pdf";

/// The remote question-answering service.
#[async_trait]
pub trait ChatbotBackend: Send + Sync {
    async fn upload(&self, file: SelectedFile) -> Result<UploadReceipt, BackendError>;

    async fn ask(&self, question: &str) -> Result<Answer, BackendError>;

    /// Banner returned by the service root, used as a liveness check.
    async fn health(&self) -> Result<String, BackendError>;
}

pub struct HttpBackend {
    client: Client,
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn read_reply(response: Response) -> Result<ServiceReply, BackendError> {
        let status = response.status();
        let body = response.text().await?;
        let parsed = serde_json::from_str::<ServiceReply>(&body);

        if !status.is_success() {
            let message = parsed
                .ok()
                .and_then(|reply| reply.error)
                .unwrap_or_else(|| format!("server responded with {}", status));
            return Err(BackendError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let reply = parsed.map_err(|e| BackendError::Malformed(e.to_string()))?;
        if let Some(error) = reply.error {
            return Err(BackendError::Server {
                status: status.as_u16(),
                message: error,
            });
        }

        Ok(reply)
    }
}

#[async_trait]
impl ChatbotBackend for HttpBackend {
    async fn upload(&self, file: SelectedFile) -> Result<UploadReceipt, BackendError> {
        let url = self.config.endpoint("/upload");
        log::info!("Uploading {} ({} bytes) to {}", file.name, file.size(), url);

        let part = Part::bytes(file.content)
            .file_name(file.name)
            .mime_str(PDF_MIME)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self.client.post(&url).multipart(form).send().await?;
        let reply = Self::read_reply(response).await?;

        Ok(UploadReceipt {
            message: reply.message.unwrap_or_default(),
        })
    }

    async fn ask(&self, question: &str) -> Result<Answer, BackendError> {
        let url = self.config.endpoint("/ask");
        log::info!("Asking {}", url);

        let request = AskRequest {
            question: question.to_string(),
        };

        let response = self.client.post(&url).json(&request).send().await?;
        let reply = Self::read_reply(response).await?;

        reply
            .answer
            .map(|text| Answer { text })
            .ok_or_else(|| BackendError::Malformed("response has no answer field".to_string()))
    }

    async fn health(&self) -> Result<String, BackendError> {
        let url = self.config.endpoint("/");
        let response = self.client.get(&url).send().await?;
        let reply = Self::read_reply(response).await?;

        Ok(reply.message.unwrap_or_default())
    }
}
