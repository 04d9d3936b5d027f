use gloo_net::http::Request;

use crate::core::error::UiError;
use crate::core::models::{MoveTaskRequest, MoveTaskResponse, TaskStatus};

pub fn move_task_endpoint(api_base: &str, task_id: &str) -> String {
    format!("{}/tasks/{}/move", api_base.trim_end_matches('/'), task_id)
}

/// Server calls the board needs. Only ever used from the UI thread, so futures are not `Send`.
#[allow(async_fn_in_trait)]
pub trait TaskApi {
    async fn move_task(
        &self,
        task_id: &str,
        status: &TaskStatus,
    ) -> Result<MoveTaskResponse, UiError>;
}

#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    api_base: String,
}

impl HttpTaskApi {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into() }
    }
}

impl TaskApi for HttpTaskApi {
    async fn move_task(
        &self,
        task_id: &str,
        status: &TaskStatus,
    ) -> Result<MoveTaskResponse, UiError> {
        let url = move_task_endpoint(&self.api_base, task_id);
        log::debug!("PUT {} status={}", url, status);

        let resp = Request::put(&url)
            .json(&MoveTaskRequest {
                status: status.clone(),
            })?
            .send()
            .await?;

        let http_ok = resp.ok();
        let http_status = resp.status();
        let body: MoveTaskResponse = resp.json().await?;

        // A non-2xx answer never counts as success, whatever its body claims.
        if !http_ok {
            log::warn!("move of task {} answered HTTP {}", task_id, http_status);
            return Ok(MoveTaskResponse { success: false, ..body });
        }
        Ok(body)
    }
}
