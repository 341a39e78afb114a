//! HTTP client helpers (REST).
//!
//! # Design
//! - One client per app boot; the bearer token is swapped via interior
//!   mutability so callers never rebuild clients.
//! - Every request carries an abort-backed timeout so a hung backend cannot
//!   wedge the UI.

use crate::core::logic::failure_message;
use crate::models::ApiError;
use aegis_api_models::{LoginRequest, LoginResponse, PrivacyReport, ScanResponse, TakedownNotice};
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys::{AbortController, File, FormData};

/// Milliseconds before an in-flight request is aborted.
const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// REST client for the Aegis backend.
#[derive(Debug)]
pub(crate) struct ApiClient {
    base_url: String,
    token: RefCell<Option<String>>,
}

impl ApiClient {
    /// Create a client rooted at `base_url` (empty keeps requests
    /// same-origin).
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: RefCell::new(None),
        }
    }

    /// Swap the bearer credential used for authenticated calls.
    pub(crate) fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token;
    }

    /// Exchange credentials for a bearer token.
    pub(crate) async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let req = Request::post(&self.url("/auth/login"))
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let resp = ok_or_status(send_with_timeout(req).await?).await?;
        resp.json::<LoginResponse>()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    }

    /// Fetch the privacy-alert report for the signed-in account.
    pub(crate) async fn fetch_privacy(&self) -> Result<PrivacyReport, ApiError> {
        let req = self.authorized(Request::get(&self.url("/api/privacy")));
        let resp = ok_or_status(send_with_timeout(req).await?).await?;
        resp.json::<PrivacyReport>()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    }

    /// Upload a product image for matching.
    pub(crate) async fn upload_scan(&self, file: &File) -> Result<ScanResponse, ApiError> {
        let form = FormData::new().map_err(|_| ApiError::Network("form-data failed".to_string()))?;
        form.append_with_blob_and_filename("image", file, &file.name())
            .map_err(|err| ApiError::Network(format!("attach file: {err:?}")))?;
        let req = self.authorized(Request::post(&self.url("/api/scan")).body(form));
        let resp = ok_or_status(send_with_timeout(req).await?).await?;
        resp.json::<ScanResponse>()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    }

    /// File one takedown notice; the response body is unused.
    pub(crate) async fn submit_takedown(&self, notice: &TakedownNotice) -> Result<(), ApiError> {
        let req = self
            .authorized_result(Request::post(&self.url("/api/takedown")).json(notice))
            .map_err(|err| ApiError::Network(err.to_string()))?;
        ok_or_status(send_with_timeout(req).await?).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, req: Request) -> Request {
        match self.token.borrow().as_deref() {
            Some(token) => req.header("Authorization", &format!("Bearer {token}")),
            None => req,
        }
    }

    fn authorized_result(
        &self,
        req: Result<Request, gloo_net::Error>,
    ) -> Result<Request, gloo_net::Error> {
        req.map(|req| self.authorized(req))
    }
}

/// Dispatch a request, aborting it after [`REQUEST_TIMEOUT_MS`].
async fn send_with_timeout(req: Request) -> Result<Response, ApiError> {
    let controller = AbortController::new().ok();
    let timed_out = Rc::new(Cell::new(false));
    let req = match &controller {
        Some(controller) => req.abort_signal(Some(&controller.signal())),
        None => req,
    };
    let timer = controller.map(|controller| {
        let timed_out = timed_out.clone();
        Timeout::new(REQUEST_TIMEOUT_MS, move || {
            timed_out.set(true);
            controller.abort();
        })
    });
    let result = req.send().await;
    drop(timer);
    result.map_err(|err| {
        if timed_out.get() {
            ApiError::Timeout(REQUEST_TIMEOUT_MS)
        } else {
            ApiError::Network(err.to_string())
        }
    })
}

/// Pass 2xx responses through; map anything else to a displayable error,
/// preferring the structured `detail` body over the status text.
async fn ok_or_status(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let fallback = resp.status_text();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status,
        message: failure_message(&body, &fallback),
    })
}
