//! Per-call deadlines and cancellation
//!
//! Every call runs under a [`TimeoutGuard`]. The guard races the transport
//! future against the category deadline and an optional cancellation token;
//! whichever loses is dropped, which aborts the in-flight request and
//! discards the timer.

use std::future::Future;
use std::time::Duration;

use smartpath_domain::constants::{
    AI_GENERATION_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS, OCR_PREVIEW_TIMEOUT_SECS,
    UPLOAD_TIMEOUT_SECS,
};
use smartpath_domain::ApiError;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Deadline class of a call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeoutCategory {
    /// Plain reads and writes
    #[default]
    Default,
    /// File uploads
    Upload,
    /// OCR extraction of an uploaded report
    OcrPreview,
    /// Server-side AI generation (study plans, math solving)
    AiGeneration,
}

impl TimeoutCategory {
    /// Operation name used in the timeout message
    pub const fn operation(self) -> &'static str {
        match self {
            Self::Default => "Request",
            Self::Upload => "Upload",
            Self::OcrPreview => "OCR preview",
            Self::AiGeneration => "AI generation",
        }
    }

    /// What the server is "taking too long to" do
    pub const fn action(self) -> &'static str {
        match self {
            Self::Default | Self::Upload => "respond",
            Self::OcrPreview | Self::AiGeneration => "process",
        }
    }
}

/// Category → deadline table.
///
/// The production table is fixed; [`TimeoutPolicy::uniform`] exists so tests
/// can exercise the deadline path in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutPolicy {
    default: Duration,
    upload: Duration,
    ocr_preview: Duration,
    ai_generation: Duration,
}

impl Default for TimeoutPolicy {
    fn default() -> Self {
        Self {
            default: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            upload: Duration::from_secs(UPLOAD_TIMEOUT_SECS),
            ocr_preview: Duration::from_secs(OCR_PREVIEW_TIMEOUT_SECS),
            ai_generation: Duration::from_secs(AI_GENERATION_TIMEOUT_SECS),
        }
    }
}

impl TimeoutPolicy {
    /// Same deadline for every category
    pub const fn uniform(deadline: Duration) -> Self {
        Self { default: deadline, upload: deadline, ocr_preview: deadline, ai_generation: deadline }
    }

    pub const fn deadline(&self, category: TimeoutCategory) -> Duration {
        match category {
            TimeoutCategory::Default => self.default,
            TimeoutCategory::Upload => self.upload,
            TimeoutCategory::OcrPreview => self.ocr_preview,
            TimeoutCategory::AiGeneration => self.ai_generation,
        }
    }
}

/// Races one call against its deadline and an optional cancellation signal
#[derive(Debug)]
pub struct TimeoutGuard {
    category: TimeoutCategory,
    deadline: Duration,
    cancel: CancellationToken,
}

impl TimeoutGuard {
    pub fn new(category: TimeoutCategory, deadline: Duration) -> Self {
        Self { category, deadline, cancel: CancellationToken::new() }
    }

    /// Guard that also resolves to `ApiError::Cancelled` when `cancel` fires
    pub fn with_cancellation(
        category: TimeoutCategory,
        deadline: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self { category, deadline, cancel }
    }

    pub const fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Token that aborts this call only
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Drive `call` to completion, the deadline, or cancellation.
    ///
    /// # Errors
    /// `ApiError::Timeout` when the deadline passes first,
    /// `ApiError::Cancelled` when the token fires first, otherwise whatever
    /// `call` produced.
    pub async fn run<F, T>(self, call: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let Self { category, deadline, cancel } = self;

        tokio::select! {
            biased;

            () = cancel.cancelled() => {
                debug!(category = ?category, "call cancelled");
                Err(ApiError::Cancelled)
            }
            result = call => result,
            () = tokio::time::sleep(deadline) => {
                warn!(category = ?category, deadline_ms = deadline.as_millis() as u64, "call timed out");
                Err(ApiError::timeout(category.operation(), category.action(), deadline))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use smartpath_domain::ApiErrorKind;

    use super::*;

    #[test]
    fn production_table_matches_categories() {
        let policy = TimeoutPolicy::default();
        assert_eq!(policy.deadline(TimeoutCategory::Default), Duration::from_secs(30));
        assert_eq!(policy.deadline(TimeoutCategory::Upload), Duration::from_secs(60));
        assert_eq!(policy.deadline(TimeoutCategory::OcrPreview), Duration::from_secs(90));
        assert_eq!(policy.deadline(TimeoutCategory::AiGeneration), Duration::from_secs(120));
    }

    #[tokio::test]
    async fn completed_call_passes_through() {
        let guard = TimeoutGuard::new(TimeoutCategory::Default, Duration::from_secs(5));
        let value = guard.run(async { Ok::<_, ApiError>(7) }).await.unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn inner_error_passes_through() {
        let guard = TimeoutGuard::new(TimeoutCategory::Default, Duration::from_secs(5));
        let err = guard
            .run(async { Err::<(), _>(ApiError::Network("connection refused".into())) })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ApiErrorKind::Network);
    }

    #[tokio::test]
    async fn deadline_aborts_the_call() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();

        let guard = TimeoutGuard::new(TimeoutCategory::OcrPreview, Duration::from_millis(20));
        let err = guard
            .run(async move {
                tokio::time::sleep(Duration::from_millis(200)).await;
                flag.store(true, Ordering::SeqCst);
                Ok::<_, ApiError>(())
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ApiErrorKind::Timeout);
        assert_eq!(
            err.message(),
            "OCR preview timeout — the server is taking too long to process"
        );

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(!finished.load(Ordering::SeqCst), "call kept running after the deadline");
    }

    #[tokio::test]
    async fn cancellation_resolves_to_cancelled() {
        let guard = TimeoutGuard::new(TimeoutCategory::Default, Duration::from_secs(5));
        let token = guard.cancellation_token();

        let pending = tokio::spawn(guard.run(async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok::<_, ApiError>(())
        }));
        token.cancel();

        let err = pending.await.unwrap().unwrap_err();
        assert_eq!(err, ApiError::Cancelled);
    }

    #[tokio::test]
    async fn default_category_message_says_respond() {
        let guard = TimeoutGuard::new(TimeoutCategory::Default, Duration::from_millis(5));
        let err = guard.run(std::future::pending::<Result<(), ApiError>>()).await.unwrap_err();
        assert!(err.message().contains("timeout"));
        assert!(err.message().ends_with("respond"));
    }
}
