//! Background export runner
//!
//! Runs one export attempt on a worker thread and hands the outcome
//! back through a channel, polled from the tick action. The runner
//! enforces no re-entrancy policy itself; the menu disables its export
//! entry while an attempt is in flight.

use crate::model::{ErrorResponse, ExportOutcome};
use crate::services::resolver::ExportResolver;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

struct ExportJob {
    receiver: Receiver<ExportOutcome>,
}

/// Single-slot runner for export attempts.
#[derive(Default)]
pub struct ExportRunner {
    job: Option<ExportJob>,
}

impl ExportRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an export attempt with the given resolver.
    ///
    /// The attempt runs to completion even if the user navigates away;
    /// there is no cancellation and no retry.
    pub fn spawn<R: ExportResolver>(&mut self, resolver: R) {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let outcome = match resolver.fetch_artifact() {
                Ok(artifact) => ExportOutcome::Done(artifact),
                Err(error) => ExportOutcome::Failed(error),
            };
            let _ = tx.send(outcome);
        });

        self.job = Some(ExportJob { receiver: rx });
    }

    /// Poll for a finished attempt. Yields the outcome at most once,
    /// then frees the slot for the next attempt.
    pub fn poll(&mut self) -> Option<ExportOutcome> {
        let job = self.job.as_ref()?;

        match job.receiver.try_recv() {
            Ok(outcome) => {
                self.job = None;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                // Worker died without reporting; treat as a generic failure.
                self.job = None;
                Some(ExportOutcome::Failed(ErrorResponse::default()))
            }
        }
    }

    /// True while an attempt is running.
    pub fn in_flight(&self) -> bool {
        self.job.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Artifact;
    use std::time::Duration;

    struct StubResolver(Result<Artifact, ErrorResponse>);

    impl ExportResolver for StubResolver {
        fn fetch_artifact(&self) -> Result<Artifact, ErrorResponse> {
            self.0.clone()
        }
    }

    fn poll_until_done(runner: &mut ExportRunner) -> ExportOutcome {
        for _ in 0..100 {
            if let Some(outcome) = runner.poll() {
                return outcome;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("export did not finish");
    }

    #[test]
    fn test_successful_attempt_yields_artifact_once() {
        let artifact = Artifact {
            bytes: vec![1, 2, 3],
            filename: "morning.zip".to_string(),
        };
        let mut runner = ExportRunner::new();
        runner.spawn(StubResolver(Ok(artifact.clone())));
        assert!(runner.in_flight());

        assert_eq!(poll_until_done(&mut runner), ExportOutcome::Done(artifact));
        // Outcome delivered; the slot is free again.
        assert!(!runner.in_flight());
        assert!(runner.poll().is_none());
    }

    #[test]
    fn test_failed_attempt_yields_error() {
        let mut runner = ExportRunner::new();
        runner.spawn(StubResolver(Err(ErrorResponse::new(
            "Quota exceeded",
            "quota",
        ))));

        let outcome = poll_until_done(&mut runner);
        assert_eq!(
            outcome,
            ExportOutcome::Failed(ErrorResponse::new("Quota exceeded", "quota"))
        );
    }

    #[test]
    fn test_idle_runner_polls_nothing() {
        let mut runner = ExportRunner::new();
        assert!(!runner.in_flight());
        assert!(runner.poll().is_none());
    }
}
