//! Single-threaded cooperative task scheduler.
//!
//! Page work (module initialization, accepted drops, worker registration) is
//! submitted as tasks through a [`TaskQueue`]. [`Scheduler::run`] drives every
//! task concurrently on the calling task: suspensions interleave, nothing
//! runs in parallel, and nothing is cancelled once started.

use crate::error::FrontendError;
use crate::report::ErrorReporter;
use futures::future::LocalBoxFuture;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use std::future::Future;
use std::rc::Rc;
use tokio::sync::mpsc;
use tracing::debug;

/// A unit of page work.
pub struct Task {
    label: &'static str,
    work: LocalBoxFuture<'static, Result<(), FrontendError>>,
}

impl Task {
    pub fn new<F>(label: &'static str, work: F) -> Self
    where
        F: Future<Output = Result<(), FrontendError>> + 'static,
    {
        Self {
            label,
            work: work.boxed_local(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

/// Counts of settled tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulerStats {
    pub completed: usize,
    pub failed: usize,
}

/// Submit handle. Cheap to clone; the scheduler stops once all are dropped.
#[derive(Clone)]
pub struct TaskQueue {
    tx: mpsc::UnboundedSender<Task>,
}

impl TaskQueue {
    /// Enqueue a task. Returns false if the scheduler is gone.
    pub fn submit(&self, task: Task) -> bool {
        self.tx.send(task).is_ok()
    }
}

/// Drives submitted tasks to completion.
pub struct Scheduler {
    rx: mpsc::UnboundedReceiver<Task>,
    reporter: Rc<dyn ErrorReporter>,
}

impl Scheduler {
    /// Create a scheduler and its submit handle.
    pub fn new(reporter: Rc<dyn ErrorReporter>) -> (Self, TaskQueue) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { rx, reporter }, TaskQueue { tx })
    }

    /// Run until every [`TaskQueue`] is dropped and all in-flight tasks have
    /// settled. Each failure goes to the reporter.
    pub async fn run(mut self) -> SchedulerStats {
        let mut stats = SchedulerStats::default();
        let mut in_flight = FuturesUnordered::new();

        loop {
            futures::select_biased! {
                outcome = in_flight.select_next_some() => {
                    self.settle(&mut stats, outcome);
                }
                task = self.rx.recv().fuse() => match task {
                    Some(task) => {
                        debug!(task = task.label, "task started");
                        let Task { label, work } = task;
                        in_flight.push(work.map(move |result| (label, result)));
                    }
                    None => break,
                },
            }
        }

        while let Some(outcome) = in_flight.next().await {
            self.settle(&mut stats, outcome);
        }

        debug!(
            completed = stats.completed,
            failed = stats.failed,
            "scheduler drained"
        );
        stats
    }

    fn settle(
        &self,
        stats: &mut SchedulerStats,
        (label, result): (&'static str, Result<(), FrontendError>),
    ) {
        match result {
            Ok(()) => {
                stats.completed += 1;
                debug!(task = label, "task completed");
            }
            Err(e) => {
                stats.failed += 1;
                self.reporter.report(&e);
            }
        }
    }
}
