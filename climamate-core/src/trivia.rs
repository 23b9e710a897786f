//! Rotating weather trivia.
//!
//! [`TriviaRotator`] is the bare state machine; [`spawn_rotator`] drives it from a
//! timer in its own task until the owning view cancels it.

use std::time::Duration;

use tokio::{sync::watch, task::JoinHandle, time::MissedTickBehavior};
use tokio_util::sync::CancellationToken;

pub type TriviaList = &'static [&'static str];

pub const LANDING_FACTS: TriviaList = &[
    "Raindrops can fall at speeds of about 22 mph.",
    "Lightning is five times hotter than the sun’s surface.",
    "Snowflakes can take up to an hour to reach the ground.",
    "The highest temperature ever recorded was 56.7°C in Death Valley, USA.",
    "The coldest temperature recorded was -89.2°C in Antarctica.",
];

pub const HOME_FACTS: TriviaList = &[
    "Raindrops can fall at speeds of about 22 mph.",
    "Lightning is five times hotter than the sun’s surface.",
    "The coldest temperature recorded was -89.2°C in Antarctica.",
    "Snowflakes can take up to an hour to reach the ground.",
];

#[derive(Debug, Clone)]
pub struct TriviaRotator {
    facts: TriviaList,
    index: usize,
}

impl TriviaRotator {
    /// Starts at the first fact. An empty list is accepted and never yields a fact.
    pub fn new(facts: TriviaList) -> Self {
        Self { facts, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&'static str> {
        self.facts.get(self.index).copied()
    }

    /// Advance to the next fact, wrapping at the end.
    pub fn tick(&mut self) -> usize {
        if !self.facts.is_empty() {
            self.index = (self.index + 1) % self.facts.len();
        }
        self.index
    }
}

/// Handle to a running rotator task.
#[derive(Debug)]
pub struct RotatorHandle {
    facts: TriviaList,
    index: watch::Receiver<usize>,
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl RotatorHandle {
    pub fn index(&self) -> usize {
        *self.index.borrow()
    }

    pub fn current(&self) -> Option<&'static str> {
        self.facts.get(self.index()).copied()
    }

    /// Receiver that is notified on every rotation.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index.clone()
    }

    /// Cancel the timer and wait for the task to finish.
    pub async fn stop(self) {
        self.token.cancel();
        if let Err(err) = self.task.await {
            tracing::warn!(error = %err, "trivia rotator task ended abnormally");
        }
    }
}

/// Rotate through `facts` every `period` until `token` is cancelled.
///
/// The first rotation happens one full period after spawning.
pub fn spawn_rotator(facts: TriviaList, period: Duration, token: CancellationToken) -> RotatorHandle {
    let (tx, rx) = watch::channel(0);
    let task_token = token.clone();

    let task = tokio::spawn(async move {
        let mut rotator = TriviaRotator::new(facts);
        let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = task_token.cancelled() => {
                    tracing::debug!("trivia rotator cancelled");
                    break;
                }
                _ = interval.tick() => {
                    let index = rotator.tick();
                    if tx.send(index).is_err() {
                        break;
                    }
                }
            }
        }
    });

    RotatorHandle { facts, index: rx, token, task }
}
