//! Scripted live demo
//!
//! The [`DemoSequencer`] replays a fixed script of [`DemoStep`]s with
//! realistic pacing, then reveals the escalation email. It does not own a
//! thread or a timer: suspensions are recorded as continuations with a due
//! time, and the caller's event loop drives them by calling
//! [`DemoSequencer::tick`] with the current instant.
//!
//! ## Run tokens
//!
//! Every [`DemoSequencer::start`] mints a new [`RunToken`] and every pending
//! continuation captures the token of the run that scheduled it. When a
//! continuation comes due its token is compared with the current one; a
//! mismatch means the run was reset or superseded and the continuation is
//! dropped without touching state.
//!
//! ## Phases
//!
//! ```text
//! Idle --start--> Running --last step + grace--> Finished
//!   ^                |                              |
//!   +------reset-----+-------------reset------------+
//! ```

pub mod typewriter;

use std::time::{Duration, Instant};
use tracing::{debug, info};

pub use typewriter::Typewriter;

/// Trailing delay between the last step and the artifact reveal
pub const GRACE_PERIOD: Duration = Duration::from_millis(400);

/// One labelled step of the demo script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoStep {
    pub order: usize,
    pub label: &'static str,
    pub dwell: Duration,
    pub tone: StepTone,
}

/// How a step is highlighted once reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepTone {
    #[default]
    Progress,
    Failure,
    Success,
}

const fn step(order: usize, label: &'static str, dwell_ms: u64, tone: StepTone) -> DemoStep {
    DemoStep {
        order,
        label,
        dwell: Duration::from_millis(dwell_ms),
        tone,
    }
}

const SCRIPT: [DemoStep; 7] = [
    step(0, "Scanning calendars via Outlook Graph API...", 1800, StepTone::Progress),
    step(1, "Checking internal availability (Sarah, James)...", 1400, StepTone::Progress),
    step(2, "Checking external availability (VP David)...", 1400, StepTone::Progress),
    step(3, "No common slot found in the next 48 hours.", 1800, StepTone::Failure),
    step(4, "Activating escalation protocol...", 1200, StepTone::Progress),
    step(5, "Drafting urgent request email to blocker...", 1500, StepTone::Progress),
    step(6, "Escalation email generated and ready to send.", 0, StepTone::Success),
];

/// The scheduling demo script shown on the Prompt slide
pub fn default_script() -> Vec<DemoStep> {
    SCRIPT.to_vec()
}

/// Observable demo state read by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DemoRunState {
    pub active: bool,
    /// `None` until the first step is entered
    pub cursor: Option<usize>,
    pub artifact_revealed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    /// The script has completed and the artifact is on screen
    Finished,
}

/// Generation marker for one run of the sequencer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct RunToken(u64);

impl RunToken {
    fn next(self) -> Self {
        RunToken(self.0 + 1)
    }
}

/// Something the sequencer did during a [`DemoSequencer::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    StepEntered(usize),
    ArtifactRevealed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resume {
    EnterStep(usize),
    Reveal,
}

/// A suspended point of the run loop
#[derive(Debug, Clone, Copy)]
struct Continuation {
    token: RunToken,
    due: Instant,
    resume: Resume,
}

/// Timer-driven state machine for the live demo
#[derive(Debug, Clone)]
pub struct DemoSequencer {
    script: Vec<DemoStep>,
    grace: Duration,
    state: DemoRunState,
    token: RunToken,
    pending: Vec<Continuation>,
}

impl DemoSequencer {
    pub fn new(script: Vec<DemoStep>) -> Self {
        Self::with_grace(script, GRACE_PERIOD)
    }

    pub fn with_grace(script: Vec<DemoStep>, grace: Duration) -> Self {
        DemoSequencer {
            script,
            grace,
            state: DemoRunState::default(),
            token: RunToken::default(),
            pending: Vec::new(),
        }
    }

    /// Divide every dwell time and the grace period by `speed`.
    ///
    /// Non-positive or non-finite speeds are ignored, and so is any speed
    /// that would push a duration past what [`Duration`] can hold.
    pub fn scaled(mut self, speed: f64) -> Self {
        if !(speed.is_finite() && speed > 0.0) {
            return self;
        }
        let divide = |d: Duration| Duration::try_from_secs_f64(d.as_secs_f64() / speed).ok();
        let dwells: Option<Vec<Duration>> = self.script.iter().map(|s| divide(s.dwell)).collect();
        let (Some(dwells), Some(grace)) = (dwells, divide(self.grace)) else {
            debug!(speed, "demo speed out of range, pacing unchanged");
            return self;
        };
        for (step, dwell) in self.script.iter_mut().zip(dwells) {
            step.dwell = dwell;
        }
        self.grace = grace;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> DemoRunState {
        self.state
    }

    pub fn script(&self) -> &[DemoStep] {
        &self.script
    }

    pub fn grace(&self) -> Duration {
        self.grace
    }

    pub fn token(&self) -> RunToken {
        self.token
    }

    pub fn phase(&self) -> Phase {
        match (self.state.active, self.state.artifact_revealed) {
            (false, _) => Phase::Idle,
            (true, false) => Phase::Running,
            (true, true) => Phase::Finished,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase() == Phase::Running
    }

    /// Whether a suspended continuation of the current run is waiting
    pub fn has_pending(&self) -> bool {
        self.pending.iter().any(|c| c.token == self.token)
    }

    /// Due time of the next live continuation, for event-loop poll timeouts
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending
            .iter()
            .filter(|c| c.token == self.token)
            .map(|c| c.due)
            .min()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin a run at `now`.
    ///
    /// The first step is entered by the first [`tick`] at or after `now`.
    /// A no-op returning `false` while a run is active, including after it
    /// finished and is still showing the artifact; call [`reset`] first.
    /// An empty script starts and finishes on the grace period alone.
    ///
    /// [`tick`]: DemoSequencer::tick
    /// [`reset`]: DemoSequencer::reset
    pub fn start(&mut self, now: Instant) -> bool {
        if self.state.active {
            debug!(token = self.token.0, "demo already active, start ignored");
            return false;
        }
        self.token = self.token.next();
        self.state = DemoRunState {
            active: true,
            cursor: None,
            artifact_revealed: false,
        };
        info!(token = self.token.0, steps = self.script.len(), "demo started");

        // the first step is entered by the next tick, like every later one
        if self.script.is_empty() {
            self.suspend(now + self.grace, Resume::Reveal);
        } else {
            self.suspend(now, Resume::EnterStep(0));
        }
        true
    }

    /// Abandon any run and return to the initial state.
    ///
    /// Safe to call at any time, including mid-run and before any run.
    /// Continuations scheduled before the reset can never mutate state
    /// afterwards.
    pub fn reset(&mut self) {
        if self.state.active {
            info!(token = self.token.0, cursor = ?self.state.cursor, "demo reset");
        }
        // Continuations already queued keep the old token and are discarded
        // by `tick` when they come due.
        self.token = self.token.next();
        self.state = DemoRunState::default();
    }

    /// `reset` followed by `start`
    pub fn replay(&mut self, now: Instant) -> bool {
        self.reset();
        self.start(now)
    }

    /// Resume every continuation due at or before `now`, in due order.
    ///
    /// Returns the observable changes made, so a caller that ticks rarely
    /// still sees every cursor value in ascending order.
    pub fn tick(&mut self, now: Instant) -> Vec<SequencerEvent> {
        let mut events = Vec::new();
        loop {
            let Some(pos) = self
                .pending
                .iter()
                .enumerate()
                .filter(|(_, c)| c.due <= now)
                .min_by_key(|(_, c)| c.due)
                .map(|(i, _)| i)
            else {
                break;
            };
            let continuation = self.pending.swap_remove(pos);
            if continuation.token != self.token {
                debug!(
                    stale = continuation.token.0,
                    current = self.token.0,
                    "dropping stale demo continuation"
                );
                continue;
            }
            match continuation.resume {
                Resume::EnterStep(i) => self.enter_step(i, continuation.due, &mut events),
                Resume::Reveal => {
                    self.state.artifact_revealed = true;
                    info!(token = self.token.0, "demo artifact revealed");
                    events.push(SequencerEvent::ArtifactRevealed);
                }
            }
        }
        events
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Enter step `first` at time `at` and schedule whatever follows it.
    ///
    /// Zero-dwell steps fall straight through to the next one so no step is
    /// skipped; after the last step the reveal waits out the grace period.
    fn enter_step(&mut self, first: usize, at: Instant, events: &mut Vec<SequencerEvent>) {
        for index in first..self.script.len() {
            self.state.cursor = Some(index);
            events.push(SequencerEvent::StepEntered(index));
            let step = self.script[index];
            debug!(token = self.token.0, step = index, label = step.label, "demo step");

            if index + 1 == self.script.len() {
                self.suspend(at + step.dwell + self.grace, Resume::Reveal);
                return;
            }
            if !step.dwell.is_zero() {
                self.suspend(at + step.dwell, Resume::EnterStep(index + 1));
                return;
            }
        }
    }

    fn suspend(&mut self, due: Instant, resume: Resume) {
        self.pending.push(Continuation {
            token: self.token,
            due,
            resume,
        });
    }
}

impl Default for DemoSequencer {
    fn default() -> Self {
        Self::new(default_script())
    }
}
