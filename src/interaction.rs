//! Click-driven collection of rod endpoints and the point of interest.
//!
//! A front end feeds discrete [`Event`]s into a [`Session`]; the session only
//! builds a [`LineChargeField`] once it is [`SessionState::Ready`].

use tracing::debug;

use crate::config::LineChargeConfig;
use crate::errors::FieldError;
use crate::fields::{FieldSample, LineChargeField, Segment};
use crate::math::{P2, Scalar};

/// Progress through the input sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    /// No points placed yet.
    AwaitingStart,
    /// Rod start placed.
    AwaitingEnd {
        /// First endpoint.
        start: P2,
    },
    /// Rod placed, point of interest missing.
    AwaitingQueryPoint {
        /// Rod geometry.
        segment: Segment,
    },
    /// Everything needed for a field evaluation is present.
    Ready {
        /// Rod geometry.
        segment: Segment,
        /// Point of interest.
        point: P2,
    },
}

/// Discrete inputs driving a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A click at a position in plot coordinates.
    Click(P2),
    /// Request to evaluate the field for the given charge (C).
    Compute(Scalar),
    /// Discard all placed points.
    Reset,
}

/// Outcome of [`Session::handle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Response {
    /// The state advanced or was updated.
    Updated(SessionState),
    /// A field evaluation finished.
    Computed(FieldSample),
}

/// Interactive session state plus the configuration used for evaluations.
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    config: LineChargeConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(LineChargeConfig::default())
    }
}

impl Session {
    /// Starts an empty session.
    #[must_use]
    pub const fn new(config: LineChargeConfig) -> Self {
        Self { state: SessionState::AwaitingStart, config }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Registers a click.
    ///
    /// The first two clicks place the rod, the third places the point of interest,
    /// and later clicks move that point. A second endpoint equal to the first is
    /// rejected and leaves the state untouched.
    pub fn click(&mut self, p: P2) -> Result<SessionState, FieldError> {
        self.state = match self.state {
            SessionState::AwaitingStart => {
                if !crate::math::is_finite(&p) {
                    return Err(FieldError::NonFiniteInput("segment start"));
                }
                SessionState::AwaitingEnd { start: p }
            }
            SessionState::AwaitingEnd { start } => {
                SessionState::AwaitingQueryPoint { segment: Segment::new(start, p)? }
            }
            SessionState::AwaitingQueryPoint { segment } | SessionState::Ready { segment, .. } => {
                if !crate::math::is_finite(&p) {
                    return Err(FieldError::NonFiniteInput("query point"));
                }
                SessionState::Ready { segment, point: p }
            }
        };
        debug!(state = ?self.state, "session advanced");
        Ok(self.state)
    }

    /// Evaluates the field for `charge` at the current point of interest.
    pub fn compute(&self, charge: Scalar) -> Result<FieldSample, FieldError> {
        match self.state {
            SessionState::Ready { segment, point } => {
                LineChargeField::from_config(segment, charge, &self.config)?.sample(point)
            }
            SessionState::AwaitingStart | SessionState::AwaitingEnd { .. } => {
                Err(FieldError::NotReady("rod endpoints not placed"))
            }
            SessionState::AwaitingQueryPoint { .. } => {
                Err(FieldError::NotReady("point of interest not placed"))
            }
        }
    }

    /// Returns to [`SessionState::AwaitingStart`].
    pub fn reset(&mut self) {
        self.state = SessionState::AwaitingStart;
    }

    /// Dispatches an [`Event`].
    pub fn handle(&mut self, event: Event) -> Result<Response, FieldError> {
        match event {
            Event::Click(p) => self.click(p).map(Response::Updated),
            Event::Compute(charge) => self.compute(charge).map(Response::Computed),
            Event::Reset => {
                self.reset();
                Ok(Response::Updated(self.state))
            }
        }
    }
}
