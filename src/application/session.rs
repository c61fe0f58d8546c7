// SPDX-License-Identifier: MPL-2.0
//! Review session: which asset is shown, and what to ask the store next.
//!
//! [`ReviewSession`] never touches the store itself. Each transition returns
//! an [`Effect`] for the runtime to execute; the result comes back tagged
//! with the [`Ticket`] it was issued under. Only the outstanding ticket is
//! accepted, so results that arrive after a newer request, or after
//! [`close`](ReviewSession::close), are dropped instead of being applied to
//! stale state.

use crate::application::swipe::{ActionError, SwipeActions};
use crate::domain::asset::{AssetId, SampledAsset};
use crate::domain::error::ReviewError;
use crate::domain::gesture::SwipeOutcome;

/// Tag of an issued store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Store work requested by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Draw a new random asset.
    Sample(Ticket),
    /// Remove this asset, then report back with the same ticket.
    Delete(Ticket, AssetId),
}

impl Effect {
    #[must_use]
    pub fn ticket(&self) -> Ticket {
        match self {
            Effect::Sample(ticket) | Effect::Delete(ticket, _) => *ticket,
        }
    }
}

/// How a finished sample was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleApplied {
    /// The ticket was not outstanding; nothing changed.
    Stale,
    /// A new asset is current.
    Replaced,
    /// No new asset; the previous one (if any) stays.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending {
    Sample,
    Delete(AssetId),
}

/// Coordinates sampling, swipe outcomes and deletions.
#[derive(Debug, Clone)]
pub struct ReviewSession {
    real_delete: bool,
    next_ticket: u64,
    outstanding: Option<(Ticket, Pending)>,
    current: Option<SampledAsset>,
    last_error: Option<ReviewError>,
    kept: usize,
    deleted: usize,
}

impl ReviewSession {
    /// `real_delete = false` turns deletes into plain skips.
    #[must_use]
    pub fn new(real_delete: bool) -> Self {
        Self {
            real_delete,
            next_ticket: 0,
            outstanding: None,
            current: None,
            last_error: None,
            kept: 0,
            deleted: 0,
        }
    }

    /// Resets the session for another library. Tickets keep counting up so
    /// results still in flight from the previous library stay stale.
    pub fn restart(&mut self, real_delete: bool) {
        *self = Self {
            next_ticket: self.next_ticket,
            ..Self::new(real_delete)
        };
    }

    #[must_use]
    pub fn real_delete(&self) -> bool {
        self.real_delete
    }

    #[must_use]
    pub fn current(&self) -> Option<&SampledAsset> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&ReviewError> {
        self.last_error.as_ref()
    }

    /// Whether a store operation is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.outstanding.is_some()
    }

    /// Ticket of the in-flight operation, if any.
    #[must_use]
    pub fn outstanding(&self) -> Option<Ticket> {
        self.outstanding.as_ref().map(|(ticket, _)| *ticket)
    }

    #[must_use]
    pub fn kept(&self) -> usize {
        self.kept
    }

    /// Assets deleted, or skipped as deleted when real deletion is off.
    #[must_use]
    pub fn deleted(&self) -> usize {
        self.deleted
    }

    /// Requests the first sample. Calling it again restarts sampling and
    /// drops whatever was in flight.
    pub fn start(&mut self) -> Effect {
        self.last_error = None;
        self.issue_sample()
    }

    /// Applies a finished sample if its ticket is outstanding.
    pub fn sample_finished(
        &mut self,
        ticket: Ticket,
        result: Result<Option<SampledAsset>, ReviewError>,
    ) -> SampleApplied {
        if !self.take_outstanding(ticket, |p| matches!(p, Pending::Sample)) {
            tracing::debug!(ticket = ticket.0, "dropping stale sample result");
            return SampleApplied::Stale;
        }

        match result {
            Ok(Some(sampled)) => {
                tracing::debug!(
                    id = %sampled.asset.id(),
                    index = sampled.index,
                    total = sampled.total,
                    "showing asset"
                );
                self.current = Some(sampled);
                self.last_error = None;
                SampleApplied::Replaced
            }
            Ok(None) => {
                tracing::info!("library has nothing to show");
                self.last_error = Some(ReviewError::EmptyLibrary);
                SampleApplied::Unchanged
            }
            Err(err) => {
                tracing::warn!(error = %err, "sampling failed, keeping current asset");
                self.last_error = Some(err);
                SampleApplied::Unchanged
            }
        }
    }

    /// Turns a swipe outcome into store work.
    ///
    /// Returns `Ok(None)` for `Cancel` and while another operation is in
    /// flight.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::CallbackFault`] for a delete with no asset shown.
    pub fn commit(&mut self, outcome: SwipeOutcome) -> Result<Option<Effect>, ReviewError> {
        if !outcome.is_commit() {
            return Ok(None);
        }
        if self.is_busy() {
            tracing::debug!(?outcome, "ignoring commit while busy");
            return Ok(None);
        }

        match outcome {
            SwipeOutcome::Keep => {
                if self.current.is_some() {
                    self.kept += 1;
                }
                Ok(Some(self.issue_sample()))
            }
            SwipeOutcome::Delete => {
                let Some(current) = &self.current else {
                    return Err(ReviewError::CallbackFault(
                        "no asset to delete".to_string(),
                    ));
                };
                if !self.real_delete {
                    tracing::info!(id = %current.asset.id(), "delete skipped (real deletion off)");
                    self.deleted += 1;
                    return Ok(Some(self.issue_sample()));
                }
                let id = current.asset.id().clone();
                let ticket = self.issue(Pending::Delete(id.clone()));
                Ok(Some(Effect::Delete(ticket, id)))
            }
            SwipeOutcome::Cancel => Ok(None),
        }
    }

    /// Records a finished delete and asks for the next sample, whether or
    /// not the delete went through.
    pub fn delete_finished(
        &mut self,
        ticket: Ticket,
        result: Result<(), ReviewError>,
    ) -> Option<Effect> {
        let Some((outstanding, Pending::Delete(id))) = self.outstanding.clone() else {
            tracing::debug!(ticket = ticket.0, "dropping stale delete result");
            return None;
        };
        if outstanding != ticket {
            tracing::debug!(ticket = ticket.0, "dropping stale delete result");
            return None;
        }
        self.outstanding = None;

        match result {
            Ok(()) => {
                tracing::info!(%id, "asset deleted");
                self.deleted += 1;
                self.last_error = None;
            }
            Err(err) => {
                tracing::error!(%id, error = %err, "delete failed");
                self.last_error = Some(err);
            }
        }
        Some(self.issue_sample())
    }

    /// Abandons any in-flight operation; its result will be ignored.
    pub fn close(&mut self) {
        if let Some((ticket, pending)) = self.outstanding.take() {
            tracing::debug!(ticket = ticket.0, ?pending, "session closed with work in flight");
        }
    }

    fn issue_sample(&mut self) -> Effect {
        Effect::Sample(self.issue(Pending::Sample))
    }

    fn issue(&mut self, pending: Pending) -> Ticket {
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.outstanding = Some((ticket, pending));
        ticket
    }

    fn take_outstanding(&mut self, ticket: Ticket, is_kind: impl Fn(&Pending) -> bool) -> bool {
        match &self.outstanding {
            Some((outstanding, pending)) if *outstanding == ticket && is_kind(pending) => {
                self.outstanding = None;
                true
            }
            _ => false,
        }
    }
}

/// [`SwipeActions`] adapter that feeds committed swipes into a session and
/// collects the resulting effects.
#[derive(Debug)]
pub struct SessionActions<'a> {
    session: &'a mut ReviewSession,
    effects: Vec<Effect>,
}

impl<'a> SessionActions<'a> {
    pub fn new(session: &'a mut ReviewSession) -> Self {
        Self {
            session,
            effects: Vec::new(),
        }
    }

    #[must_use]
    pub fn into_effects(self) -> Vec<Effect> {
        self.effects
    }

    fn commit(&mut self, outcome: SwipeOutcome) -> Result<(), ActionError> {
        if let Some(effect) = self.session.commit(outcome)? {
            self.effects.push(effect);
        }
        Ok(())
    }
}

impl SwipeActions for SessionActions<'_> {
    fn keep(&mut self) -> Result<(), ActionError> {
        self.commit(SwipeOutcome::Keep)
    }

    fn delete(&mut self) -> Result<(), ActionError> {
        self.commit(SwipeOutcome::Delete)
    }
}
