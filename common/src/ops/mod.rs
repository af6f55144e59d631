//! Observable state for in-flight backend operations.
//!
//! Each operation kind (schema load, ask, evaluation run) owns exactly one
//! [`OpSlot`]. Starting an operation puts the slot into `Pending` and hands
//! back a token; the response settles the slot through that token. Because
//! overlapping invocations are possible (nothing cancels an in-flight
//! request), settlement is guarded: only the latest invocation's token may
//! settle the slot, and late responses from superseded invocations are
//! dropped instead of overwriting newer state.

/// Lifecycle of one operation slot.
#[derive(Clone, Debug, PartialEq)]
pub enum OpStatus<T> {
    /// Never invoked.
    Idle,
    /// Dispatched, response not yet applied.
    Pending,
    /// Settled with a decoded payload.
    Completed(T),
    /// Settled with a displayable failure message.
    Failed(String),
}

/// One operation slot plus its invocation counter.
#[derive(Clone, Debug, PartialEq)]
pub struct OpSlot<T> {
    status: OpStatus<T>,
    seq: u64,
}

impl<T> OpSlot<T> {
    pub fn new() -> Self {
        OpSlot {
            status: OpStatus::Idle,
            seq: 0,
        }
    }

    /// Starts a new invocation: the slot becomes `Pending` (replacing any
    /// settled state) and the returned token must be passed to [`settle`].
    ///
    /// [`settle`]: OpSlot::settle
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.status = OpStatus::Pending;
        self.seq
    }

    /// Applies an outcome for the invocation identified by `token`.
    ///
    /// Returns `false` without touching the slot when the token does not
    /// belong to the latest invocation or the slot already settled; the
    /// caller should skip any follow-up work (notices, re-render) in that
    /// case.
    pub fn settle(&mut self, token: u64, outcome: Result<T, String>) -> bool {
        if token != self.seq || !matches!(self.status, OpStatus::Pending) {
            return false;
        }
        self.status = match outcome {
            Ok(value) => OpStatus::Completed(value),
            Err(message) => OpStatus::Failed(message),
        };
        true
    }

    pub fn status(&self) -> &OpStatus<T> {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, OpStatus::Pending)
    }
}

impl<T> Default for OpSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
