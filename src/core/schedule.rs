use instant::{Duration, Instant};

/// Redraw bookkeeping for a frame-synchronized loop.
///
/// Event handlers only mark the field dirty; the host asks for a frame when
/// `request_redraw` says so, and the frame tick drains the flag with
/// `begin_frame`. At most one frame is ever outstanding.
#[derive(Clone, Debug, Default)]
pub struct FrameScheduler {
    needs_redraw: bool,
    frame_pending: bool,
    stopped: bool,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark dirty. Returns `true` when the caller must request a new frame.
    pub fn request_redraw(&mut self) -> bool {
        if self.stopped {
            return false;
        }
        self.needs_redraw = true;
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// Called at the top of a frame tick. Check-and-clear of the redraw flag.
    pub fn begin_frame(&mut self) -> bool {
        self.frame_pending = false;
        if self.stopped {
            return false;
        }
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// The host could not obtain the frame it was told to request. Clears the
    /// outstanding frame so the next `request_redraw` asks again; the redraw
    /// flag is kept.
    pub fn frame_failed(&mut self) {
        self.frame_pending = false;
    }

    /// Permanently stop; later requests and frames are ignored.
    pub fn stop(&mut self) {
        self.stopped = true;
        self.needs_redraw = false;
        self.frame_pending = false;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

/// Identifies one `Debouncer::schedule` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Trailing value of a settled burst.
#[derive(Clone, Debug, PartialEq)]
pub struct Settled<T> {
    pub value: T,
    /// How many scheduled values the burst folded into this one.
    pub coalesced: usize,
    /// Time from the first event of the burst to the last.
    pub burst: Duration,
}

/// Cancel-and-restart coalescing of event bursts.
///
/// Every `schedule` supersedes the previous one. The host arms a timer per
/// ticket and hands the ticket back through `fire` once the quiet period has
/// passed; only the latest ticket yields a value, and only once.
#[derive(Debug)]
pub struct Debouncer<T> {
    pending: Option<T>,
    latest: u64,
    coalesced: usize,
    burst_start: Option<Instant>,
    last_at: Option<Instant>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            pending: None,
            latest: 0,
            coalesced: 0,
            burst_start: None,
            last_at: None,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, value: T) -> Ticket {
        let now = Instant::now();
        self.latest += 1;
        self.coalesced += 1;
        self.burst_start.get_or_insert(now);
        self.last_at = Some(now);
        self.pending = Some(value);
        Ticket(self.latest)
    }

    pub fn fire(&mut self, ticket: Ticket) -> Option<Settled<T>> {
        if ticket.0 != self.latest {
            return None;
        }
        let value = self.pending.take()?;
        let burst = match (self.burst_start, self.last_at) {
            (Some(start), Some(last)) => last.duration_since(start),
            _ => Duration::ZERO,
        };
        let coalesced = std::mem::take(&mut self.coalesced);
        self.burst_start = None;
        self.last_at = None;
        Some(Settled {
            value,
            coalesced,
            burst,
        })
    }

    /// Drop the pending value; no outstanding ticket will fire.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.coalesced = 0;
        self.burst_start = None;
        self.last_at = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
