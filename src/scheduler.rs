//! Cooperative scheduling helpers
//!
//! Background loops run as async tasks on a single-threaded executor. A task
//! only yields at an `.await`, so code between two awaits runs without
//! interleaving. Locks in this crate are always released before the next
//! await; that keeps every critical section as short as one update.
//!
//! Timing is computed here without sleeping, so it can be driven by any
//! executor or stepped manually with explicit timestamps.

use embassy_time::{Duration, Instant, Timer};

use crate::animation::Animation;
use crate::surface::{PixelSurface, SharedSurface};
use crate::StripDriver;

/// Absolute periodic deadlines
///
/// Deadlines are derived from a fixed origin and a tick count instead of
/// "now + interval", so a late wakeup never pushes later deadlines back.
/// The count only moves when [`TickSchedule::advance`] is called; a caller
/// that does not advance keeps getting the same deadline.
#[derive(Debug, Clone, Copy)]
pub struct TickSchedule {
    origin: Instant,
    interval: Duration,
    count: u64,
}

impl TickSchedule {
    /// Create a schedule whose first deadline is `origin`
    pub const fn new(origin: Instant, interval: Duration) -> Self {
        Self {
            origin,
            interval,
            count: 0,
        }
    }

    /// Deadline of the current tick
    pub fn next_deadline(&self) -> Instant {
        self.origin + Duration::from_ticks(self.interval.as_ticks() * self.count)
    }

    /// Move on to the next tick
    pub fn advance(&mut self) {
        self.count += 1;
    }

    /// Number of completed ticks
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Time left until the current deadline, zero if it already passed
    pub fn sleep_duration(&self, now: Instant) -> Duration {
        let deadline = self.next_deadline();
        if deadline.as_ticks() > now.as_ticks() {
            deadline - now
        } else {
            Duration::from_ticks(0)
        }
    }
}

/// Timing of the frame after a rendered one
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// When the next frame is due
    pub next_deadline: Instant,
    /// Time left until that deadline, zero when playback is behind
    pub sleep_duration: Duration,
}

/// Plays an [`Animation`] frame by frame
///
/// Frames are paced on absolute deadlines. If playback falls behind by more
/// than two frames the schedule is reset to now instead of rushing through
/// the backlog.
pub struct FramePlayer<A: Animation> {
    animation: A,
    frame: usize,
    next_frame: Option<Instant>,
}

impl<A: Animation> FramePlayer<A> {
    pub const fn new(animation: A) -> Self {
        Self {
            animation,
            frame: 0,
            next_frame: None,
        }
    }

    /// Render and commit the next frame
    ///
    /// Returns `None` once every frame has been shown. The caller is
    /// responsible for waiting until `next_deadline` before calling again.
    pub fn tick<D: StripDriver>(
        &mut self,
        now: Instant,
        surface: &mut PixelSurface<D>,
    ) -> Option<FrameResult> {
        if self.is_finished() {
            return None;
        }
        let frame_duration = self.animation.frame_delay();

        let mut next_frame = self.next_frame.unwrap_or(now);
        let max_drift_ms = frame_duration.as_millis() * 2;
        if now.as_millis() > next_frame.as_millis() + max_drift_ms {
            next_frame = now;
        }

        self.animation.render_frame(self.frame, surface);
        surface.commit();
        self.frame += 1;

        next_frame += frame_duration;
        self.next_frame = Some(next_frame);

        let sleep_duration = if next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        Some(FrameResult {
            next_deadline: next_frame,
            sleep_duration,
        })
    }

    /// Check if every frame has been shown
    pub fn is_finished(&self) -> bool {
        self.frame >= self.animation.frame_count()
    }

    /// Deadline of the next frame, `None` before the first one
    pub const fn next_deadline(&self) -> Option<Instant> {
        self.next_frame
    }

    /// Index of the next frame to render
    pub const fn frame(&self) -> usize {
        self.frame
    }

    /// Animation being played
    pub const fn animation(&self) -> &A {
        &self.animation
    }

    /// Play all remaining frames on a shared surface
    ///
    /// The surface is locked for one frame at a time and released before
    /// sleeping, so other tasks can draw between frames.
    pub async fn play<D: StripDriver>(mut self, surface: &SharedSurface<D>) {
        loop {
            let result = {
                let mut guard = surface.lock().await;
                self.tick(Instant::now(), &mut *guard)
            };
            let Some(result) = result else {
                return;
            };
            Timer::at(result.next_deadline).await;
        }
    }
}
