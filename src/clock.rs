//! Wall clock emulated from the monotonic timer
//!
//! [`ClockEngine`] owns the seconds of the day behind a try-lock. Nobody
//! ever waits for it: an updater that finds it held records a missed tick,
//! a reader gets the last published value. [`ClockTicker`] is the periodic
//! updater; it wakes on absolute deadlines so scheduling latency does not
//! accumulate into drift.

use core::cell::Cell;
use core::fmt::Write;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::{Mutex, MutexGuard};
use embassy_time::{Duration, Instant, Timer};
use heapless::String;

use crate::scheduler::TickSchedule;
use crate::{Error, diag};

/// Seconds in one day; the clock wraps to zero here
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Time formatted as `h:m:s` without padding, e.g. `1:30:0`
pub type TimeText = String<8>;

#[derive(Debug)]
struct ClockState {
    seconds_of_day: u32,
}

/// Seconds-of-day clock shared between tasks
pub struct ClockEngine {
    state: Mutex<CriticalSectionRawMutex, ClockState>,
    /// Last value written, served to readers under contention
    published: critical_section::Mutex<Cell<u32>>,
}

/// Exclusive access to the clock
///
/// Holding a guard makes updaters miss ticks and readers see the last
/// published value. Never hold it across an `.await`.
pub struct ClockGuard<'a> {
    state: MutexGuard<'a, CriticalSectionRawMutex, ClockState>,
    published: &'a critical_section::Mutex<Cell<u32>>,
}

impl ClockGuard<'_> {
    /// Current seconds of the day
    pub fn seconds_of_day(&self) -> u32 {
        self.state.seconds_of_day
    }

    /// Overwrite the seconds of the day, wrapping at midnight
    pub fn set_seconds_of_day(&mut self, seconds: u32) {
        let seconds = seconds % SECONDS_PER_DAY;
        self.state.seconds_of_day = seconds;
        critical_section::with(|cs| self.published.borrow(cs).set(seconds));
    }

    /// Advance the clock, wrapping at midnight, and return the new value
    pub fn advance(&mut self, seconds: u32) -> u32 {
        #[allow(clippy::cast_possible_truncation)]
        let next = ((u64::from(self.state.seconds_of_day) + u64::from(seconds))
            % u64::from(SECONDS_PER_DAY)) as u32;
        self.set_seconds_of_day(next);
        next
    }
}

impl ClockEngine {
    /// Create a clock at midnight
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(ClockState { seconds_of_day: 0 }),
            published: critical_section::Mutex::new(Cell::new(0)),
        }
    }

    /// Take exclusive access without waiting
    pub fn try_hold(&self) -> Result<ClockGuard<'_>, Error> {
        let state = self.state.try_lock().map_err(|_| Error::ClockBusy)?;
        Ok(ClockGuard {
            state,
            published: &self.published,
        })
    }

    /// Read the seconds of the day, failing if the clock is held
    pub fn try_current_time(&self) -> Result<u32, Error> {
        self.try_hold().map(|guard| guard.seconds_of_day())
    }

    /// Read the seconds of the day
    ///
    /// Under contention this returns the last published value instead of
    /// waiting.
    pub fn current_time(&self) -> u32 {
        match self.try_current_time() {
            Ok(seconds) => seconds,
            Err(err) => {
                diag!("getCurrentTime: {}", err);
                self.published()
            }
        }
    }

    /// Read the time as `h:m:s` text
    pub fn current_time_text(&self) -> TimeText {
        let seconds = match self.try_current_time() {
            Ok(seconds) => seconds,
            Err(err) => {
                diag!("getCurrentTimeAsText: {}", err);
                self.published()
            }
        };
        format_time(seconds)
    }

    /// Set the time of day
    ///
    /// Out of range values and contention are rejected without changing the
    /// clock.
    pub fn set_current_time(&self, hours: u8, minutes: u8, seconds: u8) -> Result<(), Error> {
        let result = validate_time(hours, minutes, seconds).and_then(|seconds_of_day| {
            let mut guard = self.try_hold()?;
            guard.set_seconds_of_day(seconds_of_day);
            Ok(())
        });
        match result {
            Ok(()) => diag!("setCurrentTime: time set to {}:{}:{}", hours, minutes, seconds),
            Err(err) => diag!("setCurrentTime: {}", err),
        }
        result
    }

    /// Last value written to the clock
    pub fn published(&self) -> u32 {
        critical_section::with(|cs| self.published.borrow(cs).get())
    }
}

impl Default for ClockEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a time of day to seconds, rejecting out of range fields
pub fn validate_time(hours: u8, minutes: u8, seconds: u8) -> Result<u32, Error> {
    if hours > 23 {
        return Err(Error::InvalidHours(hours));
    }
    if minutes > 59 {
        return Err(Error::InvalidMinutes(minutes));
    }
    if seconds > 59 {
        return Err(Error::InvalidSeconds(seconds));
    }
    Ok(u32::from(hours) * 3600 + u32::from(minutes) * 60 + u32::from(seconds))
}

/// Format seconds of the day as `h:m:s` without padding
pub fn format_time(seconds_of_day: u32) -> TimeText {
    let hours = (seconds_of_day / 3600) % 24;
    let minutes = (seconds_of_day % 3600) / 60;
    let seconds = seconds_of_day % 60;
    let mut text = TimeText::new();
    // At most "23:59:59"
    let _ = write!(text, "{}:{}:{}", hours, minutes, seconds);
    text
}

/// Outcome of one clock update attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The clock advanced to the contained seconds of the day
    Advanced(u32),
    /// The clock was held; contains the number of consecutive misses
    Missed(u32),
}

/// Periodic updater of a [`ClockEngine`]
///
/// Each successful tick adds the tick interval plus any missed ticks. A
/// missed tick does not advance the schedule, so the next wakeup reuses the
/// same deadline, which is already in the past, and retries on the next
/// scheduling pass. Sustained contention therefore keeps this task
/// retrying on every pass.
pub struct ClockTicker<'a> {
    clock: &'a ClockEngine,
    schedule: TickSchedule,
    tick_secs: u32,
    missed_ticks: u32,
}

impl<'a> ClockTicker<'a> {
    /// Create a ticker whose first update is due at `start`
    ///
    /// A zero interval is raised to one second.
    pub fn new(clock: &'a ClockEngine, start: Instant, tick_secs: u32) -> Self {
        let tick_secs = tick_secs.max(1);
        Self {
            clock,
            schedule: TickSchedule::new(start, Duration::from_secs(u64::from(tick_secs))),
            tick_secs,
            missed_ticks: 0,
        }
    }

    /// Deadline of the next update attempt
    pub fn next_deadline(&self) -> Instant {
        self.schedule.next_deadline()
    }

    /// Consecutive update attempts that found the clock held
    pub const fn missed_ticks(&self) -> u32 {
        self.missed_ticks
    }

    /// Number of successful updates
    pub const fn tick_count(&self) -> u64 {
        self.schedule.count()
    }

    /// Attempt one update
    pub fn tick(&mut self) -> TickOutcome {
        let Ok(mut guard) = self.clock.try_hold() else {
            self.missed_ticks = self.missed_ticks.saturating_add(1);
            diag!(
                "calculateCurrentTime: time is being updated, trying again later. Missed updates: {}",
                self.missed_ticks
            );
            return TickOutcome::Missed(self.missed_ticks);
        };
        let seconds = guard.advance(self.tick_secs.saturating_add(self.missed_ticks));
        drop(guard);
        self.missed_ticks = 0;
        self.schedule.advance();
        TickOutcome::Advanced(seconds)
    }

    /// Keep the clock running forever
    pub async fn run(mut self) -> ! {
        loop {
            Timer::at(self.next_deadline()).await;
            self.tick();
        }
    }
}
