//! Word clock
//!
//! Shows the time as lit words on a letter grid, in five minute steps:
//! "TEN PAST FOUR", "QUARTER TO TWELVE". The grid is too small for every
//! word, so twenty five is spelled as TWENTY and FIVE.

mod phrases;

use embassy_time::{Duration, Timer};
use heapless::Vec;
pub use phrases::{Cell, Phrase};

use crate::clock::ClockEngine;
use crate::color::{BLUE, GREEN, RED, Rgb};
use crate::input::{InputSource, JoystickDirection, SharedInput, read_joystick, with_input};
use crate::surface::{PixelSurface, SharedSurface};
use crate::{Error, StripDriver, diag};

/// Default interval between two redraws of the clock face
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60);
/// Default interval between two joystick polls for adjusting the time
pub const DEFAULT_ADJUST_INTERVAL: Duration = Duration::from_secs(1);

/// Minutes after the hour from which the next hour is counted down to
const TO_THRESHOLD: u8 = 32;

/// Colors of the three word groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordClockColors {
    pub hour: Rgb,
    pub minute: Rgb,
    /// Color of PAST and TO
    pub word: Rgb,
}

impl Default for WordClockColors {
    fn default() -> Self {
        Self {
            hour: RED,
            minute: GREEN,
            word: BLUE,
        }
    }
}

/// Configuration for the word clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordClockConfig {
    pub colors: WordClockColors,
    /// Interval between two redraws of the clock face
    pub refresh_interval: Duration,
    /// Interval between two joystick polls
    pub adjust_interval: Duration,
}

impl Default for WordClockConfig {
    fn default() -> Self {
        Self {
            colors: WordClockColors::default(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            adjust_interval: DEFAULT_ADJUST_INTERVAL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Past,
    To,
}

impl Modifier {
    pub const fn phrase(self) -> Phrase {
        match self {
            Self::Past => Phrase::Past,
            Self::To => Phrase::To,
        }
    }
}

/// Time of day as the clock face reads it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordTime {
    /// Hour on a 12 hour dial, 0 is twelve
    pub hour: u8,
    /// Minutes before or after the hour, a multiple of five up to 30
    pub minutes: u8,
    pub modifier: Modifier,
}

impl WordTime {
    /// Convert seconds of the day into the words to show
    ///
    /// Past 32 minutes the time is read as minutes to the next hour. The
    /// minutes are then rounded to the nearest multiple of five.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_seconds(seconds_of_day: u32) -> Self {
        let mut hour = ((seconds_of_day / 3600) % 12) as u8;
        let mut minutes = ((seconds_of_day / 60) % 60) as u8;
        let modifier = if minutes > TO_THRESHOLD {
            hour = (hour + 1) % 12;
            minutes = 60 - minutes;
            Modifier::To
        } else {
            Modifier::Past
        };
        Self {
            hour,
            minutes: quantize_minutes(minutes),
            modifier,
        }
    }

    pub const fn hour_phrase(&self) -> Phrase {
        Phrase::HOURS[self.hour as usize % 12]
    }

    pub fn minute_phrases(&self) -> &'static [Phrase] {
        minute_phrases(self.minutes)
    }

    /// Check if only the hour is shown
    pub const fn is_full_hour(&self) -> bool {
        self.minutes == 0
    }

    /// Every phrase lit for this time, hour first
    pub fn phrases(&self) -> Vec<Phrase, 4> {
        let mut phrases = Vec::new();
        // Capacity covers hour, two minute words and the modifier
        let _ = phrases.push(self.hour_phrase());
        if !self.is_full_hour() {
            let _ = phrases.extend_from_slice(self.minute_phrases());
            let _ = phrases.push(self.modifier.phrase());
        }
        phrases
    }
}

/// Round minutes to the nearest multiple of five
#[allow(clippy::cast_possible_truncation)]
pub const fn quantize_minutes(minutes: u8) -> u8 {
    ((2 * minutes as u16 + 5) / 10 * 5) as u8
}

/// Hour word for an hour on a 12 hour dial
pub fn hour_phrase(hour: u8) -> Option<Phrase> {
    let phrase = Phrase::HOURS.get(usize::from(hour)).copied();
    if phrase.is_none() {
        diag!("WordClock getHourMapping: invalid hour {}", hour);
    }
    phrase
}

/// Minute words for a quantized minute count
///
/// Zero and values that are not a multiple of five up to 30 light nothing.
pub fn minute_phrases(minutes: u8) -> &'static [Phrase] {
    match minutes {
        0 => &[],
        5 => &[Phrase::MinFive],
        10 => &[Phrase::MinTen],
        15 => &[Phrase::Quarter],
        20 => &[Phrase::Twenty],
        25 => &[Phrase::Twenty, Phrase::MinFive],
        30 => &[Phrase::Half],
        _ => {
            diag!("WordClock getMinuteMapping: invalid minutes {}", minutes);
            &[]
        }
    }
}

fn paint<D: StripDriver>(surface: &mut PixelSurface<D>, phrase: Phrase, color: Rgb) {
    for &(x, y) in phrase.pixels() {
        let _ = surface.set_pixel(i32::from(x), i32::from(y), color);
    }
}

/// Draw a clock face and show it
///
/// The surface is cleared first, so nothing but the time remains lit.
pub fn render<D: StripDriver>(surface: &mut PixelSurface<D>, time: &WordTime, colors: &WordClockColors) {
    surface.clear_buffer();
    paint(surface, time.hour_phrase(), colors.hour);
    if !time.is_full_hour() {
        for &phrase in time.minute_phrases() {
            paint(surface, phrase, colors.minute);
        }
        paint(surface, time.modifier.phrase(), colors.word);
    }
    surface.commit();
}

/// Adjust the clock by one joystick step
///
/// Up and Down move the hour, Right and Left move the minutes by five.
/// Seconds are reset to zero and the hour is kept on a 12 hour dial.
/// Returns `false` if the direction does not adjust anything.
pub fn adjust_time(clock: &ClockEngine, direction: JoystickDirection) -> Result<bool, Error> {
    if matches!(direction, JoystickDirection::NotPressed | JoystickDirection::Center) {
        return Ok(false);
    }
    let mut guard = clock.try_hold()?;
    let seconds_of_day = guard.seconds_of_day();
    let hours = (seconds_of_day / 3600) % 12;
    let minutes = (seconds_of_day / 60) % 60;
    let (hours, minutes) = match direction {
        JoystickDirection::Up => ((hours + 1) % 12, minutes),
        JoystickDirection::Down => ((hours + 11) % 12, minutes),
        JoystickDirection::Right => (hours, (minutes + 5) % 60),
        JoystickDirection::Left => (hours, (minutes + 55) % 60),
        JoystickDirection::NotPressed | JoystickDirection::Center => return Ok(false),
    };
    guard.set_seconds_of_day(hours * 3600 + minutes * 60);
    diag!("setCurrentTime: time set to {}:{}:0", hours, minutes);
    Ok(true)
}

/// Word clock bound to a surface, a clock and the joystick
pub struct WordClock<'a, D: StripDriver, S: InputSource> {
    surface: &'a SharedSurface<D>,
    clock: &'a ClockEngine,
    input: &'a SharedInput<S>,
    config: WordClockConfig,
}

impl<'a, D: StripDriver, S: InputSource> WordClock<'a, D, S> {
    pub const fn new(
        surface: &'a SharedSurface<D>,
        clock: &'a ClockEngine,
        input: &'a SharedInput<S>,
        config: WordClockConfig,
    ) -> Self {
        Self {
            surface,
            clock,
            input,
            config,
        }
    }

    pub const fn config(&self) -> &WordClockConfig {
        &self.config
    }

    fn display_on(&self, surface: &mut PixelSurface<D>) -> WordTime {
        let time = WordTime::from_seconds(self.clock.current_time());
        diag!(
            "WordClock: hour = {}, minutes = {} {:?}",
            time.hour,
            time.minutes,
            time.modifier
        );
        render(surface, &time, &self.config.colors);
        time
    }

    /// Redraw the clock face with the current time
    pub async fn display_time(&self) -> WordTime {
        let mut surface = self.surface.lock().await;
        self.display_on(&mut surface)
    }

    /// Read the joystick once and adjust the time accordingly
    ///
    /// Any pressed direction redraws the face, even when the clock was busy
    /// and the adjustment was dropped. Returns the direction read.
    pub async fn set_time(&self) -> JoystickDirection {
        let direction = with_input(self.input, read_joystick);
        if direction == JoystickDirection::NotPressed {
            return direction;
        }
        let mut surface = self.surface.lock().await;
        if let Err(err) = adjust_time(self.clock, direction) {
            diag!("setTime: {}", err);
        }
        self.display_on(&mut surface);
        direction
    }

    /// Redraw the face periodically, forever
    pub async fn run_display(&self) -> ! {
        loop {
            self.display_time().await;
            Timer::after(self.config.refresh_interval).await;
        }
    }

    /// Poll the joystick for adjustments periodically, forever
    pub async fn run_adjust(&self) -> ! {
        loop {
            self.set_time().await;
            Timer::after(self.config.adjust_interval).await;
        }
    }
}
