//! Switch and joystick input
//!
//! Inputs are plain digital lines with pull-ups: a pressed joystick button
//! reads low. The poller samples them at a fixed interval and reports
//! changes, not levels, so each transition is delivered exactly once.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Duration, Timer};

use crate::diag;

/// Shortest random delay before a direction watcher starts polling, in milliseconds
pub const JITTER_MIN_MS: u32 = 1;
/// Longest random delay before a direction watcher starts polling, in milliseconds
pub const JITTER_MAX_MS: u32 = 100;

const DIRECTION_NAME_NOT_PRESSED: &str = "NotPressed";
const DIRECTION_NAME_CENTER: &str = "Center";
const DIRECTION_NAME_UP: &str = "Up";
const DIRECTION_NAME_DOWN: &str = "Down";
const DIRECTION_NAME_RIGHT: &str = "Right";
const DIRECTION_NAME_LEFT: &str = "Left";

const DIRECTION_ID_NOT_PRESSED: u8 = 0;
const DIRECTION_ID_CENTER: u8 = 1;
const DIRECTION_ID_UP: u8 = 2;
const DIRECTION_ID_DOWN: u8 = 3;
const DIRECTION_ID_RIGHT: u8 = 4;
const DIRECTION_ID_LEFT: u8 = 5;

/// Logical input lines of the matrix board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputLine {
    Switch,
    Center,
    Up,
    Down,
    Right,
    Left,
}

impl InputLine {
    /// All lines, in configuration order
    pub const ALL: [Self; 6] = [
        Self::Switch,
        Self::Center,
        Self::Up,
        Self::Down,
        Self::Right,
        Self::Left,
    ];
}

/// Abstract digital input source
///
/// Implement this trait to map the logical lines to the pins of a board.
pub trait InputSource {
    /// Enable the pull-up of a line; called once per line at startup
    fn configure_pull_up(&mut self, _line: InputLine) {}

    /// Read the level of a line, `true` for high
    fn is_high(&mut self, line: InputLine) -> bool;
}

/// Input source shared between polling tasks
pub type SharedInput<S> = Mutex<CriticalSectionRawMutex, RefCell<S>>;

/// Joystick state
///
/// Only one direction is reported at a time. Simultaneous presses resolve
/// in the order Center, Up, Down, Right, Left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum JoystickDirection {
    #[default]
    NotPressed = DIRECTION_ID_NOT_PRESSED,
    Center = DIRECTION_ID_CENTER,
    Up = DIRECTION_ID_UP,
    Down = DIRECTION_ID_DOWN,
    Right = DIRECTION_ID_RIGHT,
    Left = DIRECTION_ID_LEFT,
}

impl JoystickDirection {
    /// Pressed directions, highest priority first
    pub const PRIORITY: [Self; 5] = [Self::Center, Self::Up, Self::Down, Self::Right, Self::Left];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            DIRECTION_ID_NOT_PRESSED => Self::NotPressed,
            DIRECTION_ID_CENTER => Self::Center,
            DIRECTION_ID_UP => Self::Up,
            DIRECTION_ID_DOWN => Self::Down,
            DIRECTION_ID_RIGHT => Self::Right,
            DIRECTION_ID_LEFT => Self::Left,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotPressed => DIRECTION_NAME_NOT_PRESSED,
            Self::Center => DIRECTION_NAME_CENTER,
            Self::Up => DIRECTION_NAME_UP,
            Self::Down => DIRECTION_NAME_DOWN,
            Self::Right => DIRECTION_NAME_RIGHT,
            Self::Left => DIRECTION_NAME_LEFT,
        }
    }

    /// Input line of a pressed direction
    pub const fn line(self) -> Option<InputLine> {
        match self {
            Self::NotPressed => None,
            Self::Center => Some(InputLine::Center),
            Self::Up => Some(InputLine::Up),
            Self::Down => Some(InputLine::Down),
            Self::Right => Some(InputLine::Right),
            Self::Left => Some(InputLine::Left),
        }
    }
}

/// Configure the pull-ups of every input line
pub fn configure_inputs<S: InputSource>(source: &mut S) {
    for line in InputLine::ALL {
        source.configure_pull_up(line);
    }
}

/// Read the slide switch, `true` when set
pub fn read_switch<S: InputSource>(source: &mut S) -> bool {
    source.is_high(InputLine::Switch)
}

/// Read the joystick direction
pub fn read_joystick<S: InputSource>(source: &mut S) -> JoystickDirection {
    JoystickDirection::PRIORITY
        .into_iter()
        .find(|direction| {
            direction
                .line()
                .is_some_and(|line| !source.is_high(line))
        })
        .unwrap_or(JoystickDirection::NotPressed)
}

/// Run `f` with exclusive access to a shared input source
pub fn with_input<S: InputSource, R>(input: &SharedInput<S>, f: impl FnOnce(&mut S) -> R) -> R {
    input.lock(|source| f(&mut source.borrow_mut()))
}

/// Reports changes of the switch level
#[derive(Debug, Clone, Copy)]
pub struct SwitchWatcher {
    last: bool,
}

impl SwitchWatcher {
    /// Create a watcher that treats `initial` as already seen
    pub const fn new(initial: bool) -> Self {
        Self { last: initial }
    }

    /// Feed one sample; returns the new level if it changed
    pub fn poll(&mut self, level: bool) -> Option<bool> {
        if level == self.last {
            return None;
        }
        self.last = level;
        Some(level)
    }
}

/// Reports changes of the joystick direction
#[derive(Debug, Clone, Copy, Default)]
pub struct JoystickWatcher {
    last: JoystickDirection,
}

impl JoystickWatcher {
    pub const fn new() -> Self {
        Self {
            last: JoystickDirection::NotPressed,
        }
    }

    /// Feed one sample; returns the new direction if it changed
    pub fn poll(&mut self, direction: JoystickDirection) -> Option<JoystickDirection> {
        if direction == self.last {
            return None;
        }
        self.last = direction;
        Some(direction)
    }
}

/// Reports when the joystick moves into one specific direction
#[derive(Debug, Clone, Copy)]
pub struct DirectionWatcher {
    target: JoystickDirection,
    last: JoystickDirection,
}

impl DirectionWatcher {
    pub const fn new(target: JoystickDirection) -> Self {
        Self {
            target,
            last: JoystickDirection::NotPressed,
        }
    }

    /// Feed one sample; returns `true` on a transition into the target
    pub fn poll(&mut self, direction: JoystickDirection) -> bool {
        let entered = direction != self.last && direction == self.target;
        self.last = direction;
        entered
    }

    /// Direction this watcher reports
    pub const fn target(&self) -> JoystickDirection {
        self.target
    }
}

/// Source of uniformly distributed integers
pub trait RandomSource {
    /// Random integer in `min..=max`
    fn random_range(&mut self, min: u32, max: u32) -> u32;
}

/// Small xorshift generator for timing jitter
#[derive(Debug, Clone)]
pub struct XorShiftRng(u32);

impl XorShiftRng {
    /// Create a generator; a zero seed is replaced since it would stay zero
    pub const fn new(seed: u32) -> Self {
        Self(if seed == 0 { 0x9E37_79B9 } else { seed })
    }

    fn next_u32(&mut self) -> u32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0
    }
}

impl RandomSource for XorShiftRng {
    fn random_range(&mut self, min: u32, max: u32) -> u32 {
        let (min, max) = if max < min { (max, min) } else { (min, max) };
        let span = u64::from(max - min) + 1;
        #[allow(clippy::cast_possible_truncation)]
        let offset = (u64::from(self.next_u32()) % span) as u32;
        min + offset
    }
}

/// Random delay before a direction watcher starts polling
///
/// Watchers started together would otherwise sample the pins in lockstep.
pub fn startup_jitter<R: RandomSource>(rng: &mut R) -> Duration {
    Duration::from_millis(u64::from(rng.random_range(JITTER_MIN_MS, JITTER_MAX_MS)))
}

/// Polls a shared input source and invokes callbacks on changes
///
/// Each `watch_*` method is a loop that never returns; run each in its own
/// task.
pub struct InputPoller<'a, S: InputSource> {
    input: &'a SharedInput<S>,
    interval: Duration,
}

impl<'a, S: InputSource> InputPoller<'a, S> {
    pub const fn new(input: &'a SharedInput<S>, interval: Duration) -> Self {
        Self { input, interval }
    }

    /// Read the switch now
    pub fn switch(&self) -> bool {
        with_input(self.input, read_switch)
    }

    /// Read the joystick now
    pub fn joystick(&self) -> JoystickDirection {
        with_input(self.input, read_joystick)
    }

    /// Call `on_change` with the new level whenever the switch moves
    pub async fn watch_switch(&self, mut on_change: impl FnMut(bool)) -> ! {
        let mut watcher = SwitchWatcher::new(self.switch());
        loop {
            if let Some(level) = watcher.poll(self.switch()) {
                on_change(level);
            }
            Timer::after(self.interval).await;
        }
    }

    /// Call `on_change` with the new direction whenever the joystick changes
    pub async fn watch_joystick(&self, mut on_change: impl FnMut(JoystickDirection)) -> ! {
        let mut watcher = JoystickWatcher::new();
        loop {
            if let Some(direction) = watcher.poll(self.joystick()) {
                diag!("joystickChangedThread: joystick direction changed to {}", direction.as_str());
                on_change(direction);
            }
            Timer::after(self.interval).await;
        }
    }

    /// Call `on_press` whenever the joystick moves into `direction`
    ///
    /// Polling starts after a random delay of 1 to 100 ms.
    pub async fn watch_direction<R: RandomSource>(
        &self,
        direction: JoystickDirection,
        rng: &mut R,
        mut on_press: impl FnMut(),
    ) -> ! {
        diag!("joystickDirectionThread: selected trigger direction {}", direction.as_str());
        Timer::after(startup_jitter(rng)).await;
        let mut watcher = DirectionWatcher::new(direction);
        loop {
            if watcher.poll(self.joystick()) {
                on_press();
            }
            Timer::after(self.interval).await;
        }
    }
}
