//! Desktop preview app for lumatrix
//!
//! Simulates the 8x8 matrix, the wall clock and the joystick in a window.
//! Time is synthetic, so the clock can be sped up to watch the word clock
//! move.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use lumatrix::{
    ClockEngine, ClockTicker, FramePlayer, Image, Instant, JoystickDirection, MovingImage,
    PanDirection, PixelSurface, Rgb, ScrollText, StripDriver,
    color::BLACK,
    diag,
    input::{DirectionWatcher, InputLine, InputSource, JoystickWatcher, read_joystick, read_switch},
    word_clock::{WordClockColors, WordTime, adjust_time, render},
};

/// Size of each LED square in pixels
const LED_SIZE: f32 = 36.0;

/// Gap between LEDs
const LED_GAP: f32 = 4.0;

/// Wall clock shared by the ticker and the word clock
static CLOCK: ClockEngine = ClockEngine::new();

const ARROW: &str = "
    . . . # # . . .
    . . # # # # . .
    . # # # # # # .
    # # # # # # # #
    . . . # # . . .
    . . . # # . . .
    . . . # # . . .
    . . . # # . . .";

/// Driver that keeps the last frame for painting
#[derive(Default)]
struct PreviewDriver {
    frame: Vec<Rgb>,
}

impl StripDriver for PreviewDriver {
    fn write(&mut self, colors: &[Rgb]) {
        self.frame.clear();
        self.frame.extend_from_slice(colors);
    }
}

/// Buttons of the simulated board
#[derive(Default)]
struct PreviewBoard {
    pressed: Option<InputLine>,
    switch: bool,
}

impl InputSource for PreviewBoard {
    fn is_high(&mut self, line: InputLine) -> bool {
        match line {
            InputLine::Switch => self.switch,
            _ => self.pressed != Some(line),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    WordClock,
    ScrollText,
    MovingImage,
    Image,
}

enum Playback {
    Idle,
    Text(FramePlayer<ScrollText>),
    Image(FramePlayer<MovingImage>),
}

#[allow(clippy::print_stdout)]
fn print_diag(args: std::fmt::Arguments<'_>) {
    println!("{args}");
}

fn main() -> eframe::Result<()> {
    diag::set_sink(print_diag);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 640.0])
            .with_title("LED Matrix Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "lumatrix-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    surface: PixelSurface<PreviewDriver>,
    board: PreviewBoard,
    ticker: ClockTicker<'static>,
    playback: Playback,
    joystick: JoystickWatcher,
    adjust: [DirectionWatcher; 4],

    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    mode: Mode,
    brightness: u8,
    color: [u8; 3],
    colors: WordClockColors,
    text: String,
    speed: i32,
    direction: PanDirection,
    debug: bool,
    last_event: String,
}

impl PreviewApp {
    fn new() -> Self {
        let mut surface = PixelSurface::new(PreviewDriver::default(), 255);
        surface.clear();
        let _ = CLOCK.set_current_time(10, 10, 0);

        Self {
            surface,
            board: PreviewBoard::default(),
            ticker: ClockTicker::new(&CLOCK, Instant::from_millis(0), 1),
            playback: Playback::Idle,
            joystick: JoystickWatcher::new(),
            adjust: [
                DirectionWatcher::new(JoystickDirection::Up),
                DirectionWatcher::new(JoystickDirection::Down),
                DirectionWatcher::new(JoystickDirection::Right),
                DirectionWatcher::new(JoystickDirection::Left),
            ],
            t_ms: 0,
            last_frame: StdInstant::now(),
            time_scale: 1.0,
            mode: Mode::WordClock,
            brightness: 255,
            color: [255, 120, 0],
            colors: WordClockColors::default(),
            text: String::from("Hello World!"),
            speed: 80,
            direction: PanDirection::Left,
            debug: false,
            last_event: String::new(),
        }
    }

    fn color(&self) -> Rgb {
        Rgb {
            r: self.color[0],
            g: self.color[1],
            b: self.color[2],
        }
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        let delta_ms = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let delta_ms = if delta_ms.is_finite() { delta_ms.max(0.0) as u64 } else { 0 };
        self.t_ms = self.t_ms.wrapping_add(delta_ms);
    }

    /// Run every clock tick that is due
    fn step_clock(&mut self, now: Instant) {
        while self.ticker.next_deadline() <= now {
            self.ticker.tick();
        }
    }

    /// Feed the simulated buttons to the watchers and adjust the clock
    fn step_input(&mut self) {
        let direction = read_joystick(&mut self.board);
        if let Some(changed) = self.joystick.poll(direction) {
            self.last_event = format!("joystick: {}", changed.as_str());
        }
        for watcher in &mut self.adjust {
            if watcher.poll(direction) && self.mode == Mode::WordClock {
                if let Err(err) = adjust_time(&CLOCK, watcher.target()) {
                    self.last_event = format!("adjust failed: {err}");
                }
            }
        }
    }

    /// Draw the current mode into the surface
    fn step_display(&mut self, now: Instant) {
        match &mut self.playback {
            Playback::Text(player) => {
                if player.tick_due(now, &mut self.surface) {
                    self.playback = Playback::Idle;
                }
            }
            Playback::Image(player) => {
                if player.tick_due(now, &mut self.surface) {
                    self.playback = Playback::Idle;
                }
            }
            Playback::Idle => {
                if self.mode == Mode::WordClock {
                    let time = WordTime::from_seconds(CLOCK.current_time());
                    render(&mut self.surface, &time, &self.colors);
                }
            }
        }
    }

    fn start(&mut self) {
        let color = self.color();
        self.surface.clear();
        self.playback = match self.mode {
            Mode::WordClock => Playback::Idle,
            Mode::ScrollText => {
                Playback::Text(FramePlayer::new(ScrollText::new(&self.text, color, self.speed)))
            }
            Mode::MovingImage => match Image::parse(ARROW) {
                Ok(image) => Playback::Image(FramePlayer::new(MovingImage::new(
                    image,
                    color,
                    self.speed,
                    self.direction,
                ))),
                Err(_) => Playback::Idle,
            },
            Mode::Image => {
                if let Ok(image) = Image::parse(ARROW) {
                    lumatrix::animation::show_image(&mut self.surface, &image, color);
                }
                Playback::Idle
            }
        };
    }
}

/// Frame stepping against synthetic time
trait TickDue {
    /// Render the next frame if it is due; returns `true` when finished
    fn tick_due(&mut self, now: Instant, surface: &mut PixelSurface<PreviewDriver>) -> bool;
}

impl<A: lumatrix::Animation> TickDue for FramePlayer<A> {
    fn tick_due(&mut self, now: Instant, surface: &mut PixelSurface<PreviewDriver>) -> bool {
        match self.next_deadline() {
            Some(deadline) if deadline > now => false,
            _ => self.tick(now, surface).is_none(),
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        let now = Instant::from_millis(self.t_ms);
        self.step_clock(now);
        self.step_input();
        self.step_display(now);

        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Time: {}", CLOCK.current_time_text()));
                ui.add_space(8.0);
                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=600.0).logarithmic(true));
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Mode:");
                let old_mode = self.mode;
                ui.selectable_value(&mut self.mode, Mode::WordClock, "word clock");
                ui.selectable_value(&mut self.mode, Mode::ScrollText, "scroll text");
                ui.selectable_value(&mut self.mode, Mode::MovingImage, "moving image");
                ui.selectable_value(&mut self.mode, Mode::Image, "image");
                if self.mode != old_mode {
                    self.start();
                }
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Text:");
                ui.text_edit_singleline(&mut self.text);
            });

            ui.horizontal(|ui| {
                ui.label("Animation speed:");
                ui.add(egui::Slider::new(&mut self.speed, 1..=100));
                ui.selectable_value(&mut self.direction, PanDirection::Left, "left");
                ui.selectable_value(&mut self.direction, PanDirection::Right, "right");
                if ui.button("▶ Play").clicked() {
                    self.start();
                }
            });

            ui.horizontal(|ui| {
                ui.label("Color:");
                ui.color_edit_button_srgb(&mut self.color);
                ui.add_space(8.0);
                ui.label("Brightness:");
                let old_brightness = self.brightness;
                ui.add(egui::DragValue::new(&mut self.brightness).range(0u8..=255u8));
                if self.brightness != old_brightness {
                    self.surface.set_brightness(self.brightness);
                }
            });

            ui.horizontal(|ui| {
                if ui.checkbox(&mut self.debug, "Diagnostics to stdout").changed() {
                    diag::debug_enable(self.debug);
                }
                ui.checkbox(&mut self.board.switch, "Switch");
                ui.label(if read_switch(&mut self.board) { "on" } else { "off" });
            });

            ui.add_space(8.0);

            // === Joystick ===
            self.board.pressed = None;
            egui::Grid::new("joystick").show(ui, |ui| {
                let mut button = |ui: &mut egui::Ui, label: &str, line: InputLine| {
                    let response = ui.add(egui::Button::new(label).min_size(egui::vec2(48.0, 32.0)));
                    if response.is_pointer_button_down_on() {
                        self.board.pressed = Some(line);
                    }
                };
                ui.label("");
                button(ui, "▲", InputLine::Up);
                ui.end_row();
                button(ui, "◀", InputLine::Left);
                button(ui, "●", InputLine::Center);
                button(ui, "▶", InputLine::Right);
                ui.end_row();
                ui.label("");
                button(ui, "▼", InputLine::Down);
                ui.end_row();
            });
            ui.label(&self.last_event);

            ui.add_space(16.0);

            // === LED Matrix ===
            let led_pitch = LED_SIZE + LED_GAP;
            let side = led_pitch * 8.0;
            let (response, painter) =
                ui.allocate_painter(egui::vec2(side, side), egui::Sense::hover());
            let origin = response.rect.min;
            painter.rect_filled(response.rect, 4.0, egui::Color32::from_gray(16));

            let frame = &self.surface.driver().frame;
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            for y in 0..8usize {
                for x in 0..8usize {
                    let pixel = lumatrix::surface::physical_index(x as i32, y as i32)
                        .and_then(|index| frame.get(index).copied())
                        .unwrap_or(BLACK);
                    let rect = egui::Rect::from_min_size(
                        egui::pos2(
                            origin.x + x as f32 * led_pitch,
                            origin.y + y as f32 * led_pitch,
                        ),
                        egui::vec2(LED_SIZE, LED_SIZE),
                    );
                    let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                    painter.rect_filled(rect, 6.0, color);
                }
            }
        });
    }
}
