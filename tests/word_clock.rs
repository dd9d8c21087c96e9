mod tests {
    use core::cell::RefCell;
    use core::pin::pin;
    use core::task::{Context, Poll, Waker};

    use embassy_sync::{blocking_mutex, mutex::Mutex};
    use lumatrix::color::{BLACK, Rgb};
    use lumatrix::input::{InputLine, InputSource, JoystickDirection, SharedInput};
    use lumatrix::surface::{PixelSurface, SharedSurface};
    use lumatrix::word_clock::{
        Modifier, Phrase, WordClock, WordClockColors, WordClockConfig, WordTime, adjust_time,
        hour_phrase, minute_phrases, quantize_minutes, render,
    };
    use lumatrix::{ClockEngine, Error, StripDriver};

    #[derive(Default)]
    struct NullDriver;

    impl StripDriver for NullDriver {
        fn write(&mut self, _colors: &[Rgb]) {}
    }

    #[derive(Default)]
    struct Joystick {
        pressed: Option<InputLine>,
    }

    impl InputSource for Joystick {
        fn is_high(&mut self, line: InputLine) -> bool {
            self.pressed != Some(line)
        }
    }

    /// Drive a future that never has to wait
    fn block_on<F: Future>(future: F) -> F::Output {
        let mut future = pin!(future);
        let mut cx = Context::from_waker(Waker::noop());
        loop {
            if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
                return output;
            }
        }
    }

    const fn secs(hours: u32, minutes: u32, seconds: u32) -> u32 {
        hours * 3600 + minutes * 60 + seconds
    }

    fn colors() -> WordClockColors {
        WordClockColors {
            hour: Rgb { r: 1, g: 0, b: 0 },
            minute: Rgb { r: 0, g: 2, b: 0 },
            word: Rgb { r: 0, g: 0, b: 3 },
        }
    }

    fn lit_cells(surface: &PixelSurface<NullDriver>) -> Vec<(i32, i32, Rgb)> {
        let mut cells = Vec::new();
        for y in 0..8 {
            for x in 0..8 {
                let color = surface.pixel(x, y);
                if color != BLACK {
                    cells.push((x, y, color));
                }
            }
        }
        cells
    }

    #[test]
    fn test_quantize_minutes() {
        assert_eq!(quantize_minutes(0), 0);
        assert_eq!(quantize_minutes(2), 0);
        assert_eq!(quantize_minutes(3), 5);
        assert_eq!(quantize_minutes(7), 5);
        assert_eq!(quantize_minutes(8), 10);
        assert_eq!(quantize_minutes(32), 30);
    }

    #[test]
    fn test_full_hour() {
        let time = WordTime::from_seconds(secs(1, 0, 0));
        assert_eq!(time.hour_phrase(), Phrase::One);
        assert!(time.is_full_hour());
        assert_eq!(time.phrases().as_slice(), &[Phrase::One]);
    }

    #[test]
    fn test_minutes_to_next_hour() {
        let time = WordTime::from_seconds(secs(1, 35, 0));
        assert_eq!(time.hour, 2);
        assert_eq!(time.minutes, 25);
        assert_eq!(time.modifier, Modifier::To);
        assert_eq!(
            time.phrases().as_slice(),
            &[Phrase::Two, Phrase::Twenty, Phrase::MinFive, Phrase::To]
        );
    }

    #[test]
    fn test_past_threshold() {
        let time = WordTime::from_seconds(secs(4, 32, 0));
        assert_eq!((time.hour, time.minutes, time.modifier), (4, 30, Modifier::Past));

        let time = WordTime::from_seconds(secs(4, 33, 0));
        assert_eq!((time.hour, time.minutes, time.modifier), (5, 25, Modifier::To));

        let time = WordTime::from_seconds(secs(11, 58, 0));
        assert_eq!(time.hour_phrase(), Phrase::Twelve);
        assert!(time.is_full_hour());
    }

    #[test]
    fn test_afternoon_uses_twelve_hour_dial() {
        let time = WordTime::from_seconds(secs(15, 10, 0));
        assert_eq!(time.hour_phrase(), Phrase::Three);
        assert_eq!(time.phrases().as_slice(), &[Phrase::Three, Phrase::MinTen, Phrase::Past]);
        assert_eq!(WordTime::from_seconds(secs(12, 0, 0)).hour_phrase(), Phrase::Twelve);
    }

    #[test]
    fn test_phrase_lookup() {
        assert_eq!(hour_phrase(0), Some(Phrase::Twelve));
        assert_eq!(hour_phrase(10), Some(Phrase::HourTen));
        assert_eq!(hour_phrase(12), None);
        assert_eq!(minute_phrases(15), &[Phrase::Quarter]);
        assert_eq!(minute_phrases(30), &[Phrase::Half]);
        assert!(minute_phrases(0).is_empty());
        assert!(minute_phrases(17).is_empty());
        assert_eq!(Phrase::HourFive.as_str(), "HOUR_FIVE");
    }

    #[test]
    fn test_phrase_cells_are_on_the_grid() {
        let all = [
            Phrase::One,
            Phrase::Two,
            Phrase::Three,
            Phrase::Four,
            Phrase::HourFive,
            Phrase::Six,
            Phrase::Seven,
            Phrase::Eight,
            Phrase::Nine,
            Phrase::HourTen,
            Phrase::Eleven,
            Phrase::Twelve,
            Phrase::MinFive,
            Phrase::MinTen,
            Phrase::Quarter,
            Phrase::Twenty,
            Phrase::Half,
            Phrase::Past,
            Phrase::To,
        ];
        for phrase in all {
            assert!(!phrase.pixels().is_empty());
            assert!(phrase.pixels().iter().all(|&(x, y)| x < 8 && y < 8));
        }
    }

    #[test]
    fn test_render_full_hour() {
        let mut surface = PixelSurface::new(NullDriver, 255);
        surface.set_pixel(0, 0, Rgb { r: 9, g: 9, b: 9 }).unwrap();
        render(&mut surface, &WordTime::from_seconds(secs(1, 0, 0)), &colors());

        let hour = colors().hour;
        assert_eq!(lit_cells(&surface), vec![(1, 7, hour), (4, 7, hour), (7, 7, hour)]);
    }

    #[test]
    fn test_render_with_minutes() {
        let mut surface = PixelSurface::new(NullDriver, 255);
        let colors = colors();
        render(&mut surface, &WordTime::from_seconds(secs(1, 35, 0)), &colors);

        assert_eq!(surface.pixel(0, 6), colors.hour);
        assert_eq!(surface.pixel(1, 7), colors.hour);
        assert_eq!(surface.pixel(2, 0), colors.minute);
        assert_eq!(surface.pixel(7, 2), colors.minute);
        assert_eq!(surface.pixel(6, 3), colors.word);
        assert_eq!(surface.pixel(2, 3), BLACK);
        let expected = Phrase::Two.pixels().len()
            + Phrase::Twenty.pixels().len()
            + Phrase::MinFive.pixels().len()
            + Phrase::To.pixels().len();
        assert_eq!(lit_cells(&surface).len(), expected);
    }

    #[test]
    fn test_adjust_time() {
        let clock = ClockEngine::new();
        clock.set_current_time(10, 58, 30).unwrap();

        assert_eq!(adjust_time(&clock, JoystickDirection::Up), Ok(true));
        assert_eq!(clock.current_time(), secs(11, 58, 0));

        assert_eq!(adjust_time(&clock, JoystickDirection::Right), Ok(true));
        assert_eq!(clock.current_time(), secs(11, 3, 0));

        assert_eq!(adjust_time(&clock, JoystickDirection::Left), Ok(true));
        assert_eq!(clock.current_time(), secs(11, 58, 0));

        assert_eq!(adjust_time(&clock, JoystickDirection::Up), Ok(true));
        assert_eq!(clock.current_time(), secs(0, 58, 0));

        assert_eq!(adjust_time(&clock, JoystickDirection::Down), Ok(true));
        assert_eq!(clock.current_time(), secs(11, 58, 0));
    }

    #[test]
    fn test_adjust_time_drops_afternoon() {
        let clock = ClockEngine::new();
        clock.set_current_time(15, 20, 0).unwrap();
        adjust_time(&clock, JoystickDirection::Up).unwrap();
        assert_eq!(clock.current_time(), secs(4, 20, 0));
    }

    #[test]
    fn test_adjust_time_ignores_center_and_release() {
        let clock = ClockEngine::new();
        clock.set_current_time(7, 7, 7).unwrap();
        assert_eq!(adjust_time(&clock, JoystickDirection::Center), Ok(false));
        assert_eq!(adjust_time(&clock, JoystickDirection::NotPressed), Ok(false));
        assert_eq!(clock.current_time(), secs(7, 7, 7));
    }

    #[test]
    fn test_adjust_time_when_busy() {
        let clock = ClockEngine::new();
        let _guard = clock.try_hold().unwrap();
        assert_eq!(adjust_time(&clock, JoystickDirection::Up), Err(Error::ClockBusy));
    }

    #[test]
    fn test_word_clock_display_and_set_time() {
        let surface: SharedSurface<NullDriver> = Mutex::new(PixelSurface::new(NullDriver, 255));
        let input: SharedInput<Joystick> =
            blocking_mutex::Mutex::new(RefCell::new(Joystick::default()));
        let clock = ClockEngine::new();
        clock.set_current_time(3, 0, 0).unwrap();
        let config = WordClockConfig {
            colors: colors(),
            ..WordClockConfig::default()
        };
        let word_clock = WordClock::new(&surface, &clock, &input, config);

        let shown = block_on(word_clock.display_time());
        assert_eq!(shown.hour_phrase(), Phrase::Three);

        assert_eq!(block_on(word_clock.set_time()), JoystickDirection::NotPressed);
        assert_eq!(clock.current_time(), secs(3, 0, 0));

        input.lock(|joystick| joystick.borrow_mut().pressed = Some(InputLine::Right));
        assert_eq!(block_on(word_clock.set_time()), JoystickDirection::Right);
        assert_eq!(clock.current_time(), secs(3, 5, 0));

        let surface = block_on(surface.lock());
        assert_eq!(surface.pixel(4, 2), colors().minute);
        assert_eq!(surface.pixel(2, 3), colors().word);
    }
}
