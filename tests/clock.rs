mod tests {
    use core::pin::pin;
    use core::task::{Context, Waker};

    use embassy_time::{Duration, Instant};
    use lumatrix::Error;
    use lumatrix::clock::{
        ClockEngine, ClockTicker, SECONDS_PER_DAY, TickOutcome, format_time, validate_time,
    };

    #[test]
    fn test_set_and_read_time() {
        let clock = ClockEngine::new();
        clock.set_current_time(1, 30, 0).unwrap();
        assert_eq!(clock.current_time(), 5400);
        assert_eq!(clock.current_time_text().as_str(), "1:30:0");
    }

    #[test]
    fn test_set_time_rejects_out_of_range() {
        let clock = ClockEngine::new();
        clock.set_current_time(12, 0, 0).unwrap();
        assert_eq!(clock.set_current_time(24, 0, 0), Err(Error::InvalidHours(24)));
        assert_eq!(clock.set_current_time(0, 60, 0), Err(Error::InvalidMinutes(60)));
        assert_eq!(clock.set_current_time(0, 0, 60), Err(Error::InvalidSeconds(60)));
        assert_eq!(clock.current_time(), 12 * 3600);
    }

    #[test]
    fn test_validate_and_format() {
        assert_eq!(validate_time(23, 59, 59), Ok(SECONDS_PER_DAY - 1));
        assert_eq!(validate_time(0, 0, 0), Ok(0));
        assert_eq!(format_time(0).as_str(), "0:0:0");
        assert_eq!(format_time(SECONDS_PER_DAY - 1).as_str(), "23:59:59");
        assert_eq!(format_time(3661).as_str(), "1:1:1");
    }

    #[test]
    fn test_readers_get_stale_value_under_contention() {
        let clock = ClockEngine::new();
        clock.set_current_time(8, 0, 0).unwrap();

        let mut guard = clock.try_hold().unwrap();
        assert_eq!(clock.try_current_time(), Err(Error::ClockBusy));
        assert_eq!(clock.current_time(), 8 * 3600);
        assert_eq!(clock.current_time_text().as_str(), "8:0:0");
        assert_eq!(clock.set_current_time(9, 0, 0), Err(Error::ClockBusy));

        guard.set_seconds_of_day(100);
        drop(guard);
        assert_eq!(clock.try_current_time(), Ok(100));
        assert_eq!(clock.published(), 100);
    }

    #[test]
    fn test_ticker_uses_absolute_deadlines() {
        let clock = ClockEngine::new();
        let mut ticker = ClockTicker::new(&clock, Instant::from_millis(500), 1);
        assert_eq!(ticker.next_deadline(), Instant::from_millis(500));

        assert_eq!(ticker.tick(), TickOutcome::Advanced(1));
        assert_eq!(ticker.next_deadline(), Instant::from_millis(1500));
        assert_eq!(ticker.tick(), TickOutcome::Advanced(2));
        assert_eq!(ticker.next_deadline(), Instant::from_millis(2500));
        assert_eq!(ticker.tick_count(), 2);
        assert_eq!(clock.current_time(), 2);
    }

    #[test]
    fn test_ticker_catches_up_missed_ticks() {
        let clock = ClockEngine::new();
        let mut ticker = ClockTicker::new(&clock, Instant::from_millis(0), 1);
        ticker.tick();

        let guard = clock.try_hold().unwrap();
        assert_eq!(ticker.tick(), TickOutcome::Missed(1));
        assert_eq!(ticker.tick(), TickOutcome::Missed(2));
        // A missed tick keeps the same deadline
        assert_eq!(ticker.next_deadline(), Instant::from_millis(1000));
        assert_eq!(ticker.tick_count(), 1);
        drop(guard);

        assert_eq!(ticker.tick(), TickOutcome::Advanced(1 + 1 + 2));
        assert_eq!(ticker.missed_ticks(), 0);
        assert_eq!(ticker.tick_count(), 2);
        assert_eq!(ticker.next_deadline(), Instant::from_millis(2000));
    }

    #[test]
    fn test_ticker_wraps_at_midnight() {
        let clock = ClockEngine::new();
        clock.set_current_time(23, 59, 59).unwrap();
        let mut ticker = ClockTicker::new(&clock, Instant::from_millis(0), 1);
        assert_eq!(ticker.tick(), TickOutcome::Advanced(0));
        assert_eq!(clock.current_time_text().as_str(), "0:0:0");
    }

    #[test]
    fn test_ticker_interval() {
        let clock = ClockEngine::new();
        let mut ticker = ClockTicker::new(&clock, Instant::from_millis(0), 5);
        ticker.tick();
        assert_eq!(ticker.next_deadline(), Instant::from_millis(5000));
        assert_eq!(clock.current_time(), 5);

        let mut zero = ClockTicker::new(&clock, Instant::from_millis(0), 0);
        zero.tick();
        assert_eq!(zero.next_deadline(), Instant::from_millis(1000));
    }

    #[test]
    fn test_ticker_catch_up_saturates() {
        let clock = ClockEngine::new();
        let mut ticker = ClockTicker::new(&clock, Instant::from_millis(0), u32::MAX);

        let guard = clock.try_hold().unwrap();
        assert_eq!(ticker.tick(), TickOutcome::Missed(1));
        drop(guard);

        assert_eq!(ticker.tick(), TickOutcome::Advanced(u32::MAX % SECONDS_PER_DAY));
    }

    #[test]
    fn test_ticker_run_waits_for_deadline() {
        let clock = ClockEngine::new();
        clock.set_current_time(6, 0, 0).unwrap();
        let ticker = ClockTicker::new(&clock, Instant::now() + Duration::from_millis(20), 60);
        let mut task = pin!(ticker.run());
        let mut cx = Context::from_waker(Waker::noop());

        assert!(task.as_mut().poll(&mut cx).is_pending());
        assert_eq!(clock.current_time(), 6 * 3600);

        // Only the first deadline falls inside this window
        let end = Instant::now() + Duration::from_millis(80);
        while Instant::now() < end {
            assert!(task.as_mut().poll(&mut cx).is_pending());
        }
        assert_eq!(clock.current_time(), 6 * 3600 + 60);
    }
}
