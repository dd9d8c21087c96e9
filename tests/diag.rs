mod tests {
    use core::fmt::Arguments;
    use std::sync::Mutex;

    use lumatrix::ClockEngine;
    use lumatrix::diag::{clear_sink, debug_enable, is_enabled, set_sink};

    static LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());

    fn capture(args: Arguments<'_>) {
        LINES.lock().unwrap().push(args.to_string());
    }

    fn take_lines() -> Vec<String> {
        core::mem::take(&mut *LINES.lock().unwrap())
    }

    #[test]
    fn test_diagnostics_follow_the_enable_flag() {
        set_sink(capture);
        let clock = ClockEngine::new();

        assert!(!is_enabled());
        let _ = clock.set_current_time(24, 0, 0);
        assert!(take_lines().is_empty());

        debug_enable(true);
        let _ = clock.set_current_time(24, 0, 0);
        let lines = take_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("invalid hours 24"));

        clock.set_current_time(1, 2, 3).unwrap();
        assert_eq!(take_lines(), vec!["setCurrentTime: time set to 1:2:3".to_string()]);

        let guard = clock.try_hold().unwrap();
        assert_eq!(clock.current_time(), 3723);
        assert!(take_lines()[0].starts_with("getCurrentTime:"));
        drop(guard);

        debug_enable(false);
        let _ = clock.set_current_time(99, 0, 0);
        assert!(take_lines().is_empty());
        clear_sink();
    }
}
