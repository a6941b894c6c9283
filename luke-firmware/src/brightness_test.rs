use super::*;

fn ms(t: u64) -> Instant {
    Instant::from_millis(t)
}

#[test]
fn nothing_pending() {
    let mut saver = BrightnessSaver::default();
    assert_eq!(saver.value(), 64);
    assert!(!saver.is_pending());
    assert_eq!(saver.poll(ms(5000)), None);
    assert_eq!(saver.due_at(), None);
}

#[test]
fn single_change_saved_after_quiet_period() {
    let mut saver = BrightnessSaver::new(64);
    saver.record(80, ms(100));
    assert!(saver.is_pending());
    assert_eq!(saver.due_at(), Some(ms(1100)));

    assert_eq!(saver.poll(ms(100)), None);
    assert_eq!(saver.poll(ms(1099)), None);
    assert_eq!(saver.poll(ms(1100)), Some(80));
    assert!(!saver.is_pending());
    assert_eq!(saver.poll(ms(3000)), None);
    assert_eq!(saver.value(), 80);
}

#[test]
fn burst_coalesces_into_last_value() {
    let mut saver = BrightnessSaver::new(64);
    let mut saves = 0;
    let mut last = None;

    for (i, t) in [0u64, 300, 600, 900, 1200].into_iter().enumerate() {
        saver.record(64 + 16 * i as u8, ms(t));
        if let Some(v) = saver.poll(ms(t + 10)) {
            saves += 1;
            last = Some(v);
        }
    }
    assert_eq!(saves, 0);

    for t in (1210..=2500).step_by(10) {
        if let Some(v) = saver.poll(ms(t)) {
            saves += 1;
            last = Some(v);
        }
    }
    assert_eq!(saves, 1);
    assert_eq!(last, Some(128));
}

#[test]
fn clock_going_backwards_does_not_save() {
    let mut saver = BrightnessSaver::new(64);
    saver.record(70, ms(5000));
    assert_eq!(saver.poll(ms(10)), None);
    assert!(saver.is_pending());
}

#[test]
fn set_value_does_not_schedule() {
    let mut saver = BrightnessSaver::new(64);
    saver.set_value(12);
    assert_eq!(saver.value(), 12);
    assert!(!saver.is_pending());
}

#[test]
fn custom_delay() {
    let mut saver = BrightnessSaver::with_delay(0, Duration::from_millis(50));
    saver.record(1, ms(0));
    assert_eq!(saver.poll(ms(49)), None);
    assert_eq!(saver.poll(ms(50)), Some(1));
}
