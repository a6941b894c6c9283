extern crate std;

use core::{cell::Cell, task::Waker};
use embassy_time::Instant;
use embassy_time_driver::Driver;

struct TestTimeDriver;

impl Driver for TestTimeDriver {
    fn now(&self) -> u64 {
        NOW.get()
    }

    /// Timers expire straight away: the clock jumps to `at` so async loops run without sleeping.
    fn schedule_wake(&self, at: u64, waker: &Waker) {
        if at > NOW.get() {
            NOW.set(at);
        }
        WAKES.set(WAKES.get() + 1);
        waker.wake_by_ref();
    }
}

std::thread_local! {
    static NOW: Cell<u64> = const { Cell::new(0) };
    static WAKES: Cell<usize> = const { Cell::new(0) };
}

embassy_time_driver::time_driver_impl!(static TIME_DRIVER: TestTimeDriver = TestTimeDriver);

pub fn set_time(t: Instant) {
    NOW.set(t.as_ticks());
}

pub fn advance(ms: u64) {
    NOW.set(NOW.get() + embassy_time::Duration::from_millis(ms).as_ticks());
}

/// Number of timer wakes requested on this thread.
pub fn wake_count() -> usize {
    WAKES.get()
}
