//! Recurring ticker for the live dashboard clock.
//!
//! The dashboard header redraws once per second. The ticker runs on its own
//! thread and is owned through a [`Clock`] handle: dropping the handle
//! signals the thread and joins it, so a torn-down view can never leak a
//! recurring callback. The ticker owns no shared state—it only sends unit
//! ticks over a channel.

use chrono::{DateTime, Local};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A single clock tick. Carries no data; consumers read the current time
/// when they redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

/// Handle to a running ticker thread.
pub struct Clock {
    stop_tx: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl Clock {
    /// Spawns the ticker. A [`Tick`] arrives on the returned channel every
    /// `period` until the handle is dropped or the receiver disconnects.
    pub fn start(period: Duration) -> (Self, Receiver<Tick>) {
        let (tick_tx, tick_rx) = mpsc::channel();
        let (stop_tx, stop_rx) = mpsc::channel();

        let handle = thread::spawn(move || loop {
            match stop_rx.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => {
                    if tick_tx.send(Tick).is_err() {
                        break; // receiver went away
                    }
                }
                // Stop signal, or the handle was dropped
                _ => break,
            }
        });

        (
            Self {
                stop_tx,
                handle: Some(handle),
            },
            tick_rx,
        )
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        let _ = self.stop_tx.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// "Thu, Aug 7, 2026" — short weekday, short month, day, year.
pub fn format_date(now: DateTime<Local>) -> String {
    now.format("%a, %b %-d, %Y").to_string()
}

/// "09:41 PM" — 12-hour clock with zero-padded hour and minute.
pub fn format_time(now: DateTime<Local>) -> String {
    now.format("%I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::mpsc::TryRecvError;

    #[test]
    fn delivers_ticks_while_running() {
        let (clock, ticks) = Clock::start(Duration::from_millis(10));

        assert!(ticks.recv_timeout(Duration::from_secs(2)).is_ok());
        assert!(ticks.recv_timeout(Duration::from_secs(2)).is_ok());

        drop(clock);
    }

    #[test]
    fn drop_stops_the_ticker_thread() {
        let (clock, ticks) = Clock::start(Duration::from_millis(5));
        assert!(ticks.recv_timeout(Duration::from_secs(2)).is_ok());

        // Drop joins the thread, which closes the sending side.
        drop(clock);

        // Drain whatever was buffered; after that the channel must report
        // disconnect, proving the thread is gone.
        while ticks.try_recv().is_ok() {}
        assert_eq!(ticks.try_recv(), Err(TryRecvError::Disconnected));
    }

    #[test]
    fn formats_date_and_time() {
        let dt = Local.with_ymd_and_hms(2026, 8, 7, 21, 41, 0).unwrap();
        assert_eq!(format_date(dt), "Fri, Aug 7, 2026");
        assert_eq!(format_time(dt), "09:41 PM");
    }

    #[test]
    fn formats_morning_time() {
        let dt = Local.with_ymd_and_hms(2026, 1, 2, 0, 5, 0).unwrap();
        assert_eq!(format_time(dt), "12:05 AM");
    }
}
