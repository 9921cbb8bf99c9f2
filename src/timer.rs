//! Per-street countdown.
//!
//! The timer is cooperative: it never sleeps or spawns. The host loop calls
//! [`StreetTimer::run_due`] with the current instant and renders whatever
//! state the timer is left in. A countdown that reaches zero raises the
//! time-up overlay and plays a short flash pulse on the table felt.

use crate::schedule::{JobId, Scheduler};
use std::fmt;
use std::time::{Duration, Instant};

pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);
pub const PULSE_INTERVAL: Duration = Duration::from_millis(150);
pub const PULSE_FLASHES: u8 = 4;

/// Table background while the timer is idle or flashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Felt {
    Normal,
    Alert,
}

/// What the countdown label shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Idle,
    Remaining(u32),
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Idle => f.write_str("Time left: --:--"),
            Countdown::Remaining(secs) => {
                write!(f, "Time left: {:02}:{:02}", secs / 60, secs % 60)
            }
        }
    }
}

/// Reported by [`StreetTimer::run_due`] in the order things happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick { remaining: u32 },
    Expired,
    Flash(Felt),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerTask {
    Tick,
    Pulse,
}

#[derive(Debug, Clone)]
pub struct StreetTimer {
    jobs: Scheduler<TimerTask>,
    tick_job: Option<JobId>,
    pulse_job: Option<JobId>,
    remaining: u32,
    pulse_step: u8,
    countdown: Countdown,
    felt: Felt,
    time_up: bool,
}

impl Default for StreetTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl StreetTimer {
    pub fn new() -> Self {
        Self {
            jobs: Scheduler::new(),
            tick_job: None,
            pulse_job: None,
            remaining: 0,
            pulse_step: 0,
            countdown: Countdown::Idle,
            felt: Felt::Normal,
            time_up: false,
        }
    }

    /// Begin the countdown for a newly dealt street. Zero seconds means no timer.
    pub fn start_for_street(&mut self, seconds: u32, now: Instant) {
        self.clear_alert();
        self.stop(false);
        if seconds == 0 {
            self.countdown = Countdown::Idle;
            return;
        }
        self.remaining = seconds;
        self.countdown = Countdown::Remaining(seconds);
        self.tick_job = Some(self.jobs.after(now, TICK_INTERVAL, TimerTask::Tick));
    }

    /// Cancel the pending tick, optionally blanking the countdown.
    pub fn stop(&mut self, reset_display: bool) {
        if let Some(id) = self.tick_job.take() {
            self.jobs.cancel(id);
        }
        if reset_display {
            self.countdown = Countdown::Idle;
        }
    }

    /// Cancel any flash in flight, hide the overlay, restore the felt.
    pub fn clear_alert(&mut self) {
        if let Some(id) = self.pulse_job.take() {
            self.jobs.cancel(id);
        }
        self.time_up = false;
        self.felt = Felt::Normal;
    }

    /// Run every job due at `now`, oldest first.
    pub fn run_due(&mut self, now: Instant) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        while let Some((due, task)) = self.jobs.pop_due(now) {
            match task {
                TimerTask::Tick => self.tick(due, &mut events),
                TimerTask::Pulse => self.pulse(due, &mut events),
            }
        }
        events
    }

    fn tick(&mut self, due: Instant, events: &mut Vec<TimerEvent>) {
        self.tick_job = None;
        self.remaining = self.remaining.saturating_sub(1);
        self.countdown = Countdown::Remaining(self.remaining);
        events.push(TimerEvent::Tick { remaining: self.remaining });

        if self.remaining == 0 {
            events.push(TimerEvent::Expired);
            self.fire_time_up(due, events);
            return;
        }
        // anchored to the due time so a late wakeup does not stretch the street
        self.tick_job = Some(self.jobs.at(due + TICK_INTERVAL, TimerTask::Tick));
    }

    fn fire_time_up(&mut self, at: Instant, events: &mut Vec<TimerEvent>) {
        self.time_up = true;
        if let Some(id) = self.pulse_job.take() {
            self.jobs.cancel(id);
        }
        self.pulse_step = 0;
        self.pulse(at, events);
    }

    fn pulse(&mut self, at: Instant, events: &mut Vec<TimerEvent>) {
        self.pulse_job = None;
        if self.pulse_step >= PULSE_FLASHES {
            self.felt = Felt::Normal;
            events.push(TimerEvent::Flash(Felt::Normal));
            return;
        }
        self.felt = if self.pulse_step % 2 == 0 { Felt::Alert } else { Felt::Normal };
        events.push(TimerEvent::Flash(self.felt));
        self.pulse_step += 1;
        self.pulse_job = Some(self.jobs.at(at + PULSE_INTERVAL, TimerTask::Pulse));
    }

    pub fn countdown(&self) -> Countdown {
        self.countdown
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn felt(&self) -> Felt {
        self.felt
    }

    /// The overlay stays up after the pulse settles, until the next street or stop.
    pub fn is_time_up(&self) -> bool {
        self.time_up
    }

    pub fn is_running(&self) -> bool {
        self.tick_job.is_some()
    }

    pub fn is_flashing(&self) -> bool {
        self.pulse_job.is_some()
    }

    /// When the host loop next needs to call [`StreetTimer::run_due`].
    pub fn next_due(&self) -> Option<Instant> {
        self.jobs.next_due()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn countdown_format() {
        assert_eq!(Countdown::Idle.to_string(), "Time left: --:--");
        assert_eq!(Countdown::Remaining(90).to_string(), "Time left: 01:30");
        assert_eq!(Countdown::Remaining(5).to_string(), "Time left: 00:05");
    }

    #[test]
    fn zero_seconds_shows_placeholder_and_schedules_nothing() {
        let t0 = Instant::now();
        let mut t = StreetTimer::new();
        t.start_for_street(0, t0);
        assert_eq!(t.countdown(), Countdown::Idle);
        assert!(!t.is_running());
        assert!(t.next_due().is_none());
    }

    #[test]
    fn ten_seconds_ticks_ten_times_then_expires() {
        let t0 = Instant::now();
        let mut t = StreetTimer::new();
        t.start_for_street(10, t0);
        assert_eq!(t.countdown(), Countdown::Remaining(10));

        for k in 1..=9u32 {
            let events = t.run_due(t0 + secs(k as u64));
            assert_eq!(events, vec![TimerEvent::Tick { remaining: 10 - k }]);
            assert_eq!(t.countdown(), Countdown::Remaining(t.remaining()));
            assert!(!t.is_time_up());
        }

        let events = t.run_due(t0 + secs(10));
        assert_eq!(
            events,
            vec![
                TimerEvent::Tick { remaining: 0 },
                TimerEvent::Expired,
                TimerEvent::Flash(Felt::Alert)
            ]
        );
        assert!(t.is_time_up());
        assert!(!t.is_running());
        assert_eq!(t.countdown(), Countdown::Remaining(0));
    }

    #[test]
    fn late_wakeup_catches_up_in_order() {
        let t0 = Instant::now();
        let mut t = StreetTimer::new();
        t.start_for_street(3, t0);
        let events = t.run_due(t0 + secs(30));
        assert_eq!(
            events,
            vec![
                TimerEvent::Tick { remaining: 2 },
                TimerEvent::Tick { remaining: 1 },
                TimerEvent::Tick { remaining: 0 },
                TimerEvent::Expired,
                TimerEvent::Flash(Felt::Alert),
                TimerEvent::Flash(Felt::Normal),
                TimerEvent::Flash(Felt::Alert),
                TimerEvent::Flash(Felt::Normal),
                TimerEvent::Flash(Felt::Normal),
            ]
        );
        assert_eq!(t.felt(), Felt::Normal);
        assert!(t.is_time_up());
        assert!(t.next_due().is_none());
    }

    #[test]
    fn pulse_alternates_every_150ms() {
        let t0 = Instant::now();
        let mut t = StreetTimer::new();
        t.start_for_street(1, t0);
        let expired = t0 + secs(1);
        t.run_due(expired);
        assert_eq!(t.felt(), Felt::Alert);
        t.run_due(expired + ms(149));
        assert_eq!(t.felt(), Felt::Alert);
        t.run_due(expired + ms(150));
        assert_eq!(t.felt(), Felt::Normal);
        t.run_due(expired + ms(300));
        assert_eq!(t.felt(), Felt::Alert);
        assert!(t.is_flashing());
        t.run_due(expired + ms(600));
        assert_eq!(t.felt(), Felt::Normal);
        assert!(!t.is_flashing());
    }

    #[test]
    fn new_street_cancels_pulse_and_countdown() {
        let t0 = Instant::now();
        let mut t = StreetTimer::new();
        t.start_for_street(1, t0);
        t.run_due(t0 + secs(1));
        assert!(t.is_flashing());

        let t1 = t0 + secs(1) + ms(50);
        t.start_for_street(15, t1);
        assert!(!t.is_flashing());
        assert!(!t.is_time_up());
        assert_eq!(t.felt(), Felt::Normal);
        assert_eq!(t.countdown(), Countdown::Remaining(15));

        // the old pulse chain must not resume
        let events = t.run_due(t1 + ms(500));
        assert!(events.is_empty());
        assert_eq!(t.felt(), Felt::Normal);
    }

    #[test]
    fn restart_never_runs_two_countdowns() {
        let t0 = Instant::now();
        let mut t = StreetTimer::new();
        t.start_for_street(10, t0);
        t.start_for_street(10, t0 + ms(500));
        let events = t.run_due(t0 + ms(1200));
        assert!(events.is_empty());
        let events = t.run_due(t0 + ms(1500));
        assert_eq!(events, vec![TimerEvent::Tick { remaining: 9 }]);
    }

    #[test]
    fn stop_cancels_and_optionally_blanks() {
        let t0 = Instant::now();
        let mut t = StreetTimer::new();
        t.start_for_street(30, t0);
        t.stop(false);
        assert!(!t.is_running());
        assert_eq!(t.countdown(), Countdown::Remaining(30));
        assert!(t.run_due(t0 + secs(5)).is_empty());

        t.start_for_street(30, t0);
        t.stop(true);
        assert_eq!(t.countdown(), Countdown::Idle);
    }
}
