//! A digital countdown timer widget for bubbletea-rs applications.
//!
//! The timer counts elapsed seconds toward a limit configured in whole
//! minutes (25 by default), displays the remaining time as `MM:SS`, and can
//! be started, paused, and reset. The limit is adjustable in one-minute
//! steps, but only before any time has elapsed; once the first second has
//! been counted the adjustment keys are disabled until the timer is reset
//! or completes.
//!
//! # Basic Usage
//!
//! ```rust
//! use digital_timer::timer::{new, new_with_limit};
//!
//! // A 25-minute timer, idle until started.
//! let timer = new();
//! assert_eq!(timer.format_remaining(), "25:00");
//!
//! // A 5-minute timer.
//! let short = new_with_limit(5);
//! assert_eq!(short.format_remaining(), "05:00");
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Model as BubbleTeaModel, Msg, Cmd};
//! use digital_timer::timer::{new, Model, CompletedMsg};
//!
//! struct MyApp {
//!     timer: Model,
//! }
//!
//! impl BubbleTeaModel for MyApp {
//!     fn init() -> (Self, Option<Cmd>) {
//!         // Idle on mount; the user starts it with the space key.
//!         (Self { timer: new() }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(done) = msg.downcast_ref::<CompletedMsg>() {
//!             if done.id == self.timer.id() {
//!                 // Countdown reached the limit.
//!             }
//!         }
//!
//!         // Forward key presses and timer messages to the widget.
//!         self.timer.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("{} {}", self.timer.view(), self.timer.status_label())
//!     }
//! }
//! ```
//!
//! # Control Commands
//!
//! The control methods return commands that send messages back to the
//! widget, so programmatic control composes with key handling:
//!
//! ```rust
//! use digital_timer::timer::new;
//!
//! let timer = new();
//! let toggle_cmd = timer.toggle();        // start/pause
//! let reset_cmd = timer.reset();          // back to defaults
//! let longer_cmd = timer.increase_limit(); // +1 minute (while unstarted)
//! ```

use crate::key;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management for timer instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Returns a unique identifier for a timer instance, so several timers can
/// coexist in one application without answering each other's messages.
fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// The countdown limit, in minutes, that a freshly created timer starts
/// with and that [`Model::reset`] restores.
pub const DEFAULT_LIMIT_MINUTES: u32 = 25;

/// Message sent on every periodic tick while the timer is running.
///
/// Ticks are scheduled by the widget itself; application code never
/// constructs them. Each tick carries the instance `id` and the tick
/// generation `tag` current when it was scheduled, and the widget rejects
/// ticks whose tag has since been invalidated by a pause, reset, or
/// restart. That rejection is what "cancelling the periodic callback"
/// means in a message-passing runtime: the stale callback arrives, matches
/// nothing, and is never rescheduled.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// The timer instance this tick belongs to.
    pub id: i64,
    /// Tick generation at scheduling time; stale generations are rejected.
    tag: i64,
}

/// Message used to start and pause timer instances.
///
/// Sent by [`Model::start`], [`Model::stop`] and [`Model::toggle`]. The
/// `running` field is private so state can only change through those
/// control methods.
#[derive(Debug, Clone)]
pub struct StartStopMsg {
    /// The timer instance this message targets.
    pub id: i64,
    running: bool,
}

/// Message used to restore a timer to its initial state.
///
/// Sent by [`Model::reset`].
#[derive(Debug, Clone)]
pub struct ResetMsg {
    /// The timer instance this message targets.
    pub id: i64,
}

/// Message used to adjust the countdown limit by whole minutes.
///
/// Sent by [`Model::increase_limit`] and [`Model::decrease_limit`]. The
/// adjustment only applies while no time has elapsed; otherwise it is a
/// no-op.
#[derive(Debug, Clone)]
pub struct AdjustLimitMsg {
    /// The timer instance this message targets.
    pub id: i64,
    delta: i32,
}

/// Message sent when the countdown reaches its limit and the timer stops.
///
/// Handle this in your update loop to react to completion (ring a bell,
/// advance to a break, ...). A completed timer restarts from zero on the
/// next start/pause toggle.
#[derive(Debug, Clone)]
pub struct CompletedMsg {
    /// The timer instance that completed.
    pub id: i64,
}

/// Key bindings for the timer controls.
///
/// The limit bindings are disabled by the widget whenever time has
/// elapsed, mirroring a UI that greys out the +/- buttons once the
/// countdown is underway.
#[derive(Debug, Clone)]
pub struct TimerKeyMap {
    /// Toggle between running and paused.
    pub start_pause: key::Binding,
    /// Restore the initial state.
    pub reset: key::Binding,
    /// Add one minute to the limit (only before the timer has run).
    pub increase_limit: key::Binding,
    /// Remove one minute from the limit, never below one.
    pub decrease_limit: key::Binding,
}

impl Default for TimerKeyMap {
    fn default() -> Self {
        Self {
            start_pause: key::new_binding(vec![
                key::with_keys_str(&["space"]),
                key::with_help("space", "start/pause"),
            ]),
            reset: key::new_binding(vec![
                key::with_keys_str(&["r"]),
                key::with_help("r", "reset"),
            ]),
            increase_limit: key::new_binding(vec![
                key::with_keys_str(&["+", "=", "up"]),
                key::with_help("+/↑", "increase limit"),
            ]),
            decrease_limit: key::new_binding(vec![
                key::with_keys_str(&["-", "down"]),
                key::with_help("-/↓", "decrease limit"),
            ]),
        }
    }
}

impl key::KeyMap for TimerKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.start_pause,
            &self.reset,
            &self.increase_limit,
            &self.decrease_limit,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.start_pause, &self.reset],
            vec![&self.increase_limit, &self.decrease_limit],
        ]
    }
}

/// The digital timer widget.
///
/// State is one of two modes, `Idle` or `Running`, plus the elapsed
/// seconds and the limit in minutes. Elapsed time never exceeds
/// `limit * 60`; reaching it is the completed condition, in which the
/// timer is idle and the next start toggle restarts the countdown from
/// zero.
///
/// All mutation goes through [`update`](Model::update): control methods
/// return commands, the runtime turns them into messages, and the handlers
/// here apply them. Reads go through the accessor methods, which the
/// hosting view uses to render the clock face, the Running/Paused label,
/// and the current limit.
#[derive(Debug, Clone)]
pub struct Model {
    /// Time between ticks. Defaults to one second; the display only has
    /// second resolution, so faster intervals just speed up the countdown.
    pub interval: Duration,
    /// Style applied to the rendered `MM:SS` clock face.
    pub style: Style,
    /// Key bindings handled by [`update`](Model::update).
    pub keymap: TimerKeyMap,
    limit_minutes: u32,
    initial_limit: u32,
    elapsed: u32,
    running: bool,
    id: i64,
    tag: i64,
}

/// Creates an idle timer with the default 25-minute limit.
pub fn new() -> Model {
    new_with_limit(DEFAULT_LIMIT_MINUTES)
}

/// Creates an idle timer with the given limit in minutes, clamped to at
/// least one minute.
///
/// # Examples
///
/// ```rust
/// use digital_timer::timer::new_with_limit;
///
/// let timer = new_with_limit(5);
/// assert_eq!(timer.limit_minutes(), 5);
/// assert!(!timer.running());
///
/// // The limit never drops below one minute.
/// assert_eq!(new_with_limit(0).limit_minutes(), 1);
/// ```
pub fn new_with_limit(limit_minutes: u32) -> Model {
    new_with_interval(limit_minutes, Duration::from_secs(1))
}

/// Creates an idle timer with the given limit and a custom tick interval.
///
/// The interval only controls how often the periodic callback fires; each
/// tick still advances the elapsed time by one second, so anything other
/// than one second runs the clock fast or slow. Tests use short intervals;
/// applications normally want [`new`] or [`new_with_limit`].
pub fn new_with_interval(limit_minutes: u32, interval: Duration) -> Model {
    let limit = limit_minutes.max(1);
    Model {
        interval,
        style: Style::new(),
        keymap: TimerKeyMap::default(),
        limit_minutes: limit,
        initial_limit: limit,
        elapsed: 0,
        running: false,
        id: next_id(),
        tag: 0,
    }
}

impl Model {
    /// Returns the unique identifier of this timer instance.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns whether the periodic tick is currently active.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Returns the seconds counted since the last reset or completion.
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed
    }

    /// Returns the configured countdown limit in minutes.
    pub fn limit_minutes(&self) -> u32 {
        self.limit_minutes
    }

    /// Returns whether the countdown has reached its limit.
    ///
    /// A completed timer is idle; toggling it restarts from zero.
    pub fn completed(&self) -> bool {
        self.elapsed == self.limit_seconds()
    }

    /// The label a view shows next to the clock face.
    pub fn status_label(&self) -> &'static str {
        if self.running {
            "Running"
        } else {
            "Paused"
        }
    }

    fn limit_seconds(&self) -> u32 {
        self.limit_minutes * 60
    }

    /// Formats the remaining time as zero-padded `MM:SS`.
    ///
    /// This is a pure function of the current state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use digital_timer::timer::new;
    ///
    /// assert_eq!(new().format_remaining(), "25:00");
    /// ```
    pub fn format_remaining(&self) -> String {
        let remaining = self.limit_seconds().saturating_sub(self.elapsed);
        format!("{:02}:{:02}", remaining / 60, remaining % 60)
    }

    /// Generates a command that starts the timer if it is paused.
    pub fn start(&self) -> Cmd {
        self.start_stop(true)
    }

    /// Generates a command that pauses the timer if it is running.
    pub fn stop(&self) -> Cmd {
        self.start_stop(false)
    }

    /// Generates a command that toggles between running and paused.
    ///
    /// Toggling a completed timer clears the elapsed time before starting,
    /// so the countdown runs again from the full limit.
    pub fn toggle(&self) -> Cmd {
        self.start_stop(!self.running)
    }

    /// Generates a command that restores the initial state: paused, no
    /// elapsed time, and the limit the timer was created with.
    pub fn reset(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(ResetMsg { id }) as Msg
        })
    }

    /// Generates a command that adds one minute to the limit.
    ///
    /// The adjustment is a no-op unless no time has elapsed.
    pub fn increase_limit(&self) -> Cmd {
        self.adjust_limit(1)
    }

    /// Generates a command that removes one minute from the limit.
    ///
    /// The adjustment is a no-op unless no time has elapsed, and the limit
    /// never drops below one minute.
    pub fn decrease_limit(&self) -> Cmd {
        self.adjust_limit(-1)
    }

    fn start_stop(&self, running: bool) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(StartStopMsg { id, running }) as Msg
        })
    }

    fn adjust_limit(&self, delta: i32) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(AdjustLimitMsg { id, delta }) as Msg
        })
    }

    /// Schedules the next periodic tick, stamped with the current tag.
    fn tick_cmd(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    fn completed_cmd(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(CompletedMsg { id }) as Msg
        })
    }

    /// Invalidates any tick already scheduled. Every transition that
    /// leaves or re-enters the running state goes through this, which is
    /// what keeps the periodic callback unique: at most one scheduled tick
    /// carries the live tag.
    fn invalidate_pending_tick(&mut self) {
        self.tag += 1;
    }

    fn sync_limit_keys(&mut self) {
        let adjustable = self.elapsed == 0;
        self.keymap.increase_limit.set_enabled(adjustable);
        self.keymap.decrease_limit.set_enabled(adjustable);
    }

    fn handle_key(&self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.start_pause.matches(key_msg) {
            return Some(self.toggle());
        }
        if self.keymap.reset.matches(key_msg) {
            return Some(self.reset());
        }
        if self.keymap.increase_limit.matches(key_msg) {
            return Some(self.increase_limit());
        }
        if self.keymap.decrease_limit.matches(key_msg) {
            return Some(self.decrease_limit());
        }
        None
    }

    /// Processes messages and advances the timer state.
    ///
    /// Handles the widget's own messages ([`TickMsg`], [`StartStopMsg`],
    /// [`ResetMsg`], [`AdjustLimitMsg`]) and key presses matching
    /// [`TimerKeyMap`]. Messages addressed to another instance, stale
    /// ticks, and ticks arriving while paused are ignored. Anything the
    /// widget does not recognize returns `None`, so it can sit in a larger
    /// update loop untouched.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }

        if let Some(start_stop) = msg.downcast_ref::<StartStopMsg>() {
            if start_stop.id != 0 && start_stop.id != self.id {
                return None;
            }
            return if start_stop.running {
                // Restarting a completed countdown begins from zero.
                if self.completed() {
                    self.elapsed = 0;
                    self.sync_limit_keys();
                }
                self.running = true;
                self.invalidate_pending_tick();
                Some(self.tick_cmd())
            } else {
                self.running = false;
                self.invalidate_pending_tick();
                None
            };
        }

        if let Some(reset_msg) = msg.downcast_ref::<ResetMsg>() {
            if reset_msg.id != 0 && reset_msg.id != self.id {
                return None;
            }
            self.running = false;
            self.elapsed = 0;
            self.limit_minutes = self.initial_limit;
            self.invalidate_pending_tick();
            self.sync_limit_keys();
            return None;
        }

        if let Some(adjust) = msg.downcast_ref::<AdjustLimitMsg>() {
            if adjust.id != 0 && adjust.id != self.id {
                return None;
            }
            // The limit is only adjustable before the first counted second.
            if self.elapsed != 0 {
                return None;
            }
            self.limit_minutes = self.limit_minutes.saturating_add_signed(adjust.delta).max(1);
            return None;
        }

        if let Some(tick) = msg.downcast_ref::<TickMsg>() {
            if !self.running || (tick.id != 0 && tick.id != self.id) {
                return None;
            }
            if tick.tag > 0 && tick.tag != self.tag {
                return None;
            }
            self.invalidate_pending_tick();
            // The completion check runs before the increment: the tick
            // that reaches the limit still counts, and the one after it
            // performs the stop.
            if self.completed() {
                self.running = false;
                return Some(self.completed_cmd());
            }
            self.elapsed += 1;
            self.sync_limit_keys();
            return Some(self.tick_cmd());
        }

        None
    }

    /// Renders the remaining time as a styled `MM:SS` string.
    pub fn view(&self) -> String {
        self.style.render(&self.format_remaining())
    }
}

impl BubbleTeaModel for Model {
    /// Creates an idle 25-minute timer for standalone use. No command is
    /// returned; the countdown starts on the first start/pause toggle.
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn start(timer: &mut Model) -> Option<Cmd> {
        timer.update(Box::new(StartStopMsg {
            id: timer.id(),
            running: true,
        }))
    }

    fn pause(timer: &mut Model) -> Option<Cmd> {
        timer.update(Box::new(StartStopMsg {
            id: timer.id(),
            running: false,
        }))
    }

    // Delivers the tick the widget last scheduled.
    fn deliver_tick(timer: &mut Model) -> Option<Cmd> {
        let tag = timer.tag;
        let id = timer.id();
        timer.update(Box::new(TickMsg { id, tag }))
    }

    fn adjust(timer: &mut Model, delta: i32) -> Option<Cmd> {
        let id = timer.id();
        timer.update(Box::new(AdjustLimitMsg { id, delta }))
    }

    fn key_msg(code: KeyCode) -> Box<KeyMsg> {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_new_defaults() {
        let timer = new();

        assert_eq!(timer.limit_minutes(), DEFAULT_LIMIT_MINUTES);
        assert_eq!(timer.elapsed_seconds(), 0);
        assert_eq!(timer.interval, Duration::from_secs(1));
        assert!(!timer.running());
        assert!(!timer.completed());
        assert!(timer.id() > 0);
    }

    #[test]
    fn test_new_with_limit_clamps_to_one_minute() {
        assert_eq!(new_with_limit(0).limit_minutes(), 1);
        assert_eq!(new_with_limit(1).limit_minutes(), 1);
        assert_eq!(new_with_limit(90).limit_minutes(), 90);
    }

    #[test]
    fn test_unique_ids() {
        let timer1 = new();
        let timer2 = new();

        assert_ne!(timer1.id(), timer2.id());
    }

    #[test]
    fn test_increase_limit_accumulates() {
        let mut timer = new();

        for _ in 0..5 {
            adjust(&mut timer, 1);
        }
        assert_eq!(timer.limit_minutes(), 30);
    }

    #[test]
    fn test_decrease_limit_floors_at_one() {
        let mut timer = new();

        for _ in 0..30 {
            adjust(&mut timer, -1);
        }
        assert_eq!(timer.limit_minutes(), 1);

        adjust(&mut timer, -1);
        assert_eq!(timer.limit_minutes(), 1);
    }

    #[test]
    fn test_adjust_rejected_once_time_has_elapsed() {
        let mut timer = new();
        start(&mut timer);
        deliver_tick(&mut timer);
        assert_eq!(timer.elapsed_seconds(), 1);

        adjust(&mut timer, 1);
        adjust(&mut timer, -1);
        assert_eq!(timer.limit_minutes(), DEFAULT_LIMIT_MINUTES);
    }

    #[test]
    fn test_adjust_allowed_while_running_before_first_tick() {
        // The gate is elapsed time, not the running flag.
        let mut timer = new();
        start(&mut timer);

        adjust(&mut timer, 1);
        assert_eq!(timer.limit_minutes(), 26);
        assert!(timer.running());
    }

    #[test]
    fn test_adjust_does_not_touch_running_state() {
        let mut timer = new();
        start(&mut timer);
        adjust(&mut timer, 1);
        assert!(timer.running());

        pause(&mut timer);
        adjust(&mut timer, -1);
        assert!(!timer.running());
    }

    #[test]
    fn test_reset_restores_defaults_and_is_idempotent() {
        let mut timer = new();
        adjust(&mut timer, 1);
        start(&mut timer);
        deliver_tick(&mut timer);

        let id = timer.id();
        timer.update(Box::new(ResetMsg { id }));
        assert!(!timer.running());
        assert_eq!(timer.elapsed_seconds(), 0);
        assert_eq!(timer.limit_minutes(), DEFAULT_LIMIT_MINUTES);

        timer.update(Box::new(ResetMsg { id }));
        assert!(!timer.running());
        assert_eq!(timer.elapsed_seconds(), 0);
        assert_eq!(timer.limit_minutes(), DEFAULT_LIMIT_MINUTES);
    }

    #[test]
    fn test_reset_restores_constructed_limit() {
        let mut timer = new_with_limit(5);
        adjust(&mut timer, 1);
        assert_eq!(timer.limit_minutes(), 6);

        let id = timer.id();
        timer.update(Box::new(ResetMsg { id }));
        assert_eq!(timer.limit_minutes(), 5);
    }

    #[test]
    fn test_tick_increments_by_one_and_reschedules() {
        let mut timer = new();
        start(&mut timer);

        let cmd = deliver_tick(&mut timer);
        assert!(cmd.is_some());
        assert_eq!(timer.elapsed_seconds(), 1);
        assert!(timer.running());
    }

    #[test]
    fn test_tick_ignored_while_paused() {
        let mut timer = new();

        assert!(deliver_tick(&mut timer).is_none());
        assert_eq!(timer.elapsed_seconds(), 0);
    }

    #[test]
    fn test_stale_tick_rejected() {
        let mut timer = new();
        start(&mut timer);
        let scheduled_tag = timer.tag;

        deliver_tick(&mut timer);
        assert_eq!(timer.elapsed_seconds(), 1);

        // A duplicate of the already-consumed tick must not double-count.
        let id = timer.id();
        let result = timer.update(Box::new(TickMsg {
            id,
            tag: scheduled_tag,
        }));
        assert!(result.is_none());
        assert_eq!(timer.elapsed_seconds(), 1);
    }

    #[test]
    fn test_pause_cancels_pending_tick() {
        let mut timer = new();
        start(&mut timer);
        let scheduled_tag = timer.tag;

        // Pausing schedules nothing and invalidates the pending tick.
        assert!(pause(&mut timer).is_none());

        let id = timer.id();
        let result = timer.update(Box::new(TickMsg {
            id,
            tag: scheduled_tag,
        }));
        assert!(result.is_none());
        assert_eq!(timer.elapsed_seconds(), 0);
    }

    #[test]
    fn test_restart_invalidates_old_tick() {
        let mut timer = new();
        start(&mut timer);
        let first_tag = timer.tag;

        pause(&mut timer);
        start(&mut timer);

        // Only the tick scheduled by the second start is live.
        let id = timer.id();
        assert!(timer
            .update(Box::new(TickMsg { id, tag: first_tag }))
            .is_none());
        assert_eq!(timer.elapsed_seconds(), 0);

        assert!(deliver_tick(&mut timer).is_some());
        assert_eq!(timer.elapsed_seconds(), 1);
    }

    #[test]
    fn test_wrong_id_rejected() {
        let mut timer = new();
        let foreign = timer.id() + 999;

        assert!(timer
            .update(Box::new(StartStopMsg {
                id: foreign,
                running: true,
            }))
            .is_none());
        assert!(!timer.running());

        assert!(timer
            .update(Box::new(AdjustLimitMsg {
                id: foreign,
                delta: 1,
            }))
            .is_none());
        assert_eq!(timer.limit_minutes(), DEFAULT_LIMIT_MINUTES);

        assert!(timer.update(Box::new(ResetMsg { id: foreign })).is_none());
    }

    #[test]
    fn test_boundary_tick_stops_without_incrementing() {
        let mut timer = new_with_limit(1);
        start(&mut timer);

        for _ in 0..60 {
            assert!(deliver_tick(&mut timer).is_some());
        }
        // The limit has been reached but the stop lands on the next tick.
        assert_eq!(timer.elapsed_seconds(), 60);
        assert!(timer.running());
        assert!(timer.completed());

        let cmd = deliver_tick(&mut timer);
        assert!(cmd.is_some()); // completion notification
        assert!(!timer.running());
        assert_eq!(timer.elapsed_seconds(), 60);
        assert_eq!(timer.status_label(), "Paused");
    }

    #[test]
    fn test_toggle_after_completion_restarts_from_zero() {
        let mut timer = new_with_limit(1);
        start(&mut timer);
        for _ in 0..61 {
            deliver_tick(&mut timer);
        }
        assert!(timer.completed());
        assert!(!timer.running());

        start(&mut timer);
        assert!(timer.running());
        assert_eq!(timer.elapsed_seconds(), 0);
        assert_eq!(timer.format_remaining(), "01:00");
    }

    #[test]
    fn test_format_remaining() {
        let mut timer = new();
        assert_eq!(timer.format_remaining(), "25:00");

        timer.limit_minutes = 1;
        timer.elapsed = 59;
        assert_eq!(timer.format_remaining(), "00:01");

        timer.elapsed = 60;
        assert_eq!(timer.format_remaining(), "00:00");
    }

    #[test]
    fn test_one_minute_of_ticks_from_defaults() {
        let mut timer = new();
        start(&mut timer);

        for _ in 0..60 {
            deliver_tick(&mut timer);
        }
        assert_eq!(timer.elapsed_seconds(), 60);
        assert_eq!(timer.format_remaining(), "24:00");
        assert!(timer.running());
        assert_eq!(timer.status_label(), "Running");
    }

    #[test]
    fn test_limit_reduced_to_one_minute_via_messages() {
        let mut timer = new();
        for _ in 0..24 {
            adjust(&mut timer, -1);
        }
        assert_eq!(timer.limit_minutes(), 1);

        start(&mut timer);
        let mut ticks = 0;
        while timer.running() {
            deliver_tick(&mut timer);
            ticks += 1;
            assert!(ticks <= 61, "timer failed to auto-stop");
        }
        assert_eq!(timer.elapsed_seconds(), 60);
        assert_eq!(timer.format_remaining(), "00:00");
    }

    #[test]
    fn test_status_label() {
        let mut timer = new();
        assert_eq!(timer.status_label(), "Paused");

        start(&mut timer);
        assert_eq!(timer.status_label(), "Running");

        pause(&mut timer);
        assert_eq!(timer.status_label(), "Paused");
    }

    #[test]
    fn test_space_key_returns_toggle_command() {
        let mut timer = new();
        assert!(timer.update(key_msg(KeyCode::Char(' '))).is_some());
    }

    #[test]
    fn test_unbound_key_ignored() {
        let mut timer = new();
        assert!(timer.update(key_msg(KeyCode::Char('x'))).is_none());
    }

    #[test]
    fn test_limit_keys_disabled_after_first_tick() {
        let mut timer = new();
        assert!(timer.update(key_msg(KeyCode::Char('+'))).is_some());

        start(&mut timer);
        deliver_tick(&mut timer);

        assert!(timer.update(key_msg(KeyCode::Char('+'))).is_none());
        assert!(timer.update(key_msg(KeyCode::Char('-'))).is_none());
        assert!(!timer.keymap.increase_limit.enabled());
    }

    #[test]
    fn test_limit_keys_reenabled_after_reset() {
        let mut timer = new();
        start(&mut timer);
        deliver_tick(&mut timer);
        assert!(!timer.keymap.increase_limit.enabled());

        let id = timer.id();
        timer.update(Box::new(ResetMsg { id }));
        assert!(timer.keymap.increase_limit.enabled());
        assert!(timer.update(key_msg(KeyCode::Char('+'))).is_some());
    }

    #[test]
    fn test_elapsed_never_exceeds_limit() {
        let mut timer = new_with_limit(1);
        start(&mut timer);

        for _ in 0..200 {
            deliver_tick(&mut timer);
            assert!(timer.elapsed_seconds() <= timer.limit_minutes() * 60);
        }
    }
}
