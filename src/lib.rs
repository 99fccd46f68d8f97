#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/digital-timer/")]

//! # digital-timer
//!
//! A start/pause countdown timer widget for terminal applications built
//! with [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs).
//!
//! The widget counts elapsed seconds toward a limit configured in minutes
//! (25 by default), renders the remaining time as a zero-padded `MM:SS`
//! clock face, and exposes start/pause, reset, and limit adjustment as
//! both key bindings and programmatic commands. It follows the Elm
//! Architecture pattern: an `update()` method consumes typed messages and
//! returns commands, a `view()` method renders the current state, and all
//! periodic work happens through messages scheduled on the runtime; the
//! widget never spawns its own threads or timers.
//!
//! ## Behavior
//!
//! - The countdown is idle on creation and toggles between running and
//!   paused with the space key (or [`timer::Model::toggle`]).
//! - The limit is adjustable in one-minute steps only while no time has
//!   elapsed; the adjustment bindings disable themselves once the first
//!   second is counted.
//! - When the elapsed time reaches the limit the timer stops itself and
//!   emits [`timer::CompletedMsg`]; the next toggle restarts from zero.
//! - `reset` returns to the initial state: paused, nothing elapsed, and
//!   the limit the widget was created with.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! digital-timer = "0.1"
//! bubbletea-rs = "0.0.7"
//! crossterm = "0.29"
//! ```
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model, Msg};
//! use digital_timer::prelude::*;
//!
//! struct App {
//!     timer: Timer,
//!     help: HelpModel,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         (Self { timer: timer_new(), help: HelpModel::new() }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.timer.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!(
//!             "{} {}\n\n{}",
//!             self.timer.view(),
//!             self.timer.status_label(),
//!             self.help.view(&self.timer.keymap),
//!         )
//!     }
//! }
//! ```
//!
//! A complete program lives in `demos/digital-timer`.

pub mod help;
pub mod key;
pub mod timer;

pub use help::Model as HelpModel;
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
    Binding, Help as KeyHelp, KeyMap, KeyPress,
};
pub use timer::{
    new as timer_new, new_with_interval as timer_new_with_interval,
    new_with_limit as timer_new_with_limit, AdjustLimitMsg as TimerAdjustLimitMsg,
    CompletedMsg as TimerCompletedMsg, Model as Timer, ResetMsg as TimerResetMsg,
    StartStopMsg as TimerStartStopMsg, TickMsg as TimerTickMsg, TimerKeyMap,
    DEFAULT_LIMIT_MINUTES,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use digital_timer::prelude::*;
/// ```
pub mod prelude {
    pub use crate::help::Model as HelpModel;
    pub use crate::key::{
        matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
        Binding, Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::timer::{
        new as timer_new, new_with_interval as timer_new_with_interval,
        new_with_limit as timer_new_with_limit, AdjustLimitMsg as TimerAdjustLimitMsg,
        CompletedMsg as TimerCompletedMsg, Model as Timer, ResetMsg as TimerResetMsg,
        StartStopMsg as TimerStartStopMsg, TickMsg as TimerTickMsg, TimerKeyMap,
        DEFAULT_LIMIT_MINUTES,
    };
}
