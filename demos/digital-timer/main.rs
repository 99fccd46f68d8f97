//! Digital timer demo.
//!
//! A full-screen countdown timer: space starts and pauses, r resets, and
//! +/- adjust the limit in one-minute steps before the countdown starts.

use bubbletea_rs::{quit, Cmd, KeyMsg, Model, Msg, Program};
use digital_timer::prelude::*;
use lipgloss_extras::lipgloss::AdaptiveColor;
use lipgloss_extras::prelude::*;

struct AppStyles {
    heading: Style,
    status: Style,
    limit_label: Style,
    limit_value: Style,
    finished: Style,
}

impl AppStyles {
    fn new() -> Self {
        Self {
            heading: Style::new()
                .bold(true)
                .foreground(Color::from("99"))
                .padding(1, 0, 1, 2),
            status: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#909090",
                    Dark: "#626262",
                })
                .padding(0, 0, 0, 2),
            limit_label: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#B2B2B2",
                    Dark: "#4A4A4A",
                })
                .padding(1, 0, 0, 2),
            limit_value: Style::new().bold(true).foreground(Color::from("212")),
            finished: Style::new()
                .bold(true)
                .foreground(Color::from("170"))
                .padding(1, 0, 0, 2),
        }
    }
}

struct App {
    timer: Timer,
    help: HelpModel,
    styles: AppStyles,
    toggle_help: Binding,
    quit: Binding,
    finished: bool,
}

impl KeyMap for App {
    fn short_help(&self) -> Vec<&Binding> {
        let mut bindings = self.timer.keymap.short_help();
        bindings.push(&self.toggle_help);
        bindings.push(&self.quit);
        bindings
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        let mut columns = self.timer.keymap.full_help();
        columns.push(vec![&self.toggle_help, &self.quit]);
        columns
    }
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let mut timer = timer_new();
        timer.style = Style::new()
            .bold(true)
            .foreground(Color::from("212"))
            .padding(1, 0, 0, 2);

        let app = App {
            timer,
            help: HelpModel::new(),
            styles: AppStyles::new(),
            toggle_help: new_binding(vec![
                with_keys_str(&["?"]),
                with_help("?", "toggle help"),
            ]),
            quit: new_binding(vec![
                with_keys_str(&["q", "ctrl+c"]),
                with_help("q", "quit"),
            ]),
            finished: false,
        };
        (app, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.quit.matches(key_msg) {
                return Some(quit());
            }
            if self.toggle_help.matches(key_msg) {
                self.help.show_all = !self.help.show_all;
                return None;
            }
        }

        if let Some(done) = msg.downcast_ref::<TimerCompletedMsg>() {
            if done.id == self.timer.id() {
                self.finished = true;
                return None;
            }
        }

        let cmd = self.timer.update(msg);
        if self.timer.running() {
            self.finished = false;
        }
        cmd
    }

    fn view(&self) -> String {
        let mut out = String::new();

        out.push_str(&self.styles.heading.clone().render("Digital Timer"));
        out.push('\n');
        out.push_str(&self.timer.view());
        out.push('\n');
        out.push_str(&self.styles.status.clone().render(self.timer.status_label()));
        out.push('\n');

        let limit = format!(
            "Set Timer limit: {}",
            self.styles
                .limit_value
                .clone()
                .render(&self.timer.limit_minutes().to_string())
        );
        out.push_str(&self.styles.limit_label.clone().render(&limit));
        out.push('\n');

        if self.finished {
            out.push_str(&self.styles.finished.clone().render("Time's up!"));
            out.push('\n');
        }

        out.push('\n');
        out.push_str("  ");
        out.push_str(&self.help.view(self));
        out.push('\n');
        out
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<App>::builder().build()?;
    program.run().await?;
    Ok(())
}
