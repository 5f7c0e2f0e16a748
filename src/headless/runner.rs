//! Headless mode runner

use std::io::{self, BufRead, Write};

use formvoid_app::{process_message, AppState};
use formvoid_core::prelude::*;

use super::{HeadlessCommand, HeadlessEvent};

/// Run headless over stdin/stdout until `quit` or end of input
pub fn run_headless(mut state: AppState) -> Result<()> {
    info!("Headless mode started with {} records", state.catalog.len());
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    run_with_io(&mut state, stdin, &mut stdout)
}

/// Drive `state` with commands from `input`, writing events to `out`
///
/// Emits the initial state first. Blank lines and lines starting with `#`
/// are skipped.
pub fn run_with_io<R: BufRead, W: Write>(
    state: &mut AppState,
    input: R,
    out: &mut W,
) -> Result<()> {
    HeadlessEvent::state(state).write_to(out)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let command = match line.parse::<HeadlessCommand>() {
            Ok(command) => command,
            Err(e) => {
                warn!("Rejected headless command '{}': {}", line, e);
                HeadlessEvent::error(e.to_string(), e.is_fatal()).write_to(out)?;
                continue;
            }
        };
        debug!("Headless command: {:?}", command);

        let Some(message) = command.to_message() else {
            HeadlessEvent::plan(state).write_to(out)?;
            continue;
        };

        for action in process_message(state, message) {
            trace!("Headless ignores presentational action {:?}", action);
        }

        if let Some(notice) = state.notice.take() {
            HeadlessEvent::notice(&notice).write_to(out)?;
        }

        if state.should_quit() {
            break;
        }
        HeadlessEvent::state(state).write_to(out)?;
    }

    info!("Headless mode finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use formvoid_app::config::default_catalog;
    use formvoid_app::session::Screen;

    fn run(commands: &str) -> (AppState, Vec<serde_json::Value>) {
        let mut state = AppState::new(default_catalog().unwrap());
        let mut out = Vec::new();
        run_with_io(&mut state, commands.as_bytes(), &mut out).unwrap();
        let events = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        (state, events)
    }

    #[test]
    fn test_initial_state_only_on_empty_input() {
        let (_, events) = run("");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["event"], "state");
    }

    #[test]
    fn test_select_and_back() {
        let (state, events) = run("category blueprint\nselect 6\nback\n");

        assert_eq!(events.len(), 4);
        assert_eq!(events[1]["visible"], serde_json::json!(["1", "6"]));
        assert_eq!(events[2]["screen"], "detail");
        assert_eq!(events[2]["selected_id"], "6");
        assert_eq!(events[3]["screen"], "home");
        assert_eq!(events[3]["filter"]["filter"], "BLUEPRINT");
        assert_eq!(state.session.screen(), Screen::Home);
    }

    #[test]
    fn test_restricted_select_emits_notice_then_state() {
        let (state, events) = run("select 3\n");

        assert_eq!(events[1]["event"], "notice");
        assert_eq!(events[1]["title"], "ACCESS DENIED");
        assert_eq!(events[2]["event"], "state");
        assert_eq!(events[2]["screen"], "home");
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_bad_command_reports_error_and_continues() {
        let (_, events) = run("dance\n# comment\n\ntoggle\n");

        assert_eq!(events.len(), 3);
        assert_eq!(events[1]["event"], "error");
        assert_eq!(events[1]["fatal"], false);
        assert_eq!(events[2]["display_mode"], "table");
    }

    #[test]
    fn test_plan_and_quit() {
        let (state, events) = run("plan\nquit\nselect 1\n");

        assert_eq!(events.len(), 2);
        assert_eq!(events[1]["event"], "plan");
        assert_eq!(events[1]["entries"].as_array().unwrap().len(), 10);
        assert!(state.should_quit());
        assert!(state.session.is_home());
    }
}
