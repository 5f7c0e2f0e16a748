//! Main TUI runner - entry point and event loop

use formvoid_app::{process_message, AppState, UpdateAction};
use formvoid_core::prelude::*;

use super::render::{self, RenderState};
use super::{event, terminal};

/// Run the TUI until the user quits
pub fn run(mut state: AppState) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    info!(
        "TUI started with {} records from {}",
        state.catalog.len(),
        state.project_path.display()
    );

    let result = run_loop(&mut term, &mut state);

    let restored = ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()));
    info!("TUI stopped");
    result.and(restored)
}

/// Main event loop: draw, poll one event, update
fn run_loop(terminal: &mut ratatui::DefaultTerminal, state: &mut AppState) -> Result<()> {
    let mut render_state = RenderState::default();

    while !state.should_quit() {
        terminal.draw(|frame| render::view(frame, state, &mut render_state))?;

        if let Some(message) = event::poll()? {
            for action in process_message(state, message) {
                match action {
                    UpdateAction::ScrollToTop => render_state.scroll_to_top(),
                }
            }
        }
    }

    Ok(())
}
