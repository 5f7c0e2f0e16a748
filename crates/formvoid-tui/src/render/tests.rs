//! Full-frame rendering tests

use super::*;
use crate::test_utils::{test_app_state, TestTerminal};
use formvoid_app::{process_message, Message};
use formvoid_core::{Category, CategoryFilter};

fn draw(term: &mut TestTerminal, state: &AppState, render_state: &mut RenderState) {
    term.draw_with(|frame| view(frame, state, render_state));
}

#[test]
fn test_home_grid_frame() {
    let state = test_app_state();
    let mut render_state = RenderState::default();
    let mut term = TestTerminal::with_size(100, 40);

    draw(&mut term, &state, &mut render_state);

    assert!(term.line_contains(0, "FORM & VOID"));
    assert!(term.buffer_contains("I feel [anxious] and need [structure]."));
    assert!(term.buffer_contains(" 7 RECORDS · GRID"));
    assert!(term.buffer_contains("\"Form follows Context.\""));
    assert!(term.buffer_contains("q quit"));
}

#[test]
fn test_home_table_frame() {
    let mut state = test_app_state();
    process_message(&mut state, Message::ToggleDisplayMode);
    let mut render_state = RenderState::default();
    let mut term = TestTerminal::with_size(100, 30);

    draw(&mut term, &state, &mut render_state);

    assert!(term.buffer_contains("TABLE"));
    assert!(term.buffer_contains("STATUS"));
    assert!(term.buffer_contains("SYSTEM_LOG"));
    // Fillers never appear in table mode
    assert!(!term.buffer_contains("The Quiet Archive"));
}

#[test]
fn test_empty_subset_frame() {
    let mut state = test_app_state();
    process_message(
        &mut state,
        Message::ChooseContext {
            condition: "joyful".into(),
            need: "noise".into(),
        },
    );
    let mut render_state = RenderState::default();
    let mut term = TestTerminal::new();

    draw(&mut term, &state, &mut render_state);

    assert!(term.buffer_contains("NO RECORDS FOUND IN DATABASE."));
    assert!(term.buffer_contains("CONTEXT: JOYFUL + NOISE"));
}

#[test]
fn test_detail_frame() {
    let mut state = test_app_state();
    process_message(
        &mut state,
        Message::ChooseCategory(CategoryFilter::Only(Category::Blueprint)),
    );
    process_message(&mut state, Message::SelectRecord { id: "6".into() });
    let mut render_state = RenderState::default();
    let mut term = TestTerminal::new();

    draw(&mut term, &state, &mut render_state);

    assert!(term.buffer_contains("REF_ID: 0006"));
    assert!(term.buffer_contains("SYSTEM_LOG"));
    assert!(term.buffer_contains("esc back"));
    assert!(!term.buffer_contains("RECORDS"));
}

#[test]
fn test_about_frame() {
    let mut state = test_app_state();
    process_message(&mut state, Message::OpenAbout);
    let mut render_state = RenderState::default();
    let mut term = TestTerminal::new();

    draw(&mut term, &state, &mut render_state);

    assert!(term.buffer_contains("Architecting the Quiet Context"));
}

#[test]
fn test_notice_over_home() {
    let mut state = test_app_state();
    process_message(&mut state, Message::SelectRecord { id: "3".into() });
    let mut render_state = RenderState::default();
    let mut term = TestTerminal::new();

    draw(&mut term, &state, &mut render_state);

    assert!(term.buffer_contains("ACCESS DENIED"));
    assert!(term.buffer_contains("protected by NDA"));
}

#[test]
fn test_scroll_to_top_resets_offsets() {
    let mut render_state = RenderState::default();
    render_state.grid.offset = 4;
    *render_state.table.offset_mut() = 3;

    render_state.scroll_to_top();

    assert_eq!(render_state.grid.offset, 0);
    assert_eq!(render_state.table.offset(), 0);
}

#[test]
fn test_compact_terminal_does_not_panic() {
    let state = test_app_state();
    let mut render_state = RenderState::default();
    let mut term = TestTerminal::compact();

    draw(&mut term, &state, &mut render_state);

    assert!(term.buffer_contains("RECORDS"));
}
