use keyscript::{Action, ActionKind, Editor, EditorBuilder, Position};

mod support;
use support::{act, times, type_text};

fn shift_left(n: usize) -> Action {
    times(ActionKind::ShiftArrowLeft, n)
}

fn shift_right(n: usize) -> Action {
    times(ActionKind::ShiftArrowRight, n)
}

#[test]
fn backspace_deletes_selected_suffix() {
    let editor = Editor::from_actions([
        type_text("hello"),
        shift_left(3),
        times(ActionKind::Backspace, 1),
    ]);

    assert_eq!(editor.current_code(), "he");
    assert_eq!(editor.caret(), Position::new(0, 2));
    assert_eq!(editor.state().anchor(), None);
    assert_eq!(editor.highlighted_code(), "");
}

#[test]
fn shift_arrow_highlights_and_keeps_anchor() {
    let mut editor = Editor::from_actions([type_text("hello")]);

    editor.apply_action(shift_left(2));
    assert_eq!(editor.highlighted_code(), "lo");
    assert_eq!(editor.state().anchor(), Some(Position::new(0, 5)));

    // A second shift move extends from the same anchor
    editor.apply_action(shift_left(1));
    assert_eq!(editor.highlighted_code(), "llo");
    assert_eq!(editor.state().anchor(), Some(Position::new(0, 5)));

    // Moving back past the anchor flips direction
    editor.apply_action(shift_right(3));
    assert_eq!(editor.caret(), Position::new(0, 5));
    assert_eq!(editor.highlighted_code(), "");
}

#[test]
fn backspace_with_selection_ignores_repeat_count() {
    let editor = Editor::from_actions([
        type_text("abcdef"),
        shift_left(2),
        times(ActionKind::Backspace, 4),
    ]);

    assert_eq!(editor.current_code(), "abcd");
    assert_eq!(editor.caret(), Position::new(0, 4));
}

#[test]
fn plain_moves_clear_selection() {
    for clearing in [
        times(ActionKind::ArrowLeft, 1),
        times(ActionKind::ArrowRight, 1),
        times(ActionKind::ArrowUp, 1),
        times(ActionKind::ArrowDown, 1),
        act(ActionKind::CommandLeft, ""),
        act(ActionKind::CommandRight, ""),
    ] {
        let editor = Editor::from_actions([type_text("abc"), shift_left(2), clearing.clone()]);
        assert_eq!(editor.state().anchor(), None, "{} kept the anchor", clearing.name);
        assert_eq!(editor.highlighted_code(), "");
    }
}

#[test]
fn narration_keeps_selection() {
    let editor = Editor::from_actions([
        type_text("abc"),
        shift_left(2),
        act(ActionKind::SpeakDuring, "these two letters"),
    ]);
    assert_eq!(editor.highlighted_code(), "bc");
}

#[test]
fn multi_line_highlight() {
    let mut editor = EditorBuilder::default()
        .initial_text("first\nsecond\nthird")
        .build();

    // Caret to (0, 2), then select through to (2, 3)
    editor.apply_action(times(ActionKind::ArrowRight, 2));
    editor.apply_action(shift_right(4 + 7 + 3));

    assert_eq!(editor.caret(), Position::new(2, 3));
    assert_eq!(editor.highlighted_code(), "rst\nsecond\nthi");
}

#[test]
fn multi_line_selection_deleted_by_typing() {
    let editor = EditorBuilder::default()
        .initial_text("first\nsecond\nthird")
        .actions([
            times(ActionKind::ArrowRight, 2),
            shift_right(14),
            type_text("X"),
        ])
        .build();

    assert_eq!(editor.current_code(), "fiXrd");
    assert_eq!(editor.caret(), Position::new(0, 3));
    assert_eq!(editor.state().anchor(), None);
}

#[test]
fn space_replaces_selection() {
    let editor = Editor::from_actions([
        type_text("a--b"),
        times(ActionKind::ArrowLeft, 1),
        shift_left(2),
        times(ActionKind::Space, 1),
    ]);

    assert_eq!(editor.current_code(), "a b");
    assert_eq!(editor.caret(), Position::new(0, 2));
}

#[test]
fn enter_replaces_selection_and_carries_tail() {
    let editor = Editor::from_actions([
        type_text("keep DROP tail"),
        times(ActionKind::ArrowLeft, 5),
        shift_left(4),
        times(ActionKind::Newline, 2),
    ]);

    assert_eq!(editor.current_code(), "keep \n\n tail");
    assert_eq!(editor.caret(), Position::new(2, 0));
    assert_eq!(editor.state().anchor(), None);
}

#[test]
fn enter_replacing_selection_at_line_end() {
    let editor = Editor::from_actions([
        type_text("abc"),
        shift_left(1),
        times(ActionKind::Newline, 1),
    ]);

    assert_eq!(editor.current_code(), "ab\n");
    assert_eq!(editor.caret(), Position::new(1, 0));
}

#[test]
fn empty_selection_is_consumed_by_backspace() {
    let editor = Editor::from_actions([
        type_text("abc"),
        shift_left(1),
        shift_right(1),
        times(ActionKind::Backspace, 1),
    ]);

    assert_eq!(editor.current_code(), "abc");
    assert_eq!(editor.caret(), Position::new(0, 3));
    assert_eq!(editor.state().anchor(), None);
}

#[test]
fn shift_move_at_line_end_still_anchors_a_selection() {
    let editor = Editor::from_actions([
        type_text("ab"),
        shift_right(1),
        times(ActionKind::Backspace, 1),
    ]);

    let frames = editor.annotated_frames();
    assert_eq!(frames[1].highlight_start_position, Some(Position::new(0, 2)));
    assert_eq!(frames[1].highlighted_code, "");

    // The empty selection is what backspace deletes, not the "b"
    assert_eq!(editor.current_code(), "ab");
    assert_eq!(editor.caret(), Position::new(0, 2));
    assert_eq!(editor.state().anchor(), None);
}

#[test]
fn empty_selection_is_consumed_by_typing() {
    let editor = Editor::from_actions([
        type_text("ab"),
        shift_left(1),
        shift_right(1),
        type_text("c"),
    ]);

    assert_eq!(editor.current_code(), "abc");
    assert_eq!(editor.state().anchor(), None);
}

/// Builds the same span selected in both directions, then applies `finish`.
fn both_directions(finish: Action) -> (Editor, Editor) {
    let forward = EditorBuilder::default()
        .initial_text("alpha\nbeta\ngamma")
        .actions([
            times(ActionKind::ArrowRight, 3),
            shift_right(10),
            finish.clone(),
        ])
        .build();

    let backward = EditorBuilder::default()
        .initial_text("alpha\nbeta\ngamma")
        .actions([
            times(ActionKind::ArrowRight, 13),
            shift_left(10),
            finish,
        ])
        .build();

    (forward, backward)
}

#[test]
fn direction_does_not_matter() {
    let (forward, backward) = both_directions(act(ActionKind::SpeakDuring, "look"));
    assert_eq!(forward.highlighted_code(), "ha\nbeta\nga");
    assert_eq!(forward.highlighted_code(), backward.highlighted_code());

    for finish in [
        times(ActionKind::Backspace, 1),
        times(ActionKind::Newline, 1),
        times(ActionKind::Space, 1),
        type_text("Z"),
    ] {
        let (forward, backward) = both_directions(finish.clone());
        assert_eq!(forward.current_code(), backward.current_code(), "{}", finish.name);
        assert_eq!(forward.caret(), backward.caret(), "{}", finish.name);
    }
}
