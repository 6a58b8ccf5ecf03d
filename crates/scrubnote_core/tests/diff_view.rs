use scrubnote_core::{highlight_changes, redact_note, DiffSegmentKind, NoteDocument};

#[test]
fn changed_segments_line_up_with_pipeline_placeholders() {
    let note = NoteDocument::with_id(
        "diff-1",
        "Visit",
        "Sister: Maria. Reach her at 555-123-4567 tomorrow.",
    );

    let redacted = redact_note(&note);
    let segments = highlight_changes(&note.text, &redacted.note.text);

    let changed: Vec<&str> = segments
        .iter()
        .filter(|segment| segment.kind == DiffSegmentKind::Changed)
        .map(|segment| segment.text.as_str())
        .collect();
    assert_eq!(changed, vec!["[REDACTED_NAME].", "[REDACTED_PHONE]"]);

    let same_text: String = segments
        .iter()
        .filter(|segment| segment.kind == DiffSegmentKind::Same)
        .map(|segment| segment.text.clone())
        .collect::<Vec<_>>()
        .join(" ");
    assert!(same_text.contains("Reach her at"));
    assert!(!same_text.contains("Maria"));
    assert!(!same_text.contains("555"));
}

#[test]
fn untouched_note_yields_one_verbatim_segment() {
    let note = NoteDocument::with_id("diff-2", "Plan", "Rest and fluids.\nRecheck in 1 week.");
    let redacted = redact_note(&note);
    assert_eq!(redacted.note.text, note.text);

    let segments = highlight_changes(&note.text, &redacted.note.text);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].kind, DiffSegmentKind::Same);
    assert_eq!(segments[0].text, note.text);
}
