//! Property-based invariant tests for frame storage and playback order.
//!
//! These tests verify structural invariants that must hold after any
//! sequence of frame operations:
//!
//! 1. One real frame ⇒ placeholder in store and sequence; two or more ⇒ in neither.
//! 2. The sequence is always a permutation of the store's indices.
//! 3. Deleting frame k moves every other frame from i to i - (i > k).
//! 4. add_frame followed by delete_frame of the new index is a no-op.
//! 5. Deleting the only real frame fails and changes nothing.
//! 6. Painting touches exactly one pixel of the visible frame.

use minipixel_core::{
    shift_after_removal, EditSession, EditorConfig, EditorError, RecordingView, Rgb, Timeline,
    VirtualClock, PIXEL_COUNT, PLACEHOLDER_INDEX,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
enum Op {
    Add,
    Delete(usize),
    Paint { frame: usize, pos: usize, color: (u8, u8, u8) },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Add),
        2 => any::<usize>().prop_map(Op::Delete),
        2 => (any::<usize>(), 0..PIXEL_COUNT, any::<(u8, u8, u8)>())
            .prop_map(|(frame, pos, color)| Op::Paint { frame, pos, color }),
    ]
}

fn ops(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(op(), 0..=max_len)
}

/// Pick a real frame index from an arbitrary selector.
fn real_index(timeline: &Timeline, selector: usize) -> usize {
    let real: Vec<usize> = timeline.store().real_indices().collect();
    real[selector % real.len()]
}

fn apply(timeline: &mut Timeline, op: &Op) {
    match *op {
        Op::Add => {
            timeline.add_frame();
        }
        Op::Delete(selector) => {
            let index = real_index(timeline, selector);
            let _ = timeline.delete_frame(index);
        }
        Op::Paint { frame, pos, color } => {
            let index = real_index(timeline, frame);
            timeline
                .store_mut()
                .paint_pixel(index, pos, Rgb::from(color))
                .unwrap();
        }
    }
}

fn check_invariants(timeline: &Timeline) -> Result<(), TestCaseError> {
    let store = timeline.store();
    let sequence = timeline.sequence();

    if store.real_frame_count() == 1 {
        prop_assert!(store.has_placeholder());
        prop_assert!(sequence.contains(PLACEHOLDER_INDEX));
        prop_assert!(store.get_frame(PLACEHOLDER_INDEX).unwrap().is_blank());
    } else {
        prop_assert!(store.real_frame_count() >= 2);
        prop_assert!(!store.has_placeholder());
    }

    let mut entries: Vec<usize> = sequence.entries().collect();
    entries.sort_unstable();
    prop_assert_eq!(entries, (0..store.len()).collect::<Vec<_>>());
    Ok(())
}

fn build(history: &[Op]) -> Timeline {
    let mut timeline = Timeline::new();
    for op in history {
        apply(&mut timeline, op);
    }
    timeline
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Placeholder and permutation invariants hold after every step
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn invariants_hold_after_every_op(history in ops(40)) {
        let mut timeline = Timeline::new();
        check_invariants(&timeline)?;
        for op in &history {
            apply(&mut timeline, op);
            check_invariants(&timeline)?;
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Deleting frame k shifts later frames down by one
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn delete_shifts_remaining_frames(history in ops(30), selector in any::<usize>()) {
        let mut timeline = build(&history);
        timeline.add_frame();
        let before = timeline.clone();
        let k = real_index(&before, selector);

        timeline.delete_frame(k).unwrap();
        for i in before.store().real_indices().filter(|&i| i != k) {
            let j = shift_after_removal(i, k).unwrap();
            prop_assert_eq!(
                before.store().get_frame(i).unwrap(),
                timeline.store().get_frame(j).unwrap(),
                "frame {} should now live at {}", i, j
            );
        }
        check_invariants(&timeline)?;
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. add_frame then delete_frame(new) round-trips
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn add_then_delete_round_trips(history in ops(30)) {
        let mut timeline = build(&history);
        let before = timeline.clone();

        let added = timeline.add_frame();
        timeline.delete_frame(added).unwrap();
        prop_assert_eq!(timeline, before);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. The last real frame cannot be deleted
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn last_frame_delete_is_rejected(history in ops(30)) {
        let mut timeline = build(&history);
        while timeline.store().real_frame_count() > 1 {
            let last = timeline.store().len() - 1;
            timeline.delete_frame(last).unwrap();
        }
        let before = timeline.clone();
        prop_assert_eq!(timeline.delete_frame(0), Err(EditorError::LastFrame));
        prop_assert_eq!(timeline, before);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Painting touches exactly one pixel of the visible frame
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn paint_touches_one_pixel(
        extra_frames in 0usize..4,
        visible in any::<usize>(),
        pos in 0..PIXEL_COUNT,
        color in any::<(u8, u8, u8)>(),
    ) {
        let mut session =
            EditSession::new(&EditorConfig::default(), RecordingView::new(), VirtualClock::new());
        for _ in 0..extra_frames {
            session.add_frame();
        }
        let visible = real_index(session.timeline(), visible);
        session.set_visible_frame(visible).unwrap();

        let color = Rgb::from(color);
        session.select_color(&color.to_hex());
        let before = session.timeline().clone();
        session.paint_at(pos).unwrap();

        let store = session.store();
        for index in 0..store.len() {
            let old = before.store().get_frame(index).unwrap();
            let new = store.get_frame(index).unwrap();
            for p in 0..PIXEL_COUNT {
                let expected = if index == visible && p == pos { color } else { old.pixel(p).unwrap() };
                prop_assert_eq!(new.pixel(p), Some(expected));
            }
        }
    }
}
