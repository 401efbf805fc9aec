use super::*;

fn parsed(payload: &str, opts: EngineOpts) -> TypeWriter {
    let mut tw = TypeWriter::new(opts);
    tw.set_payload(payload);
    tw.parse().unwrap();
    tw
}

fn render(tw: &TypeWriter, frame: u64) -> String {
    let mut out = String::new();
    tw.render_into(FrameIndex(frame), &mut out);
    out
}

#[test]
fn chars_appear_one_per_step() {
    let tw = parsed("World", EngineOpts::default());
    assert_eq!(render(&tw, 0), "");
    assert_eq!(render(&tw, 1), "W");
    assert_eq!(render(&tw, 3), "Wor");
    assert_eq!(render(&tw, 5), "World");
    assert_eq!(render(&tw, 500), "World");
    assert_eq!(tw.completed_at(), FrameIndex(5));
}

#[test]
fn step_frames_slows_the_reveal() {
    let tw = parsed(
        "abc",
        EngineOpts {
            step_frames: 4,
            ..EngineOpts::default()
        },
    );
    assert_eq!(render(&tw, 3), "");
    assert_eq!(render(&tw, 4), "a");
    assert_eq!(render(&tw, 11), "ab");
    assert_eq!(render(&tw, 12), "abc");
}

#[test]
fn zero_step_reveals_everything_at_once() {
    let tw = parsed(
        "abc",
        EngineOpts {
            step_frames: 0,
            ..EngineOpts::default()
        },
    );
    assert_eq!(render(&tw, 0), "abc");
}

#[test]
fn words_carry_trailing_whitespace() {
    let tw = parsed(
        "one two  three",
        EngineOpts {
            unit: RevealUnit::Word,
            ..EngineOpts::default()
        },
    );
    assert_eq!(render(&tw, 1), "one ");
    assert_eq!(render(&tw, 2), "one two  ");
    assert_eq!(render(&tw, 3), "one two  three");
}

#[test]
fn lines_carry_trailing_newline() {
    let tw = parsed(
        "first\nsecond\n",
        EngineOpts {
            unit: RevealUnit::Line,
            ..EngineOpts::default()
        },
    );
    assert_eq!(render(&tw, 1), "first\n");
    assert_eq!(render(&tw, 2), "first\nsecond\n");
}

#[test]
fn pause_delays_the_next_unit() {
    let tw = parsed("ab{3}c", EngineOpts::default());
    assert_eq!(render(&tw, 2), "ab");
    assert_eq!(render(&tw, 5), "ab");
    assert_eq!(render(&tw, 6), "abc");
}

#[test]
fn escapes_are_literal() {
    let tw = parsed(r"a\{1\}\\", EngineOpts::default());
    assert_eq!(render(&tw, 100), r"a{1}\");
}

#[test]
fn multibyte_chars_are_single_units() {
    let tw = parsed("héé✓", EngineOpts::default());
    assert_eq!(render(&tw, 2), "hé");
    assert_eq!(render(&tw, 4), "héé✓");
}

#[test]
fn malformed_payloads_fail_to_parse() {
    for bad in ["trailing\\", "open {12", "bad {x}", "neg {-1}"] {
        let mut tw = TypeWriter::new(EngineOpts::default());
        tw.set_payload(bad);
        assert!(
            matches!(tw.parse(), Err(TypewriterError::PayloadParse(_))),
            "{bad} should fail"
        );
    }
}

#[test]
fn jitter_is_seeded_and_monotonic() {
    let opts = EngineOpts {
        step_frames: 3,
        sigma: 2,
        seed: 99,
        ..EngineOpts::default()
    };
    let a = parsed("the quick brown fox", opts.clone());
    let b = parsed("the quick brown fox", opts);

    let mut prev = 0usize;
    for f in 0..=100 {
        let ra = render(&a, f);
        assert_eq!(ra, render(&b, f));
        assert!(ra.len() >= prev);
        prev = ra.len();
    }
    assert_eq!(render(&a, 1_000), "the quick brown fox");
}

#[test]
fn set_payload_discards_previous_parse() {
    let mut tw = parsed("abc", EngineOpts::default());
    tw.set_payload("xyz");
    assert_eq!(render(&tw, 10), "");
    tw.parse().unwrap();
    assert_eq!(render(&tw, 10), "xyz");
}
