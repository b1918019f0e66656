#![forbid(unsafe_code)]

//! Property tests for reveal-run invariants.
//!
//! These hold for every text, seed, and frame schedule:
//! - the locked index never decreases within a run;
//! - protected characters are never altered at any point;
//! - at completion the displayed text equals the original exactly;
//! - the displayed length always matches the original length.

use marquee_fx::reveal::{RevealParams, RevealRun, ScrambleAlphabet, is_protected};
use proptest::prelude::*;
use std::time::Duration;

fn arb_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            prop::char::range('a', 'z'),
            prop::char::range('A', 'Z'),
            prop::char::range('0', '9'),
            Just(' '),
            Just('.'),
            Just('-'),
            Just('₹'),
        ],
        0..40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn arb_alphabet() -> impl Strategy<Value = ScrambleAlphabet> {
    prop_oneof![
        Just(ScrambleAlphabet::default()),
        Just(ScrambleAlphabet::Digits),
        Just(ScrambleAlphabet::SourceChars),
        Just(ScrambleAlphabet::Custom(String::new())),
    ]
}

proptest! {
    #[test]
    fn run_invariants_hold_under_any_schedule(
        text in arb_text(),
        alphabet in arb_alphabet(),
        seed in any::<u64>(),
        // Irregular frame deltas, including stalls far past the tick gate.
        deltas in proptest::collection::vec(0u64..150, 1..80),
    ) {
        let params = RevealParams {
            alphabet,
            tick_interval: Duration::from_millis(50),
            duration: Some(Duration::from_millis(600)),
        };
        let original: Vec<char> = text.chars().collect();
        let mut run = RevealRun::new(&text, &params, seed);

        let mut elapsed = Duration::ZERO;
        let mut prev_locked = run.locked_index();
        for delta in deltas {
            elapsed += Duration::from_millis(delta);
            run.advance(elapsed);

            prop_assert!(run.locked_index() >= prev_locked, "locked index regressed");
            prev_locked = run.locked_index();

            prop_assert_eq!(run.displayed().len(), original.len());
            for (i, &ch) in original.iter().enumerate() {
                if is_protected(ch) {
                    prop_assert_eq!(run.displayed()[i], ch, "protected slot {} changed", i);
                }
            }
        }

        // Push past the total duration: the run must settle exactly.
        run.advance(elapsed + Duration::from_millis(700));
        prop_assert!(!run.is_running());
        prop_assert_eq!(run.displayed(), &original[..]);
        prop_assert_eq!(run.locked_index(), original.len() as i64);
    }

    #[test]
    fn cancel_is_total_reset(
        text in arb_text(),
        seed in any::<u64>(),
        at_ms in 0u64..800,
    ) {
        let mut run = RevealRun::new(&text, &RevealParams::default(), seed);
        run.advance(Duration::from_millis(at_ms));
        run.cancel();
        let original: Vec<char> = text.chars().collect();
        prop_assert_eq!(run.displayed(), &original[..]);
        prop_assert_eq!(run.locked_index(), -1);
        prop_assert!(!run.is_running());
    }
}
