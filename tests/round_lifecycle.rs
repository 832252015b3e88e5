use std::time::{Duration, SystemTime};

use assert_matches::assert_matches;
use typesprint::round::{Phase, RoundController, RoundSettings, DEFAULT_ROUND_SECS};
use typesprint::scoring::score;
use typesprint::word_bank::WordBank;
use typesprint::RoundResult;

fn controller(seed: u64) -> RoundController {
    RoundController::with_seed(RoundSettings::default(), WordBank::lorem().unwrap(), seed)
}

#[test]
fn every_start_yields_a_valid_prompt() {
    let bank = WordBank::lorem().unwrap();
    let mut c = controller(99);

    for _ in 0..50 {
        c.start();
        assert_eq!(c.prompt().len(), 30);
        assert!(c.prompt().iter().all(|w| bank.contains(w)));
        assert_eq!(c.phase(), Phase::Idle);
    }
}

#[test]
fn full_round_typing_the_prompt_back() {
    let mut c = controller(7);
    let t0 = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let typed = c.prompt().join(" ");

    // typing word by word, as a text box would report it
    let mut so_far = String::new();
    for (i, word) in c.prompt().to_vec().iter().enumerate() {
        if i > 0 {
            so_far.push(' ');
        }
        so_far.push_str(word);
        assert!(c.record_input_at(&so_far, t0 + Duration::from_secs(i as u64)));
        c.tick(t0 + Duration::from_secs(i as u64));
    }
    assert_eq!(c.typed_text(), typed);
    assert_eq!(c.state().started_at, Some(t0));
    assert_matches!(c.phase(), Phase::Active);

    assert!(c.tick(t0 + Duration::from_secs(DEFAULT_ROUND_SECS)));

    assert_eq!(c.result(), Some(RoundResult { wpm: 6, accuracy: 100 }));
    assert_eq!(c.remaining_secs(), 0);
    assert_eq!(c.result(), Some(score(c.prompt(), &typed)));
}

#[test]
fn result_is_fixed_once_finished() {
    let mut c = controller(3);
    let t0 = SystemTime::UNIX_EPOCH;
    c.record_input_at("lorem ipsum", t0);
    c.tick(t0 + Duration::from_secs(61));
    let result = c.result();
    assert!(result.is_some());

    assert!(!c.record_input_at("dolor sit amet", t0 + Duration::from_secs(62)));
    assert!(!c.finish());
    for s in 62..70 {
        assert!(!c.tick(t0 + Duration::from_secs(s)));
    }

    assert_eq!(c.result(), result);
    assert_eq!(c.typed_text(), "lorem ipsum");
}

#[test]
fn remaining_time_is_monotonic() {
    let mut c = controller(5);
    let t0 = SystemTime::UNIX_EPOCH + Duration::from_secs(500);
    c.begin_at(t0);

    let mut last = c.remaining_secs();
    for offset in [3, 1, 10, 9, 25, 24, 59] {
        c.tick(t0 + Duration::from_secs(offset));
        assert!(c.remaining_secs() <= last);
        last = c.remaining_secs();
    }
    assert_eq!(last, 1);
    assert!(!c.has_finished());
}

#[test]
fn scoring_scenarios() {
    let prompt = ["a", "b", "c"];

    assert_eq!(score(&prompt, "a b c"), RoundResult { wpm: 1, accuracy: 100 });
    assert_eq!(score(&prompt, "a x c").accuracy, 67);
    assert_eq!(score(&prompt, ""), RoundResult { wpm: 0, accuracy: 0 });
    assert_eq!(score(&prompt, "a   b").accuracy, 100);
}
