//! Tests for the quiz picker.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::db::Question;
use crate::selection::{CategoryScope, PickPolicy, QuizPicker, SelectionError};

fn questions(ids: &[(i64, i64)]) -> Vec<Question> {
    ids.iter()
        .map(|&(id, category)| Question {
            id,
            question: format!("Question {}", id),
            answer: format!("Answer {}", id),
            category,
            difficulty: 2,
        })
        .collect()
}

fn previous(ids: &[i64]) -> HashSet<i64> {
    ids.iter().copied().collect()
}

#[test]
fn first_policy_returns_lowest_unseen_id() {
    let picker = QuizPicker::new(PickPolicy::First);
    let mut rng = StdRng::seed_from_u64(7);

    let picked = picker
        .pick(
            questions(&[(1, 1), (2, 1), (3, 1), (4, 2)]),
            CategoryScope::All,
            &previous(&[1, 2]),
            &mut rng,
        )
        .unwrap();
    assert_eq!(picked.id, 3);
}

#[test]
fn random_policy_never_repeats_or_leaves_category() {
    let picker = QuizPicker::new(PickPolicy::Random);
    let candidates = questions(&[(1, 1), (2, 2), (3, 1), (4, 1), (5, 2), (6, 1)]);
    let seen = previous(&[1, 4]);

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let picked = picker
            .pick(candidates.clone(), CategoryScope::Only(1), &seen, &mut rng)
            .unwrap();
        assert!(!seen.contains(&picked.id));
        assert_eq!(picked.category, 1);
    }
}

#[test]
fn random_policy_reaches_every_remaining_candidate() {
    let picker = QuizPicker::default();
    assert_eq!(picker.policy(), PickPolicy::Random);

    let candidates = questions(&[(1, 1), (2, 1), (3, 1)]);
    let mut hits = HashSet::new();
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let picked = picker
            .pick(candidates.clone(), CategoryScope::All, &HashSet::new(), &mut rng)
            .unwrap();
        hits.insert(picked.id);
    }
    assert_eq!(hits, previous(&[1, 2, 3]));
}

#[test]
fn exhausted_when_every_candidate_was_asked() {
    let picker = QuizPicker::new(PickPolicy::Random);
    let mut rng = StdRng::seed_from_u64(1);

    let result = picker.pick(
        questions(&[(1, 1), (2, 1), (3, 1)]),
        CategoryScope::Only(1),
        &previous(&[1, 2, 3]),
        &mut rng,
    );
    assert_eq!(result, Err(SelectionError::Exhausted));
}

#[test]
fn exhausted_when_no_candidates() {
    let picker = QuizPicker::new(PickPolicy::First);
    let mut rng = StdRng::seed_from_u64(1);

    let result = picker.pick(Vec::new(), CategoryScope::All, &HashSet::new(), &mut rng);
    assert_eq!(result, Err(SelectionError::Exhausted));
}

#[test]
fn candidates_outside_scope_are_discarded() {
    let picker = QuizPicker::new(PickPolicy::First);
    let mut rng = StdRng::seed_from_u64(1);

    let result = picker.pick(
        questions(&[(1, 2), (2, 3)]),
        CategoryScope::Only(1),
        &HashSet::new(),
        &mut rng,
    );
    assert_eq!(result, Err(SelectionError::Exhausted));
}

#[test]
fn pick_policy_parses_from_text() {
    assert_eq!("random".parse::<PickPolicy>().unwrap(), PickPolicy::Random);
    assert_eq!("FIRST".parse::<PickPolicy>().unwrap(), PickPolicy::First);
    assert!("sometimes".parse::<PickPolicy>().is_err());
    assert_eq!(PickPolicy::First.to_string(), "first");
}
