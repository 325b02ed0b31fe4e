//! End-to-end scenarios for the attempt/lock/reveal state machine.

use intersections::{
    Action, ActionError, CardId, CardState, GameEvent, GameSession, MAX_WORDS, Outcome, Phase,
    Position, Puzzle, PuzzleRecord, ResultKind,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn session() -> GameSession {
    GameSession::new(Puzzle::fallback(), None, &mut StdRng::seed_from_u64(2024))
}

fn card(session: &GameSession, word: &str) -> CardId {
    session
        .pool()
        .find_word(word)
        .map(|c| c.id())
        .expect("word in pool")
}

fn place(session: &mut GameSession, pos: Position, word: &str) -> Vec<GameEvent> {
    let id = card(session, word);
    session.select_card(id);
    session.place_card(pos)
}

fn place_all(session: &mut GameSession, words: [&str; 4]) {
    for (pos, word) in Position::ALL.into_iter().zip(words) {
        place(session, pos, word);
    }
}

fn result_of(events: &[GameEvent]) -> Option<(ResultKind, String)> {
    events.iter().find_map(|e| match e {
        GameEvent::Result { kind, message } => Some((*kind, message.clone())),
        _ => None,
    })
}

/// Board after a first submit with only `top` wrong.
fn scenario_b() -> (GameSession, Vec<GameEvent>) {
    let mut session = session();
    place_all(&mut session, ["CLOUD", "MOON", "STAR", "PLANET"]);
    let events = session.submit();
    (session, events)
}

#[test]
fn test_puzzle_has_four_positions() {
    let puzzle = Puzzle::fallback();
    let positions: Vec<_> = puzzle.solution().iter().map(|(pos, _)| pos).collect();
    assert_eq!(positions, Position::ALL.to_vec());
}

#[test]
fn test_pool_size_and_uniqueness() {
    let session = session();
    assert_eq!(session.pool().len(), 6);
    let mut words: Vec<_> = session.pool().cards().iter().map(|c| c.word()).collect();
    words.sort_unstable();
    words.dedup();
    assert_eq!(words.len(), 6);
}

#[test]
fn test_largest_table_wins_with_correct_words() {
    let mut record = PuzzleRecord::from(Puzzle::fallback());
    record.decoys = (0..MAX_WORDS - 4).map(|i| format!("D{i}")).collect();
    let puzzle = Puzzle::try_from(record).expect("table at the word limit");
    let mut session = GameSession::new(puzzle, None, &mut StdRng::seed_from_u64(7));

    let mut ids: Vec<_> = session.pool().cards().iter().map(|c| c.id()).collect();
    ids.dedup();
    assert_eq!(ids.len(), MAX_WORDS);

    place_all(&mut session, ["SUN", "MOON", "STAR", "PLANET"]);
    assert_eq!(session.word_at(Position::Top), Some("SUN"));
    session.submit();
    assert_eq!(session.phase(), Phase::WonPerfect);
}

#[test]
fn test_select_twice_clears_selection() {
    let mut session = session();
    let moon = card(&session, "MOON");
    session.select_card(moon);
    session.select_card(moon);
    assert_eq!(session.pool().selected(), None);
}

#[test]
fn test_scenario_a_perfect_win() {
    let mut session = session();
    place_all(&mut session, ["SUN", "MOON", "STAR", "PLANET"]);
    let events = session.submit();

    assert_eq!(session.phase(), Phase::WonPerfect);
    assert_eq!(session.phase().outcome(), Some(Outcome::Won));
    assert!(session.game_complete());
    assert_eq!(session.board().locked_positions(), Position::ALL.to_vec());
    assert_eq!(session.attempts_remaining(), 2);
    let (kind, message) = result_of(&events).expect("result event");
    assert_eq!(kind, ResultKind::Success);
    assert_eq!(message, "Perfect! You solved the puzzle!");
    assert!(!session.submit_enabled());
}

#[test]
fn test_scenario_b_partial_locks_correct() {
    let (session, events) = scenario_b();

    assert_eq!(session.attempts_remaining(), 1);
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(
        session.board().locked_positions(),
        vec![Position::Right, Position::Bottom, Position::Left]
    );
    assert!(!session.board().is_locked(Position::Top));
    assert!(session.board().is_flagged(Position::Top));
    assert!(events.contains(&GameEvent::IncorrectFlagged(vec![Position::Top])));

    let (kind, message) = result_of(&events).expect("result event");
    assert_eq!(kind, ResultKind::Partial);
    assert!(message.starts_with("3 correct! 1 to fix."), "{message}");
}

#[test]
fn test_scenario_c_second_miss_reveals() {
    let (mut session, _) = scenario_b();
    place(&mut session, Position::Top, "COMET");
    let events = session.submit();

    assert_eq!(session.attempts_remaining(), 0);
    assert_eq!(session.phase(), Phase::LostRevealed);
    assert_eq!(session.phase().outcome(), Some(Outcome::Lost));
    assert_eq!(session.word_at(Position::Top), Some("SUN"));
    assert!(session.board().is_locked(Position::Top));
    assert!(events.contains(&GameEvent::SolutionRevealed {
        position: Position::Top,
        word: "SUN".to_string(),
    }));
    let comet = card(&session, "COMET");
    assert_eq!(
        session.pool().get(comet).map(|c| c.state()),
        Some(CardState::InPool)
    );

    let (kind, _) = result_of(&events).expect("result event");
    assert_eq!(kind, ResultKind::Failure);
}

#[test]
fn test_scenario_d_reset_keeps_locks() {
    let (mut session, _) = scenario_b();
    session.reset_board();

    assert_eq!(session.word_at(Position::Top), None);
    let cloud = card(&session, "CLOUD");
    assert_eq!(
        session.pool().get(cloud).map(|c| c.state()),
        Some(CardState::InPool)
    );
    assert_eq!(session.word_at(Position::Right), Some("MOON"));
    assert_eq!(session.word_at(Position::Bottom), Some("STAR"));
    assert_eq!(session.word_at(Position::Left), Some("PLANET"));
    assert_eq!(session.board().locked_positions().len(), 3);
    assert_eq!(session.attempts_remaining(), 1);
    assert_eq!(session.phase(), Phase::Playing);
}

#[test]
fn test_submit_requires_full_board() {
    let mut session = session();
    place(&mut session, Position::Top, "SUN");
    place(&mut session, Position::Right, "MOON");
    place(&mut session, Position::Bottom, "STAR");

    assert!(!session.submit_enabled());
    assert!(session.submit().is_empty());
    assert_eq!(
        session.try_apply(Action::Submit),
        Err(ActionError::BoardIncomplete(3))
    );
    assert_eq!(session.attempts_remaining(), 2);
}

#[test]
fn test_locked_positions_never_change() {
    let (mut session, _) = scenario_b();
    let sun = card(&session, "SUN");

    session.select_card(sun);
    assert!(session.place_card(Position::Right).is_empty());
    assert!(session.remove_card(Position::Bottom).is_empty());
    assert_eq!(session.word_at(Position::Right), Some("MOON"));
    assert_eq!(session.word_at(Position::Bottom), Some("STAR"));

    // Selection survives the rejected placement.
    assert_eq!(session.pool().selected(), Some(sun));
    session.place_card(Position::Top);
    session.submit();
    assert_eq!(session.phase(), Phase::WonPerfect);
    assert_eq!(session.word_at(Position::Left), Some("PLANET"));
}
