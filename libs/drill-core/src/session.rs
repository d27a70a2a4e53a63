//! Drill session state: current entry, hint level and answer history.

use crate::deck::Deck;
use crate::matching::{judge, Verdict};
use crate::types::{DrillSettings, HintLevel, HistoryEntry, VocabEntry};
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::VecDeque;

/// Maximum number of judged answers kept in the history.
pub const HISTORY_LIMIT: usize = 5;

/// Input events understood by a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Replace the input buffer.
    EditInput(String),
    /// Judge the given answer and move to the next entry.
    Confirm(String),
    /// Advance the hint level.
    ToggleHint,
}

/// Read-only snapshot of what the UI should show.
#[derive(Debug, Clone)]
pub struct SessionView<'a> {
    pub symbol: &'a str,
    /// Present when the phonetic field is visible.
    pub phonetic: Option<&'a str>,
    /// Present when the translation is visible.
    pub translation: Option<&'a str>,
    pub example_source: &'a str,
    pub part_of_speech: &'a str,
    pub input: &'a str,
    pub hint: HintLevel,
    /// Whether history rows include the phonetic field.
    pub history_phonetic: bool,
    /// Newest first, at most [`HISTORY_LIMIT`] entries.
    pub history: &'a VecDeque<HistoryEntry>,
}

/// Totals for the end-of-session report.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub answered: u64,
    pub correct: u64,
    pub started_at: DateTime<Utc>,
    pub elapsed: TimeDelta,
}

/// A running drill over one deck.
#[derive(Debug)]
pub struct Session {
    deck: Deck,
    settings: DrillSettings,
    current: VocabEntry,
    input: String,
    hint: HintLevel,
    history: VecDeque<HistoryEntry>,
    next_sequence: u64,
    answered: u64,
    correct: u64,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Start a session, drawing the first entry from the deck.
    pub fn new(mut deck: Deck, settings: DrillSettings) -> Self {
        let current = deck.get_next();
        Self {
            deck,
            settings,
            current,
            input: String::new(),
            hint: HintLevel::Off,
            history: VecDeque::with_capacity(HISTORY_LIMIT + 1),
            next_sequence: 1,
            answered: 0,
            correct: 0,
            started_at: Utc::now(),
        }
    }

    /// Apply one input event.
    pub fn handle(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::EditInput(text) => self.edit_input(text),
            SessionEvent::Confirm(text) => {
                self.confirm(&text);
            }
            SessionEvent::ToggleHint => self.toggle_hint(),
        }
    }

    /// Replace the input buffer. Nothing else changes.
    pub fn edit_input(&mut self, text: String) {
        self.input = text;
    }

    /// Advance the hint level: Off -> Partial -> Full -> Off.
    pub fn toggle_hint(&mut self) {
        self.hint = self.hint.next();
    }

    /// Judge an answer against the current entry, record it and draw the
    /// next entry. Returns the new history entry.
    pub fn confirm(&mut self, answer: &str) -> &HistoryEntry {
        let Verdict {
            is_correct,
            similarity,
            matched_first_alternative,
        } = judge(answer, &self.current.translation, self.settings.threshold);

        let entry = HistoryEntry {
            sequence_number: self.next_sequence,
            symbol: self.current.symbol.clone(),
            phonetic: self.current.phonetic.clone(),
            translation: self.current.translation.clone(),
            example_target: self.current.example_target.clone(),
            answer: answer.to_string(),
            correct: is_correct,
            similarity,
            matched_first_alternative,
        };
        self.next_sequence += 1;
        self.answered += 1;
        if is_correct {
            self.correct += 1;
        }

        self.history.push_front(entry);
        self.history.truncate(HISTORY_LIMIT);

        self.input.clear();
        self.hint = HintLevel::Off;
        self.current = self.deck.get_next();

        &self.history[0]
    }

    pub fn current(&self) -> &VocabEntry {
        &self.current
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn hint(&self) -> HintLevel {
        self.hint
    }

    /// Judged answers, newest first.
    pub fn history(&self) -> &VecDeque<HistoryEntry> {
        &self.history
    }

    /// Snapshot of the current entry with the visible fields resolved.
    pub fn view(&self) -> SessionView<'_> {
        let show_phonetic = self.hint.shows_phonetic(self.settings.show_phonetic);
        let show_translation = self.hint.shows_translation(self.settings.show_translation);

        SessionView {
            symbol: &self.current.symbol,
            phonetic: show_phonetic.then_some(self.current.phonetic.as_str()),
            translation: show_translation.then_some(self.current.translation.as_str()),
            example_source: &self.current.example_source,
            part_of_speech: &self.current.part_of_speech,
            input: &self.input,
            hint: self.hint,
            history_phonetic: self.settings.show_phonetic,
            history: &self.history,
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            answered: self.answered,
            correct: self.correct,
            started_at: self.started_at,
            elapsed: Utc::now() - self.started_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn deck(words: &[(&str, &str)]) -> Deck {
        let mut source = crate::vocabulary::VocabSource::new();
        for (symbol, translation) in words {
            source.insert(
                symbol.to_string(),
                json!({
                    "kana": format!("{symbol}-kana"),
                    "translation": translation,
                    "sentence_jp": format!("{symbol}-example"),
                    "sentence_en": format!("{translation} example"),
                    "pos": "Noun"
                }),
            );
        }
        Deck::load_with_rng(source, &mut StdRng::seed_from_u64(1)).unwrap()
    }

    fn session(settings: DrillSettings) -> Session {
        Session::new(deck(&[("一", "one"), ("二", "two"), ("三", "three")]), settings)
    }

    #[test]
    fn initial_state() {
        let session = session(DrillSettings::default());
        assert_eq!(session.hint(), HintLevel::Off);
        assert!(session.history().is_empty());
        assert_eq!(session.input(), "");
        assert_eq!(session.summary().answered, 0);
    }

    #[test]
    fn edit_input_only_replaces_buffer() {
        let mut session = session(DrillSettings::default());
        let current = session.current().clone();
        session.toggle_hint();

        session.handle(SessionEvent::EditInput("thr".to_string()));
        session.handle(SessionEvent::EditInput("three".to_string()));

        assert_eq!(session.input(), "three");
        assert_eq!(session.current(), &current);
        assert_eq!(session.hint(), HintLevel::Partial);
        assert!(session.history().is_empty());
    }

    #[test]
    fn confirm_records_and_advances() {
        let mut session = session(DrillSettings::default());
        let first = session.current().clone();
        session.edit_input(first.translation.clone());

        let recorded = session.confirm(&first.translation.clone()).clone();
        assert_eq!(recorded.sequence_number, 1);
        assert_eq!(recorded.symbol, first.symbol);
        assert_eq!(recorded.phonetic, first.phonetic);
        assert_eq!(recorded.translation, first.translation);
        assert_eq!(recorded.example_target, first.example_target);
        assert!(recorded.correct);

        assert_eq!(session.input(), "");
        assert_ne!(session.current().symbol, first.symbol);
    }

    #[test]
    fn wrong_answer_recorded_as_incorrect() {
        let mut session = session(DrillSettings::default());
        session.handle(SessionEvent::Confirm("zzzzzzzz".to_string()));
        assert!(!session.history()[0].correct);
        assert_eq!(session.history()[0].answer, "zzzzzzzz");

        let summary = session.summary();
        assert_eq!(summary.answered, 1);
        assert_eq!(summary.correct, 0);
    }

    #[test]
    fn confirm_records_similarity_and_first_gloss_match() {
        let mut session = Session::new(
            deck(&[("食べる", "to eat, to consume")]),
            DrillSettings::default(),
        );

        let exact = session.confirm("to eat, to consume").clone();
        assert_eq!(exact.similarity, 1.0);
        assert!(!exact.matched_first_alternative);

        let first_gloss = session.confirm("to eat").clone();
        assert!(first_gloss.correct);
        assert!(first_gloss.matched_first_alternative);
        assert_eq!(first_gloss.similarity, 1.0);

        let wrong = session.confirm("zzzz").clone();
        assert!(!wrong.correct);
        assert!(!wrong.matched_first_alternative);
        assert!(wrong.similarity < 0.6);
    }

    #[test]
    fn history_is_bounded_and_newest_first() {
        let mut session = session(DrillSettings::default());
        for n in 1..=12u64 {
            session.handle(SessionEvent::Confirm(String::new()));

            let history = session.history();
            assert_eq!(history.len(), (n as usize).min(HISTORY_LIMIT));
            assert_eq!(history[0].sequence_number, n);
            for pair in history.iter().collect::<Vec<_>>().windows(2) {
                assert!(pair[0].sequence_number > pair[1].sequence_number);
            }
        }
        assert_eq!(session.summary().answered, 12);
    }

    #[test]
    fn hint_cycles_regardless_of_baseline() {
        for (phonetic, translation) in [(false, false), (true, false), (false, true), (true, true)] {
            let mut session = session(DrillSettings {
                show_phonetic: phonetic,
                show_translation: translation,
                ..DrillSettings::default()
            });
            let mut levels = vec![session.hint()];
            for _ in 0..4 {
                session.handle(SessionEvent::ToggleHint);
                levels.push(session.hint());
            }
            assert_eq!(
                levels,
                vec![
                    HintLevel::Off,
                    HintLevel::Partial,
                    HintLevel::Full,
                    HintLevel::Off,
                    HintLevel::Partial
                ]
            );
        }
    }

    #[test]
    fn view_gates_fields_by_hint_level() {
        let mut session = session(DrillSettings::default());
        let current = session.current().clone();

        let view = session.view();
        assert_eq!(view.symbol, current.symbol);
        assert_eq!(view.phonetic, None);
        assert_eq!(view.translation, None);

        session.toggle_hint();
        let view = session.view();
        assert_eq!(view.phonetic, Some(current.phonetic.as_str()));
        assert_eq!(view.translation, None);

        session.toggle_hint();
        let view = session.view();
        assert_eq!(view.phonetic, Some(current.phonetic.as_str()));
        assert_eq!(view.translation, Some(current.translation.as_str()));

        session.toggle_hint();
        let view = session.view();
        assert_eq!(view.phonetic, None);
        assert_eq!(view.translation, None);
    }

    #[test]
    fn view_uses_baseline_when_hint_off() {
        let session = session(DrillSettings {
            show_phonetic: true,
            show_translation: true,
            ..DrillSettings::default()
        });
        let view = session.view();
        assert!(view.phonetic.is_some());
        assert!(view.translation.is_some());
        assert!(view.history_phonetic);
    }

    #[test]
    fn confirm_resets_hint_to_baseline() {
        let mut session = session(DrillSettings {
            show_translation: true,
            ..DrillSettings::default()
        });
        session.toggle_hint();
        session.toggle_hint();
        assert_eq!(session.hint(), HintLevel::Full);

        session.handle(SessionEvent::Confirm("one".to_string()));
        assert_eq!(session.hint(), HintLevel::Off);
        let view = session.view();
        assert_eq!(view.phonetic, None);
        assert!(view.translation.is_some());
    }

    #[test]
    fn confirm_uses_configured_threshold() {
        let mut strict = session(DrillSettings {
            threshold: 1.0,
            ..DrillSettings::default()
        });
        let translation = strict.current().translation.clone();
        let typo = format!("{translation}x");
        assert!(!strict.confirm(&typo).correct);

        let mut lenient = session(DrillSettings {
            threshold: 0.0,
            ..DrillSettings::default()
        });
        assert!(lenient.confirm("anything").correct);
    }

    #[test]
    fn single_entry_deck_keeps_drawing_same_entry() {
        let mut session = Session::new(deck(&[("三", "three")]), DrillSettings::default());
        session.confirm("three");
        session.confirm("three");
        assert_eq!(session.current().symbol, "三");
        assert_eq!(session.summary().correct, 2);
    }
}
