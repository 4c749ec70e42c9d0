use crate::engine::QuizEngine;
use crate::models::{AppState, Question};

/// Terminal-side state wrapped around a [`QuizEngine`].
///
/// The engine decides everything about answers and scoring; the app only
/// adds the keyboard cursor, the welcome screen and the results scroll.
pub struct App {
    engine: QuizEngine,
    started: bool,
    cursor: usize,
    result_scroll: usize,
}

impl App {
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            engine: QuizEngine::new(questions),
            started: false,
            cursor: 0,
            result_scroll: 0,
        }
    }

    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    pub fn state(&self) -> AppState {
        if !self.started {
            AppState::Welcome
        } else if self.engine.is_terminal() {
            AppState::Result
        } else {
            AppState::Quiz
        }
    }

    pub fn current_question_number(&self) -> usize {
        self.engine.position() + 1
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    fn option_count(&self) -> usize {
        self.engine.current_question().map_or(0, Question::option_count)
    }

    pub fn start_quiz(&mut self) {
        self.started = true;
    }

    pub fn move_cursor_down(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn move_cursor_up(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    /// Select or toggle the option under the cursor.
    pub fn choose_at_cursor(&mut self) {
        let index = self.cursor;
        self.choose(index);
    }

    /// Select or toggle the option at `index`, ignoring indices the current
    /// question does not have.
    pub fn choose(&mut self, index: usize) {
        if index >= self.option_count() {
            return;
        }
        self.cursor = index;
        self.engine.select_option(index);
    }

    pub fn submit(&mut self) {
        self.engine.submit_multiple();
    }

    pub fn next_question(&mut self) {
        let before = self.engine.position();
        self.engine.advance();
        if self.engine.position() != before {
            self.cursor = 0;
        }
    }

    pub fn scroll_results_down(&mut self) {
        let max = self.engine.total_questions().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Reset the engine and go straight back to the first question.
    pub fn restart(&mut self) {
        self.engine.reset();
        self.cursor = 0;
        self.result_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::with_questions(vec![
            Question::single("First?", &["a", "b", "c"], 1, "b is first"),
            Question::multiple("Vowels?", &["a", "b", "e"], &[0, 2], "a and e"),
        ])
    }

    #[test]
    fn test_welcome_until_started() {
        let mut app = app();
        assert_eq!(app.state(), AppState::Welcome);

        app.start_quiz();
        assert_eq!(app.state(), AppState::Quiz);
        assert_eq!(app.current_question_number(), 1);
    }

    #[test]
    fn test_cursor_wraps_around_options() {
        let mut app = app();
        app.start_quiz();

        app.move_cursor_up();
        assert_eq!(app.cursor(), 2);
        app.move_cursor_down();
        assert_eq!(app.cursor(), 0);
        app.move_cursor_down();
        assert_eq!(app.cursor(), 1);
    }

    #[test]
    fn test_choose_ignores_missing_option() {
        let mut app = app();
        app.start_quiz();

        app.choose(8);

        assert!(!app.engine().is_revealed());
        assert!(app.engine().selections().is_empty());
    }

    #[test]
    fn test_full_run_reaches_result_screen() {
        let mut app = app();
        app.start_quiz();

        app.move_cursor_down();
        app.next_question();
        assert_eq!(app.engine().position(), 0);
        assert_eq!(app.cursor(), 1);

        app.choose_at_cursor();
        assert_eq!(app.engine().score(), 1);
        app.next_question();
        assert_eq!(app.cursor(), 0);
        assert_eq!(app.engine().position(), 1);

        app.choose(0);
        app.choose(2);
        app.submit();
        assert_eq!(app.engine().score(), 2);
        app.next_question();

        assert_eq!(app.state(), AppState::Result);
    }

    #[test]
    fn test_results_scroll_is_bounded() {
        let mut app = app();
        app.scroll_results_up();
        assert_eq!(app.result_scroll(), 0);

        app.scroll_results_down();
        app.scroll_results_down();
        app.scroll_results_down();
        assert_eq!(app.result_scroll(), 1);
    }

    #[test]
    fn test_restart_returns_to_first_question() {
        let mut app = app();
        app.start_quiz();
        app.choose(0);
        app.next_question();
        app.choose(2);
        app.submit();
        app.next_question();
        assert_eq!(app.state(), AppState::Result);

        app.restart();

        assert_eq!(app.state(), AppState::Quiz);
        assert_eq!(app.engine().position(), 0);
        assert_eq!(app.engine().score(), 0);
    }
}
