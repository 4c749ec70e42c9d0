use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::engine::{OptionClass, Outcome, QuizEngine};
use crate::models::Question;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    let Some(question) = engine.current_question() else {
        return;
    };
    let revealed = engine.is_revealed();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(if revealed { 7 } else { 0 }),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], app);
    render_prompt(frame, chunks[1], &question.prompt);
    if question.is_multiple_choice() && !revealed {
        render_hint(frame, chunks[2]);
    }
    render_options(frame, chunks[3], engine, question, app.cursor());
    if revealed {
        render_explanation(frame, chunks[4], engine, &question.explanation);
    }
    render_controls(frame, chunks[5], engine);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

    let progress = format!(
        "Question {}/{}",
        app.current_question_number(),
        app.engine().total_questions()
    );
    frame.render_widget(Paragraph::new(progress).fg(Color::DarkGray), left);

    let score = format!("Correct: {}", app.engine().score());
    frame.render_widget(
        Paragraph::new(score)
            .alignment(Alignment::Right)
            .fg(Color::Green),
        right,
    );
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str) {
    let widget = Paragraph::new(prompt)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_hint(frame: &mut Frame, area: Rect) {
    let widget =
        Paragraph::new("(select every correct option, then press s)").fg(Color::Yellow);
    frame.render_widget(widget, area);
}

fn option_style(class: OptionClass) -> Style {
    match class {
        OptionClass::Neutral => Style::default().fg(Color::Gray),
        OptionClass::Selected => Style::default().fg(Color::Cyan).bold(),
        OptionClass::Correct => Style::default().fg(Color::Green).bold(),
        OptionClass::IncorrectlyChosen => Style::default().fg(Color::Red).bold(),
    }
}

fn option_mark(class: OptionClass, multiple: bool) -> &'static str {
    match (class, multiple) {
        (OptionClass::Correct, _) => "[✓]",
        (OptionClass::IncorrectlyChosen, _) => "[✗]",
        (OptionClass::Selected, true) => "[x]",
        (OptionClass::Selected, false) => "(•)",
        (OptionClass::Neutral, true) => "[ ]",
        (OptionClass::Neutral, false) => "( )",
    }
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    engine: &QuizEngine,
    question: &Question,
    cursor: usize,
) {
    let multiple = question.is_multiple_choice();
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let class = engine.option_classification(index);
        let style = option_style(class);
        let marker = if index == cursor && !engine.is_revealed() {
            ">"
        } else {
            " "
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), Style::default().fg(Color::Cyan)),
            Span::styled(format!("{} ", option_mark(class, multiple)), style),
            Span::styled(format!("{}. ", index + 1), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_explanation(
    frame: &mut Frame,
    area: Rect,
    engine: &QuizEngine,
    explanation: &str,
) {
    let verdict = match engine.current_outcome() {
        Some(Outcome::Correct) => {
            Span::styled("✓ Correct!", Style::default().fg(Color::Green).bold())
        }
        _ => Span::styled("✗ Incorrect", Style::default().fg(Color::Red).bold()),
    };

    let content = vec![
        Line::from(verdict),
        Line::from(""),
        Line::from(explanation).fg(Color::White),
    ];

    let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Explanation ")
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, engine: &QuizEngine) {
    let controls = if engine.is_revealed() {
        if engine.is_last_question() {
            "n finish  ·  r restart  ·  q quit"
        } else {
            "n next question  ·  r restart  ·  q quit"
        }
    } else if engine.can_submit() {
        "j/k navigate  ·  space toggle  ·  s check answer  ·  q quit"
    } else if engine.is_multiple_choice() {
        "j/k navigate  ·  space toggle  ·  q quit"
    } else {
        "j/k navigate  ·  enter select  ·  1-9 pick  ·  q quit"
    };

    let widget = Paragraph::new(controls)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
