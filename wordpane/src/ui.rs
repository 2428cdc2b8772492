use dictionary::{PartOfSpeech, Word, WordMeaning};
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, Status};

// only this many definitions per meaning make it onto the screen
const MAX_DEFINITIONS: usize = 3;

pub fn draw(frame: &mut Frame, app: &App) {
    let [input_area, body_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(frame.area());
    draw_input(frame, app, input_area);
    match &app.status {
        Status::Idle => {}
        Status::Loading => {
            frame.render_widget(Paragraph::new("looking it up...").dim(), body_area);
        }
        Status::Error(message) => {
            frame.render_widget(Paragraph::new(message.as_str()).red(), body_area);
        }
        Status::Success(word) => frame.render_widget(result_view(word), body_area),
    }
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.query.as_str())
        .block(Block::bordered().title("word (Enter to look up, Esc to quit)"));
    frame.render_widget(input, area);
    frame.set_cursor_position(Position::new(
        area.x + app.query.chars().count() as u16 + 1,
        area.y + 1,
    ));
}

fn result_view(word: &Word) -> Paragraph<'_> {
    let mut lines = Vec::new();
    let mut heading = vec![Span::styled(
        word.word.as_str(),
        Style::new().add_modifier(Modifier::BOLD),
    )];
    if let Some(text) = word.phonetic_text() {
        heading.push(Span::raw("  "));
        heading.push(Span::styled(text, Style::new().fg(Color::Cyan)));
    }
    lines.push(Line::from(heading));
    if word.audio_url().is_some() {
        lines.push(Line::from(Span::styled(
            "ctrl+p to hear the pronunciation",
            Style::new().add_modifier(Modifier::DIM),
        )));
    }
    if let Some(origin) = &word.origin {
        lines.push(Line::from(format!("origin: {origin}")));
    }
    for meaning in &word.meanings {
        lines.push(Line::default());
        meaning_lines(meaning, &mut lines);
    }
    Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false })
}

fn meaning_lines<'a>(meaning: &'a WordMeaning, lines: &mut Vec<Line<'a>>) {
    lines.push(Line::from(Span::styled(
        meaning.part_of_speech.label(),
        part_of_speech_style(&meaning.part_of_speech),
    )));
    for (index, definition) in meaning.definitions.iter().take(MAX_DEFINITIONS).enumerate() {
        lines.push(Line::from(format!(
            "  {}. {}",
            index + 1,
            definition.definition
        )));
        if let Some(example) = &definition.example {
            lines.push(Line::from(Span::styled(
                format!("     \"{example}\""),
                Style::new().add_modifier(Modifier::ITALIC | Modifier::DIM),
            )));
        }
    }
    if !meaning.synonyms.is_empty() {
        lines.push(Line::from(format!(
            "  synonyms: {}",
            meaning.synonyms.join(", ")
        )));
    }
    if !meaning.antonyms.is_empty() {
        lines.push(Line::from(format!(
            "  antonyms: {}",
            meaning.antonyms.join(", ")
        )));
    }
}

fn part_of_speech_style(part_of_speech: &PartOfSpeech) -> Style {
    let color = match part_of_speech {
        PartOfSpeech::Noun => Color::Yellow,
        PartOfSpeech::Pronoun => Color::Cyan,
        PartOfSpeech::Verb => Color::Green,
        PartOfSpeech::Adjective => Color::Magenta,
        PartOfSpeech::Adverb => Color::Blue,
        PartOfSpeech::Preposition => Color::LightRed,
        PartOfSpeech::Conjunction => Color::LightBlue,
        PartOfSpeech::Interjection => Color::LightMagenta,
        PartOfSpeech::Other(_) => Color::White,
    };
    Style::new().fg(color).add_modifier(Modifier::BOLD)
}
