use super::Screen;
use drill_core::{HintLevel, HistoryEntry, LoadError, SessionView, HISTORY_LIMIT};
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE: &str = "将軍";
const INPUT_PLACEHOLDER: &str = "英語";
const CONTENT_WIDTH: u16 = 90;

pub fn draw(frame: &mut Frame, screen: &Screen) {
    let background = match screen {
        Screen::Failed(_) => Color::Red,
        _ => Color::Indexed(234),
    };
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(TITLE.bold()).centered())
        .style(Style::default().bg(background));
    let inner = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let [content] = Layout::horizontal([Constraint::Max(CONTENT_WIDTH + 2)])
        .flex(Flex::Center)
        .areas(inner);

    match screen {
        Screen::Loading(pending) => draw_loading(frame, content, pending.path()),
        Screen::Failed(error) => draw_error(frame, content, error),
        Screen::Drill(session) => draw_drill(frame, content, &session.view()),
    }
}

fn draw_loading(frame: &mut Frame, area: Rect, path: &Path) {
    let [middle] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let text = Line::from(format!("Loading JSON: {}", path.display()).bold()).centered();
    frame.render_widget(Paragraph::new(text), middle);
}

fn draw_error(frame: &mut Frame, area: Rect, error: &LoadError) {
    let [middle] = Layout::vertical([Constraint::Length(3)])
        .flex(Flex::Center)
        .areas(area);
    let text = Paragraph::new(vec![
        Line::from(error.to_string().bold()).centered(),
        Line::from(""),
        Line::from("Press Esc to quit").centered(),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(text, middle);
}

fn draw_drill(frame: &mut Frame, area: Rect, view: &SessionView<'_>) {
    let [prompt_area, label_area, history_area, footer_area] = Layout::vertical([
        Constraint::Length(8),
        Constraint::Length(1),
        Constraint::Length(HISTORY_LIMIT as u16 + 2),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(area);

    draw_prompt(frame, prompt_area, view);
    frame.render_widget(Paragraph::new(Line::from("履歴".bold()).centered()), label_area);
    draw_history(frame, history_area, view);
    draw_footer(frame, footer_area, view.hint);
}

fn draw_prompt(frame: &mut Frame, area: Rect, view: &SessionView<'_>) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [fields_area, input_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).areas(inner);

    let mut heading = format!("漢字：{}", view.symbol);
    if let Some(phonetic) = view.phonetic {
        heading.push_str(&format!("（{phonetic}）"));
    }
    if let Some(translation) = view.translation {
        heading.push_str(&format!("= {translation}"));
    }
    let fields = Paragraph::new(vec![
        Line::from(heading.bold()),
        Line::from(format!("例文：{}", view.example_source).bold()),
        Line::from(format!("POS: {}", view.part_of_speech).bold()),
    ]);
    frame.render_widget(fields, fields_area);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    // One column stays free for the cursor after the text.
    let text_width = input_area.width.saturating_sub(3) as usize;
    let visible = visible_tail(view.input, text_width);
    let input_line = if view.input.is_empty() {
        Line::from(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default().add_modifier(Modifier::DIM),
        ))
    } else {
        Line::from(visible)
    };
    frame.render_widget(Paragraph::new(input_line).block(input_block), input_area);

    let offset = u16::try_from(visible.width()).unwrap_or(u16::MAX);
    let cursor_x = input_area
        .x
        .saturating_add(1)
        .saturating_add(offset)
        .min(input_area.right().saturating_sub(2));
    frame.set_cursor_position((cursor_x, input_area.y.saturating_add(1)));
}

/// Longest suffix of `input` that fits in `max_width` terminal columns.
fn visible_tail(input: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = input.len();
    for (index, c) in input.char_indices().rev() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            break;
        }
        start = index;
    }
    &input[start..]
}

fn history_line(entry: &HistoryEntry, show_phonetic: bool) -> Line<'static> {
    let phonetic = if show_phonetic {
        format!("（{}）", entry.phonetic)
    } else {
        String::new()
    };
    let mut text = format!(
        "{}. {}{}= {} ({})",
        entry.sequence_number, entry.symbol, phonetic, entry.translation, entry.example_target
    );
    if !entry.correct {
        let percent = (entry.similarity * 100.0).round() as u32;
        text.push_str(&format!(" [you: {}, {percent}%]", entry.answer.trim()));
    } else if entry.matched_first_alternative {
        text.push_str(" [first gloss]");
    }
    let color = if entry.correct { Color::Green } else { Color::Red };
    Line::from(Span::styled(text, Style::default().fg(color)))
}

fn draw_history(frame: &mut Frame, area: Rect, view: &SessionView<'_>) {
    let mut lines: Vec<Line> = view
        .history
        .iter()
        .map(|entry| history_line(entry, view.history_phonetic))
        .collect();
    lines.resize(HISTORY_LIMIT, Line::from(" "));

    let history = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(history, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, hint: HintLevel) {
    let hint = match hint {
        HintLevel::Off => "off",
        HintLevel::Partial => "kana",
        HintLevel::Full => "kana + answer",
    };
    let footer = Line::from(vec![
        Span::raw("Enter: check  Tab: hint  Esc: quit  |  hint: "),
        Span::styled(hint, Style::default().fg(Color::Yellow)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(footer), area);
}
