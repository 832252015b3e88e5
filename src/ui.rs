use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::{App, Screen},
    round::Phase,
    scoring::WordMark,
};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

/// Lines `text` needs when wrapped to `width` columns.
fn wrapped_lines(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    (text.width() as f64 / width as f64).ceil().max(1.0) as u16
}

/// Like [`wrapped_lines`], but each newline starts a fresh line.
fn text_lines(text: &str, width: u16) -> u16 {
    text.split('\n')
        .map(|line| wrapped_lines(line, width))
        .fold(0u16, u16::saturating_add)
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.screen {
            Screen::Typing => render_typing(self, area, buf),
            Screen::Results => render_results(self, area, buf),
        }
    }
}

fn render_typing(app: &App, area: Rect, buf: &mut Buffer) {
    let controller = &app.controller;

    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
    let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);
    let dim_bold_style = Style::default()
        .patch(bold_style)
        .add_modifier(Modifier::DIM);
    let underlined_bold_style = Style::default()
        .patch(bold_style)
        .add_modifier(Modifier::UNDERLINED);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);

    let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2);
    let prompt_text = controller.prompt().iter().join(" ");
    // borders take two lines on top of the wrapped prompt
    let prompt_lines = wrapped_lines(&prompt_text, max_chars_per_line.saturating_sub(2)) + 2;
    let input_lines = text_lines(controller.typed_text(), max_chars_per_line.saturating_sub(2))
        .max(3)
        + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // padding
            Constraint::Length(prompt_lines),
            Constraint::Length(input_lines),
            Constraint::Length(1), // time left
            Constraint::Min(0),
            Constraint::Length(1), // legend
        ])
        .split(area);

    Paragraph::new(Span::styled("typesprint", bold_style))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

    let marks = controller.word_marks();
    let styled_words = controller
        .prompt()
        .iter()
        .zip(marks)
        .map(|(word, mark)| {
            let style = match mark {
                WordMark::Correct => green_bold_style,
                WordMark::Incorrect => red_bold_style,
                WordMark::Current => underlined_bold_style,
                WordMark::Pending => dim_bold_style,
            };
            Span::styled(word.as_str(), style)
        });
    let spans = Itertools::intersperse(styled_words, Span::raw(" ")).collect::<Vec<Span>>();

    Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Prompt"))
        .wrap(Wrap { trim: true })
        .render(chunks[2], buf);

    let typed = if controller.typed_text().is_empty() && controller.phase() == Phase::Idle {
        Paragraph::new(Span::styled("Start typing here...", italic_style.patch(dim_bold_style)))
    } else {
        Paragraph::new(controller.typed_text())
    };
    typed
        .block(Block::default().borders(Borders::ALL).title("Your input"))
        .wrap(Wrap { trim: false })
        .render(chunks[3], buf);

    Paragraph::new(Line::from(vec![
        Span::raw("Time left: "),
        Span::styled(format!("{}s", controller.remaining_secs()), bold_style),
    ]))
    .alignment(Alignment::Center)
    .render(chunks[4], buf);

    let legend = if controller.has_started() {
        "(tab)restart (ctrl+f)inish (esc)ape"
    } else {
        "type or (ctrl+s)tart the clock · (tab)new prompt (esc)ape"
    };
    Paragraph::new(Span::styled(legend, italic_style))
        .alignment(Alignment::Center)
        .render(chunks[6], buf);
}

fn render_results(app: &App, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(4), // score box
            Constraint::Min(0),
            Constraint::Length(1), // legend
        ])
        .split(area);

    let (wpm, accuracy) = app
        .controller
        .result()
        .map(|r| (r.wpm, r.accuracy))
        .unwrap_or_default();

    let score = Paragraph::new(vec![
        Line::from(vec![
            Span::raw("WPM: "),
            Span::styled(wpm.to_string(), bold_style.fg(Color::Blue)),
        ]),
        Line::from(vec![
            Span::raw("Accuracy: "),
            Span::styled(format!("{accuracy}%"), bold_style.fg(Color::Green)),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL).title("Results"))
    .alignment(Alignment::Center);
    score.render(chunks[1], buf);

    Paragraph::new(Span::styled("(r)estart (q)uit", italic_style))
        .alignment(Alignment::Center)
        .render(chunks[3], buf);
}
