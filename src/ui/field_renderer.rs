//! Field rendering utilities

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// How an input box is drawn
pub struct InputConfig<'a> {
    pub label: &'a str,
    pub value: &'a str,
    /// Shown greyed out while the value is empty
    pub placeholder: &'a str,
    pub is_active: bool,
    pub is_multiline: bool,
}

/// Draw an input box with a trailing cursor when active
pub fn draw_input(frame: &mut Frame, area: Rect, config: InputConfig) {
    let accent = if config.is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let cursor = Span::styled(if config.is_active { "▌" } else { "" }, Style::default().fg(accent));

    let mut lines: Vec<Line> = if config.value.is_empty() {
        vec![Line::from(Span::styled(
            config.placeholder.to_string(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))]
    } else if config.is_multiline {
        // split('\n') rather than lines() so a trailing newline shows as an empty row
        config
            .value
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect()
    } else {
        vec![Line::from(config.value.to_string())]
    };

    if config.is_active {
        if config.value.is_empty() {
            lines[0].spans.insert(0, cursor);
        } else if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
    }

    let block = Block::default()
        .title(format!(" {} ", config.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Keep the last row, where the cursor sits, in view
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    let rows = paragraph.line_count(inner.width);
    let scroll = rows.saturating_sub(usize::from(inner.height));
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    frame.render_widget(paragraph.scroll((scroll, 0)), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(config: InputConfig, height: u16) -> Vec<String> {
        let backend = TestBackend::new(30, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_input(frame, frame.area(), config))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..30u16).map(|x| buffer[(x, y)].symbol().to_string()).collect())
            .collect()
    }

    #[test]
    fn test_placeholder_when_empty() {
        let rows = render(
            InputConfig {
                label: "Name",
                value: "",
                placeholder: "Enter your name",
                is_active: false,
                is_multiline: false,
            },
            3,
        );
        assert!(rows[0].contains(" Name "));
        assert!(rows[1].contains("Enter your name"));
    }

    #[test]
    fn test_value_with_cursor() {
        let rows = render(
            InputConfig {
                label: "Name",
                value: "Ada",
                placeholder: "Enter your name",
                is_active: true,
                is_multiline: false,
            },
            3,
        );
        assert!(rows[1].contains("Ada▌"));
        assert!(!rows[1].contains("Enter your name"));
    }

    #[test]
    fn test_multiline_value_keeps_rows() {
        let rows = render(
            InputConfig {
                label: "Message",
                value: "hi\nthere",
                placeholder: "",
                is_active: false,
                is_multiline: true,
            },
            5,
        );
        assert!(rows[1].contains("hi"));
        assert!(rows[2].contains("there"));
    }

    #[test]
    fn test_long_value_scrolls_to_cursor() {
        let value = format!("{}end", "a".repeat(40));
        let rows = render(
            InputConfig {
                label: "Name",
                value: &value,
                placeholder: "",
                is_active: true,
                is_multiline: false,
            },
            3,
        );
        assert!(rows[1].contains("end▌"));
    }

    #[test]
    fn test_tall_message_scrolls_to_last_row() {
        let rows = render(
            InputConfig {
                label: "Message",
                value: "l1\nl2\nl3\nl4",
                placeholder: "",
                is_active: true,
                is_multiline: true,
            },
            4,
        );
        assert!(rows[1].contains("l3"));
        assert!(rows[2].contains("l4▌"));
        assert!(!rows.iter().any(|row| row.contains("l1")));
    }
}
