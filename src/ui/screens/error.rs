use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::import::{ErrorKind, StatementError};
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, err: &StatementError) {
    let title = match err.kind() {
        ErrorKind::NotFound => " Statement Not Found ",
        ErrorKind::Format => " Invalid Statement ",
        ErrorKind::Unexpected => " Unexpected Error ",
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(err.user_message(), theme::error_style())),
        Line::from(""),
        Line::from(Span::styled(
            "Fix the file and press r to reload, or q to quit",
            theme::dim_style(),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::RED))
        .title(Span::styled(title, theme::error_style()));

    let msg = Paragraph::new(text)
        .centered()
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(msg, area);
}
