//! Frame rendering for the demo.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::theme;

pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_search_bar(frame, app, chunks[0]);
    draw_items(frame, app, chunks[1]);
    draw_help(frame, chunks[2]);

    if app.detail().is_some() {
        draw_detail(frame, app, area);
    }
}

fn draw_search_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let search = Paragraph::new(app.query()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border())
            .title(Span::styled("Search", theme::title())),
    );
    frame.render_widget(search, area);
}

fn draw_items(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let entries: Vec<ListItem> = app
        .list()
        .items()
        .iter()
        .map(|item| ListItem::new(item.name.clone()))
        .collect();
    let count = entries.len();

    let list = List::new(entries)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border())
                .title(Span::styled(format!("Items ({count})"), theme::title())),
        )
        .highlight_style(theme::highlight())
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, app.list_mut().cursor_mut());
}

fn draw_help(frame: &mut Frame<'_>, area: Rect) {
    let help = Line::from(Span::styled(
        " type to search | Up/Down move | Enter select | Esc back | Ctrl-Q quit",
        theme::dim(),
    ));
    frame.render_widget(Paragraph::new(help), area);
}

fn draw_detail(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(detail) = app.detail() else {
        return;
    };

    let popup = centered_rect(60, 50, area);
    frame.render_widget(Clear, popup);

    let body = Paragraph::new(detail.body.clone())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border())
                .title(Span::styled(detail.title.clone(), theme::title())),
        );
    frame.render_widget(body, popup);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
