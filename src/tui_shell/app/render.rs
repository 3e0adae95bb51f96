use std::time::Instant;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::feed::{FeedStatus, PageKind};
use crate::model::{Route, display_date};
use crate::session::SESSION_EXPIRED_MESSAGE;

use super::App;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
            Constraint::Length(3),
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);
    match app.route {
        Route::Landing => draw_landing(frame, app, chunks[1]),
        Route::Login => draw_login(frame, app, chunks[1]),
        Route::MyPage => draw_my_page(frame, app, chunks[1]),
        Route::Event(_) => draw_event(frame, app, chunks[1]),
        Route::SessionExpired => draw_expired(frame, app, chunks[1]),
    }
    draw_status(frame, app, chunks[2]);
    draw_input(frame, app, chunks[3]);
}

fn draw_header(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            "PickDong",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(route_label(app.route), Style::default().fg(Color::Cyan)),
    ];
    match app.signed_in_as() {
        Some(email) => {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(email, Style::default().fg(Color::Green)));
        }
        None => {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                "(not signed in)",
                Style::default().fg(Color::Gray),
            ));
        }
    }
    if app.is_fetching() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("...", Style::default().fg(Color::Yellow)));
    }
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn route_label(route: Route) -> String {
    match route {
        Route::Landing => "home".to_string(),
        Route::Login => "sign in".to_string(),
        Route::MyPage => "my page".to_string(),
        Route::Event(id) => format!("event {}", id),
        Route::SessionExpired => "session expired".to_string(),
    }
}

fn draw_landing(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let next = if app.signed_in_as().is_some() {
        "Enter: my page"
    } else {
        "Enter: sign in"
    };
    let lines = vec![
        Line::from(Span::styled(
            "Festivals in the regions you follow",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Subscribe to sub-regions and get a feed of their events."),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}   q: quit", next),
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn draw_login(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from("1. Open this URL in a browser and sign in with Google:"),
        Line::from(""),
        Line::from(Span::styled(
            app.login_url.as_str(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from("2. Paste the address you were redirected to below and press Enter."),
        Line::from(Span::styled("Esc: back", Style::default().fg(Color::Gray))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Sign in")),
        area,
    );
}

fn draw_my_page(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(0)])
        .split(area);

    let mut lines = Vec::new();
    if app.dashboard.summary.is_empty() {
        lines.push(Line::from(Span::styled(
            "(no subscriptions)",
            Style::default().fg(Color::Gray),
        )));
    }
    for (region, subs) in app.dashboard.summary.iter() {
        lines.push(Line::from(Span::styled(
            region,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for sub in subs {
            lines.push(Line::from(format!("  {}", sub)));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "email: {}",
        if app.email.enabled() { "on" } else { "off" }
    )));
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Regions ({})", app.dashboard.summary.total())),
        ),
        cols[0],
    );

    let feed = &app.dashboard.feed;
    let items: Vec<ListItem> = feed
        .tours()
        .iter()
        .map(|t| {
            ListItem::new(Line::from(vec![
                Span::raw(t.title.as_str()),
                Span::raw("  "),
                Span::styled(
                    format!("{} {}", t.area, t.sigun_gu),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw("  "),
                Span::styled(t.date_range(), Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    let title = match feed.status() {
        FeedStatus::Empty => "Events".to_string(),
        FeedStatus::Loading(PageKind::Initial) => "Events (loading...)".to_string(),
        FeedStatus::Loading(PageKind::Continuation) => {
            format!("Events ({}, loading more...)", feed.tours().len())
        }
        FeedStatus::Loaded if feed.has_next() => format!("Events ({}+)", feed.tours().len()),
        FeedStatus::Loaded => format!("Events ({})", feed.tours().len()),
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default();
    if !feed.tours().is_empty() {
        state.select(Some(app.selected));
    }
    frame.render_stateful_widget(list, cols[1], &mut state);
}

fn draw_event(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let Some(detail) = app.detail.as_ref() else {
        frame.render_widget(
            Paragraph::new("loading...").block(Block::default().borders(Borders::ALL)),
            area,
        );
        return;
    };

    let mut lines = vec![Line::from(Span::styled(
        detail.title.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if !detail.keywords.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("#{}", detail.keywords.join(" #")),
            Style::default().fg(Color::Yellow),
        )));
    }
    lines.push(Line::from(""));

    let ov = &detail.overview;
    let period = format!(
        "{} ~ {}",
        display_date(&ov.event_start_date),
        display_date(&ov.event_end_date)
    );
    for (label, value) in [
        ("period", period.as_str()),
        ("hours", ov.business_hours.as_str()),
        ("duration", ov.expected_duration.as_str()),
        ("cost", ov.cost.as_str()),
        ("place", detail.directions.event_place.as_str()),
        ("address", detail.directions.road_address.as_str()),
        ("phone", detail.directions.telephone.as_str()),
    ] {
        if value.trim().is_empty() || value.trim() == "~" {
            continue;
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{:<9}", label), Style::default().fg(Color::Gray)),
            Span::raw(value),
        ]));
    }
    for info in &detail.detail_info {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            info.info_name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(info.info_text.as_str()));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Esc: back")),
        area,
    );
}

fn draw_expired(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let secs = app
        .notice
        .map(|n| n.remaining(Instant::now()).as_secs_f32().ceil() as u32)
        .unwrap_or(0);
    let lines = vec![
        Line::from(Span::styled(
            SESSION_EXPIRED_MESSAGE,
            Style::default().fg(Color::Red),
        )),
        Line::from(""),
        Line::from(format!("Returning to the home screen in {}s.", secs)),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn draw_status(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let line = match &app.status {
        Some(s) => {
            let color = if s.error { Color::Red } else { Color::White };
            Line::from(Span::styled(s.text.as_str(), Style::default().fg(color)))
        }
        None => Line::from(""),
    };
    frame.render_widget(
        Paragraph::new(line)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::TOP)),
        area,
    );
}

fn draw_input(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let title = match app.route {
        Route::Login => "callback URL",
        Route::MyPage => "command (help)",
        _ => "",
    };
    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Cyan)),
        Span::raw(app.input.buf.as_str()),
    ]))
    .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(input, area);

    if matches!(app.route, Route::Login | Route::MyPage) {
        let before = app.input.buf[..app.input.cursor].chars().count() as u16;
        frame.set_cursor_position((area.x + 3 + before, area.y + 1));
    }
}
