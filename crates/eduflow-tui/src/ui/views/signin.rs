use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use eduflow_core::models::Role;

use crate::app::App;
use crate::ui::render::centered_rect_fixed;
use crate::ui::styles;

/// Demo sign-in: pick a role, no password.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::muted_style());
    frame.render_widget(outer, area);

    let dialog = centered_rect_fixed(44, 12, area);
    frame.render_widget(Clear, dialog);

    let mut lines = vec![
        Line::from(Span::styled("  Choose a demo account", styles::highlight_style())),
        Line::from(""),
    ];

    for role in Role::ALL {
        let selected = role == app.signin_role;
        let marker = if selected { "▶" } else { " " };
        let style = if selected {
            styles::selected_style()
        } else {
            styles::list_item_style()
        };
        let name = app
            .directory
            .iter()
            .find(|identity| identity.role == role)
            .map(|identity| identity.name.as_str())
            .unwrap_or("unavailable");
        lines.push(Line::from(vec![
            Span::raw(format!("  {} ", marker)),
            Span::styled(format!("{:<9}", role.title()), style),
            Span::styled(format!(" {}", name), styles::muted_style()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Enter", styles::help_key_style()),
        Span::styled(" to sign in", styles::muted_style()),
    ]));

    let block = Block::default()
        .title(" Sign in ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    frame.render_widget(Paragraph::new(lines).block(block), dialog);
}
