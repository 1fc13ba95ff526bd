use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{Alert, Severity};

/// Styled line for an alert; empty when hidden
pub fn alert_line(alert: &Alert) -> Line<'_> {
    if !alert.is_visible() {
        return Line::default();
    }

    let (icon, color) = match alert.severity() {
        Some(Severity::Error) => ("✗ ", Color::Red),
        Some(Severity::Success) => ("✓ ", Color::Green),
        None => ("", Color::Gray),
    };

    Line::from(vec![
        Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(alert.text(), Style::default().fg(color)),
    ])
}

/// Render an alert region (single line)
pub fn render_alert(f: &mut Frame, area: Rect, alert: &Alert) {
    f.render_widget(Paragraph::new(alert_line(alert)), area);
}
