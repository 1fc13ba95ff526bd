use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::Region;

/// Build hotkey spans for the focused region (extracted for testability)
pub fn build_hotkey_spans(focus: Region) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![
        Span::styled("Tab/⇧Tab", Style::default().fg(Color::Yellow)),
        Span::raw(":Move  "),
    ];

    if focus.is_button() {
        hotkey_spans.extend(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(":Press  "),
        ]);
    }

    match focus {
        Region::FileInput => hotkey_spans.extend(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(":Select file  "),
            Span::styled("Drag & drop", Style::default().fg(Color::Yellow)),
            Span::raw(":Select file  "),
        ]),
        Region::QuestionInput => hotkey_spans.extend(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(":Ask  "),
        ]),
        Region::ZoteroCollections => hotkey_spans.extend(vec![
            Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
            Span::raw(":Collection  "),
        ]),
        _ => {}
    }

    hotkey_spans.extend(vec![
        Span::styled("^C/^Q", Style::default().fg(Color::Yellow)),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, focus: Region, base_url: &str) {
    let mut spans = build_hotkey_spans(focus);
    spans.push(Span::styled(
        format!("  │ {}", base_url),
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
