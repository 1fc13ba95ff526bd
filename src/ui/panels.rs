//! Panel rendering
//!
//! One function per page panel. Each draws its own bordered block and places
//! the terminal cursor when one of its fields has focus.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::alert::render_alert;
use crate::model::{PageModel, Region, TextField, ZoteroPanel};
use crate::utils::{spinner_frame, truncate_to_width};

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn button_line(label: &str, focused: bool, loading: bool, tick: u64) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![Span::styled(format!("[ {} ]", label), style)];
    if loading {
        spans.push(Span::styled(
            format!("  {} working…", spinner_frame(tick)),
            Style::default().fg(Color::Yellow),
        ));
    }
    Line::from(spans)
}

/// Render a one-line labelled field, placing the cursor if it has focus
fn render_field(f: &mut Frame, area: Rect, label: &str, field: &TextField, focused: bool) {
    let prefix = format!("{}: ", label);
    let line = Line::from(vec![
        Span::styled(prefix.clone(), focus_style(focused)),
        Span::raw(field.value().to_string()),
    ]);
    f.render_widget(Paragraph::new(line), area);

    if focused {
        let prefix_width = u16::try_from(prefix.len()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(prefix_width)
            .saturating_add(field.cursor_column());
        f.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y));
    }
}

fn split_rows(area: Rect, rows: &[Constraint]) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(rows.to_vec())
        .split(area)
        .to_vec()
}

/// Upload panel: drop zone with path field, selected file, button, alert
pub fn render_upload_panel(f: &mut Frame, area: Rect, page: &PageModel, tick: u64) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 1. Upload a PDF ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = split_rows(
        inner,
        &[
            Constraint::Length(1), // hint
            Constraint::Length(3), // drop zone
            Constraint::Length(1), // selected file
            Constraint::Length(1), // button
            Constraint::Length(1), // alert
        ],
    );

    let upload = &page.upload;
    f.render_widget(
        Paragraph::new("Drag a file onto the terminal, or type a path and press Enter")
            .style(Style::default().fg(Color::DarkGray)),
        rows[0],
    );

    let focused = page.focus == Region::FileInput;
    let zone_style = if upload.drop_highlighted {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        focus_style(focused)
    };
    let zone = Block::default()
        .borders(Borders::ALL)
        .border_style(zone_style)
        .title(" Drop zone ");
    let zone_inner = zone.inner(rows[1]);
    f.render_widget(zone, rows[1]);
    render_field(f, zone_inner, Region::FileInput.label(), &upload.file_input, focused);

    let label_width = rows[2].width.saturating_sub(10) as usize;
    let selected = Line::from(vec![
        Span::styled("Selected: ", Style::default().fg(Color::Gray)),
        Span::raw(truncate_to_width(&upload.file_label, label_width)),
    ]);
    f.render_widget(Paragraph::new(selected), rows[2]);

    f.render_widget(
        Paragraph::new(button_line(
            Region::UploadButton.label(),
            page.focus == Region::UploadButton,
            upload.loading,
            tick,
        )),
        rows[3],
    );
    render_alert(f, rows[4], &upload.alert);
}

/// Question panel: question field, ask button, alert, answer
pub fn render_question_panel(f: &mut Frame, area: Rect, page: &PageModel, tick: u64) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 2. Ask a question ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = split_rows(
        inner,
        &[
            Constraint::Length(1), // question
            Constraint::Length(1), // button
            Constraint::Length(1), // alert
            Constraint::Min(0),    // answer
        ],
    );

    let question = &page.question;
    render_field(
        f,
        rows[0],
        Region::QuestionInput.label(),
        &question.input,
        page.focus == Region::QuestionInput,
    );
    f.render_widget(
        Paragraph::new(button_line(
            Region::AskButton.label(),
            page.focus == Region::AskButton,
            question.loading,
            tick,
        )),
        rows[1],
    );
    render_alert(f, rows[2], &question.alert);

    if question.answer_visible {
        let answer = Paragraph::new(question.answer.as_str())
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .title(" Answer ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(answer, rows[3]);
    }
}

/// Zotero panel: metadata form, collection selector, add button, alert
pub fn render_zotero_panel(f: &mut Frame, area: Rect, zotero: &ZoteroPanel, focus: Region) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 3. Add to Zotero ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = split_rows(inner, &[Constraint::Length(1); 8]);

    let fields = [
        (Region::DocTitle, &zotero.title),
        (Region::DocAuthors, &zotero.authors),
        (Region::DocYear, &zotero.year),
        (Region::DocDoi, &zotero.doi),
    ];
    for (row, (region, field)) in rows.iter().zip(fields) {
        render_field(f, *row, region.label(), field, focus == region);
    }

    let selector_focused = focus == Region::ZoteroCollections;
    let options = zotero.collections.options();
    let selected = &options[zotero.collections.selected_index()];
    let position = if zotero.collections.collection_count() > 0 {
        format!(
            "  ({}/{}, ↑/↓)",
            zotero.collections.selected_index(),
            zotero.collections.collection_count()
        )
    } else {
        String::new()
    };
    let selector = Line::from(vec![
        Span::styled(
            format!("{}: ", Region::ZoteroCollections.label()),
            focus_style(selector_focused),
        ),
        Span::styled(
            format!("‹ {} ›", selected.label),
            if selector_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            },
        ),
        Span::styled(position, Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(selector), rows[4]);

    f.render_widget(
        Paragraph::new(button_line(
            Region::AddToZoteroButton.label(),
            focus == Region::AddToZoteroButton,
            false,
            0,
        )),
        rows[6],
    );
    render_alert(f, rows[7], &zotero.alert);
}
