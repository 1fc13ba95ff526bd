use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::model::{PageModel, Panel};

pub const UPLOAD_HEIGHT: u16 = 9;
pub const QUESTION_MIN_HEIGHT: u16 = 8;
pub const ZOTERO_HEIGHT: u16 = 10;
pub const LEGEND_HEIGHT: u16 = 1;

/// Layout information for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutInfo {
    pub upload_area: Option<Rect>,
    pub question_area: Option<Rect>,
    pub zotero_area: Option<Rect>,
    pub legend_area: Rect,
}

fn min_height(panel: Panel) -> u16 {
    match panel {
        Panel::Upload => UPLOAD_HEIGHT,
        Panel::Question => QUESTION_MIN_HEIGHT,
        Panel::Zotero => ZOTERO_HEIGHT,
    }
}

/// Panels to draw, top to bottom
///
/// When everything does not fit, panels above the scroll anchor are dropped
/// first so the anchor stays in view.
pub fn visible_panels(page: &PageModel, available: u16) -> Vec<Panel> {
    let mut panels: Vec<Panel> = [Panel::Upload, Panel::Question, Panel::Zotero]
        .into_iter()
        .filter(|p| page.is_panel_visible(*p))
        .collect();

    let total = |panels: &[Panel]| panels.iter().map(|p| min_height(*p)).sum::<u16>();

    while total(&panels) > available && panels.len() > 1 && panels[0] != page.scroll_anchor {
        panels.remove(0);
    }

    panels
}

/// Calculate the screen layout for all panels
pub fn calculate_layout(terminal_size: Rect, page: &PageModel) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(LEGEND_HEIGHT)])
        .split(terminal_size);

    let content_area = main_chunks[0];
    let legend_area = main_chunks[1];

    let panels = visible_panels(page, content_area.height);

    // The question panel grows to hold the answer; the others are fixed
    let constraints: Vec<Constraint> = panels
        .iter()
        .map(|p| match p {
            Panel::Question => Constraint::Min(QUESTION_MIN_HEIGHT),
            other => Constraint::Length(min_height(*other)),
        })
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(content_area);

    let mut info = LayoutInfo {
        upload_area: None,
        question_area: None,
        zotero_area: None,
        legend_area,
    };

    for (panel, area) in panels.iter().zip(chunks.iter()) {
        match panel {
            Panel::Upload => info.upload_area = Some(*area),
            Panel::Question => info.question_area = Some(*area),
            Panel::Zotero => info.zotero_area = Some(*area),
        }
    }

    info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout_only_upload() {
        let page = PageModel::new(true);
        let info = calculate_layout(Rect::new(0, 0, 80, 40), &page);
        assert!(info.upload_area.is_some());
        assert!(info.question_area.is_none());
        assert!(info.zotero_area.is_none());
        assert_eq!(info.legend_area.y, 39);
    }

    #[test]
    fn test_all_panels_fit() {
        let mut page = PageModel::new(true);
        page.question.visible = true;
        page.zotero.as_mut().unwrap().visible = true;
        assert_eq!(
            visible_panels(&page, 40),
            vec![Panel::Upload, Panel::Question, Panel::Zotero]
        );
    }

    #[test]
    fn test_short_terminal_keeps_anchor_in_view() {
        let mut page = PageModel::new(true);
        page.question.visible = true;
        page.zotero.as_mut().unwrap().visible = true;
        page.scroll_into_view(Panel::Question);
        assert_eq!(visible_panels(&page, 20), vec![Panel::Question, Panel::Zotero]);
    }

    #[test]
    fn test_anchor_never_dropped() {
        let mut page = PageModel::new(false);
        page.question.visible = true;
        assert_eq!(visible_panels(&page, 5), vec![Panel::Upload, Panel::Question]);
    }
}
