use ratatui::Frame;

use super::{layout, legend, panels};
use crate::model::PageModel;

/// Main render function - draws every visible panel and the legend
pub fn render(f: &mut Frame, page: &PageModel, base_url: &str, tick: u64) {
    let layout_info = layout::calculate_layout(f.area(), page);

    if let Some(area) = layout_info.upload_area {
        panels::render_upload_panel(f, area, page, tick);
    }

    if let Some(area) = layout_info.question_area {
        panels::render_question_panel(f, area, page, tick);
    }

    if let (Some(area), Some(zotero)) = (layout_info.zotero_area, page.zotero.as_ref()) {
        panels::render_zotero_panel(f, area, zotero, page.focus);
    }

    legend::render_legend(f, layout_info.legend_area, page.focus, base_url);
}
