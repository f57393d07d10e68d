//! Variation selector rendering.
//!
//! Turns a `RenderPlan` into styled lines and registers a hit area for each
//! option chip and affordance it draws. Three layouts are supported:
//!
//! - chip row (wrapping at the terminal width)
//! - dropdown (current value, then one option per line)
//! - slider (one page of chips between `‹` and `›`)

use std::ops::Range;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::DisplayConfig;
use crate::controller::{LayoutMode, RenderPlan};
use crate::models::{SelectionState, SelectorOption, Variation};
use crate::state::SelectorSession;

use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::LayoutContext;
use super::theme::{
    COLOR_ACCENT, COLOR_AFFORDANCE, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_OPTION, COLOR_SUMMARY,
};

/// Marker in front of the selected option
pub const SELECTED_MARKER: &str = "▶ ";
const UNSELECTED_MARKER: &str = "  ";
const SWATCH: &str = "■ ";
const DROPDOWN_MARKER: &str = "▾ ";
const ELLIPSIS: char = '…';

/// Everything needed to draw one variation.
#[derive(Debug, Clone, Copy)]
pub struct VariationView<'a> {
    pub variation: &'a Variation,
    pub plan: &'a RenderPlan,
    pub selection: &'a SelectionState,
    pub config: &'a DisplayConfig,
    pub missing_selection: bool,
    pub slider_page: usize,
}

/// Page of a slider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderWindow {
    /// Indices of the visible options on this page
    pub range: Range<usize>,
    /// Current page, clamped to the last page
    pub page: usize,
    pub pages: usize,
}

impl SliderWindow {
    pub fn new(len: usize, per_page: usize, page: usize) -> Self {
        let per_page = per_page.max(1);
        let pages = len.div_ceil(per_page).max(1);
        let page = page.min(pages - 1);
        let start = (page * per_page).min(len);
        let end = (start + per_page).min(len);
        Self {
            range: start..end,
            page,
            pages,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.pages
    }
}

/// Truncate a label to `max_width` display columns, ending in an ellipsis.
pub fn truncate_label(label: &str, max_width: usize) -> String {
    if label.width() <= max_width {
        return label.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut truncated = String::new();
    let mut used = 0;
    for c in label.chars() {
        let c_width = c.width().unwrap_or(0);
        if used + c_width > budget {
            break;
        }
        truncated.push(c);
        used += c_width;
    }
    truncated.push(ELLIPSIS);
    truncated
}

fn spans_width(spans: &[Span<'_>]) -> u16 {
    spans.iter().map(|span| span.width()).sum::<usize>() as u16
}

fn option_style(option: &SelectorOption, selected: bool) -> Style {
    let style = if option.impossible {
        Style::default().fg(COLOR_DIM).add_modifier(Modifier::CROSSED_OUT)
    } else if !option.available {
        Style::default().fg(COLOR_DIM)
    } else if selected {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_OPTION)
    };

    if selected {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

fn option_chip(option: &SelectorOption, selected: bool, display_image: bool, max_width: usize) -> Vec<Span<'static>> {
    let style = option_style(option, selected);
    let marker = if selected { SELECTED_MARKER } else { UNSELECTED_MARKER };

    let mut spans = vec![Span::styled(marker, Style::default().fg(COLOR_ACCENT))];
    if display_image {
        spans.push(Span::styled(SWATCH, style));
    }
    spans.push(Span::styled(truncate_label(&option.label, max_width), style));
    spans
}

fn select_action(variation: &Variation, option: &SelectorOption) -> ClickAction {
    ClickAction::SelectOption {
        variation: variation.name.clone(),
        label: option.label.clone(),
    }
}

/// Lays spans out left to right, wrapping at the row width and registering
/// hit areas at the position each item lands on.
struct RowBuilder<'r> {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    cursor: u16,
    area: Rect,
    registry: &'r mut HitAreaRegistry,
}

impl<'r> RowBuilder<'r> {
    fn new(area: Rect, registry: &'r mut HitAreaRegistry) -> Self {
        Self {
            lines: Vec::new(),
            current: Vec::new(),
            cursor: 0,
            area,
            registry,
        }
    }

    fn push(&mut self, spans: Vec<Span<'static>>, action: Option<ClickAction>) {
        let width = spans_width(&spans);
        if !self.current.is_empty() {
            if self.cursor.saturating_add(1).saturating_add(width) > self.area.width {
                self.new_line();
            } else {
                self.current.push(Span::raw(" "));
                self.cursor += 1;
            }
        }

        if let Some(action) = action {
            let x = self.area.x.saturating_add(self.cursor);
            let y = self.area.y.saturating_add(self.lines.len() as u16);
            self.registry.register(Rect::new(x, y, width, 1), action);
        }

        self.current.extend(spans);
        self.cursor = self.cursor.saturating_add(width);
    }

    /// Close the current line, if anything is on it.
    fn new_line(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.current)));
            self.cursor = 0;
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.new_line();
        self.lines
    }
}

fn header_line(view: &VariationView<'_>) -> Option<Line<'static>> {
    if !view.config.show_label {
        return None;
    }

    let mut spans = vec![Span::styled(
        view.variation.name.clone(),
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];
    if let Some(summary) = &view.plan.selection_summary {
        spans.push(Span::styled(": ", Style::default().fg(COLOR_DIM)));
        spans.push(Span::styled(summary.clone(), Style::default().fg(COLOR_SUMMARY)));
    }
    if view.missing_selection {
        spans.push(Span::styled(
            " !",
            Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
        ));
    }
    Some(Line::from(spans))
}

fn push_chips(row: &mut RowBuilder<'_>, view: &VariationView<'_>, options: &[SelectorOption], max_label: usize) {
    for option in options {
        let selected = view.selection.is_selected(&option.label);
        row.push(
            option_chip(option, selected, view.plan.display_image, max_label),
            Some(select_action(view.variation, option)),
        );
    }
}

fn push_affordances(row: &mut RowBuilder<'_>, view: &VariationView<'_>) {
    let style = Style::default().fg(COLOR_AFFORDANCE);
    let variation = view.variation.name.clone();

    if view.plan.show_expand_affordance {
        row.push(
            vec![Span::styled(format!("+ {} more", view.plan.hidden_count), style)],
            Some(ClickAction::ExpandOptions {
                variation: variation.clone(),
            }),
        );
    }
    if view.plan.show_go_to_product_affordance {
        row.push(
            vec![Span::styled("→ product", style)],
            Some(ClickAction::GoToProduct { variation }),
        );
    }
}

fn arrow(symbol: &'static str, enabled: bool) -> Vec<Span<'static>> {
    let color = if enabled { COLOR_ACCENT } else { COLOR_DIM };
    vec![Span::styled(symbol, Style::default().fg(color))]
}

/// Render one variation into `area` (its x, y and width are used).
///
/// Returns no lines for an empty plan.
pub fn render_variation(
    view: &VariationView<'_>,
    ctx: &LayoutContext,
    area: Rect,
    registry: &mut HitAreaRegistry,
) -> Vec<Line<'static>> {
    if view.plan.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    if let Some(header) = header_line(view) {
        lines.push(header);
    }

    let body_area = Rect::new(area.x, area.y.saturating_add(lines.len() as u16), area.width, 1);
    let max_label = ctx.max_label_width();
    let plan = view.plan;
    let mut row = RowBuilder::new(body_area, registry);

    match plan.layout() {
        LayoutMode::Dropdown => {
            let current = view
                .selection
                .selected_label()
                .or_else(|| plan.visible_options.first().map(|o| o.label.as_str()))
                .unwrap_or_default();
            row.push(
                vec![
                    Span::styled(DROPDOWN_MARKER, Style::default().fg(COLOR_ACCENT)),
                    Span::styled(truncate_label(current, max_label), Style::default().fg(COLOR_OPTION)),
                ],
                None,
            );
            row.new_line();
            for option in &plan.visible_options {
                push_chips(&mut row, view, std::slice::from_ref(option), max_label);
                row.new_line();
            }
        }
        LayoutMode::Slider => {
            let per_page = ctx.resolve(&view.config.slider_items_per_page);
            let window = SliderWindow::new(plan.visible_options.len(), per_page, view.slider_page);
            let variation = &view.variation.name;

            let previous = window.has_previous().then(|| ClickAction::SliderPage {
                variation: variation.clone(),
                page: window.page - 1,
            });
            row.push(arrow("‹", previous.is_some()), previous);
            push_chips(&mut row, view, &plan.visible_options[window.range.clone()], max_label);
            let next = window.has_next().then(|| ClickAction::SliderPage {
                variation: variation.clone(),
                page: window.page + 1,
            });
            row.push(arrow("›", next.is_some()), next);
            row.push(
                vec![Span::styled(
                    format!("{}/{}", window.page + 1, window.pages),
                    Style::default().fg(COLOR_DIM),
                )],
                None,
            );
        }
        LayoutMode::List => {
            push_chips(&mut row, view, &plan.visible_options, max_label);
        }
    }

    push_affordances(&mut row, view);
    lines.extend(row.finish());
    lines
}

/// Render every variation of a session, one blank line apart.
///
/// The registry is cleared first so it only holds this frame's areas.
pub fn render_selector(
    session: &mut SelectorSession,
    ctx: &LayoutContext,
    registry: &mut HitAreaRegistry,
) -> Vec<Line<'static>> {
    registry.clear();
    let plans = session.plans();
    let session = &*session;

    let mut lines: Vec<Line<'static>> = Vec::new();
    for (variation, plan) in session.variations().iter().zip(plans.iter()) {
        if plan.is_empty() {
            continue;
        }
        if !lines.is_empty() {
            lines.push(Line::default());
        }

        let selection = session.selection(&variation.name);
        let view = VariationView {
            variation,
            plan,
            selection: &selection,
            config: session.config(),
            missing_selection: session.missing_selection(&variation.name),
            slider_page: session.slider_page(&variation.name),
        };
        let area = Rect::new(0, lines.len() as u16, ctx.width, 1);
        lines.extend(render_variation(&view, ctx, area, registry));
    }
    lines
}
