//! UI rendering for the TUI.
//!
//! Layout and hit testing share the same geometry helpers, so a mouse event
//! always resolves against what was last drawn.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::{App, DropState, Mode, VisibleEntry};
use crate::tree::render::ORDER_SEPARATOR;
use crate::tree::NodeId;

/// Height of the traversal panel, borders included.
const ORDER_PANEL_HEIGHT: u16 = 5;

/// Something clickable on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// The collapse glyph of a row with children.
    Toggle(NodeId),
    /// Anywhere else on a tree row.
    Row(NodeId),
    /// An item of the traversal panel.
    OrderItem(NodeId),
    AddButton,
    RemoveButton,
}

impl Hit {
    /// The tree node under the pointer, ignoring everything outside the tree.
    pub fn tree_node(self) -> Option<NodeId> {
        match self {
            Hit::Toggle(node) | Hit::Row(node) => Some(node),
            _ => None,
        }
    }
}

/// Screen regions of the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    pub header: Rect,
    pub tree: Rect,
    pub order: Option<Rect>,
    pub footer: Rect,
}

/// Split the frame into header, tree, traversal panel and footer.
pub fn areas(app: &App, area: Rect) -> Areas {
    let order_height = if app.show_order_panel {
        ORDER_PANEL_HEIGHT
    } else {
        0
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Controls
            Constraint::Min(3),               // Tree view
            Constraint::Length(order_height), // Traversal
            Constraint::Length(1),            // Footer
        ])
        .split(area);

    Areas {
        header: chunks[0],
        tree: chunks[1],
        order: app.show_order_panel.then_some(chunks[2]),
        footer: chunks[3],
    }
}

fn bordered() -> Block<'static> {
    Block::default().borders(Borders::ALL)
}

/// Render the entire UI.
pub fn render(app: &App, frame: &mut Frame) {
    let areas = areas(app, frame.area());

    render_header(app, frame, areas.header);
    render_tree_area(app, frame, areas.tree);
    if let Some(order) = areas.order {
        render_order_panel(app, frame, order);
    }
    render_footer(app, frame, areas.footer);

    if app.mode == Mode::Help {
        render_help_overlay(frame);
    }
}

/// Button labels with their hit targets, left to right.
fn buttons(app: &App) -> [(Hit, String); 2] {
    [
        (Hit::AddButton, format!(" {} ", app.messages.add_button())),
        (Hit::RemoveButton, format!(" {} ", app.messages.remove_button())),
    ]
}

/// Where each button sits inside the header's inner area.
fn button_areas(app: &App, inner: Rect) -> Vec<(Hit, Rect)> {
    let mut x = inner.x;
    let mut placed = Vec::new();
    for (hit, label) in buttons(app) {
        let width = (Span::raw(label.as_str()).width() as u16).min(inner.right().saturating_sub(x));
        placed.push((hit, Rect::new(x, inner.y, width, inner.height.min(1))));
        x = x.saturating_add(width + 1);
    }
    placed
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let block = bordered()
        .title(" treeview ")
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = Vec::new();
    for (hit, label) in buttons(app) {
        let style = match hit {
            Hit::AddButton => Style::default().fg(Color::Black).bg(Color::Green),
            Hit::RemoveButton if app.can_remove() => {
                Style::default().fg(Color::White).bg(Color::Red)
            }
            _ => Style::default().fg(Color::DarkGray).bg(Color::Black),
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let status_style = if app.status.is_some() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    spans.push(Span::raw(" "));
    spans.push(Span::styled(app.controls_text(), status_style));

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// Inner area of the tree block and the index of its first visible row.
fn tree_viewport(app: &App, area: Rect) -> (Rect, usize) {
    let inner = bordered().inner(area);
    let offset = calculate_scroll_offset(
        app.selected_index().unwrap_or(0),
        inner.height as usize,
        app.visible_entries.len(),
    );
    (inner, offset)
}

fn render_tree_area(app: &App, frame: &mut Frame, area: Rect) {
    let block = bordered().border_style(Style::default().fg(Color::Gray));
    let (inner, scroll_offset) = tree_viewport(app, area);
    frame.render_widget(block, area);

    for (i, entry) in app
        .visible_entries
        .iter()
        .skip(scroll_offset)
        .take(inner.height as usize)
        .enumerate()
    {
        let row = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
        frame.render_widget(Paragraph::new(entry_line(app, entry)), row);
    }
}

fn calculate_scroll_offset(selected: usize, visible_height: usize, total: usize) -> usize {
    if total <= visible_height {
        return 0;
    }

    let padding = 3.min(visible_height / 4);

    if selected < padding {
        0
    } else if selected >= total - padding {
        total.saturating_sub(visible_height)
    } else {
        selected
            .saturating_sub(padding)
            .min(total.saturating_sub(visible_height))
    }
}

fn toggle_glyph(entry: &VisibleEntry) -> &'static str {
    match (entry.has_children, entry.is_collapsed) {
        (false, _) => "•",
        (true, true) => "▸",
        (true, false) => "▾",
    }
}

fn entry_line<'a>(app: &'a App, entry: &VisibleEntry) -> Line<'a> {
    let indent = " ".repeat(entry.depth * app.indent_width);
    let node = &app.forest[entry.node];

    let mut label_style = if entry.depth == 0 {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::White)
    };
    if app.hovered_order == Some(entry.node) {
        label_style = label_style.fg(Color::Yellow).underlined();
    }

    let glyph_style = if entry.has_children {
        Style::default().fg(Color::Blue)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut line = Line::from(vec![
        Span::raw(indent),
        Span::styled(toggle_glyph(entry), glyph_style),
        Span::raw(" "),
        Span::styled(node.display_label(), label_style),
    ]);

    let drag = app.drag.as_ref();
    if drag.is_some_and(|d| d.node == entry.node) {
        line = line.style(Style::default().fg(Color::DarkGray).italic());
    } else if let Some((_, state)) = drag
        .and_then(|d| d.target)
        .filter(|(target, _)| *target == entry.node)
    {
        line = line.style(match state {
            DropState::Allowed => Style::default().bg(Color::Green).fg(Color::Black),
            DropState::Blocked => Style::default().bg(Color::Red).fg(Color::White),
        });
    } else if app.selected == entry.node {
        line = line.style(Style::default().bg(Color::DarkGray).bold());
    }

    line
}

/// Placement of the traversal items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderLayout {
    /// Node, depth, and the cells it occupies.
    pub items: Vec<(NodeId, usize, Rect)>,
    pub separators: Vec<Rect>,
}

/// Lay out the pre-order sequence left to right, wrapping at the edge.
///
/// Items that do not fit in `inner` are left out.
pub fn order_layout(app: &App, inner: Rect) -> OrderLayout {
    let mut layout = OrderLayout::default();
    if inner.width == 0 || inner.height == 0 {
        return layout;
    }
    let sep_width = Span::raw(ORDER_SEPARATOR).width() as u16;
    let (mut x, mut y) = (inner.x, inner.y);

    for (i, (node, depth)) in app.order_entries().into_iter().enumerate() {
        let label = app.forest[node].display_label();
        let width = (Span::raw(label).width() as u16).min(inner.width);

        if i > 0 {
            if x + sep_width + width > inner.right() {
                y += 1;
                x = inner.x;
            }
            if y >= inner.bottom() {
                break;
            }
            layout
                .separators
                .push(Rect::new(x, y, sep_width.min(inner.right() - x), 1));
            x += sep_width;
            if x + width > inner.right() {
                y += 1;
                x = inner.x;
            }
        }
        if y >= inner.bottom() {
            break;
        }

        layout.items.push((node, depth, Rect::new(x, y, width, 1)));
        x += width;
    }

    layout
}

fn render_order_panel(app: &App, frame: &mut Frame, area: Rect) {
    let block = bordered()
        .title(format!(" {} ", app.messages.order_title()))
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = order_layout(app, inner);
    for rect in &layout.separators {
        frame.render_widget(
            Paragraph::new(ORDER_SEPARATOR).style(Style::default().fg(Color::DarkGray)),
            *rect,
        );
    }
    for (node, _, rect) in &layout.items {
        let mut style = Style::default().fg(Color::White);
        if *node == app.selected {
            style = style.fg(Color::Black).bg(Color::Cyan).bold();
        } else if app.hovered_order == Some(*node) {
            style = style.fg(Color::Yellow).underlined();
        }
        frame.render_widget(
            Paragraph::new(app.forest[*node].display_label()).style(style),
            *rect,
        );
    }
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = match app.mode {
        Mode::Normal => {
            "[↑↓] Navigate  [←→] Collapse  [a] Add  [d] Remove  [m] Move  [?] Help  [q] Quit"
        }
        Mode::Move => "[↑↓] Pick target  [Enter] Drop  [Esc] Cancel",
        Mode::Help => "[Esc] Close",
    };

    // A hovered traversal item shows its depth instead of the hints.
    let hovered = app.hovered_order.and_then(|node| {
        app.order_entries()
            .into_iter()
            .find(|(id, _)| *id == node)
            .map(|(id, depth)| {
                format!(
                    "{}  {}",
                    app.forest[id].display_label(),
                    app.messages.depth(depth)
                )
            })
    });

    let paragraph = Paragraph::new(hovered.unwrap_or_else(|| hints.to_string()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let help_width = 60u16.min(area.width.saturating_sub(8));
    let help_height = 24u16.min(area.height.saturating_sub(4));
    let help_area = Rect {
        x: (area.width.saturating_sub(help_width)) / 2,
        y: (area.height.saturating_sub(help_height)) / 2,
        width: help_width,
        height: help_height,
    };

    frame.render_widget(Clear, help_area);

    let help_text = r#"
 NAVIGATION
 ─────────────────────────────────
 ↑/k ↓/j    Move selection
 →/l        Expand node
 ←/h        Collapse / Go to parent
 Space      Toggle collapse
 g / G      Go to top / bottom

 EDITING
 ─────────────────────────────────
 a/+        Add child to selected
 d/Del      Remove selected
 m          Move selected, Enter drops
 Mouse      Click to select, drag to move

 VIEW
 ─────────────────────────────────
 o          Toggle traversal panel
 ?          Toggle this help
 q/Esc      Quit
"#;

    let block = bordered()
        .title(" Help ")
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, help_area);
}

/// Resolve a screen position to the element drawn there.
pub fn hit_test(app: &App, area: Rect, column: u16, row: u16) -> Option<Hit> {
    let areas = areas(app, area);
    let pos = Position::new(column, row);

    if areas.header.contains(pos) {
        let inner = bordered().inner(areas.header);
        return button_areas(app, inner)
            .into_iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(hit, _)| hit);
    }

    if areas.tree.contains(pos) {
        let (inner, offset) = tree_viewport(app, areas.tree);
        if !inner.contains(pos) {
            return None;
        }
        let entry = app
            .visible_entries
            .get(offset + (row - inner.y) as usize)?;
        let glyph_x = inner
            .x
            .saturating_add((entry.depth * app.indent_width) as u16);
        return Some(if entry.has_children && column == glyph_x {
            Hit::Toggle(entry.node)
        } else {
            Hit::Row(entry.node)
        });
    }

    if let Some(order) = areas.order.filter(|r| r.contains(pos)) {
        return order_layout(app, bordered().inner(order))
            .items
            .into_iter()
            .find(|(_, _, rect)| rect.contains(pos))
            .map(|(node, _, _)| Hit::OrderItem(node));
    }

    None
}
