//! # Directive Table Widget
//!
//! One row per directive id in first-seen order, with ID, Agent, Task, and
//! Status columns. The selected row is the target of retry/cancel.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState, Widget};
use sentinel_app::DirectiveTable;

use crate::theme::styles;

/// ID column width in characters.
const COL_ID: u16 = 12;

/// Agent column width in characters.
const COL_AGENT: u16 = 14;

/// Status column width in characters.
const COL_STATUS: u16 = 14;

// Task column gets the remaining space.

pub struct DirectiveTableView<'a> {
    table: &'a DirectiveTable,
    focused: bool,
}

impl<'a> DirectiveTableView<'a> {
    pub fn new(table: &'a DirectiveTable) -> Self {
        Self {
            table,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn title(&self) -> String {
        format!(" Directives ({}) ", self.table.len())
    }
}

impl Widget for DirectiveTableView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(self.title());

        if self.table.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            let placeholder = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No directives yet",
                    styles::text_muted().add_modifier(Modifier::ITALIC),
                )),
            ])
            .alignment(Alignment::Center);
            placeholder.render(inner, buf);
            return;
        }

        let header = Row::new(["ID", "Agent", "Task", "Status"])
            .style(styles::text_muted().add_modifier(Modifier::BOLD));

        let rows = self.table.rows().iter().map(|directive| {
            Row::new(vec![
                Cell::from(directive.id.as_str()).style(styles::text_secondary()),
                Cell::from(directive.agent_id.as_str()).style(styles::text_secondary()),
                Cell::from(directive.task.as_str()).style(styles::text_primary()),
                Cell::from(directive.status.as_str())
                    .style(styles::directive_status(&directive.status)),
            ])
        });

        let highlight = if self.focused {
            styles::focused_selected()
        } else {
            styles::unfocused_selected()
        };

        let widths = [
            Constraint::Length(COL_ID),
            Constraint::Length(COL_AGENT),
            Constraint::Min(10),
            Constraint::Length(COL_STATUS),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(1)
            .row_highlight_style(highlight)
            .highlight_symbol("▶ ");

        let mut state = TableState::default().with_selected(self.table.selected_index());
        ratatui::widgets::StatefulWidget::render(table, area, buf, &mut state);
    }
}
