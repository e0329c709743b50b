//! Directive table - one row per directive id, in order of first sighting.

use std::collections::HashMap;

use sentinel_core::Directive;

/// Result of [`DirectiveTable::upsert`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new row was appended
    Inserted,
    /// An existing row was updated in place
    Updated { previous_status: String },
}

#[derive(Debug, Default)]
pub struct DirectiveTable {
    rows: Vec<Directive>,
    /// id -> row index
    index: HashMap<String, usize>,
    selected: Option<usize>,
    /// Also overwrite agent/task on update when the incoming value is non-empty
    refresh_details: bool,
}

impl DirectiveTable {
    pub fn new(refresh_details: bool) -> Self {
        Self {
            refresh_details,
            ..Self::default()
        }
    }

    /// Insert or update the row for `directive.id`.
    ///
    /// An existing row keeps its position. Only its status changes unless
    /// detail refresh is enabled.
    pub fn upsert(&mut self, directive: Directive) -> UpsertOutcome {
        if let Some(&idx) = self.index.get(&directive.id) {
            let row = &mut self.rows[idx];
            let previous_status = std::mem::replace(&mut row.status, directive.status);
            if self.refresh_details {
                if !directive.agent_id.is_empty() {
                    row.agent_id = directive.agent_id;
                }
                if !directive.task.is_empty() {
                    row.task = directive.task;
                }
            }
            return UpsertOutcome::Updated { previous_status };
        }

        self.index.insert(directive.id.clone(), self.rows.len());
        self.rows.push(directive);
        if self.selected.is_none() {
            self.selected = Some(0);
        }
        UpsertOutcome::Inserted
    }

    pub fn rows(&self) -> &[Directive] {
        &self.rows
    }

    pub fn get(&self, id: &str) -> Option<&Directive> {
        self.index.get(id).map(|&idx| &self.rows[idx])
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Directive> {
        self.selected.and_then(|idx| self.rows.get(idx))
    }

    /// Move the selection down one row, wrapping at the end.
    pub fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) if idx + 1 < self.rows.len() => idx + 1,
            _ => 0,
        });
    }

    /// Move the selection up one row, wrapping at the start.
    pub fn select_previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => self.rows.len() - 1,
            Some(idx) => idx - 1,
        });
    }
}
