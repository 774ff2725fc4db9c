#[cfg(test)]
#[path = "rebuild_test.rs"]
mod rebuild_test;

use crate::config::{AssetPaths, TemplateDecl};
use crate::net::rebuild::RebuildOutcome;

/// Rebuild status of one template row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

impl RowStatus {
    /// Inline `background` for the status link, or `None` to keep the
    /// stylesheet default.
    pub fn background(self, assets: &AssetPaths) -> Option<String> {
        let (base, image, offset) = match self {
            Self::Idle => return None,
            Self::Pending => (&assets.static_uri, "images/ani-rebuild.gif", "-1px"),
            Self::Success => (&assets.static_uri, "images/nav-icon-rebuild.gif", "0px"),
            Self::Error => (&assets.plugin_static_uri, "images/icon-error.gif", "-1px"),
        };
        Some(format!("url({base}{image}) no-repeat center {offset}"))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RebuildableRow {
    pub id: String,
    pub name: String,
    pub kind: Option<String>,
    pub status: RowStatus,
    /// Set only while `status` is `Error` and the endpoint gave a message.
    pub error: Option<String>,
}

/// Failure tooltip anchored to one row's status link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tooltip {
    pub row_id: String,
    pub message: String,
}

/// Template table rows plus the single (solo) failure tooltip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplatesState {
    pub rows: Vec<RebuildableRow>,
    pub tooltip: Option<Tooltip>,
}

impl TemplatesState {
    pub fn new(templates: &[TemplateDecl]) -> Self {
        let rows = templates
            .iter()
            .map(|t| RebuildableRow {
                id: t.id.clone(),
                name: t.name.clone(),
                kind: t.kind.clone(),
                status: RowStatus::Idle,
                error: None,
            })
            .collect();
        Self { rows, tooltip: None }
    }

    pub fn row(&self, id: &str) -> Option<&RebuildableRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    fn row_mut(&mut self, id: &str) -> Option<&mut RebuildableRow> {
        self.rows.iter_mut().find(|r| r.id == id)
    }

    /// Show the pending icon before the request goes out. Returns `false`
    /// for an unknown row.
    pub fn begin(&mut self, id: &str) -> bool {
        let Some(row) = self.row_mut(id) else {
            return false;
        };
        row.status = RowStatus::Pending;
        row.error = None;
        true
    }

    /// Apply a rebuild outcome to row `id`.
    ///
    /// Success clears this row's tooltip. A failure with a message replaces
    /// whatever tooltip is showing; other failures leave the tooltip alone.
    pub fn apply(&mut self, id: &str, outcome: &RebuildOutcome) {
        let Some(row) = self.row_mut(id) else {
            return;
        };
        match outcome {
            Ok(()) => {
                row.status = RowStatus::Success;
                row.error = None;
                if self.tooltip.as_ref().is_some_and(|t| t.row_id == id) {
                    self.tooltip = None;
                }
            }
            Err(e) => {
                row.status = RowStatus::Error;
                row.error = e.tooltip_message().map(str::to_owned);
                if let Some(message) = row.error.clone() {
                    self.tooltip = Some(Tooltip { row_id: id.to_owned(), message });
                }
            }
        }
    }

    /// Close the tooltip, if any.
    pub fn dismiss_tooltip(&mut self) {
        self.tooltip = None;
    }

    pub fn tooltip_for(&self, id: &str) -> Option<&str> {
        self.tooltip.as_ref().filter(|t| t.row_id == id).map(|t| t.message.as_str())
    }
}
