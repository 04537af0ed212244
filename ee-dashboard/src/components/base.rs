//! Base components: header, filter controls and tables

use async_trait::async_trait;
use ee_common::{EntityKind, Result};

use super::{Component, ReportContext};
use crate::html::escape;

/// Page heading naming the entity kind and, when known, the selected entity
pub struct Header;

#[async_trait]
impl Component for Header {
    async fn render(&self, ctx: &ReportContext) -> Result<String> {
        let label = ctx.kind().label();

        let name = match ctx.entity_id {
            Some(id) => ctx.queries.display_name(id).await?,
            None => None,
        };

        Ok(match name {
            Some(name) => format!(
                "<h1 class=\"header\">{} Report: {}</h1>",
                label,
                escape(&name)
            ),
            None => format!("<h1 class=\"header\">{} Report</h1>", label),
        })
    }
}

/// Employee / Team selector; changing it re-fetches the dropdown
pub struct ProfileRadio {
    pub name: &'static str,
    pub hx_get: &'static str,
    pub hx_target: &'static str,
}

impl Default for ProfileRadio {
    fn default() -> Self {
        Self {
            name: "profile_type",
            hx_get: "/update_dropdown",
            hx_target: "#selector",
        }
    }
}

#[async_trait]
impl Component for ProfileRadio {
    async fn render(&self, ctx: &ReportContext) -> Result<String> {
        let mut html = String::from("<fieldset class=\"profile-type\">\n");

        for kind in EntityKind::ALL {
            let checked = if kind == ctx.kind() { " checked" } else { "" };
            html.push_str(&format!(
                "<label><input type=\"radio\" name=\"{name}\" value=\"{value}\" \
                 hx-get=\"{hx_get}\" hx-target=\"{hx_target}\" hx-swap=\"outerHTML\"{checked}> {value}</label>\n",
                name = self.name,
                value = kind.label(),
                hx_get = self.hx_get,
                hx_target = self.hx_target,
                checked = checked,
            ));
        }

        html.push_str("</fieldset>");
        Ok(html)
    }
}

/// `<select>` listing every entity of the current kind
pub struct ReportDropdown {
    pub id: &'static str,
    pub name: &'static str,
}

impl Default for ReportDropdown {
    fn default() -> Self {
        Self {
            id: "selector",
            name: "user-selection",
        }
    }
}

#[async_trait]
impl Component for ReportDropdown {
    async fn render(&self, ctx: &ReportContext) -> Result<String> {
        let entities = ctx.queries.names().await?;

        let mut html = format!(
            "<div id=\"{id}\" class=\"dropdown\">\n<label for=\"{name}\">{label}</label>\n\
             <select id=\"{name}\" name=\"{name}\">\n",
            id = self.id,
            name = self.name,
            label = ctx.kind().label(),
        );

        for entity in entities {
            let selected = if Some(entity.id) == ctx.entity_id {
                " selected"
            } else {
                ""
            };
            html.push_str(&format!(
                "<option value=\"{}\"{}>{}</option>\n",
                entity.id,
                selected,
                escape(&entity.name)
            ));
        }

        html.push_str("</select>\n</div>");
        Ok(html)
    }
}

/// Filter form posting the selection to `/update_data`
pub struct DashboardFilters {
    pub id: &'static str,
    pub action: &'static str,
    pub method: &'static str,
    children: Vec<Box<dyn Component>>,
}

impl DashboardFilters {
    pub fn new() -> Self {
        Self {
            id: "top-filters",
            action: "/update_data",
            method: "POST",
            children: vec![
                Box::new(ProfileRadio::default()),
                Box::new(ReportDropdown::default()),
            ],
        }
    }
}

impl Default for DashboardFilters {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Component for DashboardFilters {
    async fn render(&self, ctx: &ReportContext) -> Result<String> {
        let mut html = format!(
            "<form id=\"{}\" action=\"{}\" method=\"{}\">\n",
            self.id, self.action, self.method
        );

        for child in &self.children {
            html.push_str(&child.render(ctx).await?);
            html.push('\n');
        }

        html.push_str("<button type=\"submit\">Submit</button>\n</form>");
        Ok(html)
    }
}

/// Plain HTML table over string cells
pub struct DataTable;

impl DataTable {
    pub fn render(columns: &[&str], rows: &[Vec<String>]) -> String {
        let mut html = String::from("<table class=\"data-table\">\n<thead><tr>");
        for column in columns {
            html.push_str(&format!("<th>{}</th>", escape(column)));
        }
        html.push_str("</tr></thead>\n<tbody>\n");

        for row in rows {
            html.push_str("<tr>");
            for cell in row {
                html.push_str(&format!("<td>{}</td>", escape(cell)));
            }
            html.push_str("</tr>\n");
        }

        html.push_str("</tbody>\n</table>");
        html
    }
}

/// Dated notes for the selected entity
pub struct NotesTable;

#[async_trait]
impl Component for NotesTable {
    async fn render(&self, ctx: &ReportContext) -> Result<String> {
        let notes = match ctx.entity_id {
            Some(id) => ctx.queries.notes(id).await?,
            None => Vec::new(),
        };

        let rows: Vec<Vec<String>> = notes
            .into_iter()
            .map(|n| vec![n.note_date, n.note])
            .collect();

        Ok(DataTable::render(&["note_date", "note"], &rows))
    }
}
