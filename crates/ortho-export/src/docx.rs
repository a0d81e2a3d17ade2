use std::io::Cursor;

use docx_rs::{
    AlignmentType, Docx, Paragraph, Run, RunFonts, Shading, Style, StyleType, Table, TableCell,
    TableRow,
};
use ortho_core::{ExportMap, TRUTHY};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Column widths of the key/value tables, in twentieths of a point.
const LABEL_WIDTH: usize = 3600;
const VALUE_WIDTH: usize = 5400;

/// One titled block of the summary, usually a client map or an intake map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySection {
    pub title: String,
    pub entries: ExportMap,
}

impl SummarySection {
    pub fn new(title: impl Into<String>, entries: ExportMap) -> Self {
        Self {
            title: title.into(),
            entries,
        }
    }

    /// Rows that make it into the table under `styles`.
    pub fn rows<'a>(&'a self, styles: &DocumentStyles) -> Vec<(&'a str, &'a str)> {
        self.entries
            .iter()
            .filter(|(_, value)| !(styles.skip_empty && value.trim().is_empty()))
            .collect()
    }
}

/// Generate the intake summary (werkbon) as a DOCX document.
///
/// Layout:
/// - the document title as Heading 1
/// - per section a Heading 2 and a two-column key/value table
/// - marker values (`Ja`) in bold
///
/// A section with no rows left gets a single "Geen gegevens" line instead
/// of an empty table.
pub fn generate_summary_docx(
    title: &str,
    sections: &[SummarySection],
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size))
        .add_paragraph(heading_paragraph(title, "Heading1", styles));

    for section in sections {
        docx = docx.add_paragraph(heading_paragraph(&section.title, "Heading2", styles));

        let rows = section.rows(styles);
        if rows.is_empty() {
            docx = docx.add_paragraph(
                Paragraph::new().add_run(body_run("Geen gegevens", styles).italic()),
            );
            continue;
        }

        let table_rows = rows
            .into_iter()
            .map(|(key, value)| entry_row(key, value, styles))
            .collect();
        docx = docx
            .add_table(Table::new(table_rows).set_grid(vec![LABEL_WIDTH, VALUE_WIDTH]))
            .add_paragraph(Paragraph::new());
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    tracing::debug!(
        sections = sections.len(),
        bytes = buf.get_ref().len(),
        "generated summary docx"
    );
    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
        .bold()
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn entry_row(key: &str, value: &str, styles: &DocumentStyles) -> TableRow {
    let label = TableCell::new()
        .shading(Shading::new().fill(styles.label_fill.as_str()))
        .add_paragraph(Paragraph::new().add_run(body_run(key, styles)));

    let mut value_run = body_run(value, styles);
    if value == TRUTHY {
        value_run = value_run.bold();
    }
    let value = TableCell::new()
        .add_paragraph(Paragraph::new().align(AlignmentType::Left).add_run(value_run));

    TableRow::new(vec![label, value])
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}
