// ==========================================
// Spool Winding Production System - Report Renderer
// ==========================================
// Fixed visual template: organization letterhead, report title,
// generation date, the table, and a footer disclaimer.
// The renderer is an external collaborator seam; the shipping
// implementation emits an SVG image.
// ==========================================

use crate::report::ReportTable;
use chrono::Local;
use std::fmt::Write as _;
use thiserror::Error;

/// Rendering error
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("table has no columns")]
    EmptyTable,
}

/// Renderer seam: aggregated table + title in, image bytes out
pub trait ReportRenderer {
    fn render(&self, table: &ReportTable, title: &str) -> Result<Vec<u8>, RenderError>;
}

// ==========================================
// SvgTableRenderer
// ==========================================
// Layout constants (pixels)
const CHAR_WIDTH: f64 = 9.0;
const CELL_PADDING: f64 = 26.0;
const ROW_HEIGHT: f64 = 34.0;
const HEADER_BLOCK: f64 = 130.0;
const FOOTER_BLOCK: f64 = 50.0;
const MARGIN: f64 = 30.0;
const MIN_WIDTH: f64 = 640.0;

pub struct SvgTableRenderer {
    org_name: String,
}

impl SvgTableRenderer {
    pub fn new(org_name: impl Into<String>) -> Self {
        Self {
            org_name: org_name.into(),
        }
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl ReportRenderer for SvgTableRenderer {
    fn render(&self, table: &ReportTable, title: &str) -> Result<Vec<u8>, RenderError> {
        if table.columns.is_empty() {
            return Err(RenderError::EmptyTable);
        }

        // Column widths from the widest cell in each column
        let mut col_widths: Vec<f64> = table
            .columns
            .iter()
            .map(|c| c.chars().count() as f64 * CHAR_WIDTH + CELL_PADDING)
            .collect();
        for row in &table.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < col_widths.len() {
                    let w = cell.chars().count() as f64 * CHAR_WIDTH + CELL_PADDING;
                    if w > col_widths[i] {
                        col_widths[i] = w;
                    }
                }
            }
        }

        let table_width: f64 = col_widths.iter().sum();
        let width = (table_width + 2.0 * MARGIN).max(MIN_WIDTH);
        let table_x = (width - table_width) / 2.0;
        let table_y = HEADER_BLOCK;
        let table_height = (table.rows.len() as f64 + 1.0) * ROW_HEIGHT;
        let height = HEADER_BLOCK + table_height + FOOTER_BLOCK;

        let gen_date = Local::now().format("%d-%b-%Y").to_string();

        let mut svg = String::new();
        let result: std::fmt::Result = (|| {
            writeln!(
                svg,
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{height:.0}" viewBox="0 0 {width:.0} {height:.0}">"#
            )?;
            writeln!(
                svg,
                r#"<rect width="{width:.0}" height="{height:.0}" fill="white"/>"#
            )?;

            // ---- Header ----
            writeln!(
                svg,
                r#"<text x="{x:.0}" y="42" text-anchor="middle" font-family="sans-serif" font-size="26" font-weight="bold">{org}</text>"#,
                x = width / 2.0,
                org = xml_escape(&self.org_name)
            )?;
            writeln!(
                svg,
                r#"<text x="{x:.0}" y="80" text-anchor="middle" font-family="sans-serif" font-size="16" font-weight="bold">{title}</text>"#,
                x = width / 2.0,
                title = xml_escape(title)
            )?;
            writeln!(
                svg,
                r#"<text x="{x:.0}" y="104" text-anchor="middle" font-family="sans-serif" font-size="11" font-style="italic">Generated on: {gen_date}</text>"#,
                x = width / 2.0
            )?;

            // ---- Table header row ----
            writeln!(
                svg,
                r##"<rect x="{table_x:.1}" y="{table_y:.1}" width="{table_width:.1}" height="{ROW_HEIGHT:.1}" fill="#dfe6ef"/>"##
            )?;

            let mut cx = table_x;
            for (i, label) in table.columns.iter().enumerate() {
                writeln!(
                    svg,
                    r#"<text x="{x:.1}" y="{y:.1}" text-anchor="middle" font-family="sans-serif" font-size="12" font-weight="bold">{label}</text>"#,
                    x = cx + col_widths[i] / 2.0,
                    y = table_y + ROW_HEIGHT / 2.0 + 4.0,
                    label = xml_escape(label)
                )?;
                cx += col_widths[i];
            }

            // ---- Data cells ----
            for (r, row) in table.rows.iter().enumerate() {
                let ry = table_y + (r as f64 + 1.0) * ROW_HEIGHT;
                let mut cx = table_x;
                for (i, cell) in row.iter().enumerate() {
                    if i >= col_widths.len() {
                        break;
                    }
                    writeln!(
                        svg,
                        r#"<text x="{x:.1}" y="{y:.1}" text-anchor="middle" font-family="sans-serif" font-size="12">{cell}</text>"#,
                        x = cx + col_widths[i] / 2.0,
                        y = ry + ROW_HEIGHT / 2.0 + 4.0,
                        cell = xml_escape(cell)
                    )?;
                    cx += col_widths[i];
                }
            }

            // ---- Grid lines ----
            for r in 0..=(table.rows.len() + 1) {
                let y = table_y + r as f64 * ROW_HEIGHT;
                writeln!(
                    svg,
                    r##"<line x1="{table_x:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="#888" stroke-width="1"/>"##,
                    x2 = table_x + table_width
                )?;
            }
            let mut cx = table_x;
            for w in col_widths.iter().chain(std::iter::once(&0.0)) {
                writeln!(
                    svg,
                    r##"<line x1="{cx:.1}" y1="{table_y:.1}" x2="{cx:.1}" y2="{y2:.1}" stroke="#888" stroke-width="1"/>"##,
                    y2 = table_y + table_height
                )?;
                cx += w;
            }

            // ---- Footer ----
            writeln!(
                svg,
                r#"<text x="{x:.0}" y="{y:.0}" text-anchor="middle" font-family="sans-serif" font-size="10" font-style="italic">For internal management use only</text>"#,
                x = width / 2.0,
                y = height - 18.0
            )?;

            writeln!(svg, "</svg>")
        })();

        // fmt::Write on String is infallible
        debug_assert!(result.is_ok());

        Ok(svg.into_bytes())
    }
}
