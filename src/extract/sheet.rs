//! XLSX text extraction via calamine
//!
//! Each worksheet is rendered as a header line naming the sheet followed
//! by a tab-separated dump of its cell grid, in workbook order.

use crate::error::{ToolError, ToolResult};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn extract_text(path: &Path) -> ToolResult<String> {
    let mut workbook: Xlsx<BufReader<File>> =
        open_workbook::<Xlsx<BufReader<File>>, _>(path)
            .map_err(|e| ToolError::file_read(e.to_string()))?;

    let sheet_names = workbook.sheet_names().to_owned();
    let mut sections = Vec::with_capacity(sheet_names.len());

    for name in sheet_names {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| ToolError::file_read(e.to_string()))?;
        sections.push(format!("--- Sheet: {} ---\n{}\n", name, render_range(&range)));
    }

    Ok(sections.join("\n"))
}

/// Tab-separated rendering of a cell grid
fn render_range(range: &Range<Data>) -> String {
    range
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| cell.to_string())
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
