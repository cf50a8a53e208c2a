//! DOCX text extraction
//!
//! A .docx file is a zip archive; the document body lives in
//! `word/document.xml`. Paragraph text is concatenated in document order
//! with one newline appended per paragraph.

use crate::error::{ToolError, ToolResult};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

pub fn extract_text(path: &Path) -> ToolResult<String> {
    let file = File::open(path).map_err(|e| ToolError::file_read(e.to_string()))?;
    let mut archive = ZipArchive::new(file).map_err(|e| ToolError::file_read(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ToolError::file_read(e.to_string()))?
        .read_to_string(&mut xml)
        .map_err(|e| ToolError::file_read(e.to_string()))?;

    paragraphs_from_xml(&xml)
}

/// Walk the document XML collecting `w:t` text, one newline per `w:p`
fn paragraphs_from_xml(xml: &str) -> ToolResult<String> {
    let mut reader = Reader::from_str(xml);
    let mut content = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) if element.local_name().as_ref() == b"t" => {
                in_text = true;
            }
            Ok(Event::End(element)) => match element.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => content.push('\n'),
                _ => {}
            },
            Ok(Event::Text(text)) if in_text => {
                let unescaped = text
                    .unescape()
                    .map_err(|e| ToolError::file_read(e.to_string()))?;
                content.push_str(&unescaped);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ToolError::file_read(e.to_string())),
            _ => {}
        }
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_in_document_order() {
        let xml = r#"<?xml version="1.0"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>First paragraph.</w:t></w:r></w:p>
    <w:p><w:r><w:t>Second</w:t></w:r><w:r><w:t> paragraph.</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

        let content = paragraphs_from_xml(xml).unwrap();
        assert_eq!(content, "First paragraph.\nSecond paragraph.\n");
    }

    #[test]
    fn test_self_closing_paragraph_yields_no_text() {
        let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body><w:p/><w:p><w:r><w:t>after blank</w:t></w:r></w:p></w:body>
</w:document>"#;

        let content = paragraphs_from_xml(xml).unwrap();
        assert_eq!(content, "after blank\n");
    }

    #[test]
    fn test_entities_are_unescaped() {
        let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body><w:p><w:r><w:t>a &amp; b</w:t></w:r></w:p></w:body>
</w:document>"#;

        let content = paragraphs_from_xml(xml).unwrap();
        assert_eq!(content, "a & b\n");
    }

    #[test]
    fn test_non_text_elements_are_ignored() {
        let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body><w:p><w:pPr><w:jc/></w:pPr><w:r><w:t>only this</w:t></w:r></w:p></w:body>
</w:document>"#;

        let content = paragraphs_from_xml(xml).unwrap();
        assert_eq!(content, "only this\n");
    }
}
