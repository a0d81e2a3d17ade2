use ortho_core::ExportMap;
use ortho_export::docx::{SummarySection, generate_summary_docx};
use ortho_export::styles::DocumentStyles;

fn section() -> SummarySection {
    let entries: ExportMap = [
        ("clientName", "Jansen"),
        ("leatherLeft", "Ja"),
        ("leatherRight", ""),
        ("multivormLeftMm", "3"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    SummarySection::new("VLOS", entries)
}

#[test]
fn skip_empty_drops_blank_rows() {
    let styles = DocumentStyles::default();
    let section = section();
    assert_eq!(
        section.rows(&styles),
        vec![
            ("clientName", "Jansen"),
            ("leatherLeft", "Ja"),
            ("multivormLeftMm", "3"),
        ]
    );

    let keep_all = DocumentStyles {
        skip_empty: false,
        ..DocumentStyles::default()
    };
    assert_eq!(section.rows(&keep_all).len(), 4);
}

#[test]
fn generates_a_zip_package() {
    let bytes = generate_summary_docx(
        "Werkbon VLOS",
        &[section(), SummarySection::new("Leeg", ExportMap::new())],
        &DocumentStyles::default(),
    )
    .unwrap();

    // DOCX is an OOXML zip container
    assert!(bytes.len() > 100);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn no_sections_still_produces_a_document() {
    let bytes = generate_summary_docx("Werkbon", &[], &DocumentStyles::default()).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}
