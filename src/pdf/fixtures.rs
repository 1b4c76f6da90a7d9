//! Small generated PDFs for tests.
//!
//! Page `i` (0-indexed) has a MediaBox width of `WIDTH_BASE + i` and shows the
//! text "Page {i + 1}", so tests can tell which source page ended up where.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::path::{Path, PathBuf};

pub const WIDTH_BASE: i64 = 500;

pub fn build_document(pages: u32) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for i in 0..pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new(
                    "Tj",
                    vec![Object::string_literal(format!("Page {}", i + 1))],
                ),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode page content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), (WIDTH_BASE + i as i64).into(), 842.into()],
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

pub fn write_pdf(dir: &Path, name: &str, pages: u32) -> PathBuf {
    let path = dir.join(name);
    build_document(pages).save(&path).expect("save fixture");
    path
}

pub fn write_pdf_with_title(dir: &Path, name: &str, pages: u32, title: &str) -> PathBuf {
    let mut doc = build_document(pages);
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(title),
    });
    doc.trailer.set("Info", info_id);

    let path = dir.join(name);
    doc.save(&path).expect("save fixture");
    path
}

/// Source page index of every page in `path`, recovered from MediaBox widths.
pub fn source_pages(path: &Path) -> Vec<u32> {
    let doc = Document::load(path).expect("load output");
    doc.get_pages()
        .values()
        .map(|&id| {
            let page = doc.get_dictionary(id).expect("page dictionary");
            let media_box = page
                .get(b"MediaBox")
                .and_then(Object::as_array)
                .expect("MediaBox");
            let width = match &media_box[2] {
                Object::Integer(w) => *w,
                Object::Real(w) => *w as i64,
                other => panic!("unexpected MediaBox entry {other:?}"),
            };
            (width - WIDTH_BASE) as u32
        })
        .collect()
}
