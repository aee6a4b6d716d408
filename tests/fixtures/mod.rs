#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use lopdf::{dictionary, Document, Object};

pub struct TestFixtures;

impl TestFixtures {
    /// A well-formed PDF with `count` blank pages, written by lopdf itself
    pub fn pdf_with_pages(count: usize) -> Vec<u8> {
        let mut doc = Document::with_version("1.4");
        let pages_id = doc.new_object_id();

        let mut kids = Vec::with_capacity(count);
        for _ in 0..count {
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ],
            });
            kids.push(Object::Reference(page_id));
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count as i64,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).expect("serialize fixture pdf");
        buf
    }

    pub fn get_malformed_pdf() -> Vec<u8> {
        b"This is not a valid PDF file".to_vec()
    }

    /// Header only; the body and trailer never arrived
    pub fn get_truncated_pdf() -> Vec<u8> {
        b"%PDF-1.4\n1 0 obj\n<<\n/Type /Catalog\n".to_vec()
    }

    /// A 2-page document whose `startxref` points into the header
    pub fn pdf_with_bad_startxref() -> Vec<u8> {
        let mut bytes = Self::pdf_with_pages(2);
        let at = bytes
            .windows(b"startxref".len())
            .rposition(|w| w == b"startxref")
            .expect("lopdf writes a startxref");
        bytes.truncate(at);
        bytes.extend_from_slice(b"startxref\n12\n%%EOF");
        bytes
    }

    pub fn write(dir: &Path, relative: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture directory");
        }
        fs::write(&path, bytes).expect("write fixture");
        path
    }
}
