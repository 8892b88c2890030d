//! Synthetic PDF builders for integration tests.
//!
//! Builds small but structurally honest documents with lopdf: a page tree,
//! font resources, image XObjects and an Info dictionary, all tunable per
//! test. The default fixture reproduces the authentic credential template.

use lopdf::{dictionary, Dictionary, Document, Object, Stream};

/// Tunable description of a test document.
pub struct PdfFixture {
    pub producer: Option<String>,
    pub title: Option<String>,
    pub creation_date: Option<String>,
    pub mod_date: Option<String>,
    /// MediaBox upper-right corner; lower-left is (0, 0)
    pub media_box: (i32, i32),
    /// BaseFont names, subset prefixes included where the template has them
    pub fonts: Vec<String>,
    pub image_count: usize,
}

impl Default for PdfFixture {
    /// The authentic credential: Prince producer, no date stamps (the
    /// reference engine legitimately omits them), letter-landscape page,
    /// two images, both expected font families embedded as subsets.
    fn default() -> Self {
        Self {
            producer: Some("Prince 15.1 (www.princexml.com)".to_string()),
            title: Some("Credential Renderer".to_string()),
            creation_date: None,
            mod_date: None,
            media_box: (792, 612),
            fonts: vec![
                "ABCDEF+CormorantGaramond-BoldItalic".to_string(),
                "Charm-Bold".to_string(),
            ],
            image_count: 2,
        }
    }
}

impl PdfFixture {
    pub fn build(&self) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut font_resources = Dictionary::new();
        for (i, base_font) in self.fonts.iter().enumerate() {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "TrueType",
                "BaseFont" => base_font.as_str(),
            });
            font_resources.set(format!("F{}", i + 1), font_id);
        }

        let mut xobjects = Dictionary::new();
        for i in 0..self.image_count {
            // 100x50 raw RGB payload keeps the file above the minimum
            // legitimate size without compression tricks
            let image = Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => 100,
                    "Height" => 50,
                    "ColorSpace" => "DeviceRGB",
                    "BitsPerComponent" => 8,
                },
                vec![0x7F; 100 * 50 * 3],
            );
            xobjects.set(format!("Im{}", i + 1), doc.add_object(image));
        }

        let mut resources = Dictionary::new();
        if !font_resources.is_empty() {
            resources.set("Font", font_resources);
        }
        if !xobjects.is_empty() {
            resources.set("XObject", xobjects);
        }

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Resources" => resources,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                self.media_box.0.into(),
                self.media_box.1.into(),
            ],
        });

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut info = Dictionary::new();
        if let Some(producer) = &self.producer {
            info.set("Producer", Object::string_literal(producer.as_str()));
        }
        if let Some(title) = &self.title {
            info.set("Title", Object::string_literal(title.as_str()));
        }
        if let Some(creation) = &self.creation_date {
            info.set("CreationDate", Object::string_literal(creation.as_str()));
        }
        if let Some(mod_date) = &self.mod_date {
            info.set("ModDate", Object::string_literal(mod_date.as_str()));
        }
        if !info.is_empty() {
            let info_id = doc.add_object(info);
            doc.trailer.set("Info", info_id);
        }

        doc
    }
}
