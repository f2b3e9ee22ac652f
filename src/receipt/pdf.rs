use std::collections::BTreeMap;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use super::font::ReceiptFont;
use super::layout::ReceiptLayout;
use super::Result;

const FONT_RESOURCE: &str = "F1";
const CMAP_CHUNK: usize = 100;

/// Serializes a layout into a single page PDF document.
///
/// The font program is embedded as composite (Type0) font with Identity-H encoding, text is
/// written as glyph ids and a ToUnicode map keeps it extractable. Equal layouts and fonts
/// produce byte-identical documents.
pub fn render(layout: &ReceiptLayout, font: &ReceiptFont) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut used_glyphs = BTreeMap::new();
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![FONT_RESOURCE.into(), layout.font.size.into()],
        ),
    ];
    for line in &layout.lines {
        let glyph_ids = font.glyph_ids(&line.text)?;
        for (glyph_id, c) in glyph_ids.iter().zip(line.text.chars()) {
            if *glyph_id != 0 {
                used_glyphs.entry(*glyph_id).or_insert(c);
            }
        }

        // Absolute text matrix per line, so lines do not depend on each other.
        operations.push(Operation::new(
            "Tm",
            vec![
                1.into(),
                0.into(),
                0.into(),
                1.into(),
                line.x.into(),
                line.y.into(),
            ],
        ));
        operations.push(Operation::new(
            "Tj",
            vec![Object::String(
                encode_glyph_ids(&glyph_ids),
                StringFormat::Hexadecimal,
            )],
        ));
    }
    operations.push(Operation::new("ET", vec![]));

    let font_id = add_type0_font(&mut doc, layout, font, &used_glyphs)?;
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_RESOURCE => font_id,
        },
    });

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            layout.page.width.into(),
            layout.page.height.into(),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut result = Vec::new();
    doc.save_to(&mut result)?;

    Ok(result)
}

/// Adds the font program, its descriptor, the CID font and the Type0 font referencing them.
fn add_type0_font(
    doc: &mut Document,
    layout: &ReceiptLayout,
    font: &ReceiptFont,
    used_glyphs: &BTreeMap<u16, char>,
) -> Result<lopdf::ObjectId> {
    let metrics = font.metrics()?;
    let base_font = Object::Name(layout.font.base_font.clone().into_bytes());

    let program = font.program();
    let font_file_id = doc.add_object(Stream::new(
        dictionary! {
            "Length1" => program.len() as i64,
        },
        program.to_vec(),
    ));
    let descriptor_id = doc.add_object(dictionary! {
        "Type" => "FontDescriptor",
        "FontName" => base_font.clone(),
        "Flags" => 32,
        "FontBBox" => metrics.bbox.iter().map(|value| Object::Integer(*value)).collect::<Vec<_>>(),
        "ItalicAngle" => 0,
        "Ascent" => metrics.ascent,
        "Descent" => metrics.descent,
        "CapHeight" => metrics.cap_height,
        "StemV" => 80,
        "FontFile2" => font_file_id,
    });

    let mut widths = Vec::with_capacity(used_glyphs.len() * 2);
    for glyph_id in used_glyphs.keys() {
        widths.push(Object::Integer(*glyph_id as i64));
        widths.push(Object::Array(vec![Object::Integer(
            font.glyph_width(*glyph_id)?,
        )]));
    }
    let cid_font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "CIDFontType2",
        "BaseFont" => base_font.clone(),
        "CIDSystemInfo" => dictionary! {
            "Registry" => Object::string_literal("Adobe"),
            "Ordering" => Object::string_literal("Identity"),
            "Supplement" => 0,
        },
        "FontDescriptor" => descriptor_id,
        "CIDToGIDMap" => "Identity",
        "W" => widths,
    });

    let to_unicode_id = doc.add_object(Stream::new(
        dictionary! {},
        to_unicode_cmap(used_glyphs).into_bytes(),
    ));

    Ok(doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type0",
        "BaseFont" => base_font,
        "Encoding" => "Identity-H",
        "DescendantFonts" => vec![cid_font_id.into()],
        "ToUnicode" => to_unicode_id,
    }))
}

/// Two bytes (big endian) per glyph, as expected by Identity-H.
pub fn encode_glyph_ids(glyph_ids: &[u16]) -> Vec<u8> {
    glyph_ids.iter().flat_map(|glyph_id| glyph_id.to_be_bytes()).collect()
}

/// CMap translating the glyph ids back to the characters they were drawn for.
pub fn to_unicode_cmap(glyphs: &BTreeMap<u16, char>) -> String {
    let mut cmap = String::from(
        "/CIDInit /ProcSet findresource begin\n\
         12 dict begin\n\
         begincmap\n\
         /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
         /CMapName /Adobe-Identity-UCS def\n\
         /CMapType 2 def\n\
         1 begincodespacerange\n\
         <0000> <FFFF>\n\
         endcodespacerange\n",
    );

    let entries: Vec<_> = glyphs.iter().collect();
    for chunk in entries.chunks(CMAP_CHUNK) {
        cmap.push_str(&format!("{} beginbfchar\n", chunk.len()));
        for (glyph_id, c) in chunk {
            let mut units = [0u16; 2];
            let target: String = c
                .encode_utf16(&mut units)
                .iter()
                .map(|unit| format!("{:04X}", unit))
                .collect();
            cmap.push_str(&format!("<{:04X}> <{}>\n", glyph_id, target));
        }
        cmap.push_str("endbfchar\n");
    }

    cmap.push_str(
        "endcmap\n\
         CMapName currentdict /CMap defineresource pop\n\
         end\n\
         end\n",
    );
    cmap
}

/// Text of the first page, as a PDF viewer would extract it.
pub fn extract_text(document: &[u8]) -> Result<String> {
    let doc = Document::load_mem(document)?;
    Ok(doc.extract_text(&[1])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::layout::{Font, TextLine, A4};

    fn layout_of(lines: &[&str]) -> ReceiptLayout {
        ReceiptLayout {
            page: A4,
            font: Font {
                base_font: "DejaVuSans".to_string(),
                size: 14,
            },
            lines: lines
                .iter()
                .enumerate()
                .map(|(i, text)| TextLine {
                    x: 100,
                    y: 800 - 30 * i as i64,
                    text: text.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn rendered_text_keeps_unicode() {
        let layout = layout_of(&["Amount Paid: ₹2000", "Name: José (Jr.) \\ Ñ"]);
        let document = render(&layout, &ReceiptFont::builtin()).unwrap();

        assert!(document.starts_with(b"%PDF-1.5"));
        let text = extract_text(&document).unwrap();
        assert!(text.contains("Amount Paid: ₹2000"), "{}", text);
        assert!(text.contains("Name: José (Jr.) \\ Ñ"), "{}", text);
    }

    #[test]
    fn embeds_font_program() {
        let layout = layout_of(&["Receipt"]);
        let document = render(&layout, &ReceiptFont::builtin()).unwrap();

        let doc = Document::load_mem(&document).unwrap();
        let type0 = doc
            .objects
            .values()
            .filter_map(|object| object.as_dict().ok())
            .find(|dict| dict.get(b"Subtype").and_then(Object::as_name).ok() == Some(&b"Type0"[..]))
            .unwrap();
        assert_eq!(type0.get(b"Encoding").unwrap().as_name().unwrap(), b"Identity-H");
        assert!(type0.has(b"ToUnicode"));
        assert!(doc
            .objects
            .values()
            .filter_map(|object| object.as_dict().ok())
            .any(|dict| dict.has(b"FontFile2")));
    }

    #[test]
    fn rendering_is_deterministic() {
        let layout = layout_of(&["GIS Institute Receipt", "Amount Paid: ₹2000"]);
        let font = ReceiptFont::builtin();

        assert_eq!(render(&layout, &font).unwrap(), render(&layout, &font).unwrap());
    }

    #[test]
    fn glyph_ids_are_two_bytes_each() {
        assert_eq!(encode_glyph_ids(&[0x0024, 0x1234]), vec![0x00, 0x24, 0x12, 0x34]);
    }

    #[test]
    fn cmap_maps_glyphs_back_to_characters() {
        let mut glyphs = BTreeMap::new();
        glyphs.insert(0x24, 'A');
        glyphs.insert(0x0ABC, '₹');
        glyphs.insert(0x0ABD, '😀');

        let cmap = to_unicode_cmap(&glyphs);
        assert!(cmap.contains("<0000> <FFFF>"));
        assert!(cmap.contains("3 beginbfchar"));
        assert!(cmap.contains("<0024> <0041>"));
        assert!(cmap.contains("<0ABC> <20B9>"));
        assert!(cmap.contains("<0ABD> <D83DDE00>"));
    }
}
