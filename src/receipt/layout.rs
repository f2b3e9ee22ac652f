use crate::enrollment_db::Student;

use super::ReceiptStyle;

pub const A4: PageSize = PageSize {
    width: 595,
    height: 842,
};

const LEFT_MARGIN: i64 = 100;
const TITLE_BASELINE: i64 = 800;
const FIRST_LINE_BASELINE: i64 = 770;
const LINE_SPACING: i64 = 20;

/// Page dimensions in PDF points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize {
    pub width: i64,
    pub height: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    /// Name the embedded font program is registered under.
    pub base_font: String,
    pub size: i64,
}

/// A single line of text drawn with its baseline starting at (x, y),
/// measured from the lower left page corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub x: i64,
    pub y: i64,
    pub text: String,
}

/// Fixed single page layout of a payment receipt, independent of any output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLayout {
    pub page: PageSize,
    pub font: Font,
    pub lines: Vec<TextLine>,
}

impl ReceiptLayout {
    /// Lays out the receipt of one student record.
    /// Lines are, in order: title, name, course, amount paid and date.
    pub fn for_student(student: &Student, style: &ReceiptStyle) -> ReceiptLayout {
        let body = vec![
            format!("Name: {}", student.name),
            format!("Course: {}", student.course),
            format!("Amount Paid: {}{}", style.currency_symbol, student.fees_paid),
            format!("Date: {}", student.date.format("%Y-%m-%d")),
        ];

        let mut lines = vec![TextLine {
            x: LEFT_MARGIN,
            y: TITLE_BASELINE,
            text: style.title(),
        }];
        lines.extend(body.into_iter().enumerate().map(|(i, text)| TextLine {
            x: LEFT_MARGIN,
            y: FIRST_LINE_BASELINE - LINE_SPACING * i as i64,
            text,
        }));

        ReceiptLayout {
            page: A4,
            font: Font {
                base_font: style.font.name().to_string(),
                size: 14,
            },
            lines,
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.text.as_str()).collect()
    }
}
