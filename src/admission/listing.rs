use crate::enrollment_db::Student;

const COLUMNS: [&str; 7] = [
    "Name",
    "Email",
    "Phone",
    "Course",
    "Total Fees",
    "Fees Paid",
    "Date",
];

/// Renders all given students as one HTML page holding a single table.
/// Rows keep the order of the given slice.
pub fn render_students_html(students: &[Student]) -> String {
    let mut html = String::new();
    html.push_str(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>All Students</title>\n\
         <style>\n\
         \x20   table { width: 100%; border-collapse: collapse; }\n\
         \x20   th, td { border: 1px solid #aaa; padding: 8px; text-align: left; }\n\
         \x20   th { background: #ddd; }\n\
         </style>\n\
         </head>\n\
         <body>\n\
         \x20   <h2>All Admitted Students</h2>\n\
         \x20   <table>\n",
    );

    html.push_str("        <tr>");
    for column in COLUMNS.iter() {
        html.push_str(&format!("<th>{}</th>", column));
    }
    html.push_str("</tr>\n");

    for student in students {
        let cells = [
            escape_html(&student.name),
            escape_html(&student.email),
            escape_html(&student.phone),
            escape_html(&student.course),
            student.fees_total.to_string(),
            student.fees_paid.to_string(),
            student.date.format("%Y-%m-%d").to_string(),
        ];

        html.push_str("        <tr>");
        for cell in cells.iter() {
            html.push_str(&format!("<td>{}</td>", cell));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("    </table>\n</body>\n</html>\n");
    html
}

pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            c => result.push(c),
        }
    }

    result
}
