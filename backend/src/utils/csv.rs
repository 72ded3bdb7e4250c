//! CSV assembly for the evidence export. Titles, descriptions, and notes
//! are submitter-controlled, so every cell is quoted and formula triggers
//! are neutralized before the file reaches a spreadsheet.

fn needs_formula_guard(value: &str) -> bool {
    matches!(value.chars().next(), Some('=' | '+' | '-' | '@'))
}

fn escape_cell(value: &str) -> String {
    let mut sanitized = value.replace('"', "\"\"");
    if needs_formula_guard(&sanitized) {
        sanitized.insert(0, '\'');
    }
    format!("\"{sanitized}\"")
}

pub fn append_csv_row(buffer: &mut String, fields: &[String]) {
    for (idx, field) in fields.iter().enumerate() {
        if idx > 0 {
            buffer.push(',');
        }
        buffer.push_str(&escape_cell(field));
    }
    buffer.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_are_doubled_and_cells_always_quoted() {
        let mut buffer = String::new();
        append_csv_row(
            &mut buffer,
            &["plain".to_string(), "say \"hi\"".to_string()],
        );
        assert_eq!(buffer, "\"plain\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn formula_triggers_get_a_leading_apostrophe() {
        for title in ["=SUM(A1)", "+1234", "-cmd", "@import"] {
            let mut buffer = String::new();
            append_csv_row(&mut buffer, &[title.to_string()]);
            assert!(buffer.starts_with("\"'"), "unguarded: {title}");
        }
    }
}
