fn needs_formula_guard(value: &str) -> bool {
    matches!(value.chars().next(), Some('=' | '+' | '-' | '@'))
}

fn escape_cell(value: &str) -> String {
    let mut sanitized = value.replace('"', "\"\"");
    if needs_formula_guard(&sanitized) {
        sanitized.insert(0, '\'');
    }
    format!("\"{}\"", sanitized)
}

pub fn append_csv_row<S: AsRef<str>>(buffer: &mut String, fields: &[S]) {
    for (idx, field) in fields.iter().enumerate() {
        if idx > 0 {
            buffer.push(',');
        }
        buffer.push_str(&escape_cell(field.as_ref()));
    }
    buffer.push('\n');
}

/// Header line followed by one line per row.
pub fn build_csv<S: AsRef<str>>(headers: &[&str], rows: &[Vec<S>]) -> String {
    let mut buffer = String::new();
    append_csv_row(&mut buffer, headers);
    for row in rows {
        append_csv_row(&mut buffer, row);
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_csv_emits_header_plus_one_line_per_row() {
        let rows = vec![
            vec!["Informatique".to_string(), "Support".to_string()],
            vec!["Finance".to_string(), "Comptabilité".to_string()],
            vec!["RH".to_string(), String::new()],
        ];
        let csv = build_csv(&["Nom", "Description"], &rows);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), rows.len() + 1);
        assert_eq!(lines[0], "\"Nom\",\"Description\"");
        assert_eq!(lines[2], "\"Finance\",\"Comptabilité\"");
        assert!(lines
            .iter()
            .all(|line| line.starts_with('"') && line.ends_with('"')));
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let mut buffer = String::new();
        append_csv_row(&mut buffer, &["dit \"chef\""]);
        assert_eq!(buffer, "\"dit \"\"chef\"\"\"\n");
    }

    #[test]
    fn formula_prefixes_are_neutralised() {
        let mut buffer = String::new();
        append_csv_row(&mut buffer, &["=SUM(A1)", "-12", "ok"]);
        assert_eq!(buffer, "\"'=SUM(A1)\",\"'-12\",\"ok\"\n");
    }

    #[test]
    fn empty_row_list_yields_header_only() {
        let rows: Vec<Vec<String>> = Vec::new();
        let csv = build_csv(&["A"], &rows);
        assert_eq!(csv.lines().count(), 1);
    }
}
