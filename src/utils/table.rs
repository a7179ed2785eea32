/// Plain-text table rendered inside a Discord code block.
///
/// Widths are measured in chars, so masked card numbers (`••••`) and currency
/// signs line up.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
    right_aligned: Vec<bool>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Table {
            col_widths: headers.iter().map(|h| h.chars().count()).collect(),
            right_aligned: vec![false; headers.len()],
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Right-align column `col` (used for amounts)
    pub fn align_right(mut self, col: usize) -> Self {
        if let Some(flag) = self.right_aligned.get_mut(col) {
            *flag = true;
        }
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (width, cell) in self.col_widths.iter_mut().zip(&row) {
            *width = (*width).max(cell.chars().count());
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut output = String::from("```\n");
        output.push_str(&self.render_row(&self.headers));
        output.push('\n');
        output.push_str(&self.render_separator());
        output.push('\n');
        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }
        output.push_str("```");
        output
    }

    fn render_row(&self, row: &[String]) -> String {
        let cells: Vec<String> = row
            .iter()
            .zip(&self.col_widths)
            .zip(&self.right_aligned)
            .map(|((cell, &width), &right)| {
                let pad = " ".repeat(width.saturating_sub(cell.chars().count()));
                if right {
                    format!("{}{}", pad, cell)
                } else {
                    format!("{}{}", cell, pad)
                }
            })
            .collect();
        cells.join(" | ").trim_end().to_string()
    }

    fn render_separator(&self) -> String {
        self.col_widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("-+-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_table_alignment() {
        let mut table = Table::new(&["ID", "Number", "Balance"]).align_right(2);
        table.add_row(vec!["1".into(), "4532 •••• •••• 8901".into(), "125430.50".into()]);
        table.add_row(vec!["2".into(), "5421 •••• •••• 3456".into(), "0.00".into()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "```");
        assert_eq!(lines[1], "ID | Number              |   Balance");
        assert_eq!(lines[2], "---+---------------------+----------");
        assert_eq!(lines[3], "1  | 4532 •••• •••• 8901 | 125430.50");
        assert_eq!(lines[4], "2  | 5421 •••• •••• 3456 |      0.00");
        assert_eq!(lines[5], "```");
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new(&["A"]);
        assert!(table.render().contains("A\n-\n"));
    }
}
