use serde::Serialize;

/// Outcome of one query, ready for printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<String>,
    pub length: i64,
    pub path: Vec<String>,
}

impl Report {
    /// Human-readable rendering: a header line followed by the path or its absence.
    pub fn render_text(&self) -> String {
        let header = match &self.via {
            Some(via) => format!(
                "Path from {} to {} through {}, length = {}",
                self.from, self.to, via, self.length
            ),
            None => format!(
                "Path from {} to {}, length = {}",
                self.from, self.to, self.length
            ),
        };

        let body = match self.length {
            n if n > 0 => self.path.join(" ---> "),
            0 => "The start node and the end node are the same!".to_string(),
            _ => "The path doesn't exist.".to_string(),
        };

        format!("{}\n{}", header, body)
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
