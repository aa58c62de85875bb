use serde::Serialize;

/// Serializable result of one extraction run, for `--json` output.
#[derive(Debug, Serialize)]
pub struct ExtractionReport {
    pub count: usize,
    pub statements: Vec<String>,
}

impl ExtractionReport {
    pub fn new(statements: Vec<String>) -> Self {
        Self {
            count: statements.len(),
            statements,
        }
    }
}
