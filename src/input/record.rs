use std::sync::Arc;

/// One CSV record: the file's header row plus this record's values, in column order.
///
/// Records from the same file share a single header vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    headers: Arc<Vec<String>>,
    values: Vec<String>,
}

impl Record {
    pub fn new(headers: Arc<Vec<String>>, values: Vec<String>) -> Self {
        Self { headers, values }
    }

    /// Build a record from `(column, value)` pairs. Mostly useful for tests.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let (headers, values): (Vec<String>, Vec<String>) =
            pairs.into_iter().map(|(k, v)| (k.into(), v.into())).unzip();
        Self::new(Arc::new(headers), values)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Value of `column`. `None` if the header lacks the column or the record is too short.
    /// With duplicate header names the last occurrence wins.
    pub fn get(&self, column: &str) -> Option<&str> {
        let idx = self.headers.iter().rposition(|h| h == column)?;
        self.values.get(idx).map(String::as_str)
    }

    /// Column names in header order, each listed once at its first position.
    pub fn columns(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::with_capacity(self.headers.len());
        for h in self.headers.iter() {
            if !out.contains(&h.as_str()) {
                out.push(h);
            }
        }
        out
    }
}
