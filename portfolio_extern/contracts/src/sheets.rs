use std::{fmt, future::Future};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SheetsApiService: Send + Sync + 'static {
    /// Appends `values` as a new row after the last row of the table found
    /// in `target.range`.
    fn append_row(
        &self,
        target: &SheetsTarget,
        values: &[String],
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Identifies the spreadsheet range rows are appended to, together with the
/// credentials required to access it.
#[derive(Clone, PartialEq, Eq)]
pub struct SheetsTarget {
    pub spreadsheet_id: String,
    pub range: String,
    pub api_key: String,
}

impl fmt::Debug for SheetsTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetsTarget")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("range", &self.range)
            .field("api_key", &"[redacted]")
            .finish()
    }
}

#[cfg(feature = "mock")]
impl MockSheetsApiService {
    pub fn with_append_row(
        mut self,
        target: SheetsTarget,
        values: Vec<String>,
        result: anyhow::Result<()>,
    ) -> Self {
        self.expect_append_row()
            .once()
            .withf(move |t, v| *t == target && *v == values)
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}
