use thiserror::Error;

/// Everything that can go wrong between the feed and the chart.
///
/// None of these are fatal: the app logs them and shows an empty chart.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("request to {url} failed: {source}")]
    DataFetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("malformed rates payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no observations for indicator '{indicator}'")]
    EmptySelection { indicator: String },

    #[error("fetch worker exited without reporting a result")]
    WorkerLost,
}

impl DashboardError {
    /// Network-level failures (transport, status, lost worker).
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            DashboardError::DataFetch { .. } | DashboardError::Status { .. } | DashboardError::WorkerLost
        )
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_a_fetch_error() {
        let err = DashboardError::Status {
            url: "http://localhost/rates".into(),
            status: 503,
        };
        assert!(err.is_fetch_error());
        assert_eq!(err.to_string(), "http://localhost/rates answered with HTTP 503");
    }

    #[test]
    fn empty_selection_is_not_a_fetch_error() {
        let err = DashboardError::EmptySelection {
            indicator: "Курс юаня".into(),
        };
        assert!(!err.is_fetch_error());
        assert!(err.to_string().contains("Курс юаня"));
    }
}
