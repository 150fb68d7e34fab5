use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui;

use crate::error::{DashboardError, Result};

use super::model::Observation;

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// Something that can produce the full observation set in one call.
pub trait RateSource: Send {
    fn fetch(&self) -> Result<Vec<Observation>>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// Plain HTTP GET against a JSON endpoint. One attempt, no retry.
///
/// The client is built on the worker inside `fetch`, so a broken TLS backend
/// surfaces as a fetch error instead of a panic at start-up.
pub struct HttpRateSource {
    url: String,
}

impl HttpRateSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    fn fetch_error(&self, source: reqwest::Error) -> DashboardError {
        DashboardError::DataFetch {
            url: self.url.clone(),
            source,
        }
    }
}

impl RateSource for HttpRateSource {
    fn fetch(&self) -> Result<Vec<Observation>> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| self.fetch_error(e))?;

        let response = client
            .get(&self.url)
            .send()
            .map_err(|e| self.fetch_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| self.fetch_error(e))?;

        parse_observations(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

// ---------------------------------------------------------------------------
// JSON parsing
// ---------------------------------------------------------------------------

/// Expected body (extra fields such as `id` are ignored):
///
/// ```json
/// [
///   { "date": "2024-01-01", "value": 90.1, "indicator": "Курс доллара" },
///   ...
/// ]
/// ```
pub fn parse_observations(body: &str) -> Result<Vec<Observation>> {
    let observations: Vec<Observation> = serde_json::from_str(body)?;
    Ok(observations)
}

// ---------------------------------------------------------------------------
// Background fetch
// ---------------------------------------------------------------------------

/// A single fetch running on its own thread.
///
/// The worker owns the sender; dropping the task drops the receiver, so a
/// late result is simply discarded.
pub struct FetchTask {
    rx: Option<Receiver<Result<Vec<Observation>>>>,
}

impl FetchTask {
    /// Start fetching from `source`. `repaint` is poked when the result lands
    /// so the UI wakes up without polling.
    pub fn spawn(source: Box<dyn RateSource>, repaint: Option<egui::Context>) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            log::info!("Fetching rates from {}", source.describe());
            let result = source.fetch();
            if tx.send(result).is_err() {
                log::debug!("Fetch finished after the dashboard went away");
            }
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });

        Self { rx: Some(rx) }
    }

    /// Non-blocking check. Yields the result once, then `None` forever.
    pub fn poll(&mut self) -> Option<Result<Vec<Observation>>> {
        let rx = self.rx.as_ref()?;
        let outcome = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(DashboardError::WorkerLost),
        };
        self.rx = None;
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    struct StaticSource(&'static str);

    impl RateSource for StaticSource {
        fn fetch(&self) -> Result<Vec<Observation>> {
            parse_observations(self.0)
        }
        fn describe(&self) -> String {
            "static".into()
        }
    }

    struct DownSource;

    impl RateSource for DownSource {
        fn fetch(&self) -> Result<Vec<Observation>> {
            Err(DashboardError::Status {
                url: "http://rates.invalid/point".into(),
                status: 502,
            })
        }
        fn describe(&self) -> String {
            "down".into()
        }
    }

    struct PanickingSource;

    impl RateSource for PanickingSource {
        fn fetch(&self) -> Result<Vec<Observation>> {
            panic!("simulated worker crash");
        }
        fn describe(&self) -> String {
            "panicking".into()
        }
    }

    fn wait(task: &mut FetchTask) -> Result<Vec<Observation>> {
        for _ in 0..500 {
            if let Some(result) = task.poll() {
                return result;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("fetch did not complete in time");
    }

    #[test]
    fn parses_feed_in_order_ignoring_extra_fields() {
        let body = r#"[
            {"id": "1", "date": "2024-01-02", "value": 92, "indicator": "Курс доллара"},
            {"id": "2", "date": "2024-01-01", "value": 99.25, "indicator": "Курс евро"}
        ]"#;
        let obs = parse_observations(body).unwrap();
        assert_eq!(
            obs,
            vec![
                Observation::new("2024-01-02", 92.0, "Курс доллара"),
                Observation::new("2024-01-01", 99.25, "Курс евро"),
            ]
        );
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(parse_observations("[]").unwrap().is_empty());
    }

    #[test]
    fn malformed_body_is_parse_error() {
        for body in [
            "not json",
            r#"{"date": "2024-01-01", "value": 1, "indicator": "x"}"#,
            r#"[{"date": "2024-01-01", "value": "ninety", "indicator": "x"}]"#,
            r#"[{"date": "2024-01-01", "indicator": "x"}]"#,
        ] {
            assert!(
                matches!(parse_observations(body), Err(DashboardError::Parse(_))),
                "expected parse error for {body}"
            );
        }
    }

    #[test]
    fn task_delivers_result_once() {
        let mut task = FetchTask::spawn(
            Box::new(StaticSource(
                r#"[{"date": "2024-01-01", "value": 90, "indicator": "Курс доллара"}]"#,
            )),
            None,
        );
        let obs = wait(&mut task).unwrap();
        assert_eq!(obs.len(), 1);
        assert!(task.poll().is_none());
    }

    #[test]
    fn task_reports_source_failure() {
        let mut task = FetchTask::spawn(Box::new(DownSource), None);
        let err = wait(&mut task).unwrap_err();
        assert!(err.is_fetch_error());
    }

    #[test]
    fn task_reports_lost_worker() {
        let mut task = FetchTask::spawn(Box::new(PanickingSource), None);
        assert!(matches!(wait(&mut task), Err(DashboardError::WorkerLost)));
    }

    #[test]
    fn http_source_is_inert_until_fetched() {
        let source = HttpRateSource::new("http://127.0.0.1:9/point");
        assert_eq!(source.describe(), "http://127.0.0.1:9/point");
    }

    #[test]
    fn unreachable_endpoint_is_fetch_error() {
        // Port 9 on localhost: nothing listens there in CI.
        let err = HttpRateSource::new("http://127.0.0.1:9/point")
            .fetch()
            .unwrap_err();
        assert!(matches!(err, DashboardError::DataFetch { .. }));
    }
}
