use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::config::SiteConfig;
use crate::record::Record;

/// Shown to visitors for every kind of load failure.
pub const LOAD_FAILED_MESSAGE: &str = "ไม่สามารถโหลดข้อมูลได้ในขณะนี้";

/// Error while loading human book records.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("client error: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("server answered HTTP {0}")]
    Status(u16),
    #[error("failed to read body: {0}")]
    Body(#[source] reqwest::Error),
    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("record source unavailable: {0}")]
    Unavailable(String),
}

impl FetchError {
    /// Localized text for the error panel; details go to the log.
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILED_MESSAGE
    }
}

/// Anything that can produce the full record list in one call.
pub trait RecordSource: Send + Sync {
    fn fetch_records(&self) -> Result<Vec<Record>, FetchError>;

    /// Where the records come from, for logs.
    fn describe(&self) -> String;
}

/// Parse a response body: a JSON array of flat objects.
pub fn parse_records(body: &str) -> Result<Vec<Record>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// Fetches the sheet bridge over HTTP (blocking; run off the UI thread).
pub struct HttpRecordSource {
    endpoint: Url,
    client: reqwest::blocking::Client,
}

impl HttpRecordSource {
    pub fn new(config: &SiteConfig) -> Result<Self, FetchError> {
        let endpoint = Url::parse(&config.endpoint)?;
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout)
            .connect_timeout(Duration::from_secs(10))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl RecordSource for HttpRecordSource {
    fn fetch_records(&self) -> Result<Vec<Record>, FetchError> {
        log::debug!("GET {}", self.endpoint);

        let response = self
            .client
            .get(self.endpoint.as_str())
            .header("Accept", "application/json")
            .send()
            .map_err(FetchError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().map_err(FetchError::Body)?;
        let records = parse_records(&body)?;
        log::debug!("{} records from {}", records.len(), self.endpoint);
        Ok(records)
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}

/// Stands in when the HTTP source could not be built; every fetch fails
/// with the original reason so the retry panel still shows.
pub struct UnavailableSource {
    reason: String,
}

impl UnavailableSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl RecordSource for UnavailableSource {
    fn fetch_records(&self) -> Result<Vec<Record>, FetchError> {
        Err(FetchError::Unavailable(self.reason.clone()))
    }

    fn describe(&self) -> String {
        format!("unavailable ({})", self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    fn spawn_one_shot_http(status: &str, payload: &str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let status = status.to_string();
        let payload = payload.as_bytes().to_vec();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request_buf = [0u8; 2048];
            let n = stream.read(&mut request_buf).unwrap_or(0);
            let headers = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                payload.len()
            );
            stream.write_all(headers.as_bytes()).unwrap();
            stream.write_all(&payload).unwrap();
            let _ = stream.flush();
            String::from_utf8_lossy(&request_buf[..n]).into_owned()
        });
        (format!("http://{addr}/exec"), handle)
    }

    fn source_for(url: &str) -> HttpRecordSource {
        let config = SiteConfig::default()
            .with_endpoint(url)
            .with_timeout(Duration::from_secs(5));
        HttpRecordSource::new(&config).unwrap()
    }

    #[test]
    fn fetches_and_parses_records() {
        let body = r#"[{"ชื่อหนังสือ":"ทดสอบ","Title":""},{" Title ":"Hello"}]"#;
        let (url, handle) = spawn_one_shot_http("200 OK", body);
        let records = source_for(&url).fetch_records().unwrap();
        let request = handle.join().unwrap();

        assert!(request.starts_with("GET /exec "));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].resolve(&["ชื่อหนังสือ", "Title"]), "ทดสอบ");
        assert_eq!(records[1].resolve(&["Title"]), "Hello");
    }

    #[test]
    fn error_status_is_reported() {
        let (url, handle) = spawn_one_shot_http("503 Service Unavailable", "oops");
        let err = source_for(&url).fetch_records().unwrap_err();
        handle.join().unwrap();
        assert!(matches!(err, FetchError::Status(503)));
        assert_eq!(err.user_message(), LOAD_FAILED_MESSAGE);
    }

    #[test]
    fn non_array_payload_is_a_decode_error() {
        let (url, handle) = spawn_one_shot_http("200 OK", r#"{"error":"quota"}"#);
        let err = source_for(&url).fetch_records().unwrap_err();
        handle.join().unwrap();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn invalid_endpoint_is_rejected_up_front() {
        let config = SiteConfig::default().with_endpoint("not a url");
        assert!(matches!(
            HttpRecordSource::new(&config),
            Err(FetchError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn unavailable_source_always_fails() {
        let source = UnavailableSource::new("bad endpoint");
        let err = source.fetch_records().unwrap_err();
        assert!(matches!(err, FetchError::Unavailable(ref r) if r == "bad endpoint"));
        assert_eq!(err.user_message(), LOAD_FAILED_MESSAGE);
    }

    #[test]
    fn parse_records_accepts_empty_list() {
        assert!(parse_records("[]").unwrap().is_empty());
        assert!(parse_records("not json").is_err());
    }
}
