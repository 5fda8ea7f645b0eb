use reqwest::StatusCode;
use serde_json::Value;
use yansi::Paint;
use std::sync::atomic::{AtomicBool, Ordering};

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// Shared outbound client. No timeout here: callers that need one set it per request.
pub fn build_http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(format!("ElectroPastuh/{}", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Echo an outbound request as a curl command line.
/// Header values named `Authorization` are masked.
pub fn log_request(method: &str, url: &str, headers: &[(&str, &str)], body: Option<&Value>) {
    tracing::debug!(%method, %url, "outbound request");

    let mut parts = Vec::new();
    parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
    parts.push(format!("-X {}", Paint::new(method).fg(yansi::Color::Yellow).bold()));
    parts.push(format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)));

    for (name, value) in headers {
        let shown = if name.eq_ignore_ascii_case("authorization") { "***" } else { *value };
        parts.push(format!("{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new(format!("'{}: {}'", name, shown)).fg(yansi::Color::Magenta)
        ));
    }

    if let Some(d) = body {
        let json_str = serde_json::to_string_pretty(d).unwrap_or_default();
        let escaped_json = json_str.replace('\'', "'\\''");
        parts.push(format!("{} {}",
            Paint::new("-d").fg(yansi::Color::Blue),
            Paint::new(format!("'{}'", escaped_json)).fg(yansi::Color::White)
        ));
    }
    log_output(format!("Request:\n{}", parts.join(" ")));
}

/// Echo a response body, red for failures and dimmed otherwise.
pub fn log_response(status: StatusCode, text: &str) {
    tracing::debug!(status = status.as_u16(), bytes = text.len(), "response received");
    let response_str = if status.is_success() {
        Paint::new(text).rgb(100, 100, 100).to_string()
    } else {
        Paint::new(format!("HTTP {}: {}", status, text)).fg(yansi::Color::Red).to_string()
    };
    log_output(format!("Response:\n{}", response_str));
}
