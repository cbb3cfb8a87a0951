//! In-process request and generation metrics.
//!
//! Counters are kept in concurrent maps and rendered in the Prometheus text
//! exposition format on `GET /api/metrics`.

use std::fmt::Write as _;
use std::time::Duration;

use axum::http::Method;
use dashmap::DashMap;

use crate::domain::{Language, Style};

/// Result of one generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Failure => "failure",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct RequestKey {
    method: &'static str,
    handler: String,
    status: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct GenerationKey {
    style: &'static str,
    language: &'static str,
    outcome: Outcome,
}

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    count: u64,
    seconds: f64,
}

impl Tally {
    fn observe(&mut self, elapsed: Duration) {
        self.count += 1;
        self.seconds += elapsed.as_secs_f64();
    }
}

/// Metrics registry shared by all request handlers.
#[derive(Debug, Default)]
pub struct Metrics {
    requests: DashMap<RequestKey, Tally>,
    generations: DashMap<GenerationKey, Tally>,
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished inbound HTTP request.
    ///
    /// `handler` should be the matched route template, not the raw path.
    /// Extension methods are folded into a single `other` label.
    pub fn record_request(&self, method: &Method, handler: &str, status: u16, elapsed: Duration) {
        let key = RequestKey {
            method: method_label(method),
            handler: handler.to_string(),
            status: status_class(status),
        };
        self.requests.entry(key).or_default().observe(elapsed);
    }

    /// Record one upstream generation attempt.
    pub fn record_generation(
        &self,
        style: Style,
        language: Language,
        outcome: Outcome,
        elapsed: Duration,
    ) {
        let key = GenerationKey {
            style: style.as_str(),
            language: language.as_str(),
            outcome,
        };
        self.generations.entry(key).or_default().observe(elapsed);
    }

    /// Number of generations recorded for a label set.
    #[must_use]
    pub fn generation_count(&self, style: Style, language: Language, outcome: Outcome) -> u64 {
        let key = GenerationKey {
            style: style.as_str(),
            language: language.as_str(),
            outcome,
        };
        self.generations.get(&key).map_or(0, |t| t.count)
    }

    /// Render every metric in Prometheus text format.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();

        let mut requests: Vec<(RequestKey, Tally)> = self
            .requests
            .iter()
            .map(|e| (e.key().clone(), *e.value()))
            .collect();
        requests.sort_by(|a, b| a.0.cmp(&b.0));

        let _ = writeln!(out, "# HELP http_requests_total Total number of HTTP requests.");
        let _ = writeln!(out, "# TYPE http_requests_total counter");
        for (key, tally) in &requests {
            let _ = writeln!(
                out,
                "http_requests_total{{method=\"{}\",handler=\"{}\",status=\"{}\"}} {}",
                key.method, key.handler, key.status, tally.count
            );
        }
        let _ = writeln!(
            out,
            "# HELP http_request_duration_seconds Latency of HTTP requests."
        );
        let _ = writeln!(out, "# TYPE http_request_duration_seconds summary");
        for (key, tally) in &requests {
            let labels = format!(
                "method=\"{}\",handler=\"{}\",status=\"{}\"",
                key.method, key.handler, key.status
            );
            let _ = writeln!(out, "http_request_duration_seconds_sum{{{labels}}} {}", tally.seconds);
            let _ = writeln!(out, "http_request_duration_seconds_count{{{labels}}} {}", tally.count);
        }

        let mut generations: Vec<(GenerationKey, Tally)> = self
            .generations
            .iter()
            .map(|e| (*e.key(), *e.value()))
            .collect();
        generations.sort_by(|a, b| a.0.cmp(&b.0));

        let _ = writeln!(out, "# HELP review_generations_total Total number of review generations.");
        let _ = writeln!(out, "# TYPE review_generations_total counter");
        for (key, tally) in &generations {
            let _ = writeln!(
                out,
                "review_generations_total{{style=\"{}\",language=\"{}\",outcome=\"{}\"}} {}",
                key.style,
                key.language,
                key.outcome.as_str(),
                tally.count
            );
        }
        let _ = writeln!(
            out,
            "# HELP review_generation_duration_seconds Time spent waiting for the upstream model."
        );
        let _ = writeln!(out, "# TYPE review_generation_duration_seconds summary");
        for (key, tally) in &generations {
            let labels = format!(
                "style=\"{}\",language=\"{}\",outcome=\"{}\"",
                key.style,
                key.language,
                key.outcome.as_str()
            );
            let _ = writeln!(
                out,
                "review_generation_duration_seconds_sum{{{labels}}} {}",
                tally.seconds
            );
            let _ = writeln!(
                out,
                "review_generation_duration_seconds_count{{{labels}}} {}",
                tally.count
            );
        }

        out
    }
}

fn method_label(method: &Method) -> &'static str {
    // Extension methods keep their exact spelling, so "get" lands in `other`.
    match method.as_str() {
        "GET" => "GET",
        "POST" => "POST",
        "HEAD" => "HEAD",
        "OPTIONS" => "OPTIONS",
        "PUT" => "PUT",
        "DELETE" => "DELETE",
        "PATCH" => "PATCH",
        _ => "other",
    }
}

fn status_class(status: u16) -> &'static str {
    match status {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        _ => "5xx",
    }
}
