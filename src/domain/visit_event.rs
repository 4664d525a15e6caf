//! Visit event model for asynchronous telemetry.

use std::net::IpAddr;

use chrono::{DateTime, Utc};

use crate::utils::user_agent;

/// An in-memory capture of request metadata for async telemetry processing.
///
/// Created in the redirect handler and passed to the background consumer via
/// a bounded channel. This decouples the redirect response from telemetry
/// parsing and file I/O.
///
/// The event is transient: it lives only inside the queue, and only its
/// derived [`VisitRecord`] form is ever persisted.
#[derive(Debug, Clone)]
pub struct VisitEvent {
    pub user_agent: Option<String>,
    pub forwarded_for: Option<String>,
    pub real_ip: Option<String>,
    pub remote_addr: Option<IpAddr>,
    pub enqueued_at: DateTime<Utc>,
}

impl VisitEvent {
    /// Creates a new visit event, stamped with the current time.
    pub fn new(
        user_agent: Option<&str>,
        forwarded_for: Option<&str>,
        real_ip: Option<&str>,
        remote_addr: Option<IpAddr>,
    ) -> Self {
        Self {
            user_agent: user_agent.map(|s| s.to_string()),
            forwarded_for: forwarded_for.map(|s| s.to_string()),
            real_ip: real_ip.map(|s| s.to_string()),
            remote_addr,
            enqueued_at: Utc::now(),
        }
    }

    /// Derives the client IP from proxy headers, falling back to the
    /// connection's remote address.
    ///
    /// Priority: first `X-Forwarded-For` entry, then `X-Real-IP`, then the
    /// peer address.
    pub fn client_ip(&self) -> String {
        if let Some(xff) = &self.forwarded_for {
            if let Some(first) = xff.split(',').next() {
                let first = first.trim();
                if !first.is_empty() {
                    return first.to_string();
                }
            }
        }

        if let Some(real_ip) = &self.real_ip {
            if !real_ip.is_empty() {
                return real_ip.clone();
            }
        }

        self.remote_addr
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Parsed, write-only telemetry record derived from a [`VisitEvent`].
///
/// Appended to the visit log by the background consumer and never read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRecord {
    pub timestamp: DateTime<Utc>,
    pub ip: String,
    pub os_name: String,
    pub browser_name: String,
    pub browser_version: String,
    pub device_class: String,
    pub platform: String,
}

impl VisitRecord {
    /// Parses an event's user agent and derives the client IP.
    pub fn from_event(event: &VisitEvent) -> Self {
        let agent = user_agent::parse(event.user_agent.as_deref().unwrap_or(""));

        Self {
            timestamp: event.enqueued_at,
            ip: event.client_ip(),
            os_name: agent.os_name,
            browser_name: agent.browser_name,
            browser_version: agent.browser_version,
            device_class: agent.device_class,
            platform: agent.platform,
        }
    }

    /// Renders the record as one human-readable multi-line block, terminated
    /// by a blank line.
    pub fn format_block(&self) -> String {
        format!(
            "Timestamp: {};\nip: {};\nOS: {};\nBrowser: {} ({});\nDevice: {};\nPlatform: {}\n\n",
            self.timestamp.to_rfc3339(),
            self.ip,
            self.os_name,
            self.browser_name,
            self.browser_version,
            self.device_class,
            self.platform,
        )
    }
}
