//! Operator-facing diagnostic log.

/// Log severity, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown severity name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log severity {0:?}, expected debug, info, warn or error")]
pub struct ParseSeverityError(String);

impl std::str::FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

impl From<Severity> for tracing::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Debug => tracing::Level::DEBUG,
            Severity::Info => tracing::Level::INFO,
            Severity::Warn => tracing::Level::WARN,
            Severity::Error => tracing::Level::ERROR,
        }
    }
}

/// Sink for operator diagnostics. Never shown to callers.
pub trait OperatorLog: Send + Sync {
    fn log(&self, severity: Severity, message: &str, cause: Option<&color_eyre::eyre::Report>);
}

/// Operator log backed by `tracing`, dropping entries below a minimum severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog {
    min_severity: Severity,
}

impl TracingLog {
    pub fn new(min_severity: Severity) -> Self {
        Self { min_severity }
    }

    pub fn min_severity(&self) -> Severity {
        self.min_severity
    }

    /// Check if entries of `severity` are emitted.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.min_severity
    }
}

impl OperatorLog for TracingLog {
    fn log(&self, severity: Severity, message: &str, cause: Option<&color_eyre::eyre::Report>) {
        if !self.enabled(severity) {
            return;
        }

        let cause = cause.map(|e| format!("{e:#}")).unwrap_or_default();

        match severity {
            Severity::Debug => tracing::debug!(error = %cause, "{message}"),
            Severity::Info => tracing::info!(error = %cause, "{message}"),
            Severity::Warn => tracing::warn!(error = %cause, "{message}"),
            Severity::Error => tracing::error!(error = %cause, "{message}"),
        }
    }
}
