use clap::Parser;
use clap::ValueEnum;

#[derive(Clone, Parser, Debug, Default)]
#[command(name = "messages-api")]
#[command(about = "Messages API Server", long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,

    #[arg(
        long = "environment",
        env = "ENVIRONMENT",
        default_value = "development"
    )]
    pub environment: Environment,
}

#[derive(Clone, Parser, Debug, Default)]
pub struct ServerConfig {
    #[arg(long = "server-host", env = "API_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(
        long = "server-api-port",
        env = "API_PORT",
        default_value = "3000",
        name = "api_port"
    )]
    pub api_port: u16,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.api_port)
    }
}

#[derive(Clone, Parser, Debug, Default)]
pub struct TelemetryConfig {
    /// OTLP/gRPC collector endpoint (e.g. http://localhost:4317). Trace export is off when unset.
    #[arg(long = "otlp-endpoint", env = "OTEL_EXPORTER_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,

    #[arg(
        long = "otel-service-name",
        env = "OTEL_SERVICE_NAME",
        default_value = "messages-api"
    )]
    pub service_name: String,
}

#[derive(Clone, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
}
