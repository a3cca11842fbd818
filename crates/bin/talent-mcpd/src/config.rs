use clap::{Parser, builder::BoolishValueParser};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4020";
const DEFAULT_SSE_KEEP_ALIVE_SECS: u64 = 15;
const DEFAULT_SSE_RETRY_SECS: u64 = 3;

#[derive(Parser, Debug)]
#[command(name = "talent-mcpd", version, about = "Talent MCP daemon.")]
struct CliArgs {
    #[arg(long, env = "TALENT_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,

    #[arg(
        long = "stdio",
        env = "TALENT_ENABLE_STDIO",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long,
        env = "TALENT_MCP_STATEFUL",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    stateful: bool,

    /// Seconds between server-initiated SSE keepalive frames; 0 disables them.
    #[arg(
        long,
        env = "TALENT_SSE_KEEP_ALIVE_SECS",
        default_value_t = DEFAULT_SSE_KEEP_ALIVE_SECS
    )]
    sse_keep_alive_secs: u64,

    /// Client retry hint for dropped SSE streams; 0 omits the hint.
    #[arg(
        long,
        env = "TALENT_SSE_RETRY_SECS",
        default_value_t = DEFAULT_SSE_RETRY_SECS
    )]
    sse_retry_secs: u64,

    #[arg(long, env = "TALENT_EMPLOYEES_DATA")]
    employees_data: Option<PathBuf>,

    #[arg(long, env = "TALENT_OFFERINGS_DATA")]
    offerings_data: Option<PathBuf>,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct TalentConfig {
    pub mcp_http_addr: SocketAddr,
    pub enable_stdio: bool,
    pub stateful_mode: bool,
    pub sse_keep_alive: Option<Duration>,
    pub sse_retry: Option<Duration>,
    pub employees_data: Option<PathBuf>,
    pub offerings_data: Option<PathBuf>,
}

impl TalentConfig {
    pub fn from_args() -> Self {
        Self::from(CliArgs::parse())
    }
}

impl From<CliArgs> for TalentConfig {
    fn from(args: CliArgs) -> Self {
        let sse_keep_alive = if args.sse_keep_alive_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(args.sse_keep_alive_secs))
        };
        let sse_retry = if args.sse_retry_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(args.sse_retry_secs))
        };

        Self {
            mcp_http_addr: args.mcp_http_addr,
            enable_stdio: args.enable_stdio,
            stateful_mode: args.stateful,
            sse_keep_alive,
            sse_retry,
            employees_data: args.employees_data,
            offerings_data: args.offerings_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> CliArgs {
        CliArgs {
            mcp_http_addr: DEFAULT_MCP_HTTP_ADDR.parse().expect("valid MCP addr"),
            enable_stdio: false,
            stateful: true,
            sse_keep_alive_secs: DEFAULT_SSE_KEEP_ALIVE_SECS,
            sse_retry_secs: DEFAULT_SSE_RETRY_SECS,
            employees_data: None,
            offerings_data: None,
        }
    }

    #[test]
    fn defaults_serve_stateful_http_with_keepalive() {
        let config = TalentConfig::from(base_args());

        assert!(!config.enable_stdio);
        assert!(config.stateful_mode);
        assert_eq!(config.sse_keep_alive, Some(Duration::from_secs(15)));
        assert_eq!(config.sse_retry, Some(Duration::from_secs(3)));
        assert!(config.employees_data.is_none());
    }

    #[test]
    fn zero_keepalive_disables_heartbeat_framing() {
        let mut args = base_args();
        args.sse_keep_alive_secs = 0;
        args.sse_retry_secs = 0;

        let config = TalentConfig::from(args);

        assert!(config.sse_keep_alive.is_none());
        assert!(config.sse_retry.is_none());
    }
}
