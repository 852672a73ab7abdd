//! JSON-RPC Server
//!
//! JSON-RPC 2.0 over HTTP, bound to localhost. Authentication and rate
//! limiting belong to the gateway in front of it.

use crate::handler::RpcHandler;
use crate::types::{CreateJobParams, JobRefParams, ListJobsParams, StatsParams, UpdateJobParams};
use jobtrack_core::application::JobService;
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::RpcModule;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

pub const DEFAULT_RPC_HOST: &str = "127.0.0.1";
pub const DEFAULT_RPC_PORT: u16 = 9630;

/// RPC Server Configuration
#[derive(Debug, Clone)]
pub struct RpcServerConfig {
    pub host: String,
    pub port: u16, // 0 = ephemeral
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
        }
    }
}

/// Register one async method that parses its params and forwards to the handler
macro_rules! register {
    ($module:expr, $handler:expr, $name:literal, $params:ty, $method:ident) => {{
        let handler = Arc::clone(&$handler);
        $module
            .register_async_method($name, move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: $params = params.parse()?;
                    handler.$method(req).await
                }
            })
            .map_err(|e| e.to_string())?;
    }};
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
    handler: Arc<RpcHandler>,
}

impl RpcServer {
    pub fn new(config: RpcServerConfig, service: Arc<JobService>) -> Self {
        Self {
            config,
            handler: Arc::new(RpcHandler::new(service)),
        }
    }

    /// Build the method table
    pub fn into_module(self) -> Result<RpcModule<()>, String> {
        let mut module = RpcModule::new(());

        register!(module, self.handler, "jobs.list.v1", ListJobsParams, list);
        register!(module, self.handler, "jobs.get.v1", JobRefParams, get);
        register!(module, self.handler, "jobs.create.v1", CreateJobParams, create);
        register!(module, self.handler, "jobs.update.v1", UpdateJobParams, update);
        register!(module, self.handler, "jobs.delete.v1", JobRefParams, delete);
        register!(module, self.handler, "jobs.stats.v1", StatsParams, stats);

        Ok(module)
    }

    /// Start the JSON-RPC server; returns the bound address and the stop handle.
    pub async fn start(self) -> Result<(SocketAddr, ServerHandle), String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        let server = Server::builder()
            .build(&addr)
            .await
            .map_err(|e| format!("Failed to build server on {}: {}", addr, e))?;
        let local_addr = server
            .local_addr()
            .map_err(|e| format!("Failed to read bound address: {}", e))?;

        let module = self.into_module()?;
        let handle = server.start(module);

        info!(addr = %local_addr, "JSON-RPC server started");
        Ok((local_addr, handle))
    }
}
