//! MCP server handler and stdio runner

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::tool::{self, ToolArguments};
use image_placeholder_core::PlaceholderGenerator;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{ErrorData, ServerHandler, ServiceExt, tool, tool_handler, tool_router};
use std::sync::Arc;
use tracing::{info, warn};

/// MCP server exposing the `image_placeholder` tool
#[derive(Clone)]
pub struct PlaceholderServer {
    generator: Arc<PlaceholderGenerator>,
    tool_router: ToolRouter<Self>,
}

impl Default for PlaceholderServer {
    fn default() -> Self {
        Self::new(PlaceholderGenerator::default())
    }
}

#[tool_router]
impl PlaceholderServer {
    /// Server backed by the given generator
    pub fn new(generator: PlaceholderGenerator) -> Self {
        Self {
            generator: Arc::new(generator),
            tool_router: Self::tool_router(),
        }
    }

    /// Build a server from resolved configuration
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(PlaceholderGenerator::new(config.constraints.clone()))
    }

    /// Generator handling tool calls
    pub fn generator(&self) -> &PlaceholderGenerator {
        &self.generator
    }

    /// Tools advertised in `tools/list`
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Run the tool without the protocol layer
    ///
    /// # Errors
    ///
    /// Returns the generator's error for invalid arguments
    pub fn call(&self, arguments: ToolArguments) -> Result<CallToolResult, ServerError> {
        tool::invoke(&self.generator, arguments)
    }

    #[tool(
        name = "image_placeholder",
        description = "Generate a placeholder image URL from placehold.co or picsum.photos. Returns the URL as text; no image is fetched."
    )]
    async fn image_placeholder(
        &self,
        Parameters(arguments): Parameters<ToolArguments>,
    ) -> Result<CallToolResult, ErrorData> {
        self.call(arguments).map_err(ErrorData::from)
    }
}

#[tool_handler]
impl ServerHandler for PlaceholderServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "image-placeholder-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Call image_placeholder with a provider (placehold or lorem-picsum), \
                 a width and a height to get a placeholder image URL. Provider-specific \
                 options go in placeholdOptions or picsumOptions."
                    .into(),
            ),
        }
    }
}

/// Serve over stdio until the client disconnects or a shutdown signal arrives
///
/// # Errors
///
/// Returns a transport error if the session cannot be established or ends
/// abnormally
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let server = PlaceholderServer::from_config(&config);
    let constraints = server.generator().validator().constraints();
    info!(
        min_width = constraints.min_width,
        max_width = constraints.max_width,
        min_height = constraints.min_height,
        max_height = constraints.max_height,
        "Starting image placeholder MCP server on stdio"
    );

    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| ServerError::transport(e.to_string()))?;

    let cancel = service.cancellation_token();
    tokio::spawn(async move {
        shutdown_signal().await;
        warn!("Shutdown signal received");
        cancel.cancel();
    });

    let reason = service
        .waiting()
        .await
        .map_err(|e| ServerError::transport(e.to_string()))?;

    info!(?reason, "MCP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
