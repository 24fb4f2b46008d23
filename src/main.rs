use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use viraltitle::error::ErrorCode;
use viraltitle::llm::{LlmClient, StructuredChat};
use viraltitle::remote::ApiClient;
use viraltitle::services::titles::{TitleGenerator, TitleSource};
use viraltitle::view::clipboard::SystemClipboard;
use viraltitle::view::controller::Controller;
use viraltitle::view::render::PreviewMode;
use viraltitle::{routes, state, terminal};

#[derive(Parser, Debug)]
#[command(name = "viraltitle", about = "Generate high-CTR video titles with a generative model")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the `/api/generate` HTTP endpoint.
    Serve {
        #[arg(long, env = "PORT", default_value_t = 3000)]
        port: u16,
    },
    /// Generate titles for one topic and print them.
    Generate {
        topic: String,
        /// Use a running `serve` instance instead of calling the model directly.
        #[arg(long, env = "VIRALTITLE_API_URL")]
        api_url: Option<String>,
        #[arg(long, default_value = "desktop")]
        preview: PreviewMode,
        /// Print the candidate array as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Interactive session: type topics, select, copy.
    Interactive {
        #[arg(long, env = "VIRALTITLE_API_URL")]
        api_url: Option<String>,
        #[arg(long, default_value = "desktop")]
        preview: PreviewMode,
    },
}

/// Pick the generation client: the HTTP intermediary when `api_url` is set,
/// otherwise the model API with credentials from the environment.
fn title_source(api_url: Option<&str>) -> Result<Arc<dyn TitleSource>, String> {
    if let Some(url) = api_url {
        let client = ApiClient::new(url).map_err(|e| e.detail().to_string())?;
        return Ok(Arc::new(client) as Arc<dyn TitleSource>);
    }
    let llm = LlmClient::from_env().map_err(|e| e.to_string())?;
    tracing::info!(model = llm.model(), "LLM client initialized");
    Ok(Arc::new(TitleGenerator::new(Arc::new(llm))) as Arc<dyn TitleSource>)
}

async fn serve(port: u16) -> ExitCode {
    // Initialize LLM client (non-fatal: generation returns 500 if config missing).
    let llm: Option<Arc<dyn StructuredChat>> = match LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            Some(Arc::new(client) as Arc<dyn StructuredChat>)
        }
        Err(e) => {
            tracing::warn!(code = e.error_code(), error = %e, "LLM client not configured, generation disabled");
            None
        }
    };

    let app = routes::app(state::AppState::new(llm));
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%port, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%port, "viraltitle listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve { port } => serve(port).await,
        Command::Generate { topic, api_url, preview, json } => {
            let source = match title_source(api_url.as_deref()) {
                Ok(source) => source,
                Err(e) => {
                    eprintln!("error: {e}");
                    return ExitCode::FAILURE;
                }
            };
            let controller = Controller::new(source);
            if terminal::run_once(&controller, &topic, preview, json).await {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Command::Interactive { api_url, preview } => {
            let source = match title_source(api_url.as_deref()) {
                Ok(source) => source,
                Err(e) => {
                    eprintln!("error: {e}");
                    return ExitCode::FAILURE;
                }
            };
            let controller = Arc::new(Controller::new(source));
            let mut clipboard = SystemClipboard::default();
            match terminal::run_interactive(controller, &mut clipboard, preview).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
