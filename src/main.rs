use electropastuh::api::{self, fetch_catalog};
use electropastuh::catalog::{render_catalog, CatalogLoader, CatalogSection};
use electropastuh::config::{self, CatalogSource, DEFAULT_HOST, DEFAULT_PORT};
use electropastuh::models::{static_products, AppState, CatalogMode, LoadPhase};
use electropastuh::routes::build_router;

use std::net::SocketAddr;
use std::process;
use std::sync::Arc;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use comfy_table::{Table, presets, modifiers, ContentArrangement};
use terminal_size::{Width, terminal_size};

fn build_state(env_file: Option<&str>, host: &str, port: u16, force_static: bool) -> AppState {
    config::load_env_file(env_file);

    let client = match api::build_http_client() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(%e, "Failed to create HTTP client");
            eprintln!("{}: {}", yansi::Paint::red("Failed to create HTTP client"), e);
            process::exit(1);
        }
    };

    let public_base_url = config::public_base_url_for(host, port);
    let source = if force_static { CatalogSource::Static } else { config::get_catalog_source() };
    let catalog = match source {
        CatalogSource::Static => CatalogMode::Static,
        CatalogSource::Remote => {
            let endpoint = config::resolve_catalog_endpoint(&public_base_url);
            CatalogMode::Remote(Arc::new(CatalogLoader::new(client.clone(), endpoint)))
        }
    };

    AppState {
        catalog,
        client,
        public_base_url,
        wb_api_base_url: config::get_wb_api_base_url(),
        wb_api_token: config::get_wb_api_token(),
        custom_css: None,
    }
}

async fn shutdown_signal(state: AppState) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(%e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
    if let Some(loader) = state.loader() {
        loader.unmount();
    }
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", yansi::Paint::red("Failed to read custom stylesheet at"), path, e);
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = build_router(state.clone());
    tracing::info!(%addr, "Starting ElectroPastuh server");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!("{}: {}\n{}", yansi::Paint::new(format!("Failed to bind to {}", addr)).red(), e, yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow());
            process::exit(1);
        }
    };
    println!("{} {}", yansi::Paint::new("Web server running on").green(), yansi::Paint::new(format!("http://{}", addr)).cyan());

    // The catalog view becomes active once the listener is up, so the
    // default endpoint (our own proxy) is reachable.
    match &state.catalog {
        CatalogMode::Remote(loader) => {
            println!("{} {}", yansi::Paint::new("Catalog endpoint:").dim(), loader.endpoint());
            loader.mount();
        }
        CatalogMode::Static => {
            println!("{}", yansi::Paint::new("Catalog: built-in static assortment").dim());
        }
    }

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
    {
        tracing::error!(%e, "Server encountered an error while running");
        eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
        process::exit(1);
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

fn print_section(section: &CatalogSection) {
    match section {
        CatalogSection::Loading => println!("{}", yansi::Paint::new("Catalog is still loading").yellow()),
        CatalogSection::Failed { message } => eprintln!("{}", yansi::Paint::new(message).red()),
        CatalogSection::Empty => println!("(no products)"),
        CatalogSection::Products(cards) => {
            let mut table = new_table();
            table.set_header(vec!["ID", "Name", "Brand", "Price", "Link"]);
            for c in cards {
                table.add_row(vec![
                    c.id.to_string(),
                    c.name.clone(),
                    c.brand.clone().unwrap_or_default(),
                    c.price.clone().unwrap_or_else(|| "—".to_string()),
                    c.link.clone(),
                ]);
            }
            println!("\n{table}\n");
        }
        CatalogSection::Fixed(items) => {
            let mut table = new_table();
            table.set_header(vec!["Name", "Diameter", "Strength", "Coating", "Length", "Price"]);
            for p in items {
                table.add_row(vec![p.name, p.diameter, p.strength, p.coating, p.length, p.price]);
            }
            println!("\n{table}\n");
        }
    }
}

#[derive(Parser)]
#[command(
    name = "electropastuh",
    author,
    version,
    about = "ElectroPastuh catalog site",
    long_about = r#"ElectroPastuh — storefront for galvanized electric-fence wire.

Serves the catalog page, the /api/products marketplace proxy, and a few
helper commands to check configuration and preview the catalog.

Examples:
  1) Run the site (dev):
      cargo run -- serve --host 127.0.0.1 --port 8080
  2) Show the built-in assortment:
      electropastuh products --static
  3) Check the catalog endpoint:
      electropastuh check-config --env-file .env
"#,
    after_help = "Use `electropastuh <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
        /// Render the built-in assortment instead of fetching
        #[arg(long = "static")]
        use_static: bool,
    },
    /// Validate configuration and try one catalog fetch
    #[command(about = "Validate configuration and ensure the catalog endpoint answers.", long_about = "Print the resolved catalog configuration and perform one GET against the catalog endpoint. Exits non-zero when the endpoint fails.")]
    CheckConfig {
        #[arg(long)]
        env_file: Option<String>,
        /// Override the catalog endpoint
        #[arg(long)]
        endpoint: Option<String>,
    },
    /// Load the catalog once and print it as a table
    #[command(about = "Load the catalog once and print it", long_about = "Runs the same one-shot loader the page uses and prints the resulting products. With --static, prints the built-in assortment.")]
    Products {
        #[arg(long)]
        env_file: Option<String>,
        /// Override the catalog endpoint
        #[arg(long)]
        endpoint: Option<String>,
        /// Print the built-in assortment
        #[arg(long = "static")]
        use_static: bool,
    },
}

fn endpoint_from(env_file: Option<&str>, endpoint: Option<String>) -> String {
    config::load_env_file(env_file);
    endpoint.unwrap_or_else(|| {
        config::resolve_catalog_endpoint(&config::public_base_url_for(DEFAULT_HOST, DEFAULT_PORT))
    })
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        api::set_silent(true);
    }

    // If no command provided, serve the site with defaults
    let Some(command) = cli.command else {
        let state = build_state(None, DEFAULT_HOST, DEFAULT_PORT, false);
        start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    };

    match command {
        Commands::Serve {
            host,
            port,
            env_file,
            stylesheet,
            use_static,
        } => {
            let state = build_state(env_file.as_deref(), &host, port, use_static);
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::CheckConfig { env_file, endpoint } => {
            let endpoint = endpoint_from(env_file.as_deref(), endpoint);
            let source = config::get_catalog_source();
            println!("{} {:?}", yansi::Paint::new("Catalog source:").bold(), source);
            println!("{} {}", yansi::Paint::new("Catalog endpoint:").bold(), endpoint);
            println!("{} {}", yansi::Paint::new("Marketplace API:").bold(), config::get_wb_api_base_url());
            if config::get_wb_api_token().trim().is_empty() {
                eprintln!("{}", yansi::Paint::new("WB_API_TOKEN is not configured; /api/products will answer 500").yellow());
            }
            if source == CatalogSource::Static {
                println!("{}", yansi::Paint::new("Static catalog; nothing to fetch").green());
                return;
            }

            let client = match api::build_http_client() {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::red("Failed to create HTTP client"), e);
                    process::exit(1);
                }
            };
            match fetch_catalog(&client, &endpoint).await {
                Ok(products) => {
                    println!("{}", yansi::Paint::new(format!("Catalog endpoint returned {} products", products.len())).green());
                }
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Catalog endpoint check failed").red(), e);
                    process::exit(1);
                }
            }
        }
        Commands::Products { env_file, endpoint, use_static } => {
            if use_static {
                print_section(&CatalogSection::Fixed(static_products().to_vec()));
                return;
            }
            let endpoint = endpoint_from(env_file.as_deref(), endpoint);
            let client = match api::build_http_client() {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::red("Failed to create HTTP client"), e);
                    process::exit(1);
                }
            };
            let loader = Arc::new(CatalogLoader::new(client, endpoint));
            loader.mount();
            let settled = loader.wait_settled().await;
            print_section(&render_catalog(&settled));
            if settled.phase() == LoadPhase::Error {
                process::exit(1);
            }
        }
    }
}
