/// Staffboard Server - HR dashboard backend
use clap::{Parser, Subcommand};
use staffboard_core::{CreateUser, Role};
use staffboard_server::{
    config::ServerConfig,
    create_router,
    services::{compute_stats, CredentialService, SessionIssuer},
    state::AppState,
};
use staffboard_storage::{open_store, JsonFileStore, StorageBackend};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "staffboard-server")]
#[command(about = "Staffboard HR dashboard server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Write the sample job document if it does not exist yet
    InitData {
        /// Document path
        #[arg(short, long, default_value = "./data/jobs.json")]
        path: PathBuf,
    },
    /// Print dashboard counts from the configured store
    Stats {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print a bcrypt hash of a password
    HashPassword {
        /// Password to hash
        password: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "staffboard_server=info,staffboard_storage=info,tower_http=info".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::InitData { path } => {
            init_data(path).await?;
        }
        Commands::Stats { config } => {
            print_stats(config).await?;
        }
        Commands::HashPassword { password } => {
            let config = ServerConfig::load()?;
            println!("{}", bcrypt::hash(password, config.auth.bcrypt_cost)?);
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ServerConfig> {
    let config = ServerConfig::load_from(path.as_deref())?;
    config.validate()?;
    Ok(config)
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    tracing::info!("Starting Staffboard Server");
    tracing::info!("Environment: {:?}", config.environment);
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize job store
    let backend = config.storage_backend();
    let jobs = open_store(backend, &config.storage.data_path, config.storage.seed).await?;
    if backend == StorageBackend::File {
        tracing::info!("Job document: {}", config.storage.data_path.display());
    }

    // Initialize credentials
    let credentials = CredentialService::new(config.auth.bcrypt_cost);
    if let Some(admin) = &config.auth.admin {
        let user = credentials
            .create(CreateUser {
                email: admin.email.clone(),
                name: admin.name.clone(),
                password: admin.password.clone(),
                role: Role::Admin,
            })
            .await?;
        tracing::info!("Admin account {} registered", user.email);
    } else {
        tracing::warn!("No admin account configured; users must register first");
    }

    // Initialize session issuer
    let sessions = SessionIssuer::new(&config.jwt_secret(), config.auth.session_ttl_days);
    tracing::info!("Sessions last {} days", config.auth.session_ttl_days);

    // Build application state
    let app_state = AppState::new(
        jobs,
        Arc::new(credentials),
        Arc::new(sessions),
        config.secure_cookies(),
    );

    // Build router
    let app = create_router(app_state, config.server.web_dir.clone());

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn init_data(path: PathBuf) -> anyhow::Result<()> {
    let existed = tokio::fs::try_exists(&path).await?;
    let store = JsonFileStore::open(path, staffboard_storage::seed_document()).await?;

    if existed {
        println!("{} already exists, left unchanged", store.path().display());
    } else {
        println!("Wrote sample jobs to {}", store.path().display());
    }

    Ok(())
}

async fn print_stats(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let jobs = open_store(
        config.storage_backend(),
        &config.storage.data_path,
        config.storage.seed,
    )
    .await?;

    let stats = compute_stats(jobs.as_ref()).await?;

    println!("Total jobs:         {}", stats.total_jobs);
    println!("Active jobs:        {}", stats.active_jobs);
    println!("Inactive jobs:      {}", stats.inactive_jobs);
    println!("Total applications: {}", stats.total_applications);
    println!("Recent jobs:");
    for job in &stats.recent_jobs {
        println!("  {} - {} ({})", job.id, job.title, job.department);
    }

    Ok(())
}
