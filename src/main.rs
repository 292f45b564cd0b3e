use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use author_books::schema::Dialect;
use author_books::{config, db, seed, server};

/// Value following `flag` on the command line, if any.
fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|pos| args.get(pos + 1))
        .cloned()
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "author_books=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    // --print-schema [mssql|sqlite] writes the DDL to stdout and exits
    if let Some(pos) = args.iter().position(|arg| arg == "--print-schema") {
        let dialect = match args.get(pos + 1) {
            Some(name) => match name.parse::<Dialect>() {
                Ok(dialect) => dialect,
                Err(e) => {
                    tracing::error!("{}", e);
                    std::process::exit(2);
                }
            },
            None => Dialect::MsSql,
        };
        println!("{}", dialect.ddl());
        return;
    }

    // Load configuration
    dotenvy::dotenv().ok();

    let mut config = config::Config::from_env();
    if let Some(profile) = arg_value(&args, "--profile") {
        let explicit_url = std::env::var("DATABASE_URL").is_ok();
        config = config.with_profile(&profile, explicit_url);
    }

    tracing::info!(profile = %config.profile, "Using database {}", config.database_url);

    // Initialize database
    let db = db::init_db(&config.database_url)
        .await
        .expect("Failed to initialize database");

    if config.seed_demo {
        tracing::info!("Seeding demo data...");
        if let Err(e) = seed::seed_demo_data(&db).await {
            tracing::error!("Failed to seed data: {}", e);
        } else {
            tracing::info!("Demo data seeded successfully.");
        }
    }

    let app = server::build_router(db, &config.cors_allowed_origins);

    // Find available port
    let port = server::find_available_port(config.port).expect("Failed to find available port");

    if port != config.port {
        tracing::warn!(
            "Preferred port {} was not available, using port {} instead",
            config.port,
            port
        );
    }

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("author-books server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("Shutting down");
        })
        .await
        .expect("Failed to start server");
}
