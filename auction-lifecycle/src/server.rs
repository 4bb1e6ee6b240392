use {
    crate::{
        auction::{
            entities,
            service::{
                add_auction::AddAuctionInput,
                close_auction::CloseAuctionInput,
                Config,
                Service,
            },
        },
        config::{
            CloseOptions,
            CreateOptions,
            MigrateOptions,
            Options,
        },
        kernel::{
            clock::RealClock,
            db,
        },
    },
    anyhow::Result,
    std::sync::Arc,
    tokio_util::task::TaskTracker,
};

pub async fn run(options: Options) -> Result<()> {
    match options {
        Options::Migrate(opts) => run_migrate(opts).await,
        Options::Create(opts) => run_create(opts).await,
        Options::Close(opts) => run_close(opts).await,
    }
}

async fn run_migrate(opts: MigrateOptions) -> Result<()> {
    let pool = db::connect(
        &opts.database.database_url,
        opts.database.database_max_connections,
    )
    .await?;
    db::migrate(&pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

async fn run_create(opts: CreateOptions) -> Result<()> {
    let service = build_service(
        &opts.database.database_url,
        opts.database.database_max_connections,
        opts.lifecycle.auction_duration_minutes.clone(),
    )
    .await?;

    let auction = service
        .add_auction(AddAuctionInput {
            auction: entities::Auction::new(
                opts.product_name,
                opts.category,
                opts.description,
                opts.condition.into(),
            ),
        })
        .await?;
    tracing::info!(auction_id = auction.id.as_str(), "Auction created");
    println!("{}", auction.id);

    // Scheduled closings live only in this process, so stopping early drops them.
    tokio::select! {
        _ = service.wait_for_scheduled_closings() => {
            tracing::info!("Scheduled closings are done");
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            tracing::info!("Shut down signal received, pending closings are dropped");
        }
    }
    Ok(())
}

async fn run_close(opts: CloseOptions) -> Result<()> {
    let service = build_service(
        &opts.database.database_url,
        opts.database.database_max_connections,
        None,
    )
    .await?;

    let outcome = service
        .close_auction(CloseAuctionInput {
            auction_id: opts.auction_id,
        })
        .await?;
    match outcome {
        entities::CloseOutcome::Closed => println!("closed"),
        entities::CloseOutcome::NoEffect => println!("no effect"),
    }
    Ok(())
}

async fn build_service(
    database_url: &str,
    max_connections: u32,
    auction_duration_minutes: Option<String>,
) -> Result<Service> {
    let pool = db::connect(database_url, max_connections).await?;
    Ok(Service::new(
        pool,
        Arc::new(RealClock),
        Config {
            auction_duration_minutes,
        },
        TaskTracker::new(),
    ))
}
