use clap::Args;
use jiff::Timestamp;
use tally_app::{
    database::{self, AppEnv},
    domain::{
        items::{ItemsService, MongoItemsService, data::NewItem},
        stores::records::StoreId,
    },
};

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    /// MongoDB connection string
    #[arg(long, env = "MONGODB_URI", hide_env_values = true)]
    mongodb_uri: String,

    /// Execution mode; selects the database
    #[arg(long, env = "APP_ENV", value_enum, default_value_t = AppEnv::Development)]
    app_env: AppEnv,

    /// Explicit database name, overriding the one chosen by `APP_ENV`
    #[arg(long, env = "MONGODB_DATABASE")]
    mongodb_database: Option<String>,

    /// Store that receives the example item
    #[arg(long)]
    store_id: StoreId,
}

pub(crate) async fn run(args: SeedArgs) -> Result<(), String> {
    let database_name = args
        .mongodb_database
        .unwrap_or_else(|| args.app_env.database_name().to_string());

    let db = database::connect(&args.mongodb_uri, &database_name)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let item = MongoItemsService::new(&db)
        .create_item(example_item(args.store_id, Timestamp::now()))
        .await
        .map_err(|error| format!("failed to seed item: {error}"));

    db.shutdown().await;

    let item = item?;

    println!("database: {database_name}");
    println!("item_id: {}", item.id);
    println!("item_name: {}", item.name);

    Ok(())
}

fn example_item(store_id: StoreId, created_at: Timestamp) -> NewItem {
    NewItem {
        name: "Pepsi".to_string(),
        image_url:
            "https://www.pepsi.com/content/dam/pepsi/en/brands/pepsi/pepsi-logo-horizontal.png"
                .to_string(),
        description: "Pepsi is a carbonated soft drink manufactured by PepsiCo.".to_string(),
        category: "Drink".to_string(),
        stock: 100,
        buy_price: 1000,
        sell_price: 1500,
        created_at,
        store_id,
        barcode: Some("123456789".to_string()),
    }
}
