use clap::{Args, Parser, Subcommand};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

/// Command line client for the order service
#[derive(Parser, Debug)]
#[command(name = "order-service")]
#[command(about = "client cli used to poke the order service endpoints", version, long_about = None
)]
struct Cli {
    #[arg(long, global = true, default_value = DEFAULT_HOST, help = "Base url of the order service")]
    host: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// check the service is up
    Health,
    /// order related ops
    #[command(arg_required_else_help = true)]
    Orders(OrdersArgs),
}

#[derive(Debug, Args)]
struct OrdersArgs {
    #[command(subcommand)]
    command: OrderCmds,
}

#[derive(Debug, Subcommand)]
enum OrderCmds {
    List {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        page: Option<u32>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        page_size: Option<u32>,
    },
    Create {
        #[arg(long, help = "Raw request body sent as is.", value_name = "JSON", default_value = "{}")]
        body: String,
    },
}

const DEFAULT_HOST: &str = "http://localhost:8080";

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

#[derive(Debug, Deserialize)]
struct GetOrdersResponse {
    orders: Vec<serde_json::Value>,
    total: u64,
}

#[derive(Debug, Deserialize)]
struct PostOrdersResponse {
    message: String,
    order: serde_json::Value,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();
    let host = args.host.trim_end_matches('/');
    let client = Client::new();

    match args.command {
        Commands::Health => {
            let res = client.get(format!("{}/health", host)).send().await?;
            match res.status() {
                StatusCode::OK => {
                    let res = res.json::<HealthResponse>().await?;
                    println!("{} {} is {}", res.service, res.version, res.status);
                }
                unexpected => {
                    println!("got unexpected status code, {}", unexpected);
                }
            }
        }
        Commands::Orders(orders) => match orders.command {
            OrderCmds::List { page, page_size } => {
                let mut query = Vec::new();
                if let Some(page) = page {
                    query.push(("page", page));
                }
                if let Some(page_size) = page_size {
                    query.push(("page_size", page_size));
                }
                let res = client
                    .get(format!("{}/api/orders", host))
                    .query(&query)
                    .send()
                    .await?;
                match res.status() {
                    StatusCode::OK => {
                        let res = res.json::<GetOrdersResponse>().await?;
                        println!("total orders = {}", res.total);
                        for order in res.orders {
                            println!("{}", order);
                        }
                    }
                    unexpected => {
                        println!("got unexpected status code, {}", unexpected);
                    }
                }
            }
            OrderCmds::Create { body } => {
                let res = client
                    .post(format!("{}/api/orders", host))
                    .header(reqwest::header::CONTENT_TYPE, "application/json")
                    .body(body)
                    .send()
                    .await?;
                match res.status() {
                    StatusCode::CREATED => {
                        let res = res.json::<PostOrdersResponse>().await?;
                        println!("{}, order = {}", res.message, res.order);
                    }
                    unexpected => {
                        println!("got unexpected status code, {}", unexpected);
                    }
                }
            }
        },
    }
    Ok(())
}
