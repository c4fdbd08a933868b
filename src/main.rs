//! application entry point

use crate::server::model::config::ServerConfig;
use derive_more::Display;
use log::{error, info, warn};
use std::env;
use std::path::Path;
use std::process;
use std::str::FromStr;

mod server;

const DEV_DOTENV_PATH: &str = ".env.dev";

#[actix_web::main()]
async fn main() {
    // bootstrap
    // a. env
    let env = env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Env::Dev); // default dev env if absent

    let dotenv = match env {
        Env::Prod | Env::Stg => None, // injected by the deployment
        Env::Dev => Some(dotenvy::from_path(Path::new(DEV_DOTENV_PATH))),
    };

    // b. logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Some(Err(e)) = dotenv {
        warn!("no envs loaded from {}: {}", DEV_DOTENV_PATH, e);
    }

    // c. config
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}, aborting", e);
            process::exit(1);
        }
    };

    info!("App is starting in env={}", env);

    // d. run app
    if let Err(e) = server::run(config).await {
        error!("{}, aborting", e);
        process::exit(1);
    }
}

#[derive(Debug, Display)]
#[non_exhaustive]
enum Env {
    #[display("dev")]
    Dev,
    #[display("stg")]
    Stg,
    #[display("prod")]
    Prod,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            s => Err(format!("Invalid Env: {s}")),
        }
    }
}
