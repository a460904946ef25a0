extern crate pretty_env_logger;
#[macro_use]
extern crate log;

mod agenda;

use std::io::{self, Write};

use clap::Parser;
use greyfinch_api::{agenda::fetch_todays_agenda, Credentials, GreyfinchClient, DEFAULT_API_URL};

#[derive(Debug, Parser)]
#[clap(version, about = "Print today's Greyfinch appointment bookings")]
struct Arguments {
    #[arg(short = 'k', long = "key", env = "GREYFINCH_API_KEY")]
    api_key: String,

    #[arg(short = 's', long = "secret", env = "GREYFINCH_API_SECRET", hide_env_values = true)]
    api_secret: String,

    #[arg(short = 'E', long = "endpoint", env = "GREYFINCH_API_URL", default_value = DEFAULT_API_URL)]
    endpoint: String,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    pretty_env_logger::init();
    let args = Arguments::parse();
    debug!("endpoint: {}", args.endpoint);

    let client = GreyfinchClient::new(args.endpoint)?;
    let credentials = Credentials::new(args.api_key, args.api_secret);
    let bookings = fetch_todays_agenda(&client, &credentials).await?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    agenda::write_agenda(&mut out, &bookings)?;
    out.flush()?;
    Ok(())
}
