use log::info;

use crate::error::Error;
use crate::greyfinch::GreyfinchClient;
use crate::models::{Booking, Credentials};

/// Logs in, then fetches today's bookings. A failed login never reaches the query.
pub async fn fetch_todays_agenda(
    client: &GreyfinchClient,
    credentials: &Credentials,
) -> Result<Vec<Booking>, Error> {
    let token = client.login(credentials).await?;
    info!("logged in, token valid for {}s", token.expires_in);

    client.todays_agenda(&token).await
}
