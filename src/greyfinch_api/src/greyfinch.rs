use graphql_client::{GraphQLQuery, QueryBody, Response};
use log::{debug, trace};
use reqwest::{header, Client, ClientBuilder};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Operation, TransportError};
use crate::models::{Booking, Credentials, SessionToken};

pub const DEFAULT_API_URL: &str = "https://connect-api.greyfinch.com/v1/graphql";

const USER_AGENT: &str = concat!("greyfinch-agenda/", env!("CARGO_PKG_VERSION"));
const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Clone, Debug)]
pub struct GreyfinchClient {
    pub endpoint: String,
    pub http: Client,
}

impl GreyfinchClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = ClientBuilder::new().user_agent(USER_AGENT).build()?;

        Ok(GreyfinchClient {
            endpoint: endpoint.into(),
            http,
        })
    }

    /// Exchanges a key/secret pair for a short-lived bearer token.
    pub async fn login(&self, credentials: &Credentials) -> Result<SessionToken, Error> {
        let variables = api_login::Variables {
            key: credentials.key.clone(),
            secret: credentials.secret.clone(),
        };

        let query = ApiLogin::build_query(variables);
        let data = self
            .execute::<_, api_login::ResponseData>(Operation::Login, &query, None)
            .await?;

        let login = data.api_login;
        if login.access_token.is_empty() {
            return Err(Error::EmptyResponse {
                operation: Operation::Login,
            });
        }

        debug!(
            "login status: {}, token expires in {}s",
            login.status, login.access_token_expires_in
        );
        Ok(SessionToken {
            access_token: login.access_token,
            expires_in: login.access_token_expires_in,
            status: login.status,
        })
    }

    /// Fetches today's bookings in the order the API returns them.
    /// "Today" is resolved by the server.
    pub async fn todays_agenda(&self, token: &SessionToken) -> Result<Vec<Booking>, Error> {
        let query = TodaysAgenda::build_query(todays_agenda::Variables);
        let data = self
            .execute::<_, todays_agenda::ResponseData>(Operation::Query, &query, Some(token))
            .await?;

        let bookings: Vec<Booking> = data
            .appointment_bookings
            .into_iter()
            .map(|booking| Booking {
                local_start_date: booking.local_start_date,
                local_start_time: booking.local_start_time,
                first_name: booking.appointment.patient.person.first_name,
            })
            .collect();

        debug!("{} bookings today", bookings.len());
        Ok(bookings)
    }

    async fn execute<V, T>(
        &self,
        operation: Operation,
        query: &QueryBody<V>,
        token: Option<&SessionToken>,
    ) -> Result<T, Error>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        debug!("{} {}: POST {}", operation, query.operation_name, self.endpoint);
        let mut request = self.http.post(&self.endpoint).json(query);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, token.bearer());
        }

        let response = request
            .send()
            .await
            .map_err(|err| Error::transport(operation, err))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::transport(
                operation,
                TransportError::Status {
                    status,
                    body: truncate_body(&body),
                },
            ));
        }

        // `errors` must be read before `data` is decoded into the typed shape.
        let body = response
            .json::<Response<serde_json::Value>>()
            .await
            .map_err(|err| Error::transport(operation, err))?;
        trace!("{} {:?}", query.operation_name, body);

        if let Some(errors) = body.errors {
            return Err(Error::Application { operation, errors });
        }

        let data = body.data.ok_or(Error::EmptyResponse { operation })?;
        serde_json::from_value(data).map_err(|err| Error::transport(operation, err))
    }
}

fn truncate_body(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        return body.to_string();
    }

    let mut truncated: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    truncated.push_str("...");
    truncated
}

// GraphQL types
type Date = String;
type Time = String;

#[derive(GraphQLQuery, Debug)]
#[graphql(
    schema_path = "../../graphql/schema.graphql",
    query_path = "../../graphql/ApiLogin.graphql",
    response_derives = "Debug"
)]
pub struct ApiLogin;

#[derive(GraphQLQuery, Debug)]
#[graphql(
    schema_path = "../../graphql/schema.graphql",
    query_path = "../../graphql/TodaysAgenda.graphql",
    response_derives = "Debug"
)]
pub struct TodaysAgenda;
