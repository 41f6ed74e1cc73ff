use reqwest::blocking;
use serde::Serialize;
use url::Url;

use super::*;

#[derive(Serialize)]
struct ListingBody<'a> {
    receiver: String,
    contacts: &'a [Contact],
}

/// Posts every listing as JSON to a companion web service.
pub struct HttpSink {
    url: Url,
    client: blocking::Client,
}

impl HttpSink {
    pub fn new(url: &str) -> Result<Self, AppError> {
        Ok(Self {
            url: Url::parse(url)?,
            client: blocking::Client::new(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl NotificationSink for HttpSink {
    fn publish(&self, receiver: &Receiver, contacts: &[Contact]) -> Result<(), AppError> {
        let body = ListingBody {
            receiver: receiver.to_string(),
            contacts,
        };

        // Non-success status is turned into a `reqwest::Error`, which maps to `AppError::Request`
        self.client
            .post(self.url.clone())
            .json(&body)
            .send()?
            .error_for_status()?;

        Ok(())
    }
}
