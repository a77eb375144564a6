//! Thin typed layer over the collection service.
//!
//! Every operation maps to one REST-ish endpoint. A non-2xx response is a
//! failure regardless of its body; callers turn failures into local view
//! state, never into panics. No retries, no timeouts.

use gloo_net::http::{Request, Response};
use thiserror::Error;

use common::model::booking::Booking;
use common::model::property::Property;
use common::model::user::User;

/// Base URL of the collection service.
pub const API_BASE: &str = "http://localhost:3001";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}

fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

pub async fn fetch_properties() -> Result<Vec<Property>, ApiError> {
    let response = check(
        Request::get(&format!("{}/properties", API_BASE))
            .send()
            .await?,
    )?;
    Ok(response.json().await?)
}

pub async fn fetch_bookings() -> Result<Vec<Booking>, ApiError> {
    let response = check(Request::get(&format!("{}/bookings", API_BASE)).send().await?)?;
    Ok(response.json().await?)
}

/// The service does the email filtering; zero or more matches come back.
pub async fn fetch_users_by_email(email: &str) -> Result<Vec<User>, ApiError> {
    let response = check(
        Request::get(&format!("{}/users", API_BASE))
            .query([("email", email)])
            .send()
            .await?,
    )?;
    Ok(response.json().await?)
}

pub async fn create_property(property: &Property) -> Result<(), ApiError> {
    check(
        Request::post(&format!("{}/properties", API_BASE))
            .json(property)?
            .send()
            .await?,
    )?;
    Ok(())
}

pub async fn update_property(property: &Property) -> Result<(), ApiError> {
    check(
        Request::put(&format!("{}/properties/{}", API_BASE, property.id))
            .json(property)?
            .send()
            .await?,
    )?;
    Ok(())
}

pub async fn delete_property(id: &str) -> Result<(), ApiError> {
    check(
        Request::delete(&format!("{}/properties/{}", API_BASE, id))
            .send()
            .await?,
    )?;
    Ok(())
}
