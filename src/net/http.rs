//! Generic JSON helpers over `gloo-net`.
//!
//! Client-side (hydrate): real HTTP calls. Server-side (SSR): inert stubs
//! returning `ApiError::Service`, since the catalog endpoints are only
//! meaningful in the browser.
//!
//! Status mapping: 2xx decodes the body, 401 becomes `Unauthorized`,
//! 400/422 become `Validation` with the backend's `message` field, anything
//! else becomes `Service`.

#![allow(clippy::unused_async)]

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;

#[cfg(feature = "hydrate")]
fn transport(err: &gloo_net::Error) -> ApiError {
    ApiError::Service(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn check_status(resp: &gloo_net::http::Response) -> Result<(), ApiError> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }

    match resp.status() {
        200..=299 => Ok(()),
        401 => Err(ApiError::Unauthorized),
        400 | 422 => {
            let message = match resp.json::<ErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => "datos inválidos".to_owned(),
            };
            Err(ApiError::Validation(message))
        }
        status => Err(ApiError::Service(format!("estado {status}"))),
    }
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    check_status(&resp).await?;
    resp.json::<T>().await.map_err(|e| transport(&e))
}

/// GET a JSON collection or entity.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| transport(&e))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(server_stub())
    }
}

/// GET with an `Authorization: Bearer` header. Used by credential
/// verification only; the catalog endpoints are consumed unauthenticated.
pub async fn get_json_bearer<T: DeserializeOwned>(url: &str, token: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| transport(&e))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, token);
        Err(server_stub())
    }
}

/// POST a JSON body and decode the created entity from the response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| transport(&e))?
            .send()
            .await
            .map_err(|e| transport(&e))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(server_stub())
    }
}

/// POST a JSON body, ignoring the response payload.
pub async fn post_unit<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| transport(&e))?
            .send()
            .await
            .map_err(|e| transport(&e))?;
        check_status(&resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(server_stub())
    }
}

/// POST without a body, ignoring the response payload. Used by assignment
/// endpoints that carry their arguments in the URL.
pub async fn post_empty(url: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .send()
            .await
            .map_err(|e| transport(&e))?;
        check_status(&resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(server_stub())
    }
}

/// PUT a JSON body, ignoring the response payload.
pub async fn put_unit<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(url)
            .json(body)
            .map_err(|e| transport(&e))?
            .send()
            .await
            .map_err(|e| transport(&e))?;
        check_status(&resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(server_stub())
    }
}

/// DELETE, ignoring the response payload.
pub async fn delete(url: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(url)
            .send()
            .await
            .map_err(|e| transport(&e))?;
        check_status(&resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(server_stub())
    }
}

#[cfg(not(feature = "hydrate"))]
fn server_stub() -> ApiError {
    ApiError::Service("no disponible en el servidor".to_owned())
}
