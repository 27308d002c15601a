use actix_web::{dev, web, Error, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

pub mod album_handler;
pub mod docs_handler;
pub mod folder_handler;
pub mod photo_handler;
pub mod photographer_handler;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Request body accepted either as JSON or as an url-encoded form.
///
/// The `Content-Type` header picks the decoder, so a rejected body reports the
/// error of the format it was actually sent in.
pub struct Payload<T>(T);

impl<T> Payload<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for Payload<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut dev::Payload) -> Self::Future {
        if req.content_type() == FORM_CONTENT_TYPE {
            let form = web::Form::<T>::from_request(req, payload);
            Box::pin(async move { form.await.map(|form| Payload(form.into_inner())) })
        } else {
            let json = web::Json::<T>::from_request(req, payload);
            Box::pin(async move { json.await.map(|json| Payload(json.into_inner())) })
        }
    }
}
