use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use rand::{distributions::Alphanumeric, Rng};
use validator::Validate;

use crate::api::error;

/// Length of the opaque identifier embedded in capture links.
pub const LINK_ID_LEN: usize = 8;

pub fn generate_link_id() -> String {
    rand::thread_rng().sample_iter(&Alphanumeric).take(LINK_ID_LEN).map(char::from).collect()
}

/// Keep staged filenames shell- and URL-safe. Everything outside
/// `[A-Za-z0-9._-]` collapses to an underscore.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') { c } else { '_' })
        .collect()
}

/// Client address as the original recorded it: first entry of
/// X-Forwarded-For when present, otherwise the peer address.
pub fn client_ip(req: &HttpRequest) -> Option<String> {
    if let Some(forwarded) = req.headers().get("X-Forwarded-For").and_then(|h| h.to_str().ok()) {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return Some(first.to_string());
            }
        }
    }
    req.peer_addr().map(|addr| addr.ip().to_string())
}

pub fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub struct ValidatedJson<T>(pub T);

impl<T> FromRequest for ValidatedJson<T>
where
    T: Validate + serde::de::DeserializeOwned + 'static,
{
    type Error = error::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(
        req: &actix_web::HttpRequest,
        payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        let fut = web::Json::<T>::from_request(req, payload);

        Box::pin(async move {
            let json = fut.await.map_err(|e| error::Error::BadRequest(e.to_string().into()))?;
            let model = json.into_inner();
            model.validate().map_err(|e| error::Error::BadRequest(e.to_string().into()))?;
            Ok(ValidatedJson(model))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn link_ids_are_short_and_alphanumeric() {
        let id = generate_link_id();
        assert_eq!(id.len(), LINK_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(generate_link_id(), generate_link_id());
    }

    #[test]
    fn sanitize_replaces_unsafe_characters() {
        assert_eq!(sanitize_filename("discrete photo (1).jpg"), "discrete_photo__1_.jpg");
        assert_eq!(sanitize_filename("..\\evil/path.jpg"), ".._evil_path.jpg");
        assert_eq!(sanitize_filename("ok-name_01.jpeg"), "ok-name_01.jpeg");
    }

    #[test]
    fn forwarded_header_takes_precedence() {
        let req = TestRequest::default()
            .insert_header(("X-Forwarded-For", "203.0.113.9, 10.0.0.1"))
            .to_http_request();
        assert_eq!(client_ip(&req).as_deref(), Some("203.0.113.9"));
    }

    #[test]
    fn missing_forwarded_header_falls_back_to_peer() {
        let req = TestRequest::default()
            .peer_addr("192.0.2.4:51234".parse().unwrap())
            .to_http_request();
        assert_eq!(client_ip(&req).as_deref(), Some("192.0.2.4"));
    }

    #[test]
    fn html_escape_neutralizes_markup() {
        assert_eq!(html_escape("<img src=x>"), "&lt;img src=x&gt;");
        assert_eq!(html_escape("a \"b\" & 'c'"), "a &quot;b&quot; &amp; &#39;c&#39;");
    }
}
