use actix_web::HttpResponse;
use std::borrow::Cow;

/// Success bodies carry `"success": true` plus the payload fields flattened
/// at the top level, matching the JSON shape the capture script and the
/// operator pages expect.
#[derive(serde::Serialize)]
pub struct SuccessData<T: serde::Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Cow<'static, str>>,
    #[serde(flatten)]
    pub data: Option<T>,
}

pub struct Success<T: serde::Serialize> {
    pub status: actix_web::http::StatusCode,
    pub body: SuccessData<T>,
}

impl<T: serde::Serialize> Success<T> {
    pub fn ok(data: Option<T>) -> Self {
        Self {
            status: actix_web::http::StatusCode::OK,
            body: SuccessData { success: true, data, message: None },
        }
    }

    pub fn message<M>(mut self, msg: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        self.body.message = Some(msg.into());
        self
    }
}

impl<T: serde::Serialize> actix_web::Responder for Success<T> {
    type Body = actix_web::body::BoxBody;

    fn respond_to(self, _req: &actix_web::HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::build(self.status).json(self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Serialize)]
    struct Payload {
        link_id: &'static str,
    }

    #[test]
    fn payload_fields_flatten_next_to_success_flag() {
        let body = SuccessData { success: true, message: None, data: Some(Payload { link_id: "ab12cd34" }) };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["link_id"], "ab12cd34");
        assert!(json.get("message").is_none());
        assert!(json.get("data").is_none());
    }

    #[test]
    fn empty_payload_still_reports_success() {
        let body: SuccessData<Payload> = SuccessData { success: true, message: Some("deleted".into()), data: None };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "deleted");
    }
}
