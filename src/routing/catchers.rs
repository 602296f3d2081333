use {
    serde::Serialize,
    rocket::{catch, serde::json::Json},
};

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    success: bool,
    error: u16,
    message: &'static str,
}

fn error_body(error: u16, message: &'static str) -> Json<ErrorBody> {
    Json(ErrorBody {
        success: false,
        error,
        message,
    })
}

#[catch(400)]
pub fn bad_request() -> Json<ErrorBody> {
    error_body(400, "bad request")
}

#[catch(404)]
pub fn not_found() -> Json<ErrorBody> {
    error_body(404, "resource not found")
}

#[catch(422)]
pub fn unprocessable() -> Json<ErrorBody> {
    error_body(422, "unprocessable")
}
