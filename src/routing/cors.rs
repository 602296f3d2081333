use rocket::{
    fairing::{Fairing, Info, Kind},
    http::Header,
    options,
    Request, Response,
};

pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS response headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Headers",
            "Content-Type,Authorization",
        ));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET,PATCH,POST,DELETE,OPTIONS",
        ));
    }
}

// answers preflight requests for every path; the fairing above attaches
// the actual headers
#[options("/<_..>")]
pub fn preflight() {}

#[cfg(test)]
mod test {
    use {crate::test, rocket::http::Status};

    #[test]
    fn preflight_succeeds_anywhere() {
        let app = test::app();

        let response = app.client.options("/questions").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Origin"),
            Some("*"),
        );

        let response = app.client.options("/quizzes").dispatch();
        assert_eq!(response.status(), Status::Ok);
    }

    #[test]
    fn every_response_carries_the_cors_headers() {
        let app = test::app();

        let response = app.client.get("/categories").dispatch();
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Origin"),
            Some("*"),
        );
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Methods"),
            Some("GET,PATCH,POST,DELETE,OPTIONS"),
        );

        let missing = app.client.get("/questions?page=999").dispatch();
        assert_eq!(
            missing.headers().get_one("Access-Control-Allow-Origin"),
            Some("*"),
        );
    }
}
