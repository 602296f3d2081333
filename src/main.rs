mod models;
mod routing;

use rocket::{
    catchers,
    fairing::AdHoc,
    figment::Figment,
    launch, routes,
    Build, Rocket,
};

pub fn build(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .mount("/", routes![
            routing::api::all_categories,
            routing::api::category_questions,
            routing::api::all_questions,
            routing::api::create_or_search,
            routing::api::delete_question,
            routing::api::play_quiz,
            routing::cors::preflight
        ])
        .register("/", catchers![
            routing::catchers::bad_request,
            routing::catchers::not_found,
            routing::catchers::unprocessable
        ])
        .attach(routing::cors::Cors)
        .attach(models::db::DbConn::fairing())
        .attach(AdHoc::try_on_ignite("database schema", models::db::init_schema))
}

fn figment() -> Figment {
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "trivia.sqlite".to_string());

    rocket::Config::figment().merge(("databases.trivia_db.url", database_url))
}

#[launch]
fn rocket() -> _ {
    dotenvy::dotenv().ok();

    build(figment())
}
