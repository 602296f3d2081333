use {
    diesel::QueryResult,
    rocket::{get, http::Status, serde::json::Json},
    crate::models::{
        db::DbConn,
        page::Page,
        store::{CategoryScope, CategoryStore, QuestionFilter, QuestionStore},
        web::{
            payload::{CategoriesPayload, QuestionListPayload},
            OrStatus,
        },
    },
};

#[get("/categories")]
pub async fn all_categories(conn: DbConn) -> Result<Json<CategoriesPayload>, Status> {
    conn.run(|c| c.list_categories())
        .await
        .map(CategoriesPayload::new)
        .map(Json)
        .or_500()
}

// an unknown or empty category is an empty listing, not a 404
#[get("/categories/<id>/questions?<page>")]
pub async fn category_questions(
    id: i32,
    page: Page,
    conn: DbConn,
) -> Result<Json<QuestionListPayload>, Status> {
    let (selection, categories) = conn
        .run(move |c| {
            let selection = c.list_questions(&QuestionFilter::scoped(CategoryScope::Only(id)))?;
            let categories = c.list_categories()?;
            QueryResult::Ok((selection, categories))
        })
        .await
        .or_500()?;

    let current_category = categories
        .iter()
        .find(|category| category.id == id)
        .map(|category| category.name.clone());

    Ok(Json(QuestionListPayload::assemble(
        selection,
        page,
        categories,
        current_category,
    )))
}
