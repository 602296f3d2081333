use {
    diesel::QueryResult,
    rocket::{delete, get, http::Status, post, serde::json::Json},
    crate::models::{
        db::{models::NewQuestion, DbConn},
        page::Page,
        store::{CategoryStore, QuestionFilter, QuestionStore},
        web::{
            params::{CreateQuestion, QuestionsRequest, SearchRequest},
            payload::{DeletionPayload, QuestionListPayload},
            OrStatus,
        },
    },
};

#[get("/questions?<page>")]
pub async fn all_questions(page: Page, conn: DbConn) -> Result<Json<QuestionListPayload>, Status> {
    let (selection, categories) = conn
        .run(|c| {
            let selection = c.list_questions(&QuestionFilter::all())?;
            let categories = c.list_categories()?;
            QueryResult::Ok((selection, categories))
        })
        .await
        .or_500()?;

    listing_or_404(QuestionListPayload::assemble(selection, page, categories, None))
}

#[post("/questions?<page>", data = "<body>")]
pub async fn create_or_search(
    body: Json<QuestionsRequest>,
    page: Page,
    conn: DbConn,
) -> Result<Json<QuestionListPayload>, Status> {
    match body.into_inner() {
        QuestionsRequest::Search(request) => search_questions(request, page, conn).await,
        QuestionsRequest::Create(new) => create_question(new, page, conn).await,
    }
}

#[delete("/questions/<id>?<page>")]
pub async fn delete_question(
    id: i32,
    page: Page,
    conn: DbConn,
) -> Result<Json<DeletionPayload>, Status> {
    let deleted = conn.run(move |c| c.delete_question(id)).await.or_500()?;
    if !deleted {
        return Err(Status::NotFound);
    }

    let selection = conn
        .run(|c| c.list_questions(&QuestionFilter::all()))
        .await
        .or_500()?;

    Ok(Json(DeletionPayload::assemble(id, selection, page)))
}

async fn search_questions(
    request: SearchRequest,
    page: Page,
    conn: DbConn,
) -> Result<Json<QuestionListPayload>, Status> {
    let (selection, categories) = conn
        .run(move |c| {
            let selection = c.list_questions(&QuestionFilter::matching(&request.search))?;
            let categories = c.list_categories()?;
            QueryResult::Ok((selection, categories))
        })
        .await
        .or_500()?;

    listing_or_404(QuestionListPayload::assemble(selection, page, categories, None))
}

async fn create_question(
    new: CreateQuestion,
    page: Page,
    conn: DbConn,
) -> Result<Json<QuestionListPayload>, Status> {
    conn.run(move |c| {
        c.insert_question(&NewQuestion {
            category_id: new.category,
            question: &new.question,
            answer: &new.answer,
            difficulty: new.difficulty,
        })
    })
    .await
    .or_status(Status::UnprocessableEntity)?;

    let (selection, categories) = conn
        .run(|c| {
            let selection = c.list_questions(&QuestionFilter::all())?;
            let categories = c.list_categories()?;
            QueryResult::Ok((selection, categories))
        })
        .await
        .or_500()?;

    Ok(Json(QuestionListPayload::assemble(selection, page, categories, None)))
}

// an empty page of a listing or search turns into a 404
fn listing_or_404(payload: QuestionListPayload) -> Result<Json<QuestionListPayload>, Status> {
    if payload.is_empty() {
        Err(Status::NotFound)
    } else {
        Ok(Json(payload))
    }
}
