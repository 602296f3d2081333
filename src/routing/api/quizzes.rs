use {
    rand::thread_rng,
    rocket::{http::Status, post, serde::json::Json},
    std::collections::HashSet,
    crate::models::{
        db::DbConn,
        quiz,
        store::{CategoryScope, QuestionFilter, QuestionStore},
        web::{params::QuizRequest, payload::QuizPayload, OrStatus},
    },
};

#[post("/quizzes", data = "<request>")]
pub async fn play_quiz(
    request: Json<QuizRequest>,
    conn: DbConn,
) -> Result<Json<QuizPayload>, Status> {
    let QuizRequest {
        previous_questions,
        quiz_category,
    } = request.into_inner();

    let scope = CategoryScope::from_id(quiz_category.id);
    let seen = previous_questions.iter().copied().collect::<HashSet<_>>();

    let filter = QuestionFilter::scoped(scope).excluding(&previous_questions);
    let candidates = conn.run(move |c| c.list_questions(&filter)).await.or_500()?;

    Ok(Json(QuizPayload::from(quiz::next_question(
        candidates,
        scope,
        &seen,
        &mut thread_rng(),
    ))))
}
