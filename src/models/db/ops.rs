use {
    diesel::{delete, insert_into, prelude::*, sqlite::Sqlite, QueryResult},
    crate::models::{
        db::{
            models::{Category, NewQuestion, Question},
            schema, Connection,
        },
        store::{CategoryScope, CategoryStore, QuestionFilter, QuestionStore},
    },
};

impl QuestionStore for Connection {
    fn list_questions(&mut self, filter: &QuestionFilter) -> QueryResult<Vec<Question>> {
        use schema::questions::dsl::*;

        let mut query = questions.order(id.asc()).into_boxed::<Sqlite>();

        if let CategoryScope::Only(category) = filter.scope {
            query = query.filter(category_id.eq(category));
        }
        if let Some(term) = &filter.search {
            query = query.filter(question.like(term.like_pattern()));
        }
        if !filter.exclude.is_empty() {
            query = query.filter(id.ne_all(filter.exclude.clone()));
        }

        query.load(self)
    }

    fn insert_question(&mut self, new: &NewQuestion<'_>) -> QueryResult<i32> {
        use schema::questions::dsl::*;

        insert_into(questions)
            .values(new)
            .returning(id)
            .get_result(self)
    }

    fn delete_question(&mut self, question_id: i32) -> QueryResult<bool> {
        use schema::questions::dsl::*;

        delete(questions.find(question_id))
            .execute(self)
            .map(|deleted| deleted > 0)
    }
}

impl CategoryStore for Connection {
    fn list_categories(&mut self) -> QueryResult<Vec<Category>> {
        use schema::categories::dsl::*;

        categories.order(id.asc()).load(self)
    }
}
