use {
    serde::Deserialize,
    rocket::form::{self, FromFormField, ValueField},
    crate::models::page::Page,
};

// a ?page= value that isn't an integer falls back to the first page,
// and so does leaving it out entirely
impl <'v> FromFormField<'v> for Page {
    fn from_value(field: ValueField<'v>) -> form::Result<'v, Self> {
        Ok(field.value.parse().map(Page::number).unwrap_or_default())
    }

    fn default() -> Option<Self> {
        Some(Page::number(1))
    }
}

#[derive(Deserialize, Debug)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i32>,
    pub quiz_category: QuizCategory,
}

#[derive(Deserialize, Debug)]
pub struct QuizCategory {
    pub id: i32,
}

// a body carrying a "search" field is a search even if it also carries
// the creation fields
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum QuestionsRequest {
    Search(SearchRequest),
    Create(CreateQuestion),
}

#[derive(Deserialize, Debug)]
pub struct SearchRequest {
    pub search: String,
}

#[derive(Deserialize, Debug)]
pub struct CreateQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn the_search_field_wins_the_dispatch() {
        let body = r#"{"search": "cup", "question": "q", "answer": "a", "category": 1, "difficulty": 2}"#;

        match serde_json::from_str::<QuestionsRequest>(body).unwrap() {
            QuestionsRequest::Search(request) => assert_eq!(request.search, "cup"),
            QuestionsRequest::Create(_) => panic!("should have dispatched to search"),
        }
    }

    #[test]
    fn creation_fields_alone_are_a_creation() {
        let body = r#"{"question": "q", "answer": "a", "category": 1, "difficulty": 2}"#;

        match serde_json::from_str::<QuestionsRequest>(body).unwrap() {
            QuestionsRequest::Create(new) => {
                assert_eq!(new.question, "q");
                assert_eq!(new.category, 1);
            }
            QuestionsRequest::Search(_) => panic!("should have dispatched to create"),
        }
    }

    #[test]
    fn neither_shape_is_an_error() {
        assert!(serde_json::from_str::<QuestionsRequest>("{}").is_err());
        assert!(serde_json::from_str::<QuestionsRequest>(r#"{"search": 3}"#).is_err());
    }

    #[test]
    fn absent_page_parameter_means_the_first_page() {
        assert_eq!(<Page as FromFormField>::default(), Some(Page::number(1)));
    }

    #[test]
    fn previous_questions_may_be_left_out() {
        let request =
            serde_json::from_str::<QuizRequest>(r#"{"quiz_category": {"id": 3}}"#).unwrap();

        assert!(request.previous_questions.is_empty());
        assert_eq!(request.quiz_category.id, 3);
    }
}
