use {
    diesel::QueryResult,
    crate::models::db::models::{Category, NewQuestion, Question},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScope {
    All,
    Only(i32),
}

impl CategoryScope {
    // id 0 is the wire sentinel for "all categories"
    pub fn from_id(id: i32) -> CategoryScope {
        match id {
            0 => CategoryScope::All,
            id => CategoryScope::Only(id),
        }
    }

    pub fn admits(self, question: &Question) -> bool {
        match self {
            CategoryScope::All => true,
            CategoryScope::Only(id) => question.category_id == id,
        }
    }
}

impl Default for CategoryScope {
    fn default() -> CategoryScope {
        CategoryScope::All
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    // an empty term means "no search filter", not "match everything"
    pub fn new(raw: &str) -> Option<SearchTerm> {
        match raw {
            "" => None,
            term => Some(SearchTerm(term.to_owned())),
        }
    }

    pub fn like_pattern(&self) -> String {
        format!("%{}%", self.0)
    }

    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0.to_lowercase())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionFilter {
    pub scope: CategoryScope,
    pub search: Option<SearchTerm>,
    pub exclude: Vec<i32>,
}

impl QuestionFilter {
    pub fn all() -> QuestionFilter {
        <_>::default()
    }

    pub fn scoped(scope: CategoryScope) -> QuestionFilter {
        QuestionFilter {
            scope,
            ..<_>::default()
        }
    }

    pub fn matching(term: &str) -> QuestionFilter {
        QuestionFilter {
            search: SearchTerm::new(term),
            ..<_>::default()
        }
    }

    pub fn excluding(mut self, ids: &[i32]) -> QuestionFilter {
        self.exclude = ids.to_vec();
        self
    }
}

pub trait QuestionStore {
    fn list_questions(&mut self, filter: &QuestionFilter) -> QueryResult<Vec<Question>>;

    fn insert_question(&mut self, new: &NewQuestion<'_>) -> QueryResult<i32>;

    fn delete_question(&mut self, id: i32) -> QueryResult<bool>;
}

pub trait CategoryStore {
    fn list_categories(&mut self) -> QueryResult<Vec<Category>>;
}
