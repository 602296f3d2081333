use {
    serde::Serialize,
    std::collections::BTreeMap,
    crate::models::{
        db::models::{Category, Question},
        page::Page,
        quiz::NextQuestion,
    },
};

// serialized as a JSON object mapping category ids to names
pub type CategoryMap = BTreeMap<i32, String>;

fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|category| (category.id, category.name))
        .collect()
}

#[derive(Serialize, Debug)]
pub struct CategoriesPayload {
    success: bool,
    categories: CategoryMap,
}

impl CategoriesPayload {
    pub fn new(categories: Vec<Category>) -> CategoriesPayload {
        CategoriesPayload {
            success: true,
            categories: category_map(categories),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct QuestionListPayload {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    // null for unscoped listings and searches
    current_category: Option<String>,
    categories: CategoryMap,
}

impl QuestionListPayload {
    // total_questions counts the whole selection, not just the page
    pub fn assemble(
        selection: Vec<Question>,
        page: Page,
        categories: Vec<Category>,
        current_category: Option<String>,
    ) -> QuestionListPayload {
        QuestionListPayload {
            success: true,
            total_questions: selection.len(),
            questions: page.take(selection),
            current_category,
            categories: category_map(categories),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[derive(Serialize, Debug)]
pub struct DeletionPayload {
    success: bool,
    deleted: i32,
    questions: Vec<Question>,
    total_questions: usize,
}

impl DeletionPayload {
    pub fn assemble(deleted: i32, selection: Vec<Question>, page: Page) -> DeletionPayload {
        DeletionPayload {
            success: true,
            deleted,
            total_questions: selection.len(),
            questions: page.take(selection),
        }
    }
}

// an exhausted quiz is a success without a question, not an error
#[derive(Serialize, Debug)]
pub struct QuizPayload {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    question: Option<Question>,
}

impl From<NextQuestion> for QuizPayload {
    fn from(next: NextQuestion) -> QuizPayload {
        QuizPayload {
            success: true,
            question: match next {
                NextQuestion::Question(question) => Some(question),
                NextQuestion::Exhausted => None,
            },
        }
    }
}
