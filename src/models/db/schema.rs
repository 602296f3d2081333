diesel::table! {
    categories (id) {
        id -> Integer,
        name -> Text,
    }
}

diesel::table! {
    questions (id) {
        id -> Integer,
        category_id -> Integer,
        question -> Text,
        answer -> Text,
        difficulty -> Integer,
    }
}

diesel::joinable!(questions -> categories (category_id));

diesel::allow_tables_to_appear_in_same_query!(categories, questions);
