use {
    diesel::{Identifiable, Insertable, Queryable},
    serde::Serialize,
    super::schema::{categories, questions},
};

#[derive(Identifiable, Queryable, Serialize, Clone, PartialEq, Debug)]
#[diesel(table_name = questions)]
pub struct Question {
    pub id: i32,
    #[serde(rename = "category")]
    pub category_id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = questions)]
pub struct NewQuestion<'a> {
    pub category_id: i32,
    pub question: &'a str,
    pub answer: &'a str,
    pub difficulty: i32,
}

#[derive(Identifiable, Queryable, PartialEq, Debug)]
#[diesel(table_name = categories)]
pub struct Category {
    pub id: i32,
    pub name: String,
}
