use {
    rand::Rng,
    std::collections::HashSet,
    crate::models::{db::models::Question, store::CategoryScope},
};

#[derive(Debug, PartialEq)]
pub enum NextQuestion {
    Question(Question),
    Exhausted,
}

// draws uniformly from the candidates the scope admits and the player
// hasn't seen; scope and seen are re-checked here even when the store
// pre-filtered
pub fn next_question<R: Rng + ?Sized>(
    candidates: Vec<Question>,
    scope: CategoryScope,
    seen: &HashSet<i32>,
    rng: &mut R,
) -> NextQuestion {
    let mut eligible = candidates
        .into_iter()
        .filter(|question| scope.admits(question) && !seen.contains(&question.id))
        .collect::<Vec<_>>();

    match eligible.len() {
        0 => NextQuestion::Exhausted,
        len => NextQuestion::Question(eligible.swap_remove(rng.gen_range(0..len))),
    }
}
