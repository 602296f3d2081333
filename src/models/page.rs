use std::ops::Range;

pub const QUESTIONS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u32);

impl Page {
    // page numbers below 1 are coerced to 1 rather than rejected
    pub fn number(number: i64) -> Page {
        Page(number.clamp(1, u32::MAX as i64) as u32)
    }

    pub fn window(self, len: usize) -> Range<usize> {
        let start = (self.0 as usize - 1)
            .saturating_mul(QUESTIONS_PER_PAGE)
            .min(len);
        let end = start.saturating_add(QUESTIONS_PER_PAGE).min(len);
        start..end
    }

    pub fn take<T>(self, items: Vec<T>) -> Vec<T> {
        let window = self.window(items.len());
        items
            .into_iter()
            .skip(window.start)
            .take(window.len())
            .collect()
    }
}

impl Default for Page {
    fn default() -> Page {
        Page(1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn windows_are_half_open_and_clipped() {
        assert_eq!(Page::number(1).window(19), 0..10);
        assert_eq!(Page::number(2).window(19), 10..19);
        assert_eq!(Page::number(3).window(19), 19..19);
        assert_eq!(Page::number(1).window(10), 0..10);
        assert_eq!(Page::number(2).window(10), 10..10);
        assert_eq!(Page::number(1).window(0), 0..0);
    }

    #[test]
    fn page_numbers_coerce_to_at_least_one() {
        assert_eq!(Page::number(0), Page::number(1));
        assert_eq!(Page::number(-7), Page::number(1));
        assert_eq!(Page::default(), Page::number(1));
    }

    #[test]
    fn take_returns_the_requested_window() {
        let items = (1..=19).collect::<Vec<_>>();
        assert_eq!(Page::number(2).take(items.clone()), (11..=19).collect::<Vec<_>>());
        assert_eq!(Page::number(4).take(items), Vec::<i32>::new());
    }

    #[test]
    fn huge_page_numbers_do_not_overflow() {
        assert_eq!(Page::number(i64::MAX).window(19), 19..19);
    }
}
