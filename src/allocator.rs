use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ARTICLE_FLOOR: u32 = 14_000;
const ARTICLE_CEIL: u32 = 17_000;
const DRIFT: u32 = 20;

/// Hands out article numbers for catalog rows that carry none, drifting at
/// most 20 from the previously produced value and clamped to
/// [14000, 17000]. Call order matters; allocation is deliberately
/// randomized in production, so tests construct it with a seeded RNG.
pub struct ArticleAllocator<R: Rng> {
    rng: R,
    last_article: u32,
}

impl ArticleAllocator<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl<R: Rng> ArticleAllocator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            last_article: ARTICLE_FLOOR,
        }
    }

    pub fn allocate(&mut self) -> u32 {
        let lo = ARTICLE_FLOOR.max(self.last_article.saturating_sub(DRIFT));
        let hi = ARTICLE_CEIL.min(self.last_article + DRIFT);
        let article = self.rng.random_range(lo..=hi);
        self.last_article = article;
        article
    }
}
