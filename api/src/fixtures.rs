//! Randomized post generation, used for startup seeding and test fixtures.

use crate::models::{Author, NewPost};
use rand::{Rng, seq::SliceRandom};

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Dennis", "Edsger", "Frances", "Grace", "Ken", "Linus", "Margaret",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Turing", "Liskov", "Ritchie", "Dijkstra", "Allen", "Hopper", "Thompson",
    "Torvalds", "Hamilton",
];

const WORDS: &[&str] = &[
    "borrow", "checker", "lifetime", "trait", "async", "future", "tokio", "router", "handler",
    "store", "document", "schema", "index", "query", "shard", "latency", "buffer", "socket",
    "compile", "release",
];

fn sentence<R: Rng>(rng: &mut R, min: usize, max: usize) -> String {
    let len = rng.gen_range(min..=max);
    let mut words = Vec::with_capacity(len);
    for _ in 0..len {
        words.extend(WORDS.choose(rng).copied());
    }
    words.join(" ")
}

pub fn random_post<R: Rng>(rng: &mut R) -> NewPost {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Jane");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Doe");

    NewPost {
        title: sentence(rng, 2, 6),
        content: sentence(rng, 20, 60),
        author: Author::new(first, last),
    }
}

pub fn random_posts(count: usize) -> Vec<NewPost> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| random_post(&mut rng)).collect()
}
