mod post;

pub use post::{Author, NewPost, Post, PostChanges};
