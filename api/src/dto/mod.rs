mod requests;
mod responses;

pub use requests::{AuthorPatch, AuthorRequest, CreatePostRequest, UpdatePostRequest};
pub use responses::PostResponse;
