#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! HTTP collaborators: the chat/embedding provider and the hosted
//! vector index client. Calls are issued once and never retried; a
//! failure surfaces to the command layer, which renders it as
//! "no data available".

mod openai;
mod pinecone;

pub use openai::OpenAiProvider;
pub use pinecone::PineconeIndex;
