//! Integration tests exercising the public library surface.

mod evaluation;
mod growth;
