//! Entity <-> Model mappers

mod posting;
mod profile;
