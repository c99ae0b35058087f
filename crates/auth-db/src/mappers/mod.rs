//! Model to entity mappers
//!
//! `From<Model> for Entity` turns database rows into domain objects.

mod user;
