//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions turning database rows into domain
//! objects. Inserts bind entity fields directly in the repositories.

mod like;
mod post;
mod user;
