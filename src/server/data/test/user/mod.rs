use super::*;

mod find_by_username;
mod upsert;
