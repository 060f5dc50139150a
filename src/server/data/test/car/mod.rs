use super::*;

mod find_by_id;
mod update_firebase_token;
