use crate::{
    model::user::UserDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, user::UserError, AppError},
        model::user::{Credentials, UserPatch},
        service::user::UserService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod get_by_id;
mod list_all;
mod login;
mod update;

fn new_user(name: &str, document_id: &str) -> UserDto {
    UserDto {
        id: None,
        name: name.to_string(),
        document_id: document_id.to_string(),
    }
}
