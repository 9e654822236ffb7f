//! Authentication: register, login, bcrypt password hashing.

mod handlers;
pub mod password;
mod service;

pub use handlers::{
    login, register, AuthRejection, CredentialsRequest, LoginResponse, RegisterResponse,
};
pub use service::{AuthService, LoginSuccess, CREDENTIALS_REQUIRED};
