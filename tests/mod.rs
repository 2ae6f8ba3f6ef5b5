pub mod lens;
pub mod step;
pub mod validator;
