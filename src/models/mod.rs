mod user;

pub use user::{Address, NewAddress, NewUser, NewUserData, Role, User, UserData};
