//! Account credentials: nickname, mail address and passwords

mod mail_address;
mod nickname;
mod password;

pub use mail_address::{MailAddress, MailAddressError};
pub use nickname::{Nickname, NicknameError};
pub use password::{Argon2Hasher, HashedPassword, PasswordError, PlainPassword};
