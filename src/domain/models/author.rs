use crate::configuration::Config;
use crate::configuration::ConfigKey;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Crumpet,
    Desk,
}

impl ToString for Author {
    fn to_string(&self) -> String {
        match self {
            Author::User => return Config::get(ConfigKey::Username),
            Author::Crumpet => return String::from("Crumpet"),
            Author::Desk => return String::from("Desk"),
        }
    }
}
