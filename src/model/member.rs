use serde::{Deserialize, Serialize};

/// Identity record kept on disk. Only the email is ever persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfile {
    pub email: String,

    #[serde(default)]
    pub email_subscribe: Option<bool>,
}

impl MemberProfile {
    pub fn identity(&self) -> User {
        User {
            email: self.email.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailSubscribeUpdate {
    pub email_subscribe: bool,
}
