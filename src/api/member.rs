use crate::model::{EmailSubscribeUpdate, MemberProfile};

use super::{ApiClient, ApiError};

impl ApiClient {
    pub fn get_member_profile(&self) -> Result<MemberProfile, ApiError> {
        self.get_json("/api/member", "get member profile")
    }

    pub fn update_email_subscribe(
        &self,
        email_subscribe: bool,
    ) -> Result<EmailSubscribeUpdate, ApiError> {
        let label = "update email subscribe";
        let resp = self.send(
            self.client
                .patch(self.url("/api/member/email-subscribe"))
                .json(&EmailSubscribeUpdate { email_subscribe }),
            label,
        )?;
        resp.json().map_err(|e| ApiError::decode(label, e))
    }

    pub fn delete_member(&self) -> Result<(), ApiError> {
        let _ = self.send(self.client.delete(self.url("/api/member")), "delete member")?;
        Ok(())
    }
}
