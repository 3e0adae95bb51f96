use super::TourId;

/// Surface the presentation layer should show next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    MyPage,
    SessionExpired,
    Event(TourId),
}

impl Route {
    /// Web path of the same surface, as used in links and redirects.
    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::MyPage => "/mypage".to_string(),
            Route::SessionExpired => "/auth/session-expired".to_string(),
            Route::Event(id) => format!("/event/{}", id),
        }
    }
}
