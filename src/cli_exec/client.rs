use pickdong::session::SESSION_EXPIRED_MESSAGE;

use super::*;

pub(super) fn with_client<F>(config: &ClientConfig, f: F) -> Result<()>
where
    F: FnOnce(&Client) -> Result<()>,
{
    let client = Client::open(config.clone())?;
    let res = f(&client);
    if res.is_err() && client.session.take_expired() {
        eprintln!("{}", SESSION_EXPIRED_MESSAGE);
    }
    res
}
